//! Benchmarks `detect` across many small-to-medium buffers spanning
//! several eras, approximating a batch-processing workload (log ingestion,
//! bulk file scanning) rather than a single huge document.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chardet_rs::detect;

fn sample_corpus() -> Vec<Vec<u8>> {
    vec![
        b"plain ascii line of text".to_vec(),
        "café au lait, naïve façade".as_bytes().to_vec(),
        {
            let mut v = vec![0xEF, 0xBB, 0xBF];
            v.extend_from_slice(b"utf-8 with BOM");
            v
        },
        vec![0x82, 0xA0, 0x82, 0xA2, 0x82, 0xA4, 0x82, 0xA6],
        vec![0xC1, 0x85, 0x93, 0x93, 0x96], // EBCDIC-ish bytes
        "Привет, мир".as_bytes().to_vec(),
    ]
}

fn bench_large_datasets(c: &mut Criterion) {
    let corpus = sample_corpus();
    c.bench_function("large_datasets/mixed_corpus", |b| {
        b.iter(|| {
            for doc in &corpus {
                black_box(detect(black_box(doc), None).ok());
            }
        })
    });
}

criterion_group!(benches, bench_large_datasets);
criterion_main!(benches);
