//! Benchmarks detection throughput over a single large buffer of each of a
//! handful of representative encodings.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chardet_rs::detect;

fn repeat_to(bytes: &[u8], target_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(target_len);
    while out.len() < target_len {
        out.extend_from_slice(bytes);
    }
    out.truncate(target_len);
    out
}

fn bench_large_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("large_payload");

    let ascii = repeat_to(b"The quick brown fox jumps over the lazy dog. ", 200_000);
    group.bench_function("ascii_200k", |b| {
        b.iter(|| detect(black_box(&ascii), None))
    });

    let utf8 = repeat_to("La cigüeña canta en el jardín. ".as_bytes(), 200_000);
    group.bench_function("utf8_accented_200k", |b| {
        b.iter(|| detect(black_box(&utf8), None))
    });

    let sjis = repeat_to(&[0x82, 0xA0, 0x82, 0xA2, 0x82, 0xA4], 200_000);
    group.bench_function("shift_jis_200k", |b| {
        b.iter(|| detect(black_box(&sjis), None))
    });

    group.finish();
}

criterion_group!(benches, bench_large_payload);
criterion_main!(benches);
