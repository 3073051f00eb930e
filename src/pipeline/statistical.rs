//! Stage 11: bigram statistical scoring (spec.md §4.4).
//!
//! Ranks surviving single-byte candidates (and any multi-byte candidate
//! that didn't already clear the structural threshold) by how closely
//! their byte-bigram distribution matches a trained language model.

use ordered_float::OrderedFloat;

use crate::models::ModelSet;

use super::Candidate;

/// Scores every candidate in `names` against `data`, returning only those
/// with a loaded model, sorted by descending score. Candidates with no
/// trained model are left for the caller to rank by other means (spec.md
/// §4.4: unmodeled encodings fall back to structural/validity evidence
/// alone).
pub fn rank(data: &[u8], names: &[&str], models: &ModelSet) -> Vec<Candidate> {
    let mut scored: Vec<Candidate> = names
        .iter()
        .filter_map(|name| {
            crate::models::score_encoding(data, name, models).map(|score| Candidate {
                encoding: name.to_string(),
                confidence: score,
                language: None,
            })
        })
        .collect();
    scored.sort_by_key(|c| std::cmp::Reverse(OrderedFloat(c.confidence)));
    scored
}

#[cfg(test)]
mod tests {
    use super::*;

    fn models_with(encoding: &str, table: &[((u8, u8), u8)]) -> ModelSet {
        let mut out = Vec::new();
        out.extend_from_slice(&1u32.to_be_bytes());
        out.extend_from_slice(&(encoding.len() as u32).to_be_bytes());
        out.extend_from_slice(encoding.as_bytes());
        out.extend_from_slice(&(table.len() as u32).to_be_bytes());
        for &((a, b), w) in table {
            out.push(a);
            out.push(b);
            out.push(w);
        }
        ModelSet::from_bytes(&out).unwrap()
    }

    #[test]
    fn ranks_candidates_by_score_descending() {
        let models = models_with("koi8-r", &[((0xC0, 0xC1), 255)]);
        let data = [0xC0, 0xC1, 0xC0, 0xC1];
        let ranked = rank(&data, &["koi8-r"], &models);
        assert_eq!(ranked[0].encoding, "koi8-r");
        assert!(ranked[0].confidence > 0.0);
    }

    #[test]
    fn unmodeled_candidates_are_omitted() {
        let models = models_with("koi8-r", &[((0xC0, 0xC1), 255)]);
        let ranked = rank(b"xx", &["utf-8"], &models);
        assert!(ranked.is_empty());
    }
}
