//! Stage wiring (spec.md §4, full pipeline).
//!
//! Grounded on the original rewrite's `pipeline/orchestrator.py`, with one
//! deliberate deviation: that file never actually calls
//! `resolve_confusion_groups` or anything resembling an era tiebreak, even
//! though both exist elsewhere in the source tree. Treating that as a gap
//! in the original rather than a behaviour to reproduce, this orchestrator
//! wires [`super::confusion`] and [`super::era_tiebreak`] in explicitly, as
//! spec.md §4.5/§4.6 require.

use ordered_float::OrderedFloat;

use crate::consts::STRUCTURAL_CONFIDENCE_THRESHOLD;
use crate::enums::EncodingEra;
use crate::equivalences;
use crate::models::ModelSet;
use crate::registry;

use super::confusion::{self, ConfusionSet};
use super::{Candidate, DetectionResult};

/// Deterministic stages that, on a match, end detection immediately
/// without consulting statistics at all.
fn run_deterministic_stages(data: &[u8]) -> Option<DetectionResult> {
    super::bom::detect(data)
        .or_else(|| super::utf1632::detect(data))
        .or_else(|| super::escape::detect(data))
        .or_else(|| super::binary::detect(data))
        .or_else(|| super::markup::detect(data))
        .or_else(|| super::ascii::detect(data))
        .or_else(|| super::utf8::detect(data))
}

/// Ranks every surviving candidate by the best evidence available for it:
/// structural score when one applies and clears the threshold outright,
/// otherwise bigram statistical score, otherwise a small constant so a
/// byte-valid-but-unmodeled encoding still ranks above nothing at all.
fn rank_candidates(data: &[u8], era_mask: EncodingEra, models: &ModelSet) -> Vec<Candidate> {
    let candidates = registry::get_candidates(era_mask);
    let survivors = super::validity::filter_candidates(data, &candidates);

    let mut ranked: Vec<Candidate> = survivors
        .iter()
        .map(|c| {
            if c.is_multibyte {
                if let Some(score) = super::structural::compute_structural_score(data, c.name) {
                    let diversity = super::structural::compute_lead_byte_diversity(data, c.name);
                    // A single recurring lead byte is the signature of a false
                    // positive (e.g. accented Latin text coincidentally
                    // matching a CJK lead/trail grammar); require at least
                    // two distinct leads before trusting the pair score.
                    if diversity >= 2 {
                        let coverage = super::structural::compute_multibyte_byte_coverage(data, c.name).unwrap_or(score);
                        let confidence = (score + coverage) / 2.0;
                        return Candidate {
                            encoding: c.name.to_string(),
                            confidence,
                            language: c.languages.first().map(|s| s.to_string()),
                        };
                    }
                }
            }
            let names = [c.name];
            let statistical = super::statistical::rank(data, &names, models);
            let confidence = statistical.first().map(|cand| cand.confidence).unwrap_or(0.05);
            Candidate {
                encoding: c.name.to_string(),
                confidence,
                language: c.languages.first().map(|s| s.to_string()),
            }
        })
        .collect();

    ranked.sort_by_key(|c| std::cmp::Reverse(OrderedFloat(c.confidence)));
    ranked
}

/// Runs the full pipeline and returns every surviving candidate, most
/// confident first (used by the public `detect_all`).
pub fn run_all(
    data: &[u8],
    era_mask: EncodingEra,
    models: &ModelSet,
    confusion: &ConfusionSet,
) -> Vec<DetectionResult> {
    if let Some(terminal) = run_deterministic_stages(data) {
        return vec![terminal];
    }
    if data.is_empty() {
        return vec![];
    }

    let mut ranked = rank_candidates(data, era_mask, models);

    if ranked.len() >= 2 && ranked[0].confidence < STRUCTURAL_CONFIDENCE_THRESHOLD {
        if let Some(swap) = confusion::resolve(
            data,
            &ranked[0].encoding,
            &ranked[1].encoding,
            confusion,
            models,
            confusion::Strategy::Hybrid,
        ) {
            if !swap {
                ranked.swap(0, 1);
            }
        }
    }

    let ranked = super::era_tiebreak::apply(ranked);

    ranked
        .into_iter()
        .map(|c| {
            let renamed = equivalences::preferred_name(&c.encoding);
            DetectionResult::new(renamed, c.confidence, c.language)
        })
        .collect()
}

/// Runs the full pipeline and returns only the single best result (used by
/// the public `detect`).
pub fn run(data: &[u8], era_mask: EncodingEra, models: &ModelSet, confusion: &ConfusionSet) -> DetectionResult {
    run_all(data, era_mask, models, confusion)
        .into_iter()
        .next()
        .unwrap_or_else(DetectionResult::none)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_models() -> ModelSet {
        ModelSet::default()
    }

    fn empty_confusion() -> ConfusionSet {
        ConfusionSet::default()
    }

    #[test]
    fn detects_bom_before_anything_else() {
        let data = [0xEF, 0xBB, 0xBF, b'h', b'i'];
        let result = run(&data, EncodingEra::ALL, &empty_models(), &empty_confusion());
        assert_eq!(result.encoding.as_deref(), Some("utf-8-sig"));
        assert_eq!(result.confidence, 1.0);
    }

    #[test]
    fn detects_ascii() {
        let result = run(b"hello world", EncodingEra::ALL, &empty_models(), &empty_confusion());
        assert_eq!(result.encoding.as_deref(), Some("ascii"));
    }

    #[test]
    fn detects_utf8_multibyte() {
        let result = run("café".as_bytes(), EncodingEra::ALL, &empty_models(), &empty_confusion());
        assert_eq!(result.encoding.as_deref(), Some("utf-8"));
    }

    #[test]
    fn empty_input_yields_no_detection() {
        let result = run(b"", EncodingEra::ALL, &empty_models(), &empty_confusion());
        assert!(result.encoding.is_none());
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn rejects_binary_magic() {
        let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
        data.extend_from_slice(&[1, 2, 3, 4]);
        let result = run(&data, EncodingEra::ALL, &empty_models(), &empty_confusion());
        assert!(result.encoding.is_none());
    }
}
