//! Stage 13: era-based tiebreak (spec.md §4.6).
//!
//! Not present in the original rewrite at all — its orchestrator never
//! wires a tiebreak stage in, even though `enums.py`'s `ERA_PRIORITY` table
//! only makes sense if something consumes it. Authored fresh here per
//! spec.md's exact rule: among a near-tied top pair, prefer the
//! lower-`ERA_PRIORITY` (more modern) encoding, at most one swap, and never
//! touch a zero-confidence pair.

use crate::enums::era_priority;
use crate::registry;

use super::Candidate;

/// Fraction of the leader's confidence the runner-up must reach to be
/// considered "close enough" to contest on era alone.
const CLOSE_ENOUGH_RATIO: f32 = 0.90;

/// Applies at most one swap to `ranked` (sorted descending by confidence)
/// if its top two entries are close and the runner-up belongs to a
/// strictly more modern era.
pub fn apply(mut ranked: Vec<Candidate>) -> Vec<Candidate> {
    if ranked.len() < 2 {
        return ranked;
    }
    let top_confidence = ranked[0].confidence;
    let second_confidence = ranked[1].confidence;

    if top_confidence == 0.0 && second_confidence == 0.0 {
        return ranked;
    }
    if second_confidence < top_confidence * CLOSE_ENOUGH_RATIO {
        return ranked;
    }

    let top_era = registry::lookup(&ranked[0].encoding).map(|e| e.era);
    let second_era = registry::lookup(&ranked[1].encoding).map(|e| e.era);

    if let (Some(top_era), Some(second_era)) = (top_era, second_era) {
        if era_priority(second_era) < era_priority(top_era) {
            ranked.swap(0, 1);
        }
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(name: &str, confidence: f32) -> Candidate {
        Candidate {
            encoding: name.to_string(),
            confidence,
            language: None,
        }
    }

    #[test]
    fn swaps_when_runner_up_is_more_modern_and_close() {
        let ranked = vec![candidate("cp037", 0.80), candidate("windows-1252", 0.78)];
        let result = apply(ranked);
        assert_eq!(result[0].encoding, "windows-1252");
    }

    #[test]
    fn does_not_swap_when_gap_is_large() {
        let ranked = vec![candidate("cp037", 0.95), candidate("windows-1252", 0.10)];
        let result = apply(ranked);
        assert_eq!(result[0].encoding, "cp037");
    }

    #[test]
    fn does_not_swap_when_top_is_already_more_modern() {
        let ranked = vec![candidate("windows-1252", 0.80), candidate("cp037", 0.78)];
        let result = apply(ranked);
        assert_eq!(result[0].encoding, "windows-1252");
    }

    #[test]
    fn never_swaps_two_zero_confidence_candidates() {
        let ranked = vec![candidate("cp037", 0.0), candidate("windows-1252", 0.0)];
        let result = apply(ranked);
        assert_eq!(result[0].encoding, "cp037");
    }

    #[test]
    fn single_candidate_is_left_alone() {
        let ranked = vec![candidate("utf-8", 0.5)];
        let result = apply(ranked);
        assert_eq!(result.len(), 1);
    }
}
