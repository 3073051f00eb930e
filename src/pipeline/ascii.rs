//! Stage 6: pure-ASCII short-circuit (spec.md §4.1).
//!
//! If every byte is in `0x00..=0x7F`, the buffer is simultaneously valid
//! ASCII, UTF-8, and Latin-1 — reporting ASCII is both correct and the
//! cheapest possible answer, so later stages never run.

use super::DetectionResult;
use crate::consts::DETERMINISTIC_CONFIDENCE;

pub fn detect(data: &[u8]) -> Option<DetectionResult> {
    if data.is_empty() {
        return None;
    }
    if data.iter().all(|&b| b < 0x80) {
        return Some(DetectionResult::new("ascii", DETERMINISTIC_CONFIDENCE, None));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_ascii_matches() {
        assert_eq!(detect(b"Hello, World! 123").unwrap().encoding.as_deref(), Some("ascii"));
    }

    #[test]
    fn one_high_byte_fails() {
        assert!(detect(b"Hello, Caf\xe9").is_none());
    }

    #[test]
    fn empty_input_returns_none() {
        assert!(detect(b"").is_none());
    }
}
