//! Stage 2: BOM-less UTF-16/UTF-32 pattern detection (spec.md §4.1).
//!
//! Text encoded as UTF-16 or UTF-32 without a BOM still has a distinctive
//! "many zero bytes at a regular stride" signature for any text whose
//! codepoints stay under U+0100 (the vast majority of real-world text).
//! This stage looks for that stride rather than attempting a full decode.

use super::DetectionResult;
use crate::consts::DETERMINISTIC_CONFIDENCE;

const MIN_SAMPLE: usize = 8;

/// Fraction of positions that must be zero, at a given stride/offset, to
/// call it a match. Chosen loosely enough to tolerate a sprinkling of
/// codepoints above U+00FF without false negatives on Latin-alphabet text.
const ZERO_RATIO_THRESHOLD: f64 = 0.70;

fn zero_ratio_at(data: &[u8], stride: usize, offset: usize) -> f64 {
    let positions: Vec<u8> = data.iter().skip(offset).step_by(stride).copied().collect();
    if positions.is_empty() {
        return 0.0;
    }
    let zeros = positions.iter().filter(|&&b| b == 0).count();
    zeros as f64 / positions.len() as f64
}

pub fn detect(data: &[u8]) -> Option<DetectionResult> {
    if data.len() < MIN_SAMPLE {
        return None;
    }

    // UTF-32: look at every 4th byte. LE has zeros in bytes 2,3; BE in 0,1.
    if data.len() >= 16 {
        let be32 = (zero_ratio_at(data, 4, 0) + zero_ratio_at(data, 4, 1)) / 2.0;
        let le32 = (zero_ratio_at(data, 4, 2) + zero_ratio_at(data, 4, 3)) / 2.0;
        if be32 >= ZERO_RATIO_THRESHOLD && be32 >= le32 {
            return Some(DetectionResult::new("utf-32-be", DETERMINISTIC_CONFIDENCE, None));
        }
        if le32 >= ZERO_RATIO_THRESHOLD {
            return Some(DetectionResult::new("utf-32-le", DETERMINISTIC_CONFIDENCE, None));
        }
    }

    let be16 = zero_ratio_at(data, 2, 0);
    let le16 = zero_ratio_at(data, 2, 1);
    if be16 >= ZERO_RATIO_THRESHOLD && be16 >= le16 {
        return Some(DetectionResult::new("utf-16-be", DETERMINISTIC_CONFIDENCE, None));
    }
    if le16 >= ZERO_RATIO_THRESHOLD {
        return Some(DetectionResult::new("utf-16-le", DETERMINISTIC_CONFIDENCE, None));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16le(s: &str) -> Vec<u8> {
        s.encode_utf16().flat_map(|u| u.to_le_bytes()).collect()
    }

    fn utf16be(s: &str) -> Vec<u8> {
        s.encode_utf16().flat_map(|u| u.to_be_bytes()).collect()
    }

    #[test]
    fn detects_utf16_le_ascii_text() {
        let data = utf16le("Hello, world! This is a test.");
        assert_eq!(detect(&data).unwrap().encoding.as_deref(), Some("utf-16-le"));
    }

    #[test]
    fn detects_utf16_be_ascii_text() {
        let data = utf16be("Hello, world! This is a test.");
        assert_eq!(detect(&data).unwrap().encoding.as_deref(), Some("utf-16-be"));
    }

    #[test]
    fn plain_utf8_does_not_match() {
        assert!(detect("this is plain utf-8 text with no nulls".as_bytes()).is_none());
    }

    #[test]
    fn short_input_returns_none() {
        assert!(detect(b"ab").is_none());
    }
}
