//! Stage 4: binary-content rejection (spec.md §4.1).
//!
//! Detecting a "best" text encoding for opaque binary data is meaningless;
//! the original rewrite short-circuits to a confident `None` as soon as the
//! buffer's control-byte density is too high to be real text.

use super::DetectionResult;
use crate::consts::DETERMINISTIC_CONFIDENCE;

/// Threshold: if more than this fraction of bytes are binary indicators,
/// it's binary.
const BINARY_THRESHOLD: f64 = 0.01;

/// A byte counts as a binary indicator if it falls in `0x00..=0x08` or
/// `0x0E..=0x1F` — the C0 control range minus tab/LF/VT/FF/CR, which are
/// routine in real text.
fn is_binary_indicator(b: u8) -> bool {
    (0x00..=0x08).contains(&b) || (0x0E..=0x1F).contains(&b)
}

fn rejected() -> DetectionResult {
    DetectionResult {
        encoding: None,
        confidence: DETERMINISTIC_CONFIDENCE,
        language: None,
    }
}

pub fn detect(data: &[u8]) -> Option<DetectionResult> {
    if data.is_empty() {
        return None;
    }
    let binary_count = data.iter().filter(|&&b| is_binary_indicator(b)).count();
    if binary_count as f64 / data.len() as f64 > BINARY_THRESHOLD {
        return Some(rejected());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_png_header() {
        let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
        data.extend_from_slice(&[0; 32]);
        let r = detect(&data).unwrap();
        assert!(r.encoding.is_none());
    }

    #[test]
    fn rejects_high_nul_ratio() {
        let data = vec![0u8; 100];
        let r = detect(&data).unwrap();
        assert!(r.encoding.is_none());
    }

    #[test]
    fn rejects_sparse_control_bytes_with_low_nul_count() {
        // 200 bytes cycling 0x00..=0xFF: 27 of every 256 values are binary
        // indicators (~13%), but only one of them is an actual NUL (0.5%).
        let data: Vec<u8> = (0..200).map(|i| (i % 256) as u8).collect();
        let r = detect(&data).unwrap();
        assert!(r.encoding.is_none());
    }

    #[test]
    fn tab_newline_and_carriage_return_do_not_count_as_binary() {
        let data = "line one\r\nline two\ttabbed\x0bvt\x0cff".repeat(10);
        assert!(detect(data.as_bytes()).is_none());
    }

    #[test]
    fn plain_text_passes_through() {
        assert!(detect(b"this is ordinary text").is_none());
    }

    #[test]
    fn empty_input_passes_through() {
        assert!(detect(b"").is_none());
    }
}
