//! Streaming detection API (spec.md §4.8).
//!
//! Grounded on the original rewrite's `detector.py` `UniversalDetector`
//! class: callers `feed()` chunks as they arrive, the detector reruns the
//! deterministic stages and, once enough bytes have accumulated, the full
//! pipeline, and `close()` forces a final answer from whatever has been
//! buffered so far.

use crate::consts::MIN_INCREMENTAL_CHECK;
use crate::enums::EncodingEra;
use crate::error::DetectError;
use crate::models::ModelSet;
use crate::pipeline::{confusion::ConfusionSet, orchestrator, DetectionResult};

/// Incremental wrapper around the pipeline for callers that receive a
/// document in chunks and want an early, best-effort answer without
/// buffering the whole thing in their own code (ours still buffers
/// internally — the pipeline has no truly incremental stages).
pub struct UniversalDetector<'a> {
    buffer: Vec<u8>,
    era_mask: EncodingEra,
    models: &'a ModelSet,
    confusion: &'a ConfusionSet,
    bytes_since_last_check: usize,
    seen_non_ascii: bool,
    pub done: bool,
    pub result: DetectionResult,
}

impl<'a> UniversalDetector<'a> {
    pub fn new(era_mask: EncodingEra, models: &'a ModelSet, confusion: &'a ConfusionSet) -> Self {
        UniversalDetector {
            buffer: Vec::new(),
            era_mask,
            models,
            confusion,
            bytes_since_last_check: 0,
            seen_non_ascii: false,
            done: false,
            result: DetectionResult::none(),
        }
    }

    /// Appends `chunk` and, once enough new bytes have accumulated (or a
    /// BOM could now be visible), reruns detection.
    pub fn feed(&mut self, chunk: &[u8]) -> Result<(), DetectError> {
        if self.done {
            return Err(DetectError::StreamClosed);
        }
        self.buffer.extend_from_slice(chunk);
        self.bytes_since_last_check += chunk.len();
        if !self.seen_non_ascii && chunk.iter().any(|&b| b > 0x7F) {
            self.seen_non_ascii = true;
        }

        let should_check_bom = self.buffer.len() >= 4 && self.bytes_since_last_check >= chunk.len();
        let should_check_ascii = !self.seen_non_ascii;
        let should_check_utf8 = self.seen_non_ascii;

        if should_check_bom || should_check_ascii || should_check_utf8 {
            if self.bytes_since_last_check >= MIN_INCREMENTAL_CHECK || self.buffer.len() == chunk.len() {
                self.try_incremental_detect();
            }
        }
        Ok(())
    }

    fn try_incremental_detect(&mut self) {
        self.bytes_since_last_check = 0;
        let result = orchestrator::run(&self.buffer, self.era_mask, self.models, self.confusion);
        if result.confidence >= crate::consts::DETERMINISTIC_CONFIDENCE {
            self.result = result;
            self.done = true;
        }
    }

    /// Forces a final verdict from whatever has been buffered, even if no
    /// deterministic stage has fired yet.
    pub fn close(&mut self) -> &DetectionResult {
        if !self.done {
            self.result = orchestrator::run(&self.buffer, self.era_mask, self.models, self.confusion);
            self.done = true;
        }
        &self.result
    }

    /// Clears all state so the detector can be reused for a new document.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.bytes_since_last_check = 0;
        self.seen_non_ascii = false;
        self.done = false;
        self.result = DetectionResult::none();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector<'a>(models: &'a ModelSet, confusion: &'a ConfusionSet) -> UniversalDetector<'a> {
        UniversalDetector::new(EncodingEra::ALL, models, confusion)
    }

    #[test]
    fn feed_then_close_detects_ascii() {
        let models = ModelSet::default();
        let confusion = ConfusionSet::default();
        let mut d = detector(&models, &confusion);
        d.feed(b"hello ").unwrap();
        d.feed(b"world").unwrap();
        let result = d.close();
        assert_eq!(result.encoding.as_deref(), Some("ascii"));
    }

    #[test]
    fn bom_is_detected_as_soon_as_four_bytes_are_present() {
        let models = ModelSet::default();
        let confusion = ConfusionSet::default();
        let mut d = detector(&models, &confusion);
        d.feed(&[0xEF, 0xBB, 0xBF, b'h']).unwrap();
        assert!(d.done);
        assert_eq!(d.result.encoding.as_deref(), Some("utf-8-sig"));
    }

    #[test]
    fn feed_after_close_errors() {
        let models = ModelSet::default();
        let confusion = ConfusionSet::default();
        let mut d = detector(&models, &confusion);
        d.feed(b"abc").unwrap();
        d.close();
        assert_eq!(d.feed(b"more"), Err(DetectError::StreamClosed));
    }

    #[test]
    fn reset_allows_reuse() {
        let models = ModelSet::default();
        let confusion = ConfusionSet::default();
        let mut d = detector(&models, &confusion);
        d.feed(&[0xEF, 0xBB, 0xBF]).unwrap();
        d.close();
        d.reset();
        assert!(!d.done);
        d.feed(b"hello").unwrap();
        let result = d.close();
        assert_eq!(result.encoding.as_deref(), Some("ascii"));
    }
}
