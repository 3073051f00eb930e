//! Stage 1: byte-order-mark detection (spec.md §4.1).
//!
//! A BOM is the only signal the pipeline treats as unconditional proof: if
//! present, detection is done at confidence 1.0 regardless of what follows.

use super::DetectionResult;

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];
const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];

/// Checks `data` for a recognised BOM, longest match first (UTF-32's BOM is
/// a byte-extension of UTF-16-LE's, so order matters).
pub fn detect(data: &[u8]) -> Option<DetectionResult> {
    if data.starts_with(&UTF8_BOM) {
        return Some(DetectionResult::new("utf-8-sig", 1.0, None));
    }
    if data.starts_with(&UTF32_LE_BOM) {
        return Some(DetectionResult::new("utf-32-le", 1.0, None));
    }
    if data.starts_with(&UTF32_BE_BOM) {
        return Some(DetectionResult::new("utf-32-be", 1.0, None));
    }
    if data.starts_with(&UTF16_LE_BOM) {
        return Some(DetectionResult::new("utf-16-le", 1.0, None));
    }
    if data.starts_with(&UTF16_BE_BOM) {
        return Some(DetectionResult::new("utf-16-be", 1.0, None));
    }
    None
}
