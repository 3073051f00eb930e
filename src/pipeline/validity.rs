//! Stage 9: byte-validity filter (spec.md §4.2).
//!
//! Once escape/markup/structural stages have all declined, the remaining
//! era-filtered candidate set is narrowed to only those encodings that can
//! actually decode the buffer without error. Everything downstream
//! (structural scoring, bigram statistics) only ever sees survivors of
//! this filter.

use crate::codecs;
use crate::registry::EncodingInfo;

/// Keeps only candidates whose codec decodes `data` without error.
pub fn filter_candidates(data: &[u8], candidates: &[EncodingInfo]) -> Vec<EncodingInfo> {
    candidates
        .iter()
        .filter(|c| codecs::can_decode(c.name, data))
        .copied()
        .collect()
}
