//! Stage 7: UTF-8 structural validation (spec.md §4.1).
//!
//! Well-formed multi-byte UTF-8 is structurally distinctive enough that a
//! successful strict validation containing at least one multi-byte sequence
//! is treated as conclusive, ahead of any statistical reasoning. Unlike
//! `std::str::from_utf8`, this walks the buffer by hand so that a sequence
//! truncated at the very end (e.g. by `max_bytes` slicing) is tolerated
//! rather than rejected outright.
use super::DetectionResult;
use crate::consts::DETERMINISTIC_CONFIDENCE;

pub fn detect(data: &[u8]) -> Option<DetectionResult> {
    if data.is_empty() {
        return None;
    }

    let length = data.len();
    let mut i = 0;
    let mut multibyte_sequences = 0usize;

    while i < length {
        let byte = data[i];

        if byte < 0x80 {
            i += 1;
            continue;
        }

        // 0xC0-0xC1 are overlong 2-byte encodings of ASCII, so start at 0xC2.
        let seq_len = if (0xC2..=0xDF).contains(&byte) {
            2
        } else if (0xE0..=0xEF).contains(&byte) {
            3
        } else if (0xF0..=0xF4).contains(&byte) {
            4
        } else {
            // Invalid start byte (0x80-0xC1, 0xF5-0xFF).
            return None;
        };

        // Truncated final sequence (e.g. from max_bytes slicing) — treat as
        // valid since the bytes seen so far are structurally correct.
        if i + seq_len > length {
            break;
        }

        for j in 1..seq_len {
            if !(0x80..=0xBF).contains(&data[i + j]) {
                return None;
            }
        }

        // Reject overlong encodings and surrogates.
        match seq_len {
            3 => {
                if byte == 0xE0 && data[i + 1] < 0xA0 {
                    return None;
                }
                if byte == 0xED && data[i + 1] > 0x9F {
                    return None;
                }
            }
            4 => {
                if byte == 0xF0 && data[i + 1] < 0x90 {
                    return None;
                }
                if byte == 0xF4 && data[i + 1] > 0x8F {
                    return None;
                }
            }
            _ => {}
        }

        multibyte_sequences += 1;
        i += seq_len;
    }

    // Pure ASCII — let the ASCII stage handle it.
    if multibyte_sequences == 0 {
        return None;
    }

    Some(DetectionResult::new("utf-8", DETERMINISTIC_CONFIDENCE, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_valid_multibyte_utf8() {
        let data = "café – naïve".as_bytes();
        assert_eq!(detect(data).unwrap().encoding.as_deref(), Some("utf-8"));
    }

    #[test]
    fn pure_ascii_declines_leaving_room_for_ascii_stage() {
        assert!(detect(b"plain ascii").is_none());
    }

    #[test]
    fn invalid_utf8_returns_none() {
        assert!(detect(&[0xFF, 0xFE, 0x80]).is_none());
    }

    #[test]
    fn empty_input_returns_none() {
        assert!(detect(b"").is_none());
    }

    #[test]
    fn tolerates_truncated_final_sequence() {
        let mut data = "café".as_bytes().to_vec();
        // Cut off mid-sequence: the trailing 'é' (0xC3 0xA9) loses its
        // continuation byte.
        data.truncate(data.len() - 1);
        assert_eq!(detect(&data).unwrap().encoding.as_deref(), Some("utf-8"));
    }

    #[test]
    fn rejects_truncation_that_is_not_at_the_very_end() {
        // A genuinely invalid continuation byte in the middle must still
        // fail, even though the buffer also ends on a lead byte.
        let data = [0xC3, 0x20, 0xC3];
        assert!(detect(&data).is_none());
    }

    #[test]
    fn rejects_overlong_and_surrogate_sequences() {
        assert!(detect(&[0xE0, 0x80, 0x80]).is_none()); // overlong 3-byte
        assert!(detect(&[0xED, 0xA0, 0x80]).is_none()); // UTF-16 surrogate
    }
}
