//! Stage 10: multi-byte structural scoring (spec.md §4.3).
//!
//! Each CJK multi-byte encoding has a distinctive lead/trail byte-range
//! grammar. This stage walks the buffer under each candidate's grammar and
//! computes three distinct metrics:
//!
//! - [`compute_structural_score`]: the fraction of lead-byte occurrences
//!   that formed a structurally valid pair (or triple/quad).
//! - [`compute_multibyte_byte_coverage`]: the fraction of all non-ASCII
//!   bytes in the buffer that participate in a valid sequence — genuine CJK
//!   text accounts for nearly all its high bytes this way, while Latin text
//!   with scattered accented characters leaves many orphans.
//! - [`compute_lead_byte_diversity`]: the number of distinct lead byte
//!   values seen in valid sequences — genuine CJK text draws from the
//!   encoding's full repertoire, while a false-positive match against
//!   accented Latin clusters in a narrow band.
//!
//! A candidate scoring at or above [`crate::consts::STRUCTURAL_CONFIDENCE_THRESHOLD`]
//! on the first metric, corroborated by the other two, short-circuits
//! single-byte statistical ranking entirely.

/// Scores `data` against `encoding`'s lead/trail byte grammar: valid
/// occurrences over lead-byte occurrences seen. Returns `None` for
/// encodings this stage doesn't have a scorer for (single-byte encodings
/// never reach here).
pub fn compute_structural_score(data: &[u8], encoding: &str) -> Option<f32> {
    let scorer: fn(&[u8]) -> (usize, usize) = match encoding {
        "shift_jis" | "cp932" => score_shift_jis,
        "euc-jp" => score_euc_jp,
        "euc-kr" | "cp949" => score_euc_kr,
        "gb18030" => score_gb18030,
        "big5" => score_big5,
        "johab" => score_johab,
        _ => return None,
    };
    let (valid, lead) = scorer(data);
    if lead == 0 {
        return Some(0.0);
    }
    Some(valid as f32 / lead as f32)
}

/// Ratio of non-ASCII bytes that participate in a valid multi-byte sequence
/// under `encoding`. Returns `None` for encodings this stage doesn't cover,
/// and `Some(0.0)` when the buffer has no non-ASCII bytes at all.
pub fn compute_multibyte_byte_coverage(data: &[u8], encoding: &str) -> Option<f32> {
    let counter: fn(&[u8]) -> usize = match encoding {
        "shift_jis" | "cp932" => mb_bytes_shift_jis,
        "euc-jp" => mb_bytes_euc_jp,
        "euc-kr" | "cp949" => mb_bytes_euc_kr,
        "gb18030" => mb_bytes_gb18030,
        "big5" => mb_bytes_big5,
        "johab" => mb_bytes_johab,
        _ => return None,
    };
    let non_ascii = data.iter().filter(|&&b| b > 0x7F).count();
    if non_ascii == 0 {
        return Some(0.0);
    }
    Some(counter(data) as f32 / non_ascii as f32)
}

/// Number of distinct lead bytes observed in valid sequences under
/// `encoding`'s grammar. Returns `0` for encodings this stage doesn't
/// cover.
pub fn compute_lead_byte_diversity(data: &[u8], encoding: &str) -> usize {
    let counter: fn(&[u8]) -> usize = match encoding {
        "shift_jis" | "cp932" => diversity_shift_jis,
        "euc-jp" => diversity_euc_jp,
        "euc-kr" | "cp949" => diversity_euc_kr,
        "gb18030" => diversity_gb18030,
        "big5" => diversity_big5,
        "johab" => diversity_johab,
        _ => return 0,
    };
    counter(data)
}

// ---------------------------------------------------------------------
// Per-encoding structural scorers: (valid_count, lead_count)
// ---------------------------------------------------------------------

fn score_shift_jis(data: &[u8]) -> (usize, usize) {
    let mut lead_count = 0usize;
    let mut valid_count = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0x81..=0x9F).contains(&b) || (0xE0..=0xEF).contains(&b) {
            lead_count += 1;
            if let Some(&trail) = data.get(i + 1) {
                if (0x40..=0x7E).contains(&trail) || (0x80..=0xFC).contains(&trail) {
                    valid_count += 1;
                    i += 2;
                    continue;
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    (valid_count, lead_count)
}

fn score_euc_jp(data: &[u8]) -> (usize, usize) {
    let mut lead_count = 0usize;
    let mut valid_count = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if b == 0x8E {
            lead_count += 1;
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xDF).contains(&t)) {
                valid_count += 1;
                i += 2;
                continue;
            }
            i += 1;
        } else if b == 0x8F {
            lead_count += 1;
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t))
                && data.get(i + 2).is_some_and(|&t| (0xA1..=0xFE).contains(&t))
            {
                valid_count += 1;
                i += 3;
                continue;
            }
            i += 1;
        } else if (0xA1..=0xFE).contains(&b) {
            lead_count += 1;
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t)) {
                valid_count += 1;
                i += 2;
                continue;
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    (valid_count, lead_count)
}

fn score_euc_kr(data: &[u8]) -> (usize, usize) {
    let mut lead_count = 0usize;
    let mut valid_count = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0xA1..=0xFE).contains(&b) {
            lead_count += 1;
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t)) {
                valid_count += 1;
                i += 2;
                continue;
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    (valid_count, lead_count)
}

/// The broader GBK extension range (lead 0x81-0xFE, trail 0x40-0x7E /
/// 0x80-0xFE) is deliberately excluded: it's permissive enough that
/// unrelated single-byte data can score 1.0.
fn score_gb18030(data: &[u8]) -> (usize, usize) {
    let mut lead_count = 0usize;
    let mut valid_count = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0x81..=0xFE).contains(&b) {
            lead_count += 1;
            if data.get(i + 1).is_some_and(|&t| (0x30..=0x39).contains(&t))
                && data.get(i + 2).is_some_and(|&t| (0x81..=0xFE).contains(&t))
                && data.get(i + 3).is_some_and(|&t| (0x30..=0x39).contains(&t))
            {
                valid_count += 1;
                i += 4;
                continue;
            }
            if (0xA1..=0xF7).contains(&b) && data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t)) {
                valid_count += 1;
                i += 2;
                continue;
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    (valid_count, lead_count)
}

fn score_big5(data: &[u8]) -> (usize, usize) {
    let mut lead_count = 0usize;
    let mut valid_count = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0xA1..=0xF9).contains(&b) {
            lead_count += 1;
            if let Some(&trail) = data.get(i + 1) {
                if (0x40..=0x7E).contains(&trail) || (0xA1..=0xFE).contains(&trail) {
                    valid_count += 1;
                    i += 2;
                    continue;
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    (valid_count, lead_count)
}

fn score_johab(data: &[u8]) -> (usize, usize) {
    let mut lead_count = 0usize;
    let mut valid_count = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0x84..=0xD3).contains(&b) || (0xD8..=0xDE).contains(&b) || (0xE0..=0xF9).contains(&b) {
            lead_count += 1;
            if let Some(&trail) = data.get(i + 1) {
                if (0x31..=0x7E).contains(&trail) || (0x91..=0xFE).contains(&trail) {
                    valid_count += 1;
                    i += 2;
                    continue;
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    (valid_count, lead_count)
}

// ---------------------------------------------------------------------
// Per-encoding multi-byte byte counters: non-ASCII bytes in valid sequences
// ---------------------------------------------------------------------

fn mb_bytes_shift_jis(data: &[u8]) -> usize {
    let mut mb = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0x81..=0x9F).contains(&b) || (0xE0..=0xEF).contains(&b) {
            if let Some(&trail) = data.get(i + 1) {
                if (0x40..=0x7E).contains(&trail) || (0x80..=0xFC).contains(&trail) {
                    mb += 1;
                    if trail > 0x7F {
                        mb += 1;
                    }
                    i += 2;
                    continue;
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    mb
}

fn mb_bytes_euc_jp(data: &[u8]) -> usize {
    let mut mb = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if b == 0x8E {
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xDF).contains(&t)) {
                mb += 2;
                i += 2;
                continue;
            }
            i += 1;
        } else if b == 0x8F {
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t))
                && data.get(i + 2).is_some_and(|&t| (0xA1..=0xFE).contains(&t))
            {
                mb += 3;
                i += 3;
                continue;
            }
            i += 1;
        } else if (0xA1..=0xFE).contains(&b) {
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t)) {
                mb += 2;
                i += 2;
                continue;
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    mb
}

fn mb_bytes_euc_kr(data: &[u8]) -> usize {
    let mut mb = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0xA1..=0xFE).contains(&b) {
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t)) {
                mb += 2;
                i += 2;
                continue;
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    mb
}

fn mb_bytes_gb18030(data: &[u8]) -> usize {
    let mut mb = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0x81..=0xFE).contains(&b) {
            if data.get(i + 1).is_some_and(|&t| (0x30..=0x39).contains(&t))
                && data.get(i + 2).is_some_and(|&t| (0x81..=0xFE).contains(&t))
                && data.get(i + 3).is_some_and(|&t| (0x30..=0x39).contains(&t))
            {
                mb += 2; // bytes 0 and 2 are non-ASCII
                i += 4;
                continue;
            }
            if (0xA1..=0xF7).contains(&b) && data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t)) {
                mb += 2;
                i += 2;
                continue;
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    mb
}

fn mb_bytes_big5(data: &[u8]) -> usize {
    let mut mb = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0xA1..=0xF9).contains(&b) {
            if let Some(&trail) = data.get(i + 1) {
                if (0x40..=0x7E).contains(&trail) || (0xA1..=0xFE).contains(&trail) {
                    mb += 1;
                    if trail > 0x7F {
                        mb += 1;
                    }
                    i += 2;
                    continue;
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    mb
}

fn mb_bytes_johab(data: &[u8]) -> usize {
    let mut mb = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0x84..=0xD3).contains(&b) || (0xD8..=0xDE).contains(&b) || (0xE0..=0xF9).contains(&b) {
            if let Some(&trail) = data.get(i + 1) {
                if (0x31..=0x7E).contains(&trail) || (0x91..=0xFE).contains(&trail) {
                    if b > 0x7F {
                        mb += 1;
                    }
                    if trail > 0x7F {
                        mb += 1;
                    }
                    i += 2;
                    continue;
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    mb
}

// ---------------------------------------------------------------------
// Per-encoding lead byte diversity counters: distinct leads in valid pairs
// ---------------------------------------------------------------------

fn diversity_shift_jis(data: &[u8]) -> usize {
    let mut leads = std::collections::HashSet::new();
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0x81..=0x9F).contains(&b) || (0xE0..=0xEF).contains(&b) {
            if let Some(&trail) = data.get(i + 1) {
                if (0x40..=0x7E).contains(&trail) || (0x80..=0xFC).contains(&trail) {
                    leads.insert(b);
                    i += 2;
                    continue;
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    leads.len()
}

fn diversity_euc_jp(data: &[u8]) -> usize {
    let mut leads = std::collections::HashSet::new();
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if b == 0x8E {
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xDF).contains(&t)) {
                leads.insert(b);
                i += 2;
                continue;
            }
            i += 1;
        } else if b == 0x8F {
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t))
                && data.get(i + 2).is_some_and(|&t| (0xA1..=0xFE).contains(&t))
            {
                leads.insert(b);
                i += 3;
                continue;
            }
            i += 1;
        } else if (0xA1..=0xFE).contains(&b) {
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t)) {
                leads.insert(b);
                i += 2;
                continue;
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    leads.len()
}

fn diversity_euc_kr(data: &[u8]) -> usize {
    let mut leads = std::collections::HashSet::new();
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0xA1..=0xFE).contains(&b) {
            if data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t)) {
                leads.insert(b);
                i += 2;
                continue;
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    leads.len()
}

fn diversity_gb18030(data: &[u8]) -> usize {
    let mut leads = std::collections::HashSet::new();
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0x81..=0xFE).contains(&b) {
            if data.get(i + 1).is_some_and(|&t| (0x30..=0x39).contains(&t))
                && data.get(i + 2).is_some_and(|&t| (0x81..=0xFE).contains(&t))
                && data.get(i + 3).is_some_and(|&t| (0x30..=0x39).contains(&t))
            {
                leads.insert(b);
                i += 4;
                continue;
            }
            if (0xA1..=0xF7).contains(&b) && data.get(i + 1).is_some_and(|&t| (0xA1..=0xFE).contains(&t)) {
                leads.insert(b);
                i += 2;
                continue;
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    leads.len()
}

fn diversity_big5(data: &[u8]) -> usize {
    let mut leads = std::collections::HashSet::new();
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0xA1..=0xF9).contains(&b) {
            if let Some(&trail) = data.get(i + 1) {
                if (0x40..=0x7E).contains(&trail) || (0xA1..=0xFE).contains(&trail) {
                    leads.insert(b);
                    i += 2;
                    continue;
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    leads.len()
}

fn diversity_johab(data: &[u8]) -> usize {
    let mut leads = std::collections::HashSet::new();
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if (0x84..=0xD3).contains(&b) || (0xD8..=0xDE).contains(&b) || (0xE0..=0xF9).contains(&b) {
            if let Some(&trail) = data.get(i + 1) {
                if (0x31..=0x7E).contains(&trail) || (0x91..=0xFE).contains(&trail) {
                    leads.insert(b);
                    i += 2;
                    continue;
                }
            }
            i += 1;
        } else {
            i += 1;
        }
    }
    leads.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_jis_ascii_only_scores_zero_leads() {
        // No lead bytes at all -> score defined as 0.0, not "perfect".
        assert_eq!(compute_structural_score(b"Hello, World!", "shift_jis"), Some(0.0));
    }

    #[test]
    fn shift_jis_valid_sequence_scores_high() {
        // Lead 0x82, trail 0xA0: valid Shift-JIS two-byte unit.
        let data = [0x82, 0xA0, 0x82, 0xA2];
        let score = compute_structural_score(&data, "shift_jis").unwrap();
        assert!(score > 0.9, "expected high score, got {score}");
    }

    #[test]
    fn unknown_encoding_returns_none() {
        assert!(compute_structural_score(b"abc", "iso-8859-1").is_none());
        assert!(compute_multibyte_byte_coverage(b"abc", "iso-8859-1").is_none());
    }

    #[test]
    fn gb18030_rejects_gbk_only_extension_range() {
        // 0x81 0x40 is a GBK-extension pair, not valid strict GB18030: the
        // lead is seen but no recognised trail follows it.
        let data = [0x81, 0x40];
        let score = compute_structural_score(&data, "gb18030").unwrap();
        assert_eq!(score, 0.0);
    }

    #[test]
    fn lead_byte_diversity_counts_distinct_leads_in_valid_pairs_only() {
        let data = [0x82, 0xA0, 0x83, 0xA0, 0x82, 0xA1];
        assert_eq!(compute_lead_byte_diversity(&data, "shift_jis"), 2);
    }

    #[test]
    fn lead_byte_diversity_ignores_lead_without_valid_trail() {
        // 0x82 followed by an invalid trail never joins the set.
        let data = [0x82, 0x01];
        assert_eq!(compute_lead_byte_diversity(&data, "shift_jis"), 0);
    }

    #[test]
    fn euc_jp_handles_ss2_and_ss3_sequences() {
        let data = [0x8E, 0xA1, 0x8F, 0xA1, 0xA1];
        let score = compute_structural_score(&data, "euc-jp").unwrap();
        assert!(score > 0.9);
    }

    #[test]
    fn multibyte_byte_coverage_counts_non_ascii_bytes_in_valid_pairs() {
        // Two valid Shift-JIS pairs (4 non-ASCII bytes) plus one orphan
        // high byte that never forms a pair.
        let data = [0x82, 0xA0, 0x82, 0xA2, 0xFF];
        let coverage = compute_multibyte_byte_coverage(&data, "shift_jis").unwrap();
        assert_eq!(coverage, 4.0 / 5.0);
    }

    #[test]
    fn multibyte_byte_coverage_is_zero_with_no_non_ascii_bytes() {
        assert_eq!(compute_multibyte_byte_coverage(b"plain ascii", "shift_jis"), Some(0.0));
    }
}
