//! Stage 14: legacy-name normalisation and detection equivalence checks
//! (spec.md §4.7).
//!
//! Two distinct needs share this module, both grounded on the original
//! rewrite's `equivalences.py`: renaming a detected candidate to its
//! "preferred superset" name before returning it, and (for tests)
//! recognising that two different encoding labels can legitimately decode
//! the same bytes to equivalent text.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// `narrower -> [broader encodings that are supersets of it]`. An ASCII
/// buffer is also valid UTF-8 and windows-1252; detecting it as any of
/// those three is "correct".
static SUPERSETS: Lazy<HashMap<&'static str, Vec<&'static str>>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("ascii", vec!["utf-8", "windows-1252", "iso-8859-1"]);
    m.insert("iso-8859-1", vec!["windows-1252"]);
    m
});

/// Rename table applied to the final detected name before it's returned to
/// the caller, preferring the more broadly useful label.
static PREFERRED_SUPERSET: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();
    m.insert("ascii", "ascii");
    m.insert("gb2312", "gb18030");
    m.insert("cp932", "shift_jis");
    m.insert("cp949", "euc-kr");
    m
});

/// Encodings that are byte-for-byte interchangeable in one endianness
/// family, grouped so `is_correct` can treat any member as equivalent to
/// any other when the caller didn't care about endianness specifically.
static BIDIRECTIONAL_GROUPS: Lazy<Vec<Vec<&'static str>>> = Lazy::new(|| {
    vec![
        vec!["utf-16", "utf-16-le", "utf-16-be"],
        vec!["utf-32", "utf-32-le", "utf-32-be"],
    ]
});

/// Applies [`PREFERRED_SUPERSET`], leaving `name` unchanged if it isn't in
/// the table.
pub fn preferred_name(name: &str) -> String {
    PREFERRED_SUPERSET.get(name).map(|s| s.to_string()).unwrap_or_else(|| name.to_string())
}

fn bidirectional_group_of(name: &str) -> Option<&'static Vec<&'static str>> {
    BIDIRECTIONAL_GROUPS.iter().find(|g| g.contains(&name))
}

/// `true` if `detected` is an acceptable answer when the known-correct
/// encoding is `expected`: an exact match, a bidirectional-group sibling,
/// or a registered superset of it.
pub fn is_correct(expected: &str, detected: &str) -> bool {
    if expected == detected {
        return true;
    }
    if let Some(group) = bidirectional_group_of(expected) {
        if group.contains(&detected) {
            return true;
        }
    }
    if let Some(supersets) = SUPERSETS.get(expected) {
        if supersets.contains(&detected) {
            return true;
        }
    }
    false
}

/// Strips combining marks via NFKD so visually-equivalent strings compare
/// equal even when composed differently, and treats `¤`/`€` as the same
/// generic-currency glyph (a substitution several legacy codecs make).
fn normalize_for_comparison(s: &str) -> String {
    use icu_normalizer::DecomposingNormalizer;
    let normalizer = DecomposingNormalizer::new_nfkd();
    let decomposed = normalizer.normalize(s);
    decomposed
        .chars()
        .filter(|c| !is_combining_mark(*c))
        .map(|c| if c == '¤' { '€' } else { c })
        .collect()
}

fn is_combining_mark(c: char) -> bool {
    use icu_properties::maps;
    use icu_properties::GeneralCategory;
    let gc = maps::general_category().get(c);
    matches!(
        gc,
        GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark | GeneralCategory::EnclosingMark
    )
}

/// `true` if decoding `data` as `encoding_a` and `encoding_b` produces
/// text that is equivalent once diacritics and the currency-glyph
/// substitution are normalised away.
pub fn is_equivalent_detection(data: &[u8], encoding_a: &str, encoding_b: &str) -> bool {
    let a = crate::codecs::decode_strict(encoding_a, data);
    let b = crate::codecs::decode_strict(encoding_b, data);
    match (a, b) {
        (Some(a), Some(b)) => normalize_for_comparison(&a) == normalize_for_comparison(&b),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_correct_as_utf8() {
        assert!(is_correct("ascii", "utf-8"));
    }

    #[test]
    fn utf16_variants_are_interchangeable() {
        assert!(is_correct("utf-16", "utf-16-le"));
        assert!(is_correct("utf-16-be", "utf-16"));
    }

    #[test]
    fn unrelated_encodings_are_not_correct() {
        assert!(!is_correct("koi8-r", "shift_jis"));
    }

    #[test]
    fn preferred_name_renames_legacy_aliases() {
        assert_eq!(preferred_name("gb2312"), "gb18030");
        assert_eq!(preferred_name("windows-1252"), "windows-1252");
    }

    #[test]
    fn equivalent_detection_true_for_identical_text() {
        assert!(is_equivalent_detection(b"hello", "ascii", "utf-8"));
    }
}
