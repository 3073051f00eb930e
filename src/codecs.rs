//! Decode abstraction layering `encoding_rs` (the WHATWG codec set) over
//! [`legacy_tables`] (EBCDIC, Mac-regional, and DOS codepages `encoding_rs`
//! doesn't implement).
//!
//! This is the "opaque decoder handle" spec.md §3 asks each `EncodingInfo`
//! to carry, and the fallible `decode()` spec.md §9 asks for in place of
//! the source's try/except probing: [`decode_strict`] returns `None` on the
//! first invalid byte instead of raising.

use encoding_rs::Encoding;

use crate::legacy_tables;

/// Resolve `name` (a registry canonical name) to an `encoding_rs` codec,
/// if one covers it. `encoding_rs` labels are matched via its own alias
/// table, so this also accepts e.g. `"shift_jis"` for Shift_JIS.
fn encoding_rs_for(name: &str) -> Option<&'static Encoding> {
    Encoding::for_label(name.as_bytes())
}

/// Attempt a strict decode of `data` as `name`. Returns `None` if `name`
/// is unrecognised or if any byte sequence is invalid under it — the
/// "this encoding does not apply" case spec.md §7 requires callers never
/// see as an exception.
pub fn decode_strict(name: &str, data: &[u8]) -> Option<String> {
    if let Some(table) = legacy_tables::table_for(name) {
        return legacy_tables::decode_strict(data, table);
    }
    let enc = encoding_rs_for(name)?;
    let (cow, had_errors) = enc.decode_without_bom_handling(data);
    if had_errors {
        return None;
    }
    Some(cow.into_owned())
}

/// `true` iff `data` decodes without error under `name`. Used by the
/// byte-validity filter (spec.md §4.2) which only needs the verdict, not
/// the decoded text.
pub fn can_decode(name: &str, data: &[u8]) -> bool {
    decode_strict(name, data).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_utf8_via_encoding_rs() {
        assert_eq!(decode_strict("utf-8", b"Hello").as_deref(), Some("Hello"));
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert!(decode_strict("utf-8", &[0xFF, 0xFE, 0x00, 0x01]).is_none());
    }

    #[test]
    fn decodes_ebcdic_via_legacy_table() {
        assert_eq!(decode_strict("cp037", &[0xC1]).as_deref(), Some("A"));
    }

    #[test]
    fn unknown_name_returns_none() {
        assert!(decode_strict("not-a-real-encoding", b"x").is_none());
    }

    #[test]
    fn can_decode_reflects_strict_result() {
        assert!(can_decode("iso-8859-1", &[0x41, 0x42]));
        assert!(!can_decode("cp424", &[0x70]));
    }
}
