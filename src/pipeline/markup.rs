//! Stage 5: HTML/XML declared-charset extraction (spec.md §4.1).
//!
//! When the document names its own encoding via `<?xml ... encoding="...">`
//! or an HTML `<meta charset=...>`/`http-equiv` tag, that declaration wins
//! outright — no statistical stage gets to override it.

use super::DetectionResult;
use crate::consts::DETERMINISTIC_CONFIDENCE;
use crate::registry;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

static XML_DECL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<\?xml[^>]*\sencoding\s*=\s*["']([^"']+)["']"#).unwrap()
});

static META_CHARSET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]+charset\s*=\s*["']?([a-zA-Z0-9_-]+)"#).unwrap()
});

static META_HTTP_EQUIV: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<meta[^>]+http-equiv\s*=\s*["']content-type["'][^>]*content\s*=\s*["'][^"']*charset=([a-zA-Z0-9_-]+)"#).unwrap()
});

/// Searches only the first 4096 bytes, matching where these declarations
/// are conventionally required to appear.
const SCAN_WINDOW: usize = 4096;

pub fn detect(data: &[u8]) -> Option<DetectionResult> {
    let window = &data[..data.len().min(SCAN_WINDOW)];

    let declared = XML_DECL
        .captures(window)
        .or_else(|| META_CHARSET.captures(window))
        .or_else(|| META_HTTP_EQUIV.captures(window))?;

    let raw = declared.get(1)?.as_bytes();
    let name = std::str::from_utf8(raw).ok()?;
    let resolved = registry::lookup(name)?;
    Some(DetectionResult::new(resolved.name, DETERMINISTIC_CONFIDENCE, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_xml_declaration() {
        let data = br#"<?xml version="1.0" encoding="ISO-8859-1"?><root/>"#;
        assert_eq!(detect(data).unwrap().encoding.as_deref(), Some("iso-8859-1"));
    }

    #[test]
    fn detects_html_meta_charset() {
        let data = br#"<html><head><meta charset="windows-1252"></head></html>"#;
        assert_eq!(detect(data).unwrap().encoding.as_deref(), Some("windows-1252"));
    }

    #[test]
    fn detects_http_equiv_meta() {
        let data = br#"<meta http-equiv="Content-Type" content="text/html; charset=utf-8">"#;
        assert_eq!(detect(data).unwrap().encoding.as_deref(), Some("utf-8"));
    }

    #[test]
    fn unrecognised_charset_name_returns_none() {
        let data = br#"<meta charset="not-a-real-charset-name">"#;
        assert!(detect(data).is_none());
    }

    #[test]
    fn no_declaration_returns_none() {
        assert!(detect(b"<html><body>plain</body></html>").is_none());
    }
}
