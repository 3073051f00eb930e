//! The process-wide, immutable table of supported encodings (spec.md §3).
//!
//! Built once behind a [`once_cell::sync::Lazy`], exactly the pattern the
//! teacher crate uses for its `LANGUAGES` / `ENCODING_TO_LANGUAGE` statics
//! (`assets.rs`). Era assignments are grounded on the original chardet
//! rewrite's `encoding_eras.py` table, reconciled against its own
//! `tests/test_registry.py` expectations where the two sources disagreed
//! (see DESIGN.md).

use once_cell::sync::Lazy;

use crate::enums::EncodingEra;

/// One supported encoding: its canonical name, era, multi-byte-ness, and
/// the language codes its statistical models were trained on.
#[derive(Debug, Clone, Copy)]
pub struct EncodingInfo {
    /// Canonical lowercase identifier, e.g. `"iso-8859-1"`.
    pub name: &'static str,
    /// Additional names this encoding is recognised under.
    pub aliases: &'static [&'static str],
    pub era: EncodingEra,
    pub is_multibyte: bool,
    /// ISO 639-1 codes; empty for Unicode/ASCII (language-agnostic).
    pub languages: &'static [&'static str],
}

macro_rules! enc {
    ($name:expr, $aliases:expr, $era:expr, $mb:expr, $langs:expr) => {
        EncodingInfo {
            name: $name,
            aliases: $aliases,
            era: $era,
            is_multibyte: $mb,
            languages: $langs,
        }
    };
}

static REGISTRY_DATA: &[EncodingInfo] = &[
    // --- Unicode family -----------------------------------------------
    enc!("ascii", &["us-ascii"], EncodingEra::MODERN_WEB, false, &[]),
    enc!("utf-8", &["utf8"], EncodingEra::MODERN_WEB, true, &[]),
    enc!("utf-8-sig", &[], EncodingEra::MODERN_WEB, true, &[]),
    enc!("utf-16", &[], EncodingEra::MODERN_WEB, true, &[]),
    enc!("utf-16-le", &["utf-16le"], EncodingEra::MODERN_WEB, true, &[]),
    enc!("utf-16-be", &["utf-16be"], EncodingEra::MODERN_WEB, true, &[]),
    enc!("utf-32", &[], EncodingEra::MODERN_WEB, true, &[]),
    enc!("utf-32-le", &["utf-32le"], EncodingEra::MODERN_WEB, true, &[]),
    enc!("utf-32-be", &["utf-32be"], EncodingEra::MODERN_WEB, true, &[]),
    enc!("utf-7", &[], EncodingEra::MODERN_WEB, true, &[]),
    // --- Modern web single-byte ----------------------------------------
    enc!("windows-1250", &["cp1250"], EncodingEra::MODERN_WEB, false, &["pl", "cs", "hu", "ro"]),
    enc!("windows-1251", &["cp1251"], EncodingEra::MODERN_WEB, false, &["ru", "bg", "sr"]),
    enc!("windows-1252", &["cp1252"], EncodingEra::MODERN_WEB, false, &["en", "fr", "de", "es"]),
    enc!("windows-1253", &["cp1253"], EncodingEra::MODERN_WEB, false, &["el"]),
    enc!("windows-1254", &["cp1254"], EncodingEra::MODERN_WEB, false, &["tr"]),
    enc!("windows-1255", &["cp1255"], EncodingEra::MODERN_WEB, false, &["he"]),
    enc!("windows-1256", &["cp1256"], EncodingEra::MODERN_WEB, false, &["ar"]),
    enc!("windows-1257", &["cp1257"], EncodingEra::MODERN_WEB, false, &["et", "lv", "lt"]),
    enc!("windows-1258", &["cp1258"], EncodingEra::MODERN_WEB, false, &["vi"]),
    enc!("cp874", &["windows-874"], EncodingEra::MODERN_WEB, false, &["th"]),
    enc!("tis-620", &[], EncodingEra::MODERN_WEB, false, &["th"]),
    enc!("koi8-r", &[], EncodingEra::MODERN_WEB, false, &["ru"]),
    enc!("koi8-u", &[], EncodingEra::MODERN_WEB, false, &["uk"]),
    // --- CJK multi-byte --------------------------------------------------
    enc!("gb18030", &[], EncodingEra::MODERN_WEB, true, &["zh"]),
    enc!("gb2312", &[], EncodingEra::LEGACY_ISO, true, &["zh"]),
    enc!("big5", &[], EncodingEra::MODERN_WEB, true, &["zh"]),
    enc!("shift_jis", &["sjis"], EncodingEra::MODERN_WEB, true, &["ja"]),
    enc!("cp932", &["ms932"], EncodingEra::LEGACY_ISO, true, &["ja"]),
    enc!("euc-jp", &[], EncodingEra::MODERN_WEB, true, &["ja"]),
    enc!("euc-kr", &[], EncodingEra::MODERN_WEB, true, &["ko"]),
    enc!("cp949", &["ms949"], EncodingEra::MODERN_WEB, true, &["ko"]),
    enc!("iso-2022-jp", &[], EncodingEra::MODERN_WEB, true, &["ja"]),
    enc!("iso-2022-kr", &[], EncodingEra::MODERN_WEB, true, &["ko"]),
    enc!("hz-gb-2312", &["hz"], EncodingEra::MODERN_WEB, true, &["zh"]),
    enc!("johab", &[], EncodingEra::LEGACY_ISO, true, &["ko"]),
    // --- Legacy ISO-8859 ---------------------------------------------------
    enc!("iso-8859-1", &["latin1"], EncodingEra::LEGACY_ISO, false, &["en", "fr", "de", "es"]),
    enc!("iso-8859-2", &["latin2"], EncodingEra::LEGACY_ISO, false, &["pl", "cs", "hu"]),
    enc!("iso-8859-3", &["latin3"], EncodingEra::LEGACY_ISO, false, &["mt", "eo"]),
    enc!("iso-8859-4", &["latin4"], EncodingEra::LEGACY_ISO, false, &["et", "lv", "lt"]),
    enc!("iso-8859-5", &[], EncodingEra::LEGACY_ISO, false, &["ru", "bg", "sr"]),
    enc!("iso-8859-6", &[], EncodingEra::LEGACY_ISO, false, &["ar"]),
    enc!("iso-8859-7", &[], EncodingEra::LEGACY_ISO, false, &["el"]),
    enc!("iso-8859-8", &[], EncodingEra::LEGACY_ISO, false, &["he"]),
    enc!("iso-8859-9", &["latin5"], EncodingEra::LEGACY_ISO, false, &["tr"]),
    enc!("iso-8859-10", &["latin6"], EncodingEra::LEGACY_ISO, false, &["is", "sv"]),
    enc!("iso-8859-11", &[], EncodingEra::LEGACY_ISO, false, &["th"]),
    enc!("iso-8859-13", &["latin7"], EncodingEra::LEGACY_ISO, false, &["lt", "lv"]),
    enc!("iso-8859-14", &["latin8"], EncodingEra::LEGACY_ISO, false, &["cy", "ga"]),
    enc!("iso-8859-15", &["latin9"], EncodingEra::LEGACY_ISO, false, &["fr", "de", "fi"]),
    enc!("iso-8859-16", &["latin10"], EncodingEra::LEGACY_ISO, false, &["ro"]),
    // --- Legacy Mac ------------------------------------------------------
    enc!("mac-roman", &["macintosh"], EncodingEra::LEGACY_MAC, false, &["en"]),
    enc!("mac-cyrillic", &[], EncodingEra::LEGACY_MAC, false, &["ru"]),
    enc!("mac-greek", &[], EncodingEra::LEGACY_MAC, false, &["el"]),
    enc!("mac-iceland", &[], EncodingEra::LEGACY_MAC, false, &["is"]),
    enc!("mac-latin2", &[], EncodingEra::LEGACY_MAC, false, &["pl", "cs", "hu"]),
    enc!("mac-turkish", &[], EncodingEra::LEGACY_MAC, false, &["tr"]),
    // --- Legacy regional ---------------------------------------------------
    enc!("koi8-t", &[], EncodingEra::LEGACY_REGIONAL, false, &["tg"]),
    enc!("kz-1048", &["kz1048"], EncodingEra::LEGACY_REGIONAL, false, &["kk"]),
    enc!("ptcp154", &[], EncodingEra::LEGACY_REGIONAL, false, &["kk"]),
    enc!("cp1125", &[], EncodingEra::LEGACY_REGIONAL, false, &["uk"]),
    enc!("cp720", &[], EncodingEra::LEGACY_REGIONAL, false, &["ar"]),
    enc!("cp1006", &[], EncodingEra::LEGACY_REGIONAL, false, &["ur"]),
    // --- DOS codepages -----------------------------------------------------
    enc!("cp437", &[], EncodingEra::DOS, false, &["en"]),
    enc!("cp737", &[], EncodingEra::DOS, false, &["el"]),
    enc!("cp775", &[], EncodingEra::DOS, false, &["et", "lv", "lt"]),
    enc!("cp850", &[], EncodingEra::DOS, false, &["de", "fr", "es"]),
    enc!("cp852", &[], EncodingEra::DOS, false, &["pl", "cs", "hu"]),
    enc!("cp855", &[], EncodingEra::DOS, false, &["ru", "bg", "sr"]),
    enc!("cp856", &[], EncodingEra::DOS, false, &["he"]),
    enc!("cp857", &[], EncodingEra::DOS, false, &["tr"]),
    enc!("cp858", &[], EncodingEra::DOS, false, &["de", "fr"]),
    enc!("cp860", &[], EncodingEra::DOS, false, &["pt"]),
    enc!("cp861", &[], EncodingEra::DOS, false, &["is"]),
    enc!("cp862", &[], EncodingEra::DOS, false, &["he"]),
    enc!("cp863", &[], EncodingEra::DOS, false, &["fr"]),
    enc!("cp864", &[], EncodingEra::DOS, false, &["ar"]),
    enc!("cp865", &[], EncodingEra::DOS, false, &["da", "no"]),
    enc!("cp866", &[], EncodingEra::DOS, false, &["ru"]),
    enc!("cp869", &[], EncodingEra::DOS, false, &["el"]),
    // --- EBCDIC mainframe ----------------------------------------------
    enc!("cp037", &[], EncodingEra::MAINFRAME, false, &["en"]),
    enc!("cp424", &[], EncodingEra::MAINFRAME, false, &["he"]),
    enc!("cp500", &[], EncodingEra::MAINFRAME, false, &["de", "fr"]),
    enc!("cp875", &[], EncodingEra::MAINFRAME, false, &["el"]),
    enc!("cp1026", &[], EncodingEra::MAINFRAME, false, &["tr"]),
];

/// Process-wide immutable ordered sequence of every supported encoding.
pub static REGISTRY: Lazy<Vec<EncodingInfo>> = Lazy::new(|| REGISTRY_DATA.to_vec());

/// Every `EncodingInfo` whose era bit is set in `era_mask` (spec.md §4.2).
pub fn get_candidates(era_mask: EncodingEra) -> Vec<EncodingInfo> {
    REGISTRY
        .iter()
        .filter(|e| era_mask.intersects(e.era))
        .copied()
        .collect()
}

/// Case-insensitive lookup by canonical name or alias.
pub fn lookup(name: &str) -> Option<EncodingInfo> {
    let lower = name.to_ascii_lowercase();
    REGISTRY
        .iter()
        .find(|e| e.name == lower || e.aliases.iter().any(|a| *a == lower))
        .copied()
}
