//! Bit-flag enumerations used to filter and prioritise detection candidates.

use bitflags::bitflags;
use once_cell::sync::Lazy;
use std::collections::HashMap;

bitflags! {
    /// Historical grouping of an encoding, used for candidate filtering and
    /// era-based tiebreaking (§4.2, §4.6).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct EncodingEra: u32 {
        const MODERN_WEB      = 1;
        const LEGACY_ISO      = 2;
        const LEGACY_MAC      = 4;
        const LEGACY_REGIONAL = 8;
        const DOS             = 16;
        const MAINFRAME       = 32;
        const ALL = Self::MODERN_WEB.bits()
            | Self::LEGACY_ISO.bits()
            | Self::LEGACY_MAC.bits()
            | Self::LEGACY_REGIONAL.bits()
            | Self::DOS.bits()
            | Self::MAINFRAME.bits();
    }
}

impl Default for EncodingEra {
    fn default() -> Self {
        EncodingEra::MODERN_WEB
    }
}

/// Priority order for era tiebreaking: lower number wins close contests.
pub static ERA_PRIORITY: Lazy<HashMap<EncodingEra, u8>> = Lazy::new(|| {
    let mut m = HashMap::with_capacity(6);
    m.insert(EncodingEra::MODERN_WEB, 0);
    m.insert(EncodingEra::LEGACY_ISO, 1);
    m.insert(EncodingEra::LEGACY_REGIONAL, 2);
    m.insert(EncodingEra::DOS, 3);
    m.insert(EncodingEra::LEGACY_MAC, 4);
    m.insert(EncodingEra::MAINFRAME, 5);
    m
});

/// Returns the priority value for an encoding's single-bit era, defaulting
/// to the lowest priority (highest number) if the era is not a known single
/// flag (e.g. a combined mask).
pub fn era_priority(era: EncodingEra) -> u8 {
    ERA_PRIORITY.get(&era).copied().unwrap_or(u8::MAX)
}

bitflags! {
    /// Caller-supplied script-family filter. Accepted for API compatibility
    /// with chardet 6.x; does not change results in this port (spec.md
    /// Glossary: "Language filter").
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LanguageFilter: u32 {
        const CHINESE_SIMPLIFIED  = 1;
        const CHINESE_TRADITIONAL = 2;
        const JAPANESE            = 4;
        const KOREAN              = 8;
        const NON_CJK             = 16;
        const ALL = Self::CHINESE_SIMPLIFIED.bits()
            | Self::CHINESE_TRADITIONAL.bits()
            | Self::JAPANESE.bits()
            | Self::KOREAN.bits()
            | Self::NON_CJK.bits();
    }
}

impl Default for LanguageFilter {
    fn default() -> Self {
        LanguageFilter::ALL
    }
}
