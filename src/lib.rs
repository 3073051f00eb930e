//! chardet-rs
//! ==========
//!
//! A staged universal character-encoding detector, in pure Rust.
//!
//! This is a port of a chardet-family rewrite: instead of accumulating a
//! single chaos/coherence score across the whole byte-probability space,
//! detection runs as an ordered pipeline of cheap, mostly-deterministic
//! stages (BOM, UTF-16/32 pattern, escape sequences, binary rejection,
//! declared-markup charset, ASCII, UTF-8 structure) before falling back to
//! statistical ranking over the surviving candidates. Most real-world
//! documents are settled by one of the early deterministic stages and
//! never reach the statistical tail at all.
//!
//! # Library
//!
//! The two entry points are [`detect`] and [`detect_all`]:
//!
//! ```rust
//! use chardet_rs::detect;
//!
//! let result = detect("café".as_bytes(), None).unwrap();
//! assert_eq!(result.encoding.as_deref(), Some("utf-8"));
//! ```
//!
//! For documents arriving in pieces, [`detector::UniversalDetector`] gives
//! a `feed`/`close` streaming API instead.
//!
//! # CLI tool
//!
//! A `chardetect` binary ships behind the `cli` feature, mirroring the
//! upstream chardet command-line tool's flags and JSON-ish text output.

pub mod codecs;
pub mod consts;
pub mod detector;
pub mod enums;
pub mod equivalences;
pub mod error;
pub mod legacy_tables;
pub mod models;
pub mod pipeline;
pub mod registry;

use once_cell::sync::Lazy;

use consts::{DEFAULT_CHUNK_SIZE, DEFAULT_MAX_BYTES, MINIMUM_THRESHOLD};
use enums::{EncodingEra, LanguageFilter};
use error::DetectError;
use models::ModelSet;
use pipeline::confusion::ConfusionSet;
use pipeline::{orchestrator, DetectionResult};

static MODELS: Lazy<ModelSet> = Lazy::new(|| {
    let bytes = include_bytes!("../assets/models.bin");
    ModelSet::from_bytes(bytes).unwrap_or_default()
});

static CONFUSION: Lazy<ConfusionSet> = Lazy::new(|| {
    let bytes = include_bytes!("../assets/confusion.bin");
    ConfusionSet::from_bytes(bytes).unwrap_or_default()
});

/// Options accepted by [`detect`] and [`detect_all`], mirroring chardet
/// 6.x's keyword arguments for drop-in call-site compatibility.
#[derive(Debug, Clone)]
pub struct DetectOptions {
    /// Bytes examined before detection gives up on the rest of the buffer.
    pub max_bytes: usize,
    /// Restricts candidates to encodings whose era bit is set here.
    pub era_mask: EncodingEra,
    /// Accepted for API compatibility; does not change results (spec.md
    /// Glossary, "Language filter").
    pub language_filter: LanguageFilter,
    /// Accepted for API compatibility; chardet 6.x deprecated per-chunk
    /// streaming control in favour of the dedicated streaming detector.
    /// Any value other than the default logs a deprecation warning.
    pub chunk_size: usize,
    /// If true, [`detect_all`] returns every candidate regardless of
    /// [`consts::MINIMUM_THRESHOLD`].
    pub ignore_threshold: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        DetectOptions {
            max_bytes: DEFAULT_MAX_BYTES,
            era_mask: EncodingEra::ALL,
            language_filter: LanguageFilter::ALL,
            chunk_size: DEFAULT_CHUNK_SIZE,
            ignore_threshold: false,
        }
    }
}

fn validate_max_bytes(max_bytes: usize) -> Result<usize, DetectError> {
    if max_bytes == 0 {
        return Err(DetectError::InvalidMaxBytes(0));
    }
    Ok(max_bytes)
}

fn warn_deprecated_chunk_size(chunk_size: usize) {
    if chunk_size != DEFAULT_CHUNK_SIZE {
        log::warn!(
            "chunk_size is deprecated and has no effect; got {chunk_size}, use the streaming detector for incremental control"
        );
    }
}

/// Detects the single most likely encoding of `data`.
///
/// `options` defaults to examining up to [`consts::DEFAULT_MAX_BYTES`]
/// across every era with no language restriction. Never raises on
/// malformed *input* — every unrecognisable buffer degrades to
/// `DetectionResult { encoding: None, confidence: 0.0, .. }` (spec.md §7's
/// Open Question on empty input is resolved in favour of this strict
/// reading; see DESIGN.md). The only raised condition is a bad argument:
/// `max_bytes == 0`.
pub fn detect(data: &[u8], options: Option<DetectOptions>) -> Result<DetectionResult, DetectError> {
    let options = options.unwrap_or_default();
    warn_deprecated_chunk_size(options.chunk_size);
    let max_bytes = validate_max_bytes(options.max_bytes)?;
    let truncated = &data[..data.len().min(max_bytes)];
    Ok(orchestrator::run(truncated, options.era_mask, &MODELS, &CONFUSION))
}

/// Detects every plausible encoding of `data`, most confident first.
/// Results at or below [`consts::MINIMUM_THRESHOLD`] are dropped unless
/// `options.ignore_threshold` is set.
pub fn detect_all(data: &[u8], options: Option<DetectOptions>) -> Result<Vec<DetectionResult>, DetectError> {
    let options = options.unwrap_or_default();
    warn_deprecated_chunk_size(options.chunk_size);
    let max_bytes = validate_max_bytes(options.max_bytes)?;
    let truncated = &data[..data.len().min(max_bytes)];
    let results = orchestrator::run_all(truncated, options.era_mask, &MODELS, &CONFUSION);
    Ok(if options.ignore_threshold {
        results
    } else {
        results
            .into_iter()
            .filter(|r| r.confidence > MINIMUM_THRESHOLD || r.encoding.is_none())
            .collect()
    })
}
