//! The fourteen-stage detection pipeline (spec.md §2, §4).
//!
//! Each stage is a small module exposing a `try_detect` (or similarly named)
//! function that inspects the buffer and either returns a terminal
//! [`DetectionResult`] or declines by returning `None`, letting
//! [`orchestrator::run`] fall through to the next stage. This mirrors the
//! original rewrite's `pipeline/__init__.py` dispatch shape, translated from
//! exceptions-as-control-flow to `Option`/`Result`.

pub mod ascii;
pub mod binary;
pub mod bom;
pub mod confusion;
pub mod era_tiebreak;
pub mod escape;
pub mod markup;
pub mod orchestrator;
pub mod statistical;
pub mod structural;
pub mod utf1632;
pub mod utf8;
pub mod validity;

/// Outcome of running the pipeline over a byte buffer.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DetectionResult {
    pub encoding: Option<String>,
    pub confidence: f32,
    pub language: Option<String>,
}

impl DetectionResult {
    pub fn none() -> Self {
        DetectionResult {
            encoding: None,
            confidence: 0.0,
            language: None,
        }
    }

    pub fn new(encoding: impl Into<String>, confidence: f32, language: Option<String>) -> Self {
        DetectionResult {
            encoding: Some(encoding.into()),
            confidence,
            language,
        }
    }
}

/// A scored candidate encoding surfaced mid-pipeline, before final
/// selection. Distinct from [`DetectionResult`] in that confidence here is
/// a provisional ranking score, not a calibrated probability.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub encoding: String,
    pub confidence: f32,
    pub language: Option<String>,
}

/// Per-call scratch state threaded through the statistical stages so
/// repeated work (decoding, byte histograms) is computed once. Mirrors the
/// original rewrite's `PipelineContext` dataclass.
#[derive(Debug, Default)]
pub struct PipelineContext {
    /// Decoded text cached per-encoding-name, populated lazily.
    pub analysis_cache: std::collections::HashMap<String, String>,
    pub non_ascii_count: usize,
    /// Multi-byte structural scores, per encoding name.
    pub mb_scores: std::collections::HashMap<String, f32>,
    /// Multi-byte byte-coverage ratios, per encoding name.
    pub mb_coverage: std::collections::HashMap<String, f32>,
}

impl PipelineContext {
    pub fn new(data: &[u8]) -> Self {
        let non_ascii_count = data.iter().filter(|&&b| b > 0x7F).count();
        PipelineContext {
            analysis_cache: std::collections::HashMap::new(),
            non_ascii_count,
            mb_scores: std::collections::HashMap::new(),
            mb_coverage: std::collections::HashMap::new(),
        }
    }
}
