//! Process-wide constants shared across pipeline stages.

/// Default cap on how many bytes of a buffer are ever examined.
pub const DEFAULT_MAX_BYTES: usize = 200_000;

/// `detect_all` drops results at or below this confidence unless
/// `ignore_threshold` is set (spec.md §6).
pub const MINIMUM_THRESHOLD: f32 = 0.20;

/// Confidence assigned to deterministic (non-BOM) terminal stages: escape,
/// markup, UTF-16/32 pattern, binary rejection.
pub const DETERMINISTIC_CONFIDENCE: f32 = 0.95;

/// `chunk_size` is accepted for chardet 6.x argument compatibility but has
/// no effect; any other value triggers a deprecation log line.
pub const DEFAULT_CHUNK_SIZE: usize = 65_536;

/// Structural score at or above which a multi-byte candidate short-circuits
/// single-byte ranking (spec.md §4.3).
pub const STRUCTURAL_CONFIDENCE_THRESHOLD: f32 = 0.85;

/// Minimum bytes appended to a streaming buffer before re-running the
/// deterministic early-exit checks (spec.md §4.8).
pub const MIN_INCREMENTAL_CHECK: usize = 64;
