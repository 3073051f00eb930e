//! Typed errors raised at the public API boundary.
//!
//! Per spec.md §7, the only conditions that raise are programmer errors:
//! bad arguments, or misuse of the streaming detector's lifecycle. Every
//! data-driven failure (bad decode, missing model file, unrecognised markup
//! charset) degrades gracefully to a well-formed negative result instead.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetectError {
    #[error("max_bytes must be a positive integer, got {0}")]
    InvalidMaxBytes(i64),

    #[error("feed() called after close() without reset()")]
    StreamClosed,
}
