//! Error types for the adaptive pruning engine.

use thiserror::Error;

/// Errors that can occur while building the per-node alpha table.
///
/// Every variant is recoverable at the context boundary: a failed
/// initialization leaves the context disabled and the surrounding index
/// build falls back to its fixed pruning coefficient. Lookups never error.
#[derive(Debug, Error)]
pub enum McgiError {
    /// I/O error (LID file missing or unreadable)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header declares a non-positive point count
    #[error("malformed LID header: declared count {count}")]
    MalformedHeader { count: i32 },

    /// Payload shorter than the header-declared count
    #[error("truncated LID payload: expected {expected} bytes, got {actual}")]
    TruncatedData { expected: usize, actual: usize },

    /// Inverted alpha range, rejected at configuration time
    #[error("invalid alpha range: alpha_min {alpha_min} > alpha_max {alpha_max}")]
    InvalidRange { alpha_min: f32, alpha_max: f32 },

    /// The context is already enabled; tear it down before re-initializing
    #[error("context already initialized")]
    AlreadyInitialized,
}

/// Result type for engine operations.
pub type McgiResult<T> = Result<T, McgiError>;
