//! Error types for the traceform detection library.

use thiserror::Error;

/// Primary error type for detection operations.
///
/// The detection pipeline itself is total: every well-formed input maps to
/// an output list. Errors only arise at the API boundary.
#[derive(Error, Debug)]
pub enum DetectError {
    #[error("invalid canvas size {width}x{height}: both dimensions must be positive")]
    InvalidCanvas { width: f64, height: f64 },
}

/// Convenience Result type alias for DetectError.
pub type Result<T> = std::result::Result<T, DetectError>;
