//! Error types for vietseg.

/// Errors that can occur while preparing annotation data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid window size (must be >= 1).
    #[error("invalid window size: {0} (must be >= 1)")]
    InvalidWindowSize(usize),

    /// Invalid step size (must be >= 1).
    #[error("invalid step size: {0} (must be >= 1)")]
    InvalidStepSize(usize),

    /// The input table lacks a required column.
    #[error("input table is missing required column `{0}`")]
    MissingColumn(&'static str),

    /// Filesystem error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV read/write error.
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON serialization error.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for vietseg operations.
pub type Result<T> = std::result::Result<T, Error>;
