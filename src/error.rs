//! Error types for the raster pipeline

use thiserror::Error;

/// Raster pipeline error types
#[derive(Debug, Error)]
pub enum RasterError {
    /// Source document unreadable or page index out of range
    #[error("Decode failed: {0}")]
    Decode(String),

    /// Invalid processing configuration
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Preview image encoding failure
    #[error("Preview encoding failed: {0}")]
    Encoding(String),
}

/// Result type for raster pipeline operations
pub type RasterResult<T> = Result<T, RasterError>;
