//! Unified error types for pixel_engine

use thiserror::Error;

/// Main error type for pixel_engine operations
#[derive(Debug, Error)]
pub enum EngineError {
    // === Grid Errors ===
    #[error("Invalid grid dimension: side length {side_length} must be positive")]
    InvalidDimension { side_length: usize },

    #[error("Cell index {index} out of range (0..{len})")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Grid size mismatch: expected {expected} cells, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    // === Text Errors ===
    #[error("Malformed grid text: {message}")]
    MalformedText { message: String },

    // === Color Errors ===
    #[error("Invalid color: {value}")]
    InvalidColor { value: String },

    // === External Errors ===
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image processing error: {0}")]
    Image(#[from] image::ImageError),

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),
}

/// Result type alias for pixel_engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

// === Convenience constructors ===
impl EngineError {
    /// Create a malformed text error from any displayable type
    pub fn malformed_text(msg: impl std::fmt::Display) -> Self {
        Self::MalformedText { message: msg.to_string() }
    }

    /// Create an invalid color error
    pub fn invalid_color(value: impl Into<String>) -> Self {
        Self::InvalidColor { value: value.into() }
    }

    /// True for errors caused by user supplied data rather than by a caller bug.
    ///
    /// Front ends report these as notifications and keep going.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::MalformedText { .. } | Self::InvalidColor { .. } | Self::Io(_) | Self::Image(_))
    }
}
