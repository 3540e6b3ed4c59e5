//! Error types for pixel buffer access and filter entry points.
//!
//! Every variant is a caller contract violation. Filters propagate them
//! unchanged; nothing is clamped or replaced with a default pixel.

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PixelBufferError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PixelBufferError {
    /// Coordinate outside `[0, width) x [0, height)`
    #[error("pixel ({col}, {row}) is outside a {width}x{height} buffer")]
    OutOfBounds {
        col: isize,
        row: isize,
        width: usize,
        height: usize,
    },

    /// Buffer created with a zero width or height
    #[error("invalid buffer dimensions {width}x{height}: both must be at least 1")]
    InvalidDimensions { width: usize, height: usize },

    /// Destination buffer shape differs from the source
    #[error("dimension mismatch: expected {expected:?}, got {actual:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        actual: (usize, usize),
    },

    /// Array input with a channel count other than 1, 3 or 4
    #[error("unsupported channel count {0} (expected 1, 3 or 4)")]
    UnsupportedChannels(usize),

    /// Packed RGB input whose length is not `width * height * 3`
    #[error("invalid data length: expected {expected} bytes, got {actual}")]
    InvalidDataLength { expected: usize, actual: usize },
}
