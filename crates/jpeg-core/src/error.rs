//! Error types for block transform operations

use thiserror::Error;

/// Result type for block transform operations
pub type JpegResult<T> = Result<T, JpegError>;

/// Errors that can occur while building, accessing or converting image data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum JpegError {
    #[error("Unknown pixel format: {0}")]
    InvalidFormat(String),

    #[error("Index ({row}, {col}) out of range for {height}x{width} matrix")]
    IndexOutOfRange {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Buffer too small: expected {expected}, got {actual}")]
    BufferTooSmall { expected: usize, actual: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_error_names_index_and_range() {
        let err = JpegError::IndexOutOfRange {
            row: 16,
            col: 0,
            height: 16,
            width: 24,
        };
        assert_eq!(
            err.to_string(),
            "Index (16, 0) out of range for 16x24 matrix"
        );
    }
}
