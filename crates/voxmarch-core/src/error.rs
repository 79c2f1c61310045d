//! Error types for world editing.
//!
//! Ray marching never fails; these errors only come out of the checked
//! population and editing API.

use thiserror::Error;

/// World-wide error type.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid data error
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Out of bounds access
    #[error("Out of bounds: {0}")]
    OutOfBounds(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = Error::OutOfBounds("chunk (16, 0, 0)".to_string());
        assert_eq!(err.to_string(), "Out of bounds: chunk (16, 0, 0)");

        let err = Error::InvalidData("expected 32768 voxels, got 12".to_string());
        assert_eq!(err.to_string(), "Invalid data: expected 32768 voxels, got 12");
    }
}
