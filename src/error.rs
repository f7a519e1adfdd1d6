//! Error types for search-space construction

use thiserror::Error;

/// Result type alias for search-space operations
pub type Result<T> = std::result::Result<T, NasError>;

/// Main error type for the mobile-nas crate
#[derive(Error, Debug)]
pub enum NasError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Schema error: expected {expected} blocks, got {actual}")]
    SchemaError { expected: usize, actual: usize },

    #[error("Unknown reference architecture: {0}")]
    UnknownReference(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for NasError {
    fn from(err: serde_json::Error) -> Self {
        NasError::SerializationError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = NasError::ValidationError("se_ratio out of range".to_string());
        assert_eq!(err.to_string(), "Validation error: se_ratio out of range");
    }

    #[test]
    fn test_schema_error_display() {
        let err = NasError::SchemaError {
            expected: 7,
            actual: 3,
        };
        assert_eq!(err.to_string(), "Schema error: expected 7 blocks, got 3");
    }

    #[test]
    fn test_error_from_serde() {
        let bad = serde_json::from_str::<Vec<u32>>("not json");
        let err: NasError = bad.unwrap_err().into();
        assert!(matches!(err, NasError::SerializationError(_)));
    }
}
