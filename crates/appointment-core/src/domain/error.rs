//! Domain Layer - Errors
//!
//! Only infrastructure failures are errors. Bad user input is never reported
//! through this type; the book simply ignores it.

use serde::{Deserialize, Serialize};

/// Common result type for book and storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Failures of the persistence layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StoreError {
    /// The key-value backend is missing or rejected the operation
    Storage(String),
    /// The persisted value could not be encoded or decoded
    Codec(String),
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Storage(msg) => write!(f, "Storage error: {}", msg),
            StoreError::Codec(msg) => write!(f, "Codec error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Codec(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = StoreError::Storage("quota exceeded".to_string());
        assert_eq!(err.to_string(), "Storage error: quota exceeded");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<Vec<u32>>("not json").unwrap_err();
        let err: StoreError = json_err.into();
        assert!(matches!(err, StoreError::Codec(_)));
    }
}
