//! String store error types

use thiserror::Error;

/// Errors from the string store and its persistence backends
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("String already exists: {id}")]
    AlreadyExists { id: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_display() {
        let err = StoreError::AlreadyExists {
            id: "abc123".to_string(),
        };
        assert_eq!(err.to_string(), "String already exists: abc123");
    }

    #[test]
    fn test_io_error_from() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: StoreError = io_err.into();
        assert!(matches!(err, StoreError::Io(_)));
        assert!(err.to_string().contains("denied"));
    }
}
