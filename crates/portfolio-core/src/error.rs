//! Error types for the portfolio interaction layer

use thiserror::Error;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// The key-value store rejected a read or write (unavailable, quota)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Error during serialization/deserialization
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration value out of range
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::Storage("quota exceeded".to_string());
        assert_eq!(format!("{}", err), "Storage error: quota exceeded");
    }

    #[test]
    fn test_error_from_serde() {
        let json_err = serde_json::from_str::<Vec<String>>("{not json").unwrap_err();
        let err: PortfolioError = json_err.into();
        assert!(matches!(err, PortfolioError::Serialization(_)));
    }
}
