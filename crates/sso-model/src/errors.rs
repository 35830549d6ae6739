//! Model error types.

use thiserror::Error;

/// Model errors
#[derive(Debug, Error)]
pub enum ModelError {
    /// Configuration file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration document is not valid JSON for the expected shape
    #[error("Configuration parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Environment override holds a value of the wrong type
    #[error("Invalid value for {var}: {value:?}")]
    InvalidEnv {
        /// Environment variable name
        var: String,
        /// Offending value
        value: String,
    },

    /// Unknown auth service tag
    #[error("Unknown auth service: {0}")]
    UnknownAuthService(String),
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
