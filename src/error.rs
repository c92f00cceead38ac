use std::io;
use thiserror::Error;

/// Custom error type for sysfetch
#[derive(Error, Debug)]
pub enum SysfetchError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Battery error: {0}")]
    Battery(#[from] battery::Error),

    #[error("Facts provider error: {0}")]
    Provider(String),

    #[error("Not supported on this platform: {0}")]
    Unsupported(String),
}

/// Result type alias for sysfetch
pub type Result<T> = std::result::Result<T, SysfetchError>;

impl SysfetchError {
    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        SysfetchError::Config(msg.into())
    }

    /// Create a provider error
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        SysfetchError::Provider(msg.into())
    }

    pub fn unsupported<S: Into<String>>(msg: S) -> Self {
        SysfetchError::Unsupported(msg.into())
    }
}
