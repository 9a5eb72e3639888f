//! Error types for the Gift Shop

use thiserror::Error;

/// Main error type for Gift Shop operations
#[derive(Error, Debug)]
pub enum ShopError {
    /// A gift names a category that is missing from the category table
    #[error("Can not find a category for {0}")]
    UnknownCategory(String),

    /// The gift resource could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(String),

    /// The gift resource is not a valid gift array
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A card payload could not be decoded
    #[error("Invalid card payload: {0}")]
    Payload(String),

    /// A user-supplied setting is malformed
    #[error("Invalid setting: {0}")]
    InvalidSetting(String),
}

impl From<reqwest::Error> for ShopError {
    fn from(err: reqwest::Error) -> Self {
        ShopError::Fetch(err.to_string())
    }
}

/// Result type alias using ShopError
pub type ShopResult<T> = Result<T, ShopError>;
