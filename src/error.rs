//! Error type shared by the fallible helpers.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UtilError {
    #[error("Invalid base64 input: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decoded bytes are not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Timestamp out of range: {0}")]
    InvalidTimestamp(i64),

    #[error("Unsupported locale: {0}")]
    UnsupportedLocale(String),

    #[error("Unsupported currency: {0}")]
    UnsupportedCurrency(String),

    #[error("Value contains a reference cycle at depth {depth}")]
    CyclicValue { depth: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, UtilError>;
