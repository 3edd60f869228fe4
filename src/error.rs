//! Error handling and custom error types
//!
//! Provides unified error handling across the crate using thiserror.
//! Non-2xx API statuses are not errors: those are logged and surface as empty
//! responses. Only transport failures, malformed bodies and data-integrity
//! problems reach the caller as `Err`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Image decoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Response integrity error: {0}")]
    Integrity(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
