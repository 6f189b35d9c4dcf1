//! Service client error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Service returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("Service reported an error: {0}")]
    Rejected(String),

    #[error("Malformed response body: {0}")]
    Malformed(String),

    #[error("Invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("Unusable MIME type: {0}")]
    Mime(String),
}
