use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    #[error("{provider} responded with {status}: {body}")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{0} timed out after {1:?}")]
    Timeout(&'static str, Duration),

    #[error("{0} is not configured")]
    MissingCredential(&'static str),

    #[error("API error: {0}")]
    Api(String),

    #[error("Parsing error: {0}")]
    Parse(String),
}

pub type NewsResult<T> = Result<T, NewsError>;
