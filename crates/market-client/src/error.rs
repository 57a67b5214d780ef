use replay_core::SeriesError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {0}")]
    Status(reqwest::StatusCode),

    #[error("Upstream error: {0}")]
    Upstream(String),

    #[error("Invalid response body: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("Malformed series: {0}")]
    MalformedSeries(#[from] SeriesError),
}

pub type FetchResult<T> = Result<T, FetchError>;
