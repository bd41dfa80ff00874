//! Error handling for the GoodWe portal client.

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid portal URL: {0}")]
    InvalidUrl(String),
    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("Response JSON error: {0}")]
    ResponseJsonError(#[from] serde_json::Error),
    #[error("Invalid export descriptor: {0}")]
    InvalidDescriptor(String),
    #[error("Unexpected dashboard markup: {0}")]
    UnexpectedMarkup(String),
    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
