use thiserror::Error;

#[derive(Error, Debug)]
pub enum TubelensError {
    #[error("Browser error: {0}")]
    Browser(String),

    #[error("Timed out waiting for {0}")]
    Timeout(String),

    #[error("Could not find or click {0}")]
    ControlNotFound(String),

    #[error("Invalid parameter: {0}")]
    Validation(String),

    #[error("No results: {0}")]
    Empty(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, TubelensError>;
