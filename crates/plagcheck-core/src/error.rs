use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No text to analyze")]
    EmptyInput,

    #[error("Analysis service returned HTTP {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed analysis response: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
