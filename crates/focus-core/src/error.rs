use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightError {
    #[error("Session parse error: {0}")]
    SessionParse(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, InsightError>;
