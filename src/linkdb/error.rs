use crate::model::EntryId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LinkDbError {
    #[error("invalid url: {0}")]
    Validation(String),

    #[error("Format error: {0}")]
    Format(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Link not found: {0}")]
    LinkNotFound(EntryId),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, LinkDbError>;
