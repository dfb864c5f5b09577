use crate::model::LongId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ZetError {
    #[error("No note matches '{0}'")]
    NotFound(String),

    #[error("'{input}' matches {} notes, type more characters", .candidates.len())]
    Ambiguous {
        input: String,
        candidates: Vec<LongId>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, ZetError>;
