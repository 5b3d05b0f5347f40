use crate::leveling::Category;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GitQuestError {
    #[error("No formula parameters registered for category: {0}")]
    MissingFormula(Category),

    #[error("Unknown category in configuration: {0}")]
    UnknownCategory(String),

    #[error("Invalid formula parameters for {category}: {reason}")]
    InvalidParams { category: Category, reason: String },

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GitQuestError>;
