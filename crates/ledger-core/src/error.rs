use crate::types::OpponentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("opponent not found: {0}")]
    OpponentNotFound(OpponentId),

    #[error("opponent name is required")]
    NameRequired,

    #[error("please provide both a date and a score")]
    MatchFieldsRequired,

    #[error("match #{index} not found for opponent {opponent}")]
    MatchNotFound { opponent: OpponentId, index: usize },

    #[error("invalid match date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("No data to export.")]
    NoDataToExport,

    #[error("error importing file: {0}")]
    InvalidBackup(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LedgerError>;
