use crate::git::ShellError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PruneError {
    #[error("Git operation failed: {0}")]
    Git(String),

    #[error("Invalid reference: {0}")]
    Reference(ShellError),

    #[error("No command to execute")]
    NoCommand,

    #[error("Configuration error: {0}")]
    Config(#[from] git2::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PruneError>;
