// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RedflagError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Not inside a Git repository")]
    NotInGitRepo,

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Git command failed: {0}")]
    Vcs(String),

    #[error("binary file, skipping: {0}")]
    Binary(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, RedflagError>;

// Allow `?` on std::io::Error by converting to RedflagError::Io with unknown path.
impl From<std::io::Error> for RedflagError {
    fn from(source: std::io::Error) -> Self {
        RedflagError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
