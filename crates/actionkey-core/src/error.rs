use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ActionKeyError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("manifest not found: {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ActionKeyError>;
