use std::path::PathBuf;

/// Errors from configuring or running the asset host.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("entry document not found at {0}")]
    MissingEntryDocument(PathBuf),
    #[error("invalid port {0:?}")]
    InvalidPort(String),
}
