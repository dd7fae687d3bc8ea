use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssetPrepError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to fetch asset: {0}")]
    Fetch(#[from] crate::download::FetchError),

    #[error("Failed to write asset to {path}: {reason}")]
    AssetWrite { path: PathBuf, reason: String },

    #[error("Failed to read {path} for rewriting: {reason}")]
    RewriteRead { path: PathBuf, reason: String },

    #[error("Failed to write rewritten {path}: {reason}")]
    RewriteWrite { path: PathBuf, reason: String },

    #[error("Invalid command line arguments: {details}")]
    CliArgumentValidation { details: String },

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unexpected error: {0}")]
    Unexpected(#[from] eyre::Report),
}
