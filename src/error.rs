//! Error types for tiling generation and export

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TilingError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TilingError>;
