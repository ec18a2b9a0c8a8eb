//! Error types for the portal core

use thiserror::Error;

pub type CoreResult<T> = Result<T, RepoError>;

/// Errors raised by the client repository
#[derive(Error, Debug)]
pub enum RepoError {
    #[error("client {0} not found")]
    NotFound(u64),

    #[error("storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed client document: {0}")]
    Json(#[from] serde_json::Error),
}
