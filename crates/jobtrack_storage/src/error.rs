use std::io;

use jobtrack_core::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage directory missing or not writable: {0}")]
    Directory(String),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed stored value: {0}")]
    Codec(#[from] serde_json::Error),
    #[error("stored record is invalid: {0}")]
    Record(#[from] ValidationError),
    #[error("stored record has an empty id")]
    EmptyId,
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
