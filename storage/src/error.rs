//! Storage error types.
//!
//! Only writes can fail: reads on missing or malformed data degrade to empty
//! containers instead of raising.

use thiserror::Error;

/// Errors that can occur when writing through a store.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}
