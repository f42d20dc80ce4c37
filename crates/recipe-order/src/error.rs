//! Storage Errors
//!
//! Produced by key-value backends. The persistence adapter absorbs all of
//! them; nothing in the reorder core propagates an error outward.

use thiserror::Error;

pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    /// Backend missing or disabled (private mode, no window)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage read failed: {0}")]
    Read(String),
    /// Quota exceeded or write rejected
    #[error("storage write failed: {0}")]
    Write(String),
    #[error("serialization failed: {0}")]
    Serialize(String),
}
