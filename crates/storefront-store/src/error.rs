//! # Storage Error Types
//!
//! Errors from reading or writing snapshots.
//!
//! ## Error Flow
//! ```text
//! std::io::Error      ─┐
//!                      ├──► StoreError ──► logged by CartStore/WishlistStore
//! serde_json::Error   ─┘                   (never surfaced to the shopper)
//! ```

use thiserror::Error;

/// Snapshot storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing or removing a snapshot failed.
    ///
    /// ## When This Occurs
    /// - Data directory can't be created
    /// - File permissions issue
    /// - Disk full
    #[error("Storage I/O failed for '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// Snapshot could not be encoded or decoded.
    #[error("Snapshot serialization failed for '{key}': {source}")]
    Serialization {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Key contains characters that can't name a snapshot.
    ///
    /// Keys are limited to ASCII letters, digits, `-` and `_` so a file
    /// backend never escapes its directory.
    #[error("Invalid storage key: '{0}'")]
    InvalidKey(String),

    /// A storage lock was poisoned by a panicking writer.
    #[error("Storage lock poisoned")]
    LockPoisoned,
}

impl StoreError {
    pub fn io(key: impl Into<String>, source: std::io::Error) -> Self {
        StoreError::Io {
            key: key.into(),
            source,
        }
    }

    pub fn serialization(key: impl Into<String>, source: serde_json::Error) -> Self {
        StoreError::Serialization {
            key: key.into(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;
