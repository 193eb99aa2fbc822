//! Durable client-side key/value storage.
//!
//! The storefront keeps its session in a small string key/value store, the
//! way a browser keeps it in `localStorage`. The [`Storage`] trait is that
//! seam; two backends are provided:
//!
//! - [`MemoryStorage`]: process-local, cheaply cloneable, shared between clones
//! - [`FileStorage`]: a JSON document on disk, rewritten atomically on every change
//!
//! Multi-key writes go through [`Storage::set_items`] and
//! [`Storage::remove_items`], which apply all entries or none. The session
//! manager relies on this to keep `currentUser` and `authToken` in lockstep.

mod file;
mod memory;

use std::path::PathBuf;

use thiserror::Error;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Errors raised by a [`Storage`] backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("Storage I/O error at '{}': {source}", path.display())]
    Io {
        /// The file being accessed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not contain a JSON object of strings.
    #[error("Storage file '{}' is corrupt: {source}", path.display())]
    Corrupt {
        /// The file being parsed.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// The entries could not be serialized for writing.
    #[error("Storage entries could not be encoded: {source}")]
    Encode {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// A string key/value store that survives restarts.
///
/// Implementations must make [`set_items`](Self::set_items) and
/// [`remove_items`](Self::remove_items) all-or-nothing: after either call
/// returns, a reader observes every entry of the batch or none of them.
pub trait Storage: Send + Sync {
    /// Returns the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores every `(key, value)` pair in one atomic write.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails; no entry is changed then.
    fn set_items(&self, entries: &[(&str, &str)]) -> Result<(), StorageError>;

    /// Removes every key in one atomic write. Missing keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails; no entry is changed then.
    fn remove_items(&self, keys: &[&str]) -> Result<(), StorageError>;

    /// Stores a single entry.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.set_items(&[(key, value)])
    }

    /// Removes a single entry.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the write fails.
    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.remove_items(&[key])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_includes_path() {
        let error = StorageError::Io {
            path: PathBuf::from("/tmp/session.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let message = error.to_string();
        assert!(message.contains("/tmp/session.json"));
        assert!(message.contains("denied"));
    }

    #[test]
    fn test_encode_error_is_not_reported_as_corrupt_file() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let message = StorageError::Encode { source }.to_string();
        assert!(message.starts_with("Storage entries could not be encoded"));
        assert!(!message.contains("corrupt"));
    }

    #[test]
    fn test_default_single_item_methods_delegate_to_batches() {
        let storage = MemoryStorage::new();
        storage.set_item("authToken", "T1").unwrap();
        assert_eq!(storage.get_item("authToken").unwrap().as_deref(), Some("T1"));

        storage.remove_item("authToken").unwrap();
        assert!(storage.get_item("authToken").unwrap().is_none());
    }
}
