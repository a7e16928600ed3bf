//! Durable key/value preference storage.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("preference storage unavailable: {0}")]
    Unavailable(String),
    #[error("preference read failed: {0}")]
    Read(String),
    #[error("preference write failed: {0}")]
    Write(String),
}

/// A string store that outlives the page (e.g. `localStorage`).
pub trait PreferenceStore {
    /// # Errors
    ///
    /// Returns [`StorageError::Read`] when the backing store rejects the read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns [`StorageError::Write`] when the backing store rejects the write
    /// (disabled, quota exceeded).
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}
