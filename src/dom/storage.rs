//! `PreferenceStore` over `window.localStorage`.

use web_sys::{Storage, Window};

use super::describe;
use crate::store::{PreferenceStore, StorageError};

pub struct LocalStore {
    storage: Storage,
}

impl LocalStore {
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when storage is disabled or
    /// blocked (private browsing, sandboxed frames).
    pub fn open(window: &Window) -> Result<Self, StorageError> {
        match window.local_storage() {
            Ok(Some(storage)) => Ok(Self { storage }),
            Ok(None) => Err(StorageError::Unavailable("localStorage disabled".to_owned())),
            Err(err) => Err(StorageError::Unavailable(describe(&err))),
        }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage
            .get_item(key)
            .map_err(|err| StorageError::Read(describe(&err)))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage
            .set_item(key, value)
            .map_err(|err| StorageError::Write(describe(&err)))
    }
}
