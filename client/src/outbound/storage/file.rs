//! Directory-backed state storage built on `keyed-store`.

use std::path::Path;

use keyed_store::{KeyedStore, KeyedStoreError, StoreKey};

use crate::domain::ports::{StateStorage, StateStorageError};

/// Stores each state document as a file inside one directory.
#[derive(Debug)]
pub struct FileStateStorage {
    store: KeyedStore,
}

impl FileStateStorage {
    /// Open (creating if needed) the storage directory.
    ///
    /// # Errors
    ///
    /// Returns [`StateStorageError::Unavailable`] when the directory cannot
    /// be opened.
    pub fn open(path: &Path) -> Result<Self, StateStorageError> {
        let store = KeyedStore::open(path)
            .map_err(|error| StateStorageError::unavailable(error.to_string()))?;
        Ok(Self { store })
    }
}

fn store_key(key: &str) -> Result<StoreKey, StateStorageError> {
    StoreKey::new(key).map_err(|error| StateStorageError::unavailable(error.to_string()))
}

fn map_store_error(key: &str, error: KeyedStoreError) -> StateStorageError {
    match error {
        KeyedStoreError::Open { message, .. } => StateStorageError::unavailable(message),
        KeyedStoreError::Read { message, .. } => StateStorageError::read(key, message),
        KeyedStoreError::Write { message, .. } | KeyedStoreError::Remove { message, .. } => {
            StateStorageError::write(key, message)
        }
    }
}

impl StateStorage for FileStateStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StateStorageError> {
        self.store
            .get(&store_key(key)?)
            .map_err(|error| map_store_error(key, error))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StateStorageError> {
        self.store
            .set(&store_key(key)?, value)
            .map_err(|error| map_store_error(key, error))
    }

    fn remove(&self, key: &str) -> Result<(), StateStorageError> {
        self.store
            .remove(&store_key(key)?)
            .map_err(|error| map_store_error(key, error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_survive_reopening() {
        let tmp = tempfile::tempdir().expect("temp dir");
        FileStateStorage::open(tmp.path())
            .expect("open")
            .write("sdu_meow_auth", r#"{"role":"guest"}"#)
            .expect("write");

        let reopened = FileStateStorage::open(tmp.path()).expect("reopen");
        assert_eq!(
            reopened.read("sdu_meow_auth").expect("read").as_deref(),
            Some(r#"{"role":"guest"}"#)
        );
    }

    #[test]
    fn keys_cannot_escape_the_directory() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let storage = FileStateStorage::open(tmp.path()).expect("open");

        let error = storage.write("../outside", "x").expect_err("must reject");
        assert!(matches!(error, StateStorageError::Unavailable { .. }));
    }
}
