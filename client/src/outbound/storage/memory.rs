//! In-memory state storage for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::ports::{StateStorage, StateStorageError};

/// Storage that forgets everything when dropped.
#[derive(Debug, Default)]
pub struct MemoryStateStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStateStorage {
    /// Current document under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries().get(key).cloned()
    }

    /// Seed a document, bypassing the port.
    pub fn insert(&self, key: &str, value: &str) {
        self.entries().insert(key.to_owned(), value.to_owned());
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StateStorage for MemoryStateStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StateStorageError> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StateStorageError> {
        self.insert(key, value);
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StateStorageError> {
        self.entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn behaves_like_a_key_value_store() {
        let storage = MemoryStateStorage::default();
        assert_eq!(storage.read("k").expect("read"), None);

        storage.write("k", "v").expect("write");
        assert_eq!(storage.read("k").expect("read").as_deref(), Some("v"));

        storage.remove("k").expect("remove");
        storage.remove("k").expect("remove again");
        assert_eq!(storage.read("k").expect("read"), None);
    }
}
