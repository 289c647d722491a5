//! Directory-backed key/value store.

use std::io;
use std::path::Path;

use cap_std::ambient_authority;
use cap_std::fs::Dir;

use crate::atomic_io::write_atomic;
use crate::error::KeyedStoreError;
use crate::key::StoreKey;

/// Text values stored one file per key inside a single directory.
///
/// All file access goes through a `cap_std` directory handle, so the store
/// cannot reach outside the directory it was opened on.
#[derive(Debug)]
pub struct KeyedStore {
    dir: Dir,
}

impl KeyedStore {
    /// Open the store rooted at `path`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`KeyedStoreError::Open`] when the directory cannot be
    /// created or opened.
    pub fn open(path: &Path) -> Result<Self, KeyedStoreError> {
        let open_error = |err: io::Error| KeyedStoreError::Open {
            path: path.to_path_buf(),
            message: err.to_string(),
        };
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(open_error)?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(open_error)?;
        Ok(Self { dir })
    }

    /// Read the value stored under `key`, or `None` when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns [`KeyedStoreError::Read`] for I/O failures other than a
    /// missing file, including non UTF-8 contents.
    pub fn get(&self, key: &StoreKey) -> Result<Option<String>, KeyedStoreError> {
        match self.dir.read_to_string(key.as_str()) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(KeyedStoreError::Read {
                key: key.to_string(),
                message: err.to_string(),
            }),
        }
    }

    /// Atomically replace the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyedStoreError::Write`] when the value cannot be persisted.
    pub fn set(&self, key: &StoreKey, value: &str) -> Result<(), KeyedStoreError> {
        write_atomic(&self.dir, key, value).map_err(|err| KeyedStoreError::Write {
            key: key.to_string(),
            message: err.to_string(),
        })
    }

    /// Remove the value stored under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`KeyedStoreError::Remove`] when the file exists but cannot be
    /// deleted.
    pub fn remove(&self, key: &StoreKey) -> Result<(), KeyedStoreError> {
        match self.dir.remove_file(key.as_str()) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(KeyedStoreError::Remove {
                key: key.to_string(),
                message: err.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    struct Fixture {
        _tmp: tempfile::TempDir,
        store: KeyedStore,
    }

    #[fixture]
    fn fixture() -> Fixture {
        let tmp = tempfile::tempdir().expect("temp dir");
        let store = KeyedStore::open(tmp.path()).expect("open store");
        Fixture { _tmp: tmp, store }
    }

    fn key(raw: &str) -> StoreKey {
        StoreKey::new(raw).expect("valid key")
    }

    #[rstest]
    fn missing_key_reads_as_none(fixture: Fixture) {
        assert_eq!(fixture.store.get(&key("absent")).expect("read"), None);
    }

    #[rstest]
    fn values_are_isolated_per_key(fixture: Fixture) {
        fixture.store.set(&key("a"), "one").expect("write a");
        fixture.store.set(&key("b"), "two").expect("write b");

        assert_eq!(fixture.store.get(&key("a")).expect("read a").as_deref(), Some("one"));
        assert_eq!(fixture.store.get(&key("b")).expect("read b").as_deref(), Some("two"));
    }

    #[rstest]
    fn removing_twice_is_not_an_error(fixture: Fixture) {
        fixture.store.set(&key("a"), "one").expect("write");
        fixture.store.remove(&key("a")).expect("first remove");
        fixture.store.remove(&key("a")).expect("second remove");
        assert_eq!(fixture.store.get(&key("a")).expect("read"), None);
    }

    #[test]
    fn open_creates_nested_directories() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let nested = tmp.path().join("state").join("client");

        let store = KeyedStore::open(&nested).expect("open nested");
        store.set(&key("k"), "v").expect("write");

        assert!(nested.join("k").is_file());
    }
}
