//! Named-key text blob storage backed by a capability-scoped directory.
//!
//! Each key maps to exactly one file holding the caller's text (typically a
//! JSON document). Writes go through a temporary file and rename so a
//! crash never leaves a half-written value behind. The crate knows nothing
//! about the shape of the stored text; schema handling is the caller's job.
//!
//! # Example
//!
//! ```
//! use keyed_store::{KeyedStore, StoreKey};
//!
//! let tmp = tempfile::tempdir().expect("temp dir");
//! let store = KeyedStore::open(tmp.path()).expect("open store");
//! let key = StoreKey::new("sdu_meow_auth").expect("valid key");
//!
//! store.set(&key, r#"{"token":"t"}"#).expect("write value");
//! assert_eq!(store.get(&key).expect("read value").as_deref(), Some(r#"{"token":"t"}"#));
//!
//! store.remove(&key).expect("remove value");
//! assert_eq!(store.get(&key).expect("read value"), None);
//! ```

mod atomic_io;
mod error;
mod key;
mod store;

pub use error::{KeyValidationError, KeyedStoreError};
pub use key::StoreKey;
pub use store::KeyedStore;
