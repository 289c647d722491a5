//! Driven port for durable client-side key/value state.
//!
//! The session and preference stores persist one JSON document per fixed
//! key. Adapters decide where those documents live (a directory on disk,
//! memory in tests).

use super::define_port_error;

define_port_error! {
    /// Errors surfaced by storage adapters.
    pub enum StateStorageError {
        /// Backing store could not be reached or opened.
        Unavailable {
            /// Adapter description of the failure.
            message: String,
        } => "state storage unavailable: {message}",
        /// Reading a stored value failed.
        Read {
            /// Storage key being read.
            key: String,
            /// Adapter description of the failure.
            message: String,
        } => "failed to read stored state '{key}': {message}",
        /// Writing or removing a stored value failed.
        Write {
            /// Storage key being written or removed.
            key: String,
            /// Adapter description of the failure.
            message: String,
        } => "failed to write stored state '{key}': {message}",
    }
}

/// Port for reading and replacing persisted state documents.
///
/// Calls are synchronous: reads happen once at startup and writes happen
/// inline with each state transition.
#[cfg_attr(test, mockall::automock)]
pub trait StateStorage: Send + Sync {
    /// Return the document stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StateStorageError>;

    /// Replace the document stored under `key`.
    fn write(&self, key: &str, value: &str) -> Result<(), StateStorageError>;

    /// Delete the document stored under `key`. Missing keys are not an error.
    fn remove(&self, key: &str) -> Result<(), StateStorageError>;
}
