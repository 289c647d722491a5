//! Persisted campus preference.

use std::sync::{Arc, Mutex, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ports::StateStorage;

/// Storage key holding the selected campus.
pub const CAMPUS_STORAGE_KEY: &str = "sdu_meow_campus";
/// Campus used until the visitor picks one.
pub const DEFAULT_CAMPUS: &str = "SOFTWARE_PARK";

#[derive(Debug, Serialize, Deserialize)]
struct CampusRecord {
    campus: String,
}

/// The campus whose cats and posts the client shows.
pub struct CampusStore {
    storage: Arc<dyn StateStorage>,
    campus: Mutex<String>,
}

impl CampusStore {
    /// Load the stored campus, falling back to [`DEFAULT_CAMPUS`] when
    /// nothing usable is stored.
    #[must_use]
    pub fn load(storage: Arc<dyn StateStorage>) -> Self {
        let stored = match storage.read(CAMPUS_STORAGE_KEY) {
            Ok(text) => text
                .and_then(|text| serde_json::from_str::<CampusRecord>(&text).ok())
                .map(|record| record.campus)
                .filter(|campus| !campus.trim().is_empty()),
            Err(error) => {
                warn!(key = CAMPUS_STORAGE_KEY, %error, "failed to read stored campus");
                None
            }
        };
        Self {
            storage,
            campus: Mutex::new(stored.unwrap_or_else(|| DEFAULT_CAMPUS.to_owned())),
        }
    }

    /// Currently selected campus code.
    #[must_use]
    pub fn campus(&self) -> String {
        self.campus
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Select a campus and persist the choice.
    pub fn set_campus(&self, campus: &str) {
        *self.campus.lock().unwrap_or_else(PoisonError::into_inner) = campus.to_owned();
        let record = CampusRecord {
            campus: campus.to_owned(),
        };
        match serde_json::to_string(&record) {
            Ok(text) => {
                if let Err(error) = self.storage.write(CAMPUS_STORAGE_KEY, &text) {
                    warn!(key = CAMPUS_STORAGE_KEY, %error, "failed to persist campus");
                }
            }
            Err(error) => warn!(%error, "failed to encode campus"),
        }
    }
}

impl std::fmt::Debug for CampusStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CampusStore")
            .field("campus", &self.campus())
            .finish_non_exhaustive()
    }
}
