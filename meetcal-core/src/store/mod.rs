//! Meeting persistence over a key-value backend.
//!
//! The whole collection lives as one JSON array under a fixed key. Storage
//! failures never reach the caller: reads fall back to the seed collection
//! and writes are dropped, both with a log line.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use tracing::{debug, error, info, warn};

use crate::constants::{MEETINGS_KEY, MIGRATION_FLAG_KEY};
use crate::error::MeetcalResult;
use crate::meeting::Meeting;
use crate::query;

/// A string key-value store (browser local storage, a directory, a map).
pub trait KeyValueStore {
    fn get(&self, key: &str) -> MeetcalResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> MeetcalResult<()>;
    fn remove(&mut self, key: &str) -> MeetcalResult<()>;
}

/// Loads and persists the meeting collection through a [`KeyValueStore`].
pub struct MeetingStore<S> {
    backend: S,
    seed: Vec<Meeting>,
}

impl<S: KeyValueStore> MeetingStore<S> {
    pub fn new(backend: S, seed: Vec<Meeting>) -> Self {
        MeetingStore { backend, seed }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn into_backend(self) -> S {
        self.backend
    }

    /// Discard data written in the pre-v2 format, once per backend.
    ///
    /// Returns true if the migration ran on this call.
    pub fn migrate(&mut self) -> bool {
        match self.backend.get(MIGRATION_FLAG_KEY) {
            Ok(Some(_)) => return false,
            Ok(None) => {}
            Err(e) => {
                warn!("Could not read migration flag: {e}");
                return false;
            }
        }

        if let Err(e) = self.backend.remove(MEETINGS_KEY) {
            warn!("Could not discard old meetings: {e}");
            return false;
        }
        if let Err(e) = self.backend.set(MIGRATION_FLAG_KEY, "true") {
            warn!("Could not record migration flag: {e}");
        }

        debug!("Discarded meetings stored in the old format");
        true
    }

    /// The stored collection, seeding the backend on first access.
    pub fn load(&mut self) -> Vec<Meeting> {
        match self.read() {
            Ok(Some(meetings)) => {
                debug!(count = meetings.len(), "Loaded meetings from storage");
                meetings
            }
            Ok(None) => {
                debug!("Initializing meetings with default data");
                let seed = self.seed.clone();
                self.save(&seed);
                seed
            }
            Err(e) => {
                error!("Error loading meetings from storage: {e}");
                self.seed.clone()
            }
        }
    }

    fn read(&self) -> MeetcalResult<Option<Vec<Meeting>>> {
        let Some(raw) = self.backend.get(MEETINGS_KEY)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_str(&raw)?))
    }

    /// Persist the full collection. Failures are logged and dropped.
    pub fn save(&mut self, meetings: &[Meeting]) {
        if let Err(e) = self.write(meetings) {
            error!("Error saving meetings to storage: {e}");
        }
    }

    fn write(&mut self, meetings: &[Meeting]) -> MeetcalResult<()> {
        let raw = serde_json::to_string(meetings)?;
        self.backend.set(MEETINGS_KEY, &raw)
    }

    /// Load, replace the sync flag of meeting `id`, persist, and return the
    /// new collection. Unknown ids leave storage untouched.
    pub fn update_sync_status(&mut self, id: u64, is_synced: bool) -> Vec<Meeting> {
        let current = self.load();
        let updated = query::update_sync_status(&current, id, is_synced);

        if updated != current {
            self.save(&updated);
            info!(id, is_synced, "Meeting sync status updated");
        }

        updated
    }

    /// Remove the stored collection and the migration flag.
    pub fn clear(&mut self) {
        for key in [MEETINGS_KEY, MIGRATION_FLAG_KEY] {
            if let Err(e) = self.backend.remove(key) {
                warn!("Could not remove '{key}': {e}");
            }
        }
        debug!("Cleared all meetings data");
    }
}
