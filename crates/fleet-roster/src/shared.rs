//! Roster shared between owners
//!
//! [`SharedRoster`] puts a [`Roster`] behind one `parking_lot::RwLock` so that
//! every mutation is serialized through a single writer. Readers get cloned
//! snapshots; no borrow escapes the lock.

use crate::roster::Roster;
use crate::summary::FleetSummary;
use crate::types::{TrainDraft, TrainId, TrainRecord};
use parking_lot::RwLock;
use std::sync::Arc;

/// Cloneable handle to a locked roster
#[derive(Debug, Clone, Default)]
pub struct SharedRoster {
    inner: Arc<RwLock<Roster>>,
}

impl SharedRoster {
    /// Wrap a roster
    #[must_use]
    pub fn new(roster: Roster) -> Self {
        Self {
            inner: Arc::new(RwLock::new(roster)),
        }
    }

    /// Snapshot of all records in order
    #[must_use]
    pub fn list(&self) -> Vec<TrainRecord> {
        self.inner.read().list().cloned().collect()
    }

    /// See [`Roster::add`]
    pub fn add(&self, draft: TrainDraft) -> TrainId {
        self.inner.write().add(draft)
    }

    /// See [`Roster::replace`]
    pub fn replace(&self, record: TrainRecord) -> bool {
        self.inner.write().replace(record)
    }

    /// See [`Roster::remove`]
    pub fn remove(&self, id: TrainId) -> Option<TrainRecord> {
        self.inner.write().remove(id)
    }

    /// See [`Roster::select`]
    pub fn select(&self, id: Option<TrainId>) -> bool {
        self.inner.write().select(id)
    }

    /// Snapshot of the selected record
    #[must_use]
    pub fn selected(&self) -> Option<TrainRecord> {
        self.inner.read().selected().cloned()
    }

    /// Snapshot of one record
    #[must_use]
    pub fn get(&self, id: TrainId) -> Option<TrainRecord> {
        self.inner.read().get(id).cloned()
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    /// True when empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Overview counts
    #[must_use]
    pub fn summary(&self) -> FleetSummary {
        self.inner.read().summary()
    }

    /// Run `f` with read access
    pub fn with_read<R>(&self, f: impl FnOnce(&Roster) -> R) -> R {
        f(&self.inner.read())
    }
}

impl From<Roster> for SharedRoster {
    fn from(roster: Roster) -> Self {
        Self::new(roster)
    }
}
