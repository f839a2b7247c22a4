//! Train roster store
//!
//! Owns the ordered train records and the current selection. All mutation
//! goes through [`Roster::add`], [`Roster::replace`], [`Roster::remove`] and
//! [`Roster::select`], which keep one invariant: the selection is either empty
//! or names a record that is present.

use crate::config::RosterConfig;
use crate::display::{OccupancyLevel, OccupancyThresholds};
use crate::summary::FleetSummary;
use crate::types::{TrainDraft, TrainId, TrainRecord};
use indexmap::IndexMap;
use ulid::Ulid;

/// Ordered collection of trains plus the selected one
#[derive(Debug)]
pub struct Roster {
    /// Records keyed by id, in insertion order
    records: IndexMap<TrainId, TrainRecord>,
    /// Currently selected record
    selected: Option<TrainId>,
    /// Last id handed out; ids are strictly increasing
    last_issued: Option<Ulid>,
    config: RosterConfig,
}

impl Roster {
    /// Create an empty roster with default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(RosterConfig::default())
    }

    /// Create an empty roster with custom configuration
    #[must_use]
    pub fn with_config(config: RosterConfig) -> Self {
        Self {
            records: IndexMap::new(),
            selected: None,
            last_issued: None,
            config,
        }
    }

    /// Active configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// All records in insertion order
    pub fn list(&self) -> impl ExactSizeIterator<Item = &TrainRecord> + DoubleEndedIterator + '_ {
        self.records.values()
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the roster holds no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Look up a record
    #[inline]
    #[must_use]
    pub fn get(&self, id: TrainId) -> Option<&TrainRecord> {
        self.records.get(&id)
    }

    /// Check whether a record is present
    #[inline]
    #[must_use]
    pub fn contains(&self, id: TrainId) -> bool {
        self.records.contains_key(&id)
    }

    /// Position of a record in the list
    #[inline]
    #[must_use]
    pub fn position(&self, id: TrainId) -> Option<usize> {
        self.records.get_index_of(&id)
    }

    /// Append a new record built from `draft`
    ///
    /// Unset fields take their defaults (see [`TrainDraft`]). The new record is
    /// not selected.
    pub fn add(&mut self, draft: TrainDraft) -> TrainId {
        let id = self.next_id();
        let record = draft.into_record(id, self.config.default_capacity);
        tracing::debug!(train = %id, number = %record.number, "Adding train");
        self.records.insert(id, record);
        id
    }

    /// Replace the record with the same id, keeping its position
    ///
    /// Returns `false` and changes nothing when no record has that id.
    pub fn replace(&mut self, record: TrainRecord) -> bool {
        let id = record.id;
        match self.records.get_mut(&id) {
            Some(slot) => {
                tracing::debug!(train = %id, number = %record.number, "Replacing train");
                *slot = record;
                true
            }
            None => {
                tracing::warn!(train = %id, "Replace ignored: no such train");
                false
            }
        }
    }

    /// Remove a record, clearing the selection if it pointed there
    ///
    /// Returns the removed record, or `None` when no record has that id.
    pub fn remove(&mut self, id: TrainId) -> Option<TrainRecord> {
        let Some(removed) = self.records.shift_remove(&id) else {
            tracing::warn!(train = %id, "Remove ignored: no such train");
            return None;
        };

        if self.selected == Some(id) {
            self.selected = None;
            tracing::debug!(train = %id, "Removed selected train, selection cleared");
        } else {
            tracing::debug!(train = %id, "Removed train");
        }
        Some(removed)
    }

    /// Set or clear the selection
    ///
    /// Selecting an id that is not present clears the selection instead, so
    /// the selection never dangles. Returns whether a record is now selected.
    pub fn select(&mut self, id: Option<TrainId>) -> bool {
        let next = id.filter(|id| self.records.contains_key(id));
        if let (Some(wanted), None) = (id, next) {
            tracing::warn!(train = %wanted, "Select ignored: no such train");
        }
        if next != self.selected {
            tracing::trace!(from = ?self.selected, to = ?next, "Selection changed");
        }
        self.selected = next;
        next.is_some()
    }

    /// Selected id
    #[inline]
    #[must_use]
    pub fn selected_id(&self) -> Option<TrainId> {
        self.selected
    }

    /// Selected record, reflecting any replacement since it was selected
    #[inline]
    #[must_use]
    pub fn selected(&self) -> Option<&TrainRecord> {
        self.selected.and_then(|id| self.records.get(&id))
    }

    /// Occupancy thresholds in use
    #[inline]
    #[must_use]
    pub fn thresholds(&self) -> OccupancyThresholds {
        self.config.thresholds
    }

    /// Occupancy level of a record under this roster's thresholds
    #[inline]
    #[must_use]
    pub fn occupancy_level_of(&self, record: &TrainRecord) -> OccupancyLevel {
        self.config.thresholds.classify(record.occupied, record.capacity)
    }

    /// Status counts for the overview cards
    #[must_use]
    pub fn summary(&self) -> FleetSummary {
        FleetSummary::from_records(self.list())
    }

    fn next_id(&mut self) -> TrainId {
        let mut ulid = Ulid::new();
        if let Some(last) = self.last_issued {
            if ulid <= last {
                // same millisecond or clock went back
                ulid = last.increment().unwrap_or(ulid);
            }
            // increment only fails at the maximum random part within one
            // millisecond; ids stay strictly increasing
            debug_assert!(ulid > last, "id {ulid} not after {last}");
        }
        self.last_issued = Some(ulid);
        TrainId(ulid)
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}
