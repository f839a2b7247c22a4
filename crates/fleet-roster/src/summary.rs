//! Overview counts

use crate::types::{TrainRecord, TrainStatus};
use serde::{Deserialize, Serialize};

/// Per-status counts shown on the overview cards
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSummary {
    /// All trains
    pub total: usize,
    /// On time
    pub on_time: usize,
    /// Delayed
    pub delayed: usize,
    /// Departed
    pub departed: usize,
    /// Cancelled
    pub cancelled: usize,
}

impl FleetSummary {
    /// Count a set of records
    #[must_use]
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a TrainRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut acc, record| {
            acc.total += 1;
            match record.status {
                TrainStatus::OnTime => acc.on_time += 1,
                TrainStatus::Delayed => acc.delayed += 1,
                TrainStatus::Departed => acc.departed += 1,
                TrainStatus::Cancelled => acc.cancelled += 1,
            }
            acc
        })
    }

    /// Count for one status
    #[must_use]
    pub fn count(&self, status: TrainStatus) -> usize {
        match status {
            TrainStatus::OnTime => self.on_time,
            TrainStatus::Delayed => self.delayed,
            TrainStatus::Departed => self.departed,
            TrainStatus::Cancelled => self.cancelled,
        }
    }
}
