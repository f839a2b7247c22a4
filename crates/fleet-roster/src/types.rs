//! Core roster types
//!
//! Defines the train record and its parts:
//! - Train identifiers
//! - The closed set of train statuses
//! - Full records and the partial drafts used to create them

use crate::error::StatusParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use ulid::Ulid;

/// Capacity applied when a draft leaves it unset
pub const DEFAULT_CAPACITY: u32 = 300;

/// Unique train identifier (ULID, ordered by creation time)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrainId(pub Ulid);

impl std::fmt::Display for TrainId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TrainId {
    type Err = ulid::DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ulid::from_string(s).map(Self)
    }
}

/// Operational status of a train
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrainStatus {
    /// Running to schedule
    #[default]
    OnTime,
    /// Running late, see [`TrainRecord::delay`]
    Delayed,
    /// Left the platform
    Departed,
    /// Not running
    Cancelled,
}

impl TrainStatus {
    /// All statuses in display order
    pub const ALL: [TrainStatus; 4] = [
        TrainStatus::OnTime,
        TrainStatus::Delayed,
        TrainStatus::Departed,
        TrainStatus::Cancelled,
    ];

    /// Wire/form representation
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TrainStatus::OnTime => "on-time",
            TrainStatus::Delayed => "delayed",
            TrainStatus::Departed => "departed",
            TrainStatus::Cancelled => "cancelled",
        }
    }

    /// Human-readable label
    #[inline]
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            TrainStatus::OnTime => "On Time",
            TrainStatus::Delayed => "Delayed",
            TrainStatus::Departed => "Departed",
            TrainStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for TrainStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainStatus {
    type Err = StatusParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "on-time" => Ok(TrainStatus::OnTime),
            "delayed" => Ok(TrainStatus::Delayed),
            "departed" => Ok(TrainStatus::Departed),
            "cancelled" => Ok(TrainStatus::Cancelled),
            other => Err(StatusParseError(other.to_string())),
        }
    }
}

/// One train in the roster
///
/// Time fields are display-only text (`"08:30"`); no ordering is enforced
/// between departure and arrival. `occupied` may exceed `capacity`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainRecord {
    /// Assigned at creation, never changes
    pub id: TrainId,
    /// Service number, e.g. `TR-101`
    pub number: String,
    /// Service name
    pub name: String,
    /// Origin station
    pub from: String,
    /// Destination station
    pub to: String,
    /// Departure time of day
    pub departure: String,
    /// Arrival time of day
    pub arrival: String,
    /// Platform label
    pub platform: String,
    /// Current status
    pub status: TrainStatus,
    /// Total seats
    pub capacity: u32,
    /// Seats filled
    pub occupied: u32,
    /// Current speed in km/h, zero when not moving or unknown
    pub speed: f64,
    /// Delay in minutes, only meaningful for [`TrainStatus::Delayed`]
    pub delay: u32,
}

impl TrainRecord {
    /// Route as `from → to`
    #[must_use]
    pub fn route(&self) -> String {
        format!("{} → {}", self.from, self.to)
    }

    /// Delay worth showing: non-zero minutes on a delayed train
    #[must_use]
    pub fn visible_delay(&self) -> Option<u32> {
        (self.status == TrainStatus::Delayed && self.delay > 0).then_some(self.delay)
    }

    /// Speed worth showing
    #[must_use]
    pub fn visible_speed(&self) -> Option<f64> {
        (self.speed > 0.0).then_some(self.speed)
    }
}

/// Fields for a new train; everything but the id
///
/// Unset numeric fields take their defaults when the draft is added to a
/// roster: capacity falls back to the roster's default capacity, the rest to
/// zero. A capacity of zero counts as unset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainDraft {
    /// Service number
    pub number: String,
    /// Service name
    pub name: String,
    /// Origin station
    pub from: String,
    /// Destination station
    pub to: String,
    /// Departure time of day
    pub departure: String,
    /// Arrival time of day
    pub arrival: String,
    /// Platform label
    pub platform: String,
    /// Status, on-time when unset
    pub status: Option<TrainStatus>,
    /// Total seats
    pub capacity: Option<u32>,
    /// Seats filled
    pub occupied: Option<u32>,
    /// Speed in km/h
    pub speed: Option<f64>,
    /// Delay in minutes
    pub delay: Option<u32>,
}

impl TrainDraft {
    /// Create draft with number and name
    #[inline]
    #[must_use]
    pub fn new(number: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            number: number.into(),
            name: name.into(),
            ..Self::default()
        }
    }

    /// With origin and destination
    #[inline]
    #[must_use]
    pub fn with_route(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.from = from.into();
        self.to = to.into();
        self
    }

    /// With departure and arrival times
    #[inline]
    #[must_use]
    pub fn with_times(mut self, departure: impl Into<String>, arrival: impl Into<String>) -> Self {
        self.departure = departure.into();
        self.arrival = arrival.into();
        self
    }

    /// With platform
    #[inline]
    #[must_use]
    pub fn with_platform(mut self, platform: impl Into<String>) -> Self {
        self.platform = platform.into();
        self
    }

    /// With status
    #[inline]
    #[must_use]
    pub fn with_status(mut self, status: TrainStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// With capacity
    #[inline]
    #[must_use]
    pub fn with_capacity(mut self, capacity: u32) -> Self {
        self.capacity = Some(capacity);
        self
    }

    /// With occupied seats
    #[inline]
    #[must_use]
    pub fn with_occupied(mut self, occupied: u32) -> Self {
        self.occupied = Some(occupied);
        self
    }

    /// With speed
    #[inline]
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = Some(speed);
        self
    }

    /// With delay
    #[inline]
    #[must_use]
    pub fn with_delay(mut self, delay: u32) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Fill defaults and attach an id
    #[must_use]
    pub fn into_record(self, id: TrainId, default_capacity: u32) -> TrainRecord {
        TrainRecord {
            id,
            number: self.number,
            name: self.name,
            from: self.from,
            to: self.to,
            departure: self.departure,
            arrival: self.arrival,
            platform: self.platform,
            status: self.status.unwrap_or_default(),
            capacity: self.capacity.filter(|&c| c > 0).unwrap_or(default_capacity),
            occupied: self.occupied.unwrap_or(0),
            speed: self.speed.unwrap_or(0.0),
            delay: self.delay.unwrap_or(0),
        }
    }
}

impl From<&TrainRecord> for TrainDraft {
    fn from(record: &TrainRecord) -> Self {
        Self {
            number: record.number.clone(),
            name: record.name.clone(),
            from: record.from.clone(),
            to: record.to.clone(),
            departure: record.departure.clone(),
            arrival: record.arrival.clone(),
            platform: record.platform.clone(),
            status: Some(record.status),
            capacity: Some(record.capacity),
            occupied: Some(record.occupied),
            speed: Some(record.speed),
            delay: Some(record.delay),
        }
    }
}
