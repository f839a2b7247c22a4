//! Display classification helpers
//!
//! Pure functions the presentation layer uses to pick colors for status
//! badges and occupancy readouts. Nothing here touches roster state.

use crate::types::TrainStatus;
use serde::{Deserialize, Serialize};

/// Palette shared by badges and occupancy readouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeColor {
    /// On time / low occupancy
    Green,
    /// Delayed / medium occupancy
    Yellow,
    /// Departed
    Blue,
    /// Cancelled / high occupancy
    Red,
    /// Unrecognized status
    Gray,
}

impl BadgeColor {
    /// Color name
    #[inline]
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            BadgeColor::Green => "green",
            BadgeColor::Yellow => "yellow",
            BadgeColor::Blue => "blue",
            BadgeColor::Red => "red",
            BadgeColor::Gray => "gray",
        }
    }

    /// Background utility class for badges
    #[inline]
    #[must_use]
    pub fn background_class(self) -> &'static str {
        match self {
            BadgeColor::Green => "bg-green-500",
            BadgeColor::Yellow => "bg-yellow-500",
            BadgeColor::Blue => "bg-blue-500",
            BadgeColor::Red => "bg-red-500",
            BadgeColor::Gray => "bg-gray-500",
        }
    }

    /// Text utility class for inline readouts
    #[inline]
    #[must_use]
    pub fn text_class(self) -> &'static str {
        match self {
            BadgeColor::Green => "text-green-500",
            BadgeColor::Yellow => "text-yellow-500",
            BadgeColor::Blue => "text-blue-500",
            BadgeColor::Red => "text-red-500",
            BadgeColor::Gray => "text-gray-500",
        }
    }
}

impl std::fmt::Display for BadgeColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Badge color for a status
#[inline]
#[must_use]
pub fn status_badge(status: TrainStatus) -> BadgeColor {
    match status {
        TrainStatus::OnTime => BadgeColor::Green,
        TrainStatus::Delayed => BadgeColor::Yellow,
        TrainStatus::Departed => BadgeColor::Blue,
        TrainStatus::Cancelled => BadgeColor::Red,
    }
}

/// Badge color for untyped status text; anything unrecognized is gray
#[must_use]
pub fn status_badge_str(status: &str) -> BadgeColor {
    status
        .parse::<TrainStatus>()
        .map_or(BadgeColor::Gray, status_badge)
}

/// Crowding classification of a train
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OccupancyLevel {
    /// Below the medium threshold
    Low,
    /// At or above medium, below high
    Medium,
    /// At or above the high threshold
    High,
}

impl OccupancyLevel {
    /// Readout color
    #[inline]
    #[must_use]
    pub fn color(self) -> BadgeColor {
        match self {
            OccupancyLevel::Low => BadgeColor::Green,
            OccupancyLevel::Medium => BadgeColor::Yellow,
            OccupancyLevel::High => BadgeColor::Red,
        }
    }
}

/// Ratio cut-offs for [`OccupancyLevel`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OccupancyThresholds {
    /// Ratio at which occupancy becomes medium
    pub medium: f64,
    /// Ratio at which occupancy becomes high
    pub high: f64,
}

impl OccupancyThresholds {
    /// Classify `occupied / capacity`
    ///
    /// Zero capacity is total: any passengers on a zero-seat train read as
    /// high, an empty zero-seat train reads as low.
    #[must_use]
    pub fn classify(&self, occupied: u32, capacity: u32) -> OccupancyLevel {
        let Some(ratio) = occupancy_ratio(occupied, capacity) else {
            return if occupied > 0 {
                OccupancyLevel::High
            } else {
                OccupancyLevel::Low
            };
        };

        if ratio >= self.high {
            OccupancyLevel::High
        } else if ratio >= self.medium {
            OccupancyLevel::Medium
        } else {
            OccupancyLevel::Low
        }
    }

    /// Check ordering and range
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.medium.is_finite()
            && self.high.is_finite()
            && self.medium > 0.0
            && self.medium <= self.high
    }
}

impl Default for OccupancyThresholds {
    fn default() -> Self {
        Self {
            medium: 0.70,
            high: 0.90,
        }
    }
}

/// Occupancy level with the default 70% / 90% thresholds
#[inline]
#[must_use]
pub fn occupancy_level(occupied: u32, capacity: u32) -> OccupancyLevel {
    OccupancyThresholds::default().classify(occupied, capacity)
}

/// `occupied / capacity`, `None` for zero capacity
#[inline]
#[must_use]
pub fn occupancy_ratio(occupied: u32, capacity: u32) -> Option<f64> {
    (capacity > 0).then(|| f64::from(occupied) / f64::from(capacity))
}

/// Occupancy rounded to a whole percent, `None` for zero capacity
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn occupancy_percent(occupied: u32, capacity: u32) -> Option<u32> {
    // float-to-int `as` saturates
    occupancy_ratio(occupied, capacity).map(|ratio| (ratio * 100.0).round() as u32)
}
