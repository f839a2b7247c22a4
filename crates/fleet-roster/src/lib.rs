//! Fleet Roster
//!
//! In-memory train roster for the fleet dashboard:
//! - [`Roster`]: ordered train records plus the current selection
//! - [`display`]: status badge and occupancy color helpers
//! - [`TrainForm`]: add/edit form validation
//! - [`Dashboard`]: tab and modal state around a roster
//! - [`SharedRoster`]: lock-serialized handle for multiple owners
//!
//! # Example
//!
//! ```rust
//! use fleet_roster::{Roster, TrainDraft, TrainStatus};
//!
//! let mut roster = Roster::new();
//! let id = roster.add(TrainDraft::new("TR-900", "Test").with_capacity(100).with_occupied(50));
//!
//! let record = roster.get(id).unwrap();
//! assert_eq!(record.status, TrainStatus::OnTime);
//!
//! roster.select(Some(id));
//! roster.remove(id);
//! assert!(roster.is_empty());
//! assert!(roster.selected().is_none());
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod config;
pub mod dashboard;
pub mod display;
pub mod error;
pub mod form;
pub mod roster;
pub mod seed;
pub mod shared;
pub mod summary;
pub mod types;

// Re-exports
pub use config::RosterConfig;
pub use dashboard::{Dashboard, Modal, Tab};
pub use display::{
    occupancy_level, occupancy_percent, occupancy_ratio, status_badge, status_badge_str,
    BadgeColor, OccupancyLevel, OccupancyThresholds,
};
pub use error::{ConfigError, FormError, StatusParseError};
pub use form::TrainForm;
pub use roster::Roster;
pub use seed::{demo_drafts, seed_roster};
pub use shared::SharedRoster;
pub use summary::FleetSummary;
pub use types::{TrainDraft, TrainId, TrainRecord, TrainStatus, DEFAULT_CAPACITY};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
