//! Fleet Board
//!
//! Terminal front-end over [`fleet_roster`]: renders the overview, schedule
//! and detail panels as text and runs scripted sessions.

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod demo;
pub mod error;
pub mod logging;
pub mod render;

pub use demo::DemoReport;
pub use error::BoardError;

use fleet_roster::{Dashboard, RosterConfig};
use std::path::Path;

/// Load the roster config at `path`, or the defaults when no path is given
///
/// # Errors
/// Returns [`BoardError::Config`] when the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<RosterConfig, BoardError> {
    match path {
        Some(path) => Ok(RosterConfig::load(path)?),
        None => Ok(RosterConfig::default()),
    }
}

/// Select the train with the given service number
///
/// # Errors
/// Returns [`BoardError::UnknownTrain`] when no train has that number.
pub fn select_by_number(dashboard: &mut Dashboard, number: &str) -> Result<(), BoardError> {
    let id = dashboard
        .roster()
        .list()
        .find(|r| r.number == number)
        .map(|r| r.id)
        .ok_or_else(|| BoardError::UnknownTrain(number.to_string()))?;
    dashboard.select(Some(id));
    Ok(())
}
