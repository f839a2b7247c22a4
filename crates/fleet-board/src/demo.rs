//! Scripted manage-tab session
//!
//! Walks a dashboard through add, select, edit and delete the way a user
//! would, logging each step.

use crate::error::BoardError;
use fleet_roster::form::fields;
use fleet_roster::{Dashboard, RosterConfig, Tab, TrainForm, TrainStatus};

/// Outcome of a demo run
#[derive(Debug)]
pub struct DemoReport {
    /// Dashboard state after the script
    pub dashboard: Dashboard,
    /// One line per step
    pub steps: Vec<String>,
}

/// Run the scripted session against a fresh dashboard
///
/// # Errors
/// Returns [`BoardError::Form`] if a scripted submission is rejected.
pub fn run(config: RosterConfig) -> Result<DemoReport, BoardError> {
    let mut dashboard = Dashboard::from_config(config);
    let mut steps = Vec::new();

    dashboard.set_tab(Tab::Manage);
    step(&mut steps, format!("Opened manage tab with {} trains", dashboard.roster().len()));

    dashboard.open_add();
    let form = dashboard
        .form()
        .unwrap_or_default()
        .with(fields::NUMBER, "TR-900")
        .with(fields::NAME, "Test")
        .with(fields::FROM, "A")
        .with(fields::TO, "B")
        .with(fields::DEPARTURE, "10:00")
        .with(fields::ARRIVAL, "11:00")
        .with(fields::PLATFORM, "1")
        .with(fields::CAPACITY, "100")
        .with(fields::OCCUPIED, "50");
    let Some(id) = dashboard.submit(&form)? else {
        return Ok(DemoReport { dashboard, steps });
    };
    step(&mut steps, format!("Added TR-900 as {id}"));

    dashboard.select(Some(id));
    step(&mut steps, "Selected TR-900".to_string());

    dashboard.open_edit();
    let edit: TrainForm = dashboard
        .form()
        .unwrap_or_default()
        .with(fields::STATUS, TrainStatus::Delayed.as_str())
        .with(fields::DELAY, "10");
    dashboard.submit(&edit)?;
    step(&mut steps, "Marked TR-900 delayed by 10 minutes".to_string());

    if let Some(removed) = dashboard.delete_selected() {
        step(&mut steps, format!("Deleted {}", removed.number));
    }
    let selection = if dashboard.roster().selected().is_some() {
        "set"
    } else {
        "empty"
    };
    step(
        &mut steps,
        format!(
            "Finished with {} trains, selection {selection}",
            dashboard.roster().len()
        ),
    );

    Ok(DemoReport { dashboard, steps })
}

fn step(steps: &mut Vec<String>, line: String) {
    tracing::info!("{}", line);
    steps.push(line);
}
