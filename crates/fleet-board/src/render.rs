//! Plain-text rendering of the dashboard
//!
//! Every function returns a `String`; printing is left to the caller.

use crate::error::BoardError;
use fleet_roster::{
    occupancy_percent, status_badge, Dashboard, FleetSummary, OccupancyThresholds, Roster,
    TrainRecord, TrainStatus,
};
use std::fmt::Write;

/// Status counts block for the overview tab
#[must_use]
pub fn summary(summary: &FleetSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total Trains: {}", summary.total);
    for status in [TrainStatus::OnTime, TrainStatus::Delayed, TrainStatus::Departed] {
        let _ = writeln!(out, "{}: {}", status.label(), summary.count(status));
    }
    out
}

/// Status badge text, e.g. `ON-TIME (green)`
#[must_use]
pub fn badge(status: TrainStatus) -> String {
    format!("{} ({})", status.as_str().to_uppercase(), status_badge(status))
}

/// One train card
#[must_use]
pub fn card(record: &TrainRecord, thresholds: &OccupancyThresholds, selected: bool) -> String {
    let marker = if selected { '>' } else { ' ' };
    let mut out = String::new();

    let _ = write!(out, "{marker} {}  {}", record.name, badge(record.status));
    if let Some(delay) = record.visible_delay() {
        let _ = write!(out, "  +{delay}min");
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "    Train {}", record.number);
    let _ = writeln!(
        out,
        "    {}    {} - {}",
        record.route(),
        record.departure,
        record.arrival
    );

    let level = thresholds.classify(record.occupied, record.capacity);
    let _ = write!(
        out,
        "    Platform: {}    {}/{} ({})",
        record.platform,
        record.occupied,
        record.capacity,
        level.color()
    );
    if let Some(speed) = record.visible_speed() {
        let _ = write!(out, "    {speed} km/h");
    }
    let _ = writeln!(out);
    out
}

/// Card list for the active tab, headed by the tab's title
#[must_use]
pub fn train_list(dashboard: &Dashboard) -> String {
    let roster = dashboard.roster();
    let thresholds = roster.thresholds();
    let selected = roster.selected_id();

    let mut out = String::new();
    let _ = writeln!(out, "{}", dashboard.tab().list_title());
    if roster.is_empty() {
        let _ = writeln!(out, "  (no trains)");
    }
    for record in roster.list() {
        out.push_str(&card(record, &thresholds, selected == Some(record.id)));
    }
    out
}

/// Detail panel for the selected train
#[must_use]
pub fn detail(roster: &Roster) -> String {
    let Some(record) = roster.selected() else {
        return "Select a train to view details\n".to_string();
    };

    let mut out = String::new();
    let _ = writeln!(out, "Train Details");
    let _ = writeln!(out, "  Train Number: {}", record.number);
    let _ = writeln!(out, "  Name:         {}", record.name);
    let _ = writeln!(out, "  Route:        {}", record.route());
    let _ = writeln!(out, "  Departure:    {}", record.departure);
    let _ = writeln!(out, "  Arrival:      {}", record.arrival);
    let _ = writeln!(out, "  Platform:     {}", record.platform);
    let _ = writeln!(out, "  Status:       {}", badge(record.status));

    let _ = write!(
        out,
        "  Occupancy:    {} / {} passengers",
        record.occupied, record.capacity
    );
    match occupancy_percent(record.occupied, record.capacity) {
        Some(percent) => {
            let _ = writeln!(out, " ({percent}%)");
        }
        None => {
            let _ = writeln!(out, " (no seats)");
        }
    }

    if let Some(speed) = record.visible_speed() {
        let _ = writeln!(out, "  Current Speed: {speed} km/h");
    }
    if let Some(delay) = record.visible_delay() {
        let _ = writeln!(out, "  Delay:        +{delay} minutes");
    }
    out
}

/// Overview as pretty JSON: counts, every train and the selected id
///
/// # Errors
/// Returns [`BoardError::Output`] if serialization fails.
pub fn overview_json(dashboard: &Dashboard) -> Result<String, BoardError> {
    let roster = dashboard.roster();
    let records: Vec<_> = roster.list().collect();
    let out = serde_json::json!({
        "summary": dashboard.summary(),
        "trains": records,
        "selected": roster.selected_id(),
    });
    Ok(serde_json::to_string_pretty(&out)?)
}

/// Timetable rows for the schedule tab
#[must_use]
pub fn schedule(roster: &Roster) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<8} {:<20} {:<32} {:<6} {:<6} {:<8} {}",
        "Number", "Name", "Route", "Dep", "Arr", "Platform", "Status"
    );
    for record in roster.list() {
        let _ = writeln!(
            out,
            "{:<8} {:<20} {:<32} {:<6} {:<6} {:<8} {}",
            record.number,
            record.name,
            record.route(),
            record.departure,
            record.arrival,
            record.platform,
            record.status.label()
        );
    }
    out
}
