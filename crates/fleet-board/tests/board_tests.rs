use fleet_board::{demo, load_config, render, select_by_number, BoardError};
use fleet_roster::{ConfigError, Dashboard, Roster, RosterConfig, TrainStatus};
use fleet_test_utils::tr900_draft;
use pretty_assertions::assert_eq;
use std::io::Write;
use std::path::Path;

#[test]
fn demo_session_leaves_seed_roster() {
    let report = demo::run(RosterConfig::default()).unwrap();
    assert_eq!(report.dashboard.roster().len(), 3);
    assert!(report.dashboard.roster().selected().is_none());
    assert_eq!(report.steps.first().unwrap(), "Opened manage tab with 3 trains");
    assert_eq!(report.steps.last().unwrap(), "Finished with 3 trains, selection empty");
    assert!(report.steps.iter().any(|s| s == "Deleted TR-900"));
}

#[test]
fn demo_without_seed() {
    let report = demo::run(RosterConfig::new().with_seed_demo_data(false)).unwrap();
    assert!(report.dashboard.roster().is_empty());
}

#[test]
fn detail_panel_for_selection() {
    let mut roster = Roster::new();
    let id = roster.add(tr900_draft().with_status(TrainStatus::Delayed).with_delay(5));
    roster.select(Some(id));

    let text = render::detail(&roster);
    assert!(text.starts_with("Train Details\n"));
    assert!(text.contains("Train Number: TR-900"));
    assert!(text.contains("Route:        A → B"));
    assert!(text.contains("50 / 100 passengers (50%)"));
    assert!(text.contains("+5 minutes"));
    assert!(!text.contains("Current Speed"));
}

#[test]
fn detail_panel_zero_capacity() {
    let mut roster = Roster::new();
    let id = roster.add(tr900_draft());
    let mut record = roster.get(id).unwrap().clone();
    record.capacity = 0;
    roster.replace(record);
    roster.select(Some(id));

    assert!(render::detail(&roster).contains("50 / 0 passengers (no seats)"));
}

#[test]
fn select_by_number_marks_card() {
    let mut dashboard = Dashboard::from_config(RosterConfig::default());
    select_by_number(&mut dashboard, "TR-312").unwrap();
    assert_eq!(
        dashboard.roster().selected().map(|r| r.name.as_str()),
        Some("Mountain Express")
    );

    let list = render::train_list(&dashboard);
    assert!(list.starts_with("Active Trains\n"));
    assert!(list.contains("> Mountain Express  DEPARTED (blue)"));

    let err = select_by_number(&mut dashboard, "TR-000").unwrap_err();
    assert!(matches!(err, BoardError::UnknownTrain(n) if n == "TR-000"));
}

#[test]
fn schedule_rows_in_order() {
    let dashboard = Dashboard::from_config(RosterConfig::default());
    let text = render::schedule(dashboard.roster());
    let numbers: Vec<_> = text
        .lines()
        .skip(1)
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(numbers, ["TR-101", "TR-205", "TR-312"]);
}

#[test]
fn config_defaults_without_path() {
    assert_eq!(load_config(None).unwrap(), RosterConfig::default());
}

#[test]
fn config_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "default_capacity = 120\nseed_demo_data = false").unwrap();

    let config = load_config(Some(file.path())).unwrap();
    assert_eq!(config.default_capacity, 120);
    assert!(!config.seed_demo_data);
}

#[test]
fn config_errors_surface_as_board_errors() {
    let err = load_config(Some(Path::new("/nonexistent/fleet.toml"))).unwrap_err();
    assert!(matches!(err, BoardError::Config(ConfigError::Io { .. })));

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[thresholds]\nmedium = 0.95\nhigh = 0.5").unwrap();
    let err = load_config(Some(file.path())).unwrap_err();
    assert!(matches!(
        err,
        BoardError::Config(ConfigError::InvalidThresholds { .. })
    ));
    assert!(err.to_string().starts_with("configuration error:"));
}

#[test]
fn overview_json_reports_selection() {
    let mut dashboard = Dashboard::from_config(RosterConfig::default());
    select_by_number(&mut dashboard, "TR-205").unwrap();

    let text = render::overview_json(&dashboard).unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let selected = dashboard.roster().selected_id().unwrap().to_string();
    assert_eq!(value["selected"], selected.as_str());
    assert_eq!(value["summary"]["delayed"], 1);
}
