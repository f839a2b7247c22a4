use fleet_roster::form::fields;
use fleet_roster::{
    occupancy_level, status_badge_str, BadgeColor, ConfigError, Dashboard, FleetSummary, Modal,
    OccupancyLevel, Roster, RosterConfig, Tab, TrainStatus,
};
use fleet_test_utils::{create_draft, create_roster_with, filled_form, tr900_draft};
use pretty_assertions::assert_eq;
use std::io::Write;

#[test]
fn empty_add_select_remove() {
    let mut roster = Roster::new();
    let id = roster.add(tr900_draft());

    let records: Vec<_> = roster.list().cloned().collect();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].number, "TR-900");
    assert_eq!(records[0].status, TrainStatus::OnTime);
    assert_eq!(records[0].capacity, 100);
    assert_eq!(records[0].occupied, 50);
    assert_eq!(records[0].delay, 0);
    assert_eq!(records[0].speed, 0.0);

    roster.select(Some(id));
    assert_eq!(roster.selected().map(|r| r.number.as_str()), Some("TR-900"));

    roster.remove(id);
    assert_eq!(roster.list().count(), 0);
    assert_eq!(roster.selected_id(), None);
}

#[test]
fn unrelated_removal_keeps_selection() {
    let mut roster = create_roster_with(3);
    let ids: Vec<_> = roster.list().map(|r| r.id).collect();

    roster.select(Some(ids[1]));
    roster.remove(ids[0]);
    assert_eq!(roster.selected_id(), Some(ids[1]));

    roster.select(Some(ids[2]));
    roster.remove(ids[1]);
    assert_eq!(roster.selected_id(), Some(ids[2]));
}

#[test]
fn replace_second_of_three() {
    let mut roster = create_roster_with(3);
    let second = roster.list().nth(1).unwrap().clone();

    let mut updated = second.clone();
    updated.number = "TR-777".into();
    updated.name = "Night Owl".into();
    updated.from = "X".into();
    updated.to = "Y".into();
    updated.departure = "23:10".into();
    updated.arrival = "05:40".into();
    updated.platform = "7".into();
    updated.status = TrainStatus::Cancelled;
    updated.capacity = 120;
    updated.occupied = 0;
    updated.speed = 0.0;
    updated.delay = 0;
    assert!(roster.replace(updated.clone()));

    assert_eq!(roster.list().nth(1), Some(&updated));
    assert_eq!(roster.list().nth(1).unwrap().id, second.id);
}

#[test]
fn helper_examples() {
    assert_eq!(occupancy_level(342, 400), OccupancyLevel::Medium);
    assert_eq!(occupancy_level(298, 350), OccupancyLevel::Medium);
    assert_eq!(occupancy_level(376, 400), OccupancyLevel::High);
    assert_eq!(status_badge_str("cancelled"), BadgeColor::Red);
    assert_eq!(status_badge_str("on-time"), BadgeColor::Green);
}

#[test]
fn dashboard_manage_flow() {
    let mut dashboard = Dashboard::from_config(RosterConfig::default());
    assert_eq!(
        dashboard.summary(),
        FleetSummary {
            total: 3,
            on_time: 1,
            delayed: 1,
            departed: 1,
            cancelled: 0,
        }
    );

    dashboard.set_tab(Tab::Manage);
    assert!(dashboard.open_add());
    let added = dashboard.submit(&filled_form("TR-900")).unwrap().unwrap();
    assert_eq!(dashboard.roster().list().last().map(|r| r.id), Some(added));

    dashboard.select(Some(added));
    assert!(dashboard.open_edit());
    assert_eq!(dashboard.modal(), Modal::Editing(added));
    let form = dashboard
        .form()
        .unwrap()
        .with(fields::STATUS, "cancelled");
    dashboard.submit(&form).unwrap();
    assert_eq!(dashboard.summary().cancelled, 1);

    dashboard.delete_selected().unwrap();
    assert_eq!(dashboard.summary().total, 3);
    assert!(dashboard.roster().selected().is_none());
}

#[test]
fn config_file_drives_roster() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "default_capacity = 150\nseed_demo_data = false\n[thresholds]\nmedium = 0.5\nhigh = 0.8"
    )
    .unwrap();

    let config = RosterConfig::load(file.path()).unwrap();
    let mut roster = Roster::with_config(config);
    let id = roster.add(create_draft("TR-1").with_occupied(80));

    let record = roster.get(id).unwrap();
    assert_eq!(record.capacity, 150);
    assert_eq!(roster.occupancy_level_of(record), OccupancyLevel::Medium);
}

#[test]
fn missing_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = RosterConfig::load(dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
