//! Demo trains loaded into a fresh dashboard

use crate::config::RosterConfig;
use crate::roster::Roster;
use crate::types::{TrainDraft, TrainStatus};

/// The three demo services, in display order
#[must_use]
pub fn demo_drafts() -> Vec<TrainDraft> {
    vec![
        TrainDraft::new("TR-101", "Express Alpha")
            .with_route("New York", "Boston")
            .with_times("08:30", "14:45")
            .with_platform("3A")
            .with_status(TrainStatus::OnTime)
            .with_capacity(400)
            .with_occupied(342)
            .with_speed(120.0),
        TrainDraft::new("TR-205", "Coastal Runner")
            .with_route("Los Angeles", "San Francisco")
            .with_times("09:15", "16:30")
            .with_platform("1B")
            .with_status(TrainStatus::Delayed)
            .with_delay(25)
            .with_capacity(350)
            .with_occupied(298)
            .with_speed(95.0),
        TrainDraft::new("TR-312", "Mountain Express")
            .with_route("Denver", "Salt Lake City")
            .with_times("07:00", "12:20")
            .with_platform("2C")
            .with_status(TrainStatus::Departed)
            .with_capacity(300)
            .with_occupied(275)
            .with_speed(110.0),
    ]
}

/// Roster holding the demo trains
#[must_use]
pub fn seed_roster(config: RosterConfig) -> Roster {
    let mut roster = Roster::with_config(config);
    for draft in demo_drafts() {
        roster.add(draft);
    }
    roster
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{status_badge, BadgeColor, OccupancyLevel};

    #[test]
    fn demo_roster_contents() {
        let roster = seed_roster(RosterConfig::default());
        let numbers: Vec<_> = roster.list().map(|r| r.number.as_str()).collect();
        assert_eq!(numbers, ["TR-101", "TR-205", "TR-312"]);

        let levels: Vec<_> = roster.list().map(|r| roster.occupancy_level_of(r)).collect();
        assert_eq!(
            levels,
            [OccupancyLevel::Medium, OccupancyLevel::Medium, OccupancyLevel::High]
        );

        let badges: Vec<_> = roster.list().map(|r| status_badge(r.status)).collect();
        assert_eq!(badges, [BadgeColor::Green, BadgeColor::Yellow, BadgeColor::Blue]);
    }
}
