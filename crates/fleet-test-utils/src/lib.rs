//! Testing utilities for the fleet workspace
//!
//! Shared fixtures and proptest strategies.

#![allow(missing_docs)]

use fleet_roster::form::fields;
use fleet_roster::{Roster, TrainDraft, TrainForm, TrainStatus, DEFAULT_CAPACITY};
use proptest::prelude::*;

/// Draft with every text field filled
pub fn create_draft(number: &str) -> TrainDraft {
    TrainDraft::new(number, format!("Service {number}"))
        .with_route("A", "B")
        .with_times("10:00", "11:00")
        .with_platform("1")
}

/// The TR-900 draft used by the end-to-end scenario
pub fn tr900_draft() -> TrainDraft {
    create_draft("TR-900")
        .with_capacity(100)
        .with_occupied(50)
}

pub fn create_roster_with(count: usize) -> Roster {
    let mut roster = Roster::new();
    for i in 0..count {
        roster.add(create_draft(&format!("TR-{i:03}")));
    }
    roster
}

/// Add form with all required fields filled
pub fn filled_form(number: &str) -> TrainForm {
    TrainForm::blank(DEFAULT_CAPACITY)
        .with(fields::NUMBER, number)
        .with(fields::NAME, "Test")
        .with(fields::FROM, "A")
        .with(fields::TO, "B")
        .with(fields::DEPARTURE, "10:00")
        .with(fields::ARRIVAL, "11:00")
        .with(fields::PLATFORM, "1")
}

pub fn any_status() -> impl Strategy<Value = TrainStatus> {
    prop_oneof![
        Just(TrainStatus::OnTime),
        Just(TrainStatus::Delayed),
        Just(TrainStatus::Departed),
        Just(TrainStatus::Cancelled),
    ]
}

pub fn any_draft() -> impl Strategy<Value = TrainDraft> {
    (
        "[A-Z]{2}-[0-9]{3}",
        proptest::option::of(any_status()),
        proptest::option::of(0u32..1000),
        proptest::option::of(0u32..1200),
        proptest::option::of(0.0f64..300.0),
        proptest::option::of(0u32..180),
    )
        .prop_map(|(number, status, capacity, occupied, speed, delay)| TrainDraft {
            status,
            capacity,
            occupied,
            speed,
            delay,
            ..create_draft(&number)
        })
}
