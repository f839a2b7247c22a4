//! Add/edit form binding
//!
//! A form submission arrives as text keyed by field name. [`TrainForm`]
//! checks the required fields, converts the numeric ones and produces either a
//! [`TrainDraft`] (add) or a full [`TrainRecord`] (edit). This is the only
//! place input is validated; the roster trusts what it is given.

use crate::error::FormError;
use crate::types::{TrainDraft, TrainId, TrainRecord, TrainStatus, DEFAULT_CAPACITY};
use std::collections::BTreeMap;
use std::str::FromStr;

/// Form field names
pub mod fields {
    /// Service number
    pub const NUMBER: &str = "number";
    /// Service name
    pub const NAME: &str = "name";
    /// Origin
    pub const FROM: &str = "from";
    /// Destination
    pub const TO: &str = "to";
    /// Departure time
    pub const DEPARTURE: &str = "departure";
    /// Arrival time
    pub const ARRIVAL: &str = "arrival";
    /// Platform
    pub const PLATFORM: &str = "platform";
    /// Status
    pub const STATUS: &str = "status";
    /// Capacity
    pub const CAPACITY: &str = "capacity";
    /// Occupied seats
    pub const OCCUPIED: &str = "occupied";
    /// Speed
    pub const SPEED: &str = "speed";
    /// Delay
    pub const DELAY: &str = "delay";

    /// Every field, in form order
    pub const ALL: [&str; 12] = [
        NUMBER, NAME, FROM, TO, DEPARTURE, ARRIVAL, PLATFORM, STATUS, CAPACITY, OCCUPIED, SPEED,
        DELAY,
    ];
}

/// Submitted form values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrainForm {
    values: BTreeMap<String, String>,
}

impl TrainForm {
    /// Form with no values
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Values shown when adding a train, capacity pre-filled with
    /// `default_capacity`
    #[must_use]
    pub fn blank(default_capacity: u32) -> Self {
        Self::new()
            .with(fields::STATUS, TrainStatus::OnTime.as_str())
            .with(fields::CAPACITY, default_capacity.to_string())
            .with(fields::OCCUPIED, "0")
            .with(fields::SPEED, "0")
            .with(fields::DELAY, "0")
    }

    /// Values shown when editing `record`
    #[must_use]
    pub fn from_record(record: &TrainRecord) -> Self {
        Self::new()
            .with(fields::NUMBER, record.number.as_str())
            .with(fields::NAME, record.name.as_str())
            .with(fields::FROM, record.from.as_str())
            .with(fields::TO, record.to.as_str())
            .with(fields::DEPARTURE, record.departure.as_str())
            .with(fields::ARRIVAL, record.arrival.as_str())
            .with(fields::PLATFORM, record.platform.as_str())
            .with(fields::STATUS, record.status.as_str())
            .with(fields::CAPACITY, record.capacity.to_string())
            .with(fields::OCCUPIED, record.occupied.to_string())
            .with(fields::SPEED, record.speed.to_string())
            .with(fields::DELAY, record.delay.to_string())
    }

    /// With a field value
    #[inline]
    #[must_use]
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Set a field value
    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Current value of a field
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    /// Validate into a draft for a new train
    ///
    /// # Errors
    /// [`FormError::MissingField`] for a blank required field,
    /// [`FormError::InvalidNumber`] for unparsable numbers and
    /// [`FormError::Status`] for an unknown status.
    pub fn to_draft(&self) -> Result<TrainDraft, FormError> {
        Ok(TrainDraft {
            number: self.required(fields::NUMBER)?.to_string(),
            name: self.required(fields::NAME)?.to_string(),
            from: self.required(fields::FROM)?.to_string(),
            to: self.required(fields::TO)?.to_string(),
            departure: self.required(fields::DEPARTURE)?.to_string(),
            arrival: self.required(fields::ARRIVAL)?.to_string(),
            platform: self.required(fields::PLATFORM)?.to_string(),
            status: Some(self.required(fields::STATUS)?.parse::<TrainStatus>()?),
            capacity: Some(self.required_number(fields::CAPACITY)?),
            occupied: Some(self.required_number(fields::OCCUPIED)?),
            speed: Some(self.speed()?),
            delay: Some(self.optional_number(fields::DELAY)?.unwrap_or(0)),
        })
    }

    /// Validate into a full replacement for the train `id`
    ///
    /// Every field is taken from the form; capacity is kept as submitted,
    /// zero included.
    ///
    /// # Errors
    /// Same as [`TrainForm::to_draft`].
    pub fn to_record(&self, id: TrainId) -> Result<TrainRecord, FormError> {
        let draft = self.to_draft()?;
        Ok(TrainRecord {
            id,
            number: draft.number,
            name: draft.name,
            from: draft.from,
            to: draft.to,
            departure: draft.departure,
            arrival: draft.arrival,
            platform: draft.platform,
            status: draft.status.unwrap_or_default(),
            capacity: draft.capacity.unwrap_or(DEFAULT_CAPACITY),
            occupied: draft.occupied.unwrap_or(0),
            speed: draft.speed.unwrap_or(0.0),
            delay: draft.delay.unwrap_or(0),
        })
    }

    fn required(&self, field: &'static str) -> Result<&str, FormError> {
        self.get(field)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(FormError::MissingField { field })
    }

    fn required_number<T: FromStr>(&self, field: &'static str) -> Result<T, FormError> {
        let raw = self.required(field)?;
        parse_number(field, raw)
    }

    fn optional_number<T: FromStr>(&self, field: &'static str) -> Result<Option<T>, FormError> {
        match self.get(field).map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => parse_number(field, raw).map(Some),
            None => Ok(None),
        }
    }

    fn speed(&self) -> Result<f64, FormError> {
        let speed: f64 = self.optional_number(fields::SPEED)?.unwrap_or(0.0);
        if speed.is_finite() && speed >= 0.0 {
            Ok(speed)
        } else {
            Err(FormError::InvalidNumber {
                field: fields::SPEED,
                value: self.get(fields::SPEED).unwrap_or_default().to_string(),
            })
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TrainForm {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn parse_number<T: FromStr>(field: &'static str, raw: &str) -> Result<T, FormError> {
    raw.parse().map_err(|_| FormError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use ulid::Ulid;

    fn filled() -> TrainForm {
        TrainForm::blank(DEFAULT_CAPACITY)
            .with(fields::NUMBER, "TR-900")
            .with(fields::NAME, "Test")
            .with(fields::FROM, "A")
            .with(fields::TO, "B")
            .with(fields::DEPARTURE, "10:00")
            .with(fields::ARRIVAL, "11:00")
            .with(fields::PLATFORM, "1")
    }

    #[test]
    fn blank_form_defaults() {
        let form = TrainForm::blank(DEFAULT_CAPACITY);
        assert_eq!(form.get(fields::STATUS), Some("on-time"));
        assert_eq!(form.get(fields::CAPACITY), Some("300"));
        assert_eq!(form.get(fields::NUMBER), None);

        assert_eq!(TrainForm::blank(120).get(fields::CAPACITY), Some("120"));
    }

    #[test]
    fn filled_form_to_draft() {
        let draft = filled()
            .with(fields::CAPACITY, "100")
            .with(fields::OCCUPIED, "50")
            .to_draft()
            .unwrap();
        assert_eq!(draft.number, "TR-900");
        assert_eq!(draft.status, Some(TrainStatus::OnTime));
        assert_eq!(draft.capacity, Some(100));
        assert_eq!(draft.occupied, Some(50));
        assert_eq!(draft.speed, Some(0.0));
        assert_eq!(draft.delay, Some(0));
    }

    #[test]
    fn blank_required_field_rejected() {
        let err = filled().with(fields::PLATFORM, "   ").to_draft().unwrap_err();
        assert_eq!(err, FormError::MissingField { field: "platform" });

        let err = TrainForm::blank(DEFAULT_CAPACITY).to_draft().unwrap_err();
        assert_eq!(err.field(), "number");
    }

    #[test]
    fn bad_numbers_rejected() {
        let err = filled().with(fields::CAPACITY, "lots").to_draft().unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidNumber {
                field: "capacity",
                value: "lots".into()
            }
        );

        let err = filled().with(fields::OCCUPIED, "-3").to_draft().unwrap_err();
        assert_eq!(err.field(), "occupied");

        let err = filled().with(fields::SPEED, "-10").to_draft().unwrap_err();
        assert_eq!(err.field(), "speed");
    }

    #[test]
    fn unknown_status_rejected() {
        let err = filled().with(fields::STATUS, "boarding").to_draft().unwrap_err();
        assert!(matches!(err, FormError::Status(_)));
    }

    #[test]
    fn empty_optional_numbers_are_zero() {
        let draft = filled()
            .with(fields::SPEED, "")
            .with(fields::DELAY, "")
            .to_draft()
            .unwrap();
        assert_eq!(draft.speed, Some(0.0));
        assert_eq!(draft.delay, Some(0));
    }

    #[test]
    fn record_round_trip_through_form() {
        let record = filled()
            .with(fields::STATUS, "delayed")
            .with(fields::SPEED, "95.5")
            .with(fields::DELAY, "25")
            .to_record(TrainId(Ulid::nil()))
            .unwrap();
        let again = TrainForm::from_record(&record)
            .to_record(record.id)
            .unwrap();
        assert_eq!(again, record);
        assert_eq!(again.visible_delay(), Some(25));
    }

    #[test]
    fn edit_keeps_zero_capacity() {
        let record = filled()
            .with(fields::CAPACITY, "0")
            .to_record(TrainId(Ulid::nil()))
            .unwrap();
        assert_eq!(record.capacity, 0);
    }

    #[test]
    fn collects_from_pairs() {
        let form: TrainForm = [("number", "TR-1"), ("name", "One")].into_iter().collect();
        assert_eq!(form.get("name"), Some("One"));
    }
}
