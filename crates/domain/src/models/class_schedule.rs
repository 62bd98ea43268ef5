//! Class schedule domain models.
//!
//! A schedule is one weekly session of a [`GymClass`] with a fixed number of
//! seats. `booked` only ever moves through [`ClassSchedule::reserve_seat`],
//! which keeps `booked <= capacity`.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use super::booking::BookingError;
use super::gym_class::GymClass;
use super::trainer::Trainer;

/// Day of the week a session runs on.
///
/// Serialized with its English name (`"Tuesday"`), which is also what the
/// `day` filter of the schedule listing accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl std::fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a string is not one of the seven day names.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown day of week: {0}")]
pub struct UnknownDay(pub String);

impl std::str::FromStr for DayOfWeek {
    type Err = UnknownDay;

    /// Parses a day name, ignoring ASCII case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownDay(s.to_string()))
    }
}

/// A weekly session of a class with a seat capacity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ClassSchedule {
    pub id: i64,
    pub class_id: i64,
    pub day_of_week: DayOfWeek,
    /// `HH:MM`
    pub start_time: String,
    /// `HH:MM`
    pub end_time: String,
    pub capacity: u32,
    pub booked: u32,
}

impl ClassSchedule {
    /// Whether at least one seat is still free.
    pub fn has_open_spot(&self) -> bool {
        self.booked < self.capacity
    }

    /// Takes one seat, or fails with [`BookingError::ClassFull`] and leaves
    /// the counter untouched.
    pub fn reserve_seat(&mut self) -> Result<(), BookingError> {
        if !self.has_open_spot() {
            return Err(BookingError::ClassFull {
                schedule_id: self.id,
            });
        }
        self.booked += 1;
        Ok(())
    }
}

/// Schedule data before an identifier is assigned.
#[derive(Debug, Clone, Validate)]
#[validate(schema(function = "validate_seats_and_window"))]
pub struct NewClassSchedule {
    pub class_id: i64,
    pub day_of_week: DayOfWeek,

    #[validate(custom(function = "shared::validation::validate_clock_time"))]
    pub start_time: String,

    #[validate(custom(function = "shared::validation::validate_clock_time"))]
    pub end_time: String,

    #[validate(range(min = 1, message = "Capacity must be at least 1"))]
    pub capacity: u32,

    pub booked: u32,
}

impl NewClassSchedule {
    pub fn with_id(self, id: i64) -> ClassSchedule {
        ClassSchedule {
            id,
            class_id: self.class_id,
            day_of_week: self.day_of_week,
            start_time: self.start_time,
            end_time: self.end_time,
            capacity: self.capacity,
            booked: self.booked,
        }
    }
}

fn validate_seats_and_window(schedule: &NewClassSchedule) -> Result<(), ValidationError> {
    if schedule.booked > schedule.capacity {
        let mut err = ValidationError::new("booked_exceeds_capacity");
        err.message = Some("Booked seats cannot exceed capacity".into());
        return Err(err);
    }
    shared::validation::validate_time_window(&schedule.start_time, &schedule.end_time)
}

/// A schedule joined with its class and that class's trainer.
///
/// Either reference may be `null` when it does not resolve.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedClassSchedule {
    #[serde(flatten)]
    pub schedule: ClassSchedule,
    pub class: Option<GymClass>,
    pub trainer: Option<Trainer>,
}

/// Query parameters for the schedule listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassScheduleQuery {
    pub day: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schedule(capacity: u32, booked: u32) -> ClassSchedule {
        ClassSchedule {
            id: 7,
            class_id: 1,
            day_of_week: DayOfWeek::Tuesday,
            start_time: "07:00".to_string(),
            end_time: "07:45".to_string(),
            capacity,
            booked,
        }
    }

    fn new_schedule(capacity: u32, booked: u32) -> NewClassSchedule {
        NewClassSchedule {
            class_id: 1,
            day_of_week: DayOfWeek::Friday,
            start_time: "18:00".to_string(),
            end_time: "19:00".to_string(),
            capacity,
            booked,
        }
    }

    #[test]
    fn test_day_of_week_parse() {
        assert_eq!("Tuesday".parse::<DayOfWeek>(), Ok(DayOfWeek::Tuesday));
        assert_eq!("tuesday".parse::<DayOfWeek>(), Ok(DayOfWeek::Tuesday));
        assert_eq!(" SUNDAY ".parse::<DayOfWeek>(), Ok(DayOfWeek::Sunday));
        assert!("Tues".parse::<DayOfWeek>().is_err());
        assert!("".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_day_of_week_serializes_as_name() {
        assert_eq!(
            serde_json::to_value(DayOfWeek::Wednesday).unwrap(),
            serde_json::json!("Wednesday")
        );
        assert_eq!(DayOfWeek::Saturday.to_string(), "Saturday");
    }

    #[test]
    fn test_reserve_seat_increments_by_one() {
        let mut s = schedule(15, 8);
        assert!(s.reserve_seat().is_ok());
        assert_eq!(s.booked, 9);
        assert!(s.has_open_spot());
    }

    #[test]
    fn test_reserve_seat_on_full_schedule() {
        let mut s = schedule(12, 12);
        let err = s.reserve_seat().unwrap_err();
        assert_eq!(err, BookingError::ClassFull { schedule_id: 7 });
        assert_eq!(s.booked, 12);
    }

    #[test]
    fn test_reserve_until_full_never_overshoots() {
        let mut s = schedule(3, 0);
        let accepted = (0..10).filter(|_| s.reserve_seat().is_ok()).count();
        assert_eq!(accepted, 3);
        assert_eq!(s.booked, s.capacity);
        assert!(!s.has_open_spot());
    }

    #[test]
    fn test_new_schedule_validation() {
        assert!(new_schedule(15, 0).validate().is_ok());
        assert!(new_schedule(15, 15).validate().is_ok());
        assert!(new_schedule(0, 0).validate().is_err());
        assert!(new_schedule(10, 11).validate().is_err());
    }

    #[test]
    fn test_new_schedule_rejects_bad_times() {
        let mut s = new_schedule(10, 0);
        s.start_time = "7am".to_string();
        let errors = s.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("start_time"));

        let mut s = new_schedule(10, 0);
        s.end_time = "17:00".to_string();
        assert!(s.validate().is_err());
    }

    #[test]
    fn test_enriched_schedule_flattens_fields() {
        let enriched = EnrichedClassSchedule {
            schedule: schedule(20, 12),
            class: None,
            trainer: None,
        };
        let json = serde_json::to_value(&enriched).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["dayOfWeek"], "Tuesday");
        assert_eq!(json["capacity"], 20);
        assert!(json["class"].is_null());
        assert!(json["trainer"].is_null());
    }
}
