//! The train departure record.
//!
//! A record has no identifier of its own: two records are the same train
//! when all four fields are equal.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Clock format expected for departure times.
const CLOCK_FORMAT: &str = "%H:%M";

/// One train departure entry.
///
/// Fields are lowercased when the record is built through [`TrainRecord::new`],
/// so comparisons and duplicate checks are case-insensitive with respect to
/// user input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TrainRecord {
    /// Station the train leaves from.
    pub departure_point: String,

    /// Train number, e.g. `"a1"`.
    pub number_train: String,

    /// Departure time. Ordering is lexicographic, so `HH:MM` is expected.
    pub time_departure: String,

    /// Station the train is heading to.
    pub destination: String,
}

impl TrainRecord {
    /// Create a record, lowercasing every field.
    #[must_use]
    pub fn new(
        departure_point: &str,
        number_train: &str,
        time_departure: &str,
        destination: &str,
    ) -> Self {
        Self {
            departure_point: departure_point.to_lowercase(),
            number_train: number_train.to_lowercase(),
            time_departure: time_departure.to_lowercase(),
            destination: destination.to_lowercase(),
        }
    }

    /// Whether the departure time is a 24-hour `HH:MM` clock time.
    ///
    /// Times in any other shape are still stored, but they may not sort
    /// the way a reader expects.
    #[must_use]
    pub fn has_clock_time(&self) -> bool {
        self.time_departure.len() == 5
            && NaiveTime::parse_from_str(&self.time_departure, CLOCK_FORMAT).is_ok()
    }

    /// Whether this train goes to `destination`, ignoring case.
    #[must_use]
    pub fn goes_to(&self, destination: &str) -> bool {
        self.destination.to_lowercase() == destination.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_lowercases_fields() {
        let record = TrainRecord::new("Moscow", "A1", "08:00", "Kazan");
        assert_eq!(record.departure_point, "moscow");
        assert_eq!(record.number_train, "a1");
        assert_eq!(record.time_departure, "08:00");
        assert_eq!(record.destination, "kazan");
    }

    #[test]
    fn test_new_lowercases_non_ascii() {
        let record = TrainRecord::new("Москва", "Ф12", "10:15", "Уфа");
        assert_eq!(record.departure_point, "москва");
        assert_eq!(record.number_train, "ф12");
        assert_eq!(record.destination, "уфа");
    }

    #[test]
    fn test_structural_equality() {
        let a = TrainRecord::new("Moscow", "A1", "08:00", "Kazan");
        let b = TrainRecord::new("MOSCOW", "a1", "08:00", "KAZAN");
        let c = TrainRecord::new("Moscow", "A2", "08:00", "Kazan");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_has_clock_time() {
        assert!(TrainRecord::new("a", "1", "08:00", "b").has_clock_time());
        assert!(TrainRecord::new("a", "1", "23:59", "b").has_clock_time());
        assert!(!TrainRecord::new("a", "1", "8:00", "b").has_clock_time());
        assert!(!TrainRecord::new("a", "1", "25:00", "b").has_clock_time());
        assert!(!TrainRecord::new("a", "1", "morning", "b").has_clock_time());
    }

    #[test]
    fn test_goes_to_ignores_case() {
        let record = TrainRecord {
            departure_point: "moscow".to_string(),
            number_train: "a1".to_string(),
            time_departure: "08:00".to_string(),
            destination: "Kazan".to_string(),
        };
        assert!(record.goes_to("kazan"));
        assert!(record.goes_to("KAZAN"));
        assert!(!record.goes_to("ufa"));
    }

    #[test]
    fn test_deserialize_rejects_missing_field() {
        let json = r#"{"departure_point": "a", "number_train": "1", "time_departure": "08:00"}"#;
        let result: std::result::Result<TrainRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_unknown_field() {
        let json = r#"{"departure_point": "a", "number_train": "1",
            "time_departure": "08:00", "destination": "b", "platform": "3"}"#;
        let result: std::result::Result<TrainRecord, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_serialize_field_names() {
        let record = TrainRecord::new("a", "1", "08:00", "b");
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"departure_point\""));
        assert!(json.contains("\"number_train\""));
        assert!(json.contains("\"time_departure\""));
        assert!(json.contains("\"destination\""));
    }
}
