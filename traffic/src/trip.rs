use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::StationID;

/// One rental, from one dock to another.
///
/// Nothing requires `ended_at` to come after `started_at`; only the time of day of each is ever
/// used.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub start_station: StationID,
    pub end_station: StationID,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
}

impl Trip {
    pub fn new(
        start_station: StationID,
        end_station: StationID,
        started_at: NaiveDateTime,
        ended_at: NaiveDateTime,
    ) -> Self {
        Self {
            start_station,
            end_station,
            started_at,
            ended_at,
        }
    }

    pub fn start_minutes(&self) -> u16 {
        minutes_since_midnight(&self.started_at)
    }

    pub fn end_minutes(&self) -> u16 {
        minutes_since_midnight(&self.ended_at)
    }
}

/// Ignores the date and seconds.
pub fn minutes_since_midnight(datetime: &NaiveDateTime) -> u16 {
    (datetime.hour() * 60 + datetime.minute()) as u16
}

/// Every trip loaded, in the original order. Never modified after loading, so filters can be
/// re-applied any number of times.
#[derive(Clone, Debug, Default)]
pub struct TripLog(Vec<Trip>);

impl TripLog {
    pub fn new(trips: Vec<Trip>) -> Self {
        Self(trips)
    }

    pub fn all(&self) -> &[Trip] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds a trip on an arbitrary day, from (hour, minute) pairs.
#[cfg(test)]
pub(crate) fn trip_at(start: &str, end: &str, started: (u32, u32), ended: (u32, u32)) -> Trip {
    let day = chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
    Trip::new(
        StationID::new(start),
        StationID::new(end),
        day.and_hms_opt(started.0, started.1, 0).unwrap(),
        day.and_hms_opt(ended.0, ended.1, 0).unwrap(),
    )
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    #[test]
    fn test_minutes_ignore_date_and_seconds() {
        let dt = NaiveDate::from_ymd_opt(2024, 3, 17)
            .unwrap()
            .and_hms_opt(23, 59, 58)
            .unwrap();
        assert_eq!(minutes_since_midnight(&dt), 1439);

        let dt = NaiveDate::from_ymd_opt(2001, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 59)
            .unwrap();
        assert_eq!(minutes_since_midnight(&dt), 0);
    }

    #[test]
    fn test_end_before_start_is_tolerated() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let trip = Trip::new(
            StationID::new("A"),
            StationID::new("B"),
            day.and_hms_opt(9, 30, 0).unwrap(),
            day.and_hms_opt(8, 15, 0).unwrap(),
        );
        assert_eq!(trip.start_minutes(), 570);
        assert_eq!(trip.end_minutes(), 495);
    }
}
