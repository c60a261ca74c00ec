use anyhow::Result;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::Trip;

/// A trip is selected if it starts or ends within this many minutes of the chosen time,
/// inclusive.
pub const WINDOW_MINUTES: i32 = 60;
pub const MINUTES_PER_DAY: i32 = 24 * 60;

/// Which trips to count, based on the time of day they happen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFilter {
    Any,
    /// Minutes since midnight, in [0, 1439]
    Around(u16),
}

impl TimeFilter {
    /// The time slider uses -1 to mean "any time".
    pub fn from_slider(value: i32) -> Result<Self> {
        match value {
            -1 => Ok(TimeFilter::Any),
            x if (0..MINUTES_PER_DAY).contains(&x) => Ok(TimeFilter::Around(x as u16)),
            x => bail!("Time selection {x} isn't -1 or in [0, {}]", MINUTES_PER_DAY - 1),
        }
    }

    pub fn to_slider(self) -> i32 {
        match self {
            TimeFilter::Any => -1,
            TimeFilter::Around(minutes) => minutes as i32,
        }
    }

    pub fn is_active(self) -> bool {
        self != TimeFilter::Any
    }

    pub fn label(self) -> String {
        match self {
            TimeFilter::Any => "(any time)".to_string(),
            TimeFilter::Around(minutes) => format_minutes(minutes),
        }
    }

    /// This isn't aware of wraparound: a filter at 00:10 doesn't match a trip at 23:50.
    pub fn matches(self, trip: &Trip) -> bool {
        match self {
            TimeFilter::Any => true,
            TimeFilter::Around(minutes) => {
                let minutes = minutes as i32;
                (trip.start_minutes() as i32 - minutes).abs() <= WINDOW_MINUTES
                    || (trip.end_minutes() as i32 - minutes).abs() <= WINDOW_MINUTES
            }
        }
    }
}

/// The trips picked out by a `TimeFilter`. With no filter, this is just the original slice.
pub enum SelectedTrips<'a> {
    All(&'a [Trip]),
    Subset(Vec<&'a Trip>),
}

impl<'a> SelectedTrips<'a> {
    pub fn iter(&self) -> Box<dyn Iterator<Item = &'a Trip> + '_> {
        match self {
            SelectedTrips::All(trips) => Box::new((*trips).iter()),
            SelectedTrips::Subset(trips) => Box::new(trips.iter().copied()),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            SelectedTrips::All(trips) => trips.len(),
            SelectedTrips::Subset(trips) => trips.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn filter_trips(trips: &[Trip], filter: TimeFilter) -> SelectedTrips<'_> {
    match filter {
        TimeFilter::Any => SelectedTrips::All(trips),
        TimeFilter::Around(_) => {
            SelectedTrips::Subset(trips.iter().filter(|trip| filter.matches(trip)).collect())
        }
    }
}

/// Formats minutes since midnight like "8:05 AM". Values past one day wrap around.
pub fn format_minutes(minutes: u16) -> String {
    let minutes = minutes as u32 % MINUTES_PER_DAY as u32;
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
        .map(|t| t.format("%-I:%M %p").to_string())
        .unwrap_or_default()
}
