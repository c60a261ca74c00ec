use std::collections::BTreeSet;

use anyhow::Result;

use crate::{
    aggregate, filter_trips, ColorScale, RadiusScale, Station, StationID, TimeFilter, TrafficView,
    Trip, TripLog,
};

/// All stations and trips, loaded once and kept for the lifetime of the app.
#[derive(Clone, Debug, Default)]
pub struct Network {
    stations: Vec<Station>,
    trips: TripLog,
}

impl Network {
    pub fn new(stations: Vec<Station>, trips: Vec<Trip>) -> Result<Self> {
        let mut ids = BTreeSet::new();
        for station in &stations {
            if !ids.insert(station.short_name.clone()) {
                bail!("Duplicate station {}", station.short_name);
            }
        }

        let unknown = count_unknown_stations(&ids, &trips);
        if unknown > 0 {
            warn!("{unknown} trips start or end at unknown stations; they won't be counted there");
        }
        info!("{} stations, {} trips", stations.len(), trips.len());

        Ok(Self {
            stations,
            trips: TripLog::new(trips),
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn trips(&self) -> &TripLog {
        &self.trips
    }

    /// Runs the whole pipeline for one time filter: select trips, count per station, and build
    /// scales from the result. Nothing here is mutated, so this can run any number of times.
    pub fn recompute(&self, filter: TimeFilter) -> TrafficView {
        let selected = filter_trips(self.trips.all(), filter);
        let snapshot = aggregate(&self.stations, selected.iter());
        let radius = RadiusScale::new(&snapshot, filter.is_active());
        let color = ColorScale::new(&snapshot);
        debug!(
            "{}: {} / {} trips, busiest station has {}",
            filter.label(),
            selected.len(),
            self.trips.len(),
            snapshot.max_total()
        );
        TrafficView {
            filter,
            num_trips: selected.len(),
            snapshot,
            radius,
            color,
        }
    }
}

fn count_unknown_stations(ids: &BTreeSet<StationID>, trips: &[Trip]) -> usize {
    trips
        .iter()
        .filter(|trip| !ids.contains(&trip.start_station) || !ids.contains(&trip.end_station))
        .count()
}
