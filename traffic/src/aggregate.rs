use std::collections::BTreeMap;

use abstutil::Counter;
use serde::Serialize;

use crate::{Station, StationID, Trip};

/// How many of the counted trips began or ended at one station.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct StationTraffic {
    pub arrivals: usize,
    pub departures: usize,
}

impl StationTraffic {
    pub fn total(&self) -> usize {
        self.arrivals + self.departures
    }

    pub fn describe(&self) -> String {
        format!(
            "{} trips ({} departures, {} arrivals)",
            self.total(),
            self.departures,
            self.arrivals
        )
    }
}

/// The result of one aggregation. Every known station has an entry, even with no trips. A new
/// snapshot is built each time, so nothing from an earlier filter can linger.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TrafficSnapshot {
    per_station: BTreeMap<StationID, StationTraffic>,
    max_total: usize,
}

impl TrafficSnapshot {
    /// Unknown stations have zero traffic.
    pub fn get(&self, id: &StationID) -> StationTraffic {
        self.per_station.get(id).cloned().unwrap_or_default()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&StationID, &StationTraffic)> {
        self.per_station.iter()
    }

    /// The busiest station's total, or 0 if there are no stations.
    pub fn max_total(&self) -> usize {
        self.max_total
    }

    pub fn len(&self) -> usize {
        self.per_station.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_station.is_empty()
    }
}

/// Counts departures by starting station and arrivals by ending station. Trips referring to
/// stations that don't exist are counted, but never looked up.
pub fn aggregate<'a, I: IntoIterator<Item = &'a Trip>>(
    stations: &[Station],
    trips: I,
) -> TrafficSnapshot {
    let mut departures = Counter::new();
    let mut arrivals = Counter::new();
    for trip in trips {
        departures.inc(trip.start_station.clone());
        arrivals.inc(trip.end_station.clone());
    }

    let mut snapshot = TrafficSnapshot::default();
    for station in stations {
        let traffic = StationTraffic {
            arrivals: arrivals.get(station.short_name.clone()),
            departures: departures.get(station.short_name.clone()),
        };
        snapshot.max_total = snapshot.max_total.max(traffic.total());
        snapshot
            .per_station
            .insert(station.short_name.clone(), traffic);
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use geom::LonLat;

    use super::*;
    use crate::trip::trip_at;

    fn stations(names: &[&str]) -> Vec<Station> {
        names
            .iter()
            .map(|name| Station::new(StationID::new(*name), LonLat::new(-71.09, 42.36)))
            .collect()
    }

    #[test]
    fn test_round_trip_counts_both_ways() {
        let stations = stations(&["A"]);
        let trips = vec![trip_at("A", "A", (8, 0), (8, 10))];
        let snapshot = aggregate(&stations, &trips);

        let a = snapshot.get(&StationID::new("A"));
        assert_eq!(a.arrivals, 1);
        assert_eq!(a.departures, 1);
        assert_eq!(a.total(), 2);
        assert_eq!(snapshot.max_total(), 2);
        assert_eq!(a.describe(), "2 trips (1 departures, 1 arrivals)");
    }

    #[test]
    fn test_counts() {
        let stations = stations(&["A", "B", "C"]);
        let trips = vec![
            trip_at("A", "B", (8, 0), (8, 10)),
            trip_at("A", "C", (9, 0), (9, 20)),
            trip_at("B", "A", (17, 0), (17, 15)),
            // Unknown stations on either end
            trip_at("Z", "A", (12, 0), (12, 30)),
            trip_at("B", "Y", (13, 0), (13, 30)),
        ];
        let snapshot = aggregate(&stations, &trips);

        assert_eq!(snapshot.len(), 3);
        assert_eq!(
            snapshot.get(&StationID::new("A")),
            StationTraffic {
                arrivals: 2,
                departures: 2
            }
        );
        assert_eq!(
            snapshot.get(&StationID::new("B")),
            StationTraffic {
                arrivals: 1,
                departures: 2
            }
        );
        assert_eq!(
            snapshot.get(&StationID::new("C")),
            StationTraffic {
                arrivals: 1,
                departures: 0
            }
        );
        assert_eq!(snapshot.max_total(), 4);

        // Unknown stations never show up
        assert!(snapshot.iter().all(|(id, _)| id.as_str() != "Z"));
        assert_eq!(snapshot.get(&StationID::new("Z")).total(), 0);

        for (_, traffic) in snapshot.iter() {
            assert_eq!(traffic.total(), traffic.arrivals + traffic.departures);
        }
    }

    #[test]
    fn test_no_trips() {
        let stations = stations(&["A", "B"]);
        let snapshot = aggregate(&stations, &Vec::<Trip>::new());
        assert_eq!(snapshot.len(), 2);
        for (_, traffic) in snapshot.iter() {
            assert_eq!(*traffic, StationTraffic::default());
        }
        assert_eq!(snapshot.max_total(), 0);
    }

    #[test]
    fn test_no_stations() {
        let trips = vec![trip_at("A", "B", (8, 0), (8, 10))];
        let snapshot = aggregate(&[], &trips);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.max_total(), 0);
    }

    #[test]
    fn test_idempotent() {
        let stations = stations(&["A", "B"]);
        let trips = vec![
            trip_at("A", "B", (8, 0), (8, 10)),
            trip_at("B", "B", (9, 0), (9, 10)),
        ];
        assert_eq!(aggregate(&stations, &trips), aggregate(&stations, &trips));
    }
}
