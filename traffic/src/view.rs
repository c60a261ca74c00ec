use geom::LonLat;
use serde::Serialize;

use crate::{
    ColorScale, RadiusScale, Station, StationID, StationTraffic, TimeFilter, TrafficSnapshot,
};

/// Everything produced by one run of the pipeline, for one time filter.
#[derive(Clone, Debug)]
pub struct TrafficView {
    pub filter: TimeFilter,
    /// How many trips passed the filter
    pub num_trips: usize,
    pub snapshot: TrafficSnapshot,
    pub radius: RadiusScale,
    pub color: ColorScale,
}

/// What a renderer needs to draw one station.
#[derive(Clone, Debug, Serialize)]
pub struct StationMarker {
    pub short_name: StationID,
    pub pos: LonLat,
    pub traffic: StationTraffic,
    pub radius: f64,
    pub color: String,
    pub tooltip: String,
}

impl TrafficView {
    /// Markers in the same order as `stations`.
    pub fn markers(&self, stations: &[Station]) -> Vec<StationMarker> {
        stations
            .iter()
            .map(|station| {
                let traffic = self.snapshot.get(&station.short_name);
                StationMarker {
                    short_name: station.short_name.clone(),
                    pos: station.pos.clone(),
                    traffic,
                    radius: self.radius.radius(traffic.total()),
                    color: self.color.hex(traffic.total()),
                    tooltip: traffic.describe(),
                }
            })
            .collect()
    }
}
