use std::io::Read;

use abstutil::Timer;
use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime};
use geom::LonLat;
use serde::{Deserialize, Deserializer};

use traffic::{Network, Station, StationID, Trip};

pub fn load_network(stations_path: &str, trips_path: &str, timer: &mut Timer) -> Result<Network> {
    timer.start("load stations");
    let stations = load_stations(fs_err::File::open(stations_path)?)
        .with_context(|| format!("loading {stations_path}"))?;
    timer.stop("load stations");

    timer.start("load trips");
    let trips = load_trips(fs_err::File::open(trips_path)?)
        .with_context(|| format!("loading {trips_path}"))?;
    timer.stop("load trips");

    Network::new(stations, trips)
}

/// Reads a station feed, like `{"data": {"stations": [...]}}`
pub fn load_stations<R: Read>(reader: R) -> Result<Vec<Station>> {
    let feed: StationFeed = serde_json::from_reader(reader)?;
    let mut stations = Vec::new();
    let mut skipped = 0;
    for rec in feed.data.stations {
        let short_name = match rec.short_name {
            Some(x) => x,
            None => {
                skipped += 1;
                continue;
            }
        };
        stations.push(Station::new(short_name, LonLat::new(rec.lon, rec.lat)));
    }
    if skipped > 0 {
        warn!("Skipped {skipped} stations without a short_name");
    }
    Ok(stations)
}

#[derive(Deserialize)]
struct StationFeed {
    data: StationData,
}

#[derive(Deserialize)]
struct StationData {
    stations: Vec<StationRecord>,
}

#[derive(Deserialize)]
struct StationRecord {
    short_name: Option<StationID>,
    #[serde(deserialize_with = "number_or_string")]
    lon: f64,
    #[serde(deserialize_with = "number_or_string")]
    lat: f64,
}

// Some feeds quote coordinates
fn number_or_string<'de, D: Deserializer<'de>>(d: D) -> Result<f64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(d)? {
        Raw::Number(x) => Ok(x),
        Raw::Text(x) => x
            .trim()
            .parse::<f64>()
            .map_err(|err| serde::de::Error::custom(format!("Bad number {x}: {err}"))),
    }
}

pub fn load_trips<R: Read>(reader: R) -> Result<Vec<Trip>> {
    let mut trips = Vec::new();
    for rec in csv::Reader::from_reader(reader).deserialize() {
        let rec: TripRecord = rec?;
        trips.push(Trip::new(
            rec.start_station_id,
            rec.end_station_id,
            parse_timestamp(&rec.started_at)?,
            parse_timestamp(&rec.ended_at)?,
        ));
    }
    Ok(trips)
}

// Only the columns needed for counting; anything else in the file is ignored
#[derive(Deserialize)]
struct TripRecord {
    started_at: String,
    ended_at: String,
    // Some trips have no station on one end; an empty ID just won't match anything
    start_station_id: StationID,
    end_station_id: StationID,
}

fn parse_timestamp(raw: &str) -> Result<NaiveDateTime> {
    for format in [
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S%.f",
    ] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Ok(datetime);
        }
    }
    // Keep the local wall-clock time; only the time of day matters
    if let Ok(datetime) = DateTime::parse_from_rfc3339(raw) {
        return Ok(datetime.naive_local());
    }
    bail!("Unknown timestamp format {raw}")
}
