#[macro_use]
extern crate anyhow;
#[macro_use]
extern crate log;

mod aggregate;
mod ids;
mod loader;
mod network;
mod scale;
mod session;
mod station;
mod time_filter;
mod trip;
mod view;

pub use self::aggregate::{aggregate, StationTraffic, TrafficSnapshot};
pub use self::ids::StationID;
pub use self::loader::{data_gate, DataGate, DataSender, GateStatus};
pub use self::network::Network;
pub use self::scale::{
    ColorScale, RadiusScale, FILTERED_RADIUS, INTENSITY_BASE, INTENSITY_SPAN, UNFILTERED_RADIUS,
};
pub use self::session::Session;
pub use self::station::Station;
pub use self::time_filter::{
    filter_trips, format_minutes, SelectedTrips, TimeFilter, MINUTES_PER_DAY, WINDOW_MINUTES,
};
pub use self::trip::{minutes_since_midnight, Trip, TripLog};
pub use self::view::{StationMarker, TrafficView};
