use geom::LonLat;
use serde::{Deserialize, Serialize};

use crate::StationID;

/// A physical dock location. Traffic counts aren't stored here; see `TrafficSnapshot`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Station {
    pub short_name: StationID,
    // Only used by whatever projects stations onto the screen
    pub pos: LonLat,
}

impl Station {
    pub fn new(short_name: StationID, pos: LonLat) -> Self {
        Self { short_name, pos }
    }
}
