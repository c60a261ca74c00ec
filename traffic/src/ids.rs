use std::fmt;

use serde::{Deserialize, Serialize};

/// Stations are keyed by their short name, which trips reference directly.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StationID(pub String);

impl StationID {
    pub fn new<S: Into<String>>(x: S) -> Self {
        Self(x.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StationID {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
