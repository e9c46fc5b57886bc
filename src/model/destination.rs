//! The destination players must reach

use serde::{Deserialize, Serialize};

use crate::core::error::Result;
use crate::geo::Coordinate;
use crate::model::trigger::TriggerOutcome;

/// Where the players win, fixed when a game starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Destination {
    location: Coordinate,
}

/// Wire form of a destination.
#[derive(Serialize, Deserialize)]
struct DestinationRecord {
    lat: f64,
    lon: f64,
}

impl Destination {
    pub fn new(location: Coordinate) -> Self {
        Self { location }
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    /// Tag fired on contact: a player reaching the destination ends the
    /// game in the players' favor.
    pub fn trigger(&self) -> TriggerOutcome {
        TriggerOutcome::PlayersWin
    }

    /// Encode to the persisted textual form.
    pub fn encode(&self) -> Result<String> {
        let record = DestinationRecord {
            lat: self.location.lat(),
            lon: self.location.lon(),
        };
        Ok(serde_json::to_string(&record)?)
    }

    /// Decode from the persisted textual form, validating as it goes.
    pub fn decode(encoded: &str) -> Result<Self> {
        let record: DestinationRecord = serde_json::from_str(encoded)?;
        Ok(Self {
            location: Coordinate::new(record.lat, record.lon)?,
        })
    }
}
