//! Zombies, the pursuers
//!
//! A zombie always has a location and a positive speed. The `chasing`
//! annotation is plain bookkeeping for clients ("who is it after right
//! now"); the chase system recomputes it every advance and never reads it.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::geo::Coordinate;
use crate::model::trigger::TriggerOutcome;

/// A pursuer.
#[derive(Debug, Clone, PartialEq)]
pub struct Zombie {
    location: Coordinate,
    speed: f64,
    chasing: Option<String>,
}

/// Wire form of a zombie. The chasing annotation is only written when set.
#[derive(Serialize, Deserialize)]
struct ZombieRecord {
    lat: f64,
    lon: f64,
    speed: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    chasing: Option<String>,
}

impl Zombie {
    /// A zombie standing at `location`, moving at `speed` meters per second.
    ///
    /// Generated speeds are always positive; external input is checked at
    /// decode time instead.
    pub fn new(location: Coordinate, speed: f64) -> Self {
        Self {
            location,
            speed,
            chasing: None,
        }
    }

    pub fn location(&self) -> Coordinate {
        self.location
    }

    pub fn set_location(&mut self, location: Coordinate) {
        self.location = location;
    }

    /// Speed in meters per second
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Email of the player this zombie went after on the last advance.
    pub fn chasing(&self) -> Option<&str> {
        self.chasing.as_deref()
    }

    pub fn set_chasing(&mut self, chasing: Option<String>) {
        self.chasing = chasing;
    }

    /// Tag fired on contact: a zombie reaching a player ends the game
    /// against the players.
    pub fn trigger(&self) -> TriggerOutcome {
        TriggerOutcome::PlayersLose
    }

    /// Encode to the persisted textual form.
    pub fn encode(&self) -> Result<String> {
        let record = ZombieRecord {
            lat: self.location.lat(),
            lon: self.location.lon(),
            speed: self.speed,
            chasing: self.chasing.clone(),
        };
        Ok(serde_json::to_string(&record)?)
    }

    /// Decode from the persisted textual form, validating as it goes.
    pub fn decode(encoded: &str) -> Result<Self> {
        let record: ZombieRecord = serde_json::from_str(encoded)?;
        if !(record.speed.is_finite() && record.speed > 0.0) {
            return Err(GameError::InvalidSpeed(record.speed));
        }
        Ok(Self {
            location: Coordinate::new(record.lat, record.lon)?,
            speed: record.speed,
            chasing: record.chasing,
        })
    }
}
