//! Players, the humans being chased
//!
//! A player is keyed by email within a game and may not have reported a
//! location yet. Unlocated players are invisible to zombies and to the
//! trigger scan.

use serde::{Deserialize, Serialize};

use crate::core::error::{GameError, Result};
use crate::geo::Coordinate;

/// A participating human.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    email: String,
    location: Option<Coordinate>,
}

/// Wire form of a player.
///
/// Both coordinate keys must be present; either being null means the
/// player has not reported a location yet.
#[derive(Serialize, Deserialize)]
struct PlayerRecord {
    lat: Option<f64>,
    lon: Option<f64>,
    email: String,
}

impl Player {
    /// A player who has not reported a location yet.
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            location: None,
        }
    }

    /// A player standing at a known location.
    pub fn at(email: impl Into<String>, location: Coordinate) -> Self {
        Self {
            email: email.into(),
            location: Some(location),
        }
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn location(&self) -> Option<Coordinate> {
        self.location
    }

    pub fn set_location(&mut self, location: Coordinate) {
        self.location = Some(location);
    }

    /// Encode to the persisted textual form.
    ///
    /// Fails on an empty email: a player without one cannot be addressed.
    pub fn encode(&self) -> Result<String> {
        if self.email.is_empty() {
            return Err(GameError::EmptyEmail);
        }
        let record = PlayerRecord {
            lat: self.location.map(|c| c.lat()),
            lon: self.location.map(|c| c.lon()),
            email: self.email.clone(),
        };
        Ok(serde_json::to_string(&record)?)
    }

    /// Decode from the persisted textual form, validating as it goes.
    pub fn decode(encoded: &str) -> Result<Self> {
        let record: PlayerRecord = serde_json::from_str(encoded)?;
        if record.email.is_empty() {
            return Err(GameError::EmptyEmail);
        }
        let location = match (record.lat, record.lon) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)?),
            _ => None,
        };
        Ok(Self {
            email: record.email,
            location,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_located_player() {
        let player = Player::at("runner@example.com", Coordinate::new(37.4, -122.1).unwrap());
        let decoded = Player::decode(&player.encode().unwrap()).unwrap();
        assert_eq!(decoded, player);
    }

    #[test]
    fn test_unlocated_player_encodes_null_coordinates() {
        let encoded = Player::new("idle@example.com").encode().unwrap();
        let value: serde_json::Value = serde_json::from_str(&encoded).unwrap();
        assert!(value["lat"].is_null());
        assert!(value["lon"].is_null());
        assert_eq!(value["email"], "idle@example.com");
    }

    #[test]
    fn test_decode_half_located_player_is_unlocated() {
        let player = Player::decode(r#"{"lat":12.5,"lon":null,"email":"a@b.c"}"#).unwrap();
        assert_eq!(player.location(), None, "one null coordinate means unlocated");
    }

    #[test]
    fn test_decode_requires_email_field() {
        let result = Player::decode(r#"{"lat":1.0,"lon":2.0}"#);
        assert!(matches!(result, Err(GameError::Decode(_))));
    }

    #[test]
    fn test_decode_rejects_empty_email() {
        let result = Player::decode(r#"{"lat":1.0,"lon":2.0,"email":""}"#);
        assert!(matches!(result, Err(GameError::EmptyEmail)));
    }

    #[test]
    fn test_decode_rejects_out_of_range_latitude() {
        let result = Player::decode(r#"{"lat":120.0,"lon":2.0,"email":"a@b.c"}"#);
        assert!(matches!(result, Err(GameError::InvalidLatitude(_))));
    }

    #[test]
    fn test_encode_rejects_empty_email() {
        let result = Player::new("").encode();
        assert!(matches!(result, Err(GameError::EmptyEmail)));
    }
}
