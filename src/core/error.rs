use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Invalid latitude: {0} (must be within [-90, 90])")]
    InvalidLatitude(f64),

    #[error("Invalid longitude: {0} (must be within [-180, 180])")]
    InvalidLongitude(f64),

    #[error("Invalid zombie speed: {0} (must be positive)")]
    InvalidSpeed(f64),

    #[error("Player has no email address")]
    EmptyEmail,

    #[error("No player with email {0:?} in this game")]
    UnknownPlayer(String),

    #[error("Player index {index} out of range (game has {len} players)")]
    PlayerIndexOutOfRange { index: usize, len: usize },

    #[error("Zombie index {index} out of range (game has {len} zombies)")]
    ZombieIndexOutOfRange { index: usize, len: usize },

    #[error("Game is already started")]
    AlreadyStarted,

    #[error("Game owner {0:?} has not joined the game")]
    OwnerNotJoined(String),

    #[error("Game owner {0:?} has not reported a location yet")]
    OwnerUnlocated(String),

    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
