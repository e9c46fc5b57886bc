pub mod destination;
pub mod game;
pub mod player;
pub mod trigger;
pub mod zombie;

pub use destination::Destination;
pub use game::{Game, GameParts};
pub use player::Player;
pub use trigger::TriggerOutcome;
pub use zombie::Zombie;
