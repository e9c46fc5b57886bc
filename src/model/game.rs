//! The game aggregate
//!
//! Owns the collections the engine operates on and guards the lifecycle:
//! a game is created, players join and report locations, the owner starts
//! it (fixing the destination and seeding the horde), and a trigger ends
//! it. A finished game keeps its winner forever.

use std::time::SystemTime;

use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::geo::Coordinate;
use crate::model::destination::Destination;
use crate::model::player::Player;
use crate::model::trigger::TriggerOutcome;
use crate::model::zombie::Zombie;
use crate::simulation::populate;

/// A pursuit game.
#[derive(Debug, Clone)]
pub struct Game {
    owner: String,
    players: Vec<Player>,
    zombies: Vec<Zombie>,
    destination: Option<Destination>,
    started: bool,
    outcome: Option<TriggerOutcome>,
    last_update: SystemTime,
    /// Mean speed handed to the population generator (meters per second)
    pub average_zombie_speed: f64,
    /// Zombies per square kilometer handed to the population generator
    pub zombie_density: f64,
}

/// Everything needed to rebuild a game from storage.
///
/// The persistence layer keeps entities as encoded blobs and scalars in
/// their own columns; [`Game::from_parts`] reassembles them without
/// replaying the lifecycle.
#[derive(Debug, Clone)]
pub struct GameParts {
    pub owner: String,
    pub players: Vec<Player>,
    pub zombies: Vec<Zombie>,
    pub destination: Option<Destination>,
    pub started: bool,
    pub outcome: Option<TriggerOutcome>,
    pub last_update: SystemTime,
    pub average_zombie_speed: f64,
    pub zombie_density: f64,
}

impl Game {
    /// A fresh, un-started game owned by `owner`.
    pub fn new(owner: impl Into<String>, now: SystemTime, config: &GameConfig) -> Self {
        Self {
            owner: owner.into(),
            players: Vec::new(),
            zombies: Vec::new(),
            destination: None,
            started: false,
            outcome: None,
            last_update: now,
            average_zombie_speed: config.default_zombie_speed,
            zombie_density: config.default_zombie_density,
        }
    }

    /// Rebuild a previously persisted game.
    pub fn from_parts(parts: GameParts) -> Self {
        Self {
            owner: parts.owner,
            players: parts.players,
            zombies: parts.zombies,
            destination: parts.destination,
            started: parts.started,
            outcome: parts.outcome,
            last_update: parts.last_update,
            average_zombie_speed: parts.average_zombie_speed,
            zombie_density: parts.zombie_density,
        }
    }

    /// Email of the player who owns (and may start) this game.
    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn zombies(&self) -> &[Zombie] {
        &self.zombies
    }

    pub(crate) fn zombies_mut(&mut self) -> &mut [Zombie] {
        &mut self.zombies
    }

    pub fn destination(&self) -> Option<&Destination> {
        self.destination.as_ref()
    }

    pub fn started(&self) -> bool {
        self.started
    }

    /// True once a trigger has decided the game.
    pub fn is_done(&self) -> bool {
        self.outcome.is_some()
    }

    /// The recorded result, if the game is over.
    pub fn outcome(&self) -> Option<TriggerOutcome> {
        self.outcome
    }

    /// `Some(true)` if the players won, `Some(false)` if the horde did,
    /// `None` while the game is still running.
    pub fn players_won(&self) -> Option<bool> {
        self.outcome.map(TriggerOutcome::players_won)
    }

    /// Moment the simulation last caught up to.
    pub fn last_update(&self) -> SystemTime {
        self.last_update
    }

    pub(crate) fn set_last_update(&mut self, now: SystemTime) {
        self.last_update = now;
    }

    /// Add a player to the game.
    pub fn add_player(&mut self, player: Player) -> Result<()> {
        if player.email().is_empty() {
            return Err(GameError::EmptyEmail);
        }
        self.players.push(player);
        Ok(())
    }

    /// Replace the player at `index`.
    pub fn set_player(&mut self, index: usize, player: Player) -> Result<()> {
        if player.email().is_empty() {
            return Err(GameError::EmptyEmail);
        }
        let len = self.players.len();
        match self.players.get_mut(index) {
            Some(slot) => {
                *slot = player;
                Ok(())
            }
            None => Err(GameError::PlayerIndexOutOfRange { index, len }),
        }
    }

    /// Add a zombie to the game.
    pub fn add_zombie(&mut self, zombie: Zombie) {
        self.zombies.push(zombie);
    }

    /// Replace the zombie at `index`.
    pub fn set_zombie(&mut self, index: usize, zombie: Zombie) -> Result<()> {
        let len = self.zombies.len();
        match self.zombies.get_mut(index) {
            Some(slot) => {
                *slot = zombie;
                Ok(())
            }
            None => Err(GameError::ZombieIndexOutOfRange { index, len }),
        }
    }

    /// First player with this email, if any.
    pub fn find_player(&self, email: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.email() == email)
    }

    /// Players who have reported a location.
    pub fn located_players(&self) -> impl Iterator<Item = &Player> + '_ {
        self.players.iter().filter(|p| p.location().is_some())
    }

    /// Record a position fix for the player with this email.
    pub fn report_location(&mut self, email: &str, location: Coordinate) -> Result<()> {
        let player = self
            .players
            .iter_mut()
            .find(|p| p.email() == email)
            .ok_or_else(|| GameError::UnknownPlayer(email.to_string()))?;
        player.set_location(location);
        Ok(())
    }

    /// Start the game: fix the destination and seed the zombie population.
    ///
    /// Requires the owner to have joined and reported a location, and can
    /// happen at most once per game.
    pub fn start<R: Rng>(
        &mut self,
        destination: Coordinate,
        now: SystemTime,
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<()> {
        if self.started {
            return Err(GameError::AlreadyStarted);
        }
        populate::populate(self, destination, config, rng)?;
        self.destination = Some(Destination::new(destination));
        self.started = true;
        self.last_update = now;
        Ok(())
    }

    /// Record the result. The first recorded outcome is final; later calls
    /// cannot change the winner.
    pub fn game_over(&mut self, outcome: TriggerOutcome) {
        if self.outcome.is_none() {
            self.outcome = Some(outcome);
        }
    }
}
