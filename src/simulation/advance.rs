//! The advance step: wall-clock integration and trigger evaluation
//!
//! Each client request catches the world up to "now". Elapsed time is
//! derived from the game's last-update stamp and capped, the whole horde
//! moves, and then proximity triggers are scanned. The first trigger to
//! fire decides the game.

use std::time::SystemTime;

use rand::Rng;

use crate::core::config::GameConfig;
use crate::geo;
use crate::model::game::Game;
use crate::model::player::Player;
use crate::model::trigger::TriggerOutcome;

/// Advance `game` to `now`.
///
/// Elapsed time is measured against the game's last-update stamp and
/// capped at `max_advance_interval_secs`, so a game nobody touched for a
/// week does not teleport its zombies. A clock that went backwards counts
/// as zero elapsed time. The stamp is always moved to `now`.
pub fn advance<R: Rng>(game: &mut Game, now: SystemTime, config: &GameConfig, rng: &mut R) {
    let elapsed = now
        .duration_since(game.last_update())
        .map(|d| d.as_secs_f64())
        .unwrap_or(0.0);
    let seconds = elapsed.min(config.max_advance_interval_secs);
    if seconds < elapsed {
        tracing::debug!(
            "Capping advance: {:.0}s elapsed, simulating {:.0}s",
            elapsed,
            seconds
        );
    }
    game.set_last_update(now);
    advance_by(game, seconds, config, rng);
}

/// Advance `game` by an explicit number of simulated seconds.
///
/// The deterministic core of [`advance`]: moves every zombie, then
/// evaluates triggers. Does not touch the last-update stamp. Zombies keep
/// shambling after the game is decided; only trigger evaluation stops.
pub fn advance_by<R: Rng>(game: &mut Game, seconds: f64, config: &GameConfig, rng: &mut R) {
    let located: Vec<Player> = game.located_players().cloned().collect();
    tracing::debug!(
        "Advancing {:.1}s: {} zombies, {} located players",
        seconds,
        game.zombies().len(),
        located.len()
    );

    for zombie in game.zombies_mut() {
        super::chase::advance_zombie(zombie, &located, seconds, config, rng);
    }

    evaluate_triggers(game, config);
}

/// Fire the first proximity trigger, if any. A decided game is left alone.
fn evaluate_triggers(game: &mut Game, config: &GameConfig) {
    if game.is_done() {
        return;
    }
    if let Some(outcome) = first_triggered(game, config) {
        tracing::info!("Trigger fired: {:?}", outcome);
        game.game_over(outcome);
    }
}

/// Scan players against the destination and then the horde.
///
/// For each located player the destination is checked first, so a player
/// who reaches safety with a zombie on their heels still wins. The scan
/// stops at the first contact strictly inside the trigger distance.
fn first_triggered(game: &Game, config: &GameConfig) -> Option<TriggerOutcome> {
    let destination = game.destination()?;
    for player in game.located_players() {
        let Some(at) = player.location() else { continue };
        if geo::distance(at, destination.location(), config.earth_radius_m)
            < config.trigger_distance_m
        {
            return Some(destination.trigger());
        }
        for zombie in game.zombies() {
            if geo::distance(at, zombie.location(), config.earth_radius_m)
                < config.trigger_distance_m
            {
                return Some(zombie.trigger());
            }
        }
    }
    None
}
