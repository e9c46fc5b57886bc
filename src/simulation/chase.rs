//! Zombie behavior: target acquisition and movement
//!
//! A zombie keeps no persistent AI state. Each advance it either chases
//! the nearest located player inside vision range or wanders toward a
//! random nearby point. Movement integrates in one-second steps so a large
//! elapsed interval can neither overshoot a target nor tunnel past it.

use rand::Rng;

use crate::core::config::GameConfig;
use crate::geo;
use crate::model::player::Player;
use crate::model::zombie::Zombie;

/// Advance one zombie by `seconds` of simulated time.
///
/// `players` should already be the located subset; players without a
/// location are never eligible targets. The target is re-acquired every
/// simulated second, so a zombie switches prey as soon as someone closer
/// shows up.
pub fn advance_zombie<R: Rng>(
    zombie: &mut Zombie,
    players: &[Player],
    seconds: f64,
    config: &GameConfig,
    rng: &mut R,
) {
    let mut remaining = seconds;
    while remaining > 0.0 {
        let step_secs = remaining.min(1.0);
        let budget_m = zombie.speed() * step_secs;

        let target = acquire_target(zombie, players, config);
        zombie.set_chasing(target.map(|p| p.email().to_string()));

        match target.and_then(Player::location) {
            Some(mark) => chase_step(zombie, mark, budget_m, config),
            None => wander_step(zombie, budget_m, config, rng),
        }

        remaining -= step_secs;
    }
}

/// The nearest located player, if any is strictly inside vision range.
///
/// Strict minimum with the first-listed player winning ties, so the scan
/// is deterministic for a fixed roster order.
fn acquire_target<'p>(
    zombie: &Zombie,
    players: &'p [Player],
    config: &GameConfig,
) -> Option<&'p Player> {
    let mut nearest: Option<(&Player, f64)> = None;
    for player in players {
        let Some(at) = player.location() else { continue };
        let d = geo::distance(zombie.location(), at, config.earth_radius_m);
        if nearest.map_or(true, |(_, best)| d < best) {
            nearest = Some((player, d));
        }
    }
    nearest.and_then(|(player, d)| (d < config.zombie_vision_m).then_some(player))
}

/// One bounded step toward a target coordinate.
///
/// Travel is capped at the current gap, so a zombie lands on its prey
/// rather than lurching past it.
fn chase_step(zombie: &mut Zombie, mark: geo::Coordinate, budget_m: f64, config: &GameConfig) {
    let gap_m = geo::distance(zombie.location(), mark, config.earth_radius_m);
    let travel_m = gap_m.min(budget_m);
    // A capped step toward a valid coordinate stays in range.
    if let Ok(next) = geo::step_toward(
        zombie.location(),
        mark.lat(),
        mark.lon(),
        travel_m,
        config.earth_radius_m,
    ) {
        zombie.set_location(next);
    }
}

/// One step toward a uniformly random point up to half a degree away on
/// each axis. A step that would cross a pole or the antimeridian is
/// skipped; the zombie tries a fresh direction next second.
fn wander_step<R: Rng>(zombie: &mut Zombie, budget_m: f64, config: &GameConfig, rng: &mut R) {
    let at = zombie.location();
    let target_lat = at.lat() + (rng.gen::<f64>() - 0.5);
    let target_lon = at.lon() + (rng.gen::<f64>() - 0.5);
    if let Ok(next) = geo::step_toward(at, target_lat, target_lon, budget_m, config.earth_radius_m)
    {
        zombie.set_location(next);
    }
}
