//! Population generation: seeding a game's horde at start
//!
//! Zombies are thrown down in small clusters around the midpoint of the
//! owner and the destination. The covered circle uses the full
//! owner-to-destination distance as its radius, not half of it, so the
//! horde spreads well past the straight-line path. All randomness comes
//! from the caller's generator; a fixed seed places the same horde twice.

use std::f64::consts::TAU;

use rand::Rng;

use crate::core::config::GameConfig;
use crate::core::error::{GameError, Result};
use crate::geo::{self, Coordinate};
use crate::model::game::Game;
use crate::model::zombie::Zombie;

/// Seed `game` with its starting zombie population around the path from
/// the owner to `destination`.
///
/// The owner must have joined the game and reported a location. On error
/// the game is left untouched.
pub fn populate<R: Rng>(
    game: &mut Game,
    destination: Coordinate,
    config: &GameConfig,
    rng: &mut R,
) -> Result<()> {
    let owner = game
        .find_player(game.owner())
        .ok_or_else(|| GameError::OwnerNotJoined(game.owner().to_string()))?;
    let origin = owner
        .location()
        .ok_or_else(|| GameError::OwnerUnlocated(game.owner().to_string()))?;

    let horde = generate(
        origin,
        destination,
        game.zombie_density,
        game.average_zombie_speed,
        config,
        rng,
    )?;
    for zombie in horde {
        game.add_zombie(zombie);
    }
    Ok(())
}

/// Generate a horde covering the circle around the origin-to-destination
/// path.
///
/// Count is density times covered area, floored, with a minimum so short
/// stroll-to-the-corner games still get a real horde.
fn generate<R: Rng>(
    origin: Coordinate,
    destination: Coordinate,
    density_per_km2: f64,
    average_speed: f64,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Vec<Zombie>> {
    let radius_m = geo::distance(origin, destination, config.earth_radius_m);
    let radius_km = radius_m / 1000.0;
    let area_km2 = std::f64::consts::PI * radius_km * radius_km;
    let count = (density_per_km2 * area_km2).max(config.min_zombies as f64) as usize;
    let epicenter = geo::midpoint(origin, destination);

    tracing::info!(
        "Seeding {} zombies across {:.2} km^2 around ({:.4}, {:.4})",
        count,
        area_km2,
        epicenter.lat(),
        epicenter.lon()
    );

    // TODO: keep spawn points a safety margin away from players already in
    // the game, instead of trusting the spread to miss them.
    let mut horde = Vec::with_capacity(count);
    while horde.len() < count {
        let size = rng.gen_range(1..=config.max_cluster_size.min(count - horde.len()));
        add_cluster(&mut horde, epicenter, radius_m, size, average_speed, config, rng)?;
    }
    Ok(horde)
}

/// Place one cluster: pick a center up to `max_offset_m` from the
/// epicenter, then scatter `size` zombies around it.
///
/// The center itself is a raw degree pair; only the zombies placed around
/// it become validated coordinates.
fn add_cluster<R: Rng>(
    horde: &mut Vec<Zombie>,
    epicenter: Coordinate,
    max_offset_m: f64,
    size: usize,
    average_speed: f64,
    config: &GameConfig,
    rng: &mut R,
) -> Result<()> {
    let bearing = rng.gen::<f64>() * TAU;
    let offset_m = rng.gen::<f64>() * max_offset_m;
    let (center_lat, center_lon) = geo::point_at(
        epicenter.lat(),
        epicenter.lon(),
        bearing,
        offset_m,
        config.earth_radius_m,
    );
    tracing::debug!(
        "Cluster of {} zombies {:.0} m from the epicenter",
        size,
        offset_m
    );

    for _ in 0..size {
        horde.push(spawn_zombie(center_lat, center_lon, average_speed, config, rng)?);
    }
    Ok(())
}

/// One zombie near a cluster center, with speed jittered around the
/// game's average.
fn spawn_zombie<R: Rng>(
    center_lat: f64,
    center_lon: f64,
    average_speed: f64,
    config: &GameConfig,
    rng: &mut R,
) -> Result<Zombie> {
    let speed = average_speed * (1.0 + (rng.gen::<f64>() - 0.5) * config.zombie_speed_variance);
    let bearing = rng.gen::<f64>() * TAU;
    let scatter_m = rng.gen::<f64>() * config.max_cluster_radius_m;
    let (lat, lon) = geo::point_at(center_lat, center_lon, bearing, scatter_m, config.earth_radius_m);
    Ok(Zombie::new(Coordinate::new(lat, lon)?, speed))
}
