//! Headless Chase Runner
//!
//! Seeds a pursuit game, walks the owner straight toward the destination
//! each tick, and advances the simulation until a trigger decides the game
//! or the clock runs out. Outputs a JSON or text report for balancing runs.

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use std::time::SystemTime;

use zombie_chase::core::config::GameConfig;
use zombie_chase::core::error::Result;
use zombie_chase::geo::{self, Coordinate};
use zombie_chase::model::{Game, Player};
use zombie_chase::simulation::advance_by;

const OWNER: &str = "runner@localhost";

/// Headless Chase Runner - scripted player vs the horde
#[derive(Parser, Debug)]
#[command(name = "chase_sim")]
#[command(about = "Run a headless pursuit game and report the outcome")]
struct Args {
    /// Owner latitude at game start
    #[arg(long, default_value_t = 0.0)]
    lat: f64,

    /// Owner longitude at game start
    #[arg(long, default_value_t = 0.0)]
    lon: f64,

    /// Destination latitude
    #[arg(long, default_value_t = 0.0)]
    dest_lat: f64,

    /// Destination longitude
    #[arg(long, default_value_t = 0.02)]
    dest_lon: f64,

    /// Zombies per square kilometer
    #[arg(long, default_value_t = 20.0)]
    density: f64,

    /// Average zombie speed in meters per second
    #[arg(long, default_value_t = 1.341)]
    zombie_speed: f64,

    /// Scripted player walking speed in meters per second
    #[arg(long, default_value_t = 1.5)]
    player_speed: f64,

    /// Simulated seconds per tick
    #[arg(long, default_value_t = 5.0)]
    tick_secs: f64,

    /// Give up after this much simulated time (seconds)
    #[arg(long, default_value_t = 7200.0)]
    max_secs: f64,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Log per-tick status to stderr
    #[arg(long, short = 'v')]
    verbose: bool,
}

/// JSON output structure
#[derive(Serialize)]
struct ChaseResult {
    outcome: String,
    simulated_secs: f64,
    zombies: usize,
    zombies_chasing: usize,
    final_gap_to_destination_m: f64,
    nearest_zombie_m: Option<f64>,
    seed: u64,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let args = Args::parse();
    let config = GameConfig::default();

    // Determine seed
    let seed = args.seed.unwrap_or_else(|| rand::random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let start = Coordinate::new(args.lat, args.lon)?;
    let destination = Coordinate::new(args.dest_lat, args.dest_lon)?;

    // Build and start the game
    let now = SystemTime::now();
    let mut game = Game::new(OWNER, now, &config);
    game.zombie_density = args.density;
    game.average_zombie_speed = args.zombie_speed;
    game.add_player(Player::at(OWNER, start))?;
    game.start(destination, now, &config, &mut rng)?;
    tracing::info!(
        "Game started: {} zombies between here and {:.1} m away",
        game.zombies().len(),
        geo::distance(start, destination, config.earth_radius_m)
    );

    // Walk the owner toward the destination, advancing in fixed ticks
    let mut simulated = 0.0;
    while !game.is_done() && simulated < args.max_secs {
        let Some(at) = game.find_player(OWNER).and_then(|p| p.location()) else {
            break;
        };
        let gap = geo::distance(at, destination, config.earth_radius_m);
        let travel = (args.player_speed * args.tick_secs).min(gap);
        let next = geo::step_toward(
            at,
            destination.lat(),
            destination.lon(),
            travel,
            config.earth_radius_m,
        )?;
        game.report_location(OWNER, next)?;

        advance_by(&mut game, args.tick_secs, &config, &mut rng);
        simulated += args.tick_secs;

        if args.verbose {
            eprintln!(
                "[{simulated:>6.0}s] destination {:.1} m, nearest zombie {}, {} chasing",
                geo::distance(next, destination, config.earth_radius_m),
                match nearest_zombie_m(&game, next, &config) {
                    Some(d) => format!("{d:.1} m"),
                    None => "none".to_string(),
                },
                chasing_count(&game)
            );
        }
    }

    // Output result
    let final_at = game
        .find_player(OWNER)
        .and_then(|p| p.location())
        .unwrap_or(start);
    let result = ChaseResult {
        outcome: match game.players_won() {
            Some(true) => "PlayersWin".to_string(),
            Some(false) => "PlayersLose".to_string(),
            None => "Undecided".to_string(),
        },
        simulated_secs: simulated,
        zombies: game.zombies().len(),
        zombies_chasing: chasing_count(&game),
        final_gap_to_destination_m: geo::distance(final_at, destination, config.earth_radius_m),
        nearest_zombie_m: nearest_zombie_m(&game, final_at, &config),
        seed,
    };

    match args.format.as_str() {
        "json" => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        "text" => {
            println!("Chase Result");
            println!("============");
            println!("Outcome: {}", result.outcome);
            println!("Simulated: {:.0}s", result.simulated_secs);
            println!(
                "Zombies: {} ({} chasing at the end)",
                result.zombies, result.zombies_chasing
            );
            println!(
                "Final gap to destination: {:.1} m",
                result.final_gap_to_destination_m
            );
            if let Some(d) = result.nearest_zombie_m {
                println!("Nearest zombie: {d:.1} m");
            }
            println!("Seed: {}", result.seed);
        }
        _ => {
            eprintln!("Unknown format '{}', defaulting to json", args.format);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}

fn chasing_count(game: &Game) -> usize {
    game.zombies().iter().filter(|z| z.chasing().is_some()).count()
}

fn nearest_zombie_m(game: &Game, from: Coordinate, config: &GameConfig) -> Option<f64> {
    game.zombies()
        .iter()
        .map(|z| geo::distance(from, z.location(), config.earth_radius_m))
        .min_by(|a, b| a.total_cmp(b))
}
