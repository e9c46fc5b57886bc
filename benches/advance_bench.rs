//! Benchmarks for the advance step - the hot path every client request pays.

#![allow(missing_docs)]

use std::hint::black_box;
use std::time::SystemTime;

use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use zombie_chase::core::config::GameConfig;
use zombie_chase::geo::Coordinate;
use zombie_chase::model::{Game, Player};
use zombie_chase::simulation::advance_by;

/// A started game with a horde scaled to the course length.
fn started_game(course_deg: f64, seed: u64) -> Game {
    let config = GameConfig::default();
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = Game::new("runner@example.com", SystemTime::UNIX_EPOCH, &config);
    game.add_player(Player::at(
        "runner@example.com",
        Coordinate::new(0.0, 0.0).unwrap(),
    ))
    .unwrap();
    game.start(
        Coordinate::new(0.0, course_deg).unwrap(),
        SystemTime::UNIX_EPOCH,
        &config,
        &mut rng,
    )
    .unwrap();
    game
}

fn bench_advance_small_horde(c: &mut Criterion) {
    let config = GameConfig::default();
    // ~1.1 km course: 77 zombies
    let game = started_game(0.01, 42);

    c.bench_function("advance_60s_small_horde", |b| {
        b.iter_batched(
            || (game.clone(), ChaCha8Rng::seed_from_u64(7)),
            |(mut game, mut rng)| {
                advance_by(black_box(&mut game), 60.0, &config, &mut rng);
                black_box(game)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_advance_large_horde(c: &mut Criterion) {
    let config = GameConfig::default();
    // ~4.5 km course: around 1200 zombies
    let game = started_game(0.04, 42);

    c.bench_function("advance_60s_large_horde", |b| {
        b.iter_batched(
            || (game.clone(), ChaCha8Rng::seed_from_u64(7)),
            |(mut game, mut rng)| {
                advance_by(black_box(&mut game), 60.0, &config, &mut rng);
                black_box(game)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_capped_interval(c: &mut Criterion) {
    let config = GameConfig::default();
    let game = started_game(0.01, 42);

    // The worst case a single request can cost: the full capped interval
    c.bench_function("advance_600s_small_horde", |b| {
        b.iter_batched(
            || (game.clone(), ChaCha8Rng::seed_from_u64(7)),
            |(mut game, mut rng)| {
                advance_by(
                    black_box(&mut game),
                    config.max_advance_interval_secs,
                    &config,
                    &mut rng,
                );
                black_box(game)
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_advance_small_horde,
    bench_advance_large_horde,
    bench_capped_interval
);
criterion_main!(benches);
