//! Benchmarks for scoring and secret generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mastermind_engine::core::{GameConfig, GameRng, Palette};
use mastermind_engine::generator::generate;
use mastermind_engine::scoring::score;
use mastermind_engine::Game;

fn bench_score(c: &mut Criterion) {
    let mut rng = GameRng::new(42);
    let pairs: Vec<_> = (0..256)
        .map(|_| (generate(4, Palette::FULL, &mut rng), generate(4, Palette::FULL, &mut rng)))
        .collect();

    c.bench_function("score_4_slots", |b| {
        b.iter(|| {
            for (secret, guess) in &pairs {
                black_box(score(black_box(secret), black_box(guess)));
            }
        })
    });
}

fn bench_generate(c: &mut Criterion) {
    let mut rng = GameRng::new(7);
    c.bench_function("generate_8_slots", |b| {
        b.iter(|| generate(black_box(8), Palette::FULL, &mut rng))
    });

    let config = GameConfig::default();
    c.bench_function("new_game", |b| b.iter(|| Game::new(black_box(config), &mut rng)));
}

criterion_group!(benches, bench_score, bench_generate);
criterion_main!(benches);
