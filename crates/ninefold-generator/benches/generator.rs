//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures the complete generation pipeline (solution seeding, uniqueness
//! carving, and strategy analysis) for an easy and a hard tier.
//!
//! Fixed seeds keep the runs reproducible while covering several cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generate_easy(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_easy", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(Difficulty::Easy, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_hard(c: &mut Criterion) {
    let generator = PuzzleGenerator::new();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generate_hard", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(Difficulty::Hard, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(12));
    targets = bench_generate_easy, bench_generate_hard
);
criterion_main!(benches);
