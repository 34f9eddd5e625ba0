//! Benchmarks for Sudoku puzzle generation.
//!
//! Measures the complete generation process (random solution grid plus the
//! carving loop with its per-cell uniqueness checks) at each difficulty.
//!
//! # Test Data
//!
//! Three fixed seeds keep the measurement reproducible while covering
//! multiple carving orders:
//!
//! - **`seed_0`**: `0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f0`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use ninefold_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
use ninefold_solver::BacktrackSolver;

const SEEDS: [&str; 3] = [
    "0f1e2d3c4b5a69788796a5b4c3d2e1f00f1e2d3c4b5a69788796a5b4c3d2e1f0",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_difficulty(c: &mut Criterion, difficulty: Difficulty) {
    let solver = BacktrackSolver::new();
    let generator = PuzzleGenerator::new(&solver);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = PuzzleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(format!("generate_{difficulty}"), format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(difficulty, seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generate_easy(c: &mut Criterion) {
    bench_difficulty(c, Difficulty::Easy);
}

fn bench_generate_hard(c: &mut Criterion) {
    bench_difficulty(c, Difficulty::Hard);
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_generate_easy,
        bench_generate_hard
);
criterion_main!(benches);
