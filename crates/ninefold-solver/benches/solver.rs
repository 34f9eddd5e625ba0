//! Benchmarks for backtracking solving and capped solution counting.
//!
//! # Benchmarks
//!
//! - **`solve`**: Finds the unique completion of a 30-clue puzzle with the
//!   deterministic candidate order.
//! - **`solve_random_full_grid`**: Fills an empty grid with shuffled
//!   candidate order from a fixed seed, the operation that seeds puzzle
//!   generation.
//! - **`count_solutions_cap_2`**: The uniqueness check the generator runs
//!   once per carved cell.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::{hint, time::Duration};

use criterion::{Criterion, PlottingBackend, criterion_group, criterion_main};
use ninefold_core::DigitGrid;
use ninefold_solver::BacktrackSolver;
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

const PUZZLE: &str = "
    53_ _7_ ___
    6__ 195 ___
    _98 ___ _6_
    8__ _6_ __3
    4__ 8_3 __1
    7__ _2_ __6
    _6_ ___ 28_
    ___ 419 __5
    ___ _8_ _79
";

fn bench_solve(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    let puzzle: DigitGrid = PUZZLE.parse().unwrap();

    c.bench_function("solve", |b| {
        b.iter(|| solver.solve(hint::black_box(&puzzle)).unwrap());
    });
}

fn bench_solve_random_full_grid(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    let empty = DigitGrid::new();

    c.bench_function("solve_random_full_grid", |b| {
        let mut rng = Pcg64::from_seed([42; 32]);
        b.iter(|| solver.solve_with(hint::black_box(&empty), &mut rng).unwrap());
    });
}

fn bench_count_solutions(c: &mut Criterion) {
    let solver = BacktrackSolver::new();
    let puzzle: DigitGrid = PUZZLE.parse().unwrap();

    c.bench_function("count_solutions_cap_2", |b| {
        b.iter(|| solver.count_solutions(hint::black_box(&puzzle), 2));
    });
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(8));
    targets =
        bench_solve,
        bench_solve_random_full_grid,
        bench_count_solutions
);
criterion_main!(benches);
