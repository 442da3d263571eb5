//! Benchmarks for word-search puzzle generation.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use wordgrid::generator::{self, DEFAULT_GRID_SIZE};
use wordgrid::grid::{format_answer_key, Grid};
use wordgrid::placement::{can_place, Direction};

fn bench_words() -> Vec<String> {
    [
        "PUZZLE", "SEARCH", "LETTER", "HIDDEN", "RANDOM", "ANSWER", "DIAGONAL", "VERTICAL",
    ]
    .iter()
    .map(|word| word.to_string())
    .collect()
}

/// Benchmark generating a default-size puzzle from a fixed seed.
fn bench_generate(c: &mut Criterion) {
    let words = bench_words();

    c.bench_function("generate_default_grid", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(1);
            generator::generate(black_box(&words), DEFAULT_GRID_SIZE, &mut rng)
        })
    });
}

/// Benchmark the feasibility check across every start cell of an empty grid.
fn bench_can_place_sweep(c: &mut Criterion) {
    let grid = Grid::new(DEFAULT_GRID_SIZE);

    c.bench_function("can_place_sweep", |b| {
        b.iter(|| {
            let mut feasible = 0usize;
            for row in 0..DEFAULT_GRID_SIZE {
                for col in 0..DEFAULT_GRID_SIZE {
                    if can_place(black_box(&grid), "DIAGONAL", row, col, Direction::Diagonal) {
                        feasible += 1;
                    }
                }
            }
            feasible
        })
    });
}

/// Benchmark rendering the answer key of a generated puzzle.
fn bench_format_answer_key(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(2);
    let puzzle = generator::generate(&bench_words(), DEFAULT_GRID_SIZE, &mut rng);

    c.bench_function("format_answer_key", |b| {
        b.iter(|| format_answer_key(black_box(&puzzle.grid)))
    });
}

criterion_group!(
    benches,
    bench_generate,
    bench_can_place_sweep,
    bench_format_answer_key
);
criterion_main!(benches);
