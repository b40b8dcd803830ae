//! Benchmarks for the eight-tile puzzle solver.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use eighttile::board::Board;
use eighttile::{input, solver};

/// A 4-move instance.
const EASY: [u8; 9] = [0, 1, 3, 4, 2, 5, 7, 8, 6];

/// A 31-move antipodal instance, the deepest the 8-puzzle gets.
const HARD: [u8; 9] = [8, 6, 7, 2, 5, 4, 3, 0, 1];

/// Benchmark a shallow end-to-end solve.
fn bench_solve_easy(c: &mut Criterion) {
    let board = Board::new(EASY).unwrap();
    c.bench_function("solve_easy", |b| b.iter(|| solver::solve(black_box(board))));
}

/// Benchmark the hardest instance, which explores most of the state space.
fn bench_solve_hard(c: &mut Criterion) {
    let board = Board::new(HARD).unwrap();
    let mut group = c.benchmark_group("hard");
    group.sample_size(10);
    group.bench_function("solve_31_moves", |b| {
        b.iter(|| solver::solve(black_box(board)))
    });
    group.finish();
}

/// Benchmark neighbor generation for a center blank (the 4-candidate case).
fn bench_neighbors(c: &mut Criterion) {
    let board = Board::new([1, 2, 3, 4, 0, 6, 7, 5, 8]).unwrap();
    c.bench_function("neighbors", |b| b.iter(|| black_box(board).neighbors(0)));
}

/// Benchmark parsing a board from text.
fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_board", |b| {
        b.iter(|| input::parse_board(black_box("281\n4 3\n765\n")))
    });
}

criterion_group!(
    benches,
    bench_solve_easy,
    bench_solve_hard,
    bench_neighbors,
    bench_parse
);
criterion_main!(benches);
