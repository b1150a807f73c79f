use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use sudoku_solver::sudoku::parse::{EXAMPLE_FOUR_SPARSE, EXAMPLE_NINE, parse_sudoku};
use sudoku_solver::sudoku::solver::SolveOptions;

/// A valid solved 9x9 grid with three blanks sharing no group; every blank
/// is a naked single, so deduction finishes this without search.
const EASY_NINE: &str = "
    -23456789
    4567-9123
    78912345-
    231564897
    564897231
    897231564
    312645978
    645978312
    978312645
";

fn bench_deduction(c: &mut Criterion) {
    let easy = parse_sudoku(EASY_NINE).expect("valid puzzle");
    c.bench_function("deduction - easy 9x9", |b| {
        b.iter(|| {
            let mut grid = easy.clone();
            grid.solve(&SolveOptions {
                deduce_only: true,
                ..SolveOptions::default()
            });
            black_box(grid);
        })
    });

    let classic = parse_sudoku(EXAMPLE_NINE).expect("valid puzzle");
    c.bench_function("deduction fixed point - classic 9x9", |b| {
        b.iter(|| {
            let mut grid = classic.clone();
            grid.solve(&SolveOptions {
                deduce_only: true,
                ..SolveOptions::default()
            });
            black_box(grid);
        })
    });
}

fn bench_backtracking(c: &mut Criterion) {
    let sparse = parse_sudoku(EXAMPLE_FOUR_SPARSE).expect("valid puzzle");
    c.bench_function("backtracking - sparse 4x4", |b| {
        b.iter(|| {
            let mut grid = sparse.clone();
            grid.solve(&SolveOptions {
                dont_deduce: true,
                ..SolveOptions::default()
            });
            black_box(grid);
        })
    });

    let classic = parse_sudoku(EXAMPLE_NINE).expect("valid puzzle");
    c.bench_function("full solve - classic 9x9", |b| {
        b.iter(|| {
            let mut grid = classic.clone();
            grid.solve(&SolveOptions::default());
            black_box(grid);
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().measurement_time(Duration::from_secs(10));
    targets = bench_deduction, bench_backtracking
}
criterion_main!(benches);
