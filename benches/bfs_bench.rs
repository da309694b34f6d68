use criterion::{criterion_group, criterion_main, Criterion};
use ghost_distance::solver::bfs::BfsSolver;
use ghost_distance::solver::flood::FloodSolver;
use ghost_distance::{find_coordinates, find_pacman, Board, Cell, GridSolver};
use rand::prelude::*;
use std::hint::black_box;

fn random_board(n: usize, rng: &mut StdRng) -> Board {
    let mut rows = vec![vec![Cell::Open; n]; n];
    for row in rows.iter_mut() {
        for cell in row.iter_mut() {
            if rng.gen_bool(0.3) {
                *cell = Cell::Wall;
            } else if rng.gen_bool(0.002) {
                *cell = Cell::Ghost;
            }
        }
    }
    rows[n / 2][n / 2] = Cell::Pacman;
    Board::from_rows(rows).unwrap()
}

fn ghost_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0);
    for n in [64, 256] {
        let board = random_board(n, &mut rng);
        let pacman = find_pacman(&board).unwrap();
        let ghosts = find_coordinates(&board, Cell::Ghost);

        c.bench_function(format!("{n}x{n}, early-stopping bfs").as_str(), |b| {
            b.iter(|| black_box(BfsSolver.distances(&board, pacman, &ghosts)))
        });
        c.bench_function(format!("{n}x{n}, full flood").as_str(), |b| {
            b.iter(|| black_box(FloodSolver.distances(&board, pacman, &ghosts)))
        });
    }
}

criterion_group!(benches, ghost_bench);
criterion_main!(benches);
