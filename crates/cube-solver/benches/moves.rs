use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::Rng;

use cube_solver::adjacency::MoveAdjacency;
use cube_solver::goal::CANONICAL_STATES;
use cube_solver::moves::Move;
use cube_solver::solver::{solve, Algorithm, CubeProblem, SolverConfig};
use cube_solver::state::Configuration;

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("moves");
    let mut rng = rand::thread_rng();
    for mv in Move::ALL {
        let mut state: u32 = rng.gen();
        group.bench_function(mv.symbol(), |b| {
            b.iter(|| {
                state = mv.apply(black_box(state));
                state
            });
        });
    }
    group.finish();

    let mut group = c.benchmark_group("edge_phase");
    for mv in [Move::R, Move::F, Move::E, Move::Uw, Move::Dw2] {
        let mut phase: u8 = rng.gen();
        group.bench_function(mv.symbol(), |b| {
            b.iter(|| {
                phase = mv.apply_edge_phase(black_box(phase));
                phase
            });
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let solved = CANONICAL_STATES[7] as u32 & 0xffff_ff00;
    let problem = CubeProblem::new(
        Configuration::new(solved, 0).apply_all([Move::R, Move::U, Move::F]),
        MoveAdjacency::fully_connected(&[Move::R, Move::F, Move::U, Move::UPrime, Move::U2]),
        false,
    );

    let mut group = c.benchmark_group("search");
    for algorithm in [Algorithm::Bfs, Algorithm::Dfs] {
        let config = SolverConfig {
            algorithm,
            min_depth: 0,
            max_depth: 6,
            timeout: None,
        };
        group.bench_function(format!("{algorithm}/depth6"), |b| {
            b.iter(|| black_box(solve(&problem, &config)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transforms, bench_search);
criterion_main!(benches);
