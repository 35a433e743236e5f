use chase_pathing::{
    pathing_grid::PassabilityGrid,
    solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver},
    Category, OccupancyIndex, Planner, PlannerConfig, Point,
};
use criterion::{criterion_group, criterion_main, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

const N: usize = 64;

fn random_world(rng: &mut StdRng) -> OccupancyIndex {
    let mut world = OccupancyIndex::new();
    for x in 0..N as i32 {
        for y in 0..N as i32 {
            if rng.gen_bool(0.25) {
                world.insert(Point::new(x, y), Category::Wall);
            }
        }
    }
    world
}

fn random_scenarios(grid: &PassabilityGrid, rng: &mut StdRng, count: usize) -> Vec<(Point, Point)> {
    let mut scenarios = Vec::with_capacity(count);
    while scenarios.len() < count {
        let start = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        let goal = Point::new(rng.gen_range(0..N as i32), rng.gen_range(0..N as i32));
        if grid.can_move_to(&start) && grid.reachable(&start, &goal) {
            scenarios.push((start, goal));
        }
    }
    scenarios
}

fn solver_bench<S: GridSolver>(c: &mut Criterion, solver_name: &str, solver: S) {
    let mut rng = StdRng::seed_from_u64(0);
    let world = random_world(&mut rng);
    let grid = PassabilityGrid::from_oracle(N, &world);
    let scenarios = random_scenarios(&grid, &mut rng, 100);
    c.bench_function(format!("{solver_name}, {N}x{N} random").as_str(), |b| {
        b.iter(|| {
            for (start, goal) in &scenarios {
                let _ = black_box(solver.search(&grid, *start, *goal));
            }
        })
    });
}

fn search_bench(c: &mut Criterion) {
    solver_bench(c, "A*", AstarSolver::new());
    solver_bench(c, "Weighted A* (1.5)", AstarSolver::with_heuristic_factor(1.5));
    solver_bench(c, "Dijkstra", DijkstraSolver);
}

/// A full tick including the grid rebuild.
fn tick_bench(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(1);
    let world = random_world(&mut rng);
    let planner = Planner::new(PlannerConfig::new(N));
    let grid = planner.build_grid(&world);
    let scenarios = random_scenarios(&grid, &mut rng, 10);
    c.bench_function(format!("planner tick, {N}x{N} random").as_str(), |b| {
        b.iter(|| {
            for (agent, goal) in &scenarios {
                let _ = black_box(planner.decide(&world, *agent, *goal, None));
            }
        })
    });
}

criterion_group!(benches, search_bench, tick_bench);
criterion_main!(benches);
