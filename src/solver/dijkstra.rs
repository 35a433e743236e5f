use grid_util::point::Point;
use smallvec::SmallVec;

use crate::{pathing_grid::PassabilityGrid, solver::GridSolver, N_SMALLVEC_SIZE};

/// Uninformed search, equivalent to a breadth-first search on the unit-cost grid.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    type Successors = SmallVec<[(Point, i32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &PassabilityGrid, node: &Point) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    fn heuristic(&self, _: &Point, _: &Point) -> i32 {
        0
    }
}
