use grid_util::point::Point;
use log::warn;
use smallvec::SmallVec;

use crate::{pathing_grid::PassabilityGrid, solver::GridSolver, N_SMALLVEC_SIZE, STEP_COST};

#[derive(Clone, Debug)]
pub struct AstarSolver {
    heuristic_factor: f32,
}

impl Default for AstarSolver {
    fn default() -> AstarSolver {
        AstarSolver::new()
    }
}

impl AstarSolver {
    pub fn new() -> AstarSolver {
        AstarSolver {
            heuristic_factor: 1.0,
        }
    }
    /// Scales the Manhattan heuristic. 1.0 is plain A*, values above it give weighted A* which
    /// expands fewer nodes but may return longer routes, 0.0 degrades to Dijkstra. Negative
    /// factors are clamped to 0.0 and non-finite ones fall back to 1.0.
    pub fn with_heuristic_factor(heuristic_factor: f32) -> AstarSolver {
        let heuristic_factor = if !heuristic_factor.is_finite() {
            warn!("Heuristic factor {heuristic_factor} is not finite, using 1.0");
            1.0
        } else if heuristic_factor < 0.0 {
            warn!("Heuristic factor {heuristic_factor} is negative, using 0.0");
            0.0
        } else {
            heuristic_factor
        };
        AstarSolver { heuristic_factor }
    }
    pub fn heuristic_factor(&self) -> f32 {
        self.heuristic_factor
    }
}

impl GridSolver for AstarSolver {
    type Successors = SmallVec<[(Point, i32); N_SMALLVEC_SIZE]>;

    fn successors(&self, grid: &PassabilityGrid, node: &Point) -> Self::Successors {
        grid.neighborhood_points_and_cost(node)
    }

    /// Manhattan distance times the heuristic factor.
    fn heuristic(&self, p1: &Point, p2: &Point) -> i32 {
        ((p1.manhattan_distance(p2) * STEP_COST) as f32 * self.heuristic_factor) as i32
    }
}
