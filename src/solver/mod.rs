use crate::astar::astar;
use crate::error::{PlanError, Result};
use crate::pathing_grid::PassabilityGrid;
use crate::route::{Direction, Route};
use crate::STEP_COST;
use grid_util::point::Point;
use log::{info, warn};

pub mod astar;
pub mod dijkstra;

pub trait GridSolver {
    type Successors: IntoIterator<Item = (Point, i32)>;

    fn heuristic(&self, p1: &Point, p2: &Point) -> i32;

    fn successors(&self, grid: &PassabilityGrid, node: &Point) -> Self::Successors;

    /// Unit step cost of a route.
    fn get_path_cost(&self, route: &Route) -> i32 {
        route.steps() as i32 * STEP_COST
    }

    /// Computes a route from start to goal over the free cells of the grid. Both endpoints must
    /// lie on the grid; the start cell is never checked for walls, the goal must be free unless
    /// it equals the start.
    fn search(&self, grid: &PassabilityGrid, start: Point, goal: Point) -> Result<Route> {
        for cell in [start, goal] {
            if !grid.in_bounds(&cell) {
                return Err(PlanError::OutOfBounds {
                    cell,
                    size: grid.size(),
                });
            }
        }
        // Dirty components may wrongly report disconnected cells, so only clean ones are trusted
        let components_valid = !grid.components_dirty();
        if components_valid && grid.unreachable(&start, &goal) {
            info!("{} is not reachable from {}", goal, start);
            return Err(PlanError::NoRoute { start, goal });
        }
        astar(
            &start,
            |node| self.successors(grid, node),
            |point| self.heuristic(point, &goal),
            |point| *point == goal,
        )
        .map(|(cells, _cost)| Route::new(cells))
        .ok_or_else(|| {
            if components_valid && grid.can_move_to(&start) {
                warn!("Reachable goal {} could not be pathed to from {}", goal, start);
            }
            PlanError::NoRoute { start, goal }
        })
    }

    /// The first move towards the goal, [Direction::None] when there is no route or the start is
    /// the goal. Out of bounds endpoints are still an error.
    fn first_step(&self, grid: &PassabilityGrid, start: Point, goal: Point) -> Result<Direction> {
        match self.search(grid, start, goal) {
            Ok(route) => Ok(route.first_step()),
            Err(PlanError::NoRoute { .. }) => Ok(Direction::None),
            Err(e) => Err(e),
        }
    }
}
