//! One planning tick: sample the world, react to threats, otherwise follow the route.
use crate::config::PlannerConfig;
use crate::error::{PlanError, Result};
use crate::occupancy::OccupancyOracle;
use crate::pathing_grid::PassabilityGrid;
use crate::reflex::{Reflex, ThreatReflex};
use crate::route::{Direction, Route};
use crate::solver::{astar::AstarSolver, GridSolver};
use grid_util::point::Point;
use log::debug;

/// Drives an agent towards a goal. Every call rebuilds the [PassabilityGrid] from the oracle
/// and searches from scratch, nothing is cached between ticks. The [PlannerConfig] is read on
/// every tick, so edits to `config` apply to the next call.
#[derive(Clone, Debug)]
pub struct Planner<S = AstarSolver> {
    pub config: PlannerConfig,
    pub solver: S,
}

impl Default for Planner {
    fn default() -> Planner {
        Planner::new(PlannerConfig::default())
    }
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Planner {
        Planner::with_solver(config, AstarSolver::new())
    }
}

impl<S: GridSolver> Planner<S> {
    pub fn with_solver(config: PlannerConfig, solver: S) -> Planner<S> {
        Planner { config, solver }
    }

    pub fn build_grid<O>(&self, oracle: &O) -> PassabilityGrid
    where
        O: OccupancyOracle + ?Sized,
    {
        PassabilityGrid::from_oracle(self.config.grid_size, oracle)
    }

    /// Shortest route from the agent to the goal on a freshly built grid.
    pub fn route<O>(&self, oracle: &O, agent: Point, goal: Point) -> Result<Route>
    where
        O: OccupancyOracle + ?Sized,
    {
        let grid = self.build_grid(oracle);
        self.solver.search(&grid, agent, goal)
    }

    /// The first move of the route, ignoring threats.
    pub fn step_towards<O>(&self, oracle: &O, agent: Point, goal: Point) -> Result<Direction>
    where
        O: OccupancyOracle + ?Sized,
    {
        let grid = self.build_grid(oracle);
        self.solver.first_step(&grid, agent, goal)
    }

    /// Decides the move for this tick. A triggered reflex wins over the route; when
    /// [reflex_respects_walls](PlannerConfig::reflex_respects_walls) is set, a reflex stepping off
    /// the grid or into a wall is dropped in favour of the route.
    pub fn decide<O>(
        &self,
        oracle: &O,
        agent: Point,
        goal: Point,
        threat: Option<Point>,
    ) -> Result<Direction>
    where
        O: OccupancyOracle + ?Sized,
    {
        let grid = self.build_grid(oracle);
        self.decide_on_grid(&grid, agent, goal, threat)
    }

    /// [decide](Self::decide) on an already built grid.
    pub fn decide_on_grid(
        &self,
        grid: &PassabilityGrid,
        agent: Point,
        goal: Point,
        threat: Option<Point>,
    ) -> Result<Direction> {
        for cell in [agent, goal] {
            if !grid.in_bounds(&cell) {
                return Err(PlanError::OutOfBounds {
                    cell,
                    size: grid.size(),
                });
            }
        }
        if let Some(threat) = threat {
            let reflex = ThreatReflex::new(self.config.threat_radius);
            if let Reflex::Avoid(dir) = reflex.evaluate(&agent, &threat, &goal) {
                if !self.config.reflex_respects_walls || grid.can_move_to(&dir.step(&agent)) {
                    debug!("Threat at {} next to {}, moving {:?}", threat, agent, dir);
                    return Ok(dir);
                }
                debug!("Avoiding {} with {:?} is blocked, following route", threat, dir);
            }
        }
        let dir = self.solver.first_step(grid, agent, goal)?;
        debug!("Moving {:?} from {} towards {}", dir, agent, goal);
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::occupancy::{Category, OccupancyIndex};
    use crate::solver::dijkstra::DijkstraSolver;

    /// |A..|
    /// |#..|
    /// |G..|
    fn world() -> OccupancyIndex {
        vec![
            (Point::new(0, 0), Category::Agent),
            (Point::new(0, 1), Category::Wall),
            (Point::new(0, 2), Category::Goal),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn follows_route_without_threat() {
        let planner = Planner::new(PlannerConfig::new(3));
        let (agent, goal) = (Point::new(0, 0), Point::new(0, 2));
        let dir = planner.decide(&world(), agent, goal, None).unwrap();
        assert_eq!(dir, Direction::Right);
        let route = planner.route(&world(), agent, goal).unwrap();
        assert_eq!(route.steps(), 4);
        assert_eq!(planner.step_towards(&world(), agent, goal), Ok(dir));
    }

    #[test]
    fn reflex_overrides_route() {
        let planner = Planner::new(PlannerConfig::new(3));
        let dir = planner
            .decide(
                &world(),
                Point::new(0, 0),
                Point::new(0, 2),
                Some(Point::new(2, 0)),
            )
            .unwrap();
        // Threat to the right, flee left even though that leaves the grid
        assert_eq!(dir, Direction::Left);
    }

    #[test]
    fn blocked_reflex_falls_back_to_route() {
        let planner = Planner::new(PlannerConfig::new(3).with_reflex_respects_walls(true));
        let dir = planner
            .decide(
                &world(),
                Point::new(0, 0),
                Point::new(0, 2),
                Some(Point::new(2, 0)),
            )
            .unwrap();
        assert_eq!(dir, Direction::Right);
        // Threat below the agent, fleeing up leaves the grid, the route goes down regardless
        let dir = planner
            .decide(
                &world(),
                Point::new(1, 0),
                Point::new(0, 2),
                Some(Point::new(1, 1)),
            )
            .unwrap();
        assert_eq!(dir, Direction::Down);
    }

    #[test]
    fn distant_threat_defers_to_route() {
        let planner = Planner::new(PlannerConfig::new(10));
        let dir = planner
            .decide(
                &world(),
                Point::new(0, 0),
                Point::new(0, 2),
                Some(Point::new(9, 9)),
            )
            .unwrap();
        assert_eq!(dir, Direction::Right);
    }

    #[test]
    fn walled_in_goal_gives_no_direction() {
        let mut index = world();
        index.extend([(Point::new(1, 2), Category::Wall)]);
        let planner = Planner::new(PlannerConfig::new(3));
        let (agent, goal) = (Point::new(0, 0), Point::new(0, 2));
        assert_eq!(planner.decide(&index, agent, goal, None), Ok(Direction::None));
        assert_eq!(
            planner.route(&index, agent, goal),
            Err(PlanError::NoRoute { start: agent, goal })
        );
    }

    #[test]
    fn rejects_cells_outside_the_grid() {
        let planner = Planner::new(PlannerConfig::new(3));
        let agent = Point::new(3, 0);
        assert_eq!(
            planner.decide(&world(), agent, Point::new(0, 2), Some(Point::new(2, 0))),
            Err(PlanError::OutOfBounds {
                cell: agent,
                size: 3
            })
        );
    }

    #[test]
    fn config_edits_apply_to_the_next_tick() {
        let mut planner = Planner::new(PlannerConfig::new(20));
        let world = OccupancyIndex::new();
        let (agent, goal, threat) = (Point::new(10, 10), Point::new(15, 10), Point::new(12, 10));
        assert_eq!(
            planner.decide(&world, agent, goal, Some(threat)),
            Ok(Direction::Left)
        );
        planner.config.threat_radius = 1;
        assert_eq!(
            planner.decide(&world, agent, goal, Some(threat)),
            Ok(Direction::Right)
        );
        planner.config.threat_radius = 3;
        planner.config.reflex_respects_walls = true;
        let walled: OccupancyIndex = [(Point::new(9, 10), Category::Wall)].into_iter().collect();
        assert_eq!(
            planner.decide(&walled, agent, goal, Some(threat)),
            Ok(Direction::Right)
        );
    }

    #[test]
    fn weighted_solver_through_with_solver() {
        let planner = Planner::with_solver(
            PlannerConfig::new(3),
            AstarSolver::with_heuristic_factor(2.0),
        );
        let dir = planner
            .decide(&world(), Point::new(0, 0), Point::new(0, 2), None)
            .unwrap();
        assert_eq!(dir, Direction::Right);
    }

    #[test]
    fn custom_solver() {
        let planner = Planner::with_solver(PlannerConfig::new(3), DijkstraSolver);
        let route = planner
            .route(&world(), Point::new(0, 0), Point::new(0, 2))
            .unwrap();
        assert_eq!(route.steps(), 4);
    }
}
