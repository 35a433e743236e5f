//! # chase_pathing
//!
//! Plans the movement of an agent chasing a goal across a square, uniform-cost grid.
//! Every planning tick the occupancy of the world is sampled into a fresh
//! [PassabilityGrid](pathing_grid::PassabilityGrid), an
//! [A* search](https://en.wikipedia.org/wiki/A*_search_algorithm) over the
//! [von Neumann neighbourhood](https://en.wikipedia.org/wiki/Von_Neumann_neighborhood)
//! finds a shortest [Route](route::Route) and its first step becomes the movement command.
//! A [ThreatReflex](reflex::ThreatReflex) takes priority over the route when a threat gets
//! too close.
//!
//! Walls are the only blocking cells and each step costs [STEP_COST], which makes the
//! [Manhattan distance](https://en.wikipedia.org/wiki/Taxicab_geometry) an admissible and
//! consistent heuristic.
pub mod astar;
pub mod config;
pub mod error;
pub mod occupancy;
pub mod pathing_grid;
pub mod planner;
pub mod reflex;
pub mod route;
pub mod solver;

pub use config::PlannerConfig;
pub use error::{PlanError, Result};
pub use grid_util::point::Point;
pub use occupancy::{Category, OccupancyIndex, OccupancyOracle};
pub use pathing_grid::PassabilityGrid;
pub use planner::Planner;
pub use reflex::{threat_reflex, Reflex, ThreatReflex};
pub use route::{Direction, Route};
pub use solver::{astar::AstarSolver, dijkstra::DijkstraSolver, GridSolver};

/// Cost of a single cardinal step.
pub const STEP_COST: i32 = 1;
/// Inline capacity of successor lists, one slot per cardinal neighbour.
pub const N_SMALLVEC_SIZE: usize = 4;
pub const DEFAULT_GRID_SIZE: usize = 20;
/// Threats closer than this on both axes trigger the reflex.
pub const DEFAULT_THREAT_RADIUS: i32 = 3;

/// Expansion order of the neighbourhood: up, down, left, right.
pub(crate) const NEUMANN_OFFSETS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
