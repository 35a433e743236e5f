use crate::occupancy::{Category, OccupancyOracle};
use crate::{N_SMALLVEC_SIZE, NEUMANN_OFFSETS, STEP_COST};
use core::fmt;
use grid_util::grid::{BoolGrid, ValueGrid};
use grid_util::point::Point;
use itertools::iproduct;
use log::{debug, info};
use petgraph::unionfind::UnionFind;
use smallvec::SmallVec;

/// Square passability grid sampled from an [OccupancyOracle]. A cell is blocked ([true]) when it
/// holds a wall and free ([false]) otherwise. Connected components of free cells are maintained
/// in a [UnionFind] so that unreachable goals can be rejected without searching. Cells are only
/// edited through [set](Self::set), which keeps the components in step with the grid.
#[derive(Clone, Debug)]
pub struct PassabilityGrid {
    grid: BoolGrid,
    components: UnionFind<usize>,
    components_dirty: bool,
}

impl Default for PassabilityGrid {
    fn default() -> PassabilityGrid {
        PassabilityGrid::new(0)
    }
}

impl PassabilityGrid {
    /// Creates a fully passable grid of `size` by `size` cells.
    pub fn new(size: usize) -> PassabilityGrid {
        let mut pathing_grid = PassabilityGrid {
            grid: BoolGrid::new(size, size, false),
            components: UnionFind::new(size * size),
            components_dirty: false,
        };
        pathing_grid.generate_components();
        pathing_grid
    }

    /// Samples every cell of the grid once: cell (x, y) is blocked iff the oracle reports a
    /// [Category::Wall] there.
    pub fn from_oracle<O>(size: usize, oracle: &O) -> PassabilityGrid
    where
        O: OccupancyOracle + ?Sized,
    {
        let mut pathing_grid = PassabilityGrid {
            grid: BoolGrid::new(size, size, false),
            components: UnionFind::new(size * size),
            components_dirty: false,
        };
        let mut walls = 0;
        for (x, y) in iproduct!(0..size as i32, 0..size as i32) {
            if oracle.classify(Point::new(x, y)) == Category::Wall {
                pathing_grid.grid.set(x, y, true);
                walls += 1;
            }
        }
        pathing_grid.generate_components();
        debug!("Built {}x{} grid with {} walls", size, size, walls);
        pathing_grid
    }

    /// Side length of the grid.
    pub fn size(&self) -> usize {
        self.grid.width()
    }
    pub fn in_bounds(&self, point: &Point) -> bool {
        let size = self.size() as i32;
        point.x >= 0 && point.y >= 0 && point.x < size && point.y < size
    }
    /// Out of bounds cells count as blocked.
    pub fn is_blocked(&self, point: &Point) -> bool {
        !self.in_bounds(point) || self.grid.get(point.x, point.y)
    }
    pub fn can_move_to(&self, point: &Point) -> bool {
        !self.is_blocked(point)
    }

    /// Free cells of the 4-neighbourhood, always enumerated as up, down, left, right.
    pub fn neighborhood_points(&self, point: &Point) -> SmallVec<[Point; N_SMALLVEC_SIZE]> {
        NEUMANN_OFFSETS
            .iter()
            .map(|(dx, dy)| Point::new(point.x + dx, point.y + dy))
            .filter(|p| self.can_move_to(p))
            .collect()
    }
    pub fn neighborhood_points_and_cost(
        &self,
        point: &Point,
    ) -> SmallVec<[(Point, i32); N_SMALLVEC_SIZE]> {
        self.neighborhood_points(point)
            .into_iter()
            .map(|p| (p, STEP_COST))
            .collect()
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.grid.get(x, y)
    }
    /// Updates a cell. Freeing a cell joins it to the components around it, blocking one flags the
    /// components as dirty since it may split them apart.
    pub fn set(&mut self, x: i32, y: i32, blocked: bool) {
        let p = Point::new(x, y);
        debug_assert!(self.in_bounds(&p));
        if blocked {
            if !self.grid.get(x, y) {
                self.components_dirty = true;
            }
        } else {
            let p_ix = self.ix(&p);
            for n in self.neighborhood_points(&p) {
                let n_ix = self.ix(&n);
                self.components.union(p_ix, n_ix);
            }
        }
        self.grid.set(x, y, blocked);
    }
    pub fn set_point(&mut self, point: Point, blocked: bool) {
        self.set(point.x, point.y, blocked)
    }

    fn ix(&self, point: &Point) -> usize {
        point.y as usize * self.size() + point.x as usize
    }

    /// Whether a blocking edit may have split a component since the last
    /// [generate_components](Self::generate_components).
    pub fn components_dirty(&self) -> bool {
        self.components_dirty
    }

    /// Retrieves the component id a given [Point] belongs to.
    pub fn get_component(&self, point: &Point) -> usize {
        self.components.find(self.ix(point))
    }

    /// Checks if start and goal are on the same component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }

    /// Checks whether the components prove that no route exists. The start cell itself is never
    /// treated as an obstacle by the search, so a blocked start is left for the search to decide.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        if !self.in_bounds(start) || !self.in_bounds(goal) {
            return true;
        }
        if start == goal || self.is_blocked(start) {
            return false;
        }
        self.is_blocked(goal) || !self.components.equiv(self.ix(start), self.ix(goal))
    }

    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            info!("Components are dirty: regenerating components");
            self.generate_components();
        }
    }

    /// Generates a new [UnionFind] structure and links up free 4-neighbours to the same components.
    pub fn generate_components(&mut self) {
        let size = self.size();
        self.components = UnionFind::new(size * size);
        self.components_dirty = false;
        for (x, y) in iproduct!(0..size as i32, 0..size as i32) {
            let point = Point::new(x, y);
            if self.is_blocked(&point) {
                continue;
            }
            let parent_ix = self.ix(&point);
            for p in [Point::new(x + 1, y), Point::new(x, y + 1)] {
                if self.can_move_to(&p) {
                    let ix = self.ix(&p);
                    self.components.union(parent_ix, ix);
                }
            }
        }
    }
}

impl fmt::Display for PassabilityGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Grid:")?;
        for y in 0..self.size() as i32 {
            let values = (0..self.size() as i32)
                .map(|x| self.grid.get(x, y) as i32)
                .collect::<Vec<i32>>();
            writeln!(f, "{:?}", values)?;
        }
        Ok(())
    }
}
