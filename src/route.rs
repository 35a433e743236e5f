use grid_util::point::Point;
use itertools::Itertools;

/// Movement command for one tick. The y axis grows downward, so [Direction::Up] decreases y.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    #[default]
    None,
}

impl Direction {
    /// The direction of a single cardinal step from `from` to `to`, [Direction::None] for
    /// anything else.
    pub fn between(from: &Point, to: &Point) -> Direction {
        match (to.x - from.x, to.y - from.y) {
            (1, 0) => Direction::Right,
            (-1, 0) => Direction::Left,
            (0, 1) => Direction::Down,
            (0, -1) => Direction::Up,
            _ => Direction::None,
        }
    }
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::None => (0, 0),
        }
    }
    /// The cell reached by moving one step from `point`.
    pub fn step(&self, point: &Point) -> Point {
        let (dx, dy) = self.delta();
        Point::new(point.x + dx, point.y + dy)
    }
    pub fn is_none(&self) -> bool {
        *self == Direction::None
    }
}

/// Ordered cells from the start to the goal, both included.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Route {
    cells: Vec<Point>,
}

impl Route {
    pub fn new(cells: Vec<Point>) -> Route {
        debug_assert!(!cells.is_empty());
        Route { cells }
    }
    pub fn cells(&self) -> &[Point] {
        &self.cells
    }
    /// Number of cells, one more than the number of steps.
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    pub fn start(&self) -> Option<&Point> {
        self.cells.first()
    }
    pub fn goal(&self) -> Option<&Point> {
        self.cells.last()
    }
    /// Number of unit steps along the route.
    pub fn steps(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }
    /// The move taking the agent from the first cell to the second one, [Direction::None] if the
    /// agent is already on the goal.
    pub fn first_step(&self) -> Direction {
        match self.cells.as_slice() {
            [from, to, ..] => Direction::between(from, to),
            _ => Direction::None,
        }
    }
    /// All moves along the route.
    pub fn directions(&self) -> Vec<Direction> {
        self.cells
            .iter()
            .tuple_windows()
            .map(|(from, to)| Direction::between(from, to))
            .collect()
    }
}

impl From<Vec<Point>> for Route {
    fn from(cells: Vec<Point>) -> Route {
        Route::new(cells)
    }
}
