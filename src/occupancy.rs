//! Answers "what occupies this cell" for the grid builder.
use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::trace;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// The kind of entity found on a cell. Only [Category::Wall] blocks movement.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Category {
    #[default]
    Empty,
    Wall,
    Agent,
    Goal,
    Threat,
}

pub trait OccupancyOracle {
    fn classify(&self, cell: Point) -> Category;
}

impl<F> OccupancyOracle for F
where
    F: Fn(Point) -> Category,
{
    fn classify(&self, cell: Point) -> Category {
        self(cell)
    }
}

/// Spatial index from cell to occupant, built once per planning cycle from the live entities
/// so that classifying a cell does not scan all of them.
#[derive(Clone, Debug, Default)]
pub struct OccupancyIndex {
    cells: FxIndexMap<Point, Category>,
}

impl OccupancyIndex {
    pub fn new() -> OccupancyIndex {
        OccupancyIndex::default()
    }
    /// Registers an occupant. A cell keeps the first occupant registered on it, so entities
    /// should be inserted in the order they were spawned. Returns whether the cell was free.
    pub fn insert(&mut self, cell: Point, category: Category) -> bool {
        match self.cells.entry(cell) {
            Vacant(e) => {
                e.insert(category);
                true
            }
            Occupied(e) => {
                trace!("{} already holds {:?}, ignoring {:?}", cell, e.get(), category);
                false
            }
        }
    }
    pub fn get(&self, cell: &Point) -> Option<Category> {
        self.cells.get(cell).copied()
    }
    pub fn len(&self) -> usize {
        self.cells.len()
    }
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
    /// Occupied cells in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&Point, &Category)> {
        self.cells.iter()
    }
    /// Cells holding an occupant of the given category, in registration order.
    pub fn cells_of(&self, category: Category) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .filter(move |(_, c)| **c == category)
            .map(|(p, _)| *p)
    }
}

impl FromIterator<(Point, Category)> for OccupancyIndex {
    fn from_iter<I: IntoIterator<Item = (Point, Category)>>(iter: I) -> OccupancyIndex {
        let mut index = OccupancyIndex::new();
        for (cell, category) in iter {
            index.insert(cell, category);
        }
        index
    }
}

impl Extend<(Point, Category)> for OccupancyIndex {
    fn extend<I: IntoIterator<Item = (Point, Category)>>(&mut self, iter: I) {
        for (cell, category) in iter {
            self.insert(cell, category);
        }
    }
}

impl OccupancyOracle for OccupancyIndex {
    fn classify(&self, cell: Point) -> Category {
        self.get(&cell).unwrap_or_default()
    }
}
