//! Error types for route planning.
use grid_util::point::Point;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlanError {
    /// A search endpoint does not lie on the grid.
    #[error("cell {cell} lies outside the {size}x{size} grid")]
    OutOfBounds { cell: Point, size: usize },

    /// The frontier was exhausted without reaching the goal.
    #[error("no route from {start} to {goal}")]
    NoRoute { start: Point, goal: Point },
}

pub type Result<T> = std::result::Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_cells() {
        let err = PlanError::NoRoute {
            start: Point::new(0, 0),
            goal: Point::new(3, 1),
        };
        assert_eq!(
            err.to_string(),
            format!("no route from {} to {}", Point::new(0, 0), Point::new(3, 1))
        );
        let err = PlanError::OutOfBounds {
            cell: Point::new(-1, 2),
            size: 5,
        };
        assert!(err.to_string().ends_with("outside the 5x5 grid"));
    }
}
