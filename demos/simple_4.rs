use chase_pathing::{AstarSolver, GridSolver, PassabilityGrid, Point};

// In this example a route is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks a wall
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    let mut pathing_grid = PassabilityGrid::new(3);
    pathing_grid.set(1, 1, true);
    pathing_grid.update();
    println!("{}", pathing_grid);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    let route = AstarSolver::new().search(&pathing_grid, start, end).unwrap();
    println!("Route:");
    for (p, dir) in route.cells().iter().zip(route.directions()) {
        println!("{:?} then {:?}", p, dir);
    }
}
