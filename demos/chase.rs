use chase_pathing::{Category, Direction, OccupancyIndex, Planner, PlannerConfig, Point};

// An agent chases a pill through a small maze while a ghost patrols the corridor below it.
//
//  ________
// |A.....#.|
// |.####.#.|
// |......#.|
// |.####...|
// |......#P|
//  ________

const MAZE: [&str; 5] = [
    "A.....#.", //
    ".####.#.", //
    "......#.", //
    ".####...", //
    "......#P", //
];

fn parse() -> (OccupancyIndex, Point, Point) {
    let mut walls = OccupancyIndex::new();
    let mut agent = Point::new(0, 0);
    let mut pill = Point::new(0, 0);
    for (y, row) in MAZE.iter().enumerate() {
        for (x, c) in row.chars().enumerate() {
            let p = Point::new(x as i32, y as i32);
            match c {
                '#' => {
                    walls.insert(p, Category::Wall);
                }
                'A' => agent = p,
                'P' => pill = p,
                _ => {}
            }
        }
    }
    (walls, agent, pill)
}

fn main() {
    let (walls, mut agent, pill) = parse();
    let planner = Planner::new(PlannerConfig::new(MAZE[0].len()).with_reflex_respects_walls(true));
    let patrol = [Point::new(1, 2), Point::new(2, 2), Point::new(3, 2), Point::new(4, 2)];
    for tick in 0..40 {
        let ghost = patrol[(tick / 2) % patrol.len()];
        // The world is rebuilt every tick from the live entities, first come first served
        let mut world = OccupancyIndex::new();
        world.insert(agent, Category::Agent);
        world.insert(pill, Category::Goal);
        world.insert(ghost, Category::Threat);
        world.extend(walls.cells_of(Category::Wall).map(|p| (p, Category::Wall)));
        let dir = match planner.decide(&world, agent, pill, Some(ghost)) {
            Ok(dir) => dir,
            Err(e) => {
                println!("Planning failed: {e}");
                return;
            }
        };
        let next = dir.step(&agent);
        if !dir.is_none() && planner.build_grid(&world).can_move_to(&next) {
            agent = next;
        }
        println!("tick {tick:2}: ghost at {ghost}, moving {dir:?}, agent at {agent}");
        if agent == pill {
            println!("Pill eaten after {} ticks", tick + 1);
            return;
        }
        if dir == Direction::None {
            println!("No way to the pill");
            return;
        }
    }
    println!("Ran out of ticks");
}
