//! Avoidance rule that overrides the planned route while a threat is close.
use crate::route::Direction;
use crate::DEFAULT_THREAT_RADIUS;
use grid_util::point::Point;

/// Outcome of the [ThreatReflex]. With [Reflex::NoThreat] the caller falls back to its route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reflex {
    Avoid(Direction),
    NoThreat,
}

impl Reflex {
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Reflex::Avoid(dir) => Some(*dir),
            Reflex::NoThreat => None,
        }
    }
}

/// Triggers when a threat is closer than `radius` cells on both axes and steps away from it
/// along the axis of larger displacement. Equal displacements resolve on the y axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreatReflex {
    pub radius: i32,
}

impl Default for ThreatReflex {
    fn default() -> ThreatReflex {
        ThreatReflex {
            radius: DEFAULT_THREAT_RADIUS,
        }
    }
}

impl ThreatReflex {
    pub fn new(radius: i32) -> ThreatReflex {
        ThreatReflex { radius }
    }

    /// Does not look at walls; the goal does not influence the decision.
    pub fn evaluate(&self, agent: &Point, threat: &Point, _goal: &Point) -> Reflex {
        let dx = threat.x - agent.x;
        let dy = threat.y - agent.y;
        if dx.abs() >= self.radius || dy.abs() >= self.radius {
            return Reflex::NoThreat;
        }
        let dir = if dx.abs() > dy.abs() {
            if dx > 0 {
                Direction::Left
            } else {
                Direction::Right
            }
        } else if dy > 0 {
            Direction::Up
        } else {
            Direction::Down
        };
        Reflex::Avoid(dir)
    }
}

/// [ThreatReflex::evaluate] with the default radius.
pub fn threat_reflex(agent: &Point, threat: &Point, goal: &Point) -> Reflex {
    ThreatReflex::default().evaluate(agent, threat, goal)
}
