use crate::{DEFAULT_GRID_SIZE, DEFAULT_THREAT_RADIUS};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Settings read by every planning tick of a [Planner](crate::planner::Planner).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlannerConfig {
    /// Side length of the square world.
    pub grid_size: usize,
    /// Threats strictly closer than this on both axes trigger the reflex.
    pub threat_radius: i32,
    /// Ignore a reflex whose step would leave the grid or enter a wall.
    pub reflex_respects_walls: bool,
}

impl Default for PlannerConfig {
    fn default() -> PlannerConfig {
        PlannerConfig {
            grid_size: DEFAULT_GRID_SIZE,
            threat_radius: DEFAULT_THREAT_RADIUS,
            reflex_respects_walls: false,
        }
    }
}

impl PlannerConfig {
    pub fn new(grid_size: usize) -> PlannerConfig {
        PlannerConfig {
            grid_size,
            ..Default::default()
        }
    }
    pub fn with_threat_radius(mut self, threat_radius: i32) -> PlannerConfig {
        self.threat_radius = threat_radius;
        self
    }
    pub fn with_reflex_respects_walls(mut self, respects_walls: bool) -> PlannerConfig {
        self.reflex_respects_walls = respects_walls;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_overrides_defaults() {
        let config = PlannerConfig::new(8)
            .with_threat_radius(2)
            .with_reflex_respects_walls(true);
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.threat_radius, 2);
        assert!(config.reflex_respects_walls);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: PlannerConfig = serde_json::from_str(r#"{"grid_size": 12}"#).unwrap();
        assert_eq!(config, PlannerConfig::new(12));
        let json = serde_json::to_string(&config).unwrap();
        let back: PlannerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
