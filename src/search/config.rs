//! Search configuration parameters.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Minimax configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies of lookahead. A ply is one action by whoever holds priority.
    /// 0 means no lookahead at all.
    pub max_depth: u32,

    /// Score of a won position before the remaining-depth bonus.
    /// Must dominate any heuristic score.
    pub win_value: f64,

    /// Heuristic weight of each land more than the opponent.
    pub land_weight: f64,

    /// Heuristic weight of each point of creature power more than the opponent.
    pub creature_power_weight: f64,

    /// Subtracted from heuristic scores per ply used, so equal outcomes
    /// reached sooner score higher.
    pub depth_penalty: f64,

    /// Stop expanding after this many nodes; remaining nodes are scored
    /// as leaves.
    pub node_budget: Option<u64>,

    /// Stop expanding after this much wall-clock time.
    pub time_budget: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: 4,
            win_value: 1_000_000.0,
            land_weight: 0.5,
            creature_power_weight: 1.0,
            depth_penalty: 0.01,
            node_budget: None,
            time_budget: None,
        }
    }
}

impl SearchConfig {
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    #[must_use]
    pub fn with_win_value(mut self, value: f64) -> Self {
        self.win_value = value;
        self
    }

    #[must_use]
    pub fn with_land_weight(mut self, weight: f64) -> Self {
        self.land_weight = weight;
        self
    }

    #[must_use]
    pub fn with_creature_power_weight(mut self, weight: f64) -> Self {
        self.creature_power_weight = weight;
        self
    }

    #[must_use]
    pub fn with_depth_penalty(mut self, penalty: f64) -> Self {
        self.depth_penalty = penalty;
        self
    }

    #[must_use]
    pub fn with_node_budget(mut self, nodes: u64) -> Self {
        self.node_budget = Some(nodes);
        self
    }

    #[must_use]
    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.max_depth, 4);
        assert_eq!(config.win_value, 1_000_000.0);
        assert!(config.node_budget.is_none());
        assert!(config.time_budget.is_none());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_max_depth(6)
            .with_node_budget(500)
            .with_time_budget(Duration::from_millis(20))
            .with_land_weight(0.0);

        assert_eq!(config.max_depth, 6);
        assert_eq!(config.node_budget, Some(500));
        assert_eq!(config.time_budget, Some(Duration::from_millis(20)));
        assert_eq!(config.land_weight, 0.0);
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_max_depth(2);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
