//! Game configuration.
//!
//! The rules core never hardcodes table size, life totals or hand sizes;
//! callers set them here once per game and the engine reads them.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// How attacker declarations are enumerated for the active player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttackEnumeration {
    /// A single declaration: every creature able to attack attacks.
    #[default]
    AllEligible,

    /// One declaration per subset of the creatures able to attack,
    /// including the empty one. Grows as 2^n.
    PowerSet,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of players (2-8).
    pub player_count: usize,

    /// Life total each player starts with.
    pub starting_life: i64,

    /// Cards drawn into each opening hand.
    pub opening_hand_size: usize,

    /// Attacker enumeration policy used by the action generator.
    pub attack_enumeration: AttackEnumeration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_count: 2,
            starting_life: 20,
            opening_hand_size: 7,
            attack_enumeration: AttackEnumeration::AllEligible,
        }
    }
}

impl GameConfig {
    /// Create a configuration for `player_count` players with default values.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            player_count,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_starting_life(mut self, life: i64) -> Self {
        self.starting_life = life;
        self
    }

    #[must_use]
    pub fn with_opening_hand_size(mut self, size: usize) -> Self {
        self.opening_hand_size = size;
        self
    }

    #[must_use]
    pub fn with_attack_enumeration(mut self, policy: AttackEnumeration) -> Self {
        self.attack_enumeration = policy;
        self
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<()> {
        if !(2..=8).contains(&self.player_count) {
            return Err(EngineError::InvalidPlayerCount(self.player_count));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.player_count, 2);
        assert_eq!(config.starting_life, 20);
        assert_eq!(config.opening_hand_size, 7);
        assert_eq!(config.attack_enumeration, AttackEnumeration::AllEligible);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new(4)
            .with_starting_life(30)
            .with_opening_hand_size(5)
            .with_attack_enumeration(AttackEnumeration::PowerSet);

        assert_eq!(config.player_count, 4);
        assert_eq!(config.starting_life, 30);
        assert_eq!(config.opening_hand_size, 5);
        assert_eq!(config.attack_enumeration, AttackEnumeration::PowerSet);
    }

    #[test]
    fn test_validate_player_count() {
        assert_eq!(
            GameConfig::new(1).validate(),
            Err(EngineError::InvalidPlayerCount(1))
        );
        assert_eq!(
            GameConfig::new(9).validate(),
            Err(EngineError::InvalidPlayerCount(9))
        );
        assert!(GameConfig::new(8).validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new(3).with_starting_life(15);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
