//! Static evaluation of non-terminal positions.

use crate::core::{GameState, PlayerId};

use super::config::SearchConfig;

/// Scores a position from one player's point of view. Higher is better.
///
/// Only called on positions that are not over; finished games are scored
/// by the search itself.
pub trait Evaluator<S> {
    fn evaluate(&self, state: &S, pov: PlayerId) -> f64;
}

/// Life difference plus weighted board development, measured against the
/// player's opponent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardEvaluator {
    pub land_weight: f64,
    pub creature_power_weight: f64,
}

impl BoardEvaluator {
    #[must_use]
    pub fn from_config(config: &SearchConfig) -> Self {
        Self {
            land_weight: config.land_weight,
            creature_power_weight: config.creature_power_weight,
        }
    }
}

impl Default for BoardEvaluator {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default())
    }
}

impl Evaluator<GameState> for BoardEvaluator {
    fn evaluate(&self, state: &GameState, pov: PlayerId) -> f64 {
        let me = state.player(pov);
        let them = state.player(state.opponent(pov));

        let life = (me.life - them.life) as f64;
        let lands = me.battlefield.lands.len() as f64 - them.battlefield.lands.len() as f64;
        let power = (me.battlefield.total_power() - them.battlefield.total_power()) as f64;

        life + self.land_weight * lands + self.creature_power_weight * power
    }
}
