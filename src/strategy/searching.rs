//! Strategy backed by minimax search.

use crate::core::{Action, GameState, PlayerId};
use crate::rules::MagicRules;
use crate::search::{BoardEvaluator, Minimax, SearchConfig, SearchStats};

use super::Strategy;

/// Searches every decision with [`Minimax`] and a [`BoardEvaluator`].
#[derive(Clone, Debug, Default)]
pub struct MinimaxStrategy {
    config: SearchConfig,
    last_stats: SearchStats,
}

impl MinimaxStrategy {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            config,
            last_stats: SearchStats::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics from the most recent decision.
    #[must_use]
    pub fn last_stats(&self) -> &SearchStats {
        &self.last_stats
    }

    fn search(&mut self, rules: &MagicRules, state: &GameState, player: PlayerId) -> Action {
        let evaluator = BoardEvaluator::from_config(&self.config);
        let mut minimax = Minimax::new(rules.clone(), evaluator, self.config.clone());
        let action = minimax.choose_action(state);
        self.last_stats = minimax.stats().clone();
        action.unwrap_or_else(|| Action::pass(player))
    }
}

impl Strategy for MinimaxStrategy {
    fn next_action(&mut self, rules: &MagicRules, state: &GameState, player: PlayerId) -> Action {
        self.search(rules, state, player)
    }

    // The attack declaration is just another node in the tree.
    fn declare_attackers(&mut self, rules: &MagicRules, state: &GameState, player: PlayerId) -> Action {
        self.search(rules, state, player)
    }
}
