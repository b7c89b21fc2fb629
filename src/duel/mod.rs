//! Duel driver: seats strategies at a table and plays the game out.
//!
//! ```
//! use std::sync::Arc;
//!
//! use mtg_minimax::cards::catalog;
//! use mtg_minimax::duel::DuelBuilder;
//! use mtg_minimax::strategy::{Goldfish, ScriptedStrategy};
//!
//! let registry = Arc::new(catalog::standard_registry().unwrap());
//! let deck = catalog::burn_deck(&registry).unwrap();
//!
//! let mut duel = DuelBuilder::new(registry)
//!     .seat("burn", deck.clone(), ScriptedStrategy)
//!     .seat("goldfish", deck, Goldfish)
//!     .with_seed(7)
//!     .build()
//!     .unwrap();
//!
//! let result = duel.run(10_000);
//! assert!(result.is_some());
//! ```

mod builder;

pub use builder::DuelBuilder;

use tracing::info;

use crate::core::{Action, ActionRecord, GameState, PlayerMap};
use crate::rules::{combat, GameResult, MagicRules, RulesEngine};
use crate::strategy::Strategy;

/// A game in progress, with a strategy for every seat.
pub struct Duel {
    rules: MagicRules,
    state: GameState,
    strategies: PlayerMap<Box<dyn Strategy>>,
    history: Vec<ActionRecord>,
}

impl Duel {
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn rules(&self) -> &MagicRules {
        &self.rules
    }

    /// Every action taken so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    /// `None` while the game continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.rules.is_terminal(&self.state)
    }

    /// Ask the player with priority for one action and apply it.
    ///
    /// Does nothing once the game is over. Returns the result if the game
    /// is over afterwards.
    pub fn step(&mut self) -> Option<GameResult> {
        if let Some(result) = self.result() {
            return Some(result);
        }

        let player = self.state.priority_player();
        let strategy = self.strategies.get_mut(player);
        let action = if combat::awaiting_attackers(&self.state) {
            strategy.declare_attackers(&self.rules, &self.state, player)
        } else {
            strategy.next_action(&self.rules, &self.state, player)
        };
        debug_assert!(
            self.rules.is_legal(&self.state, &action),
            "{} chose an illegal action: {}",
            player,
            action
        );

        let payment = match &action {
            Action::Cast { card, .. } => {
                let cost = self.rules.registry().get(*card).cost;
                strategy.pay_mana_cost(&self.state, player, cost)
            }
            _ => None,
        };

        let turn = self.state.turn;
        let step = self.state.step;
        let active = self.state.active_player();
        self.rules.apply_with_payment(&mut self.state, &action, payment.as_ref());

        let sequence = self.history.len() as u32;
        self.history.push(ActionRecord::new(action, turn, step, sequence));

        if self.state.active_player() != active {
            info!(turn = self.state.turn, active = %self.state.active_player(), "turn started");
        }
        let result = self.result();
        if let Some(result) = &result {
            info!(?result, actions = self.history.len(), "game over");
        }
        result
    }

    /// Step until the game ends or `max_actions` actions have been taken.
    pub fn run(&mut self, max_actions: usize) -> Option<GameResult> {
        for _ in 0..max_actions {
            if let Some(result) = self.step() {
                return Some(result);
            }
        }
        self.result()
    }
}
