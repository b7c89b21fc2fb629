//! Depth-limited minimax with a worst-case model of hidden hands.
//!
//! The searching player maximizes over their real legal actions. Every
//! other player minimizes over the actions the searcher has to assume
//! they have, which for a hidden hand is anything their deck list could
//! put there.

use std::time::Instant;

use tracing::{debug, trace};

use crate::core::PlayerId;
use crate::rules::{GameResult, RulesEngine};

use super::config::SearchConfig;
use super::eval::Evaluator;
use super::stats::SearchStats;

/// Minimax search context.
///
/// Generic over the rules engine and the heuristic used at the depth
/// horizon. Positions are copied before each move is tried, so the
/// caller's state is never touched.
///
/// Only hands are treated as hidden. Draws inside the search take the real
/// top of the library, so a plan may rely on library order the player
/// could not know.
pub struct Minimax<E: RulesEngine, V> {
    engine: E,
    evaluator: V,
    config: SearchConfig,
    stats: SearchStats,
    deadline: Option<Instant>,
}

impl<E, V> Minimax<E, V>
where
    E: RulesEngine,
    V: Evaluator<E::State>,
{
    pub fn new(engine: E, evaluator: V, config: SearchConfig) -> Self {
        Self {
            engine,
            evaluator,
            config,
            stats: SearchStats::default(),
            deadline: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Statistics of the most recent search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Pick the best action for the player to move.
    ///
    /// Ties go to the earliest action in generator order. Returns the
    /// first action without looking ahead when the depth is 0 or there is
    /// only one choice, and `None` when nothing is legal.
    pub fn choose_action(&mut self, state: &E::State) -> Option<E::Action> {
        let start = Instant::now();
        self.stats.reset();
        self.deadline = self.config.time_budget.map(|budget| start + budget);

        let pov = self.engine.to_move(state);
        let mut actions = self.engine.legal_actions(state);
        if actions.is_empty() {
            return None;
        }
        if self.config.max_depth == 0 || actions.len() == 1 {
            return Some(actions.swap_remove(0));
        }

        self.stats.nodes += 1;
        let mut best: Option<(f64, E::Action)> = None;
        for action in actions {
            let mut child = state.clone();
            self.engine.apply_action(&mut child, &action);
            let value = self.value(&child, pov, self.config.max_depth - 1);
            trace!(?action, value, "root move scored");

            if best.as_ref().map_or(true, |(score, _)| value > *score) {
                best = Some((value, action));
            }
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            %pov,
            nodes = self.stats.nodes,
            leaves = self.stats.leaves,
            exhausted = self.stats.budget_exhausted,
            value = ?best.as_ref().map(|(score, _)| *score),
            "search complete"
        );
        best.map(|(_, action)| action)
    }

    /// Value of `state` to `pov` with `remaining` plies left to search.
    pub fn value(&mut self, state: &E::State, pov: PlayerId, remaining: u32) -> f64 {
        self.stats.nodes += 1;

        if let Some(result) = self.engine.is_terminal(state) {
            self.stats.leaves += 1;
            self.stats.terminal_leaves += 1;
            return self.terminal_value(&result, pov, remaining);
        }
        if remaining == 0 || self.out_of_budget() {
            return self.leaf_value(state, pov, remaining);
        }

        let to_move = self.engine.to_move(state);
        let maximizing = to_move == pov;
        let actions = if maximizing {
            self.engine.legal_actions(state)
        } else {
            self.engine.hypothetical_actions(state, pov)
        };
        if actions.is_empty() {
            return self.leaf_value(state, pov, remaining);
        }

        let mut best = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        for action in &actions {
            let mut child = state.clone();
            self.engine.apply_action(&mut child, action);
            let value = self.value(&child, pov, remaining - 1);
            best = if maximizing { best.max(value) } else { best.min(value) };
        }
        best
    }

    /// Wins and losses are worth more the sooner they happen.
    fn terminal_value(&self, result: &GameResult, pov: PlayerId, remaining: u32) -> f64 {
        let magnitude = self.config.win_value + f64::from(remaining);
        if result.is_winner(pov) {
            magnitude
        } else if result.is_draw() {
            0.0
        } else {
            -magnitude
        }
    }

    fn leaf_value(&mut self, state: &E::State, pov: PlayerId, remaining: u32) -> f64 {
        self.stats.leaves += 1;
        let used = self.config.max_depth.saturating_sub(remaining);
        self.evaluator.evaluate(state, pov) - self.config.depth_penalty * f64::from(used)
    }

    fn out_of_budget(&mut self) -> bool {
        if self.stats.budget_exhausted {
            return true;
        }
        let nodes_spent = self
            .config
            .node_budget
            .map_or(false, |budget| self.stats.nodes >= budget);
        let time_spent = self.deadline.map_or(false, |deadline| Instant::now() >= deadline);

        if nodes_spent || time_spent {
            trace!(nodes = self.stats.nodes, "search budget exhausted");
            self.stats.budget_exhausted = true;
        }
        self.stats.budget_exhausted
    }
}
