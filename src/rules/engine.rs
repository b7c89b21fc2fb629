//! Rules engine trait and the Magic rules implementation.
//!
//! The search only talks to the game through `RulesEngine`:
//! - Who is to move
//! - What actions are legal, or might be legal behind hidden information
//! - How actions modify state
//! - Win/loss conditions

use std::sync::Arc;

use crate::cards::CardRegistry;
use crate::core::{Action, GameConfig, GameState, PlayerId};

use super::payment::ManaPayment;
use super::{generator, resolve};

/// Result of a completed game.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameResult {
    /// Single winner.
    Winner(PlayerId),
    /// Draw (no winner).
    Draw,
    /// Several players survive a multiplayer game's end.
    Winners(Vec<PlayerId>),
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        match self {
            GameResult::Winner(p) => *p == player,
            GameResult::Winners(ps) => ps.contains(&player),
            GameResult::Draw => false,
        }
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: actions of the player to move; never empty for a
///   live position
/// - `hypothetical_actions`: what `observer` must assume the player to
///   move can do; a superset of the truth
/// - `apply_action`: must be deterministic for search
/// - `is_terminal`: `None` while the game continues
pub trait RulesEngine {
    type State: Clone;
    type Action: Clone + std::fmt::Debug;

    /// The player whose decision is pending.
    fn to_move(&self, state: &Self::State) -> PlayerId;

    fn legal_actions(&self, state: &Self::State) -> Vec<Self::Action>;

    /// Actions of the player to move as seen by `observer`.
    ///
    /// Defaults to the true legal actions, for games without hidden
    /// information.
    fn hypothetical_actions(&self, state: &Self::State, observer: PlayerId) -> Vec<Self::Action> {
        let _ = observer;
        self.legal_actions(state)
    }

    fn apply_action(&self, state: &mut Self::State, action: &Self::Action);

    fn is_terminal(&self, state: &Self::State) -> Option<GameResult>;
}

/// The game's rules, bound to a card pool and a configuration.
///
/// Cheap to clone: the registry is shared.
#[derive(Clone, Debug)]
pub struct MagicRules {
    registry: Arc<CardRegistry>,
    config: GameConfig,
}

impl MagicRules {
    #[must_use]
    pub fn new(registry: Arc<CardRegistry>, config: GameConfig) -> Self {
        Self { registry, config }
    }

    #[must_use]
    pub fn registry(&self) -> &CardRegistry {
        &self.registry
    }

    #[must_use]
    pub fn shared_registry(&self) -> Arc<CardRegistry> {
        Arc::clone(&self.registry)
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Legal actions for a specific player. Empty unless they hold priority.
    #[must_use]
    pub fn actions_for(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        generator::legal_actions(&self.registry, &self.config, state, player)
    }

    /// Worst-case actions for a player whose hand is hidden.
    #[must_use]
    pub fn worst_case_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        generator::worst_case_actions(&self.registry, &self.config, state, player)
    }

    #[must_use]
    pub fn is_legal(&self, state: &GameState, action: &Action) -> bool {
        generator::is_legal(&self.registry, &self.config, state, action)
    }

    /// Apply a cast with a chosen payment. `None` uses the greedy tapper.
    pub fn apply_with_payment(&self, state: &mut GameState, action: &Action, payment: Option<&ManaPayment>) {
        resolve::apply_action(&self.registry, state, action, payment);
    }
}

impl RulesEngine for MagicRules {
    type State = GameState;
    type Action = Action;

    fn to_move(&self, state: &GameState) -> PlayerId {
        state.priority_player()
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        self.actions_for(state, state.priority_player())
    }

    fn hypothetical_actions(&self, state: &GameState, observer: PlayerId) -> Vec<Action> {
        let player = state.priority_player();
        if player == observer {
            self.actions_for(state, player)
        } else {
            self.worst_case_actions(state, player)
        }
    }

    fn apply_action(&self, state: &mut GameState, action: &Action) {
        resolve::apply_action(&self.registry, state, action, None);
    }

    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        if !state.is_over() {
            return None;
        }

        let survivors: Vec<_> = state
            .players
            .iter()
            .filter(|(_, p)| !p.has_lost())
            .map(|(id, _)| id)
            .collect();

        Some(match survivors.as_slice() {
            [] => GameResult::Draw,
            [winner] => GameResult::Winner(*winner),
            _ => GameResult::Winners(survivors),
        })
    }
}
