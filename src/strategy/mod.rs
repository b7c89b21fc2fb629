//! Strategies: the policies that pick each player's actions.
//!
//! The game core never depends on a concrete policy. The duel driver asks
//! a player's [`Strategy`] for an action whenever that player holds
//! priority, for an attack declaration when one is owed, and for the
//! permanents to tap when a spell is paid for.

mod scripted;
mod searching;

pub use scripted::ScriptedStrategy;
pub use searching::MinimaxStrategy;

use crate::core::{Action, GameState, Mana, PlayerId};
use crate::rules::{greedy_payment, MagicRules, ManaPayment};

/// A pluggable player policy.
pub trait Strategy: Send {
    /// Choose an action while `player` holds priority.
    fn next_action(&mut self, rules: &MagicRules, state: &GameState, player: PlayerId) -> Action;

    /// Choose attackers. Must return an `Action::Attack`.
    fn declare_attackers(&mut self, rules: &MagicRules, state: &GameState, player: PlayerId) -> Action;

    /// Choose which mana sources to tap for `cost`.
    ///
    /// `None` lets the rules fall back to the greedy tapper. The default
    /// is the greedy tapper itself.
    fn pay_mana_cost(&mut self, state: &GameState, player: PlayerId, cost: Mana) -> Option<ManaPayment> {
        greedy_payment(state.player(player), cost)
    }
}

/// Never casts anything and never attacks.
#[derive(Clone, Copy, Debug, Default)]
pub struct Goldfish;

impl Strategy for Goldfish {
    fn next_action(&mut self, _: &MagicRules, _: &GameState, player: PlayerId) -> Action {
        Action::pass(player)
    }

    fn declare_attackers(&mut self, _: &MagicRules, _: &GameState, player: PlayerId) -> Action {
        Action::attack(player, [])
    }
}
