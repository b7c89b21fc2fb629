//! Game rules: turn structure, action generation, resolution, combat and
//! mana payment.
//!
//! Games are driven through [`RulesEngine`]; [`MagicRules`] is the
//! implementation for this crate's card game.

pub mod combat;
mod engine;
pub mod generator;
mod payment;
pub mod phase;
pub mod resolve;

pub use engine::{GameResult, MagicRules, RulesEngine};
pub use generator::{can_play, is_legal, legal_actions, worst_case_actions};
pub use payment::{apply_payment, greedy_payment, ManaPayment};
pub use phase::advance_to_decision_point;
