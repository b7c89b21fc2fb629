//! # mtg-minimax
//!
//! Rules core for a two-player subset of a trading card game, with a
//! minimax player that plans against hidden hands.
//!
//! ## Design Principles
//!
//! 1. **Decisions Only**: The turn runs itself between decision points.
//!    Players are only asked when they hold priority or owe an attack.
//!
//! 2. **Worst-Case Opponents**: A hidden hand is assumed to hold anything
//!    its owner's deck list could have put there.
//!
//! 3. **Pluggable Players**: The core only knows the `Strategy` trait;
//!    scripted, searching and passive players are interchangeable.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: O(1) cloning via `im-rs`, so search
//!   can copy a position per branch without touching the original.
//!
//! - **Rules Seam**: Search is generic over `RulesEngine`, implemented
//!   for this game by `MagicRules`.
//!
//! ## Modules
//!
//! - `core`: Players, mana, steps, actions, game state, RNG, configuration
//! - `cards`: Card definitions, instances, registry, deck lists, catalog
//! - `zones`: Hand and battlefield
//! - `effects`: Effects, target types, target enumeration
//! - `stack`: The stack and priority passing
//! - `rules`: Turn structure, action generation, resolution, combat
//! - `search`: Minimax search and evaluation
//! - `strategy`: Player policies
//! - `duel`: Driver that plays a game between strategies

pub mod core;
pub mod zones;
pub mod cards;
pub mod effects;
pub mod stack;
pub mod rules;
pub mod search;
pub mod strategy;
pub mod duel;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, PlayerMap, Player,
    GameRng, InstanceId,
    GameConfig, AttackEnumeration,
    Action, ActionRecord, AttackDeclaration, Targets,
    Color, Mana, Step, GameState,
};

pub use crate::cards::{Card, CardId, CardInstance, CardKind, CardRegistry, DeckList};

pub use crate::effects::{Effect, Target, TargetType};

pub use crate::stack::{Priority, Stack, StackObject};

pub use crate::rules::{GameResult, MagicRules, ManaPayment, RulesEngine};

pub use crate::search::{BoardEvaluator, Evaluator, Minimax, SearchConfig, SearchStats};

pub use crate::strategy::{Goldfish, MinimaxStrategy, ScriptedStrategy, Strategy};

pub use crate::duel::{Duel, DuelBuilder};

pub use crate::error::{EngineError, Result};
