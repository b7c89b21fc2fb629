//! Core engine types: players, state, actions, mana, turn steps, RNG,
//! configuration.

pub mod action;
pub mod config;
pub mod entity;
pub mod mana;
pub mod player;
pub mod rng;
pub mod state;
pub mod step;

pub use action::{Action, ActionRecord, AttackDeclaration, Targets};
pub use config::{AttackEnumeration, GameConfig};
pub use entity::InstanceId;
pub use mana::{Color, Mana};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::GameRng;
pub use state::{CombatState, GameState};
pub use step::Step;
