//! Effect system: what abilities do and what they target.
//!
//! - `Effect`: damage, life gain, card draw, mana
//! - `TargetType` / `Target`: declared requirement and resolved choice
//! - `target_combinations`: per-card target enumeration
//! - `apply_effect`: executes an effect on game state

mod effect;
mod resolver;
mod targeting;

pub use effect::Effect;
pub use resolver::apply_effect;
pub use targeting::{possible_targets, target_combinations, Target, TargetType};
