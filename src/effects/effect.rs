//! Effect definitions.
//!
//! Effects are the atomic outcomes of a resolving ability. Each one acts
//! on a single resolved `Target`; `EachPlayer` fans out to every player.

use serde::{Deserialize, Serialize};

use crate::core::Mana;

/// An atomic game effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Effect {
    /// Lose life, or mark damage on a creature.
    Damage(i64),

    GainLife(i64),

    /// Draw cards. Drawing from an empty library decks the player.
    Draw(u32),

    /// Add mana to the target player's pool.
    AddMana(Mana),
}

impl Effect {
    /// Whether the effect makes sense on a permanent. Only damage does.
    #[must_use]
    pub fn affects_permanents(&self) -> bool {
        matches!(self, Effect::Damage(_))
    }
}

impl std::fmt::Display for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::Damage(n) => write!(f, "deal {} damage", n),
            Effect::GainLife(n) => write!(f, "gain {} life", n),
            Effect::Draw(n) => write!(f, "draw {} card(s)", n),
            Effect::AddMana(mana) => write!(f, "add {}", mana),
        }
    }
}
