//! Card instances - permanents on the battlefield.
//!
//! Only permanents become instances. Cards in hand, library or graveyard
//! are plain `CardId`s.

use serde::{Deserialize, Serialize};

use super::definition::{Card, CardId, CardKind};
use crate::core::{InstanceId, Mana, PlayerId};

/// A permanent in play.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardInstance {
    /// Stable identity for targeting and attack declarations.
    pub id: InstanceId,

    /// Reference to the card definition.
    pub card: CardId,

    pub owner: PlayerId,
    pub tapped: bool,

    /// Creatures can't attack the turn they come under their
    /// controller's control.
    pub summoning_sick: bool,

    /// The player this creature is attacking, if any.
    pub attacking: Option<PlayerId>,

    pub power: i64,
    pub toughness: i64,

    /// Damage marked this turn.
    pub damage: i64,

    /// What tapping this permanent produces, for mana sources.
    pub mana: Option<Mana>,
}

impl CardInstance {
    /// A fresh permanent for `definition`.
    #[must_use]
    pub fn new(id: InstanceId, card: CardId, definition: &Card, owner: PlayerId) -> Self {
        let (power, toughness) = match definition.kind {
            CardKind::Creature { power, toughness } => (power, toughness),
            _ => (0, 0),
        };

        Self {
            id,
            card,
            owner,
            tapped: false,
            summoning_sick: definition.kind.is_creature(),
            attacking: None,
            power,
            toughness,
            damage: 0,
            mana: definition.mana_output(),
        }
    }

    /// An untapped land producing `produces`.
    #[must_use]
    pub fn land(id: InstanceId, card: CardId, owner: PlayerId, produces: Mana) -> Self {
        Self {
            id,
            card,
            owner,
            tapped: false,
            summoning_sick: false,
            attacking: None,
            power: 0,
            toughness: 0,
            damage: 0,
            mana: Some(produces),
        }
    }

    /// Untapped mana source.
    #[must_use]
    pub fn is_mana_source(&self) -> bool {
        !self.tapped && self.mana.is_some()
    }

    /// What tapping this produces. Zero for non-sources.
    #[must_use]
    pub fn produces(&self) -> Mana {
        self.mana.unwrap_or(Mana::ZERO)
    }

    /// Untapped and not summoning sick. Only meaningful for creatures.
    #[must_use]
    pub fn can_attack(&self) -> bool {
        !self.tapped && !self.summoning_sick
    }

    /// Lethal damage marked.
    #[must_use]
    pub fn is_destroyed(&self) -> bool {
        self.toughness > 0 && self.damage >= self.toughness
    }
}
