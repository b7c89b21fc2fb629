//! Card definitions - static card data.
//!
//! A `Card` holds the immutable properties shared by every copy of a card:
//! name, mana cost, kind, casting prerequisites and abilities. Runtime
//! state of a permanent (tapped, attacking, damage) lives in
//! `CardInstance`.

use serde::{Deserialize, Serialize};

use crate::core::{Mana, Player};
use crate::effects::{Effect, TargetType};

/// Identifier of a card definition within a `CardRegistry`.
///
/// This identifies the "type" of card (e.g., "Lava Spike"),
/// not a specific copy in a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// What kind of card this is. Decides where it goes on resolution and
/// when it may be cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    Land,
    Creature { power: i64, toughness: i64 },
    /// Non-creature, non-land permanent.
    Artifact,
    Sorcery,
    Instant,
}

impl CardKind {
    #[must_use]
    pub fn is_permanent(self) -> bool {
        matches!(self, CardKind::Land | CardKind::Creature { .. } | CardKind::Artifact)
    }

    #[must_use]
    pub fn is_land(self) -> bool {
        matches!(self, CardKind::Land)
    }

    #[must_use]
    pub fn is_creature(self) -> bool {
        matches!(self, CardKind::Creature { .. })
    }

    /// Castable whenever the player holds priority.
    #[must_use]
    pub fn is_instant_speed(self) -> bool {
        matches!(self, CardKind::Instant)
    }
}

/// How an ability is used.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AbilityKind {
    /// Part of a spell's resolution.
    Spell,

    /// Activated by paying a cost, optionally tapping the permanent.
    Activated { tap: bool, cost: Mana },

    /// Fires on a game event. Carried as data; never put on the stack.
    Triggered,

    /// Continuous effect. Carried as data; never applied.
    Static,
}

/// One ability: when it applies, what it targets and what it does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ability {
    pub kind: AbilityKind,
    pub target: TargetType,
    pub effect: Effect,
}

impl Ability {
    /// A spell ability.
    #[must_use]
    pub fn spell(target: TargetType, effect: Effect) -> Self {
        Self {
            kind: AbilityKind::Spell,
            target,
            effect,
        }
    }

    /// "Tap: add `produces`."
    #[must_use]
    pub fn tap_for_mana(produces: Mana) -> Self {
        Self {
            kind: AbilityKind::Activated {
                tap: true,
                cost: Mana::ZERO,
            },
            target: TargetType::You,
            effect: Effect::AddMana(produces),
        }
    }

    /// Activated ability whose only effect is adding mana to its controller.
    #[must_use]
    pub fn is_mana_ability(&self) -> bool {
        matches!(self.kind, AbilityKind::Activated { .. })
            && matches!(self.effect, Effect::AddMana(_))
            && self.target == TargetType::You
    }
}

/// A casting restriction checked against the caster.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prerequisite {
    LifeAtLeast(i64),
    /// Counts the card being cast.
    HandSizeAtLeast(usize),
    ControlsLand,
}

impl Prerequisite {
    #[must_use]
    pub fn is_met(&self, player: &Player) -> bool {
        match *self {
            Prerequisite::LifeAtLeast(life) => player.life >= life,
            Prerequisite::HandSizeAtLeast(size) => player.hand.len() >= size,
            Prerequisite::ControlsLand => !player.battlefield.lands.is_empty(),
        }
    }
}

/// Static card definition.
///
/// ```
/// use mtg_minimax::cards::Card;
/// use mtg_minimax::core::Mana;
/// use mtg_minimax::effects::{Effect, TargetType};
///
/// let spike = Card::sorcery("Lava Spike", Mana::red(1))
///     .with_spell(TargetType::AnyPlayer, Effect::Damage(3));
///
/// assert_eq!(spike.cost.converted(), 1);
/// assert_eq!(spike.spell_abilities().count(), 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub cost: Mana,
    pub kind: CardKind,
    pub prerequisites: Vec<Prerequisite>,
    pub abilities: Vec<Ability>,
}

impl Card {
    /// A card with no cost, prerequisites or abilities.
    pub fn new(name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            name: name.into(),
            cost: Mana::ZERO,
            kind,
            prerequisites: Vec::new(),
            abilities: Vec::new(),
        }
    }

    /// A land that taps for `produces`.
    pub fn land(name: impl Into<String>, produces: Mana) -> Self {
        Self::new(name, CardKind::Land).with_ability(Ability::tap_for_mana(produces))
    }

    pub fn creature(name: impl Into<String>, cost: Mana, power: i64, toughness: i64) -> Self {
        Self::new(name, CardKind::Creature { power, toughness }).with_cost(cost)
    }

    pub fn artifact(name: impl Into<String>, cost: Mana) -> Self {
        Self::new(name, CardKind::Artifact).with_cost(cost)
    }

    pub fn sorcery(name: impl Into<String>, cost: Mana) -> Self {
        Self::new(name, CardKind::Sorcery).with_cost(cost)
    }

    pub fn instant(name: impl Into<String>, cost: Mana) -> Self {
        Self::new(name, CardKind::Instant).with_cost(cost)
    }

    #[must_use]
    pub fn with_cost(mut self, cost: Mana) -> Self {
        self.cost = cost;
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    /// Add a spell ability.
    #[must_use]
    pub fn with_spell(self, target: TargetType, effect: Effect) -> Self {
        self.with_ability(Ability::spell(target, effect))
    }

    #[must_use]
    pub fn with_prerequisite(mut self, prerequisite: Prerequisite) -> Self {
        self.prerequisites.push(prerequisite);
        self
    }

    /// Spell abilities in card order. Each takes one target at cast time.
    pub fn spell_abilities(&self) -> impl Iterator<Item = &Ability> {
        self.abilities
            .iter()
            .filter(|a| matches!(a.kind, AbilityKind::Spell))
    }

    /// Mana produced by tapping this permanent, if it is a mana source.
    #[must_use]
    pub fn mana_output(&self) -> Option<Mana> {
        self.abilities
            .iter()
            .filter(|a| a.is_mana_ability())
            .filter_map(|a| match a.effect {
                Effect::AddMana(mana) => Some(mana),
                _ => None,
            })
            .reduce(|a, b| a + b)
    }

    /// Every data prerequisite holds for `player`.
    #[must_use]
    pub fn prerequisites_met(&self, player: &Player) -> bool {
        self.prerequisites.iter().all(|p| p.is_met(player))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::DeckList;

    #[test]
    fn test_card_id_display() {
        assert_eq!(format!("{}", CardId::new(3)), "Card(3)");
    }

    #[test]
    fn test_kind_predicates() {
        assert!(CardKind::Land.is_permanent());
        assert!(CardKind::Artifact.is_permanent());
        assert!(CardKind::Creature { power: 2, toughness: 2 }.is_creature());
        assert!(!CardKind::Sorcery.is_permanent());
        assert!(CardKind::Instant.is_instant_speed());
        assert!(!CardKind::Sorcery.is_instant_speed());
    }

    #[test]
    fn test_land_has_mana_ability() {
        let mountain = Card::land("Mountain", Mana::red(1));

        assert!(mountain.abilities[0].is_mana_ability());
        assert_eq!(mountain.mana_output(), Some(Mana::red(1)));
        assert_eq!(mountain.spell_abilities().count(), 0);
    }

    #[test]
    fn test_spell_add_mana_is_not_mana_ability() {
        let ritual = Card::instant("Ritual", Mana::red(1))
            .with_spell(TargetType::You, Effect::AddMana(Mana::red(3)));

        assert!(!ritual.abilities[0].is_mana_ability());
        assert_eq!(ritual.mana_output(), None);
    }

    #[test]
    fn test_prerequisites() {
        let card = Card::sorcery("Careful", Mana::ZERO)
            .with_prerequisite(Prerequisite::LifeAtLeast(10))
            .with_prerequisite(Prerequisite::ControlsLand);

        let mut player = Player::new("alice", 20, DeckList::new());
        assert!(!card.prerequisites_met(&player));

        player.battlefield.lands.push_back(crate::cards::CardInstance::land(
            crate::core::InstanceId(0),
            CardId::new(0),
            crate::core::PlayerId::new(0),
            Mana::red(1),
        ));
        assert!(card.prerequisites_met(&player));

        player.life = 9;
        assert!(!card.prerequisites_met(&player));
    }
}
