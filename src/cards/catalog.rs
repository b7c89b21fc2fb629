//! Built-in card pool and the reference deck.

use super::deck::DeckList;
use super::definition::{Ability, Card, Prerequisite};
use super::registry::CardRegistry;
use crate::core::Mana;
use crate::effects::{Effect, TargetType};
use crate::error::Result;

pub const MOUNTAIN: &str = "Mountain";
pub const ISLAND: &str = "Island";
pub const LAVA_SPIKE: &str = "Lava Spike";
pub const FLAME_RIFT: &str = "Flame Rift";
pub const DIVINATION: &str = "Divination";
pub const LIGHTNING_BOLT: &str = "Lightning Bolt";
pub const SHOCK: &str = "Shock";
pub const DESPERATE_RITUAL: &str = "Desperate Ritual";
pub const FALKENRATH_REAVER: &str = "Falkenrath Reaver";
pub const MIND_STONE: &str = "Mind Stone";

/// Every card this crate knows about.
pub fn standard_cards() -> Result<Vec<Card>> {
    Ok(vec![
        Card::land(MOUNTAIN, Mana::red(1)),
        Card::land(ISLAND, Mana::blue(1)),
        Card::sorcery(LAVA_SPIKE, Mana::parse("R")?)
            .with_spell(TargetType::AnyPlayer, Effect::Damage(3)),
        Card::sorcery(FLAME_RIFT, Mana::parse("1R")?)
            .with_spell(TargetType::EachPlayer, Effect::Damage(4)),
        Card::sorcery(DIVINATION, Mana::parse("2U")?)
            .with_spell(TargetType::You, Effect::Draw(2)),
        Card::instant(LIGHTNING_BOLT, Mana::parse("R")?)
            .with_spell(TargetType::AnyPlayer, Effect::Damage(3)),
        Card::instant(SHOCK, Mana::parse("R")?)
            .with_spell(TargetType::AnyCreature, Effect::Damage(2)),
        Card::instant(DESPERATE_RITUAL, Mana::parse("1R")?)
            .with_spell(TargetType::You, Effect::AddMana(Mana::red(3))),
        Card::creature(FALKENRATH_REAVER, Mana::parse("1R")?, 2, 2),
        Card::artifact(MIND_STONE, Mana::parse("2")?)
            .with_ability(Ability::tap_for_mana(Mana::colorless(1)))
            .with_prerequisite(Prerequisite::ControlsLand),
    ])
}

/// A registry holding [`standard_cards`].
///
/// ```
/// use mtg_minimax::cards::catalog;
///
/// let registry = catalog::standard_registry().unwrap();
/// assert!(registry.lookup(catalog::LAVA_SPIKE).is_ok());
/// ```
pub fn standard_registry() -> Result<CardRegistry> {
    let mut registry = CardRegistry::new();
    for card in standard_cards()? {
        registry.register(card)?;
    }
    Ok(registry)
}

/// The 30-card mono-red burn deck.
pub fn burn_deck(registry: &CardRegistry) -> Result<DeckList> {
    DeckList::from_names(
        registry,
        &[
            (MOUNTAIN, 12),
            (LAVA_SPIKE, 9),
            (FLAME_RIFT, 3),
            (FALKENRATH_REAVER, 6),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardKind;

    #[test]
    fn test_standard_registry() {
        let registry = standard_registry().unwrap();
        assert_eq!(registry.len(), 10);

        let spike = registry.get(registry.lookup(LAVA_SPIKE).unwrap());
        assert_eq!(spike.cost, Mana::red(1));
        assert_eq!(spike.kind, CardKind::Sorcery);

        let reaver = registry.get(registry.lookup(FALKENRATH_REAVER).unwrap());
        assert_eq!(reaver.kind, CardKind::Creature { power: 2, toughness: 2 });
    }

    #[test]
    fn test_mind_stone_is_mana_source() {
        let registry = standard_registry().unwrap();
        let stone = registry.get(registry.lookup(MIND_STONE).unwrap());

        assert_eq!(stone.mana_output(), Some(Mana::colorless(1)));
        assert_eq!(stone.kind, CardKind::Artifact);
    }

    #[test]
    fn test_burn_deck() {
        let registry = standard_registry().unwrap();
        let deck = burn_deck(&registry).unwrap();

        assert_eq!(deck.len(), 30);
        assert_eq!(deck.count(registry.lookup(MOUNTAIN).unwrap()), 12);
        assert_eq!(deck.count(registry.lookup(FLAME_RIFT).unwrap()), 3);
    }
}
