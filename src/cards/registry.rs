//! Card registry for definition lookup.
//!
//! The registry is built once, then shared read-only (behind an `Arc`)
//! by the rules engine, every search and every strategy.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId};
use crate::error::{EngineError, Result};

/// Registry of card definitions.
///
/// Ids are assigned densely in registration order.
///
/// ```
/// use mtg_minimax::cards::{Card, CardRegistry};
/// use mtg_minimax::core::Mana;
///
/// let mut registry = CardRegistry::new();
/// let mountain = registry.register(Card::land("Mountain", Mana::red(1))).unwrap();
///
/// assert_eq!(registry.lookup("Mountain").unwrap(), mountain);
/// assert_eq!(registry.get(mountain).name, "Mountain");
/// assert!(registry.lookup("Forest").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
    by_name: FxHashMap<String, CardId>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition and return its id.
    ///
    /// Names are unique.
    pub fn register(&mut self, card: Card) -> Result<CardId> {
        if self.by_name.contains_key(&card.name) {
            return Err(EngineError::DuplicateCard(card.name));
        }

        let id = CardId::new(self.cards.len() as u32);
        self.by_name.insert(card.name.clone(), id);
        self.cards.push(card);
        Ok(id)
    }

    /// Get a card definition by ID.
    ///
    /// Ids only come from this registry, so an unknown id is an engine bug
    /// and panics.
    #[must_use]
    pub fn get(&self, id: CardId) -> &Card {
        &self.cards[id.raw() as usize]
    }

    /// Find a card's id by name.
    pub fn lookup(&self, name: &str) -> Result<CardId> {
        self.by_name
            .get(name)
            .copied()
            .ok_or_else(|| EngineError::UnknownCard(name.to_string()))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        (id.raw() as usize) < self.cards.len()
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all definitions with their ids.
    pub fn iter(&self) -> impl Iterator<Item = (CardId, &Card)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, card)| (CardId::new(i as u32), card))
    }
}
