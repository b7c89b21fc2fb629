//! Deck lists: a multiset of cards with counts.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use super::definition::CardId;
use super::registry::CardRegistry;
use crate::error::Result;

/// Card counts making up a deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    cards: OrdMap<CardId, u32>,
}

impl DeckList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, count)` pairs.
    pub fn from_names(registry: &CardRegistry, entries: &[(&str, u32)]) -> Result<Self> {
        let mut deck = DeckList::new();
        for &(name, count) in entries {
            deck.add(registry.lookup(name)?, count);
        }
        Ok(deck)
    }

    /// Add `count` copies of `card`.
    pub fn add(&mut self, card: CardId, count: u32) {
        if count == 0 {
            return;
        }
        *self.cards.entry(card).or_insert(0) += count;
    }

    #[must_use]
    pub fn count(&self, card: CardId) -> u32 {
        self.cards.get(&card).copied().unwrap_or(0)
    }

    /// Total cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.values().map(|&n| n as usize).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Each distinct card once, in id order.
    pub fn distinct(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.keys().copied()
    }

    /// One entry per copy, in id order. Shuffle before use as a library.
    #[must_use]
    pub fn expand(&self) -> Vec<CardId> {
        self.cards
            .iter()
            .flat_map(|(&card, &count)| std::iter::repeat(card).take(count as usize))
            .collect()
    }
}
