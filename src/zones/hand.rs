//! A player's hand.

use im::OrdMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Unordered multiset of cards in hand.
///
/// ```
/// use mtg_minimax::cards::CardId;
/// use mtg_minimax::zones::Hand;
///
/// let mut hand = Hand::new();
/// hand.add(CardId::new(2));
/// hand.add(CardId::new(2));
/// hand.add(CardId::new(0));
///
/// assert_eq!(hand.len(), 3);
/// assert_eq!(hand.distinct().collect::<Vec<_>>(), vec![CardId::new(0), CardId::new(2)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: OrdMap<CardId, u32>,
    size: usize,
}

impl Hand {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, card: CardId) {
        *self.cards.entry(card).or_insert(0) += 1;
        self.size += 1;
    }

    /// Remove one copy of `card`. Returns whether a copy was present.
    pub fn remove_one(&mut self, card: CardId) -> bool {
        let remaining = match self.cards.get(&card) {
            Some(&count) => count - 1,
            None => return false,
        };

        if remaining == 0 {
            self.cards.remove(&card);
        } else {
            self.cards.insert(card, remaining);
        }
        self.size -= 1;
        true
    }

    /// Remove whichever card sorts first. Used when a hypothetical play
    /// names a card that the real hand does not hold: some hidden card
    /// still leaves the hand.
    pub fn remove_any(&mut self) -> Option<CardId> {
        let card = self.cards.keys().next().copied()?;
        self.remove_one(card);
        Some(card)
    }

    #[must_use]
    pub fn count(&self, card: CardId) -> u32 {
        self.cards.get(&card).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains_key(&card)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Each distinct card once, in id order.
    pub fn distinct(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.keys().copied()
    }
}

impl FromIterator<CardId> for Hand {
    fn from_iter<I: IntoIterator<Item = CardId>>(iter: I) -> Self {
        let mut hand = Hand::new();
        for card in iter {
            hand.add(card);
        }
        hand
    }
}
