//! The stack and priority passing.
//!
//! Spells wait on the stack until every player passes priority in
//! succession; then the top one resolves. Resolution itself lives in
//! `rules::resolve`, since it needs the card registry.

mod priority;

pub use priority::Priority;

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{PlayerId, Targets};

/// A spell waiting to resolve.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackObject {
    /// Who cast it. Resolution effects use this as "you".
    pub controller: PlayerId,

    pub card: CardId,

    /// One target per spell ability, chosen at cast time.
    pub targets: Targets,
}

/// LIFO stack of spells. Index 0 is the bottom.
///
/// ```
/// use mtg_minimax::cards::CardId;
/// use mtg_minimax::core::PlayerId;
/// use mtg_minimax::stack::{Stack, StackObject};
///
/// let mut stack = Stack::new();
/// for card in [CardId::new(1), CardId::new(2)] {
///     stack.push(StackObject { controller: PlayerId::new(0), card, targets: Default::default() });
/// }
/// assert_eq!(stack.pop().card, CardId::new(2));
/// assert_eq!(stack.pop().card, CardId::new(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    entries: Vector<StackObject>,
}

impl Stack {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, object: StackObject) {
        self.entries.push_back(object);
    }

    /// Remove the top object.
    ///
    /// Panics when the stack is empty: something asked for a resolution
    /// that the priority rules never allow.
    pub fn pop(&mut self) -> StackObject {
        match self.entries.pop_back() {
            Some(object) => object,
            None => panic!("stack underflow: resolve called with an empty stack"),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Bottom to top.
    pub fn iter(&self) -> impl Iterator<Item = &StackObject> {
        self.entries.iter()
    }
}
