//! Stable identity for permanents.
//!
//! Every card that reaches the battlefield gets a fresh `InstanceId`.
//! Targets and attack declarations refer to permanents by this id, never by
//! their position inside a zone, so reordering a zone between target
//! selection and resolution cannot redirect an effect.
//!
//! ```
//! use mtg_minimax::core::InstanceId;
//!
//! let first = InstanceId::FIRST;
//! assert_eq!(first.next(), InstanceId(1));
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a permanent within one game.
///
/// Ids are allocated from a counter owned by `GameState`, so a copied state
/// keeps allocating the same ids as the state it was copied from. That keeps
/// search branches deterministic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// The first id handed out in a fresh game.
    pub const FIRST: InstanceId = InstanceId(0);

    /// The id allocated after this one.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0 + 1)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
