//! Priority tracking (MTG-style).
//!
//! Players pass priority in seat order. When every player has passed in
//! succession, the caller either resolves the top of the stack or moves
//! the game to the next step. Either way the active player gets priority
//! back afterwards.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Whose turn it is, who may act, and how many passes in a row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    /// Player whose turn it is.
    active: PlayerId,

    /// Player who currently has priority.
    holder: PlayerId,

    /// Players who have passed since the last non-pass action,
    /// resolution or step change.
    consecutive_passes: usize,
}

impl Priority {
    /// Start a turn with `active` holding priority.
    #[must_use]
    pub fn new(active: PlayerId) -> Self {
        Self {
            active,
            holder: active,
            consecutive_passes: 0,
        }
    }

    #[must_use]
    pub fn active(&self) -> PlayerId {
        self.active
    }

    #[must_use]
    pub fn holder(&self) -> PlayerId {
        self.holder
    }

    #[must_use]
    pub fn passes(&self) -> usize {
        self.consecutive_passes
    }

    /// The holder passes; priority moves to the next seat.
    ///
    /// Returns `true` once every player has passed in succession. The
    /// counter is cleared in that case and the caller is expected to
    /// resolve or advance, then call [`Priority::return_to_active`].
    pub fn pass(&mut self, player_count: usize) -> bool {
        self.consecutive_passes += 1;
        self.holder = self.holder.next(player_count);

        if self.consecutive_passes >= player_count {
            self.consecutive_passes = 0;
            true
        } else {
            false
        }
    }

    /// Any non-pass action. The acting player keeps priority.
    pub fn reset_passes(&mut self) {
        self.consecutive_passes = 0;
    }

    /// After a resolution or a step change.
    pub fn return_to_active(&mut self) {
        self.holder = self.active;
        self.consecutive_passes = 0;
    }

    /// Hand the turn to the next seat.
    pub fn next_turn(&mut self, player_count: usize) {
        self.active = self.active.next(player_count);
        self.holder = self.active;
        self.consecutive_passes = 0;
    }
}
