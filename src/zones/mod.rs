//! Zones a player owns.
//!
//! Library and graveyard are plain ordered `im::Vector<CardId>`s on the
//! player. The two zones with their own behavior live here:
//!
//! - `Hand`: unordered multiset of cards
//! - `Battlefield`: permanents, split into lands, creatures and others

pub mod battlefield;
pub mod hand;

pub use battlefield::Battlefield;
pub use hand::Hand;
