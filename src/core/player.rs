//! Player identification and per-player data.
//!
//! ## PlayerId
//!
//! Seat index, 0-based. Opponents are computed from the seat index rather
//! than stored as references, so a `GameState` never holds a cycle.
//!
//! ## PlayerMap
//!
//! Per-player storage backed by `Vec` for O(1) access by `PlayerId`.
//!
//! ## Player
//!
//! Everything a single player owns: life, zones, mana pool and the
//! per-turn flags.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use im::Vector;

use crate::cards::{CardId, DeckList};
use crate::zones::{Battlefield, Hand};

use super::mana::Mana;

/// Player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The seat after this one, wrapping around the table.
    ///
    /// In a two-player game this is the opponent.
    ///
    /// ```
    /// use mtg_minimax::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).next(2), PlayerId::new(1));
    /// assert_eq!(PlayerId::new(1).next(2), PlayerId::new(0));
    /// assert_eq!(PlayerId::new(2).next(4), PlayerId::new(3));
    /// ```
    #[must_use]
    pub fn next(self, player_count: usize) -> PlayerId {
        PlayerId(((self.index() + 1) % player_count) as u8)
    }

    /// The opponent this player attacks and measures itself against.
    #[must_use]
    pub fn opponent(self, player_count: usize) -> PlayerId {
        self.next(player_count)
    }

    /// Iterate over all player IDs for a game with `player_count` players.
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use mtg_minimax::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<i64> = PlayerMap::new(2, |_| 20);
/// life[PlayerId::new(1)] -= 3;
/// assert_eq!(life[PlayerId::new(1)], 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Build from one value per seat, in seat order.
    pub fn from_vec(data: Vec<T>) -> Self {
        assert!(!data.is_empty(), "Must have at least 1 player");
        assert!(data.len() <= 255, "At most 255 players supported");
        Self { data }
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data.
    ///
    /// Panics on an out-of-range player; that is an engine bug.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over all player IDs.
    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> {
        (0..self.data.len() as u8).map(PlayerId)
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

/// One player's side of the table.
///
/// Hand, library and graveyard hold card identities; a card lives in
/// exactly one of them (or on the battlefield as a `CardInstance`) at a time.
/// All zones are persistent collections, so cloning a `Player` shares
/// structure with the original until one side is modified.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub life: i64,
    pub hand: Hand,

    /// Front is the top of the library.
    pub library: Vector<CardId>,
    pub battlefield: Battlefield,
    pub graveyard: Vector<CardId>,

    /// Floating mana. Emptied at end of turn.
    pub mana_pool: Mana,
    pub land_played: bool,

    /// Set when the player tried to draw from an empty library.
    pub decked: bool,

    /// The list the library was built from. Public knowledge; the search
    /// uses it as the universe of cards a hidden hand might contain.
    pub deck_list: DeckList,
}

impl Player {
    /// A player with an empty library and the given deck list.
    pub fn new(name: impl Into<String>, life: i64, deck_list: DeckList) -> Self {
        Self {
            name: name.into(),
            life,
            hand: Hand::new(),
            library: Vector::new(),
            battlefield: Battlefield::new(),
            graveyard: Vector::new(),
            mana_pool: Mana::ZERO,
            land_played: false,
            decked: false,
            deck_list,
        }
    }

    /// Draw the top card of the library into the hand.
    ///
    /// Drawing from an empty library sets `decked` and returns `None`.
    pub fn draw(&mut self) -> Option<CardId> {
        match self.library.pop_front() {
            Some(card) => {
                self.hand.add(card);
                Some(card)
            }
            None => {
                self.decked = true;
                None
            }
        }
    }

    /// Draw `count` cards, stopping early if the library runs out.
    pub fn draw_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.draw().is_none() {
                break;
            }
        }
    }

    /// Floating mana plus everything the untapped mana sources can produce.
    #[must_use]
    pub fn available_mana(&self) -> Mana {
        self.battlefield
            .mana_sources()
            .fold(self.mana_pool, |total, source| total + source.produces())
    }

    /// Life at or below zero, or decked.
    #[must_use]
    pub fn has_lost(&self) -> bool {
        self.life <= 0 || self.decked
    }
}
