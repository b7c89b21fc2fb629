//! Duel setup.

use std::sync::Arc;

use tracing::info;

use crate::cards::{CardRegistry, DeckList};
use crate::core::{GameConfig, GameRng, GameState, Player, PlayerId, PlayerMap};
use crate::error::{EngineError, Result};
use crate::rules::{advance_to_decision_point, MagicRules};
use crate::strategy::Strategy;

use super::Duel;

struct Seat {
    name: String,
    deck: DeckList,
    strategy: Box<dyn Strategy>,
}

/// Builder for creating a [`Duel`].
///
/// One seat per configured player, in seat order.
pub struct DuelBuilder {
    registry: Arc<CardRegistry>,
    config: GameConfig,
    seats: Vec<Seat>,
    seed: u64,
    starting_player: Option<PlayerId>,
}

impl DuelBuilder {
    pub fn new(registry: Arc<CardRegistry>) -> Self {
        Self {
            registry,
            config: GameConfig::default(),
            seats: Vec::new(),
            seed: 0,
            starting_player: None,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    /// Add the next seat.
    #[must_use]
    pub fn seat(mut self, name: impl Into<String>, deck: DeckList, strategy: impl Strategy + 'static) -> Self {
        self.seats.push(Seat {
            name: name.into(),
            deck,
            strategy: Box::new(strategy),
        });
        self
    }

    /// Seed for library shuffles and the starting player.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Skip the random choice of starting player.
    #[must_use]
    pub fn with_starting_player(mut self, player: PlayerId) -> Self {
        self.starting_player = Some(player);
        self
    }

    /// Shuffle each library, draw opening hands, pick the starting player
    /// and run forward to the first decision.
    pub fn build(self) -> Result<Duel> {
        self.config.validate()?;
        if self.seats.len() != self.config.player_count {
            return Err(EngineError::SeatCountMismatch {
                expected: self.config.player_count,
                actual: self.seats.len(),
            });
        }
        if let Some(player) = self.starting_player.filter(|p| p.index() >= self.config.player_count) {
            return Err(EngineError::InvalidStartingPlayer {
                player: player.index(),
                player_count: self.config.player_count,
            });
        }
        if let Some(seat) = self.seats.iter().find(|seat| seat.deck.is_empty()) {
            return Err(EngineError::EmptyDeck(seat.name.clone()));
        }

        let mut rng = GameRng::new(self.seed);
        let mut players = Vec::with_capacity(self.seats.len());
        let mut strategies = Vec::with_capacity(self.seats.len());

        for seat in self.seats {
            let mut library = seat.deck.expand();
            rng.shuffle(&mut library);

            let mut player = Player::new(seat.name, self.config.starting_life, seat.deck);
            player.library = library.into_iter().collect();
            player.draw_n(self.config.opening_hand_size);

            players.push(player);
            strategies.push(seat.strategy);
        }

        let starting = self
            .starting_player
            .unwrap_or_else(|| PlayerId::new(rng.gen_index(players.len()) as u8));
        let mut state = GameState::new(players, starting);
        advance_to_decision_point(&mut state);

        info!(seed = self.seed, starting = %starting, "duel started");
        Ok(Duel {
            rules: MagicRules::new(self.registry, self.config),
            state,
            strategies: PlayerMap::from_vec(strategies),
            history: Vec::new(),
        })
    }
}
