//! Complete game state.
//!
//! `GameState` is plain data. The rules that move it forward live in
//! `rules`; the state only offers lookups and a few bookkeeping helpers.
//!
//! Cloning is cheap: players' zones and the stack are `im` persistent
//! collections, so a clone shares structure with its source and neither
//! side can observe the other's later mutations. The search depends on
//! this for every branch it explores.

use serde::{Deserialize, Serialize};

use crate::cards::CardInstance;
use crate::stack::{Priority, Stack};

use super::entity::InstanceId;
use super::player::{Player, PlayerId, PlayerMap};
use super::step::Step;

/// Per-combat progress counters. Reset at the beginning of combat.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatState {
    /// Attack declarations made this combat (0 or 1).
    pub declarations: u32,

    /// Creatures attacking this combat.
    pub attackers: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub players: PlayerMap<Player>,
    pub stack: Stack,
    pub step: Step,

    /// Turn number (starts at 1). Increments when play returns to the
    /// starting player.
    pub turn: u32,

    /// Active player, priority holder and consecutive passes.
    pub priority: Priority,
    pub starting_player: PlayerId,
    pub combat: CombatState,

    next_instance: InstanceId,
}

impl GameState {
    /// A game at the first main phase of turn 1, `starting_player` active.
    ///
    /// Libraries and hands are taken as given; shuffling and opening
    /// hands are the caller's business.
    #[must_use]
    pub fn new(players: Vec<Player>, starting_player: PlayerId) -> Self {
        Self {
            players: PlayerMap::from_vec(players),
            stack: Stack::new(),
            step: Step::PrecombatMain,
            turn: 1,
            priority: Priority::new(starting_player),
            starting_player,
            combat: CombatState::default(),
            next_instance: InstanceId::FIRST,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    #[must_use]
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id]
    }

    pub fn player_mut(&mut self, id: PlayerId) -> &mut Player {
        &mut self.players[id]
    }

    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.priority.active()
    }

    #[must_use]
    pub fn priority_player(&self) -> PlayerId {
        self.priority.holder()
    }

    #[must_use]
    pub fn opponent(&self, id: PlayerId) -> PlayerId {
        id.opponent(self.player_count())
    }

    /// Hand out a fresh permanent id.
    pub fn allocate_instance(&mut self) -> InstanceId {
        let id = self.next_instance;
        self.next_instance = id.next();
        id
    }

    /// Main phase, empty stack, and `player` is the active player.
    #[must_use]
    pub fn is_sorcery_speed(&self, player: PlayerId) -> bool {
        self.step.is_main_phase() && self.stack.is_empty() && self.active_player() == player
    }

    /// Find a permanent on any battlefield.
    #[must_use]
    pub fn find_permanent(&self, id: InstanceId) -> Option<(PlayerId, &CardInstance)> {
        self.players
            .iter()
            .find_map(|(pid, player)| player.battlefield.find(id).map(|card| (pid, card)))
    }

    /// Players whose life is at or below zero, or who decked.
    #[must_use]
    pub fn losers(&self) -> Vec<PlayerId> {
        self.players
            .iter()
            .filter(|(_, p)| p.has_lost())
            .map(|(id, _)| id)
            .collect()
    }

    /// State-based check: the game is over once anyone has lost.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.players.iter().any(|(_, p)| p.has_lost())
    }
}
