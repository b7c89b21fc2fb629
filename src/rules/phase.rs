//! Turn structure: stepping through the turn and stopping at decision
//! points.
//!
//! Steps where nobody has a real choice are run through automatically,
//! performing whatever the step mandates. The engine only hands control
//! to players at decision points, which keeps the search tree shallow.

use tracing::trace;

use crate::core::{GameState, Step};

use super::combat;

/// Run forward until a player owes a decision.
///
/// Returns immediately if the current step already is one.
pub fn advance_to_decision_point(state: &mut GameState) {
    while !is_decision_point(state) {
        advance_step(state);
    }
}

/// Move to the next step and perform its turn-based action. Stepping past
/// cleanup ends the turn.
pub fn advance_step(state: &mut GameState) {
    if state.step == Step::Cleanup {
        end_turn(state);
    }
    state.step = state.step.next();
    trace!(step = %state.step, turn = state.turn, active = %state.active_player(), "entering step");
    enter_step(state);
}

/// Does the current step need a player decision?
#[must_use]
pub fn is_decision_point(state: &GameState) -> bool {
    match state.step {
        Step::PrecombatMain | Step::PostcombatMain => true,
        Step::DeclareAttackers => {
            state.combat.declarations == 0
                && !combat::eligible_attackers(state, state.active_player()).is_empty()
        }
        Step::DeclareBlockers | Step::CombatDamage => state.combat.attackers > 0,
        _ => false,
    }
}

fn enter_step(state: &mut GameState) {
    let active = state.active_player();
    match state.step {
        Step::Untap => state.player_mut(active).battlefield.untap_all(),
        Step::Draw => {
            if state.player_mut(active).draw().is_none() {
                tracing::debug!(player = %active, "decked");
            }
        }
        Step::BeginCombat => state.combat = Default::default(),
        Step::CombatDamage => {
            if state.combat.attackers > 0 {
                combat::deal_combat_damage(state);
            }
        }
        _ => {}
    }
}

/// Turn-end bookkeeping, then hand the turn to the next seat.
fn end_turn(state: &mut GameState) {
    for (_, player) in state.players.iter_mut() {
        player.land_played = false;
        player.mana_pool = Default::default();
        player.battlefield.clear_damage();
    }

    let player_count = state.player_count();
    state.priority.next_turn(player_count);
    if state.active_player() == state.starting_player {
        state.turn += 1;
    }
}
