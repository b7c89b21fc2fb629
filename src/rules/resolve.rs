//! Applying actions: priority passing, casting, stack resolution.
//!
//! Nothing here re-checks legality. Actions are expected to come from the
//! generator; the driver asserts that in debug builds.

use tracing::debug;

use crate::cards::{CardId, CardInstance, CardKind, CardRegistry};
use crate::core::{Action, GameState, PlayerId, Targets};
use crate::effects::apply_effect;
use crate::stack::StackObject;

use super::combat;
use super::payment::{apply_payment, greedy_payment, ManaPayment};
use super::phase;

/// Apply `action`. Casts are paid with `payment`, or with the greedy
/// tapper when none is given.
///
/// Panics on a Block action, which is reserved.
pub fn apply_action(
    registry: &CardRegistry,
    state: &mut GameState,
    action: &Action,
    payment: Option<&ManaPayment>,
) {
    match action {
        Action::Pass { .. } => pass_priority(registry, state),
        Action::Cast {
            player,
            card,
            targets,
        } => cast(registry, state, *player, *card, targets, payment),
        Action::Attack { player, attackers } => combat::declare_attackers(state, *player, attackers),
        Action::Block { .. } => panic!("blocking is not supported"),
    }
}

/// The priority holder passes. Once everyone has passed in a row, the top
/// of the stack resolves, or with an empty stack the game moves on to the
/// next decision point. Either way the active player then gets priority.
fn pass_priority(registry: &CardRegistry, state: &mut GameState) {
    let player_count = state.player_count();
    if !state.priority.pass(player_count) {
        return;
    }

    if state.stack.is_empty() {
        phase::advance_step(state);
        phase::advance_to_decision_point(state);
    } else {
        resolve_top(registry, state);
    }
    state.priority.return_to_active();
}

fn cast(
    registry: &CardRegistry,
    state: &mut GameState,
    player: PlayerId,
    card: CardId,
    targets: &Targets,
    payment: Option<&ManaPayment>,
) {
    let definition = registry.get(card);
    state.priority.reset_passes();

    let caster = state.player_mut(player);
    if !caster.hand.remove_one(card) {
        // A hypothetical play of a card the hand may or may not hold.
        caster.hand.remove_any();
    }

    let greedy;
    let payment = match payment {
        Some(payment) => payment,
        None => {
            greedy = greedy_payment(caster, definition.cost).unwrap_or_else(|| {
                panic!("{} cannot afford {}", caster.name, definition.name)
            });
            &greedy
        }
    };
    apply_payment(caster, payment, definition.cost);

    if definition.kind.is_land() {
        // Lands have no response window: they never use the stack.
        let id = state.allocate_instance();
        let land = CardInstance::new(id, card, definition, player);
        let caster = state.player_mut(player);
        caster.battlefield.enter(land, definition.kind);
        caster.land_played = true;
        debug!(%player, card = %definition.name, "land played");
    } else {
        state.stack.push(StackObject {
            controller: player,
            card,
            targets: targets.clone(),
        });
        debug!(%player, card = %definition.name, depth = state.stack.len(), "spell cast");
    }
}

/// Pop the top of the stack and resolve it: permanents enter the
/// battlefield, other spells go to the graveyard, then each spell ability
/// applies its effect to its chosen target.
///
/// Panics on an empty stack.
pub fn resolve_top(registry: &CardRegistry, state: &mut GameState) {
    let object = state.stack.pop();
    let definition = registry.get(object.card);
    let controller = object.controller;

    match definition.kind {
        CardKind::Land => panic!("{} is a land and can't be on the stack", definition.name),
        kind if kind.is_permanent() => {
            let id = state.allocate_instance();
            let permanent = CardInstance::new(id, object.card, definition, controller);
            state.player_mut(controller).battlefield.enter(permanent, kind);
        }
        _ => state.player_mut(controller).graveyard.push_back(object.card),
    }

    for (ability, &target) in definition.spell_abilities().zip(object.targets.iter()) {
        apply_effect(state, ability.effect, target);
    }
    debug!(player = %controller, card = %definition.name, "resolved");
}
