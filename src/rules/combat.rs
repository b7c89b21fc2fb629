//! Attacking and combat damage. Blocking is not modeled.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::core::{Action, AttackDeclaration, AttackEnumeration, GameState, InstanceId, PlayerId, Step};

/// The active player still owes an attack declaration this combat.
#[must_use]
pub fn awaiting_attackers(state: &GameState) -> bool {
    state.step == Step::DeclareAttackers && state.combat.declarations == 0
}

/// Largest attacker count `PowerSet` enumerates subsets for.
pub const MAX_POWER_SET_ATTACKERS: usize = 16;

/// Creatures `player` could attack with right now, in battlefield order.
#[must_use]
pub fn eligible_attackers(state: &GameState, player: PlayerId) -> Vec<InstanceId> {
    state
        .player(player)
        .battlefield
        .eligible_attackers()
        .map(|c| c.id)
        .collect()
}

/// Attack actions offered to `player` at the declare-attackers decision.
///
/// `AllEligible` yields a single declaration with every eligible creature.
/// `PowerSet` yields one declaration per subset, the empty one included.
/// Past [`MAX_POWER_SET_ATTACKERS`] it offers only the empty and the full
/// declaration.
#[must_use]
pub fn attack_options(state: &GameState, player: PlayerId, policy: AttackEnumeration) -> Vec<Action> {
    let defender = state.opponent(player);
    let eligible = eligible_attackers(state, player);
    let declare = |attacker| AttackDeclaration { attacker, defender };

    match policy {
        AttackEnumeration::AllEligible => {
            vec![Action::attack(player, eligible.iter().copied().map(declare))]
        }
        AttackEnumeration::PowerSet if eligible.len() > MAX_POWER_SET_ATTACKERS => {
            warn!(%player, eligible = eligible.len(), "too many attackers to enumerate subsets");
            vec![
                Action::attack(player, []),
                Action::attack(player, eligible.iter().copied().map(declare)),
            ]
        }
        AttackEnumeration::PowerSet => (0u64..1 << eligible.len())
            .map(|mask| {
                let chosen = eligible
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| mask & (1 << i) != 0)
                    .map(|(_, &id)| declare(id));
                Action::attack(player, chosen)
            })
            .collect(),
    }
}

/// Tap the declared attackers and point them at their defenders.
/// The declaring player keeps priority.
pub fn declare_attackers(state: &mut GameState, player: PlayerId, attackers: &[AttackDeclaration]) {
    let battlefield = &mut state.player_mut(player).battlefield;
    for declaration in attackers {
        if let Some(creature) = battlefield.find_mut(declaration.attacker) {
            creature.tapped = true;
            creature.attacking = Some(declaration.defender);
        }
    }

    state.combat.declarations += 1;
    state.combat.attackers = attackers.len();
    state.priority.reset_passes();
    debug!(%player, attackers = attackers.len(), "attackers declared");
}

/// Every attacking creature deals its power to the player it attacks,
/// then stops attacking.
pub fn deal_combat_damage(state: &mut GameState) {
    let mut hits: SmallVec<[(PlayerId, i64); 4]> = SmallVec::new();

    for (_, player) in state.players.iter_mut() {
        for creature in player.battlefield.creatures.iter_mut() {
            if let Some(defender) = creature.attacking.take() {
                hits.push((defender, creature.power));
            }
        }
    }

    for (defender, damage) in hits {
        state.player_mut(defender).life -= damage;
        debug!(%defender, damage, "combat damage");
    }
}
