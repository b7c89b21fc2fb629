//! A hard-coded plan for simple burn decks.

use crate::cards::{Card, CardId};
use crate::core::{Action, AttackDeclaration, GameState, PlayerId, Step, Targets};
use crate::effects::{Effect, Target, TargetType};
use crate::rules::{can_play, combat, MagicRules};

use super::Strategy;

/// Does nothing until the postcombat main phase of its own turn, then
/// plays the first card that fits, in this order:
///
/// 1. a land
/// 2. a creature or other permanent
/// 3. damage aimed at an opponent
/// 4. damage to every player, only while above 4 life and not behind
/// 5. a spell that targets itself (card draw, life gain)
///
/// Always attacks with everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScriptedStrategy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Plan {
    Land,
    Permanent,
    Burn,
    Sweep,
    Cantrip,
}

const PLAN_ORDER: [Plan; 5] = [Plan::Land, Plan::Permanent, Plan::Burn, Plan::Sweep, Plan::Cantrip];

impl Strategy for ScriptedStrategy {
    fn next_action(&mut self, rules: &MagicRules, state: &GameState, player: PlayerId) -> Action {
        if state.step != Step::PostcombatMain || !state.is_sorcery_speed(player) {
            return Action::pass(player);
        }

        let registry = rules.registry();
        let playable: Vec<(CardId, &Card)> = state
            .player(player)
            .hand
            .distinct()
            .map(|id| (id, registry.get(id)))
            .filter(|(_, card)| can_play(state, player, card))
            .collect();

        for plan in PLAN_ORDER {
            if plan == Plan::Sweep && !safe_to_sweep(state, player) {
                continue;
            }
            let candidates = playable.iter().filter(|(_, card)| classify(card) == Some(plan));
            for &(card, definition) in candidates {
                if let Some(targets) = aim(definition, state, player) {
                    return Action::Cast {
                        player,
                        card,
                        targets,
                    };
                }
            }
        }

        Action::pass(player)
    }

    fn declare_attackers(&mut self, _: &MagicRules, state: &GameState, player: PlayerId) -> Action {
        let defender = state.opponent(player);
        let attackers = combat::eligible_attackers(state, player)
            .into_iter()
            .map(|attacker| AttackDeclaration { attacker, defender });
        Action::attack(player, attackers)
    }
}

fn classify(card: &Card) -> Option<Plan> {
    if card.kind.is_land() {
        return Some(Plan::Land);
    }
    if card.kind.is_permanent() {
        return Some(Plan::Permanent);
    }

    let ability = card.spell_abilities().next()?;
    match (ability.target, ability.effect) {
        (TargetType::AnyPlayer | TargetType::Opponent, Effect::Damage(_)) => Some(Plan::Burn),
        (TargetType::EachPlayer, Effect::Damage(_)) => Some(Plan::Sweep),
        (TargetType::You, Effect::Draw(_) | Effect::GainLife(_)) => Some(Plan::Cantrip),
        _ => None,
    }
}

/// Above 4 life and at least as healthy as every opponent.
fn safe_to_sweep(state: &GameState, player: PlayerId) -> bool {
    let life = state.player(player).life;
    life > 4
        && state
            .players
            .iter()
            .filter(|(id, _)| *id != player)
            .all(|(_, other)| life >= other.life)
}

/// Point every spell ability away from ourselves where there is a choice.
/// `None` if a creature target is needed and the opponent has none.
fn aim(card: &Card, state: &GameState, player: PlayerId) -> Option<Targets> {
    let opponent = state.opponent(player);
    card.spell_abilities()
        .map(|ability| match ability.target {
            TargetType::You => Some(Target::Player(player)),
            TargetType::AnyPlayer | TargetType::Opponent => Some(Target::Player(opponent)),
            TargetType::EachPlayer => Some(Target::EachPlayer),
            TargetType::AnyCreature => state
                .player(opponent)
                .battlefield
                .creatures
                .front()
                .map(|creature| Target::Permanent(creature.id)),
        })
        .collect()
}
