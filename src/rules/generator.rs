//! Legal action generation.
//!
//! Given a position and a player, list every action that player may take.
//! Pass is always included whenever the player holds priority and no
//! attack declaration is pending, so the result is never empty for the
//! priority holder.

use crate::cards::{Card, CardId, CardRegistry};
use crate::core::{Action, GameConfig, GameState, PlayerId};
use crate::effects::target_combinations;

use super::combat;

/// Every legal action for `player`.
///
/// Empty if `player` doesn't hold priority. Order is deterministic: Pass,
/// then casts by card id, then target combinations left to right.
#[must_use]
pub fn legal_actions(
    registry: &CardRegistry,
    config: &GameConfig,
    state: &GameState,
    player: PlayerId,
) -> Vec<Action> {
    if state.priority_player() != player {
        return Vec::new();
    }
    if combat::awaiting_attackers(state) {
        return combat::attack_options(state, player, config.attack_enumeration);
    }

    let hand = &state.player(player).hand;
    cast_actions(registry, state, player, hand.distinct())
}

/// The actions `player` might have, to an observer who can't see their hand.
///
/// A non-empty hand is assumed to hold any card of the player's deck list;
/// an empty hand only allows passing. The result is a superset of what the
/// player can actually do whenever their hand is drawn from that list.
#[must_use]
pub fn worst_case_actions(
    registry: &CardRegistry,
    config: &GameConfig,
    state: &GameState,
    player: PlayerId,
) -> Vec<Action> {
    if state.priority_player() != player {
        return Vec::new();
    }
    if combat::awaiting_attackers(state) {
        return combat::attack_options(state, player, config.attack_enumeration);
    }

    let hidden = state.player(player);
    if hidden.hand.is_empty() {
        return vec![Action::pass(player)];
    }
    cast_actions(registry, state, player, hidden.deck_list.distinct())
}

fn cast_actions(
    registry: &CardRegistry,
    state: &GameState,
    player: PlayerId,
    candidates: impl Iterator<Item = CardId>,
) -> Vec<Action> {
    let mut actions = vec![Action::pass(player)];

    for card_id in candidates {
        let card = registry.get(card_id);
        if !can_play(state, player, card) {
            continue;
        }
        for targets in target_combinations(card, state, player) {
            actions.push(Action::Cast {
                player,
                card: card_id,
                targets,
            });
        }
    }

    actions
}

/// Timing, affordability and prerequisites, ignoring whether the card is
/// actually in hand.
///
/// Instants may be cast whenever the player holds priority. Everything
/// else needs sorcery speed, and a land additionally needs the turn's
/// land drop to be unused.
#[must_use]
pub fn can_play(state: &GameState, player: PlayerId, card: &Card) -> bool {
    let caster = state.player(player);

    let timing = if card.kind.is_instant_speed() {
        true
    } else if card.kind.is_land() {
        state.is_sorcery_speed(player) && !caster.land_played
    } else {
        state.is_sorcery_speed(player)
    };

    timing && caster.available_mana().covers(card.cost) && card.prerequisites_met(caster)
}

/// Would the generator offer this action? Used as a debug-build check on
/// strategy output. Any subset of the eligible attackers, each attacking
/// some other player, is accepted.
#[must_use]
pub fn is_legal(registry: &CardRegistry, config: &GameConfig, state: &GameState, action: &Action) -> bool {
    let player = action.player();
    if state.priority_player() != player {
        return false;
    }

    match action {
        Action::Attack { attackers, .. } => {
            if !combat::awaiting_attackers(state) || state.active_player() != player {
                return false;
            }
            let eligible = combat::eligible_attackers(state, player);
            let distinct = attackers
                .iter()
                .enumerate()
                .all(|(i, a)| attackers[..i].iter().all(|b| b.attacker != a.attacker));

            distinct
                && attackers.iter().all(|a| {
                    eligible.contains(&a.attacker)
                        && a.defender != player
                        && a.defender.index() < state.player_count()
                })
        }
        Action::Block { .. } => false,
        _ => legal_actions(registry, config, state, player).contains(action),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{catalog, CardInstance};
    use crate::core::{InstanceId, Mana, Player, Step};
    use crate::effects::Target;

    struct Fixture {
        registry: CardRegistry,
        config: GameConfig,
        state: GameState,
    }

    impl Fixture {
        fn new() -> Self {
            let registry = catalog::standard_registry().unwrap();
            let deck = catalog::burn_deck(&registry).unwrap();
            let players = vec![
                Player::new("alice", 20, deck.clone()),
                Player::new("bob", 20, deck),
            ];
            Self {
                registry,
                config: GameConfig::default(),
                state: GameState::new(players, PlayerId::new(0)),
            }
        }

        fn id(&self, name: &str) -> CardId {
            self.registry.lookup(name).unwrap()
        }

        fn give(&mut self, player: PlayerId, name: &str) {
            let id = self.id(name);
            self.state.player_mut(player).hand.add(id);
        }

        fn mountain(&mut self, player: PlayerId) {
            let id = self.state.allocate_instance();
            let card = self.id(catalog::MOUNTAIN);
            let land = CardInstance::land(id, card, player, Mana::red(1));
            self.state.player_mut(player).battlefield.lands.push_back(land);
        }

        fn actions(&self, player: PlayerId) -> Vec<Action> {
            legal_actions(&self.registry, &self.config, &self.state, player)
        }
    }

    const P0: PlayerId = PlayerId::new(0);
    const P1: PlayerId = PlayerId::new(1);

    #[test]
    fn test_empty_hand_only_passes() {
        let fx = Fixture::new();
        assert_eq!(fx.actions(P0), vec![Action::pass(P0)]);
    }

    #[test]
    fn test_non_priority_player_has_no_actions() {
        let fx = Fixture::new();
        assert!(fx.actions(P1).is_empty());
    }

    #[test]
    fn test_lava_spike_targets_each_player() {
        let mut fx = Fixture::new();
        fx.give(P0, catalog::LAVA_SPIKE);
        fx.mountain(P0);
        let spike = fx.id(catalog::LAVA_SPIKE);

        let actions = fx.actions(P0);
        assert_eq!(actions.len(), 3);
        assert!(actions.contains(&Action::cast(P0, spike, [Target::Player(P0)])));
        assert!(actions.contains(&Action::cast(P0, spike, [Target::Player(P1)])));
    }

    #[test]
    fn test_unaffordable_card_excluded() {
        let mut fx = Fixture::new();
        fx.give(P0, catalog::LAVA_SPIKE);
        assert_eq!(fx.actions(P0), vec![Action::pass(P0)]);
    }

    #[test]
    fn test_land_drop_once_per_turn() {
        let mut fx = Fixture::new();
        fx.give(P0, catalog::MOUNTAIN);
        assert_eq!(fx.actions(P0).len(), 2);

        fx.state.player_mut(P0).land_played = true;
        assert_eq!(fx.actions(P0).len(), 1);
    }

    #[test]
    fn test_sorcery_needs_empty_stack_but_instant_does_not() {
        let mut fx = Fixture::new();
        fx.give(P0, catalog::LAVA_SPIKE);
        fx.give(P0, catalog::LIGHTNING_BOLT);
        fx.mountain(P0);
        fx.state.stack.push(crate::stack::StackObject {
            controller: P1,
            card: fx.id(catalog::LAVA_SPIKE),
            targets: Default::default(),
        });

        let bolt = fx.id(catalog::LIGHTNING_BOLT);
        let actions = fx.actions(P0);
        assert_eq!(actions.len(), 3);
        assert!(actions.iter().skip(1).all(|a| a.card() == Some(bolt)));
    }

    #[test]
    fn test_sorcery_only_for_active_player() {
        let mut fx = Fixture::new();
        fx.give(P1, catalog::LAVA_SPIKE);
        fx.mountain(P1);
        fx.state.priority.pass(2);

        assert_eq!(fx.actions(P1), vec![Action::pass(P1)]);
    }

    #[test]
    fn test_prerequisite_blocks_cast() {
        let mut fx = Fixture::new();
        fx.give(P0, catalog::MIND_STONE);
        fx.state.player_mut(P0).mana_pool = Mana::colorless(2);
        assert_eq!(fx.actions(P0).len(), 1);

        fx.mountain(P0);
        assert_eq!(fx.actions(P0).len(), 2);
    }

    #[test]
    fn test_worst_case_uses_deck_list() {
        let mut fx = Fixture::new();
        fx.give(P0, catalog::MOUNTAIN);
        fx.mountain(P0);
        fx.mountain(P0);

        let real = fx.actions(P0);
        let assumed = worst_case_actions(&fx.registry, &fx.config, &fx.state, P0);

        // Mountain, Lava Spike (2 targets), Flame Rift, Falkenrath Reaver.
        assert_eq!(real.len(), 2);
        assert_eq!(assumed.len(), 6);
        assert!(real.iter().all(|a| assumed.contains(a)));
    }

    #[test]
    fn test_worst_case_empty_hand_passes() {
        let mut fx = Fixture::new();
        fx.mountain(P0);
        assert_eq!(
            worst_case_actions(&fx.registry, &fx.config, &fx.state, P0),
            vec![Action::pass(P0)]
        );
    }

    #[test]
    fn test_attack_decision_replaces_pass() {
        let mut fx = Fixture::new();
        let reaver = fx.registry.get(fx.id(catalog::FALKENRATH_REAVER)).clone();
        let id = fx.state.allocate_instance();
        let mut creature = CardInstance::new(id, fx.id(catalog::FALKENRATH_REAVER), &reaver, P0);
        creature.summoning_sick = false;
        fx.state.player_mut(P0).battlefield.enter(creature, reaver.kind);
        fx.state.step = Step::DeclareAttackers;

        let actions = fx.actions(P0);
        assert_eq!(actions.len(), 1);
        assert!(matches!(&actions[0], Action::Attack { attackers, .. } if attackers.len() == 1));

        assert!(is_legal(&fx.registry, &fx.config, &fx.state, &actions[0]));
        assert!(is_legal(&fx.registry, &fx.config, &fx.state, &Action::attack(P0, [])));
        assert!(!is_legal(&fx.registry, &fx.config, &fx.state, &Action::pass(P0)));

        let bogus = Action::attack(
            P0,
            [crate::core::AttackDeclaration { attacker: InstanceId(99), defender: P1 }],
        );
        assert!(!is_legal(&fx.registry, &fx.config, &fx.state, &bogus));
    }

    #[test]
    fn test_is_legal_rejects_card_not_in_hand() {
        let mut fx = Fixture::new();
        fx.mountain(P0);
        let spike = fx.id(catalog::LAVA_SPIKE);
        let cast = Action::cast(P0, spike, [Target::Player(P1)]);

        assert!(!is_legal(&fx.registry, &fx.config, &fx.state, &cast));
        fx.give(P0, catalog::LAVA_SPIKE);
        assert!(is_legal(&fx.registry, &fx.config, &fx.state, &cast));
        assert!(!is_legal(&fx.registry, &fx.config, &fx.state, &Action::Block { player: P0 }));
    }
}
