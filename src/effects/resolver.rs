//! Applying effects to game state.

use tracing::{debug, trace};

use crate::core::{GameState, PlayerId};

use super::effect::Effect;
use super::targeting::Target;

/// Apply `effect` to `target`.
///
/// A permanent target that has left the battlefield since it was chosen
/// is skipped. Damage that reaches a creature's toughness destroys it.
pub fn apply_effect(state: &mut GameState, effect: Effect, target: Target) {
    match target {
        Target::Player(player) => apply_to_player(state, effect, player),
        Target::EachPlayer => {
            for player in PlayerId::all(state.player_count()) {
                apply_to_player(state, effect, player);
            }
        }
        Target::Permanent(id) => {
            let Effect::Damage(amount) = effect else {
                trace!(%effect, %id, "effect has no meaning for a permanent");
                return;
            };
            let Some((controller, _)) = state.find_permanent(id) else {
                debug!(%id, "target left the battlefield, skipping");
                return;
            };

            let battlefield = &mut state.player_mut(controller).battlefield;
            let destroyed = match battlefield.find_mut(id) {
                Some(creature) => {
                    creature.damage += amount;
                    creature.is_destroyed()
                }
                None => false,
            };

            if destroyed {
                if let Some(creature) = battlefield.remove(id) {
                    debug!(%id, "creature destroyed");
                    state.player_mut(creature.owner).graveyard.push_back(creature.card);
                }
            }
        }
    }
}

fn apply_to_player(state: &mut GameState, effect: Effect, player: PlayerId) {
    let target = state.player_mut(player);
    match effect {
        Effect::Damage(amount) => target.life -= amount,
        Effect::GainLife(amount) => target.life += amount,
        Effect::Draw(count) => {
            for _ in 0..count {
                if target.draw().is_none() {
                    debug!(%player, "drew from an empty library");
                    break;
                }
            }
        }
        Effect::AddMana(mana) => target.mana_pool = target.mana_pool + mana,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardId, CardInstance, DeckList};
    use crate::core::{InstanceId, Mana, Player};

    fn game() -> GameState {
        let players = vec![
            Player::new("alice", 20, DeckList::new()),
            Player::new("bob", 20, DeckList::new()),
        ];
        GameState::new(players, PlayerId::new(0))
    }

    fn add_creature(state: &mut GameState, owner: PlayerId, toughness: i64) -> InstanceId {
        let card = Card::creature("Wall", Mana::ZERO, 0, toughness);
        let id = state.allocate_instance();
        let instance = CardInstance::new(id, CardId::new(7), &card, owner);
        state.player_mut(owner).battlefield.enter(instance, card.kind);
        id
    }

    #[test]
    fn test_damage_player() {
        let mut state = game();
        apply_effect(&mut state, Effect::Damage(3), Target::Player(PlayerId::new(1)));

        assert_eq!(state.player(PlayerId::new(1)).life, 17);
        assert_eq!(state.player(PlayerId::new(0)).life, 20);
    }

    #[test]
    fn test_each_player() {
        let mut state = game();
        apply_effect(&mut state, Effect::Damage(4), Target::EachPlayer);

        assert_eq!(state.player(PlayerId::new(0)).life, 16);
        assert_eq!(state.player(PlayerId::new(1)).life, 16);
    }

    #[test]
    fn test_gain_life_and_mana() {
        let mut state = game();
        let me = PlayerId::new(0);
        apply_effect(&mut state, Effect::GainLife(2), Target::Player(me));
        apply_effect(&mut state, Effect::AddMana(Mana::red(3)), Target::Player(me));

        assert_eq!(state.player(me).life, 22);
        assert_eq!(state.player(me).mana_pool, Mana::red(3));
    }

    #[test]
    fn test_draw_past_library_decks() {
        let mut state = game();
        let me = PlayerId::new(0);
        state.player_mut(me).library.push_back(CardId::new(1));

        apply_effect(&mut state, Effect::Draw(2), Target::Player(me));

        assert_eq!(state.player(me).hand.len(), 1);
        assert!(state.player(me).decked);
    }

    #[test]
    fn test_lethal_damage_destroys_creature() {
        let mut state = game();
        let owner = PlayerId::new(1);
        let id = add_creature(&mut state, owner, 2);

        apply_effect(&mut state, Effect::Damage(1), Target::Permanent(id));
        assert_eq!(state.find_permanent(id).unwrap().1.damage, 1);

        apply_effect(&mut state, Effect::Damage(1), Target::Permanent(id));
        assert!(state.find_permanent(id).is_none());
        assert_eq!(state.player(owner).graveyard.len(), 1);
    }

    #[test]
    fn test_missing_permanent_is_skipped() {
        let mut state = game();
        let before = state.clone();

        apply_effect(&mut state, Effect::Damage(5), Target::Permanent(InstanceId(42)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_non_damage_on_permanent_is_ignored() {
        let mut state = game();
        let id = add_creature(&mut state, PlayerId::new(0), 3);
        let before = state.clone();

        apply_effect(&mut state, Effect::GainLife(2), Target::Permanent(id));
        assert_eq!(state, before);
        assert_eq!(state.find_permanent(id).map(|(_, c)| c.card), Some(CardId::new(7)));
    }
}
