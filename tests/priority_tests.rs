//! Priority passing and turn structure integration tests.

use std::sync::Arc;

use mtg_minimax::cards::{catalog, CardInstance, CardKind};
use mtg_minimax::core::{Action, GameConfig, GameState, Mana, Player, PlayerId, Step};
use mtg_minimax::effects::Target;
use mtg_minimax::rules::{MagicRules, RulesEngine};

fn table(players: usize) -> (MagicRules, GameState) {
    let registry = catalog::standard_registry().unwrap();
    let deck = catalog::burn_deck(&registry).unwrap();
    let library: im::Vector<_> = deck.expand().into_iter().collect();

    let seats = (0..players)
        .map(|i| {
            let mut player = Player::new(format!("p{}", i), 20, deck.clone());
            player.library = library.clone();
            player
        })
        .collect();
    let rules = MagicRules::new(Arc::new(registry), GameConfig::new(players));
    (rules, GameState::new(seats, PlayerId::new(0)))
}

fn pass(rules: &MagicRules, state: &mut GameState) {
    let holder = state.priority_player();
    rules.apply_action(state, &Action::pass(holder));
}

// =============================================================================
// Round Trip
// =============================================================================

/// N passes on an empty stack move to the next step and hand priority back
/// to the active player.
#[test]
fn test_round_trip_advances_step() {
    for players in 2..=5 {
        let (rules, mut state) = table(players);
        let active = state.active_player();

        for _ in 0..players {
            assert!(state.stack.is_empty());
            pass(&rules, &mut state);
        }

        assert_eq!(state.priority_player(), active);
        assert!(state.stack.is_empty());
        assert_eq!(state.step, Step::PostcombatMain);
        assert_eq!(state.priority.passes(), 0);
    }
}

/// Priority moves seat by seat.
#[test]
fn test_priority_rotates_in_seat_order() {
    let (rules, mut state) = table(4);

    for seat in 1..4u8 {
        pass(&rules, &mut state);
        assert_eq!(state.priority_player(), PlayerId::new(seat));
        assert_eq!(state.step, Step::PrecombatMain);
    }
}

/// With a spell on the stack, the round of passes resolves it instead of
/// advancing the step.
#[test]
fn test_round_trip_resolves_stack() {
    let (rules, mut state) = table(3);
    let p0 = PlayerId::new(0);
    let bolt = rules.registry().lookup(catalog::LIGHTNING_BOLT).unwrap();
    let mountain = rules.registry().lookup(catalog::MOUNTAIN).unwrap();

    state.player_mut(p0).hand.add(bolt);
    let id = state.allocate_instance();
    state
        .player_mut(p0)
        .battlefield
        .enter(CardInstance::land(id, mountain, p0, Mana::red(1)), CardKind::Land);

    rules.apply_action(&mut state, &Action::cast(p0, bolt, [Target::Player(PlayerId::new(2))]));
    assert_eq!(state.stack.len(), 1);

    for _ in 0..3 {
        pass(&rules, &mut state);
    }

    assert!(state.stack.is_empty());
    assert_eq!(state.player(PlayerId::new(2)).life, 17);
    assert_eq!(state.priority_player(), p0);
    assert_eq!(state.step, Step::PrecombatMain);
}

/// A cast in the middle of a round restarts the count.
#[test]
fn test_cast_resets_pass_count() {
    let (rules, mut state) = table(2);
    let p1 = PlayerId::new(1);
    let bolt = rules.registry().lookup(catalog::LIGHTNING_BOLT).unwrap();
    state.player_mut(p1).mana_pool = Mana::red(1);
    state.player_mut(p1).hand.add(bolt);

    pass(&rules, &mut state);
    assert_eq!(state.priority.passes(), 1);

    rules.apply_action(&mut state, &Action::cast(p1, bolt, [Target::Player(PlayerId::new(0))]));
    assert_eq!(state.priority.passes(), 0);
    assert_eq!(state.priority_player(), p1);
}

// =============================================================================
// Turns
// =============================================================================

/// Passing through both main phases ends the turn. The next player untaps,
/// draws and gets priority in their precombat main phase.
#[test]
fn test_turn_passes_to_next_player() {
    let (rules, mut state) = table(2);
    let p1 = PlayerId::new(1);

    for _ in 0..4 {
        pass(&rules, &mut state);
    }

    assert_eq!(state.active_player(), p1);
    assert_eq!(state.priority_player(), p1);
    assert_eq!(state.step, Step::PrecombatMain);
    assert_eq!(state.player(p1).hand.len(), 1);
    assert_eq!(state.turn, 1);

    for _ in 0..4 {
        pass(&rules, &mut state);
    }
    assert_eq!(state.active_player(), PlayerId::new(0));
    assert_eq!(state.turn, 2);
}

/// Land drops and floating mana last one turn.
#[test]
fn test_end_of_turn_cleanup() {
    let (rules, mut state) = table(2);
    let p0 = PlayerId::new(0);
    state.player_mut(p0).land_played = true;
    state.player_mut(p0).mana_pool = Mana::red(2);

    for _ in 0..4 {
        pass(&rules, &mut state);
    }

    assert!(!state.player(p0).land_played);
    assert_eq!(state.player(p0).mana_pool, Mana::ZERO);
}

/// Drawing from an empty library loses the game instead of failing.
#[test]
fn test_deck_out_ends_game() {
    let (rules, mut state) = table(2);
    let p1 = PlayerId::new(1);
    state.player_mut(p1).library = im::Vector::new();

    for _ in 0..4 {
        pass(&rules, &mut state);
    }

    assert!(state.player(p1).decked);
    assert!(rules.is_terminal(&state).unwrap().is_winner(PlayerId::new(0)));
}
