//! Stack integration tests: casting, responding and resolution order.

use std::sync::Arc;

use mtg_minimax::cards::{catalog, Card, CardId, CardInstance, CardKind, CardRegistry};
use mtg_minimax::core::{Action, GameConfig, GameState, Mana, Player, PlayerId};
use mtg_minimax::effects::{Effect, Target, TargetType};
use mtg_minimax::rules::{MagicRules, RulesEngine};

const P0: PlayerId = PlayerId::new(0);
const P1: PlayerId = PlayerId::new(1);

const RENEWAL: &str = "Renewal";

fn setup() -> (MagicRules, GameState) {
    let mut registry = CardRegistry::new();
    for card in catalog::standard_cards().unwrap() {
        registry.register(card).unwrap();
    }
    registry
        .register(Card::instant(RENEWAL, Mana::red(1)).with_spell(TargetType::You, Effect::GainLife(4)))
        .unwrap();

    let deck = catalog::burn_deck(&registry).unwrap();
    let state = GameState::new(vec![Player::new("a", 20, deck.clone()), Player::new("b", 20, deck)], P0);
    (MagicRules::new(Arc::new(registry), GameConfig::default()), state)
}

fn card(rules: &MagicRules, name: &str) -> CardId {
    rules.registry().lookup(name).unwrap()
}

fn add_mountains(rules: &MagicRules, state: &mut GameState, player: PlayerId, count: usize) {
    let mountain = card(rules, catalog::MOUNTAIN);
    for _ in 0..count {
        let id = state.allocate_instance();
        state
            .player_mut(player)
            .battlefield
            .enter(CardInstance::land(id, mountain, player, Mana::red(1)), CardKind::Land);
    }
}

fn pass_round(rules: &MagicRules, state: &mut GameState) {
    for _ in 0..state.player_count() {
        let holder = state.priority_player();
        rules.apply_action(state, &Action::pass(holder));
    }
}

// =============================================================================
// Resolution Order
// =============================================================================

/// Casting A then B and resolving twice resolves B first.
#[test]
fn test_last_in_first_out() {
    let (rules, mut state) = setup();
    let bolt = card(&rules, catalog::LIGHTNING_BOLT);
    let renewal = card(&rules, RENEWAL);
    state.player_mut(P0).hand.add(bolt);
    state.player_mut(P0).hand.add(renewal);
    add_mountains(&rules, &mut state, P0, 2);

    rules.apply_action(&mut state, &Action::cast(P0, bolt, [Target::Player(P1)]));
    rules.apply_action(&mut state, &Action::cast(P0, renewal, [Target::Player(P0)]));
    assert_eq!(state.stack.len(), 2);
    assert_eq!(state.stack.iter().last().map(|o| o.card), Some(renewal));

    pass_round(&rules, &mut state);
    assert_eq!(state.stack.len(), 1);
    assert_eq!(state.player(P0).life, 24);
    assert_eq!(state.player(P1).life, 20);

    pass_round(&rules, &mut state);
    assert!(state.stack.is_empty());
    assert_eq!(state.player(P1).life, 17);

    let graveyard: Vec<_> = state.player(P0).graveyard.iter().copied().collect();
    assert_eq!(graveyard, vec![renewal, bolt]);
}

/// The opponent can respond to a spell with an instant of their own.
#[test]
fn test_response_resolves_before_spell() {
    let (rules, mut state) = setup();
    let spike = card(&rules, catalog::LAVA_SPIKE);
    let bolt = card(&rules, catalog::LIGHTNING_BOLT);
    state.player_mut(P0).hand.add(spike);
    state.player_mut(P1).hand.add(bolt);
    add_mountains(&rules, &mut state, P0, 1);
    add_mountains(&rules, &mut state, P1, 1);
    state.player_mut(P0).life = 3;

    rules.apply_action(&mut state, &Action::cast(P0, spike, [Target::Player(P1)]));
    rules.apply_action(&mut state, &Action::pass(P0));

    let response = Action::cast(P1, bolt, [Target::Player(P0)]);
    assert!(rules.legal_actions(&state).contains(&response));
    rules.apply_action(&mut state, &response);
    assert_eq!(state.priority_player(), P1);

    pass_round(&rules, &mut state);

    // The bolt resolved first and ended the game with the spike still waiting.
    assert_eq!(state.stack.len(), 1);
    assert_eq!(state.player(P0).life, 0);
    assert_eq!(state.player(P1).life, 20);
    assert!(rules.is_terminal(&state).unwrap().is_winner(P1));
}

/// Sorceries can't be cast while anything is on the stack.
#[test]
fn test_no_sorcery_in_response() {
    let (rules, mut state) = setup();
    let bolt = card(&rules, catalog::LIGHTNING_BOLT);
    let spike = card(&rules, catalog::LAVA_SPIKE);
    state.player_mut(P0).hand.add(bolt);
    state.player_mut(P0).hand.add(spike);
    add_mountains(&rules, &mut state, P0, 2);

    rules.apply_action(&mut state, &Action::cast(P0, bolt, [Target::Player(P1)]));

    let actions = rules.legal_actions(&state);
    assert!(actions.iter().all(|a| a.card() != Some(spike)));
}

// =============================================================================
// Permanents
// =============================================================================

/// Creature spells use the stack and enter the battlefield on resolution.
#[test]
fn test_creature_spell_enters_on_resolution() {
    let (rules, mut state) = setup();
    let reaver = card(&rules, catalog::FALKENRATH_REAVER);
    state.player_mut(P0).hand.add(reaver);
    add_mountains(&rules, &mut state, P0, 2);

    rules.apply_action(&mut state, &Action::cast(P0, reaver, []));
    assert!(state.player(P0).battlefield.creatures.is_empty());

    pass_round(&rules, &mut state);
    assert_eq!(state.player(P0).battlefield.creatures.len(), 1);
    assert!(state.player(P0).graveyard.is_empty());
}

/// Burn aimed at a creature that died in the meantime does nothing.
#[test]
fn test_target_gone_before_resolution() {
    let (rules, mut state) = setup();
    let reaver = card(&rules, catalog::FALKENRATH_REAVER);
    let shock = card(&rules, catalog::SHOCK);
    let definition = rules.registry().get(reaver).clone();

    let id = state.allocate_instance();
    state
        .player_mut(P1)
        .battlefield
        .enter(CardInstance::new(id, reaver, &definition, P1), definition.kind);
    state.player_mut(P0).hand.add(shock);
    state.player_mut(P0).hand.add(shock);
    add_mountains(&rules, &mut state, P0, 2);

    rules.apply_action(&mut state, &Action::cast(P0, shock, [Target::Permanent(id)]));
    rules.apply_action(&mut state, &Action::cast(P0, shock, [Target::Permanent(id)]));

    pass_round(&rules, &mut state);
    assert!(state.player(P1).battlefield.creatures.is_empty());
    assert_eq!(state.player(P1).graveyard.iter().copied().collect::<Vec<_>>(), vec![reaver]);

    pass_round(&rules, &mut state);
    assert!(state.stack.is_empty());
    assert_eq!(state.player(P0).graveyard.len(), 2);
}
