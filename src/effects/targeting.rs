//! Effect targeting.
//!
//! - `TargetType`: what an ability may target, declared on the card
//! - `Target`: one concrete choice, carried on the `Cast` action
//! - `possible_targets` / `target_combinations`: enumeration used by the
//!   action generator

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::Card;
use crate::core::{GameState, InstanceId, PlayerId, Targets};

/// The kind of target an ability requires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetType {
    /// The controller. No choice involved.
    You,
    /// Any player, including the controller.
    AnyPlayer,
    /// Any player other than the controller.
    Opponent,
    /// Every player at once. No choice involved.
    EachPlayer,
    /// Any creature on any battlefield.
    AnyCreature,
}

/// A resolved target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Target {
    Player(PlayerId),
    /// All players; stands in for `TargetType::EachPlayer`.
    EachPlayer,
    /// A permanent, by stable identity.
    Permanent(InstanceId),
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Target::Player(p) => write!(f, "{}", p),
            Target::EachPlayer => write!(f, "each player"),
            Target::Permanent(id) => write!(f, "permanent {}", id),
        }
    }
}

/// Every legal choice for one ability.
///
/// Empty when nothing can be targeted (no creatures for `AnyCreature`),
/// which makes the card uncastable.
#[must_use]
pub fn possible_targets(
    target_type: TargetType,
    state: &GameState,
    controller: PlayerId,
) -> SmallVec<[Target; 4]> {
    let players = state.players.player_ids();

    match target_type {
        TargetType::You => smallvec::smallvec![Target::Player(controller)],
        TargetType::AnyPlayer => players.map(Target::Player).collect(),
        TargetType::Opponent => players
            .filter(|&p| p != controller)
            .map(Target::Player)
            .collect(),
        TargetType::EachPlayer => smallvec::smallvec![Target::EachPlayer],
        TargetType::AnyCreature => state
            .players
            .iter()
            .flat_map(|(_, p)| p.battlefield.creatures.iter())
            .map(|c| Target::Permanent(c.id))
            .collect(),
    }
}

/// The Cartesian product of the target sets of `card`'s spell abilities,
/// in card order, leftmost ability varying slowest.
///
/// A card without spell abilities yields exactly one empty combination.
///
/// ```
/// use mtg_minimax::cards::{Card, DeckList};
/// use mtg_minimax::core::{GameState, Mana, Player, PlayerId};
/// use mtg_minimax::effects::{target_combinations, Effect, TargetType};
///
/// let players = (0..3).map(|i| Player::new(format!("p{}", i), 20, DeckList::new())).collect();
/// let state = GameState::new(players, PlayerId::new(0));
///
/// let card = Card::sorcery("Split Fire", Mana::ZERO)
///     .with_spell(TargetType::Opponent, Effect::Damage(1))
///     .with_spell(TargetType::AnyPlayer, Effect::Damage(1));
///
/// assert_eq!(target_combinations(&card, &state, PlayerId::new(0)).len(), 2 * 3);
/// ```
#[must_use]
pub fn target_combinations(card: &Card, state: &GameState, controller: PlayerId) -> Vec<Targets> {
    let mut combinations = vec![Targets::new()];

    for ability in card.spell_abilities() {
        let choices = possible_targets(ability.target, state, controller);
        combinations = combinations
            .iter()
            .flat_map(|prefix| {
                choices.iter().map(move |&choice| {
                    let mut targets = prefix.clone();
                    targets.push(choice);
                    targets
                })
            })
            .collect();
    }

    combinations
}
