//! Player actions.
//!
//! An `Action` is a complete, resolved choice: which card, which targets,
//! which attackers. Only the action generator builds them, and the
//! resolution engine applies them without re-checking legality.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::CardId;
use crate::effects::Target;

use super::entity::InstanceId;
use super::player::PlayerId;
use super::step::Step;

/// One chosen target per spell ability, in ability order.
pub type Targets = SmallVec<[Target; 2]>;

/// One attacker and the player it attacks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttackDeclaration {
    pub attacker: InstanceId,
    pub defender: PlayerId,
}

/// A complete game action.
///
/// ```
/// use mtg_minimax::cards::CardId;
/// use mtg_minimax::core::{Action, PlayerId};
/// use mtg_minimax::effects::Target;
///
/// let player = PlayerId::new(0);
/// let spike = Action::cast(player, CardId::new(1), [Target::Player(PlayerId::new(1))]);
/// assert_eq!(spike.player(), player);
/// assert!(!spike.is_pass());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Pass priority.
    Pass { player: PlayerId },

    /// Cast a card from hand (or play a land).
    Cast {
        player: PlayerId,
        card: CardId,
        targets: Targets,
    },

    /// Declare attackers. An empty declaration means "no attack".
    Attack {
        player: PlayerId,
        attackers: SmallVec<[AttackDeclaration; 4]>,
    },

    /// Reserved for blocker declaration. Never generated.
    Block { player: PlayerId },
}

impl Action {
    #[must_use]
    pub fn pass(player: PlayerId) -> Self {
        Action::Pass { player }
    }

    #[must_use]
    pub fn cast(player: PlayerId, card: CardId, targets: impl IntoIterator<Item = Target>) -> Self {
        Action::Cast {
            player,
            card,
            targets: targets.into_iter().collect(),
        }
    }

    #[must_use]
    pub fn attack(player: PlayerId, attackers: impl IntoIterator<Item = AttackDeclaration>) -> Self {
        Action::Attack {
            player,
            attackers: attackers.into_iter().collect(),
        }
    }

    /// The player taking this action.
    #[must_use]
    pub fn player(&self) -> PlayerId {
        match self {
            Action::Pass { player }
            | Action::Cast { player, .. }
            | Action::Attack { player, .. }
            | Action::Block { player } => *player,
        }
    }

    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self, Action::Pass { .. })
    }

    /// The card being cast, if this is a cast.
    #[must_use]
    pub fn card(&self) -> Option<CardId> {
        match self {
            Action::Cast { card, .. } => Some(*card),
            _ => None,
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Pass { player } => write!(f, "{} passes", player),
            Action::Cast { player, card, targets } => {
                write!(f, "{} casts {}", player, card)?;
                if !targets.is_empty() {
                    let names: Vec<_> = targets.iter().map(|t| t.to_string()).collect();
                    write!(f, " targeting {}", names.join(", "))?;
                }
                Ok(())
            }
            Action::Attack { player, attackers } => {
                write!(f, "{} attacks with {} creature(s)", player, attackers.len())
            }
            Action::Block { player } => write!(f, "{} blocks", player),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Step the action was taken in.
    pub step: Step,

    /// Position in the game's action history.
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(action: Action, turn: u32, step: Step, sequence: u32) -> Self {
        Self {
            player: action.player(),
            action,
            turn,
            step,
            sequence,
        }
    }
}
