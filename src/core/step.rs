//! The fixed, cyclic sequence of steps in a turn.

use serde::{Deserialize, Serialize};

/// A step (or main phase) of a turn, in turn order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Step {
    // Beginning phase
    Untap,
    Upkeep,
    Draw,

    PrecombatMain,

    // Combat phase
    BeginCombat,
    DeclareAttackers,
    DeclareBlockers,
    FirstStrikeDamage,
    CombatDamage,
    EndCombat,

    PostcombatMain,

    // Ending phase
    End,
    Cleanup,
}

impl Step {
    /// Every step in turn order.
    pub const ALL: [Step; 13] = [
        Step::Untap,
        Step::Upkeep,
        Step::Draw,
        Step::PrecombatMain,
        Step::BeginCombat,
        Step::DeclareAttackers,
        Step::DeclareBlockers,
        Step::FirstStrikeDamage,
        Step::CombatDamage,
        Step::EndCombat,
        Step::PostcombatMain,
        Step::End,
        Step::Cleanup,
    ];

    /// The following step. Cleanup wraps to Untap.
    #[must_use]
    pub fn next(self) -> Step {
        let index = self as usize;
        Step::ALL[(index + 1) % Step::ALL.len()]
    }

    #[must_use]
    pub fn is_main_phase(self) -> bool {
        matches!(self, Step::PrecombatMain | Step::PostcombatMain)
    }
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Step::Untap => "untap",
            Step::Upkeep => "upkeep",
            Step::Draw => "draw",
            Step::PrecombatMain => "precombat main",
            Step::BeginCombat => "beginning of combat",
            Step::DeclareAttackers => "declare attackers",
            Step::DeclareBlockers => "declare blockers",
            Step::FirstStrikeDamage => "first strike damage",
            Step::CombatDamage => "combat damage",
            Step::EndCombat => "end of combat",
            Step::PostcombatMain => "postcombat main",
            Step::End => "end",
            Step::Cleanup => "cleanup",
        };
        f.write_str(name)
    }
}
