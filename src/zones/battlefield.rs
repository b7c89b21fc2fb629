//! A player's permanents.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{CardInstance, CardKind};
use crate::core::InstanceId;

/// Permanents, grouped by kind. Lookup is always by `InstanceId`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Battlefield {
    pub lands: Vector<CardInstance>,
    pub creatures: Vector<CardInstance>,
    /// Everything else (artifacts).
    pub others: Vector<CardInstance>,
}

impl Battlefield {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Put a permanent into the group its kind belongs to.
    pub fn enter(&mut self, permanent: CardInstance, kind: CardKind) {
        match kind {
            CardKind::Land => self.lands.push_back(permanent),
            CardKind::Creature { .. } => self.creatures.push_back(permanent),
            _ => self.others.push_back(permanent),
        }
    }

    /// All permanents: lands, then creatures, then others.
    pub fn iter(&self) -> impl Iterator<Item = &CardInstance> {
        self.lands
            .iter()
            .chain(self.creatures.iter())
            .chain(self.others.iter())
    }

    #[must_use]
    pub fn find(&self, id: InstanceId) -> Option<&CardInstance> {
        self.iter().find(|p| p.id == id)
    }

    pub fn find_mut(&mut self, id: InstanceId) -> Option<&mut CardInstance> {
        for group in [&mut self.lands, &mut self.creatures, &mut self.others] {
            if let Some(index) = group.iter().position(|p| p.id == id) {
                return group.get_mut(index);
            }
        }
        None
    }

    /// Take a permanent off the battlefield.
    pub fn remove(&mut self, id: InstanceId) -> Option<CardInstance> {
        for group in [&mut self.lands, &mut self.creatures, &mut self.others] {
            if let Some(index) = group.iter().position(|p| p.id == id) {
                return Some(group.remove(index));
            }
        }
        None
    }

    /// Untapped permanents that can tap for mana, lands first.
    pub fn mana_sources(&self) -> impl Iterator<Item = &CardInstance> {
        self.iter().filter(|p| p.is_mana_source())
    }

    /// Untap everything and let creatures shake off summoning sickness.
    pub fn untap_all(&mut self) {
        for group in [&mut self.lands, &mut self.creatures, &mut self.others] {
            for permanent in group.iter_mut() {
                permanent.tapped = false;
                permanent.summoning_sick = false;
            }
        }
    }

    /// Remove marked damage from creatures.
    pub fn clear_damage(&mut self) {
        for creature in self.creatures.iter_mut() {
            creature.damage = 0;
        }
    }

    /// Creatures able to attack, in battlefield order.
    pub fn eligible_attackers(&self) -> impl Iterator<Item = &CardInstance> {
        self.creatures.iter().filter(|c| c.can_attack())
    }

    #[must_use]
    pub fn total_power(&self) -> i64 {
        self.creatures.iter().map(|c| c.power).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lands.len() + self.creatures.len() + self.others.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
