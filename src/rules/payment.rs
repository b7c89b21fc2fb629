//! Paying mana costs.
//!
//! A payment names the mana sources to tap. Applying it taps them, adds
//! their mana to the pool and then takes the cost out of the pool, so
//! anything left over keeps floating until end of turn.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Color, InstanceId, Mana, Player};

/// Which permanents to tap for a cost.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManaPayment {
    pub sources: SmallVec<[InstanceId; 4]>,
}

impl ManaPayment {
    #[must_use]
    pub fn new(sources: impl IntoIterator<Item = InstanceId>) -> Self {
        Self {
            sources: sources.into_iter().collect(),
        }
    }
}

/// The naive tapper.
///
/// Floating mana is used first. Then sources are tapped one at a time,
/// preferring one that produces a color the cost still needs, otherwise
/// the first untapped source. Returns `None` if the cost can't be met.
///
/// ```
/// use mtg_minimax::cards::{CardId, CardInstance, DeckList};
/// use mtg_minimax::core::{InstanceId, Mana, Player, PlayerId};
/// use mtg_minimax::rules::greedy_payment;
///
/// let mut player = Player::new("alice", 20, DeckList::new());
/// for (i, mana) in [Mana::blue(1), Mana::red(1)].into_iter().enumerate() {
///     let land = CardInstance::land(InstanceId(i as u32), CardId::new(0), PlayerId::new(0), mana);
///     player.battlefield.lands.push_back(land);
/// }
///
/// let payment = greedy_payment(&player, Mana::red(1)).unwrap();
/// assert_eq!(payment.sources.as_slice(), &[InstanceId(1)]);
/// ```
#[must_use]
pub fn greedy_payment(player: &Player, cost: Mana) -> Option<ManaPayment> {
    let mut available = player.mana_pool;
    let mut candidates: Vec<_> = player.battlefield.mana_sources().collect();
    let mut payment = ManaPayment::default();

    while !available.covers(cost) {
        let pick = candidates
            .iter()
            .position(|source| supplies_missing_color(source.produces(), available, cost))
            .or_else(|| (!candidates.is_empty()).then_some(0))?;

        let source = candidates.remove(pick);
        available = available + source.produces();
        payment.sources.push(source.id);
    }

    Some(payment)
}

fn supplies_missing_color(produced: Mana, available: Mana, cost: Mana) -> bool {
    Color::ALL
        .into_iter()
        .any(|c| produced.color(c) > 0 && cost.color(c) > available.color(c))
}

/// Tap the payment's sources and pay `cost` from the pool.
///
/// Panics if a source is missing or already tapped, or if the resulting
/// pool does not cover the cost. Payments come from `greedy_payment` or a
/// strategy that checked them; anything else is an engine bug.
pub fn apply_payment(player: &mut Player, payment: &ManaPayment, cost: Mana) {
    for &id in &payment.sources {
        let source = match player.battlefield.find_mut(id) {
            Some(source) if source.is_mana_source() => source,
            _ => panic!("{} is not an untapped mana source of {}", id, player.name),
        };
        source.tapped = true;
        let produced = source.produces();
        player.mana_pool = player.mana_pool + produced;
    }

    player.mana_pool = match player.mana_pool.pay(cost) {
        Some(rest) => rest,
        None => panic!("{} cannot pay {} from {}", player.name, cost, player.mana_pool),
    };
}
