//! Card system: definitions, instances, registry and deck lists.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `Card`: Static card data (cost, kind, prerequisites, abilities)
//! - `CardInstance`: A permanent on the battlefield
//! - `CardRegistry`: Card definition lookup, shared read-only
//! - `DeckList`: Multiset of cards a library is built from

pub mod catalog;
pub mod deck;
pub mod definition;
pub mod instance;
pub mod registry;

pub use deck::DeckList;
pub use definition::{Ability, AbilityKind, Card, CardId, CardKind, Prerequisite};
pub use instance::CardInstance;
pub use registry::CardRegistry;
