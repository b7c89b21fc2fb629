//! Game-tree search.
//!
//! ## Overview
//!
//! Depth-limited minimax over any [`RulesEngine`](crate::rules::RulesEngine):
//!
//! - **Worst-case opponents**: players other than the searcher move over
//!   everything their hidden hand could allow
//! - **Win distance**: sooner wins score higher, sooner losses lower
//! - **Budgets**: optional node and wall-clock limits, checked as the tree
//!   is expanded
//!
//! ## Usage
//!
//! ```rust
//! use mtg_minimax::rules::RulesEngine;
//! use mtg_minimax::search::{Evaluator, Minimax, SearchConfig};
//!
//! fn best<E, V>(engine: E, evaluator: V, state: &E::State) -> Option<E::Action>
//! where
//!     E: RulesEngine,
//!     V: Evaluator<E::State>,
//! {
//!     let config = SearchConfig::default().with_max_depth(3);
//!     let mut search = Minimax::new(engine, evaluator, config);
//!     let action = search.choose_action(state);
//!     println!("searched {} nodes", search.stats().nodes);
//!     action
//! }
//! ```

mod config;
mod eval;
mod minimax;
mod stats;

pub use config::SearchConfig;
pub use eval::{BoardEvaluator, Evaluator};
pub use minimax::Minimax;
pub use stats::SearchStats;
