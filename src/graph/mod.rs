//! Word-transition graph.
//!
//! This module provides:
//! - `TransitionNode`: per-word successor record with ordered doors
//! - `TransitionGraph`: immutable map from lowercase word to node
//! - Viability checking for nibble-grained encoding

mod builder;
mod node;
mod viability;

pub use builder::{GraphStats, TransitionGraph};
pub use node::TransitionNode;
pub use viability::{check_viability, ViabilityReport};
