//! Viability check: does the corpus branch enough to carry nibbles?

use crate::config::MIN_MEANINGFUL_NODES;
use crate::error::{Error, Result};
use crate::graph::builder::TransitionGraph;
use serde::Serialize;

/// Outcome of a viability check.
///
/// The check only reports. Whether a failing corpus may still be used is the
/// caller's decision, see [`ViabilityReport::gate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViabilityReport {
    /// Whether the corpus has enough meaningful nodes.
    pub passed: bool,
    /// Number of meaningful nodes.
    pub meaningful_count: usize,
    /// Keys of the meaningful nodes, in key order.
    pub meaningful_keys: Vec<String>,
    /// Total number of nodes.
    pub node_count: usize,
    /// Meaningful nodes required to pass.
    pub required: usize,
}

impl ViabilityReport {
    /// Turn a failed report into an error unless `force` is set.
    pub fn gate(&self, force: bool) -> Result<()> {
        if self.passed || force {
            Ok(())
        } else {
            Err(Error::ViabilityFailed {
                meaningful: self.meaningful_count,
                required: self.required,
            })
        }
    }
}

/// Count meaningful nodes and decide whether the graph is viable.
///
/// # Example
///
/// ```
/// use markov_stego::graph::{check_viability, TransitionGraph};
///
/// let report = check_viability(&TransitionGraph::build(Vec::new()));
/// assert!(!report.passed);
/// assert_eq!(report.meaningful_count, 0);
/// ```
pub fn check_viability(graph: &TransitionGraph) -> ViabilityReport {
    let meaningful_keys: Vec<String> = graph
        .nodes()
        .filter(|n| n.is_meaningful())
        .map(|n| n.key.clone())
        .collect();

    ViabilityReport {
        passed: meaningful_keys.len() >= MIN_MEANINGFUL_NODES,
        meaningful_count: meaningful_keys.len(),
        meaningful_keys,
        node_count: graph.len(),
        required: MIN_MEANINGFUL_NODES,
    }
}
