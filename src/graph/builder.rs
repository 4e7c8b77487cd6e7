//! Transition graph construction from a token stream.

use crate::graph::node::TransitionNode;
use serde::Serialize;
use std::collections::BTreeMap;

/// Summary numbers for a built graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    /// Number of distinct lowercase words.
    pub nodes: usize,
    /// Length of the token stream the graph was built from.
    pub tokens: usize,
    /// Number of nodes with more than 15 doors.
    pub meaningful: usize,
    /// Largest door count of any node.
    pub max_doors: usize,
    /// Mean door count over all nodes.
    pub mean_doors: f64,
}

/// Immutable word-transition graph.
///
/// Built once from a corpus token stream and only read afterwards. Two graphs
/// built from the same token stream are value-equal, which is what lets an
/// encoder and a decoder work independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionGraph {
    nodes: BTreeMap<String, TransitionNode>,
    tokens: Vec<String>,
}

impl TransitionGraph {
    /// Build the graph from an ordered token stream.
    ///
    /// # Example
    ///
    /// ```
    /// use markov_stego::graph::TransitionGraph;
    /// use markov_stego::text::tokenize;
    ///
    /// let graph = TransitionGraph::build(tokenize("the cat sat on the mat"));
    /// assert_eq!(graph.node("the").unwrap().doors, vec!["cat", "mat"]);
    /// assert!(graph.node("mat").unwrap().doors.is_empty());
    /// ```
    pub fn build(tokens: Vec<String>) -> Self {
        let mut nodes: BTreeMap<String, TransitionNode> = BTreeMap::new();

        for (i, token) in tokens.iter().enumerate() {
            let key = token.to_lowercase();
            let next = tokens.get(i + 1).map(String::as_str);
            nodes
                .entry(key.clone())
                .or_insert_with(|| TransitionNode::new(key))
                .observe(token, next);
        }

        for node in nodes.values_mut() {
            node.seal();
        }

        Self { nodes, tokens }
    }

    /// Look up a node by any spelling of its word.
    pub fn node(&self, word: &str) -> Option<&TransitionNode> {
        self.nodes.get(&word.to_lowercase())
    }

    /// All nodes in key order.
    pub fn nodes(&self) -> impl Iterator<Item = &TransitionNode> {
        self.nodes.values()
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The token stream the graph was built from.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Compute summary statistics.
    pub fn stats(&self) -> GraphStats {
        let total_doors: usize = self.nodes.values().map(|n| n.door_count()).sum();
        GraphStats {
            nodes: self.nodes.len(),
            tokens: self.tokens.len(),
            meaningful: self.nodes.values().filter(|n| n.is_meaningful()).count(),
            max_doors: self
                .nodes
                .values()
                .map(|n| n.door_count())
                .max()
                .unwrap_or(0),
            mean_doors: if self.nodes.is_empty() {
                0.0
            } else {
                total_doors as f64 / self.nodes.len() as f64
            },
        }
    }
}
