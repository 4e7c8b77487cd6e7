//! Corpus operations - the main interface.

use crate::config::{DecodeConfig, EncodeConfig};
use crate::corpus::loader::read_corpus;
use crate::encoding::{decode, encode, encode_with_rng, DecodeReport, EncodedText};
use crate::error::Result;
use crate::graph::{check_viability, GraphStats, TransitionGraph, TransitionNode, ViabilityReport};
use crate::text::tokenize;
use rand::Rng;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::path::Path;

/// Summary of a loaded corpus.
#[derive(Debug, Clone, Serialize)]
pub struct CorpusInfo {
    /// Graph statistics.
    pub stats: GraphStats,
    /// Viability outcome.
    pub viability: ViabilityReport,
    /// SHA-256 of the normalized token stream, hex encoded.
    pub fingerprint: String,
}

impl CorpusInfo {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A reference corpus with its transition graph.
///
/// Both parties build a `Corpus` from the same text; the graphs they get are
/// value-equal, so text encoded by one decodes on the other.
pub struct Corpus {
    /// Transition graph (owns the token stream).
    graph: TransitionGraph,
    /// Cached fingerprint.
    fingerprint: String,
}

impl Corpus {
    /// Build a corpus from raw text.
    pub fn from_text(text: &str) -> Self {
        let tokens = tokenize(text);
        let fingerprint = Self::fingerprint_tokens(&tokens);
        Self {
            graph: TransitionGraph::build(tokens),
            fingerprint,
        }
    }

    /// Build a corpus from a file or a directory of files.
    pub fn from_path(path: &Path) -> Result<Self> {
        let text = read_corpus(path)?;
        Ok(Self::from_text(&text))
    }

    fn fingerprint_tokens(tokens: &[String]) -> String {
        let mut hasher = Sha256::new();
        for (i, token) in tokens.iter().enumerate() {
            if i > 0 {
                hasher.update(b" ");
            }
            hasher.update(token.as_bytes());
        }
        hex::encode(hasher.finalize())
    }

    /// The transition graph.
    pub fn graph(&self) -> &TransitionGraph {
        &self.graph
    }

    /// Look up the node for a word.
    pub fn node(&self, word: &str) -> Option<&TransitionNode> {
        self.graph.node(word)
    }

    /// Hex SHA-256 of the normalized token stream.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// Check whether the corpus branches enough for nibble encoding.
    pub fn viability(&self) -> ViabilityReport {
        check_viability(&self.graph)
    }

    /// Get corpus information.
    pub fn info(&self) -> CorpusInfo {
        CorpusInfo {
            stats: self.graph.stats(),
            viability: self.viability(),
            fingerprint: self.fingerprint.clone(),
        }
    }

    /// Hide a payload in a word walk over this corpus.
    pub fn encode(&self, payload: &[u8], config: &EncodeConfig) -> Result<EncodedText> {
        encode(payload, &self.graph, config)
    }

    /// Hide a payload using a caller-supplied random source.
    pub fn encode_with_rng<R: Rng>(
        &self,
        payload: &[u8],
        config: &EncodeConfig,
        rng: &mut R,
    ) -> Result<EncodedText> {
        encode_with_rng(payload, &self.graph, config, rng)
    }

    /// Recover a payload from text encoded against this corpus.
    pub fn decode(&self, text: &str, config: &DecodeConfig) -> Result<DecodeReport> {
        decode(text, &self.graph, config)
    }
}
