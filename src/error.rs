//! Error types for Markov steganography.

use crate::encoding::MismatchKind;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for encode/decode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building a graph, encoding or decoding.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while reading a corpus or payload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Corpus produced no tokens after normalization.
    #[error("Corpus is empty: no tokens after normalization")]
    CorpusEmpty,

    /// Corpus path does not exist.
    #[error("Corpus not found: {0}")]
    CorpusNotFound(PathBuf),

    /// Not enough meaningful nodes to carry nibbles.
    #[error("Corpus not viable: {meaningful} meaningful nodes, need at least {required}")]
    ViabilityFailed { meaningful: usize, required: usize },

    /// The walk reached a word that was never followed by anything.
    #[error("Encoding dead end at step {step}: '{word}' has no successors")]
    EncodingDeadEnd { word: String, step: usize },

    /// Too many consecutive filler hops without reaching a meaningful node.
    #[error("Encoding walk stalled after {steps} consecutive filler steps")]
    WalkStalled { steps: usize },

    /// A step of the encoded text could not be replayed on the graph.
    #[error("Decoding mismatch at word {position} ('{word}' -> '{successor}'): {kind}")]
    DecodingMismatch {
        position: usize,
        word: String,
        successor: String,
        kind: MismatchKind,
    },

    /// Trailing bits did not fill a whole byte and were dropped.
    #[error("Payload padding loss: {dropped_bits} trailing bits dropped")]
    PayloadPaddingLoss { dropped_bits: usize },

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
