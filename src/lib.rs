//! Markov Steganography
//!
//! Hides an arbitrary binary payload in ordinary-looking text by walking a
//! word-transition graph built from a reference corpus. Only someone holding
//! the same corpus can rebuild the graph and read the payload back.
//!
//! # How it works
//!
//! - Every distinct (lowercase) word of the corpus becomes a node whose
//!   *doors* are the words that followed it, sorted and deduplicated.
//! - A node with more than 15 doors is *meaningful*: visiting it spends one
//!   4-bit nibble of payload to choose door `0..=15`.
//! - Other nodes are *filler*: the next door is picked at random and carries
//!   no information.
//!
//! # Architecture
//!
//! ```text
//! Corpus text → Tokenize → TransitionGraph → Viability gate → Encode / Decode
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use markov_stego::{Corpus, DecodeConfig, EncodeConfig};
//! use std::path::Path;
//!
//! let corpus = Corpus::from_path(Path::new("./corpus")).unwrap();
//!
//! // Hide a message
//! let encoded = corpus.encode(b"Hidden data", &EncodeConfig::default()).unwrap();
//! let text = encoded.text();
//!
//! // Read it back
//! let report = corpus.decode(&text, &DecodeConfig::default()).unwrap();
//! assert_eq!(report.payload, b"Hidden data");
//! ```

pub mod config;
pub mod corpus;
pub mod encoding;
pub mod error;
pub mod graph;
pub mod text;

#[cfg(test)]
mod fixtures;

pub use config::{DecodeConfig, EncodeConfig, FormatConfig};
pub use corpus::Corpus;
pub use error::{Error, Result};
