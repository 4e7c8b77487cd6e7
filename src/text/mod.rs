//! Text handling: tokenization and decorative layouts.
//!
//! This module provides:
//! - Corpus and cover-text normalization into word tokens
//! - Plain, poem and email renderings of an encoded word stream

mod format;
mod tokenizer;

pub use format::{format_words, Layout};
pub use tokenizer::{normalize, tokenize};
