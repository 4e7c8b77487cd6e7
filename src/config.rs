//! Configuration constants and types for Markov steganography.

use serde::{Deserialize, Serialize};

/// A node is meaningful when it has strictly more doors than this.
pub const MEANINGFUL_DOOR_THRESHOLD: usize = 15;

/// Minimum number of meaningful nodes for a corpus to pass the viability check.
pub const MIN_MEANINGFUL_NODES: usize = 7;

/// Bits carried by one meaningful step.
pub const NIBBLE_BITS: usize = 4;

/// Default bound on consecutive filler hops before a walk is abandoned.
pub const DEFAULT_MAX_FILLER_RUN: usize = 10_000;

/// Default number of walks tried before giving up (1 = no retry).
pub const DEFAULT_ENCODE_ATTEMPTS: usize = 1;

/// Layout parameters for decorative output.
pub mod layout_params {
    /// Shortest poem line in words.
    pub const LINE_WORDS_MIN: usize = 4;

    /// Longest poem line in words.
    pub const LINE_WORDS_MAX: usize = 8;

    /// Lines per stanza.
    pub const LINES_PER_STANZA: usize = 4;

    /// Shortest email sentence in words.
    pub const SENTENCE_WORDS_MIN: usize = 6;

    /// Longest email sentence in words.
    pub const SENTENCE_WORDS_MAX: usize = 16;

    /// Sentences per email paragraph.
    pub const SENTENCES_PER_PARAGRAPH: usize = 4;
}

/// Configuration for an encode call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncodeConfig {
    /// Proceed even if the corpus fails the viability check.
    pub force: bool,

    /// Consecutive filler hops allowed before the walk counts as stalled.
    pub max_filler_run: usize,

    /// Number of fresh walks tried when one dead-ends or stalls.
    pub attempts: usize,

    /// Seed for a reproducible walk. `None` uses the thread RNG.
    pub seed: Option<u64>,
}

impl Default for EncodeConfig {
    fn default() -> Self {
        Self {
            force: false,
            max_filler_run: DEFAULT_MAX_FILLER_RUN,
            attempts: DEFAULT_ENCODE_ATTEMPTS,
            seed: None,
        }
    }
}

impl EncodeConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_filler_run == 0 {
            return Err("Filler run bound must be greater than 0".to_string());
        }
        if self.attempts == 0 {
            return Err("Encode attempts must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Configuration for a decode call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DecodeConfig {
    /// Fail on the first mismatch or on trailing-bit loss instead of reporting it.
    pub strict: bool,
}

/// Configuration for decorative formatting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormatConfig {
    /// Fewest words on a poem line.
    pub line_words_min: usize,

    /// Most words on a poem line.
    pub line_words_max: usize,

    /// Lines per poem stanza.
    pub lines_per_stanza: usize,

    /// Fewest words in an email sentence.
    pub sentence_words_min: usize,

    /// Most words in an email sentence.
    pub sentence_words_max: usize,

    /// Sentences per email paragraph.
    pub sentences_per_paragraph: usize,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            line_words_min: layout_params::LINE_WORDS_MIN,
            line_words_max: layout_params::LINE_WORDS_MAX,
            lines_per_stanza: layout_params::LINES_PER_STANZA,
            sentence_words_min: layout_params::SENTENCE_WORDS_MIN,
            sentence_words_max: layout_params::SENTENCE_WORDS_MAX,
            sentences_per_paragraph: layout_params::SENTENCES_PER_PARAGRAPH,
        }
    }
}

impl FormatConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.line_words_min == 0 || self.line_words_min > self.line_words_max {
            return Err("Line length range must be non-empty and start above 0".to_string());
        }
        if self.sentence_words_min == 0 || self.sentence_words_min > self.sentence_words_max {
            return Err("Sentence length range must be non-empty and start above 0".to_string());
        }
        if self.lines_per_stanza == 0 || self.sentences_per_paragraph == 0 {
            return Err("Stanza and paragraph sizes must be greater than 0".to_string());
        }
        Ok(())
    }
}
