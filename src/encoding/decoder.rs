//! Payload decoder: replays a walk and reads nibbles off meaningful hops.

use crate::config::{DecodeConfig, NIBBLE_BITS};
use crate::encoding::nibbles::pack_nibbles;
use crate::error::{Error, Result};
use crate::graph::TransitionGraph;
use crate::text::tokenize;
use std::fmt;

/// Why a step of the encoded text could not be replayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MismatchKind {
    /// The word is not in the corpus at all.
    UnknownWord,
    /// The successor never followed the word in the corpus.
    NotADoor,
    /// The successor is a door beyond the 16 a nibble can address.
    DoorOutOfRange,
}

impl fmt::Display for MismatchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            MismatchKind::UnknownWord => "word does not occur in the corpus",
            MismatchKind::NotADoor => "successor never follows the word in the corpus",
            MismatchKind::DoorOutOfRange => "successor is a door beyond nibble range",
        };
        f.write_str(reason)
    }
}

/// One step of the encoded text that did not match the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// Index of `word` in the tokenized text.
    pub position: usize,
    /// The predecessor word.
    pub word: String,
    /// The word that followed it.
    pub successor: String,
    /// What went wrong.
    pub kind: MismatchKind,
    /// Whether the step should have carried a nibble.
    pub lost_nibble: bool,
}

impl From<Mismatch> for Error {
    fn from(m: Mismatch) -> Self {
        Error::DecodingMismatch {
            position: m.position,
            word: m.word,
            successor: m.successor,
            kind: m.kind,
        }
    }
}

/// Result of decoding a text.
#[derive(Debug, Clone)]
pub struct DecodeReport {
    /// Recovered payload bytes.
    pub payload: Vec<u8>,
    /// Nibbles read off meaningful hops.
    pub nibbles: usize,
    /// Steps through filler nodes.
    pub filler_steps: usize,
    /// Steps that did not match the graph.
    pub mismatches: Vec<Mismatch>,
    /// Trailing bits that did not fill a byte.
    pub dropped_bits: usize,
}

impl DecodeReport {
    /// Whether every step matched and no bits were dropped.
    pub fn is_clean(&self) -> bool {
        self.mismatches.is_empty() && self.dropped_bits == 0
    }
}

/// Decode a payload from encoded text.
///
/// The text is tokenized exactly like the corpus, so layouts that only add
/// whitespace, punctuation or capitals decode the same as plain output.
///
/// In non-strict mode every mismatch is collected in the report and the
/// affected step contributes no bits. With `config.strict` the first mismatch
/// fails with `DecodingMismatch`, and a dropped trailing half byte fails with
/// `PayloadPaddingLoss`.
pub fn decode(text: &str, graph: &TransitionGraph, config: &DecodeConfig) -> Result<DecodeReport> {
    let words = tokenize(text);

    let mut nibbles = Vec::new();
    let mut filler_steps = 0;
    let mut mismatches = Vec::new();

    for (position, pair) in words.windows(2).enumerate() {
        let (word, successor) = (&pair[0], &pair[1]);

        let mismatch = |kind: MismatchKind, lost_nibble: bool| Mismatch {
            position,
            word: word.clone(),
            successor: successor.clone(),
            kind,
            lost_nibble,
        };

        let Some(node) = graph.node(word) else {
            mismatches.push(mismatch(MismatchKind::UnknownWord, false));
            continue;
        };

        let meaningful = node.is_meaningful();
        match node.door_index(successor) {
            Some(index) if meaningful && index < 1 << NIBBLE_BITS => nibbles.push(index as u8),
            Some(_) if meaningful => mismatches.push(mismatch(MismatchKind::DoorOutOfRange, true)),
            Some(_) => filler_steps += 1,
            None => {
                if !meaningful {
                    filler_steps += 1;
                }
                mismatches.push(mismatch(MismatchKind::NotADoor, meaningful));
            }
        }

        if config.strict {
            if let Some(first) = mismatches.pop() {
                return Err(first.into());
            }
        }
    }

    let packed = pack_nibbles(&nibbles);
    if config.strict && packed.dropped_bits > 0 {
        return Err(Error::PayloadPaddingLoss {
            dropped_bits: packed.dropped_bits,
        });
    }

    Ok(DecodeReport {
        payload: packed.bytes,
        nibbles: nibbles.len(),
        filler_steps,
        mismatches,
        dropped_bits: packed.dropped_bits,
    })
}
