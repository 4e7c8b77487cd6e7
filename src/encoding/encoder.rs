//! Payload encoder: a guided random walk over the transition graph.

use crate::config::EncodeConfig;
use crate::encoding::nibbles::bytes_to_nibbles;
use crate::error::{Error, Result};
use crate::graph::{check_viability, TransitionGraph};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Result of encoding a payload.
#[derive(Debug, Clone)]
pub struct EncodedText {
    /// Emitted words, in walk order.
    pub words: Vec<String>,
    /// Steps through meaningful nodes (one nibble each).
    pub meaningful_steps: usize,
    /// Steps through filler nodes.
    pub filler_steps: usize,
    /// Walks started, including the successful one.
    pub attempts: usize,
    /// Whether the viability check was overridden.
    pub forced: bool,
}

impl EncodedText {
    /// Words joined by single spaces.
    pub fn text(&self) -> String {
        self.words.join(" ")
    }

    /// Emitted words per payload byte.
    pub fn expansion_ratio(&self, payload_len: usize) -> f64 {
        if payload_len == 0 {
            0.0
        } else {
            self.words.len() as f64 / payload_len as f64
        }
    }
}

struct Walk {
    words: Vec<String>,
    meaningful_steps: usize,
    filler_steps: usize,
}

/// Walk the graph once from a random corpus token, consuming `nibbles`.
fn walk<R: Rng>(
    nibbles: &[u8],
    graph: &TransitionGraph,
    max_filler_run: usize,
    rng: &mut R,
) -> Result<Walk> {
    let tokens = graph.tokens();
    let mut current: &str = &tokens[rng.gen_range(0..tokens.len())];

    let mut words = Vec::new();
    let mut next_nibble = 0;
    let mut meaningful_steps = 0;
    let mut filler_steps = 0;
    let mut filler_run = 0;

    while next_nibble < nibbles.len() {
        words.push(current.to_string());

        let node = match graph.node(current) {
            Some(node) if !node.doors.is_empty() => node,
            _ => {
                return Err(Error::EncodingDeadEnd {
                    word: current.to_string(),
                    step: words.len() - 1,
                })
            }
        };

        if node.is_meaningful() {
            current = &node.doors[nibbles[next_nibble] as usize];
            next_nibble += 1;
            meaningful_steps += 1;
            filler_run = 0;
        } else {
            filler_run += 1;
            if filler_run > max_filler_run {
                return Err(Error::WalkStalled {
                    steps: max_filler_run,
                });
            }
            current = &node.doors[rng.gen_range(0..node.door_count())];
            filler_steps += 1;
        }
    }

    words.push(current.to_string());

    Ok(Walk {
        words,
        meaningful_steps,
        filler_steps,
    })
}

/// Encode a payload using a caller-supplied random source.
///
/// The random source only picks the starting word and the hops through
/// filler nodes. Meaningful hops are fixed by the payload.
///
/// # Errors
///
/// - `CorpusEmpty` if the graph was built from no tokens
/// - `ViabilityFailed` if the corpus is too poor and `config.force` is unset
/// - `EncodingDeadEnd` / `WalkStalled` if every attempt failed
pub fn encode_with_rng<R: Rng>(
    payload: &[u8],
    graph: &TransitionGraph,
    config: &EncodeConfig,
    rng: &mut R,
) -> Result<EncodedText> {
    config.validate().map_err(Error::InvalidConfig)?;

    if graph.tokens().is_empty() {
        return Err(Error::CorpusEmpty);
    }

    let report = check_viability(graph);
    report.gate(config.force)?;

    let nibbles = bytes_to_nibbles(payload);

    let mut attempt = 0;
    loop {
        attempt += 1;
        match walk(&nibbles, graph, config.max_filler_run, rng) {
            Ok(walk) => {
                return Ok(EncodedText {
                    words: walk.words,
                    meaningful_steps: walk.meaningful_steps,
                    filler_steps: walk.filler_steps,
                    attempts: attempt,
                    forced: !report.passed,
                })
            }
            Err(Error::EncodingDeadEnd { .. }) | Err(Error::WalkStalled { .. })
                if attempt < config.attempts =>
            {
                continue
            }
            Err(e) => return Err(e),
        }
    }
}

/// Encode a payload.
///
/// Uses a ChaCha RNG seeded from `config.seed` when set, otherwise the
/// thread RNG.
///
/// # Example
///
/// ```
/// use markov_stego::config::EncodeConfig;
/// use markov_stego::encoding::encode;
/// use markov_stego::graph::TransitionGraph;
/// use markov_stego::text::tokenize;
///
/// let graph = TransitionGraph::build(tokenize("a b c"));
/// // Too few meaningful nodes for an unforced encode.
/// assert!(encode(b"hi", &graph, &EncodeConfig::default()).is_err());
/// ```
pub fn encode(
    payload: &[u8],
    graph: &TransitionGraph,
    config: &EncodeConfig,
) -> Result<EncodedText> {
    match config.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            encode_with_rng(payload, graph, config, &mut rng)
        }
        None => encode_with_rng(payload, graph, config, &mut rand::thread_rng()),
    }
}
