//! markov-stego - hide data in prose generated from a reference corpus.
//!
//! Both sides need the same corpus: the encoder walks its word-transition
//! graph to spell out the payload, the decoder rebuilds the graph and
//! replays the walk.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use markov_stego::config::{
    DecodeConfig, EncodeConfig, FormatConfig, DEFAULT_ENCODE_ATTEMPTS, DEFAULT_MAX_FILLER_RUN,
};
use markov_stego::text::{format_words, Layout};
use markov_stego::Corpus;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "markov-stego")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Hide data in natural-looking text built from a reference corpus",
    long_about = "Encodes a payload as a walk through the word-transition graph of a corpus. The same corpus is needed to decode it."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a corpus branches enough to carry data
    Check {
        /// Corpus file or directory
        #[arg(long)]
        corpus: PathBuf,

        /// List the meaningful words
        #[arg(long)]
        verbose: bool,
    },

    /// Hide a payload in generated text
    Encode {
        /// Corpus file or directory
        #[arg(long)]
        corpus: PathBuf,

        /// Input file to hide
        #[arg(long, conflicts_with = "data")]
        input: Option<PathBuf>,

        /// String data to hide
        #[arg(long, conflicts_with = "input")]
        data: Option<String>,

        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Output layout: plain, poem or email
        #[arg(long, default_value = "plain")]
        layout: Layout,

        /// Seed for a reproducible walk and layout
        #[arg(long)]
        seed: Option<u64>,

        /// Encode even if the corpus fails the viability check
        #[arg(long)]
        force: bool,

        /// Fresh walks to try when one dead-ends
        #[arg(long, default_value_t = DEFAULT_ENCODE_ATTEMPTS)]
        attempts: usize,

        /// Consecutive filler steps allowed before a walk is abandoned
        #[arg(long, default_value_t = DEFAULT_MAX_FILLER_RUN)]
        max_filler_run: usize,

        /// Print walk statistics to stderr
        #[arg(long)]
        verbose: bool,
    },

    /// Recover a payload from encoded text
    Decode {
        /// Corpus file or directory
        #[arg(long)]
        corpus: PathBuf,

        /// Encoded text file (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(long)]
        output: Option<PathBuf>,

        /// Fail on any mismatch or dropped trailing bits
        #[arg(long)]
        strict: bool,

        /// Print decode statistics to stderr
        #[arg(long)]
        verbose: bool,
    },

    /// Show corpus graph statistics
    Inspect {
        /// Corpus file or directory
        #[arg(long)]
        corpus: PathBuf,

        /// Show the doors of one word
        #[arg(long)]
        word: Option<String>,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Run a command. `Ok(false)` means it completed but reports failure.
fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Check { corpus, verbose } => cmd_check(&corpus, verbose),

        Commands::Encode {
            corpus,
            input,
            data,
            output,
            layout,
            seed,
            force,
            attempts,
            max_filler_run,
            verbose,
        } => {
            let config = EncodeConfig {
                force,
                max_filler_run,
                attempts,
                seed,
            };
            cmd_encode(&corpus, input, data, output, layout, &config, verbose)?;
            Ok(true)
        }

        Commands::Decode {
            corpus,
            input,
            output,
            strict,
            verbose,
        } => cmd_decode(&corpus, input, output, &DecodeConfig { strict }, verbose),

        Commands::Inspect { corpus, word, json } => {
            cmd_inspect(&corpus, word.as_deref(), json)?;
            Ok(true)
        }
    }
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    Corpus::from_path(path).with_context(|| format!("loading corpus {}", path.display()))
}

fn cmd_check(corpus_path: &Path, verbose: bool) -> Result<bool> {
    let corpus = load_corpus(corpus_path)?;
    let info = corpus.info();

    println!("Corpus Viability");
    println!("================");
    println!("Fingerprint:      {}", info.fingerprint);
    println!("Tokens:           {}", info.stats.tokens);
    println!("Words:            {}", info.stats.nodes);
    println!(
        "Meaningful words: {} (need {})",
        info.viability.meaningful_count, info.viability.required
    );

    if verbose && !info.viability.meaningful_keys.is_empty() {
        println!();
        println!("Meaningful:");
        for key in &info.viability.meaningful_keys {
            if let Some(node) = corpus.node(key) {
                println!("  {:<20} {} doors", key, node.door_count());
            }
        }
    }

    println!();
    if info.viability.passed {
        println!("✓ Corpus is viable");
    } else {
        println!("✗ Corpus is not viable (encode with --force to use it anyway)");
    }

    Ok(info.viability.passed)
}

fn cmd_encode(
    corpus_path: &Path,
    input: Option<PathBuf>,
    data: Option<String>,
    output: Option<PathBuf>,
    layout: Layout,
    config: &EncodeConfig,
    verbose: bool,
) -> Result<()> {
    let payload = match (input, data) {
        (Some(path), None) => {
            std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?
        }
        (None, Some(s)) => s.into_bytes(),
        (None, None) => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
        (Some(_), Some(_)) => unreachable!(),
    };

    let corpus = load_corpus(corpus_path)?;
    let encoded = corpus.encode(&payload, config)?;

    if encoded.forced {
        eprintln!("Warning: corpus failed the viability check; output may be very long");
    }

    let format_config = FormatConfig::default();
    let text = match config.seed {
        Some(seed) => format_words(
            &encoded.words,
            layout,
            &format_config,
            &mut ChaCha8Rng::seed_from_u64(seed),
        )?,
        None => format_words(
            &encoded.words,
            layout,
            &format_config,
            &mut rand::thread_rng(),
        )?,
    };

    match output {
        Some(path) => {
            std::fs::write(&path, format!("{}\n", text))
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {} words to {}", encoded.words.len(), path.display());
        }
        None => println!("{}", text),
    }

    if verbose {
        eprintln!("Payload:          {} bytes", payload.len());
        eprintln!("Words:            {}", encoded.words.len());
        eprintln!("Meaningful steps: {}", encoded.meaningful_steps);
        eprintln!("Filler steps:     {}", encoded.filler_steps);
        eprintln!("Attempts:         {}", encoded.attempts);
        eprintln!(
            "Expansion:        {:.1} words/byte",
            encoded.expansion_ratio(payload.len())
        );
        eprintln!("Corpus:           {}", corpus.fingerprint());
    }

    Ok(())
}

fn cmd_decode(
    corpus_path: &Path,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: &DecodeConfig,
    verbose: bool,
) -> Result<bool> {
    let text = match input {
        Some(path) => {
            let bytes =
                std::fs::read(&path).with_context(|| format!("reading {}", path.display()))?;
            String::from_utf8_lossy(&bytes).into_owned()
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let corpus = load_corpus(corpus_path)?;
    let report = corpus.decode(&text, config)?;

    for m in &report.mismatches {
        eprintln!(
            "Warning: word {}: '{}' -> '{}' ({:?}{})",
            m.position,
            m.word,
            m.successor,
            m.kind,
            if m.lost_nibble { ", nibble lost" } else { "" }
        );
    }
    if report.dropped_bits > 0 {
        eprintln!(
            "Warning: {} trailing bits did not fill a byte and were dropped",
            report.dropped_bits
        );
    }

    match output {
        Some(path) => {
            std::fs::write(&path, &report.payload)
                .with_context(|| format!("writing {}", path.display()))?;
            eprintln!("Wrote {} bytes to {}", report.payload.len(), path.display());
        }
        None => {
            io::stdout().write_all(&report.payload)?;
            io::stdout().flush()?;
        }
    }

    if verbose {
        eprintln!("Nibbles:          {}", report.nibbles);
        eprintln!("Filler steps:     {}", report.filler_steps);
        eprintln!("Mismatches:       {}", report.mismatches.len());
        eprintln!("Corpus:           {}", corpus.fingerprint());
    }

    Ok(report.is_clean())
}

fn cmd_inspect(corpus_path: &Path, word: Option<&str>, json: bool) -> Result<()> {
    let corpus = load_corpus(corpus_path)?;

    if let Some(word) = word {
        let node = corpus
            .node(word)
            .with_context(|| format!("'{}' does not occur in the corpus", word))?;

        if json {
            println!("{}", serde_json::to_string_pretty(node)?);
        } else {
            println!("Word:        {}", node.key);
            println!("Spelling:    {}", node.surface_form);
            println!("Seen:        {}", node.seen_count);
            println!("Doors:       {}", node.door_count());
            println!("Meaningful:  {}", node.is_meaningful());
            println!();
            for (i, door) in node.doors.iter().enumerate() {
                let count = node.exit_frequency.get(door).copied().unwrap_or(0);
                println!("  {:>3}  {:<20} x{}", i, door, count);
            }
        }
        return Ok(());
    }

    let info = corpus.info();
    if json {
        println!("{}", info.to_json()?);
    } else {
        println!("Corpus Graph");
        println!("============");
        println!("Fingerprint:  {}", info.fingerprint);
        println!("Tokens:       {}", info.stats.tokens);
        println!("Words:        {}", info.stats.nodes);
        println!("Meaningful:   {}", info.stats.meaningful);
        println!("Max doors:    {}", info.stats.max_doors);
        println!("Mean doors:   {:.2}", info.stats.mean_doors);
        println!(
            "Viable:       {}",
            if info.viability.passed { "yes" } else { "no" }
        );
    }

    Ok(())
}
