//! Decorative layouts for encoded word streams.
//!
//! Layouts only touch whitespace, punctuation and letter case. Word identity
//! and order are left alone, so the tokenizer recovers the same sequence
//! (modulo case, which the decoder ignores).

use crate::config::FormatConfig;
use crate::error::{Error, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Output shape for encoded text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Words joined by single spaces.
    #[default]
    Plain,
    /// Short capitalised lines grouped into stanzas.
    Poem,
    /// Sentences ending in periods grouped into paragraphs.
    Email,
}

impl FromStr for Layout {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "plain" => Ok(Layout::Plain),
            "poem" => Ok(Layout::Poem),
            "email" => Ok(Layout::Email),
            other => Err(format!(
                "unknown layout '{}': expected plain, poem or email",
                other
            )),
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Layout::Plain => "plain",
            Layout::Poem => "poem",
            Layout::Email => "email",
        };
        f.write_str(name)
    }
}

/// Upper-case the first letter when doing so survives a lowercase round trip.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };

    let candidate: String = first.to_uppercase().chain(chars).collect();
    if candidate.to_lowercase() == word.to_lowercase() {
        candidate
    } else {
        word.to_string()
    }
}

/// Split `words` into consecutive groups with random sizes in `[min, max]`.
fn chunk_randomly<'a, R: Rng>(
    words: &'a [String],
    min: usize,
    max: usize,
    rng: &mut R,
) -> Vec<&'a [String]> {
    let mut groups = Vec::new();
    let mut rest = words;

    while !rest.is_empty() {
        let size = rng.gen_range(min..=max).min(rest.len());
        let (head, tail) = rest.split_at(size);
        groups.push(head);
        rest = tail;
    }

    groups
}

fn render_poem<R: Rng>(words: &[String], config: &FormatConfig, rng: &mut R) -> String {
    let lines: Vec<String> =
        chunk_randomly(words, config.line_words_min, config.line_words_max, rng)
            .into_iter()
            .map(|line| {
                let mut out = capitalize(&line[0]);
                for word in &line[1..] {
                    out.push(' ');
                    out.push_str(word);
                }
                out
            })
            .collect();

    lines
        .chunks(config.lines_per_stanza)
        .map(|stanza| stanza.join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_email<R: Rng>(words: &[String], config: &FormatConfig, rng: &mut R) -> String {
    let sentences: Vec<String> = chunk_randomly(
        words,
        config.sentence_words_min,
        config.sentence_words_max,
        rng,
    )
    .into_iter()
    .map(|sentence| {
        let mut out = capitalize(&sentence[0]);
        for word in &sentence[1..] {
            out.push(' ');
            out.push_str(word);
        }
        out.push('.');
        out
    })
    .collect();

    sentences
        .chunks(config.sentences_per_paragraph)
        .map(|paragraph| paragraph.join(" "))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render a word sequence in the requested layout.
///
/// Fails with `InvalidConfig` when `config` has an empty or inverted range.
///
/// # Example
///
/// ```
/// use markov_stego::config::FormatConfig;
/// use markov_stego::text::{format_words, Layout};
///
/// let words: Vec<String> = ["the", "cat", "sat"].iter().map(|w| w.to_string()).collect();
/// let text = format_words(&words, Layout::Plain, &FormatConfig::default(), &mut rand::thread_rng())?;
/// assert_eq!(text, "the cat sat");
/// # Ok::<(), markov_stego::Error>(())
/// ```
pub fn format_words<R: Rng>(
    words: &[String],
    layout: Layout,
    config: &FormatConfig,
    rng: &mut R,
) -> Result<String> {
    config.validate().map_err(Error::InvalidConfig)?;

    if words.is_empty() {
        return Ok(String::new());
    }

    Ok(match layout {
        Layout::Plain => words.join(" "),
        Layout::Poem => render_poem(words, config, rng),
        Layout::Email => render_email(words, config, rng),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::tokenize;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn sample_words(count: usize) -> Vec<String> {
        let vocab = ["the", "Cat", "sat", "on", "a", "mat", "don't", "über", "ß_x"];
        (0..count).map(|i| vocab[i % vocab.len()].to_string()).collect()
    }

    fn lowered(words: &[String]) -> Vec<String> {
        words.iter().map(|w| w.to_lowercase()).collect()
    }

    #[test]
    fn test_layout_parse() {
        assert_eq!("poem".parse::<Layout>().unwrap(), Layout::Poem);
        assert_eq!("EMAIL".parse::<Layout>().unwrap(), Layout::Email);
        assert!("sonnet".parse::<Layout>().is_err());
        assert_eq!(Layout::Plain.to_string(), "plain");
    }

    #[test]
    fn test_layouts_preserve_words() {
        let words = sample_words(57);
        let config = FormatConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(3);

        for layout in [Layout::Plain, Layout::Poem, Layout::Email] {
            let text = format_words(&words, layout, &config, &mut rng).unwrap();
            assert_eq!(lowered(&tokenize(&text)), lowered(&words), "{}", layout);
        }
    }

    #[test]
    fn test_poem_stanzas() {
        let words = sample_words(40);
        let config = FormatConfig {
            line_words_min: 2,
            line_words_max: 2,
            lines_per_stanza: 5,
            ..Default::default()
        };
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let text = format_words(&words, Layout::Poem, &config, &mut rng).unwrap();
        let stanzas: Vec<&str> = text.split("\n\n").collect();
        assert_eq!(stanzas.len(), 4);
        assert!(stanzas.iter().all(|s| s.lines().count() == 5));
        assert!(text.starts_with("The Cat\n"));
    }

    #[test]
    fn test_email_sentences_end_with_period() {
        let words = sample_words(30);
        let mut rng = ChaCha8Rng::seed_from_u64(9);

        let text = format_words(&words, Layout::Email, &FormatConfig::default(), &mut rng).unwrap();
        assert!(text.ends_with('.'));
        assert!(text.starts_with('T'));
    }

    #[test]
    fn test_capitalize_skips_lossy_case() {
        assert_eq!(capitalize("cat"), "Cat");
        assert_eq!(capitalize("'tis"), "'tis");
        assert_eq!(capitalize("ßx"), "ßx");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_empty_words() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let text = format_words(&[], Layout::Poem, &FormatConfig::default(), &mut rng).unwrap();
        assert!(text.is_empty());
    }

    #[test]
    fn test_zero_sizes_rejected() {
        let words = sample_words(30);
        let configs = [
            FormatConfig {
                line_words_min: 0,
                line_words_max: 3,
                ..Default::default()
            },
            FormatConfig {
                lines_per_stanza: 0,
                ..Default::default()
            },
            FormatConfig {
                sentences_per_paragraph: 0,
                ..Default::default()
            },
            FormatConfig {
                sentence_words_min: 0,
                ..Default::default()
            },
        ];

        for config in configs {
            for layout in [Layout::Plain, Layout::Poem, Layout::Email] {
                let mut rng = ChaCha8Rng::seed_from_u64(4);
                let result = format_words(&words, layout, &config, &mut rng);
                assert!(matches!(result, Err(Error::InvalidConfig(_))), "{:?}", config);
            }
        }
    }

    #[test]
    fn test_inverted_ranges_rejected() {
        let words = sample_words(30);
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let lines = FormatConfig {
            line_words_min: 8,
            line_words_max: 4,
            ..Default::default()
        };
        assert!(matches!(
            format_words(&words, Layout::Poem, &lines, &mut rng),
            Err(Error::InvalidConfig(_))
        ));

        let sentences = FormatConfig {
            sentence_words_min: 16,
            sentence_words_max: 6,
            ..Default::default()
        };
        assert!(matches!(
            format_words(&words, Layout::Email, &sentences, &mut rng),
            Err(Error::InvalidConfig(_))
        ));
    }
}
