//! Resilience tests - corrupted text, poor corpora and failing walks.

mod common;

use common::{hub_corpus, seeded, HUBS};
use markov_stego::config::{DecodeConfig, EncodeConfig};
use markov_stego::encoding::MismatchKind;
use markov_stego::{Corpus, Error};

#[test]
fn test_substituted_word_is_reported() {
    let corpus = Corpus::from_text(&hub_corpus());
    let payload = b"tamper evident";
    let encoded = corpus.encode(payload, &seeded(1)).unwrap();

    // Replace the successor of the first meaningful step with a foreign word
    let mut words = encoded.words.clone();
    let step = words
        .iter()
        .position(|w| HUBS.contains(&w.as_str()))
        .expect("walk visits a hub");
    words[step + 1] = "xylophone".to_string();

    let report = corpus
        .decode(&words.join(" "), &DecodeConfig::default())
        .unwrap();

    assert!(!report.is_clean());
    assert_eq!(report.mismatches[0].position, step);
    assert_eq!(report.mismatches[0].kind, MismatchKind::NotADoor);
    assert!(report.mismatches[0].lost_nibble);
    assert_eq!(report.mismatches[1].kind, MismatchKind::UnknownWord);
    assert_ne!(report.payload, payload.to_vec());
}

#[test]
fn test_strict_decode_rejects_corruption() {
    let corpus = Corpus::from_text(&hub_corpus());
    let encoded = corpus.encode(b"abc", &seeded(2)).unwrap();
    let corrupted = format!("{} zebra", encoded.text());

    let result = corpus.decode(&corrupted, &DecodeConfig { strict: true });
    match result {
        Err(Error::DecodingMismatch { successor, .. }) => assert_eq!(successor, "zebra"),
        other => panic!("expected mismatch, got {:?}", other),
    }
}

#[test]
fn test_foreign_text_decodes_to_nothing_useful() {
    let corpus = Corpus::from_text(&hub_corpus());
    let report = corpus
        .decode(
            "Lorem ipsum dolor sit amet, consectetur adipiscing elit.",
            &DecodeConfig::default(),
        )
        .unwrap();

    assert!(report.payload.is_empty());
    assert_eq!(report.mismatches.len(), 7);
    assert!(report
        .mismatches
        .iter()
        .all(|m| m.kind == MismatchKind::UnknownWord));
}

#[test]
fn test_wrong_corpus_does_not_recover_payload() {
    let sender = Corpus::from_text(&hub_corpus());
    let receiver = Corpus::from_text(&format!("{} north aardvark", hub_corpus()));
    assert_ne!(sender.fingerprint(), receiver.fingerprint());

    let payload = b"\x00\x11\x22\x33";
    let encoded = sender.encode(payload, &seeded(3)).unwrap();
    let report = receiver
        .decode(&encoded.text(), &DecodeConfig::default())
        .unwrap();

    // "north" gained a door at index 0, shifting every north step by one
    assert!(encoded.words.iter().any(|w| w == "north"));
    assert_ne!(report.payload, payload.to_vec());
}

#[test]
fn test_truncated_text_drops_partial_byte() {
    let corpus = Corpus::from_text(&hub_corpus());
    let encoded = corpus.encode(&[0xAB, 0xCD], &seeded(4)).unwrap();

    // Drop everything after the third meaningful step
    let mut seen = 0;
    let mut cut = encoded.words.len();
    for (i, word) in encoded.words.iter().enumerate() {
        if HUBS.contains(&word.as_str()) {
            seen += 1;
            if seen == 3 {
                cut = i + 2;
                break;
            }
        }
    }
    let truncated = encoded.words[..cut].join(" ");

    let report = corpus
        .decode(&truncated, &DecodeConfig::default())
        .unwrap();
    assert_eq!(report.payload, vec![0xAB]);
    assert_eq!(report.nibbles, 3);
    assert_eq!(report.dropped_bits, 4);

    let strict = corpus.decode(&truncated, &DecodeConfig { strict: true });
    assert!(matches!(
        strict,
        Err(Error::PayloadPaddingLoss { dropped_bits: 4 })
    ));
}

#[test]
fn test_poor_corpus_fails_viability() {
    let corpus = Corpus::from_text("the cat sat on the mat the cat ran the dog sat");
    let report = corpus.viability();

    assert!(!report.passed);
    assert_eq!(report.meaningful_count, 0);
    assert!(matches!(
        corpus.encode(b"x", &EncodeConfig::default()),
        Err(Error::ViabilityFailed {
            meaningful: 0,
            required: 7
        })
    ));
}

#[test]
fn test_forced_encode_on_filler_only_corpus_stalls() {
    let corpus = Corpus::from_text("the cat sat on the mat the cat ran the dog sat on the mat");
    let config = EncodeConfig {
        force: true,
        max_filler_run: 200,
        attempts: 2,
        seed: Some(5),
    };

    let result = corpus.encode(b"x", &config);
    assert!(matches!(
        result,
        Err(Error::WalkStalled { steps: 200 }) | Err(Error::EncodingDeadEnd { .. })
    ));
}

#[test]
fn test_dead_end_chain() {
    let corpus = Corpus::from_text("once upon a time");
    let config = EncodeConfig {
        force: true,
        seed: Some(6),
        ..Default::default()
    };

    match corpus.encode(b"x", &config) {
        Err(Error::EncodingDeadEnd { word, .. }) => assert_eq!(word, "time"),
        other => panic!("expected dead end, got {:?}", other.map(|e| e.words)),
    }
}

#[test]
fn test_retries_escape_dead_ends() {
    // "north aardvark" ends the corpus: aardvark is north's door 0 and a dead end.
    let corpus = Corpus::from_text(&format!("{} north aardvark", hub_corpus()));
    let payload = [0x00, 0x00];

    let single_failures = (0..40)
        .filter(|&seed| {
            matches!(
                corpus.encode(&payload, &seeded(seed)),
                Err(Error::EncodingDeadEnd { .. })
            )
        })
        .count();
    assert!(single_failures > 0);

    for seed in 0..10 {
        let config = EncodeConfig {
            attempts: 40,
            seed: Some(seed),
            ..Default::default()
        };
        let encoded = corpus.encode(&payload, &config).unwrap();
        let report = corpus
            .decode(&encoded.text(), &DecodeConfig { strict: true })
            .unwrap();
        assert_eq!(report.payload, payload.to_vec());
    }
}
