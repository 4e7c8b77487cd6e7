//! Helpers shared by the integration test files.

#![allow(dead_code)]

use markov_stego::config::EncodeConfig;

/// Words with a door for every leaf: each one is meaningful.
pub const HUBS: [&str; 8] = [
    "north", "south", "east", "west", "up", "down", "over", "under",
];

/// Filler words; their doors are the hubs.
pub const LEAVES: [&str; 20] = [
    "amber", "birch", "cedar", "dune", "ember", "fern", "grove", "heath", "iris", "juniper",
    "kelp", "lichen", "moss", "nettle", "oak", "pine", "quartz", "reed", "sage", "thistle",
];

/// Hubs are each followed by every leaf; leaves only by hubs.
pub fn hub_corpus() -> String {
    let mut words = Vec::new();
    for hub in HUBS {
        for leaf in LEAVES {
            words.push(hub);
            words.push(leaf);
        }
    }
    words.join(" ")
}

pub fn seeded(seed: u64) -> EncodeConfig {
    EncodeConfig {
        seed: Some(seed),
        ..Default::default()
    }
}
