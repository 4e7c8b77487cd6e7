//! Synthetic corpora shared by unit tests.

/// Words with one door per leaf; each becomes a meaningful node.
pub const HUBS: [&str; 8] = [
    "north", "south", "east", "west", "up", "down", "over", "under",
];

/// Successors of every hub, already in door order.
pub const LEAVES: [&str; 20] = [
    "amber", "birch", "cedar", "dune", "ember", "fern", "grove", "heath", "iris", "juniper",
    "kelp", "lichen", "moss", "nettle", "oak", "pine", "quartz", "reed", "sage", "thistle",
];

/// Corpus where the first `hubs` hubs are each followed by every leaf.
///
/// Leaves are only ever followed by hubs, so they stay filler nodes, and the
/// final leaf also appears earlier with successors, so there is no dead end.
pub fn hub_corpus(hubs: usize) -> String {
    let mut words = Vec::new();
    for hub in HUBS.iter().take(hubs) {
        for leaf in LEAVES {
            words.push(*hub);
            words.push(leaf);
        }
    }
    words.join(" ")
}
