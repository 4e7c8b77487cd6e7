//! Reference corpus: loading, fingerprinting and the encode/decode facade.

mod loader;
mod operations;

pub use loader::{collect_files, read_corpus};
pub use operations::{Corpus, CorpusInfo};
