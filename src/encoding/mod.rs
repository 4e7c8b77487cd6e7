//! Hiding payloads in word walks and reading them back.
//!
//! This module provides the nibble codec shared by both directions, the
//! encoder (payload -> walk) and the decoder (walk -> payload).

mod decoder;
mod encoder;
mod nibbles;

pub use decoder::{decode, DecodeReport, Mismatch, MismatchKind};
pub use encoder::{encode, encode_with_rng, EncodedText};
pub use nibbles::{bytes_to_nibbles, nibbles_to_bytes, pack_nibbles, PackedBytes};
