//! Byte <-> nibble conversion.
//!
//! Bytes are treated as one big-endian bit string (most significant bit
//! first) and cut into 4-bit groups left to right. Every byte splits into
//! exactly two nibbles, so splitting never loses data.
//!
//! # Padding Rules
//! - Packing concatenates nibbles and emits a byte for every 8 bits.
//! - A trailing group of fewer than 8 bits (an odd nibble count) is dropped
//!   and reported in [`PackedBytes::dropped_bits`]. It is never zero-padded
//!   into an extra byte.

use crate::config::NIBBLE_BITS;

/// Result of packing nibbles into bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBytes {
    /// Complete bytes.
    pub bytes: Vec<u8>,
    /// Trailing bits that did not fill a byte and were dropped (0 or 4).
    pub dropped_bits: usize,
}

/// Split bytes into nibbles, high nibble first.
///
/// # Example
///
/// ```
/// use markov_stego::encoding::bytes_to_nibbles;
///
/// assert_eq!(bytes_to_nibbles(&[0x41, 0xF0]), vec![4, 1, 15, 0]);
/// ```
pub fn bytes_to_nibbles(bytes: &[u8]) -> Vec<u8> {
    let mut nibbles = Vec::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        nibbles.push(byte >> NIBBLE_BITS);
        nibbles.push(byte & 0x0F);
    }
    nibbles
}

/// Pack nibbles into bytes, reporting any dropped trailing bits.
///
/// Only the low 4 bits of each input value are used.
pub fn pack_nibbles(nibbles: &[u8]) -> PackedBytes {
    let mut bytes = Vec::with_capacity(nibbles.len() / 2);
    // Accumulator for the current partial byte (MSB-aligned)
    let mut bit_buffer: u8 = 0;
    // Number of bits in bit_buffer (0 or 4)
    let mut bit_count: usize = 0;

    for &nibble in nibbles {
        bit_buffer |= (nibble & 0x0F) << (8 - bit_count - NIBBLE_BITS);
        bit_count += NIBBLE_BITS;

        if bit_count == 8 {
            bytes.push(bit_buffer);
            bit_buffer = 0;
            bit_count = 0;
        }
    }

    PackedBytes {
        bytes,
        dropped_bits: bit_count,
    }
}

/// Pack nibbles into bytes, silently dropping a trailing half byte.
///
/// Use [`pack_nibbles`] when the loss needs to be observed.
pub fn nibbles_to_bytes(nibbles: &[u8]) -> Vec<u8> {
    pack_nibbles(nibbles).bytes
}
