//! Message padding and length framing.
//!
//! A raw message is extended to a multiple of the 64-byte block size
//! following FIPS 180-4 §5.1.1: the original bytes, a single `0x80` byte
//! (the `1` bit followed by seven `0` bits), zero fill, and the original
//! length in bits as a big-endian `u64` trailer right-aligned in the final
//! block. The padded message is an owned buffer scoped to one digest call.

use alloc::vec::Vec;

use crate::constants::{BLOCK_BYTES, LENGTH_BYTES};

/// Smallest multiple of [`BLOCK_BYTES`] that fits `len` message bytes plus
/// the separator byte and the length trailer.
#[inline]
#[must_use]
pub const fn padded_len(len: usize) -> usize {
  (len + 1 + LENGTH_BYTES).div_ceil(BLOCK_BYTES) * BLOCK_BYTES
}

/// Pad `message` into an owned buffer whose length is a positive multiple of
/// 64 bytes.
///
/// An empty message still produces exactly one full block. Total function:
/// a slice is always a well-formed byte sequence.
#[must_use]
pub fn pad(message: &[u8]) -> Vec<u8> {
  let total = padded_len(message.len());

  let mut padded = Vec::with_capacity(total);
  padded.extend_from_slice(message);
  padded.push(0x80);
  padded.resize(total - LENGTH_BYTES, 0);

  let bit_len = (message.len() as u64).wrapping_mul(8);
  padded.extend_from_slice(&bit_len.to_be_bytes());

  padded
}
