//! Message-schedule expansion.
//!
//! Each 64-byte block expands into 64 schedule words: the first 16 are the
//! block's 4-byte groups read big-endian, the remaining 48 follow the
//! FIPS 180-4 §6.2.2 recurrence over earlier entries. A schedule lives only
//! while its block is being compressed.
#![allow(clippy::indexing_slicing)] // Fixed-size schedule and block arrays

use crate::bitops::{small_sigma0, small_sigma1};
use crate::constants::{BLOCK_BYTES, SCHEDULE_WORDS};
use crate::error::Error;

/// The 64 expanded words derived from one message block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageSchedule {
  words: [u32; SCHEDULE_WORDS],
}

impl MessageSchedule {
  /// Expand a block supplied as a dynamic slice.
  ///
  /// Validates the 64-byte block invariant and returns
  /// [`Error::InvalidBlockSize`] without producing a schedule otherwise.
  pub fn expand(block: &[u8]) -> Result<Self, Error> {
    let actual = block.len();
    let block: &[u8; BLOCK_BYTES] = block.try_into().map_err(|_| Error::InvalidBlockSize { actual })?;
    Ok(Self::expand_block(block))
  }

  /// Expand a block whose size invariant is established by its type.
  #[must_use]
  pub fn expand_block(block: &[u8; BLOCK_BYTES]) -> Self {
    let mut w = [0u32; SCHEDULE_WORDS];

    let (native, _) = block.as_chunks::<4>();
    for (i, bytes) in native.iter().enumerate() {
      w[i] = u32::from_be_bytes(*bytes);
    }

    for i in 16..SCHEDULE_WORDS {
      w[i] = small_sigma1(w[i - 2])
        .wrapping_add(w[i - 7])
        .wrapping_add(small_sigma0(w[i - 15]))
        .wrapping_add(w[i - 16]);
    }

    Self { words: w }
  }

  /// The schedule words in round order.
  #[inline]
  #[must_use]
  pub const fn words(&self) -> &[u32; SCHEDULE_WORDS] {
    &self.words
  }
}

#[cfg(test)]
mod tests {
  use alloc::vec;

  use super::*;

  #[test]
  fn native_words_are_big_endian() {
    let mut block = [0u8; BLOCK_BYTES];
    for (i, b) in block.iter_mut().enumerate() {
      *b = i as u8;
    }
    let schedule = MessageSchedule::expand_block(&block);
    assert_eq!(schedule.words()[0], 0x0001_0203);
    assert_eq!(schedule.words()[1], 0x0405_0607);
    assert_eq!(schedule.words()[15], 0x3C3D_3E3F);
  }

  #[test]
  fn all_zero_block_expands_to_all_zero() {
    // σ0(0) = σ1(0) = 0, so the recurrence stays at zero.
    let schedule = MessageSchedule::expand_block(&[0u8; BLOCK_BYTES]);
    assert_eq!(schedule.words(), &[0u32; SCHEDULE_WORDS]);
  }

  #[test]
  fn recurrence_values_for_a_single_set_bit() {
    // Block holding only the 0x80 separator: w[0] = 1 << 31, the rest of the
    // native words zero. The first derived words are then hand-computable.
    let mut block = [0u8; BLOCK_BYTES];
    block[0] = 0x80;
    let schedule = MessageSchedule::expand_block(&block);
    let w = schedule.words();

    // w[16] = σ1(0) + 0 + σ0(0) + w[0]
    assert_eq!(w[16], 0x8000_0000);
    // w[17] touches only zero inputs.
    assert_eq!(w[17], 0);
    // w[18] = σ1(w[16]) = rotr17 ^ rotr19 ^ shr10 of bit 31.
    assert_eq!(w[18], 0x0020_5000);
  }

  #[test]
  fn slice_form_agrees_with_typed_form() {
    let block = [0x5Au8; BLOCK_BYTES];
    let from_slice = MessageSchedule::expand(&block[..]).unwrap();
    assert_eq!(from_slice, MessageSchedule::expand_block(&block));
  }

  #[test]
  fn rejects_malformed_block_sizes() {
    for len in [0usize, 1, 63, 65, 128] {
      let block = vec![0u8; len];
      assert_eq!(MessageSchedule::expand(&block), Err(Error::InvalidBlockSize { actual: len }));
    }
  }
}
