//! One-shot digest orchestration.

use alloc::string::String;

use traits::Digest;

use crate::compress::{self, HashState};
use crate::constants::BLOCK_BYTES;
use crate::hex;
use crate::pad;
use crate::schedule::MessageSchedule;

/// The SHA-256 digest function.
///
/// Each call pads its input into an owned buffer, threads a fresh
/// [`HashState`] through every 64-byte block in order, and serializes the
/// final state. Calls share no mutable state beyond the constant tables, so
/// independent messages may be hashed concurrently.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256;

impl Sha256 {
  /// Compute the digest of `data` in one shot.
  #[must_use]
  pub fn digest(data: &[u8]) -> [u8; 32] {
    Self::final_state(data).to_bytes()
  }

  /// Digest `data` and render the result as 64 lowercase hex characters.
  #[must_use]
  pub fn digest_hex(data: &[u8]) -> String {
    hex::encode(Self::final_state(data).words())
  }

  fn final_state(data: &[u8]) -> HashState {
    let padded = pad::pad(data);
    let mut state = HashState::new();

    let (blocks, rest) = padded.as_chunks::<BLOCK_BYTES>();
    debug_assert!(rest.is_empty());
    for block in blocks {
      let schedule = MessageSchedule::expand_block(block);
      compress::compress(&mut state, &schedule);
    }

    state
  }
}

impl Digest for Sha256 {
  const OUTPUT_SIZE: usize = 32;
  type Output = [u8; 32];

  #[inline]
  fn digest(data: &[u8]) -> Self::Output {
    Sha256::digest(data)
  }
}
