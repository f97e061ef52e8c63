//! The 64-round compression function and the chained hash state.
//!
//! Compression mutates the eight working words in place, one block at a
//! time. Blocks must be folded strictly in order: each block's rounds start
//! from the previous block's final state, and the closing addition folds the
//! round output back into the words the state held before round 0. That
//! addition is the only point where prior blocks influence the result.
#![allow(clippy::indexing_slicing)] // Fixed-size state and schedule arrays

use crate::bitops::{big_sigma0, big_sigma1, choose, majority};
use crate::constants::{H0, K, SCHEDULE_WORDS, STATE_WORDS};
use crate::error::Error;
use crate::schedule::MessageSchedule;

/// The eight working words A..H threaded across all blocks of one message.
///
/// Owned by the digest orchestrator; [`compress`] is the only mutator. After
/// the final block this is the digest, pre-encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashState {
  words: [u32; STATE_WORDS],
}

impl HashState {
  /// Fresh state holding the standard initial values.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { words: H0 }
  }

  /// The state words in A..H order.
  #[inline]
  #[must_use]
  pub const fn words(&self) -> &[u32; STATE_WORDS] {
    &self.words
  }

  /// Big-endian serialization of the state words.
  #[must_use]
  pub fn to_bytes(&self) -> [u8; 32] {
    let mut out = [0u8; 32];
    for (chunk, word) in out.chunks_exact_mut(4).zip(self.words) {
      chunk.copy_from_slice(&word.to_be_bytes());
    }
    out
  }
}

impl Default for HashState {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

/// Fold one expanded block into `state`.
///
/// Runs the 64 rounds on a register file copied out of `state`, then adds
/// each register to the word `state` held before round 0. `state` itself is
/// untouched during the rounds, so it serves as the saved pre-round copy the
/// chaining addition requires.
pub fn compress(state: &mut HashState, schedule: &MessageSchedule) {
  compress_core(&mut state.words, schedule.words());
}

/// Slice-validating form of [`compress`] for callers holding dynamic buffers.
///
/// Validates the 8-word state and 64-word schedule invariants; on violation
/// the corresponding error is returned and `state` is left untouched.
pub fn compress_words(state: &mut [u32], schedule: &[u32]) -> Result<(), Error> {
  let schedule_len = schedule.len();
  let schedule: &[u32; SCHEDULE_WORDS] =
    schedule.try_into().map_err(|_| Error::InvalidSchedule { actual: schedule_len })?;

  let state_len = state.len();
  let state: &mut [u32; STATE_WORDS] = state.try_into().map_err(|_| Error::InvalidHashSize { actual: state_len })?;

  compress_core(state, schedule);
  Ok(())
}

fn compress_core(state: &mut [u32; STATE_WORDS], w: &[u32; SCHEDULE_WORDS]) {
  let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

  for (&k, &wi) in K.iter().zip(w) {
    let t1 = h
      .wrapping_add(big_sigma1(e))
      .wrapping_add(choose(e, f, g))
      .wrapping_add(k)
      .wrapping_add(wi);
    let t2 = big_sigma0(a).wrapping_add(majority(a, b, c));

    // Rotate the register file down one slot; the old `h` is discarded and
    // `e` picks up the pre-rotation `d` plus `t1`.
    h = g;
    g = f;
    f = e;
    e = d.wrapping_add(t1);
    d = c;
    c = b;
    b = a;
    a = t1.wrapping_add(t2);
  }

  state[0] = state[0].wrapping_add(a);
  state[1] = state[1].wrapping_add(b);
  state[2] = state[2].wrapping_add(c);
  state[3] = state[3].wrapping_add(d);
  state[4] = state[4].wrapping_add(e);
  state[5] = state[5].wrapping_add(f);
  state[6] = state[6].wrapping_add(g);
  state[7] = state[7].wrapping_add(h);
}
