//! Hex rendering of the final hash state.
//!
//! Each of the eight state words becomes 8 lowercase hex digits, most
//! significant nibble first, concatenated in state order A..H. The output is
//! always exactly 64 characters with no prefix and no newline.
#![allow(clippy::indexing_slicing)] // Nibble values index a 16-entry table

use alloc::string::String;

use crate::constants::STATE_WORDS;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Render eight state words as a 64-character lowercase hex string.
#[must_use]
pub fn encode(words: &[u32; STATE_WORDS]) -> String {
  let mut out = String::with_capacity(STATE_WORDS * 8);
  for &word in words {
    for shift in (0..8).rev() {
      let nibble = (word >> (shift * 4)) & 0xF;
      out.push(HEX_DIGITS[nibble as usize] as char);
    }
  }
  out
}
