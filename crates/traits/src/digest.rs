//! Cryptographic digest traits.
//!
//! One-shot digests only: implementations in this workspace materialize the
//! whole padded message before processing, so the trait deliberately carries
//! no streaming `update`/`finalize` surface.

use core::fmt::Debug;

/// Cryptographic hash function producing a fixed-size digest from a complete
/// in-memory message.
pub trait Digest {
  /// Output size in bytes.
  const OUTPUT_SIZE: usize;

  /// The digest output type.
  ///
  /// Typically `[u8; N]`.
  type Output: Copy + Eq + Debug;

  /// Compute the digest of `data` in one shot.
  ///
  /// Identical inputs always produce identical outputs; implementations use
  /// no randomness and share no mutable state between calls.
  #[must_use]
  fn digest(data: &[u8]) -> Self::Output;
}

#[cfg(test)]
mod tests {
  use super::Digest;

  // A minimal implementation exercising the trait surface.
  struct SumDigest;

  impl Digest for SumDigest {
    const OUTPUT_SIZE: usize = 4;
    type Output = [u8; 4];

    fn digest(data: &[u8]) -> Self::Output {
      let sum = data.iter().fold(0u8, |acc, &b| acc.wrapping_add(b));
      [sum; 4]
    }
  }

  #[test]
  fn one_shot() {
    assert_eq!(SumDigest::digest(b"abc"), [b'a'.wrapping_add(b'b').wrapping_add(b'c'); 4]);
  }

  #[test]
  fn output_size_matches_output_type() {
    assert_eq!(SumDigest::OUTPUT_SIZE, SumDigest::digest(b"").len());
  }

  #[test]
  fn deterministic() {
    assert_eq!(SumDigest::digest(b"same input"), SumDigest::digest(b"same input"));
  }
}
