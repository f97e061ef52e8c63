//! Failure taxonomy for the digest engine.
//!
//! The typed component API makes buffer-size invariants unrepresentable, but
//! callers driving components with dynamic slices can still violate them.
//! The slice-validating entry points report the violation through [`Error`]
//! and leave their output untouched instead of corrupting state. A missing
//! input buffer has no representation at all: every entry point takes a
//! slice, which is always present.

use core::fmt;

/// Invariant violation reported by a slice-validating component entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Error {
  /// A message block was not exactly 64 bytes.
  InvalidBlockSize {
    /// Length of the rejected block, in bytes.
    actual: usize,
  },
  /// A hash state was not exactly 8 words.
  InvalidHashSize {
    /// Length of the rejected state, in words.
    actual: usize,
  },
  /// A message schedule was not exactly 64 words.
  InvalidSchedule {
    /// Length of the rejected schedule, in words.
    actual: usize,
  },
}

impl fmt::Display for Error {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::InvalidBlockSize { actual } => {
        write!(f, "message block must be 64 bytes, got {actual}")
      }
      Self::InvalidHashSize { actual } => {
        write!(f, "hash state must be 8 words, got {actual}")
      }
      Self::InvalidSchedule { actual } => {
        write!(f, "message schedule must be 64 words, got {actual}")
      }
    }
  }
}

impl core::error::Error for Error {}
