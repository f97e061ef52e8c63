//! Pure Rust SHA-256.
//!
//! `rsha` computes the SHA-256 digest of a complete in-memory message and
//! renders it as a 64-character lowercase hexadecimal string. The engine is
//! one-shot: it pads the whole message up front, folds each 512-bit block
//! through the 64-round compression function in order, and releases every
//! buffer on return. No `std`, no unsafe, no dependencies outside this
//! workspace.
//!
//! # Quick Start
//!
//! ```
//! use rsha::Sha256;
//!
//! // One-shot hex digest
//! assert_eq!(
//!   Sha256::digest_hex(b"abc"),
//!   "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
//! );
//!
//! // Raw digest bytes
//! let digest: [u8; 32] = Sha256::digest(b"abc");
//! assert_eq!(digest[0], 0xba);
//! ```
//!
//! The component layers are public for callers that need to drive padding,
//! schedule expansion, or compression directly:
//!
//! ```
//! use rsha::{compress, pad, HashState, MessageSchedule};
//!
//! let padded = pad::pad(b"");
//! let mut state = HashState::new();
//! for block in padded.chunks(64) {
//!   let schedule = MessageSchedule::expand(block)?;
//!   compress::compress(&mut state, &schedule);
//! }
//! assert_eq!(state.to_bytes(), rsha::Sha256::digest(b""));
//! # Ok::<(), rsha::Error>(())
//! ```
#![no_std]

pub use sha256::{Digest, Error, HashState, MessageSchedule, Sha256};
pub use sha256::{compress, constants, hex, pad, schedule};
