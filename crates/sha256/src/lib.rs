//! SHA-256 digest engine.
//!
//! Computes the SHA-256 digest of a complete in-memory byte sequence and
//! renders it as a lowercase hexadecimal string. The engine is one-shot by
//! design: every call pads its input into an owned buffer, threads a fresh
//! hash state through the blocks in order, and releases everything on return.
//! There is no streaming surface and no shared mutable state, so independent
//! messages may be hashed concurrently without locking.
//!
//! This crate is `no_std` + `alloc` and has zero library dependencies outside
//! the rsha workspace. Dev-only dependencies are used for oracle testing and
//! benchmarking.
//!
//! # Modules
//!
//! - [`pad`] - Pad-then-length-append framing into 64-byte blocks.
//! - [`schedule`] - Per-block expansion into the 64-word message schedule.
//! - [`compress`] - The 64-round compression function and chained hash state.
//! - [`hex`] - Lowercase hex rendering of the final state.
//! - [`constants`] - The FIPS 180-4 round constants and initial hash values.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

pub mod compress;
pub mod constants;
pub mod hex;
pub mod pad;
pub mod schedule;

mod bitops;
mod digest;
mod error;

pub use compress::HashState;
pub use digest::Sha256;
pub use error::Error;
pub use schedule::MessageSchedule;
pub use traits::Digest;
