//! Capability traits for 16-bit checksums.
//!
//! This crate holds the abstractions that CRC-16 implementations conform to,
//! so generic code can treat any of them uniformly. It is `no_std` (with
//! `alloc`) and has zero dependencies.
//!
//! # Trait Hierarchy
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Hash`] | Fixed-width hash state: reset, write, sum, size, block size |
//! | [`Hash16`] | [`Hash`] with a native `u16` result |
//! | [`Checksum`] | Streaming checksum with one-shot helpers and I/O adapters |
//! | [`ChecksumCombine`] | `crc(A || B)` from `crc(A)`, `crc(B)`, `len(B)` |
//!
//! # Error Types
//!
//! - [`VerificationError`] - Opaque error for checksum verification
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod checksum;
pub mod error;
mod hash;
#[cfg(feature = "std")]
pub mod io;

pub use checksum::{Checksum, ChecksumCombine};
pub use error::VerificationError;
pub use hash::{Hash, Hash16};
