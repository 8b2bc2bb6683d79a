//! Table-driven CRC-16 checksums.
//!
//! This crate computes 16-bit cyclic redundancy checks over byte sequences
//! using a 256-entry lookup table per polynomial. Tables for the two named
//! polynomials are built at compile time; tables for any other polynomial are
//! built on demand.
//!
//! # Polynomials
//!
//! | Constant | Value | Use Cases |
//! |----------|-------|-----------|
//! | [`ANSI`] | 0x8005 | Bisync, Modbus, USB, ANSI X3.28, SIA DC-07 |
//! | [`CCITT`] | 0x1021 | X.25, V.41, HDLC FCS, XMODEM, Bluetooth, SD |
//!
//! The constant is used directly as the least-significant-bit-first feedback
//! term, and the register is complemented on entry and exit of every update.
//!
//! # Example
//!
//! ```rust
//! use crc16::{ANSI_TABLE, checksum, checksum_ansi, make_table, new_ansi_digest};
//!
//! // One-shot
//! let crc = checksum_ansi(b"123456789");
//! assert_eq!(crc, 0xC284);
//! assert_eq!(checksum(b"123456789", &ANSI_TABLE), crc);
//!
//! // Incremental
//! let mut d = new_ansi_digest();
//! d.write(b"1234");
//! d.write(b"56789");
//! assert_eq!(d.sum16(), crc);
//! assert_eq!(d.sum(b"id:"), b"id:\xC2\x84");
//!
//! // Any other polynomial
//! let table = make_table(0x3D65);
//! assert_ne!(checksum(b"123456789", &table), crc);
//! ```
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std` | Yes | `std::io::Write` impls and the checksum reader/writer adapters |
//!
//! Without `std` the crate is `no_std` and needs only `alloc`.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

extern crate alloc;

#[cfg(any(feature = "std", test))]
extern crate std;

// Internal macros must be declared before modules that use them.
#[macro_use]
mod macros;

mod combine;
mod digest;
mod engine;
mod frame;
mod table;
mod variants;

#[cfg(test)]
mod proptests;

pub use combine::combine;
pub use digest::{Digest, new_ansi_digest, new_ccitt_digest, new_digest};
pub use engine::{checksum, checksum_ansi, checksum_ccitt, update};
pub use frame::{append_checksum, verify_trailer};
pub use table::{ANSI_TABLE, CCITT_TABLE, Table, build_table, make_table};
#[cfg(feature = "std")]
pub use traits::io::{ChecksumReader, ChecksumWriter};
pub use traits::{Checksum, ChecksumCombine, Hash, Hash16, VerificationError};
pub use variants::{Crc16Ansi, Crc16Ccitt};

/// Size of a CRC-16 checksum in bytes.
pub const SIZE: usize = 2;

/// ANSI polynomial: Bisync, Modbus, USB, ANSI X3.28, SIA DC-07.
pub const ANSI: u16 = 0x8005;

/// CCITT polynomial: X.25, V.41, HDLC FCS, XMODEM, Bluetooth, PACTOR, SD.
pub const CCITT: u16 = 0x1021;
