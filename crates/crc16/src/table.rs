//! CRC-16 lookup tables.
//!
//! A [`Table`] maps every byte value to its partial CRC contribution for one
//! polynomial. Tables are built by a `const fn`, so the two named tables are
//! computed at compile time and live in read-only statics. Any number of
//! digests on any number of threads may share a table without locking.

// Indices are `u8` values or bounded loop counters into 256-entry arrays.
#![allow(clippy::indexing_slicing)]

use alloc::borrow::Cow;
use core::fmt;

use crate::{ANSI, CCITT};

/// 256-entry lookup table for one CRC-16 polynomial.
#[derive(Clone, PartialEq, Eq)]
pub struct Table {
  poly: u16,
  entries: [u16; 256],
}

impl Table {
  /// Polynomial this table was built from.
  #[inline]
  #[must_use]
  pub const fn polynomial(&self) -> u16 {
    self.poly
  }

  /// Partial CRC contribution of `byte`.
  #[inline]
  #[must_use]
  pub const fn get(&self, byte: u8) -> u16 {
    self.entries[byte as usize]
  }

  /// All 256 entries, indexed by byte value.
  #[inline]
  #[must_use]
  pub const fn entries(&self) -> &[u16; 256] {
    &self.entries
  }
}

impl fmt::Debug for Table {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Table")
      .field("poly", &format_args!("{:#06x}", self.poly))
      .finish_non_exhaustive()
  }
}

/// Build the lookup table for `poly`.
///
/// Each entry is the result of eight shift-and-conditional-XOR steps starting
/// from the byte value, least-significant bit first.
#[must_use]
pub const fn build_table(poly: u16) -> Table {
  let mut entries = [0u16; 256];
  let mut i = 0usize;
  while i < 256 {
    let mut crc = i as u16;
    let mut bit = 0;
    while bit < 8 {
      if crc & 1 == 1 {
        crc = (crc >> 1) ^ poly;
      } else {
        crc >>= 1;
      }
      bit += 1;
    }
    entries[i] = crc;
    i += 1;
  }
  Table { poly, entries }
}

/// Table for the [`ANSI`] polynomial, built at compile time.
pub static ANSI_TABLE: Table = build_table(ANSI);

/// Table for the [`CCITT`] polynomial, built at compile time.
pub static CCITT_TABLE: Table = build_table(CCITT);

/// Return the table for `poly`.
///
/// The named polynomials borrow their cached static table; any other
/// polynomial gets a freshly built, uncached table.
///
/// # Example
///
/// ```
/// use std::borrow::Cow;
///
/// use crc16::{ANSI, make_table};
///
/// assert!(matches!(make_table(ANSI), Cow::Borrowed(_)));
/// assert!(matches!(make_table(0x1234), Cow::Owned(_)));
/// ```
#[must_use]
pub fn make_table(poly: u16) -> Cow<'static, Table> {
  match poly {
    ANSI => Cow::Borrowed(&ANSI_TABLE),
    CCITT => Cow::Borrowed(&CCITT_TABLE),
    _ => Cow::Owned(build_table(poly)),
  }
}
