//! Incremental CRC-16 digest.
//!
//! A [`Digest`] holds a running checksum plus a shared reference to the
//! table it was created with. It has no terminal state: it can be written,
//! summed and reset in any order, indefinitely. A digest is not internally
//! synchronized; use one per caller, or clone it to fork a computation.

use alloc::vec::Vec;
use core::fmt;

use traits::{Hash, Hash16, VerificationError};

use crate::{
  SIZE,
  engine::update,
  table::{ANSI_TABLE, CCITT_TABLE, Table},
};

/// Running CRC-16 computation over a borrowed [`Table`].
///
/// # Example
///
/// ```
/// use crc16::{checksum_ccitt, new_ccitt_digest};
///
/// let mut d = new_ccitt_digest();
/// assert_eq!(d.write(b"1234"), 4);
/// d.write(b"56789");
/// assert_eq!(d.sum16(), checksum_ccitt(b"123456789"));
/// assert_eq!(d.sum(b"\x01"), [0x01, 0xE2, 0x45]);
/// ```
#[derive(Clone)]
pub struct Digest<'t> {
  crc: u16,
  table: &'t Table,
}

impl<'t> Digest<'t> {
  /// Create a digest over `table` with a running checksum of 0.
  #[inline]
  #[must_use]
  pub const fn new(table: &'t Table) -> Self {
    Self { crc: 0, table }
  }

  /// Create a digest that continues from a previously returned checksum.
  ///
  /// Writing `b` afterwards yields the checksum of `a || b` when `crc` is the
  /// checksum of `a`. [`reset`](Self::reset) still returns to 0.
  #[inline]
  #[must_use]
  pub const fn resume(table: &'t Table, crc: u16) -> Self {
    Self { crc, table }
  }

  /// Discard accumulated state. The table is kept.
  #[inline]
  pub fn reset(&mut self) {
    self.crc = 0;
  }

  /// Fold `data` into the checksum. Always consumes every byte.
  #[inline]
  pub fn write(&mut self, data: &[u8]) -> usize {
    self.crc = update(self.crc, self.table, data);
    data.len()
  }

  /// Current checksum.
  #[inline]
  #[must_use]
  pub const fn sum16(&self) -> u16 {
    self.crc
  }

  /// Current checksum, big-endian.
  #[inline]
  #[must_use]
  pub const fn sum16_bytes(&self) -> [u8; SIZE] {
    self.crc.to_be_bytes()
  }

  /// Return `prefix` followed by the big-endian checksum.
  #[must_use]
  pub fn sum(&self, prefix: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + SIZE);
    out.extend_from_slice(prefix);
    self.append_sum(&mut out);
    out
  }

  /// Append the big-endian checksum to `out`.
  #[inline]
  pub fn append_sum(&self, out: &mut Vec<u8>) {
    out.extend_from_slice(&self.sum16_bytes());
  }

  /// Bytes processed per step.
  #[inline]
  #[must_use]
  pub const fn block_size(&self) -> usize {
    1
  }

  /// Width of the checksum in bytes.
  #[inline]
  #[must_use]
  pub const fn size(&self) -> usize {
    SIZE
  }

  /// Table this digest was created with.
  #[inline]
  #[must_use]
  pub const fn table(&self) -> &'t Table {
    self.table
  }

  /// Check the running checksum against `expected`.
  #[inline]
  pub fn verify(&self, expected: u16) -> Result<(), VerificationError> {
    if self.crc == expected {
      Ok(())
    } else {
      Err(VerificationError::new())
    }
  }
}

impl fmt::Debug for Digest<'_> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Digest")
      .field("crc", &format_args!("{:#06x}", self.crc))
      .field("poly", &format_args!("{:#06x}", self.table.polynomial()))
      .finish()
  }
}

impl Hash for Digest<'_> {
  #[inline]
  fn write(&mut self, data: &[u8]) -> usize {
    Digest::write(self, data)
  }

  #[inline]
  fn append_sum(&self, out: &mut Vec<u8>) {
    Digest::append_sum(self, out);
  }

  #[inline]
  fn reset(&mut self) {
    Digest::reset(self);
  }

  #[inline]
  fn size(&self) -> usize {
    SIZE
  }

  #[inline]
  fn block_size(&self) -> usize {
    1
  }
}

impl Hash16 for Digest<'_> {
  #[inline]
  fn sum16(&self) -> u16 {
    self.crc
  }
}

#[cfg(feature = "std")]
impl std::io::Write for Digest<'_> {
  #[inline]
  fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
    Ok(Digest::write(self, buf))
  }

  #[inline]
  fn flush(&mut self) -> std::io::Result<()> {
    Ok(())
  }
}

/// Create a digest over `table`.
#[inline]
#[must_use]
pub const fn new_digest(table: &Table) -> Digest<'_> {
  Digest::new(table)
}

/// Create a digest over the cached ANSI table.
#[inline]
#[must_use]
pub const fn new_ansi_digest() -> Digest<'static> {
  Digest::new(&ANSI_TABLE)
}

/// Create a digest over the cached CCITT table.
#[inline]
#[must_use]
pub const fn new_ccitt_digest() -> Digest<'static> {
  Digest::new(&CCITT_TABLE)
}
