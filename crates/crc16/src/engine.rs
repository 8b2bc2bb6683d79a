//! Table-driven CRC-16 update and one-shot helpers.

use crate::table::{ANSI_TABLE, CCITT_TABLE, Table};

/// Fold `data` into `crc` using `table`, returning the new checksum.
///
/// The register is complemented on entry and on exit, so the output of one
/// call can be fed straight back in as `crc` for the next chunk:
///
/// ```
/// use crc16::{ANSI_TABLE, checksum, update};
///
/// let first = update(0, &ANSI_TABLE, b"1234");
/// let both = update(first, &ANSI_TABLE, b"56789");
/// assert_eq!(both, checksum(b"123456789", &ANSI_TABLE));
/// ```
#[inline]
#[must_use]
pub fn update(crc: u16, table: &Table, data: &[u8]) -> u16 {
  let mut crc = !crc;
  for &byte in data {
    crc = table.get(crc as u8 ^ byte) ^ (crc >> 8);
  }
  !crc
}

/// Checksum of `data` using `table`.
#[inline]
#[must_use]
pub fn checksum(data: &[u8], table: &Table) -> u16 {
  update(0, table, data)
}

/// Checksum of `data` using the ANSI polynomial.
#[inline]
#[must_use]
pub fn checksum_ansi(data: &[u8]) -> u16 {
  update(0, &ANSI_TABLE, data)
}

/// Checksum of `data` using the CCITT polynomial.
#[inline]
#[must_use]
pub fn checksum_ccitt(data: &[u8]) -> u16 {
  update(0, &CCITT_TABLE, data)
}
