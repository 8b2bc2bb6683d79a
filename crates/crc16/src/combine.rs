//! CRC-16 combination over GF(2).
//!
//! Given `crc(A)` and `crc(B)`, computes `crc(A || B)` without reprocessing
//! `A`, in O(log len(B)) time:
//!
//! ```text
//! crc(A || B) = crc(A) * x^(8*len(B)) mod G(x) XOR crc(B)
//! ```
//!
//! The multiplication by `x^(8*len(B))` is a 16x16 matrix over GF(2) raised
//! to the `len(B)` power by square-and-multiply. The identity holds because
//! the update complements the register on entry and exit.

// All indexing is by bounded loop counters into 16-element arrays.
#![allow(clippy::indexing_slicing)]

use crate::table::Table;

/// A 16x16 GF(2) matrix. Element `i` is the image of input bit `i`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Gf2Matrix16([u16; 16]);

impl Gf2Matrix16 {
  pub(crate) const fn identity() -> Self {
    let mut m = [0u16; 16];
    let mut i = 0;
    while i < 16 {
      m[i] = 1 << i;
      i += 1;
    }
    Self(m)
  }

  #[inline]
  pub(crate) const fn mul_vec(self, vec: u16) -> u16 {
    let mut result = 0u16;
    let mut i = 0;
    while i < 16 {
      if vec & (1 << i) != 0 {
        result ^= self.0[i];
      }
      i += 1;
    }
    result
  }

  pub(crate) const fn mul_mat(self, other: Self) -> Self {
    let mut result = [0u16; 16];
    let mut i = 0;
    while i < 16 {
      result[i] = self.mul_vec(other.0[i]);
      i += 1;
    }
    Self(result)
  }

  #[inline]
  pub(crate) const fn square(self) -> Self {
    self.mul_mat(self)
  }
}

/// Matrix appending one zero byte to the register for `poly`.
///
/// One bit step is `crc >> 1`, XORed with `poly` when the dropped bit was set,
/// so bit 0 maps to `poly` and every other bit `j` maps to bit `j - 1`.
pub(crate) const fn shift8_matrix(poly: u16) -> Gf2Matrix16 {
  let mut m = [0u16; 16];
  m[0] = poly;
  let mut j = 1;
  while j < 16 {
    m[j] = 1 << (j - 1);
    j += 1;
  }
  Gf2Matrix16(m).square().square().square()
}

/// Combine with a precomputed shift-by-one-byte matrix.
pub(crate) const fn combine_with(crc_a: u16, crc_b: u16, len_b: usize, shift8: Gf2Matrix16) -> u16 {
  if len_b == 0 {
    return crc_a;
  }

  let mut mat = shift8;
  let mut result = Gf2Matrix16::identity();
  let mut remaining = len_b;
  while remaining > 0 {
    if remaining & 1 != 0 {
      result = result.mul_mat(mat);
    }
    mat = mat.square();
    remaining >>= 1;
  }

  result.mul_vec(crc_a) ^ crc_b
}

/// Checksum of `A || B` from `crc_a = checksum(A)`, `crc_b = checksum(B)` and `len(B)`.
///
/// # Example
///
/// ```
/// use crc16::{CCITT_TABLE, checksum, combine};
///
/// let crc_a = checksum(b"1234", &CCITT_TABLE);
/// let crc_b = checksum(b"56789", &CCITT_TABLE);
/// assert_eq!(combine(&CCITT_TABLE, crc_a, crc_b, 5), checksum(b"123456789", &CCITT_TABLE));
/// ```
#[must_use]
pub fn combine(table: &Table, crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
  combine_with(crc_a, crc_b, len_b, shift8_matrix(table.polynomial()))
}
