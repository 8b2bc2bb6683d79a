//! Fixed-width hash state traits.
//!
//! [`Hash`] is the common shape shared by fixed-width checksum and hash
//! states: bytes are written in, the accumulated result is appended to a
//! caller-supplied buffer, and the state can be reset at any time. There is
//! no terminal state; a hash may be written, summed and reset in any order.

use alloc::vec::Vec;

/// A resettable, fixed-width hash state.
///
/// # Implementor Requirements
///
/// - `write(data)` never fails and returns `data.len()`
/// - `sum` and `append_sum` never mutate the state
/// - `append_sum` appends exactly [`size`](Self::size) bytes, most significant first
/// - `reset()` restores the freshly constructed state
pub trait Hash {
  /// Fold `data` into the running state, returning the number of bytes consumed.
  fn write(&mut self, data: &[u8]) -> usize;

  /// Append the current result to `out`.
  fn append_sum(&self, out: &mut Vec<u8>);

  /// Return `prefix` followed by the current result.
  #[must_use]
  fn sum(&self, prefix: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(prefix.len() + self.size());
    out.extend_from_slice(prefix);
    self.append_sum(&mut out);
    out
  }

  /// Discard all accumulated state.
  fn reset(&mut self);

  /// Number of bytes [`append_sum`](Self::append_sum) produces.
  #[must_use]
  fn size(&self) -> usize;

  /// Preferred write granularity in bytes.
  #[must_use]
  fn block_size(&self) -> usize;
}

/// A [`Hash`] whose result is a 16-bit value.
pub trait Hash16: Hash {
  /// Current result as a native integer. Does not mutate the state.
  #[must_use]
  fn sum16(&self) -> u16;

  /// Current result in big-endian byte order.
  #[inline]
  #[must_use]
  fn sum16_bytes(&self) -> [u8; 2] {
    self.sum16().to_be_bytes()
  }
}

#[cfg(test)]
mod tests {
  use alloc::vec;

  use super::*;

  /// Additive 16-bit sum, enough to exercise the provided methods.
  #[derive(Default)]
  struct Sum16(u16);

  impl Hash for Sum16 {
    fn write(&mut self, data: &[u8]) -> usize {
      self.0 = data.iter().fold(self.0, |acc, &b| acc.wrapping_add(u16::from(b)));
      data.len()
    }

    fn append_sum(&self, out: &mut Vec<u8>) {
      out.extend_from_slice(&self.sum16_bytes());
    }

    fn reset(&mut self) {
      self.0 = 0;
    }

    fn size(&self) -> usize {
      2
    }

    fn block_size(&self) -> usize {
      1
    }
  }

  impl Hash16 for Sum16 {
    fn sum16(&self) -> u16 {
      self.0
    }
  }

  #[test]
  fn sum_appends_big_endian_after_prefix() {
    let mut h = Sum16::default();
    assert_eq!(h.write(&[0xFF, 0xFF, 0x03]), 3);
    assert_eq!(h.sum16(), 0x0201);
    assert_eq!(h.sum(b"ab"), vec![b'a', b'b', 0x02, 0x01]);
    assert_eq!(h.sum(&[]), vec![0x02, 0x01]);
  }

  #[test]
  fn sum_does_not_mutate() {
    let mut h = Sum16::default();
    h.write(b"xyz");
    let first = h.sum(&[]);
    let second = h.sum(&[]);
    assert_eq!(first, second);
    assert_eq!(h.sum16_bytes(), [first[0], first[1]]);
  }

  #[test]
  fn usable_as_trait_object() {
    let mut h = Sum16::default();
    let dyn_h: &mut dyn Hash16 = &mut h;
    dyn_h.write(&[1, 2]);
    dyn_h.reset();
    assert_eq!(dyn_h.sum16(), 0);
    assert_eq!(dyn_h.size(), 2);
    assert_eq!(dyn_h.block_size(), 1);
  }
}
