//! Hasher types for the named polynomials.
//!
//! These carry no table reference: the polynomial is fixed by the type, so
//! they are `Copy + Default` and plug into generic [`Checksum`](crate::Checksum)
//! code such as the I/O adapters.

use crate::{ANSI, CCITT, table::{ANSI_TABLE, CCITT_TABLE}};

define_crc16_type! {
  /// CRC-16 over the ANSI polynomial (`0x8005`).
  ///
  /// # Example
  ///
  /// ```
  /// use crc16::{Checksum, Crc16Ansi};
  ///
  /// let mut h = Crc16Ansi::new();
  /// h.update(b"1234");
  /// h.update(b"56789");
  /// assert_eq!(h.finalize(), 0xC284);
  /// assert_eq!(Crc16Ansi::checksum(b"123456789"), 0xC284);
  /// ```
  pub struct Crc16Ansi {
    table: ANSI_TABLE,
    poly: ANSI,
  }
}

define_crc16_type! {
  /// CRC-16 over the CCITT polynomial (`0x1021`).
  ///
  /// # Example
  ///
  /// ```
  /// use crc16::{Checksum, Crc16Ccitt};
  ///
  /// assert_eq!(Crc16Ccitt::checksum(b"123456789"), 0xE245);
  /// ```
  pub struct Crc16Ccitt {
    table: CCITT_TABLE,
    poly: CCITT,
  }
}

#[cfg(test)]
mod tests {
  extern crate std;

  use alloc::{format, vec};

  use super::*;
  use crate::{Checksum, ChecksumCombine, Hash, Hash16, checksum_ansi, checksum_ccitt};

  #[test]
  fn check_strings() {
    assert_eq!(Crc16Ansi::checksum(b"123456789"), 0xC284);
    assert_eq!(Crc16Ccitt::checksum(b"123456789"), 0xE245);
  }

  #[test]
  fn empty() {
    assert_eq!(Crc16Ansi::checksum(b""), 0);
    assert_eq!(Crc16Ccitt::checksum(b""), 0);
    assert_eq!(Crc16Ansi::new(), Crc16Ansi::default());
  }

  #[test]
  fn incremental() {
    let mut h = Crc16Ccitt::new();
    h.update(b"1234");
    h.update(b"56789");
    assert_eq!(h.finalize(), checksum_ccitt(b"123456789"));
  }

  #[test]
  fn vectored() {
    let bufs: [&[u8]; 3] = [b"123", b"", b"456789"];
    assert_eq!(Crc16Ansi::checksum_vectored(&bufs), checksum_ansi(b"123456789"));
  }

  #[test]
  fn resume_and_with_initial() {
    let data = b"hello world";
    let (a, b) = data.split_at(6);

    let mut h = Crc16Ansi::resume(Crc16Ansi::checksum(a));
    h.update(b);
    assert_eq!(h.finalize(), Crc16Ansi::checksum(data));

    let mut h = <Crc16Ccitt as Checksum>::with_initial(Crc16Ccitt::checksum(a));
    h.update(b);
    assert_eq!(h.finalize(), Crc16Ccitt::checksum(data));
  }

  #[test]
  fn reset() {
    let mut h = Crc16Ansi::new();
    h.update(b"garbage");
    Checksum::reset(&mut h);
    h.update(b"123456789");
    assert_eq!(h.finalize(), 0xC284);
  }

  #[test]
  fn combine() {
    let data = b"123456789";
    for split in 0..=data.len() {
      let (a, b) = data.split_at(split);
      assert_eq!(
        Crc16Ansi::combine(Crc16Ansi::checksum(a), Crc16Ansi::checksum(b), b.len()),
        0xC284
      );
      assert_eq!(
        Crc16Ccitt::combine(Crc16Ccitt::checksum(a), Crc16Ccitt::checksum(b), b.len()),
        0xE245
      );
    }
  }

  #[test]
  fn hash_interface() {
    let mut h = Crc16Ccitt::new();
    assert_eq!(Hash::write(&mut h, b"123456789"), 9);
    assert_eq!(h.sum16(), 0xE245);
    assert_eq!(h.sum(b"\xAA"), vec![0xAA, 0xE2, 0x45]);
    assert_eq!(h.size(), 2);
    assert_eq!(h.block_size(), 1);
    Hash::reset(&mut h);
    assert_eq!(h.sum16(), 0);
  }

  #[test]
  fn tables_are_cached_statics() {
    assert!(core::ptr::eq(Crc16Ansi::table(), &ANSI_TABLE));
    assert!(core::ptr::eq(Crc16Ccitt::table(), &CCITT_TABLE));
  }

  #[test]
  fn backend_name() {
    assert_eq!(Crc16Ansi::backend_name(), "portable/table-driven");
  }

  #[test]
  fn debug_format() {
    let mut h = Crc16Ansi::new();
    h.update(b"123456789");
    assert_eq!(format!("{h:?}"), "Crc16Ansi { state: 0xc284 }");
  }

  #[cfg(feature = "std")]
  #[test]
  fn reader_and_writer_adapters() {
    use std::io::{Read, Write};

    let mut reader = Crc16Ansi::reader(&b"123456789"[..]);
    let mut out = vec![];
    reader.read_to_end(&mut out).unwrap();
    assert_eq!(reader.crc(), 0xC284);

    let mut writer = Crc16Ccitt::writer(vec![]);
    writer.write_all(&out).unwrap();
    let (sink, crc) = writer.into_parts();
    assert_eq!(sink, b"123456789");
    assert_eq!(crc, 0xE245);
  }

  #[test]
  fn trait_impls() {
    fn check_checksum<T: Checksum<Output = u16>>() {}
    fn check_combine<T: ChecksumCombine>() {}
    fn check_hash16<T: Hash16>() {}

    check_checksum::<Crc16Ansi>();
    check_combine::<Crc16Ccitt>();
    check_hash16::<Crc16Ansi>();
  }
}
