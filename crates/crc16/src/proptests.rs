extern crate std;

use std::vec::Vec;

use crc::{Algorithm, Crc};
use proptest::prelude::*;

use super::*;

// The LSB-first constants correspond to these normal-form parameters.
const ANSI_ALGORITHM: Algorithm<u16> = Algorithm {
  width: 16,
  poly: 0xA001,
  init: 0xFFFF,
  refin: true,
  refout: true,
  xorout: 0xFFFF,
  check: 0xC284,
  residue: 0x468F,
};

const CCITT_ALGORITHM: Algorithm<u16> = Algorithm {
  width: 16,
  poly: 0x8408,
  init: 0xFFFF,
  refin: true,
  refout: true,
  xorout: 0xFFFF,
  check: 0xE245,
  residue: 0x1D09,
};

static REFERENCE_ANSI: Crc<u16> = Crc::<u16>::new(&ANSI_ALGORITHM);
static REFERENCE_CCITT: Crc<u16> = Crc::<u16>::new(&CCITT_ALGORITHM);

#[test]
fn reference_check_values() {
  assert_eq!(REFERENCE_ANSI.checksum(b"123456789"), ANSI_ALGORITHM.check);
  assert_eq!(REFERENCE_CCITT.checksum(b"123456789"), CCITT_ALGORITHM.check);
  assert_eq!(checksum_ansi(b"123456789"), ANSI_ALGORITHM.check);
  assert_eq!(checksum_ccitt(b"123456789"), CCITT_ALGORITHM.check);
}

proptest! {
  #[test]
  fn ansi_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(checksum_ansi(&data), REFERENCE_ANSI.checksum(&data));
  }

  #[test]
  fn ccitt_matches_crc_crate(data in proptest::collection::vec(any::<u8>(), 0..=4096)) {
    prop_assert_eq!(checksum_ccitt(&data), REFERENCE_CCITT.checksum(&data));
  }

  #[test]
  fn streaming_matches_crc_crate(
    data in proptest::collection::vec(any::<u8>(), 0..=4096),
    chunk in 1usize..=257
  ) {
    let mut ours = new_ccitt_digest();
    let mut reference = REFERENCE_CCITT.digest();

    for part in data.chunks(chunk) {
      ours.write(part);
      reference.update(part);
    }

    prop_assert_eq!(ours.sum16(), reference.finalize());
  }

  #[test]
  fn custom_polynomial_matches_crc_crate(
    poly in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=512)
  ) {
    // `Crc::new` wants a 'static algorithm; leaking a few per case is fine in tests.
    let algorithm: &'static Algorithm<u16> = std::boxed::Box::leak(std::boxed::Box::new(Algorithm {
      width: 16,
      poly: poly.reverse_bits(),
      init: 0xFFFF,
      refin: true,
      refout: true,
      xorout: 0xFFFF,
      check: 0,
      residue: 0,
    }));
    let reference = Crc::<u16>::new(algorithm);
    let table = make_table(poly);
    prop_assert_eq!(checksum(&data, &table), reference.checksum(&data));
  }

  #[test]
  fn typed_and_table_paths_agree(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    prop_assert_eq!(Crc16Ansi::checksum(&data), checksum(&data, &ANSI_TABLE));
    prop_assert_eq!(Crc16Ccitt::checksum(&data), checksum(&data, &CCITT_TABLE));
  }

  #[test]
  fn combine_matches_concatenation(
    poly in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    split in any::<usize>()
  ) {
    let table = make_table(poly);
    let split = split % (data.len() + 1);
    let (a, b) = data.split_at(split);
    let combined = combine(&table, checksum(a, &table), checksum(b, &table), b.len());
    prop_assert_eq!(combined, checksum(&data, &table));
  }

  #[test]
  fn frame_round_trip(data in proptest::collection::vec(any::<u8>(), 0..=1024)) {
    let mut frame: Vec<u8> = data.clone();
    append_checksum(&mut frame, &ANSI_TABLE);
    prop_assert_eq!(verify_trailer(&frame, &ANSI_TABLE), Ok(&data[..]));
  }
}
