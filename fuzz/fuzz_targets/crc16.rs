//! Fuzz target for CRC-16 over arbitrary polynomials.
//!
//! Tests that:
//! - No panics on arbitrary input
//! - Incremental updates produce same result as one-shot
//! - Resume and combine produce correct results
//! - Frames carrying their own checksum verify

#![no_main]

use arbitrary::Arbitrary;
use crc16::{Digest, append_checksum, checksum, combine, make_table, verify_trailer};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  poly: u16,
  data: Vec<u8>,
  split_point: usize,
}

fuzz_target!(|input: Input| {
  let table = make_table(input.poly);
  let data = &input.data;
  let split = input.split_point % (data.len() + 1);
  let oneshot = checksum(data, &table);

  let (a, b) = data.split_at(split);
  let mut d = Digest::new(&table);
  assert_eq!(d.write(a), a.len());
  assert_eq!(d.write(b), b.len());
  assert_eq!(oneshot, d.sum16(), "incremental mismatch");

  let crc_a = checksum(a, &table);
  let mut resumed = Digest::resume(&table, crc_a);
  resumed.write(b);
  assert_eq!(oneshot, resumed.sum16(), "resume mismatch");

  let crc_b = checksum(b, &table);
  assert_eq!(oneshot, combine(&table, crc_a, crc_b, b.len()), "combine mismatch");

  let mut frame = data.clone();
  append_checksum(&mut frame, &table);
  assert_eq!(verify_trailer(&frame, &table), Ok(&data[..]), "trailer mismatch");

  d.reset();
  assert_eq!(d.sum16(), 0, "reset did not clear state");
});
