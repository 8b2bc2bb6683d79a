//! Fuzz target for the streaming API.
//!
//! Tests that arbitrary sequences of writes produce the one-shot result.

#![no_main]

use arbitrary::Arbitrary;
use crc16::{Checksum, Crc16Ansi, Crc16Ccitt, checksum_ansi, checksum_ccitt, new_ccitt_digest};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
  data: Vec<u8>,
  /// Chunk sizes for streaming updates
  chunk_sizes: Vec<usize>,
}

/// Split `data` into chunks whose sizes cycle through `chunk_sizes` (each taken mod 256, at least 1).
fn chunks<'a>(data: &'a [u8], chunk_sizes: &'a [usize]) -> impl Iterator<Item = &'a [u8]> {
  let mut offset = 0;
  let mut idx = 0;
  core::iter::from_fn(move || {
    if offset >= data.len() {
      return None;
    }
    let size = match chunk_sizes.get(idx % chunk_sizes.len().max(1)) {
      Some(s) => (s % 256).max(1),
      None => 1,
    };
    let end = (offset + size).min(data.len());
    let part = &data[offset..end];
    offset = end;
    idx += 1;
    Some(part)
  })
}

fuzz_target!(|input: Input| {
  let data = &input.data;

  let mut ansi = Crc16Ansi::new();
  for part in chunks(data, &input.chunk_sizes) {
    ansi.update(part);
  }
  assert_eq!(ansi.finalize(), checksum_ansi(data), "crc16/ansi streaming mismatch");

  let mut ccitt = Crc16Ccitt::new();
  let mut digest = new_ccitt_digest();
  for part in chunks(data, &input.chunk_sizes) {
    ccitt.update(part);
    digest.write(part);
  }
  assert_eq!(ccitt.finalize(), checksum_ccitt(data), "crc16/ccitt streaming mismatch");
  assert_eq!(digest.sum16(), ccitt.finalize(), "digest/typed mismatch");
});
