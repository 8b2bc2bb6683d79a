//! Basic CRC-16 usage: one-shot, streaming, custom polynomials and framing.
//!
//! Run with: `cargo run --example basic -p crc16`

use crc16::{
  ANSI_TABLE, append_checksum, checksum, checksum_ansi, checksum_ccitt, make_table, new_ansi_digest, verify_trailer,
};

fn main() {
  println!("=== CRC-16 Basic Examples ===\n");

  one_shot_examples();
  streaming_example();
  framing_example();
}

/// One-shot computation over the named and a custom polynomial.
fn one_shot_examples() {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  let ansi = checksum_ansi(data);
  println!("CRC-16 (ANSI):   0x{ansi:04X}");
  assert_eq!(ansi, 0xC284);

  let ccitt = checksum_ccitt(data);
  println!("CRC-16 (CCITT):  0x{ccitt:04X}");
  assert_eq!(ccitt, 0xE245);

  let table = make_table(0x3D65);
  println!("CRC-16 (0x3D65): 0x{:04X}", checksum(data, &table));

  println!();
}

/// Streaming computation: process data in chunks, result matches one-shot.
fn streaming_example() {
  println!("--- Streaming Computation ---\n");

  let mut d = new_ansi_digest();
  let chunks: [&[u8]; 3] = [b"123", b"456", b"789"];
  for chunk in chunks {
    let n = d.write(chunk);
    println!("wrote {n} bytes, running crc 0x{:04X}", d.sum16());
  }
  assert_eq!(d.sum16(), checksum_ansi(b"123456789"));

  d.reset();
  println!("after reset: 0x{:04X}", d.sum16());

  println!();
}

/// Append a checksum trailer and verify it on the receiving side.
fn framing_example() {
  println!("--- Framing ---\n");

  let mut frame = b"ping".to_vec();
  append_checksum(&mut frame, &ANSI_TABLE);
  println!("frame: {frame:02X?}");

  match verify_trailer(&frame, &ANSI_TABLE) {
    Ok(payload) => println!("payload ok: {}", String::from_utf8_lossy(payload)),
    Err(e) => println!("rejected: {e}"),
  }

  frame[0] ^= 0x20;
  match verify_trailer(&frame, &ANSI_TABLE) {
    Ok(_) => println!("corruption went unnoticed"),
    Err(e) => println!("corrupted frame rejected: {e}"),
  }
}
