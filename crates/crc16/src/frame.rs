//! Checksum trailers on byte frames.
//!
//! A framed message is its payload followed by the payload's checksum in
//! big-endian order, the same layout [`Digest::sum`](crate::Digest::sum)
//! produces.

use alloc::vec::Vec;

use traits::VerificationError;

use crate::{SIZE, engine::checksum, table::Table};

/// Append the big-endian checksum of `buf`'s current contents to `buf`.
///
/// # Example
///
/// ```
/// use crc16::{ANSI_TABLE, append_checksum, verify_trailer};
///
/// let mut frame = b"123456789".to_vec();
/// append_checksum(&mut frame, &ANSI_TABLE);
/// assert_eq!(&frame[9..], &[0xC2, 0x84]);
/// assert_eq!(verify_trailer(&frame, &ANSI_TABLE), Ok(&b"123456789"[..]));
/// ```
pub fn append_checksum(buf: &mut Vec<u8>, table: &Table) {
  let crc = checksum(buf, table);
  buf.extend_from_slice(&crc.to_be_bytes());
}

/// Verify a frame's trailing checksum and return its payload.
///
/// Fails when the frame is shorter than the checksum itself or when the
/// trailer does not match the payload.
pub fn verify_trailer<'a>(frame: &'a [u8], table: &Table) -> Result<&'a [u8], VerificationError> {
  let split = frame.len().checked_sub(SIZE).ok_or(VerificationError::new())?;
  let (payload, trailer) = frame.split_at(split);
  let received = match trailer {
    [hi, lo] => u16::from_be_bytes([*hi, *lo]),
    _ => return Err(VerificationError::new()),
  };

  if checksum(payload, table) == received {
    Ok(payload)
  } else {
    Err(VerificationError::new())
  }
}

#[cfg(test)]
mod tests {
  use alloc::vec;

  use super::*;
  use crate::table::{ANSI_TABLE, CCITT_TABLE, make_table};

  #[test]
  fn round_trip_named_tables() {
    for table in [&ANSI_TABLE, &CCITT_TABLE] {
      let mut frame = b"payload".to_vec();
      append_checksum(&mut frame, table);
      assert_eq!(frame.len(), 9);
      assert_eq!(verify_trailer(&frame, table), Ok(&b"payload"[..]));
    }
  }

  #[test]
  fn empty_payload_has_zero_trailer() {
    let mut frame = vec![];
    append_checksum(&mut frame, &CCITT_TABLE);
    assert_eq!(frame, vec![0, 0]);
    assert_eq!(verify_trailer(&frame, &CCITT_TABLE), Ok(&[][..]));
  }

  #[test]
  fn rejects_short_frames() {
    assert!(verify_trailer(&[], &ANSI_TABLE).is_err());
    assert!(verify_trailer(&[0x00], &ANSI_TABLE).is_err());
  }

  #[test]
  fn rejects_corruption() {
    let mut frame = b"123456789".to_vec();
    append_checksum(&mut frame, &ANSI_TABLE);
    for i in 0..frame.len() {
      let mut bad = frame.clone();
      bad[i] ^= 0x01;
      assert_eq!(verify_trailer(&bad, &ANSI_TABLE), Err(VerificationError::new()), "flipped byte {i}");
    }
  }

  #[test]
  fn wrong_polynomial_is_rejected() {
    let mut frame = b"123456789".to_vec();
    append_checksum(&mut frame, &ANSI_TABLE);
    assert!(verify_trailer(&frame, &CCITT_TABLE).is_err());
  }

  #[test]
  fn custom_polynomial() {
    let table = make_table(0x3D65);
    let mut frame = b"abc".to_vec();
    append_checksum(&mut frame, &table);
    assert_eq!(verify_trailer(&frame, &table), Ok(&b"abc"[..]));
  }
}
