//! Error types for checksum verification.
//!
//! Checksum computation itself cannot fail. The only error a caller can
//! observe is a mismatch between a computed and an expected checksum.

use core::fmt;

/// Checksum verification failed.
///
/// Returned when a received checksum does not match the one computed over
/// the data, or when a frame is too short to carry a checksum at all.
/// Intentionally opaque: callers only need to know the data is not intact.
///
/// # Examples
///
/// ```
/// use traits::VerificationError;
///
/// fn verify(computed: u16, expected: u16) -> Result<(), VerificationError> {
///   if computed == expected {
///     Ok(())
///   } else {
///     Err(VerificationError::new())
///   }
/// }
///
/// assert!(verify(0xC284, 0xC284).is_ok());
/// assert!(verify(0xC284, 0x0000).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub struct VerificationError;

impl VerificationError {
  /// Create a new verification error.
  ///
  /// This is the only way to construct this error from outside the crate.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self
  }
}

impl Default for VerificationError {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

impl fmt::Display for VerificationError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str("verification failed")
  }
}

impl core::error::Error for VerificationError {}
