//! Internal macros for named-polynomial hasher types.

/// Generate a CRC-16 hasher type bound to a cached static table.
///
/// This macro creates:
/// - The struct definition with `state: u16`
/// - `resume()`, `backend_name()`, `table()` methods
/// - A shift-by-one-byte combine matrix computed at compile time from `$poly`
/// - `Checksum`, `ChecksumCombine`, `Hash` and `Hash16` implementations
/// - `std::io::Write` (with the `std` feature)
macro_rules! define_crc16_type {
  (
    $(#[$outer:meta])*
    $vis:vis struct $name:ident {
      table: $table:expr,
      poly: $poly:expr,
    }
  ) => {
    $(#[$outer])*
    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    $vis struct $name {
      state: u16,
    }

    impl $name {
      const SHIFT8_MATRIX: $crate::combine::Gf2Matrix16 = $crate::combine::shift8_matrix($poly);

      /// Create a hasher that continues from a previously returned checksum.
      #[inline]
      #[must_use]
      pub const fn resume(crc: u16) -> Self {
        Self { state: crc }
      }

      /// The cached table this type computes with.
      #[inline]
      #[must_use]
      pub fn table() -> &'static $crate::Table {
        &$table
      }

      /// Name of the update implementation in use.
      #[inline]
      #[must_use]
      pub const fn backend_name() -> &'static str {
        "portable/table-driven"
      }
    }

    impl core::fmt::Debug for $name {
      fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct(stringify!($name))
          .field("state", &format_args!("{:#06x}", self.state))
          .finish()
      }
    }

    impl $crate::Checksum for $name {
      const OUTPUT_SIZE: usize = $crate::SIZE;
      type Output = u16;

      #[inline]
      fn new() -> Self {
        Self { state: 0 }
      }

      #[inline]
      fn with_initial(initial: u16) -> Self {
        Self::resume(initial)
      }

      #[inline]
      fn update(&mut self, data: &[u8]) {
        self.state = $crate::update(self.state, &$table, data);
      }

      #[inline]
      fn finalize(&self) -> u16 {
        self.state
      }

      #[inline]
      fn reset(&mut self) {
        self.state = 0;
      }
    }

    impl $crate::ChecksumCombine for $name {
      #[inline]
      fn combine(crc_a: u16, crc_b: u16, len_b: usize) -> u16 {
        $crate::combine::combine_with(crc_a, crc_b, len_b, Self::SHIFT8_MATRIX)
      }
    }

    impl $crate::Hash for $name {
      #[inline]
      fn write(&mut self, data: &[u8]) -> usize {
        self.state = $crate::update(self.state, &$table, data);
        data.len()
      }

      #[inline]
      fn append_sum(&self, out: &mut alloc::vec::Vec<u8>) {
        out.extend_from_slice(&self.state.to_be_bytes());
      }

      #[inline]
      fn reset(&mut self) {
        self.state = 0;
      }

      #[inline]
      fn size(&self) -> usize {
        $crate::SIZE
      }

      #[inline]
      fn block_size(&self) -> usize {
        1
      }
    }

    impl $crate::Hash16 for $name {
      #[inline]
      fn sum16(&self) -> u16 {
        self.state
      }
    }

    #[cfg(feature = "std")]
    impl std::io::Write for $name {
      #[inline]
      fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        Ok($crate::Hash::write(self, buf))
      }

      #[inline]
      fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
      }
    }
  };
}
