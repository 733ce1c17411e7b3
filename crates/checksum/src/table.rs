//! Lookup-table construction.
//!
//! A table replaces per-bit computation with per-chunk computation: entry
//! `i` is the bitwise engine's result for the input run `i`, so processing a
//! `data_width`-bit chunk becomes a single lookup. Options allow baking an
//! initial register value into every entry (saves one XOR when the table is
//! used for a mid-stream fragment) and mirroring each entry's bits for
//! protocols that emit reflected results.

use alloc::{boxed::Box, vec::Vec};

use crate::{
  bitwise::update_bitwise,
  error::CrcError,
  poly::{reverse_bits, width_mask, Poly},
};

/// Build options for a lookup table.
///
/// The defaults (`initial = 0`, `data_width = 8`, no output reversal)
/// produce the 256-entry byte table consumed by the byte-stream strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TableOptions {
  initial: u32,
  data_width: u8,
  reverse_bits: bool,
}

impl TableOptions {
  /// Default build options: byte-wide lookups, zero initial value.
  #[must_use]
  pub const fn new() -> Self {
    Self {
      initial: 0,
      data_width: 8,
      reverse_bits: false,
    }
  }

  /// Bake `initial` into the computation of every table entry.
  ///
  /// When a table is later used manually, for example when a CRC is
  /// calculated over some bits only, this saves one XOR operation.
  #[must_use]
  pub const fn with_initial(mut self, initial: u32) -> Self {
    self.initial = initial;
    self
  }

  /// Number of input bits consumed per lookup; the table gets
  /// `2^data_width` entries.
  #[must_use]
  pub const fn with_data_width(mut self, data_width: u8) -> Self {
    self.data_width = data_width;
    self
  }

  /// Mirror the low `width` bits of each table entry after computation.
  #[must_use]
  pub const fn with_reversed_bits(mut self) -> Self {
    self.reverse_bits = true;
    self
  }

  /// The initial register value baked into each entry.
  #[inline]
  #[must_use]
  pub const fn initial(&self) -> u32 {
    self.initial
  }

  /// Input bits consumed per lookup.
  #[inline]
  #[must_use]
  pub const fn data_width(&self) -> u8 {
    self.data_width
  }

  /// Whether entries are bit-mirrored after computation.
  #[inline]
  #[must_use]
  pub const fn reverses_bits(&self) -> bool {
    self.reverse_bits
  }
}

impl Default for TableOptions {
  #[inline]
  fn default() -> Self {
    Self::new()
  }
}

/// A CRC lookup table: `2^data_width` register words indexed by the input
/// chunk value.
///
/// Immutable once built. The length invariant (`entries.len() ==
/// 1 << data_width`) is established by [`Table::build`] and relied on by
/// [`lookup`](Table::lookup) and the byte-stream strategies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
  entries: Box<[u32]>,
  data_width: u8,
}

impl Table {
  /// Build the lookup table for `poly` with the given options.
  ///
  /// Entry `i` is `update_bitwise(poly, initial, i, data_width)`, bit-
  /// mirrored within the polynomial's width when the option is set.
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidDataWidth`] if the configured data width is outside
  /// `1..=32` or the table would not fit in the address space.
  pub fn build(poly: Poly, opts: TableOptions) -> Result<Self, CrcError> {
    let len = match 1usize.checked_shl(opts.data_width as u32) {
      Some(len) if opts.data_width >= 1 && opts.data_width <= 32 => len,
      _ => {
        return Err(CrcError::InvalidDataWidth {
          data_width: opts.data_width,
        })
      }
    };

    let mut entries = Vec::with_capacity(len);
    for i in 0..len {
      let mut entry = update_bitwise(poly, opts.initial, i as u32, opts.data_width)?;
      if opts.reverse_bits {
        entry = reverse_bits(entry, poly.width());
      }
      entries.push(entry);
    }

    Ok(Self {
      entries: entries.into_boxed_slice(),
      data_width: opts.data_width,
    })
  }

  /// The entry for `index`, masked to the table's data width.
  ///
  /// Total over all inputs: bits of `index` at or above `data_width` are
  /// ignored, mirroring the bitwise engine's contract.
  // In bounds: the masked index is < 2^data_width == entries.len().
  #[allow(clippy::indexing_slicing)]
  #[inline]
  #[must_use]
  pub fn lookup(&self, index: u32) -> u32 {
    self.entries[(index & width_mask(self.data_width)) as usize]
  }

  /// The table entries in index order.
  #[inline]
  #[must_use]
  pub fn entries(&self) -> &[u32] {
    &self.entries
  }

  /// Input bits consumed per lookup.
  #[inline]
  #[must_use]
  pub const fn data_width(&self) -> u8 {
    self.data_width
  }

  /// Number of entries, always `1 << data_width`.
  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.entries.len()
  }

  /// Always false; a table has at least two entries.
  #[inline]
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }
}

impl Poly {
  /// Build a lookup table for this polynomial.
  ///
  /// Convenience for [`Table::build`].
  ///
  /// # Errors
  ///
  /// Propagates [`Table::build`] errors.
  pub fn make_table(self, opts: TableOptions) -> Result<Table, CrcError> {
    Table::build(self, opts)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const fn poly(word: u32, width: u8) -> Poly {
    match Poly::new(word, width) {
      Ok(p) => p,
      Err(_) => panic!("valid polynomial"),
    }
  }

  #[test]
  fn default_options_build_byte_table() {
    let tab = poly(0x31, 8).make_table(TableOptions::new()).unwrap();
    assert_eq!(tab.len(), 256);
    assert_eq!(tab.data_width(), 8);
    assert_eq!(tab.lookup(0), 0);
    assert_ne!(tab.lookup(1), 0);
  }

  #[test]
  fn entries_match_bitwise_engine() {
    let p = poly(0x8005, 16).reversed_form();
    let tab = p.make_table(TableOptions::new()).unwrap();
    for i in 0..256u32 {
      assert_eq!(tab.lookup(i), update_bitwise(p, 0, i, 8).unwrap());
    }
  }

  #[test]
  fn initial_value_is_baked_in() {
    let p = poly(0x3, 3).reversed_form();
    let tab = p.make_table(TableOptions::new().with_initial(5).with_data_width(5)).unwrap();
    assert_eq!(tab.len(), 32);
    for i in 0..32u32 {
      assert_eq!(tab.lookup(i), update_bitwise(p, 5, i, 5).unwrap());
    }
  }

  #[test]
  fn reversed_bits_mirrors_each_entry() {
    let p = poly(0x3, 3).reversed_form();
    let plain = p.make_table(TableOptions::new()).unwrap();
    let mirrored = p.make_table(TableOptions::new().with_reversed_bits()).unwrap();
    for i in 0..256u32 {
      assert_eq!(mirrored.lookup(i), reverse_bits(plain.lookup(i), 3));
    }
  }

  #[test]
  fn lookup_masks_the_index() {
    let tab = poly(0x31, 8).make_table(TableOptions::new()).unwrap();
    assert_eq!(tab.lookup(0x1FF), tab.lookup(0xFF));
  }

  #[test]
  fn rejects_invalid_data_width() {
    let err = poly(0x31, 8).make_table(TableOptions::new().with_data_width(0));
    assert_eq!(err, Err(CrcError::InvalidDataWidth { data_width: 0 }));
  }
}
