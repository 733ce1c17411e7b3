//! Table-driven byte-stream strategies.
//!
//! Once a 256-entry byte table exists, a whole input byte is folded into the
//! register with one lookup. The update rule depends on the register width
//! and on which end of the register the input enters:
//!
//! | Width | Orientation | Update rule per byte `v` |
//! |-------|-------------|--------------------------|
//! | 8  | either    | `crc = tab[crc ^ v]` |
//! | 16 | MSB-first | `crc = tab[(crc >> 8) ^ v] ^ (crc << 8)` |
//! | 32 | MSB-first | `crc = tab[(crc >> 24) ^ v] ^ (crc << 8)` |
//! | 16 | LSB-first | `crc = tab[(crc & 0xFF) ^ v] ^ (crc >> 8)` |
//! | 32 | LSB-first | same as 16-bit LSB-first, widened |
//!
//! Every strategy is bit-identical to folding the bitwise engine with
//! `data_width = 8` over the same bytes; the property tests in this crate
//! verify that equivalence.

use crate::{error::CrcError, poly::Poly};
#[cfg(feature = "alloc")]
use crate::table::Table;

/// Byte-stream update/serialization strategy for one register width and
/// orientation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
  /// 8-bit register; the update rule is orientation-independent.
  Width8,
  /// 16-bit register, MSB-first.
  Width16,
  /// 32-bit register, MSB-first.
  Width32,
  /// 16-bit register, LSB-first.
  Width16Lsb,
  /// 32-bit register, LSB-first.
  Width32Lsb,
}

impl Strategy {
  /// Select the strategy matching a polynomial's width and orientation.
  ///
  /// # Errors
  ///
  /// [`CrcError::UnsupportedWidth`] for widths other than 8, 16, or 32.
  pub const fn for_poly(poly: Poly) -> Result<Self, CrcError> {
    match (poly.width(), poly.is_lsbit_first()) {
      (8, _) => Ok(Self::Width8),
      (16, false) => Ok(Self::Width16),
      (16, true) => Ok(Self::Width16Lsb),
      (32, false) => Ok(Self::Width32),
      (32, true) => Ok(Self::Width32Lsb),
      (width, _) => Err(CrcError::UnsupportedWidth { width }),
    }
  }

  /// Size of the serialized checksum in bytes.
  #[inline]
  #[must_use]
  pub const fn output_size(self) -> usize {
    match self {
      Self::Width8 => 1,
      Self::Width16 | Self::Width16Lsb => 2,
      Self::Width32 | Self::Width32Lsb => 4,
    }
  }

  /// Fold a byte stream into `crc` using `table`.
  ///
  /// # Errors
  ///
  /// [`CrcError::TableMismatch`] if `table` was not built for byte-wide
  /// lookups (`data_width == 8`).
  #[cfg(feature = "alloc")]
  pub fn update(self, crc: u32, table: &Table, data: &[u8]) -> Result<u32, CrcError> {
    if table.data_width() != 8 {
      return Err(CrcError::TableMismatch {
        expected: 8,
        found: table.data_width(),
      });
    }
    Ok(self.update_entries(crc, table.entries(), data))
  }

  /// Fold a byte stream over raw table entries.
  ///
  /// Callers guarantee `tab` holds the 256 entries of a byte table.
  // In bounds: every index is masked to the low 8 bits of a 256-entry table.
  #[allow(clippy::indexing_slicing)]
  pub(crate) fn update_entries(self, crc: u32, tab: &[u32], data: &[u8]) -> u32 {
    debug_assert_eq!(tab.len(), 256);
    let mut crc = crc;
    match self {
      Self::Width8 => {
        for &v in data {
          crc = tab[((crc ^ v as u32) & 0xFF) as usize];
        }
      }
      Self::Width16 => {
        for &v in data {
          crc = (tab[(((crc >> 8) ^ v as u32) & 0xFF) as usize] ^ (crc << 8)) & 0xFFFF;
        }
      }
      Self::Width32 => {
        for &v in data {
          crc = tab[(((crc >> 24) ^ v as u32) & 0xFF) as usize] ^ (crc << 8);
        }
      }
      Self::Width16Lsb | Self::Width32Lsb => {
        for &v in data {
          crc = tab[((crc ^ v as u32) & 0xFF) as usize] ^ (crc >> 8);
        }
      }
    }
    crc
  }

  /// Append the canonical byte serialization of `crc`.
  ///
  /// MSB-first strategies emit big-endian byte order, LSB-first strategies
  /// little-endian.
  #[cfg(feature = "alloc")]
  pub fn append(self, out: &mut alloc::vec::Vec<u8>, crc: u32) {
    match self {
      Self::Width8 => out.push(crc as u8),
      Self::Width16 => out.extend_from_slice(&[(crc >> 8) as u8, crc as u8]),
      Self::Width32 => out.extend_from_slice(&[(crc >> 24) as u8, (crc >> 16) as u8, (crc >> 8) as u8, crc as u8]),
      Self::Width16Lsb => out.extend_from_slice(&[crc as u8, (crc >> 8) as u8]),
      Self::Width32Lsb => out.extend_from_slice(&[crc as u8, (crc >> 8) as u8, (crc >> 16) as u8, (crc >> 24) as u8]),
    }
  }
}
