//! Error type for CRC configuration preconditions.
//!
//! Every fallible operation in this crate fails for exactly one reason: a
//! configuration that violates a documented precondition (polynomial width
//! out of range, a word that does not fit its width, an unsupported register
//! width at strategy dispatch). These are programming errors to fix, not
//! transient conditions to retry; no operation has a partial-result mode.

use core::fmt;

/// A CRC configuration violates a precondition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum CrcError {
  /// Polynomial width outside `1..=32`.
  InvalidWidth {
    /// The rejected width.
    width: u8,
  },
  /// Polynomial word has coefficient bits at or above its width.
  WordOverflow {
    /// The rejected word.
    word: u32,
    /// The width the word must fit in.
    width: u8,
  },
  /// Data width outside `1..=32` (the data register is 32 bits wide).
  InvalidDataWidth {
    /// The rejected data width.
    data_width: u8,
  },
  /// No byte-stream strategy exists for this register width.
  ///
  /// Table-driven byte processing supports widths 8, 16, and 32 only.
  UnsupportedWidth {
    /// The width that has no strategy.
    width: u8,
  },
  /// A strategy was handed a table built for the wrong data width.
  TableMismatch {
    /// Data width the strategy requires.
    expected: u8,
    /// Data width the table was built with.
    found: u8,
  },
}

impl fmt::Display for CrcError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match *self {
      Self::InvalidWidth { width } => {
        write!(f, "polynomial width {width} outside 1..=32")
      }
      Self::WordOverflow { word, width } => {
        write!(f, "polynomial word {word:#x} does not fit in {width} bits")
      }
      Self::InvalidDataWidth { data_width } => {
        write!(f, "data width {data_width} outside 1..=32")
      }
      Self::UnsupportedWidth { width } => {
        write!(f, "no byte-stream strategy for width {width} (supported: 8, 16, 32)")
      }
      Self::TableMismatch { expected, found } => {
        write!(f, "table built for data width {found}, strategy requires {expected}")
      }
    }
  }
}

impl core::error::Error for CrcError {}

#[cfg(test)]
mod tests {
  extern crate alloc;

  use alloc::string::ToString;

  use super::*;

  #[test]
  fn display_messages() {
    assert_eq!(
      CrcError::InvalidWidth { width: 0 }.to_string(),
      "polynomial width 0 outside 1..=32"
    );
    assert_eq!(
      CrcError::WordOverflow { word: 0x1021, width: 8 }.to_string(),
      "polynomial word 0x1021 does not fit in 8 bits"
    );
    assert_eq!(
      CrcError::UnsupportedWidth { width: 24 }.to_string(),
      "no byte-stream strategy for width 24 (supported: 8, 16, 32)"
    );
  }

  #[test]
  fn trait_bounds() {
    fn assert_send<T: Send>() {}
    fn assert_sync<T: Sync>() {}

    assert_send::<CrcError>();
    assert_sync::<CrcError>();
  }

  #[test]
  fn error_trait_impl() {
    use core::error::Error;

    let err = CrcError::InvalidDataWidth { data_width: 33 };
    assert!(err.source().is_none());
  }
}
