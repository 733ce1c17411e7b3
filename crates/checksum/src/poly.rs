//! Polynomial representation algebra.
//!
//! A CRC generator polynomial has four standard bit-level encodings, and
//! protocol specifications quote whichever one suits their hardware:
//!
//! | Representation | `reversed` | `reciprocal` | CCITT-16 example |
//! |----------------|------------|--------------|------------------|
//! | normal (MSB-first) | false | false | `0x1021` |
//! | reversed (LSB-first) | true | false | `0x8408` |
//! | reciprocal | false | true | `0x0811` |
//! | reversed reciprocal | true | true | `0x8810` |
//!
//! [`Poly`] carries one encoding plus the flags identifying it; conversions
//! are pure functions returning a new descriptor. The word is held in a
//! `u32` register with an explicit width, so one algorithm body covers all
//! widths from 1 to 32 bits.

use crate::error::CrcError;

/// Mask with the low `width` bits set.
#[inline]
#[must_use]
pub(crate) const fn width_mask(width: u8) -> u32 {
  !0u32 >> (32 - width as u32)
}

/// Mirror the low `width` bits of `word` within those `width` bits.
///
/// Bits at positions `>= width` are discarded.
#[inline]
#[must_use]
pub(crate) const fn reverse_bits(word: u32, width: u8) -> u32 {
  (word.reverse_bits() >> (32 - width as u32)) & width_mask(width)
}

/// A CRC polynomial in a specific representation.
///
/// Immutable once constructed; all conversions return a new descriptor.
/// The invariant that `word` fits in `width` bits is enforced by the
/// constructors and preserved by every conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Poly {
  word: u32,
  width: u8,
  reversed: bool,
  reciprocal: bool,
}

impl Poly {
  /// Create a polynomial in normal (MSB-first) form.
  ///
  /// # Errors
  ///
  /// [`CrcError::InvalidWidth`] if `width` is outside `1..=32`;
  /// [`CrcError::WordOverflow`] if `word` has bits at or above `width`.
  pub const fn new(word: u32, width: u8) -> Result<Self, CrcError> {
    Self::with_form(word, width, false, false)
  }

  /// Create a polynomial whose `word` is already in the representation
  /// named by the orientation flags.
  ///
  /// # Errors
  ///
  /// Same validation as [`Poly::new`].
  pub const fn with_form(word: u32, width: u8, reversed: bool, reciprocal: bool) -> Result<Self, CrcError> {
    if width == 0 || width > 32 {
      return Err(CrcError::InvalidWidth { width });
    }
    if word & !width_mask(width) != 0 {
      return Err(CrcError::WordOverflow { word, width });
    }
    Ok(Self {
      word,
      width,
      reversed,
      reciprocal,
    })
  }

  /// The polynomial's coefficient encoding in the current representation.
  #[inline]
  #[must_use]
  pub const fn word(&self) -> u32 {
    self.word
  }

  /// Degree of the polynomial, `1..=32`.
  #[inline]
  #[must_use]
  pub const fn width(&self) -> u8 {
    self.width
  }

  /// Whether `word` is the bit-mirrored (LSB-first) encoding.
  #[inline]
  #[must_use]
  pub const fn is_reversed(&self) -> bool {
    self.reversed
  }

  /// Whether `word` is the coefficient-mirrored encoding.
  #[inline]
  #[must_use]
  pub const fn is_reciprocal(&self) -> bool {
    self.reciprocal
  }

  /// Whether a checksum register for this representation shifts right
  /// (least-significant bit first) instead of left.
  #[inline]
  #[must_use]
  pub const fn is_lsbit_first(&self) -> bool {
    self.reversed
  }

  /// Mask with the low `width` bits set.
  #[inline]
  #[must_use]
  pub const fn mask(&self) -> u32 {
    width_mask(self.width)
  }

  /// The normal form of the polynomial.
  ///
  /// Undoes `reversed` first, then `reciprocal`; the coefficient mirror is
  /// defined on the non-reversed bit ordering.
  #[must_use]
  pub const fn normal_form(self) -> Self {
    let mut p = self;
    if p.reversed {
      p = p.reverse();
    }
    if p.reciprocal {
      p = p.mirror_coefficients();
    }
    p
  }

  /// The reversed, LSB-first form of the polynomial.
  ///
  /// Returns the polynomial unchanged if it is already reversed.
  #[must_use]
  pub const fn reversed_form(self) -> Self {
    if self.reversed {
      return self;
    }
    self.reverse()
  }

  /// The reciprocal form, obtained by mirroring the coefficients.
  ///
  /// Returns the polynomial unchanged if it is already reciprocal. For a
  /// reversed polynomial the mirror is sandwiched between bit reversals,
  /// since it is defined on the non-reversed coefficient ordering.
  #[must_use]
  pub const fn reciprocal_form(self) -> Self {
    if self.reciprocal {
      return self;
    }
    if self.reversed {
      return self.reverse().mirror_coefficients().reverse();
    }
    self.mirror_coefficients()
  }

  /// Bit-reverse the word within `width` bits and flip `reversed`.
  const fn reverse(self) -> Self {
    Self {
      word: reverse_bits(self.word, self.width),
      width: self.width,
      reversed: !self.reversed,
      reciprocal: self.reciprocal,
    }
  }

  /// Mirror the coefficients around the polynomial's midpoint.
  ///
  /// Reverses the full 32-bit word, aligns the result to a `width + 1`-bit
  /// field, forces the constant term, and masks to `width` bits. Only at
  /// `width == 32` does the alignment become a left shift.
  const fn mirror_coefficients(self) -> Self {
    let u = self.word.reverse_bits();
    let shift = 32 - self.width as i32 - 1;
    let u = if shift >= 0 { u >> shift as u32 } else { u << (-shift) as u32 };

    Self {
      word: (u | 1) & width_mask(self.width),
      width: self.width,
      reversed: self.reversed,
      reciprocal: !self.reciprocal,
    }
  }
}
