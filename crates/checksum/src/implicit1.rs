//! Conversion from Koopman's implicit +1 notation.
//!
//! In implicit +1 notation the always-present constant term is dropped and
//! the polynomial's top coefficient is written out, so the degree can be
//! read off the word's bit length:
//!
//! ```text
//! implicit +1:  1·x³  + 0·x² + 1·x¹ + (1·x⁰) = 0b 1 01(1) => 0x5
//! explicit +1: (1·x³) + 0·x² + 1·x¹ +  1·x⁰  = 0b(1)01 1  => 0x3
//! ```
//!
//! See <https://users.ece.cmu.edu/~koopman/crc/notes.html>. The notation is
//! only a different spelling of the word; the CRC algorithm is unchanged. A
//! word in implicit +1 notation looks identical to the word of the same
//! polynomial converted to reversed-reciprocal form.

use crate::{error::CrcError, poly::Poly};

/// Convert a word from implicit +1 notation to a normal-form [`Poly`].
///
/// The width is the bit length of `k`.
///
/// # Errors
///
/// [`CrcError::InvalidWidth`] if `k` is zero (no degree to derive).
pub const fn from_implicit1(k: u32) -> Result<Poly, CrcError> {
  if k == 0 {
    return Err(CrcError::InvalidWidth { width: 0 });
  }
  let width = (32 - k.leading_zeros()) as u8;

  // Make room for the explicit +1 bit. At width 32 the top coefficient is
  // shifted out, which is exactly where it becomes implicit.
  let mut word = k << 1;

  // Clear the topmost coefficient; it is implicit in explicit +1 notation.
  if width < 32 {
    word ^= 1 << width;
  }

  Poly::new(word | 1, width)
}

/// Like [`from_implicit1`], but the resulting descriptor carries the
/// `reciprocal` flag.
///
/// # Errors
///
/// Same conditions as [`from_implicit1`].
pub const fn from_implicit1_reciprocal(k: u32) -> Result<Poly, CrcError> {
  match from_implicit1(k) {
    Ok(p) => Poly::with_form(p.word(), p.width(), false, true),
    Err(e) => Err(e),
  }
}
