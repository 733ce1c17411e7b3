//! Named polynomials and preset models.
//!
//! Presets for well-known standards. The core never needs a name — any
//! `(word, width)` pair works — but protocol code reads better against
//! these constants.
//!
//! | Constant | Polynomial | Width | Used by |
//! |----------|------------|-------|---------|
//! | [`GSM3`] | `0x3` | 3 | GSM |
//! | [`ITU4`] | `0x3` | 4 | ITU G.704 |
//! | [`DOW8`] | `0x31` | 8 | Dallas/Maxim 1-Wire, Si7021 |
//! | [`SAE_J1850_8`] | `0x1D` | 8 | SAE J1850 |
//! | [`CCITT16`] | `0x1021` | 16 | X.25, HDLC, XMODEM |
//! | [`IBM16`] | `0x8005` | 16 | Modbus, USB |
//! | [`IEEE32`] | `0x04C11DB7` | 32 | Ethernet, gzip, zip, PNG |

use crate::{model::Model, poly::Poly};

const fn poly(word: u32, width: u8) -> Poly {
  match Poly::new(word, width) {
    Ok(p) => p,
    Err(_) => panic!("invalid catalog polynomial"),
  }
}

/// CRC-3-GSM: x³ + x + 1.
pub const GSM3: Poly = poly(0x3, 3);

/// CRC-4-ITU: x⁴ + x + 1.
pub const ITU4: Poly = poly(0x3, 4);

/// CRC-8-Dallas/Maxim: x⁸ + x⁵ + x⁴ + 1.
pub const DOW8: Poly = poly(0x31, 8);

/// CRC-8-SAE-J1850: x⁸ + x⁴ + x³ + x² + 1.
pub const SAE_J1850_8: Poly = poly(0x1D, 8);

/// CRC-16-CCITT: x¹⁶ + x¹² + x⁵ + 1.
pub const CCITT16: Poly = poly(0x1021, 16);

/// CRC-16-IBM: x¹⁶ + x¹⁵ + x² + 1.
pub const IBM16: Poly = poly(0x8005, 16);

/// CRC-32-IEEE (ISO 3309): used by Ethernet, gzip, zip, PNG.
pub const IEEE32: Poly = poly(0x04C1_1DB7, 32);

/// CRC-16/Modbus: IBM polynomial, LSB-first, register starts at `0xFFFF`.
pub const MODBUS: Model = Model::new(IBM16.reversed_form()).with_initial_invert(true);

/// CRC-8/MAXIM-DOW: 1-Wire bus checksum, LSB-first.
pub const DOW: Model = Model::new(DOW8.reversed_form());

/// CRC-8/SAE-J1850: MSB-first with inverted initial and final values.
pub const SAE_J1850: Model = Model::new(SAE_J1850_8).with_initial_invert(true).with_final_invert(true);

/// CRC-32 (IEEE 802.3): LSB-first with inverted initial and final values.
pub const IEEE: Model = Model::new(IEEE32.reversed_form())
  .with_initial_invert(true)
  .with_final_invert(true);

// Compile-time verification of the catalog against published
// representation values. If these fail, the build fails.
const _: () = {
  assert!(CCITT16.reversed_form().word() == 0x8408);
  assert!(CCITT16.reciprocal_form().word() == 0x0811);
  assert!(CCITT16.reversed_form().reciprocal_form().word() == 0x8810);
  assert!(IBM16.reversed_form().word() == 0xA001);
  assert!(IEEE32.reversed_form().word() == 0xEDB8_8320);
  assert!(GSM3.reversed_form().word() == 0x6);
};
