//! Bitwise CRC update engine.
//!
//! This is the canonical "source of truth" for CRC computation: a direct
//! shift-register simulation of division by the generator polynomial,
//! processing one bit at a time. Table construction derives every entry from
//! it, and the table-driven byte strategies are verified against it.
//!
//! The engine is stateless, allocation-free, and `const`-evaluable. It
//! dispatches on the polynomial's orientation:
//!
//! - normal form shifts the register left, consuming input MSB-first;
//! - reversed form shifts right, consuming input LSB-first.
//!
//! `data_width` selects how many low bits of `data` are folded in, which
//! supports sub-byte protocol fields (a 5-bit address, a 3-bit flag run).
//! Bits of `data` at positions `>= data_width` never influence the result.

use crate::{
  error::CrcError,
  poly::{width_mask, Poly},
};

/// Fold `data_width` bits of `data` into `crc`.
///
/// Selects the MSB-first or LSB-first algorithm from the polynomial's
/// representation and masks the result to the polynomial's width.
///
/// # Errors
///
/// [`CrcError::InvalidDataWidth`] if `data_width` is outside `1..=32` — the
/// data register is 32 bits wide and `data_width` must not exceed it.
pub const fn update_bitwise(poly: Poly, crc: u32, data: u32, data_width: u8) -> Result<u32, CrcError> {
  if data_width == 0 || data_width > 32 {
    return Err(CrcError::InvalidDataWidth { data_width });
  }
  if poly.is_reversed() {
    Ok(update_reversed(poly, crc, data, data_width))
  } else {
    Ok(update_normal(poly, crc, data, data_width))
  }
}

/// MSB-first shift-register simulation.
///
/// For each input bit from bit `data_width - 1` down to bit 0: XOR the
/// register's top bit with the input bit; on 1, shift left and fold in the
/// polynomial word, otherwise just shift.
const fn update_normal(poly: Poly, crc_in: u32, data: u32, data_width: u8) -> u32 {
  let msb = 1u32 << (poly.width() as u32 - 1);
  let mut crc = crc_in;

  // Bits above the register width accumulate during the left shifts and are
  // discarded by the final mask; they never feed back into the low bits.
  let mut i = 1u32 << (data_width as u32 - 1);
  while i > 0 {
    let mut bit = crc & msb;
    if data & i != 0 {
      bit ^= msb;
    }
    crc = if bit != 0 { (crc << 1) ^ poly.word() } else { crc << 1 };
    i >>= 1;
  }
  crc & poly.mask()
}

/// LSB-first mirror of the normal algorithm.
///
/// XORs the input run into the low register bits, then shifts right once per
/// data bit, folding in the (reversed) polynomial word whenever a one falls
/// out of the register.
const fn update_reversed(poly: Poly, crc_in: u32, data: u32, data_width: u8) -> u32 {
  let mut crc = crc_in ^ (data & width_mask(data_width));

  let mut i = 0;
  while i < data_width {
    crc = if crc & 1 != 0 { (crc >> 1) ^ poly.word() } else { crc >> 1 };
    i += 1;
  }
  crc & poly.mask()
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

  const DOW8: Poly = poly(0x31, 8);
  const CCITT16: Poly = poly(0x1021, 16);

  #[test]
  fn rejects_invalid_data_width() {
    assert_eq!(
      update_bitwise(DOW8, 0, 0, 0),
      Err(CrcError::InvalidDataWidth { data_width: 0 })
    );
    assert_eq!(
      update_bitwise(DOW8, 0, 0, 33),
      Err(CrcError::InvalidDataWidth { data_width: 33 })
    );
  }

  #[test]
  fn normal_form_single_byte() {
    // CRC-8-DOW over one byte, checked against an independent per-bit fold.
    let mut crc = 0u32;
    let byte = 0xA1u32;
    for bit in (0..8).rev() {
      let fed = ((crc >> 7) ^ (byte >> bit)) & 1;
      crc = (crc << 1) & 0xFF;
      if fed != 0 {
        crc ^= 0x31;
      }
    }
    assert_eq!(update_bitwise(DOW8, 0, byte, 8), Ok(crc));
  }

  #[test]
  fn reversed_form_matches_normal_mirror() {
    // Feeding mirrored input to the mirrored polynomial yields the mirrored
    // checksum of the normal-form computation.
    let rev = CCITT16.reversed_form();
    for byte in [0x00u32, 0x01, 0x2F, 0x80, 0xFF] {
      let normal = update_bitwise(CCITT16, 0, byte, 8).unwrap();
      let mirrored = update_bitwise(rev, 0, crate::poly::reverse_bits(byte, 8), 8).unwrap();
      assert_eq!(crate::poly::reverse_bits(normal, 16), mirrored, "byte {byte:#04x}");
    }
  }

  #[test]
  fn sub_byte_data_width_ignores_high_bits() {
    let rev = CCITT16.reversed_form();
    for data in 0..32u32 {
      for poly in [CCITT16, rev] {
        let narrow = update_bitwise(poly, 0x0123, data, 5);
        let polluted = update_bitwise(poly, 0x0123, data | 0xFFFF_FFE0, 5);
        assert_eq!(narrow, polluted, "data {data:#x} with {poly:?}");
      }
    }
  }

  #[test]
  fn sub_byte_processes_exactly_that_many_bits() {
    // A 5-bit run is two separate runs of 2 and 3 bits, MSB-first.
    let data = 0b10110u32;
    let full = update_bitwise(CCITT16, 0, data, 5).unwrap();
    let high = update_bitwise(CCITT16, 0, data >> 3, 2).unwrap();
    let split = update_bitwise(CCITT16, high, data & 0b111, 3).unwrap();
    assert_eq!(full, split);
  }

  #[test]
  fn width_32_register_overflow_is_masked() {
    let ieee = poly(0x04C1_1DB7, 32);
    let crc = update_bitwise(ieee, 0xFFFF_FFFF, 0xFF, 8).unwrap();
    assert_eq!(crc, crc & 0xFFFF_FFFF);

    let rev = ieee.reversed_form();
    assert_eq!(rev.word(), 0xEDB8_8320);
    let crc = update_bitwise(rev, 0xFFFF_FFFF, 0xFF, 8).unwrap();
    assert_eq!(crc, crc & 0xFFFF_FFFF);
  }

  #[test]
  fn is_const_evaluable() {
    const CRC: Result<u32, CrcError> = update_bitwise(DOW8, 0, 0xA1, 8);
    assert!(CRC.is_ok());
  }
}
