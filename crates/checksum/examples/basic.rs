//! Basic usage: polynomial representations, one-shot and streaming checksums.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{catalog, CrcError, Model, Poly, Strategy, TableCache, TableOptions};

fn main() -> Result<(), CrcError> {
  println!("=== CRC Basic Examples ===\n");

  representation_examples()?;
  one_shot_examples()?;
  streaming_example()?;
  cache_example()?;

  Ok(())
}

/// The four representations of a polynomial, using CCITT-16 as the subject.
fn representation_examples() -> Result<(), CrcError> {
  println!("--- Polynomial Representations ---\n");

  let normal = Poly::new(0x1021, 16)?;
  let reversed = normal.reversed_form();
  let reciprocal = normal.reciprocal_form();
  let reversed_reciprocal = reversed.reciprocal_form();

  println!("normal:              0x{:04X}", normal.word());
  println!("reversed:            0x{:04X}", reversed.word());
  println!("reciprocal:          0x{:04X}", reciprocal.word());
  println!("reversed reciprocal: 0x{:04X}", reversed_reciprocal.word());
  assert_eq!(reversed.word(), 0x8408);
  assert_eq!(reciprocal.word(), 0x0811);
  assert_eq!(reversed_reciprocal.word(), 0x8810);

  println!();
  Ok(())
}

/// One-shot computation through preset models.
fn one_shot_examples() -> Result<(), CrcError> {
  println!("--- One-Shot Computation ---\n");

  let data = b"123456789";

  // CRC-32 (IEEE 802.3) - Ethernet, gzip, zip, PNG
  let crc32 = catalog::IEEE.checksum(data)?;
  println!("CRC-32 (IEEE):    0x{crc32:08X}");
  assert_eq!(crc32, 0xCBF4_3926);

  // CRC-16/Modbus - serial line frames
  let modbus = catalog::MODBUS.checksum(&[0x02, 0x07])?;
  println!("CRC-16 (Modbus):  0x{modbus:04X}");
  assert_eq!(modbus, 0x1241);

  // CRC-8/MAXIM-DOW - 1-Wire bus
  let dow = catalog::DOW.checksum(data)?;
  println!("CRC-8 (DOW):      0x{dow:02X}");
  assert_eq!(dow, 0xA1);

  println!();
  Ok(())
}

/// Streaming computation: process data in chunks, serialize the result.
fn streaming_example() -> Result<(), CrcError> {
  println!("--- Streaming Computation ---\n");

  let mut instance = catalog::IEEE.instance()?;
  instance.update(b"1234");
  instance.update(b"56789");

  let crc = instance.sum();
  println!("Streaming CRC-32: 0x{crc:08X}");
  assert_eq!(crc, 0xCBF4_3926);

  // Wire serialization follows the polynomial's bit order: LSB-first
  // models append little-endian.
  let mut frame = b"123456789".to_vec();
  instance.append_sum(&mut frame);
  println!("Framed bytes:     {frame:02X?}");

  // A frame carrying its own checksum sums to zero-ish: for the IEEE
  // model the residue after the final inversion is the constant 0x2144DF1C.
  let residue = catalog::IEEE.checksum(&frame)?;
  println!("Residue:          0x{residue:08X}");
  assert_eq!(residue, 0x2144_DF1C);

  println!();
  Ok(())
}

/// Sharing lookup tables between instances through a cache.
fn cache_example() -> Result<(), CrcError> {
  println!("--- Table Cache ---\n");

  let cache = TableCache::new();
  let poly = catalog::IBM16.reversed_form();

  let table = cache.get_or_build(poly, TableOptions::new())?;
  let strategy = Strategy::for_poly(poly)?;
  let crc = strategy.update(0xFFFF, &table, &[0x02, 0x07])?;
  println!("Cached-table CRC: 0x{crc:04X}");

  // Models can draw their tables from the same cache.
  let model = Model::new(poly).with_initial_invert(true);
  let mut instance = model.instance_with(&cache)?;
  instance.update(&[0x02, 0x07]);
  assert_eq!(instance.sum(), crc);

  println!("Tables cached:    {}", cache.len());
  println!();
  Ok(())
}
