//! Property tests for the crate-wide correctness invariants.
//!
//! Two invariant families anchor everything else:
//!
//! 1. **Representation algebra**: conversions are idempotent, bit reversal
//!    is an involution, and the normal form of every orientation of a
//!    polynomial recovers the same word — swept over all widths 1..=32
//!    (the reciprocal alignment arithmetic has width-boundary cases that
//!    deserve exhaustive sweeping, not spot checks).
//! 2. **Bitwise/table equivalence**: the table-driven byte strategies are
//!    bit-identical to folding the bitwise engine with `data_width = 8`.
//!
//! The bitwise engine is the oracle; it mirrors the mathematical definition
//! directly.

extern crate std;

use std::vec::Vec;

use proptest::prelude::*;

use crate::{
  bitwise::update_bitwise,
  model::Model,
  poly::{reverse_bits, width_mask, Poly},
  table::TableOptions,
};

/// Any valid polynomial: random width, random word with the constant term
/// set (every CRC generator has the +1 term).
fn arb_poly() -> impl Strategy<Value = Poly> {
  (1u8..=32, any::<u32>()).prop_map(|(width, raw)| {
    let word = (raw & width_mask(width)) | 1;
    Poly::new(word, width).unwrap()
  })
}

/// A polynomial with a byte-stream strategy: width 8, 16, or 32, either
/// orientation.
fn arb_strategy_poly() -> impl Strategy<Value = Poly> {
  (prop_oneof![Just(8u8), Just(16u8), Just(32u8)], any::<u32>(), any::<bool>()).prop_map(|(width, raw, reversed)| {
    let word = (raw & width_mask(width)) | 1;
    let p = Poly::new(word, width).unwrap();
    if reversed {
      p.reversed_form()
    } else {
      p
    }
  })
}

proptest! {
  #![proptest_config(ProptestConfig::with_cases(512))]

  // ───────────────────────────────────────────────────────────────────────
  // Representation Algebra
  // ───────────────────────────────────────────────────────────────────────

  #[test]
  fn conversions_are_idempotent(p in arb_poly()) {
    let reversed = p.reversed_form();
    prop_assert_eq!(reversed.reversed_form(), reversed);

    let reciprocal = p.reciprocal_form();
    prop_assert_eq!(reciprocal.reciprocal_form(), reciprocal);
  }

  #[test]
  fn normal_form_recovers_every_orientation(p in arb_poly()) {
    let reversed = p.reversed_form();
    let reciprocal = p.reciprocal_form();
    let reversed_reciprocal = reversed.reciprocal_form();

    for q in [p, reversed, reciprocal, reversed_reciprocal] {
      let n = q.normal_form();
      prop_assert_eq!(n.word(), p.word(), "normal form of {:?}", q);
      prop_assert!(!n.is_reversed());
      prop_assert!(!n.is_reciprocal());
      prop_assert_eq!(n.width(), p.width());
    }
  }

  #[test]
  fn bit_reversal_is_an_involution(p in arb_poly()) {
    let once = reverse_bits(p.word(), p.width());
    prop_assert_eq!(reverse_bits(once, p.width()), p.word());
  }

  #[test]
  fn words_always_fit_their_width(p in arb_poly()) {
    for q in [p.reversed_form(), p.reciprocal_form(), p.normal_form()] {
      prop_assert_eq!(q.word() & !width_mask(q.width()), 0);
    }
  }

  // ───────────────────────────────────────────────────────────────────────
  // Bitwise/Table Equivalence
  // ───────────────────────────────────────────────────────────────────────
  //
  // The primary correctness property of the crate: for every supported
  // register width and both orientations, the table-driven strategy over a
  // byte stream equals the per-byte bitwise fold.
  // ───────────────────────────────────────────────────────────────────────

  #[test]
  fn table_strategy_matches_bitwise_fold(
    p in arb_strategy_poly(),
    init in any::<u32>(),
    data in prop::collection::vec(any::<u8>(), 0..=512),
  ) {
    let init = init & p.mask();

    let mut expected = init;
    for &byte in &data {
      expected = update_bitwise(p, expected, byte as u32, 8).unwrap();
    }

    let table = p.make_table(TableOptions::new()).unwrap();
    let strategy = crate::Strategy::for_poly(p).unwrap();
    let actual = strategy.update(init, &table, &data).unwrap();

    prop_assert_eq!(actual, expected, "strategy {:?} for {:?}", strategy, p);
  }

  #[test]
  fn chunked_updates_match_oneshot(
    p in arb_strategy_poly(),
    initial_invert in any::<bool>(),
    final_invert in any::<bool>(),
    data in prop::collection::vec(any::<u8>(), 0..=512),
    cut in any::<prop::sample::Index>(),
  ) {
    let model = Model::new(p)
      .with_initial_invert(initial_invert)
      .with_final_invert(final_invert);

    let oneshot = model.checksum(&data).unwrap();

    let split = cut.index(data.len() + 1);
    let (a, b) = data.split_at(split);
    let mut instance = model.instance().unwrap();
    instance.update(a);
    instance.update(b);

    prop_assert_eq!(instance.sum(), oneshot);
  }

  // ───────────────────────────────────────────────────────────────────────
  // Self-Check Property
  // ───────────────────────────────────────────────────────────────────────

  #[test]
  fn message_plus_own_checksum_sums_to_zero(
    data in prop::collection::vec(any::<u8>(), 0..=128),
  ) {
    // Standard CRC self-verification with an 8-bit polynomial: append the
    // checksum to the message and the recomputed checksum is zero.
    let model = Model::new(crate::catalog::DOW8);

    let mut framed: Vec<u8> = data.clone();
    let instance = {
      let mut i = model.instance().unwrap();
      i.update(&data);
      i
    };
    instance.append_sum(&mut framed);

    prop_assert_eq!(model.checksum(&framed).unwrap(), 0);
  }
}
