//! Streaming checksum trait.
//!
//! - **Streaming**: incremental updates for large or fragmented data
//! - **Inline-friendly**: all provided methods are thin loops over `update`

use core::fmt::Debug;

/// Streaming checksum computation.
///
/// Implementors hold a running register and fold input into it one chunk at
/// a time. Unlike a hash-algorithm trait there are no static constructors:
/// a checksum instance may be configured at runtime (polynomial, width,
/// inversion flags), so construction is left to the implementing type.
///
/// # Implementor Requirements
///
/// - `finalize()` must be idempotent (calling it twice without an intervening
///   `update` returns the same value)
/// - `reset()` must restore the state produced by the instance's constructor
pub trait Checksum {
  /// The checksum output type.
  ///
  /// `u32` for register widths up to 32 bits.
  type Output: Copy + Eq + Debug;

  /// Fold additional data into the running checksum.
  ///
  /// May be called any number of times; chunk boundaries never affect the
  /// final value.
  fn update(&mut self, data: &[u8]);

  /// Return the checksum over everything fed so far.
  ///
  /// Does not consume or reset the instance; further updates continue from
  /// the current state.
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Restore the initial state.
  fn reset(&mut self);

  /// Fold multiple non-contiguous buffers, in order.
  ///
  /// Semantics are identical to calling [`update`](Self::update) on each
  /// buffer in turn.
  #[inline]
  fn update_vectored(&mut self, bufs: &[&[u8]]) {
    for buf in bufs {
      self.update(buf);
    }
  }
}
