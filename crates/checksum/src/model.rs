//! Checksum models and running instances.
//!
//! A [`Model`] names a complete CRC algorithm: the polynomial descriptor
//! plus the invert-on-init / invert-on-finish bookkeeping that many
//! protocol specifications add around the core computation (XOR with the
//! width's all-ones mask). A model is cheap, `Copy`, and `const`-buildable,
//! so protocol crates can expose presets as constants.
//!
//! An [`Instance`] is a model put to work: it owns the byte table and a
//! running register, and implements the streaming [`Checksum`] trait.

use crate::{error::CrcError, poly::Poly, wordwise::Strategy};
#[cfg(feature = "alloc")]
use crate::table::{Table, TableOptions};
#[cfg(feature = "std")]
use crate::cache::TableCache;
#[cfg(feature = "alloc")]
use alloc::sync::Arc;
#[cfg(feature = "alloc")]
use traits::Checksum;

/// A complete CRC algorithm definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Model {
  poly: Poly,
  initial_invert: bool,
  final_invert: bool,
}

impl Model {
  /// Define a model over `poly` with no inversion steps.
  #[must_use]
  pub const fn new(poly: Poly) -> Self {
    Self {
      poly,
      initial_invert: false,
      final_invert: false,
    }
  }

  /// Start the register from the all-ones mask instead of zero.
  #[must_use]
  pub const fn with_initial_invert(mut self, invert: bool) -> Self {
    self.initial_invert = invert;
    self
  }

  /// XOR the final register value with the all-ones mask.
  #[must_use]
  pub const fn with_final_invert(mut self, invert: bool) -> Self {
    self.final_invert = invert;
    self
  }

  /// The model's polynomial descriptor.
  #[inline]
  #[must_use]
  pub const fn poly(&self) -> Poly {
    self.poly
  }

  /// Whether the register starts inverted.
  #[inline]
  #[must_use]
  pub const fn initial_invert(&self) -> bool {
    self.initial_invert
  }

  /// Whether the final value is inverted.
  #[inline]
  #[must_use]
  pub const fn final_invert(&self) -> bool {
    self.final_invert
  }

  /// The register value an instance starts from.
  #[inline]
  #[must_use]
  pub const fn initial(&self) -> u32 {
    if self.initial_invert {
      self.poly.mask()
    } else {
      0
    }
  }

  /// Create a running instance, building the byte table.
  ///
  /// # Errors
  ///
  /// [`CrcError::UnsupportedWidth`] if the polynomial's width has no
  /// byte-stream strategy.
  #[cfg(feature = "alloc")]
  pub fn instance(&self) -> Result<Instance, CrcError> {
    let strategy = Strategy::for_poly(self.poly)?;
    let table = Arc::new(Table::build(self.poly, TableOptions::new())?);
    Ok(Instance::from_parts(*self, strategy, table))
  }

  /// Create a running instance, sharing the byte table through `cache`.
  ///
  /// # Errors
  ///
  /// Same conditions as [`Model::instance`].
  #[cfg(feature = "std")]
  pub fn instance_with(&self, cache: &TableCache) -> Result<Instance, CrcError> {
    let strategy = Strategy::for_poly(self.poly)?;
    let table = cache.get_or_build(self.poly, TableOptions::new())?;
    Ok(Instance::from_parts(*self, strategy, table))
  }

  /// Compute the checksum of `data` in one shot.
  ///
  /// # Errors
  ///
  /// Same conditions as [`Model::instance`].
  #[cfg(feature = "alloc")]
  pub fn checksum(&self, data: &[u8]) -> Result<u32, CrcError> {
    let mut instance = self.instance()?;
    instance.update(data);
    Ok(instance.sum())
  }
}

/// A running checksum computation for one [`Model`].
#[cfg(feature = "alloc")]
#[derive(Clone, Debug)]
pub struct Instance {
  model: Model,
  strategy: Strategy,
  table: Arc<Table>,
  crc: u32,
}

#[cfg(feature = "alloc")]
impl Instance {
  fn from_parts(model: Model, strategy: Strategy, table: Arc<Table>) -> Self {
    Self {
      model,
      strategy,
      table,
      crc: model.initial(),
    }
  }

  /// Fold `data` into the running register.
  pub fn update(&mut self, data: &[u8]) {
    // The table is a byte table by construction (default build options).
    self.crc = self.strategy.update_entries(self.crc, self.table.entries(), data);
  }

  /// The checksum over everything fed so far.
  #[inline]
  #[must_use]
  pub fn sum(&self) -> u32 {
    if self.model.final_invert() {
      self.crc ^ self.model.poly().mask()
    } else {
      self.crc
    }
  }

  /// Restore the model's initial state.
  pub fn reset(&mut self) {
    self.crc = self.model.initial();
  }

  /// Append the canonical byte serialization of [`sum`](Instance::sum).
  pub fn append_sum(&self, out: &mut alloc::vec::Vec<u8>) {
    self.strategy.append(out, self.sum());
  }

  /// The model this instance runs.
  #[inline]
  #[must_use]
  pub const fn model(&self) -> Model {
    self.model
  }

  /// The byte-stream strategy in use.
  #[inline]
  #[must_use]
  pub const fn strategy(&self) -> Strategy {
    self.strategy
  }
}

#[cfg(feature = "alloc")]
impl Checksum for Instance {
  type Output = u32;

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Instance::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    self.sum()
  }

  #[inline]
  fn reset(&mut self) {
    Instance::reset(self);
  }
}
