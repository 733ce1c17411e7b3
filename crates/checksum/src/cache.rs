//! Process-wide memoization of built lookup tables.
//!
//! Tables are pure functions of `(polynomial, build options)`, so building
//! one twice wastes work but never changes a result. The cache is therefore
//! a performance layer only: an explicit, injectable object rather than a
//! hidden global, which keeps tests isolated from shared process state.
//!
//! Locking: lookups take the shared lock; a miss builds the table with no
//! lock held, then publishes under a short exclusive section. Two racing
//! first-requests may both build; the first insert wins and the duplicate is
//! discarded, which is benign.

use std::{
  collections::HashMap,
  sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use alloc::sync::Arc;

use crate::{
  error::CrcError,
  poly::Poly,
  table::{Table, TableOptions},
};

/// Canonical identity of a built table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct TableKey {
  word: u32,
  width: u8,
  reversed: bool,
  reciprocal: bool,
  initial: u32,
  data_width: u8,
  reverse_bits: bool,
}

impl TableKey {
  fn new(poly: Poly, opts: TableOptions) -> Self {
    Self {
      word: poly.word(),
      width: poly.width(),
      reversed: poly.is_reversed(),
      reciprocal: poly.is_reciprocal(),
      initial: opts.initial(),
      data_width: opts.data_width(),
      reverse_bits: opts.reverses_bits(),
    }
  }
}

/// Shared store of built lookup tables.
///
/// Entries are never evicted or mutated; a published table is shared by
/// `Arc` across all consumers for the cache's lifetime.
///
/// # Example
///
/// ```
/// use checksum::{catalog, TableCache, TableOptions};
///
/// let cache = TableCache::new();
/// let poly = catalog::IBM16.reversed_form();
/// let first = cache.get_or_build(poly, TableOptions::new()).unwrap();
/// let second = cache.get_or_build(poly, TableOptions::new()).unwrap();
/// assert!(std::sync::Arc::ptr_eq(&first, &second));
/// ```
#[derive(Debug, Default)]
pub struct TableCache {
  tables: RwLock<HashMap<TableKey, Arc<Table>>>,
}

impl TableCache {
  /// Create an empty cache.
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  /// Return the table for `(poly, opts)`, building and publishing it on the
  /// first request.
  ///
  /// # Errors
  ///
  /// Propagates [`Table::build`] errors; nothing is published on failure.
  pub fn get_or_build(&self, poly: Poly, opts: TableOptions) -> Result<Arc<Table>, CrcError> {
    let key = TableKey::new(poly, opts);

    if let Some(table) = self.read().get(&key) {
      return Ok(Arc::clone(table));
    }

    // Build without holding any lock; a racing builder is harmless.
    let built = Arc::new(Table::build(poly, opts)?);

    let mut tables = self.write();
    Ok(Arc::clone(tables.entry(key).or_insert(built)))
  }

  /// Number of distinct tables published so far.
  #[must_use]
  pub fn len(&self) -> usize {
    self.read().len()
  }

  /// Whether no table has been published yet.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.read().is_empty()
  }

  // Cached data is pure, so a lock poisoned by a panicking reader or writer
  // is still consistent; recover the guard.
  fn read(&self) -> RwLockReadGuard<'_, HashMap<TableKey, Arc<Table>>> {
    self.tables.read().unwrap_or_else(PoisonError::into_inner)
  }

  fn write(&self) -> RwLockWriteGuard<'_, HashMap<TableKey, Arc<Table>>> {
    self.tables.write().unwrap_or_else(PoisonError::into_inner)
  }
}
