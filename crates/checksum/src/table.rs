//! Lookup-table generation and the process-wide table cache.
//!
//! Tables are derived deterministically from a `(polynomial, reflected)` key;
//! two tables with the same key are always bit-identical. The cache generates
//! a table on the first request for a key and hands out shared references
//! thereafter, so every engine with the same configuration reuses one table.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

/// A 256-entry CRC-32 lookup table for byte-at-a-time updates.
pub type LookupTable = [u32; 256];

/// Generate the lookup table for a `(polynomial, reflected)` key.
///
/// Pure and side-effect-free. The LSB-first path divides by the bit-reversed
/// polynomial; the reversal is a local pass-by-value transformation and the
/// caller's value is left untouched.
#[must_use]
pub(crate) fn generate_table(polynomial: u32, reflected: bool) -> LookupTable {
  let mut table = [0u32; 256];

  if reflected {
    // MSB-first: seed each entry with the index in the top byte.
    for (i, slot) in table.iter_mut().enumerate() {
      let mut entry = (i as u32) << 24;
      for _ in 0..8 {
        entry = if entry & 0x8000_0000 != 0 {
          (entry << 1) ^ polynomial
        } else {
          entry << 1
        };
      }
      *slot = entry;
    }
  } else {
    // LSB-first: divide by the bit-reversed polynomial.
    let polynomial = polynomial.reverse_bits();
    for (i, slot) in table.iter_mut().enumerate() {
      let mut entry = i as u32;
      for _ in 0..8 {
        entry = if entry & 1 != 0 { (entry >> 1) ^ polynomial } else { entry >> 1 };
      }
      *slot = entry;
    }
  }

  table
}

/// Memoized store of CRC-32 lookup tables keyed by `(polynomial, reflected)`.
///
/// A coarse lock serializes first-time generation, so concurrent requests for
/// a never-seen key produce exactly one table. Entries are never evicted and
/// are shared read-only via [`Arc`], outliving any single engine that uses
/// them.
///
/// Most callers go through [`TableCache::global`]; an explicit cache is useful
/// in tests and in embedders that want to bound table lifetime to their own
/// scope.
#[derive(Default)]
pub struct TableCache {
  tables: Mutex<HashMap<(u32, bool), Arc<LookupTable>>>,
}

impl TableCache {
  /// Create an empty cache.
  #[must_use]
  pub fn new() -> Self {
    Self { tables: Mutex::new(HashMap::new()) }
  }

  /// The lazily-initialized process-wide cache.
  ///
  /// Entries live for the remainder of the process once created.
  #[must_use]
  pub fn global() -> &'static TableCache {
    static GLOBAL: OnceLock<TableCache> = OnceLock::new();
    GLOBAL.get_or_init(TableCache::new)
  }

  /// Return the table for `(polynomial, reflected)`, generating it on first
  /// use.
  ///
  /// Every caller for a given key receives a handle to the same table.
  #[must_use]
  pub fn get_or_create(&self, polynomial: u32, reflected: bool) -> Arc<LookupTable> {
    let mut tables = match self.tables.lock() {
      Ok(guard) => guard,
      // Table generation cannot panic; a poisoned map still holds only
      // fully-generated tables, so keep using it.
      Err(poisoned) => poisoned.into_inner(),
    };

    Arc::clone(
      tables
        .entry((polynomial, reflected))
        .or_insert_with(|| Arc::new(generate_table(polynomial, reflected))),
    )
  }

  /// Number of distinct keys generated so far.
  #[must_use]
  pub fn len(&self) -> usize {
    match self.tables.lock() {
      Ok(guard) => guard.len(),
      Err(poisoned) => poisoned.into_inner().len(),
    }
  }

  /// Whether no table has been generated yet.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}
