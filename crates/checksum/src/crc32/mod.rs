//! The configurable CRC-32 engine.
//!
//! [`Crc32`] is an incremental checksum computer over an arbitrary
//! [`Crc32Params`]. On construction it resolves a computation strategy once:
//! a shared lookup table from the [`TableCache`], or the dedicated CRC-32C
//! CPU instruction when the configuration and host allow it. After that the
//! engine can be fed, read, reset, and reseeded indefinitely in any order.

#[cfg(target_arch = "aarch64")]
mod aarch64;
#[cfg(test)]
mod proptests;
#[cfg(target_arch = "x86_64")]
mod x86_64;

use std::sync::Arc;

use traits::Checksum;

use crate::table::{LookupTable, TableCache};
use crate::variant::{Crc32Params, Crc32Variant};

/// Per-instance computation strategy, resolved at construction.
#[derive(Clone)]
enum Backend {
  /// MSB-first table lookups (`reflected == true`).
  TableMsb(Arc<LookupTable>),
  /// LSB-first table lookups (`reflected == false`).
  TableLsb(Arc<LookupTable>),
  /// Dedicated CRC-32C instruction; bit-identical to `TableLsb` for the
  /// CRC-32C polynomial.
  #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
  HwCrc32c,
}

/// Whether the host CPU provides a usable CRC-32C instruction.
///
/// Detection happens at runtime, once; the standard library caches the
/// feature probe.
#[cfg(target_arch = "x86_64")]
#[inline]
fn crc32c_hw_supported() -> bool {
  std::arch::is_x86_feature_detected!("sse4.2")
}

#[cfg(target_arch = "aarch64")]
#[inline]
fn crc32c_hw_supported() -> bool {
  std::arch::is_aarch64_feature_detected!("crc")
}

/// Hardware eligibility: the polynomial and bit-order must match CRC-32C
/// exactly. Initial value and XOR mask are applied outside the kernel, so
/// they do not affect eligibility.
#[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
fn hw_eligible(params: Crc32Params) -> bool {
  let crc32c = Crc32Variant::Crc32c.params();
  params.polynomial == crc32c.polynomial
    && params.reflected == crc32c.reflected
    && crc32c_hw_supported()
}

/// MSB-first table-driven update.
#[inline]
#[allow(clippy::indexing_slicing)] // index is masked to 0..=255, table is [u32; 256]
fn update_msb(mut state: u32, data: &[u8], table: &LookupTable) -> u32 {
  for &b in data {
    let index = (((state >> 24) ^ u32::from(b)) & 0xFF) as usize;
    state = (state << 8) ^ table[index];
  }
  state
}

/// LSB-first table-driven update.
#[inline]
#[allow(clippy::indexing_slicing)] // index is masked to 0..=255, table is [u32; 256]
fn update_lsb(mut state: u32, data: &[u8], table: &LookupTable) -> u32 {
  for &b in data {
    let index = ((state ^ u32::from(b)) & 0xFF) as usize;
    state = (state >> 8) ^ table[index];
  }
  state
}

/// Incremental CRC-32 engine.
///
/// The externally visible checksum is always `state ^ xor_out`; the raw
/// register is exposed only through [`set_seed`](Self::set_seed), which
/// overwrites it for resumption.
///
/// A single instance is not safe for concurrent mutation, but independent
/// instances may run fully in parallel even when they share a cached table.
///
/// # Example
///
/// ```rust
/// use checksum::{Checksum, Crc32, Crc32Variant};
///
/// let mut hasher = Crc32::with_variant(Crc32Variant::Crc32c);
/// hasher.update(b"123456789");
/// assert_eq!(hasher.finalize(), 0xE306_9283);
/// ```
#[derive(Clone)]
pub struct Crc32 {
  state: u32,
  params: Crc32Params,
  backend: Backend,
}

impl Crc32 {
  /// Create an engine with the default (IEEE) parameters.
  #[must_use]
  pub fn new() -> Self {
    Self::with_variant(Crc32Variant::Ieee)
  }

  /// Create an engine for a named standard variant.
  #[must_use]
  pub fn with_variant(variant: Crc32Variant) -> Self {
    Self::with_params(variant.params())
  }

  /// Create an engine with explicit parameters, using the process-wide
  /// table cache.
  #[must_use]
  pub fn with_params(params: Crc32Params) -> Self {
    Self::with_params_in(TableCache::global(), params)
  }

  /// Create an engine with explicit parameters, resolving any lookup table
  /// from the given cache.
  #[must_use]
  pub fn with_params_in(cache: &TableCache, params: Crc32Params) -> Self {
    #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
    if hw_eligible(params) {
      return Self { state: params.initial, params, backend: Backend::HwCrc32c };
    }

    Self::table_driven_in(cache, params)
  }

  /// Table-backed construction, bypassing hardware eligibility.
  ///
  /// Used by the differential tests to compare the two strategies.
  fn table_driven_in(cache: &TableCache, params: Crc32Params) -> Self {
    let table = cache.get_or_create(params.polynomial, params.reflected);
    let backend =
      if params.reflected { Backend::TableMsb(table) } else { Backend::TableLsb(table) };
    Self { state: params.initial, params, backend }
  }

  /// The parameters this engine was constructed with.
  #[must_use]
  pub fn params(&self) -> Crc32Params {
    self.params
  }

  /// Name of the computation strategy selected at construction.
  #[must_use]
  pub fn backend_name(&self) -> &'static str {
    match &self.backend {
      Backend::TableMsb(_) => "table/msb",
      Backend::TableLsb(_) => "table/lsb",
      #[cfg(target_arch = "x86_64")]
      Backend::HwCrc32c => "x86_64/sse42",
      #[cfg(target_arch = "aarch64")]
      Backend::HwCrc32c => "aarch64/crc",
    }
  }

  /// Update the running checksum over `data`.
  ///
  /// Successive calls over chunks are equivalent to one call over their
  /// concatenation.
  #[inline]
  pub fn update(&mut self, data: &[u8]) {
    self.state = match &self.backend {
      Backend::TableMsb(table) => update_msb(self.state, data, table),
      Backend::TableLsb(table) => update_lsb(self.state, data, table),
      #[cfg(target_arch = "x86_64")]
      Backend::HwCrc32c => x86_64::crc32c_sse42_safe(self.state, data),
      #[cfg(target_arch = "aarch64")]
      Backend::HwCrc32c => aarch64::crc32c_armv8_safe(self.state, data),
    };
  }

  /// The checksum over everything processed so far: `state ^ xor_out`.
  ///
  /// Reading never mutates the engine.
  #[inline]
  #[must_use]
  pub fn finalize(&self) -> u32 {
    self.state ^ self.params.xor_out
  }

  /// The checksum as 4 little-endian bytes.
  #[inline]
  #[must_use]
  pub fn to_bytes(&self) -> [u8; 4] {
    self.finalize().to_le_bytes()
  }

  /// Write the checksum bytes into the front of `dest`.
  ///
  /// # Panics
  ///
  /// Panics if `dest` is shorter than 4 bytes.
  #[inline]
  pub fn write_to(&self, dest: &mut [u8]) {
    #[allow(clippy::indexing_slicing)] // caller contract: dest holds at least 4 bytes
    dest[..4].copy_from_slice(&self.to_bytes());
  }

  /// Return the register to the configured initial value.
  #[inline]
  pub fn reset(&mut self) {
    self.state = self.params.initial;
  }

  /// Overwrite the raw register with `seed`.
  ///
  /// Enables resumption from a previously saved raw state; note that the
  /// seed is the register value, not the XOR-masked checksum.
  #[inline]
  pub fn set_seed(&mut self, seed: u32) {
    self.state = seed;
  }
}

impl Default for Crc32 {
  fn default() -> Self {
    Self::new()
  }
}

impl core::fmt::Debug for Crc32 {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("Crc32")
      .field("params", &self.params)
      .field("backend", &self.backend_name())
      .field("value", &self.finalize())
      .finish()
  }
}

impl Checksum for Crc32 {
  const OUTPUT_SIZE: usize = 4;
  type Output = u32;
  type Bytes = [u8; 4];

  #[inline]
  fn new() -> Self {
    Crc32::new()
  }

  #[inline]
  fn update(&mut self, data: &[u8]) {
    Crc32::update(self, data);
  }

  #[inline]
  fn finalize(&self) -> u32 {
    Crc32::finalize(self)
  }

  #[inline]
  fn to_bytes(&self) -> [u8; 4] {
    Crc32::to_bytes(self)
  }

  #[inline]
  fn write_to(&self, dest: &mut [u8]) {
    Crc32::write_to(self, dest);
  }

  #[inline]
  fn reset(&mut self) {
    Crc32::reset(self);
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
