//! Non-cryptographic checksum trait.
//!
//! The core interface for checksum computation with support for incremental
//! updates, streaming data, and digest serialization.

use core::fmt::Debug;

/// Non-cryptographic checksum algorithm.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Checksum, Crc32};
///
/// // One-shot (fastest for data already in memory)
/// let crc = Crc32::checksum(b"hello world");
///
/// // Streaming (for incremental or large data)
/// let mut hasher = Crc32::new();
/// hasher.update(b"hello ");
/// hasher.update(b"world");
/// let crc = hasher.finalize();
/// ```
///
/// # Implementor Requirements
///
/// - `new()` must return the same state as `Default::default()`
/// - `finalize()` must be idempotent and must not mutate the hasher
/// - `update()` called on successive chunks must be equivalent to a single
///   call on their concatenation
/// - `reset()` must restore the hasher to its initial state
pub trait Checksum: Clone + Default {
  /// Output size in bytes.
  ///
  /// 4 for CRC-32.
  const OUTPUT_SIZE: usize;

  /// The checksum output type.
  ///
  /// Typically `u32` for CRC-32.
  type Output: Copy + Eq + Debug;

  /// The serialized digest form.
  ///
  /// Typically `[u8; 4]` for CRC-32.
  type Bytes: AsRef<[u8]>;

  /// Create a new hasher with the default configuration.
  #[must_use]
  fn new() -> Self;

  /// Update the hasher with additional data.
  ///
  /// This method can be called multiple times to process data incrementally.
  fn update(&mut self, data: &[u8]);

  /// Finalize and return the checksum.
  ///
  /// This method does not consume the hasher, allowing further updates
  /// if needed (though the result would include all data processed so far).
  #[must_use]
  fn finalize(&self) -> Self::Output;

  /// Serialize the current checksum as [`OUTPUT_SIZE`](Self::OUTPUT_SIZE)
  /// little-endian bytes.
  #[must_use]
  fn to_bytes(&self) -> Self::Bytes;

  /// Write the serialized checksum into the front of `dest`.
  ///
  /// # Panics
  ///
  /// Panics if `dest` is shorter than [`OUTPUT_SIZE`](Self::OUTPUT_SIZE).
  fn write_to(&self, dest: &mut [u8]);

  /// Reset the hasher to its initial state.
  ///
  /// After calling this, the hasher behaves as if newly constructed.
  fn reset(&mut self);

  /// Compute the checksum of data in one shot.
  ///
  /// This is the fastest path for small to medium data that fits in memory.
  /// For large data or streaming, use [`new`](Self::new) + [`update`](Self::update).
  #[inline]
  #[must_use]
  fn checksum(data: &[u8]) -> Self::Output {
    let mut h = Self::new();
    h.update(data);
    h.finalize()
  }
}
