//! aarch64 hardware CRC-32C kernel (CRC32 extension).
//!
//! # Safety
//!
//! Uses `unsafe` for the CRC extension intrinsics. Callers must ensure the
//! CRC extension is available before executing the accelerated path
//! (construction does this).
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::aarch64::{__crc32cb, __crc32cw};

/// CRC-32C update using the ARMv8 CRC extension.
///
/// `state` is the current register (pre-inverted). Whole 4-byte words go
/// through `crc32cw`, the tail through `crc32cb`; the result is bit-identical
/// to the LSB-first table path.
#[inline]
#[target_feature(enable = "crc")]
unsafe fn crc32c_armv8(mut state: u32, data: &[u8]) -> u32 {
  let (words, tail) = data.as_chunks::<4>();

  for word in words {
    state = __crc32cw(state, u32::from_le_bytes(*word));
  }

  for &b in tail {
    state = __crc32cb(state, b);
  }

  state
}

/// Safe wrapper for the CRC-32C ARMv8 kernel.
#[inline]
pub fn crc32c_armv8_safe(state: u32, data: &[u8]) -> u32 {
  // SAFETY: Construction verifies the CRC extension before selecting this
  // kernel.
  unsafe { crc32c_armv8(state, data) }
}
