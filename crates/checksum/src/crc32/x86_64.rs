//! x86_64 hardware CRC-32C kernel (SSE4.2 `crc32` instruction).
//!
//! # Safety
//!
//! Uses `unsafe` for x86 SIMD intrinsics. Callers must ensure SSE4.2 is
//! available before executing the accelerated path (construction does this).
#![allow(unsafe_code)]
#![allow(unsafe_op_in_unsafe_fn)]

use core::arch::x86_64::{_mm_crc32_u32, _mm_crc32_u8};

/// CRC-32C update using the SSE4.2 `crc32` instruction.
///
/// `state` is the current register (pre-inverted). Whole 4-byte words go
/// through the word form of the instruction, the tail through the byte form;
/// the result is bit-identical to the LSB-first table path.
#[inline]
#[target_feature(enable = "sse4.2")]
unsafe fn crc32c_sse42(mut state: u32, data: &[u8]) -> u32 {
  let (words, tail) = data.as_chunks::<4>();

  for word in words {
    state = _mm_crc32_u32(state, u32::from_le_bytes(*word));
  }

  for &b in tail {
    state = _mm_crc32_u8(state, b);
  }

  state
}

/// Safe wrapper for the CRC-32C SSE4.2 kernel.
#[inline]
pub fn crc32c_sse42_safe(state: u32, data: &[u8]) -> u32 {
  // SAFETY: Construction verifies SSE4.2 before selecting this kernel.
  unsafe { crc32c_sse42(state, data) }
}
