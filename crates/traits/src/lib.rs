//! Capability contracts for checksum implementations.
//!
//! This crate defines the minimal interface every checksum in the workspace
//! conforms to. It is `no_std` compatible and has zero dependencies, so it can
//! sit underneath any implementation crate without pulling in a stack.
//!
//! | Trait | Purpose | Examples |
//! |-------|---------|----------|
//! | [`Checksum`] | Non-cryptographic checksums | CRC-32 and its variants |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to
//! ensure all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod checksum;

pub use checksum::Checksum;
