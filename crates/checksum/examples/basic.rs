//! Basic CRC-32 usage: one-shot, streaming, and variant selection.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{Checksum, Crc32, Crc32Params, Crc32Variant};

fn main() {
  println!("=== CRC-32 Engine Examples ===\n");

  one_shot_examples();
  streaming_example();
  resume_example();
}

/// One-shot computation across the named variants.
fn one_shot_examples() {
  println!("--- Named Variants ---\n");

  let data = b"123456789";

  for variant in Crc32Variant::ALL {
    let mut hasher = Crc32::with_variant(variant);
    hasher.update(data);
    println!("{:<14} 0x{:08X}  ({})", variant.as_str(), hasher.finalize(), hasher.backend_name());
  }

  // Explicit parameters work too; this is CRC-32/MPEG-2 spelled out.
  let mut custom = Crc32::with_params(Crc32Params {
    polynomial: 0x04C1_1DB7,
    reflected: true,
    initial: 0xFFFF_FFFF,
    xor_out: 0x0000_0000,
  });
  custom.update(data);
  assert_eq!(custom.finalize(), 0x0376_E6E7);

  println!();
}

/// Streaming computation: process data in chunks.
fn streaming_example() {
  println!("--- Streaming ---\n");

  let data = b"123456789";
  let oneshot = Crc32::checksum(data);

  let mut hasher = Crc32::new();
  for chunk in data.chunks(3) {
    hasher.update(chunk);
  }
  assert_eq!(hasher.finalize(), oneshot);
  println!("streamed == one-shot: 0x{oneshot:08X}\n");
}

/// Resume from a saved register with `set_seed`.
fn resume_example() {
  println!("--- Resume ---\n");

  let params = Crc32Variant::Crc32c.params();
  let (head, tail) = b"123456789".split_at(5);

  let mut first = Crc32::with_variant(Crc32Variant::Crc32c);
  first.update(head);
  let saved = first.finalize() ^ params.xor_out;

  let mut resumed = Crc32::with_variant(Crc32Variant::Crc32c);
  resumed.set_seed(saved);
  resumed.update(tail);

  assert_eq!(resumed.finalize(), 0xE306_9283);
  println!("resumed checksum: 0x{:08X}", resumed.finalize());
}
