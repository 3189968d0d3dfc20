//! Property tests for the CRC-32 engine.

use proptest::prelude::*;

use super::*;

fn variants() -> impl Strategy<Value = Crc32Variant> {
  prop::sample::select(Crc32Variant::ALL.to_vec())
}

proptest! {
  #[test]
  fn chunking_equivalence(
    variant in variants(),
    data in prop::collection::vec(any::<u8>(), 0..=2048),
    chunk in 1usize..=257,
  ) {
    let mut oneshot = Crc32::with_variant(variant);
    oneshot.update(&data);

    let mut chunked = Crc32::with_variant(variant);
    for part in data.chunks(chunk) {
      chunked.update(part);
    }

    prop_assert_eq!(chunked.finalize(), oneshot.finalize());
  }

  #[test]
  fn reset_equals_fresh_engine(
    variant in variants(),
    prefix in prop::collection::vec(any::<u8>(), 0..=512),
    tail in prop::collection::vec(any::<u8>(), 0..=512),
  ) {
    let mut reused = Crc32::with_variant(variant);
    reused.update(&prefix);
    reused.reset();
    reused.update(&tail);

    let mut fresh = Crc32::with_variant(variant);
    fresh.update(&tail);

    prop_assert_eq!(reused.finalize(), fresh.finalize());
  }

  #[test]
  fn set_seed_equals_custom_initial(
    variant in variants(),
    seed in any::<u32>(),
    data in prop::collection::vec(any::<u8>(), 0..=512),
  ) {
    let mut seeded = Crc32::with_variant(variant);
    seeded.set_seed(seed);
    seeded.update(&data);

    let mut params = variant.params();
    params.initial = seed;
    let mut custom = Crc32::with_params(params);
    custom.update(&data);

    prop_assert_eq!(seeded.finalize(), custom.finalize());
  }

  #[test]
  fn digest_serialization_round_trip(
    variant in variants(),
    data in prop::collection::vec(any::<u8>(), 0..=512),
  ) {
    let mut hasher = Crc32::with_variant(variant);
    hasher.update(&data);

    let value = hasher.finalize();
    prop_assert_eq!(hasher.to_bytes(), value.to_le_bytes());

    let mut buf = [0u8; 4];
    hasher.write_to(&mut buf);
    prop_assert_eq!(buf, value.to_le_bytes());
  }

  #[cfg(any(target_arch = "x86_64", target_arch = "aarch64"))]
  #[test]
  fn hardware_and_table_paths_agree(
    data in prop::collection::vec(any::<u8>(), 0..=4096),
  ) {
    let params = Crc32Variant::Crc32c.params();

    let mut auto = Crc32::with_params(params);
    auto.update(&data);

    let cache = TableCache::new();
    let mut table = Crc32::table_driven_in(&cache, params);
    table.update(&data);

    // Vacuous on hosts without the instruction (both engines are then
    // table-driven), meaningful everywhere else.
    prop_assert_eq!(auto.finalize(), table.finalize());
  }
}
