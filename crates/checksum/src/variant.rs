//! CRC-32 parameter sets.
//!
//! This module centralizes the constants for the ten supported standard
//! variants in a single exhaustive table ([`Crc32Variant::params`]), following
//! the conventions of the [CRC Catalogue](https://reveng.sourceforge.io/crc-catalogue/).

/// Parameters defining a CRC-32 computation.
///
/// # Bit-order convention
///
/// `reflected == true` selects the MSB-first update loop over the polynomial
/// as given; `reflected == false` selects the LSB-first loop over the
/// bit-reversed polynomial. The named variants encode the convention each
/// standard expects; check values in [`crate`] docs pin the mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Crc32Params {
  /// Generator polynomial (without implicit high bit).
  pub polynomial: u32,
  /// Process bytes MSB-first when true, LSB-first when false.
  pub reflected: bool,
  /// Initial value for the CRC register.
  pub initial: u32,
  /// XOR mask applied to the register to produce the visible checksum.
  pub xor_out: u32,
}

/// Named standard CRC-32 variants.
///
/// The set is closed: every tag maps to exactly one [`Crc32Params`], so an
/// unrecognized variant is unrepresentable rather than a runtime error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Crc32Variant {
  /// Standard CRC-32 (IEEE 802.3). Used in PNG, ZIP, Ethernet, and many
  /// other formats.
  #[default]
  Ieee,
  /// Variant used by bzip2 compression.
  Bzip2,
  /// JAMCRC, same as [`Ieee`](Self::Ieee) but without the final XOR.
  Jamcrc,
  /// Variant used in MPEG-2 streams.
  Mpeg2,
  /// Variant used by the POSIX `cksum` command.
  Posix,
  /// Variant used for Serial ATA storage devices.
  Sata,
  /// Variant used by XFER file transfer protocols.
  Xfer,
  /// CRC-32C (Castagnoli), widely used in iSCSI, SCTP, ext4, and Btrfs.
  ///
  /// Hardware-accelerated where the host provides a CRC-32C instruction
  /// (x86_64 SSE4.2, aarch64 CRC extension).
  Crc32c,
  /// CRC-32D, used in some disk and communication protocols.
  Crc32d,
  /// CRC-32Q, used in certain networking equipment (AIXM).
  Crc32q,
}

impl Crc32Variant {
  /// Every supported variant, in declaration order.
  pub const ALL: [Self; 10] = [
    Self::Ieee,
    Self::Bzip2,
    Self::Jamcrc,
    Self::Mpeg2,
    Self::Posix,
    Self::Sata,
    Self::Xfer,
    Self::Crc32c,
    Self::Crc32d,
    Self::Crc32q,
  ];

  /// The parameter set for this variant.
  #[inline]
  #[must_use]
  pub const fn params(self) -> Crc32Params {
    match self {
      Self::Ieee => Crc32Params {
        polynomial: 0x04C1_1DB7,
        reflected: false,
        initial: 0xFFFF_FFFF,
        xor_out: 0xFFFF_FFFF,
      },
      Self::Bzip2 => Crc32Params {
        polynomial: 0x04C1_1DB7,
        reflected: true,
        initial: 0xFFFF_FFFF,
        xor_out: 0xFFFF_FFFF,
      },
      Self::Jamcrc => Crc32Params {
        polynomial: 0x04C1_1DB7,
        reflected: false,
        initial: 0xFFFF_FFFF,
        xor_out: 0x0000_0000,
      },
      Self::Mpeg2 => Crc32Params {
        polynomial: 0x04C1_1DB7,
        reflected: true,
        initial: 0xFFFF_FFFF,
        xor_out: 0x0000_0000,
      },
      Self::Posix => Crc32Params {
        polynomial: 0x04C1_1DB7,
        reflected: true,
        initial: 0x0000_0000,
        xor_out: 0xFFFF_FFFF,
      },
      Self::Sata => Crc32Params {
        polynomial: 0x04C1_1DB7,
        reflected: true,
        initial: 0x5232_5032,
        xor_out: 0x0000_0000,
      },
      Self::Xfer => Crc32Params {
        polynomial: 0x0000_00AF,
        reflected: true,
        initial: 0x0000_0000,
        xor_out: 0x0000_0000,
      },
      Self::Crc32c => Crc32Params {
        polynomial: 0x1EDC_6F41,
        reflected: false,
        initial: 0xFFFF_FFFF,
        xor_out: 0xFFFF_FFFF,
      },
      Self::Crc32d => Crc32Params {
        polynomial: 0xA833_982B,
        reflected: false,
        initial: 0xFFFF_FFFF,
        xor_out: 0xFFFF_FFFF,
      },
      Self::Crc32q => Crc32Params {
        polynomial: 0x8141_41AB,
        reflected: true,
        initial: 0x0000_0000,
        xor_out: 0x0000_0000,
      },
    }
  }

  /// Human-readable variant name.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Ieee => "crc32",
      Self::Bzip2 => "crc32/bzip2",
      Self::Jamcrc => "crc32/jamcrc",
      Self::Mpeg2 => "crc32/mpeg2",
      Self::Posix => "crc32/posix",
      Self::Sata => "crc32/sata",
      Self::Xfer => "crc32/xfer",
      Self::Crc32c => "crc32c",
      Self::Crc32d => "crc32d",
      Self::Crc32q => "crc32q",
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_variant_is_ieee() {
    assert_eq!(Crc32Variant::default(), Crc32Variant::Ieee);
  }

  #[test]
  fn all_lists_every_variant_once() {
    for (i, a) in Crc32Variant::ALL.iter().enumerate() {
      for b in &Crc32Variant::ALL[i + 1..] {
        assert_ne!(a, b);
      }
    }
  }

  #[test]
  fn catalog_constants() {
    let expect = [
      (Crc32Variant::Ieee, 0x04C1_1DB7, false, 0xFFFF_FFFF, 0xFFFF_FFFFu32),
      (Crc32Variant::Bzip2, 0x04C1_1DB7, true, 0xFFFF_FFFF, 0xFFFF_FFFF),
      (Crc32Variant::Jamcrc, 0x04C1_1DB7, false, 0xFFFF_FFFF, 0x0000_0000),
      (Crc32Variant::Mpeg2, 0x04C1_1DB7, true, 0xFFFF_FFFF, 0x0000_0000),
      (Crc32Variant::Posix, 0x04C1_1DB7, true, 0x0000_0000, 0xFFFF_FFFF),
      (Crc32Variant::Sata, 0x04C1_1DB7, true, 0x5232_5032, 0x0000_0000),
      (Crc32Variant::Xfer, 0x0000_00AF, true, 0x0000_0000, 0x0000_0000),
      (Crc32Variant::Crc32c, 0x1EDC_6F41, false, 0xFFFF_FFFF, 0xFFFF_FFFF),
      (Crc32Variant::Crc32d, 0xA833_982B, false, 0xFFFF_FFFF, 0xFFFF_FFFF),
      (Crc32Variant::Crc32q, 0x8141_41AB, true, 0x0000_0000, 0x0000_0000),
    ];

    for (variant, polynomial, reflected, initial, xor_out) in expect {
      let params = variant.params();
      assert_eq!(params.polynomial, polynomial, "{}", variant.as_str());
      assert_eq!(params.reflected, reflected, "{}", variant.as_str());
      assert_eq!(params.initial, initial, "{}", variant.as_str());
      assert_eq!(params.xor_out, xor_out, "{}", variant.as_str());
    }
  }
}
