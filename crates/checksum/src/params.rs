//! CRC algorithm parameters.
//!
//! A CRC algorithm over a w-bit register is fully described by five values:
//! the generator polynomial, the initial remainder, two reflection flags, and
//! the final XOR. [`CrcParams`] captures them for any supported register
//! width; every field combination is valid.
//!
//! # The initial-remainder convention
//!
//! This crate uses the augmented-message model: the register holds
//! `initial_remainder` *before* any bit is clocked, and the message is
//! followed by w zero bits. Algorithm catalogues instead quote the register
//! value with the zero tail already absorbed. The two views coincide whenever
//! the initial remainder is zero; otherwise the catalogue ("direct") value is
//! this crate's value advanced through w zero bits. For example,
//! CRC-16/AUG-CCITT is `initial_remainder: 0xFFFF` here, while catalogues
//! list 0x1D0F, which is exactly 0xFFFF clocked through sixteen zero bits.
//!
//! Presets below are the catalogue algorithms expressible in this convention:
//! every zero-init entry, plus CRC-16/AUG-CCITT.

use traits::Register;

/// Parameters describing one CRC algorithm over register type `R`.
///
/// | Field | Meaning |
/// |-------|---------|
/// | `polynomial` | Generator polynomial, non-reflected form, implicit top bit not stored |
/// | `initial_remainder` | Register value before the first bit is clocked |
/// | `input_is_reflected` | Bit-reverse each input octet before processing |
/// | `output_is_reflected` | Bit-reverse the final remainder before the XOR |
/// | `xor_output` | XORed into the (possibly reflected) remainder |
///
/// The record is plain data: construct it literally, copy it freely. No
/// combination of field values is rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CrcParams<R: Register> {
  /// Generator polynomial (without implicit high bit).
  pub polynomial: R,
  /// Register value loaded before the first input bit.
  pub initial_remainder: R,
  /// Reflect input octets before processing.
  pub input_is_reflected: bool,
  /// Reflect the final remainder before XOR.
  pub output_is_reflected: bool,
  /// XOR value applied to the final remainder.
  pub xor_output: R,
}

impl<R: Register> CrcParams<R> {
  /// Apply input reflection to one octet.
  #[inline]
  #[must_use]
  pub fn process_octet(&self, octet: u8) -> u8 {
    if self.input_is_reflected { octet.reverse_bits() } else { octet }
  }

  /// Apply output reflection and the final XOR to a remainder.
  #[inline]
  #[must_use]
  pub fn finish(&self, remainder: R) -> R {
    let remainder = if self.output_is_reflected {
      remainder.reflected()
    } else {
      remainder
    };
    remainder ^ self.xor_output
  }
}

impl CrcParams<u8> {
  /// CRC-8/SMBUS - SMBus Packet Error Code
  ///
  /// Check value: 0xF4.
  pub const SMBUS: Self = Self {
    polynomial: 0x07,
    initial_remainder: 0x00,
    input_is_reflected: false,
    output_is_reflected: false,
    xor_output: 0x00,
  };

  /// CRC-8/MAXIM-DOW - 1-Wire, iButton, sensor networks
  ///
  /// Check value: 0xA1.
  pub const MAXIM_DOW: Self = Self {
    polynomial: 0x31,
    initial_remainder: 0x00,
    input_is_reflected: true,
    output_is_reflected: true,
    xor_output: 0x00,
  };
}

impl CrcParams<u16> {
  /// CRC-16/XMODEM - XMODEM, ZMODEM, Acorn, LHA
  ///
  /// Check value: 0x31C3.
  pub const XMODEM: Self = Self {
    polynomial: 0x1021,
    initial_remainder: 0x0000,
    input_is_reflected: false,
    output_is_reflected: false,
    xor_output: 0x0000,
  };

  /// CRC-16/AUG-CCITT (SPI-FUJITSU)
  ///
  /// The one catalogue algorithm defined by an augmented register preload:
  /// catalogues quote init 0x1D0F, which is 0xFFFF advanced through the
  /// 16-bit zero tail. Check value: 0xE5CC.
  pub const AUG_CCITT: Self = Self {
    polynomial: 0x1021,
    initial_remainder: 0xFFFF,
    input_is_reflected: false,
    output_is_reflected: false,
    xor_output: 0x0000,
  };

  /// CRC-16/ARC - Modbus-era legacy protocols, ARC archiver
  ///
  /// Check value: 0xBB3D.
  pub const ARC: Self = Self {
    polynomial: 0x8005,
    initial_remainder: 0x0000,
    input_is_reflected: true,
    output_is_reflected: true,
    xor_output: 0x0000,
  };

  /// CRC-16/UMTS - 3GPP TS 25.427
  ///
  /// Check value: 0xFEE8.
  pub const UMTS: Self = Self {
    polynomial: 0x8005,
    initial_remainder: 0x0000,
    input_is_reflected: false,
    output_is_reflected: false,
    xor_output: 0x0000,
  };
}

impl CrcParams<u32> {
  /// CRC-32/CKSUM - POSIX cksum (without the length suffix the utility appends)
  ///
  /// Check value: 0x765E7680.
  pub const CKSUM: Self = Self {
    polynomial: 0x04C1_1DB7,
    initial_remainder: 0x0000_0000,
    input_is_reflected: false,
    output_is_reflected: false,
    xor_output: 0xFFFF_FFFF,
  };
}
