//! The CRC shift-register abstraction.
//!
//! CRC calculators are generic over the unsigned integer holding the running
//! remainder. [`Register`] captures the handful of operations the shift-register
//! iteration needs for the three supported widths: MSB-first shifts with
//! bit/nibble/octet insertion, top-slice extraction, and full-width reflection.
//!
//! The trait is sealed: the CRC model is only defined for exact 8-, 16-, and
//! 32-bit registers, and the implementations rely on the type width matching
//! the CRC width.

use core::fmt::{Debug, LowerHex, UpperHex};
use core::ops::{BitXor, BitXorAssign};

mod sealed {
  pub trait Sealed {}
}

/// An unsigned integer of one of the supported CRC widths.
///
/// All shifts are performed modulo `2^WIDTH`: bits pushed past the top of the
/// register are discarded. Insertion variants OR the new bits into the freshly
/// vacated low positions.
///
/// # Semantics
///
/// - [`shift_bit`](Self::shift_bit): `(r << 1) | bit`
/// - [`shift_nibble`](Self::shift_nibble): `(r << 4) | nibble`
/// - [`shift_octet`](Self::shift_octet): `(r << 8) | octet`; for the 8-bit
///   register this discards the entire previous state and yields the octet
///   itself, since an 8-position shift empties an 8-bit register.
pub trait Register:
  Copy + Eq + Debug + Default + LowerHex + UpperHex + BitXor<Output = Self> + BitXorAssign + sealed::Sealed + 'static
{
  /// Register width w in bits.
  const WIDTH: u32;
  /// Number of octets in the register (w/8).
  const OCTETS: u32;
  /// Number of nibbles in the register (w/4).
  const NIBBLES: u32;
  /// The zero register.
  const ZERO: Self;
  /// The all-ones register.
  const MAX: Self;
  /// Bit (w−1) set, all others clear.
  const TOP_BIT: Self;

  /// Place an octet in the top 8 bits of an otherwise-zero register.
  #[must_use]
  fn octet_at_top(octet: u8) -> Self;

  /// Place the low 4 bits of `nibble` in the top 4 bits of an otherwise-zero
  /// register.
  #[must_use]
  fn nibble_at_top(nibble: u8) -> Self;

  /// Whether bit (w−1) is set.
  #[must_use]
  fn top_bit_set(self) -> bool;

  /// The top 8 bits of the register.
  #[must_use]
  fn top_octet(self) -> u8;

  /// The top 4 bits of the register, in the low nibble of the result.
  #[must_use]
  fn top_nibble(self) -> u8;

  /// Shift left by one, inserting `bit` at the bottom.
  #[must_use]
  fn shift_bit(self, bit: bool) -> Self;

  /// Shift left by four, inserting the low 4 bits of `nibble` at the bottom.
  #[must_use]
  fn shift_nibble(self, nibble: u8) -> Self;

  /// Shift left by eight, inserting `octet` at the bottom.
  #[must_use]
  fn shift_octet(self, octet: u8) -> Self;

  /// Reverse the bit order of the full register.
  #[must_use]
  fn reflected(self) -> Self;
}

macro_rules! impl_register {
  ($ty:ty, $width:expr, |$state:ident, $octet:ident| $shift_octet:expr) => {
    impl sealed::Sealed for $ty {}

    impl Register for $ty {
      const WIDTH: u32 = $width;
      const OCTETS: u32 = $width / 8;
      const NIBBLES: u32 = $width / 4;
      const ZERO: Self = 0;
      const MAX: Self = !0;
      const TOP_BIT: Self = 1 << ($width - 1);

      #[inline]
      fn octet_at_top(octet: u8) -> Self {
        (octet as $ty) << ($width - 8)
      }

      #[inline]
      fn nibble_at_top(nibble: u8) -> Self {
        ((nibble & 0x0F) as $ty) << ($width - 4)
      }

      #[inline]
      fn top_bit_set(self) -> bool {
        self & Self::TOP_BIT != 0
      }

      #[inline]
      fn top_octet(self) -> u8 {
        (self >> ($width - 8)) as u8
      }

      #[inline]
      fn top_nibble(self) -> u8 {
        (self >> ($width - 4)) as u8
      }

      #[inline]
      fn shift_bit(self, bit: bool) -> Self {
        (self << 1) | (bit as $ty)
      }

      #[inline]
      fn shift_nibble(self, nibble: u8) -> Self {
        (self << 4) | ((nibble & 0x0F) as $ty)
      }

      #[inline]
      fn shift_octet(self, octet: u8) -> Self {
        let $state = self;
        let $octet = octet;
        $shift_octet
      }

      #[inline]
      fn reflected(self) -> Self {
        self.reverse_bits()
      }
    }
  };
}

// An 8-position shift empties the 8-bit register; `r << 8` on u8 would be a
// shift overflow, so the insertion result is the octet alone.
impl_register!(u8, 8, |_state, octet| octet);
impl_register!(u16, 16, |state, octet| (state << 8) | octet as u16);
impl_register!(u32, 32, |state, octet| (state << 8) | octet as u32);

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn width_constants() {
    assert_eq!(u8::WIDTH, 8);
    assert_eq!(u16::OCTETS, 2);
    assert_eq!(u32::NIBBLES, 8);
    assert_eq!(u8::TOP_BIT, 0x80);
    assert_eq!(u16::TOP_BIT, 0x8000);
    assert_eq!(u32::TOP_BIT, 0x8000_0000);
    assert_eq!(u16::MAX, 0xFFFF);
  }

  #[test]
  fn top_slices() {
    assert_eq!(0xABCD_u16.top_octet(), 0xAB);
    assert_eq!(0xABCD_u16.top_nibble(), 0x0A);
    assert_eq!(0x12345678_u32.top_octet(), 0x12);
    assert_eq!(0xF0_u8.top_nibble(), 0x0F);
    assert!(0x80_u8.top_bit_set());
    assert!(!0x7F_u8.top_bit_set());
  }

  #[test]
  fn placement() {
    assert_eq!(u16::octet_at_top(0xAB), 0xAB00);
    assert_eq!(u32::octet_at_top(0xAB), 0xAB00_0000);
    assert_eq!(u8::octet_at_top(0xAB), 0xAB);
    assert_eq!(u16::nibble_at_top(0x05), 0x5000);
    assert_eq!(u8::nibble_at_top(0xF5), 0x50, "only the low nibble is placed");
  }

  #[test]
  fn shifts_discard_high_bits() {
    assert_eq!(0x8001_u16.shift_bit(true), 0x0003);
    assert_eq!(0xFF_u8.shift_nibble(0x0A), 0xFA);
    assert_eq!(0xABCD_u16.shift_octet(0xEF), 0xCDEF);
    assert_eq!(0x12345678_u32.shift_octet(0x9A), 0x3456_789A);
  }

  #[test]
  fn shift_octet_empties_u8() {
    assert_eq!(0xFF_u8.shift_octet(0x12), 0x12);
    assert_eq!(0x00_u8.shift_octet(0x34), 0x34);
  }

  #[test]
  fn reflection() {
    assert_eq!(0x01_u8.reflected(), 0x80);
    assert_eq!(0x0001_u16.reflected(), 0x8000);
    assert_eq!(0x3e23_u16.reflected(), 0xc47c);
    assert_eq!(0xF0F0_F0F0_u32.reflected(), 0x0F0F_0F0F);
  }
}
