//! Bitwise reference implementations for all supported widths.
//!
//! This module provides the canonical "source of truth" for the augmented CRC
//! model. These implementations process one bit at a time, making them:
//!
//! - **Obviously correct**: the code directly mirrors the mathematical definition
//! - **Audit-friendly**: one short function per width, no lookup tables
//! - **Const-evaluable**: check values are verified at compile time
//!
//! All table-driven engines must produce identical results to these functions.
//!
//! # Model
//!
//! The register is preloaded with the initial remainder, the (optionally
//! octet-reflected) message is clocked through MSB first, then w explicit zero
//! bits follow. A top bit that falls out of the register selects a polynomial
//! reduction. Output reflection and the final XOR are applied last.
//!
//! # Performance
//!
//! Intentionally slow (one reduction per bit). Use for correctness
//! verification, test oracles, and generating expected values, not for
//! production throughput.

// SAFETY: All array indexing uses bounded loop indices (0..data.len()).
// Clippy cannot prove this in const fn contexts, but bounds are statically guaranteed.
#![allow(clippy::indexing_slicing)]

// ─────────────────────────────────────────────────────────────────────────────
// CRC-8 Reference Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise CRC-8 over the augmented message (MSB-first).
///
/// # Arguments
///
/// * `polynomial` - Generator polynomial, non-reflected form
/// * `initial` - Register value before the first bit
/// * `reflect_in` - Bit-reverse each input octet
/// * `reflect_out` - Bit-reverse the remainder before the final XOR
/// * `xor_out` - Final XOR value
/// * `data` - Input octets
#[must_use]
pub const fn crc8_bitwise(
  polynomial: u8,
  initial: u8,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u8,
  data: &[u8],
) -> u8 {
  let mut crc = initial;
  let mut i: usize = 0;
  while i < data.len() {
    let octet = if reflect_in { data[i].reverse_bits() } else { data[i] };
    let mut bit: u32 = 0;
    while bit < 8 {
      let top = crc & 0x80 != 0;
      crc = (crc << 1) | ((octet >> (7 - bit)) & 1);
      if top {
        crc ^= polynomial;
      }
      bit += 1;
    }
    i += 1;
  }
  // The 8-bit zero tail of the augmented message.
  let mut bit: u32 = 0;
  while bit < 8 {
    let top = crc & 0x80 != 0;
    crc <<= 1;
    if top {
      crc ^= polynomial;
    }
    bit += 1;
  }
  if reflect_out {
    crc = crc.reverse_bits();
  }
  crc ^ xor_out
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-16 Reference Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise CRC-16 over the augmented message (MSB-first).
///
/// Same model as [`crc8_bitwise`] with a 16-bit register and zero tail.
#[must_use]
pub const fn crc16_bitwise(
  polynomial: u16,
  initial: u16,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u16,
  data: &[u8],
) -> u16 {
  let mut crc = initial;
  let mut i: usize = 0;
  while i < data.len() {
    let octet = if reflect_in { data[i].reverse_bits() } else { data[i] };
    let mut bit: u32 = 0;
    while bit < 8 {
      let top = crc & 0x8000 != 0;
      crc = (crc << 1) | ((octet >> (7 - bit)) & 1) as u16;
      if top {
        crc ^= polynomial;
      }
      bit += 1;
    }
    i += 1;
  }
  let mut bit: u32 = 0;
  while bit < 16 {
    let top = crc & 0x8000 != 0;
    crc <<= 1;
    if top {
      crc ^= polynomial;
    }
    bit += 1;
  }
  if reflect_out {
    crc = crc.reverse_bits();
  }
  crc ^ xor_out
}

// ─────────────────────────────────────────────────────────────────────────────
// CRC-32 Reference Implementation
// ─────────────────────────────────────────────────────────────────────────────

/// Bitwise CRC-32 over the augmented message (MSB-first).
///
/// Same model as [`crc8_bitwise`] with a 32-bit register and zero tail.
#[must_use]
pub const fn crc32_bitwise(
  polynomial: u32,
  initial: u32,
  reflect_in: bool,
  reflect_out: bool,
  xor_out: u32,
  data: &[u8],
) -> u32 {
  let mut crc = initial;
  let mut i: usize = 0;
  while i < data.len() {
    let octet = if reflect_in { data[i].reverse_bits() } else { data[i] };
    let mut bit: u32 = 0;
    while bit < 8 {
      let top = crc & 0x8000_0000 != 0;
      crc = (crc << 1) | ((octet >> (7 - bit)) & 1) as u32;
      if top {
        crc ^= polynomial;
      }
      bit += 1;
    }
    i += 1;
  }
  let mut bit: u32 = 0;
  while bit < 32 {
    let top = crc & 0x8000_0000 != 0;
    crc <<= 1;
    if top {
      crc ^= polynomial;
    }
    bit += 1;
  }
  if reflect_out {
    crc = crc.reverse_bits();
  }
  crc ^ xor_out
}

// ─────────────────────────────────────────────────────────────────────────────
// Compile-Time Verification
// ─────────────────────────────────────────────────────────────────────────────

// These const assertions pin the reference implementations to known values at
// compile time. If any fails, the build fails.

/// Standard test input for CRC check values.
pub(crate) const CHECK_INPUT: &[u8] = b"123456789";

// CRC-8, polynomial 0x31, across the parameter grid.
// The (0x00, refl, refl) row is the CRC-8/MAXIM-DOW check value.
const _: () = {
  assert!(crc8_bitwise(0x31, 0x00, false, false, 0x00, CHECK_INPUT) == 0xA2);
  assert!(crc8_bitwise(0x31, 0xFF, false, false, 0x00, CHECK_INPUT) == 0x29);
  assert!(crc8_bitwise(0x31, 0x00, true, true, 0x00, CHECK_INPUT) == 0xA1);
  assert!(crc8_bitwise(0x31, 0xFF, true, true, 0x00, CHECK_INPUT) == 0x70);
  assert!(crc8_bitwise(0x31, 0xFF, true, true, 0xFF, CHECK_INPUT) == 0x8F);
};

// CRC-16, polynomial 0x1021. The zero-init row is CRC-16/XMODEM; the
// 0xFFFF-init row is CRC-16/AUG-CCITT.
const _: () = {
  assert!(crc16_bitwise(0x1021, 0x0000, false, false, 0x0000, CHECK_INPUT) == 0x31C3);
  assert!(crc16_bitwise(0x1021, 0xFFFF, false, false, 0x0000, CHECK_INPUT) == 0xE5CC);
  assert!(crc16_bitwise(0x1021, 0xFFFF, true, true, 0xFFFF, CHECK_INPUT) == 0x2E5D);
};

// CRC-32, polynomial 0x04C11DB7. The zero-init row is CRC-32/CKSUM without
// its final XOR.
const _: () = {
  assert!(crc32_bitwise(0x04C1_1DB7, 0x0000_0000, false, false, 0x0000_0000, CHECK_INPUT) == 0x89A1_897F);
  assert!(crc32_bitwise(0x04C1_1DB7, 0xFFFF_FFFF, true, true, 0xFFFF_FFFF, CHECK_INPUT) == 0x2289_6B0A);
};

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
