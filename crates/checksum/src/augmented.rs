//! Augmented table-driven calculators.
//!
//! The register state after each input slice is advanced by table lookup
//! while the w-bit zero tail remains pending; after the last input octet the
//! tail is applied by further zero-input lookups, then output processing.
//!
//! Per iteration the register shifts left by the slice width, the input slice
//! enters at the bottom, and the table entry for the slice that fell off the
//! top is XORed in:
//!
//! ```text
//! byte:   r = ((r << 8) | m') ^ T[top_octet(r)]     then w/8 zero-input steps
//! nibble: r = ((r << 4) | n)  ^ T4[top_nibble(r)]   then w/4 zero-input steps
//! ```
//!
//! The nibble engine consumes each processed octet high nibble first and
//! needs only 16 table entries.

// SAFETY: tables have 256 (octet-indexed) or 16 (nibble-indexed) entries and
// indices are octet/nibble values, so every lookup is in bounds.
#![allow(clippy::indexing_slicing)]

use core::borrow::Borrow;

use traits::{Calculator, Register};

use crate::common::tables::{byte_table, nibble_table};
use crate::params::CrcParams;

/// Augmented calculator with a 16-entry nibble-indexed table.
///
/// Two lookups per input octet, plus w/4 zero-input lookups for the tail.
#[derive(Clone, Copy, Debug)]
pub struct AugmentedNibbleCrc<R: Register> {
  params: CrcParams<R>,
  table: [R; 16],
}

impl<R: Register> AugmentedNibbleCrc<R> {
  /// Create a calculator for `params`, precomputing its table.
  #[must_use]
  pub fn new(params: CrcParams<R>) -> Self {
    Self {
      params,
      table: nibble_table(params.polynomial),
    }
  }

  /// The parameters this calculator was constructed with.
  #[must_use]
  pub const fn params(&self) -> &CrcParams<R> {
    &self.params
  }

  #[inline]
  fn step(&self, crc: R, nibble: u8) -> R {
    let top = crc.top_nibble();
    crc.shift_nibble(nibble) ^ self.table[usize::from(top)]
  }
}

impl<R: Register> Calculator for AugmentedNibbleCrc<R> {
  type Register = R;

  fn calculate<I>(&self, octets: I) -> R
  where
    I: IntoIterator,
    I::Item: Borrow<u8>,
  {
    let mut crc = self.params.initial_remainder;
    for octet in octets {
      let octet = self.params.process_octet(*octet.borrow());
      crc = self.step(crc, octet >> 4);
      crc = self.step(crc, octet & 0x0F);
    }
    for _ in 0..R::NIBBLES {
      crc = self.step(crc, 0);
    }
    self.params.finish(crc)
  }
}

/// Augmented calculator with a 256-entry octet-indexed table.
///
/// One lookup per input octet, plus w/8 zero-input lookups for the tail.
#[derive(Clone, Copy, Debug)]
pub struct AugmentedByteCrc<R: Register> {
  params: CrcParams<R>,
  table: [R; 256],
}

impl<R: Register> AugmentedByteCrc<R> {
  /// Create a calculator for `params`, precomputing its table.
  #[must_use]
  pub fn new(params: CrcParams<R>) -> Self {
    Self {
      params,
      table: byte_table(params.polynomial),
    }
  }

  /// The parameters this calculator was constructed with.
  #[must_use]
  pub const fn params(&self) -> &CrcParams<R> {
    &self.params
  }

  #[inline]
  fn step(&self, crc: R, octet: u8) -> R {
    let top = crc.top_octet();
    crc.shift_octet(octet) ^ self.table[usize::from(top)]
  }
}

impl<R: Register> Calculator for AugmentedByteCrc<R> {
  type Register = R;

  fn calculate<I>(&self, octets: I) -> R
  where
    I: IntoIterator,
    I::Item: Borrow<u8>,
  {
    let mut crc = self.params.initial_remainder;
    for octet in octets {
      crc = self.step(crc, self.params.process_octet(*octet.borrow()));
    }
    for _ in 0..R::OCTETS {
      crc = self.step(crc, 0);
    }
    self.params.finish(crc)
  }
}
