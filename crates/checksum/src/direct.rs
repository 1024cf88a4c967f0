//! Direct table-driven calculators.
//!
//! The w-bit zero tail is absorbed at construction: the calculator starts
//! from the initial remainder advanced through w zero bits, input octets are
//! XORed into the register top before indexing, and no tail iterations run
//! after the input.
//!
//! ```text
//! byte:   r = (r << 8) ^ T[top_octet(r) ^ m']
//! nibble: r = (r << 4) ^ T4[top_nibble(r) ^ n]
//! ```
//!
//! The tables are identical to the augmented engines'; only the start value
//! and the insertion point differ. This is the classic tail-free CRC loop and
//! the fastest of the five engines per octet.

// SAFETY: tables have 256 (octet-indexed) or 16 (nibble-indexed) entries and
// indices are octet/nibble values, so every lookup is in bounds.
#![allow(clippy::indexing_slicing)]

use core::borrow::Borrow;

use traits::{Calculator, Register};

use crate::common::tables::{byte_table, clock_zero, nibble_table};
use crate::params::CrcParams;

/// Direct calculator with a 16-entry nibble-indexed table.
///
/// Two lookups per input octet; no tail iterations.
#[derive(Clone, Copy, Debug)]
pub struct DirectNibbleCrc<R: Register> {
  params: CrcParams<R>,
  /// `initial_remainder` advanced through the w-bit zero tail.
  start: R,
  table: [R; 16],
}

impl<R: Register> DirectNibbleCrc<R> {
  /// Create a calculator for `params`, precomputing its table and start value.
  #[must_use]
  pub fn new(params: CrcParams<R>) -> Self {
    Self {
      params,
      start: clock_zero(params.polynomial, params.initial_remainder, R::WIDTH),
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
    let index = crc.top_nibble() ^ nibble;
    crc.shift_nibble(0) ^ self.table[usize::from(index)]
  }
}

impl<R: Register> Calculator for DirectNibbleCrc<R> {
  type Register = R;

  fn calculate<I>(&self, octets: I) -> R
  where
    I: IntoIterator,
    I::Item: Borrow<u8>,
  {
    let mut crc = self.start;
    for octet in octets {
      let octet = self.params.process_octet(*octet.borrow());
      crc = self.step(crc, octet >> 4);
      crc = self.step(crc, octet & 0x0F);
    }
    self.params.finish(crc)
  }
}

/// Direct calculator with a 256-entry octet-indexed table.
///
/// One lookup per input octet; no tail iterations. The default engine.
#[derive(Clone, Copy, Debug)]
pub struct DirectByteCrc<R: Register> {
  params: CrcParams<R>,
  /// `initial_remainder` advanced through the w-bit zero tail.
  start: R,
  table: [R; 256],
}

impl<R: Register> DirectByteCrc<R> {
  /// Create a calculator for `params`, precomputing its table and start value.
  #[must_use]
  pub fn new(params: CrcParams<R>) -> Self {
    Self {
      params,
      start: clock_zero(params.polynomial, params.initial_remainder, R::WIDTH),
      table: byte_table(params.polynomial),
    }
  }

  /// The parameters this calculator was constructed with.
  #[must_use]
  pub const fn params(&self) -> &CrcParams<R> {
    &self.params
  }
}

impl<R: Register> Calculator for DirectByteCrc<R> {
  type Register = R;

  fn calculate<I>(&self, octets: I) -> R
  where
    I: IntoIterator,
    I::Item: Borrow<u8>,
  {
    let mut crc = self.start;
    for octet in octets {
      let index = crc.top_octet() ^ self.params.process_octet(*octet.borrow());
      crc = crc.shift_octet(0) ^ self.table[usize::from(index)];
    }
    self.params.finish(crc)
  }
}
