//! The bitwise calculator: one bit at a time, no tables.
//!
//! Direct transcription of the augmented shift-register model. Slowest of the
//! five engines and the conformance oracle for the other four; every
//! table-driven engine is tested against it.

use core::borrow::Borrow;

use traits::{Calculator, Register};

use crate::params::CrcParams;

/// Bit-at-a-time CRC calculator.
///
/// Holds only the parameters record; O(1) memory, one polynomial reduction
/// per message bit plus the w-bit zero tail.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitwiseCrc<R: Register> {
  params: CrcParams<R>,
}

impl<R: Register> BitwiseCrc<R> {
  /// Create a calculator for `params`.
  #[must_use]
  pub const fn new(params: CrcParams<R>) -> Self {
    Self { params }
  }

  /// The parameters this calculator was constructed with.
  #[must_use]
  pub const fn params(&self) -> &CrcParams<R> {
    &self.params
  }
}

impl<R: Register> Calculator for BitwiseCrc<R> {
  type Register = R;

  fn calculate<I>(&self, octets: I) -> R
  where
    I: IntoIterator,
    I::Item: Borrow<u8>,
  {
    let mut crc = self.params.initial_remainder;
    for octet in octets {
      let octet = self.params.process_octet(*octet.borrow());
      for bit in 0..8 {
        let top = crc.top_bit_set();
        crc = crc.shift_bit((octet >> (7 - bit)) & 1 != 0);
        if top {
          crc ^= self.params.polynomial;
        }
      }
    }
    // The w-bit zero tail, clocked explicitly.
    for _ in 0..R::WIDTH {
      let top = crc.top_bit_set();
      crc = crc.shift_bit(false);
      if top {
        crc ^= self.params.polynomial;
      }
    }
    self.params.finish(crc)
  }
}
