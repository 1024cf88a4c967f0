//! Engine selection.
//!
//! All five engines compute the same function; choosing between them is a
//! speed/space trade, not a behavioural one. [`Crc`] wraps the choice behind
//! a single calculator type so callers can hold "a CRC for these parameters"
//! without naming an engine, and harnesses can force one for comparison.

use core::borrow::Borrow;

use traits::{Calculator, Register};

use crate::augmented::{AugmentedByteCrc, AugmentedNibbleCrc};
use crate::bitwise::BitwiseCrc;
use crate::direct::{DirectByteCrc, DirectNibbleCrc};
use crate::params::CrcParams;

/// The five interchangeable calculation engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Engine {
  /// Bit-at-a-time reference (slow, obviously correct).
  Bitwise,
  /// Augmented form, 16-entry table, two lookups per octet plus tail.
  AugmentedNibble,
  /// Augmented form, 256-entry table, one lookup per octet plus tail.
  AugmentedByte,
  /// Direct form, 16-entry table, two lookups per octet, no tail.
  DirectNibble,
  /// Direct form, 256-entry table, one lookup per octet, no tail.
  #[default]
  DirectByte,
}

impl Engine {
  /// Every engine, reference first.
  pub const ALL: [Self; 5] = [
    Self::Bitwise,
    Self::AugmentedNibble,
    Self::AugmentedByte,
    Self::DirectNibble,
    Self::DirectByte,
  ];

  /// Stable name for harness and bench output.
  #[must_use]
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Bitwise => "bitwise",
      Self::AugmentedNibble => "augmented-nibble",
      Self::AugmentedByte => "augmented-byte",
      Self::DirectNibble => "direct-nibble",
      Self::DirectByte => "direct-byte",
    }
  }
}

#[derive(Clone, Copy, Debug)]
enum State<R: Register> {
  Bitwise(BitwiseCrc<R>),
  AugmentedNibble(AugmentedNibbleCrc<R>),
  AugmentedByte(AugmentedByteCrc<R>),
  DirectNibble(DirectNibbleCrc<R>),
  DirectByte(DirectByteCrc<R>),
}

/// A calculator for one parameter set behind a selectable engine.
#[derive(Clone, Copy, Debug)]
pub struct Crc<R: Register> {
  state: State<R>,
}

impl<R: Register> Crc<R> {
  /// Create a calculator using the default engine.
  #[must_use]
  pub fn new(params: CrcParams<R>) -> Self {
    Self::with_engine(params, Engine::default())
  }

  /// Create a calculator using a specific engine.
  #[must_use]
  pub fn with_engine(params: CrcParams<R>, engine: Engine) -> Self {
    let state = match engine {
      Engine::Bitwise => State::Bitwise(BitwiseCrc::new(params)),
      Engine::AugmentedNibble => State::AugmentedNibble(AugmentedNibbleCrc::new(params)),
      Engine::AugmentedByte => State::AugmentedByte(AugmentedByteCrc::new(params)),
      Engine::DirectNibble => State::DirectNibble(DirectNibbleCrc::new(params)),
      Engine::DirectByte => State::DirectByte(DirectByteCrc::new(params)),
    };
    Self { state }
  }

  /// Which engine this calculator runs.
  #[must_use]
  pub const fn engine(&self) -> Engine {
    match self.state {
      State::Bitwise(_) => Engine::Bitwise,
      State::AugmentedNibble(_) => Engine::AugmentedNibble,
      State::AugmentedByte(_) => Engine::AugmentedByte,
      State::DirectNibble(_) => Engine::DirectNibble,
      State::DirectByte(_) => Engine::DirectByte,
    }
  }

  /// The parameters this calculator was built from.
  #[must_use]
  pub const fn params(&self) -> &CrcParams<R> {
    match &self.state {
      State::Bitwise(crc) => crc.params(),
      State::AugmentedNibble(crc) => crc.params(),
      State::AugmentedByte(crc) => crc.params(),
      State::DirectNibble(crc) => crc.params(),
      State::DirectByte(crc) => crc.params(),
    }
  }
}

impl<R: Register> Calculator for Crc<R> {
  type Register = R;

  fn calculate<I>(&self, octets: I) -> R
  where
    I: IntoIterator,
    I::Item: Borrow<u8>,
  {
    match &self.state {
      State::Bitwise(crc) => crc.calculate(octets),
      State::AugmentedNibble(crc) => crc.calculate(octets),
      State::AugmentedByte(crc) => crc.calculate(octets),
      State::DirectNibble(crc) => crc.calculate(octets),
      State::DirectByte(crc) => crc.calculate(octets),
    }
  }
}
