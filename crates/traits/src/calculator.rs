//! The one-shot CRC calculation contract.

use core::borrow::Borrow;

use crate::Register;

/// A configured CRC calculator.
///
/// A calculator is immutable after construction: [`calculate`](Self::calculate)
/// is a pure function of the construction-time parameters and the input octets,
/// so one instance can be shared freely across threads and invoked any number
/// of times.
///
/// # Usage
///
/// ```rust,ignore
/// use checksum::{Calculator, CrcParams, DirectByteCrc};
///
/// let crc = DirectByteCrc::new(CrcParams::<u16>::XMODEM);
/// assert_eq!(crc.calculate(b"123456789"), 0x31C3);
///
/// // Any forward octet source works: slices, arrays, adapters.
/// let halves = b"12345".iter().chain(b"6789");
/// assert_eq!(crc.calculate(halves), 0x31C3);
/// ```
///
/// # Implementor Requirements
///
/// - `calculate` consumes the source exactly once, in forward order.
/// - Equal parameters and equal octet sequences produce equal results,
///   independent of how the sequence is chunked or adapted.
/// - No allocation, no I/O, no failure: the operation is total.
pub trait Calculator {
  /// The register type holding the remainder (`u8`, `u16`, or `u32`).
  type Register: Register;

  /// Compute the CRC remainder of `octets`.
  #[must_use]
  fn calculate<I>(&self, octets: I) -> Self::Register
  where
    I: IntoIterator,
    I::Item: Borrow<u8>;
}
