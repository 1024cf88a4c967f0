//! Configurable CRC calculators for 8, 16, and 32 bit widths.
//!
//! A CRC here is defined by five parameters ([`CrcParams`]): the polynomial,
//! the initial remainder, input reflection, output reflection, and a final
//! XOR mask. Any parameter set can be run through five interchangeable
//! engines that produce identical results:
//!
//! | Engine | Table | Work per octet |
//! |--------|-------|----------------|
//! | [`BitwiseCrc`] | none | 8 single-bit steps (reference) |
//! | [`AugmentedNibbleCrc`] | 16 entries | 2 lookups, plus a zero tail |
//! | [`AugmentedByteCrc`] | 256 entries | 1 lookup, plus a zero tail |
//! | [`DirectNibbleCrc`] | 16 entries | 2 lookups, no tail |
//! | [`DirectByteCrc`] | 256 entries | 1 lookup, no tail |
//!
//! The augmented engines clock the conceptual w appended zero bits through
//! the register explicitly; the direct engines fold that tail into the
//! starting value and the table lookup. Same function, different loop shape.
//!
//! # Example
//!
//! ```rust
//! use checksum::{Calculator, Crc, CrcParams, DirectByteCrc, Engine};
//!
//! // XMODEM: poly 0x1021, zero init, unreflected.
//! let crc = DirectByteCrc::new(CrcParams::<u16>::XMODEM);
//! assert_eq!(crc.calculate(b"123456789"), 0x31C3);
//!
//! // Same parameters behind the engine-erasing wrapper.
//! let crc = Crc::with_engine(CrcParams::<u16>::XMODEM, Engine::AugmentedNibble);
//! assert_eq!(crc.calculate(b"123456789"), 0x31C3);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` and allocation-free. Table construction happens at
//! calculator build time; calculation itself never allocates.

#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod augmented;
mod bitwise;
mod common;
mod direct;
mod dispatch;
mod params;

pub use augmented::{AugmentedByteCrc, AugmentedNibbleCrc};
pub use bitwise::BitwiseCrc;
pub use direct::{DirectByteCrc, DirectNibbleCrc};
pub use dispatch::{Crc, Engine};
pub use params::CrcParams;
// Re-export traits for convenience
pub use traits::{Calculator, Register};
