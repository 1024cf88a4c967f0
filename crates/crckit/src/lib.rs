//! Configurable CRC calculators for 8, 16, and 32 bit registers.
//!
//! A CRC algorithm is described by five parameters (polynomial, initial
//! remainder, input reflection, output reflection, final XOR) and computed by
//! any of five interchangeable engines: a bitwise reference, nibble and byte
//! table engines over the augmented message, and their direct tail-free
//! counterparts. All engines produce identical results for every parameter
//! set; they trade table space against work per octet.
//!
//! # Quick Start
//!
//! ```
//! use crckit::{Calculator, Crc, CrcParams};
//!
//! // A catalogue preset, default engine.
//! let crc = Crc::new(CrcParams::<u16>::XMODEM);
//! assert_eq!(crc.calculate(b"123456789"), 0x31C3);
//!
//! // Any custom parameter set works; no combination is rejected.
//! let params = CrcParams::<u32> {
//!   polynomial: 0x04C1_1DB7,
//!   initial_remainder: 0,
//!   input_is_reflected: false,
//!   output_is_reflected: false,
//!   xor_output: 0,
//! };
//! assert_eq!(Crc::new(params).calculate(b"123456789"), 0x89A1_897F);
//! ```
//!
//! # no_std
//!
//! The whole stack is `no_std` and allocation-free: tables are built when a
//! calculator is constructed, never on the calculation path.

#![no_std]

// =============================================================================
// Checksums
// =============================================================================

pub use checksum::{
  AugmentedByteCrc, AugmentedNibbleCrc, BitwiseCrc, Crc, CrcParams, DirectByteCrc, DirectNibbleCrc, Engine,
};

// =============================================================================
// Traits
// =============================================================================

pub use traits::{Calculator, Register};
