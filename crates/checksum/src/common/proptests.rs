//! Property tests for the calculation engines.
//!
//! These verify the invariants that make the engine set trustworthy:
//!
//! 1. **Engine equivalence**: for arbitrary parameter sets, every table
//!    engine produces the same value as the bitwise reference. The reference
//!    is the mathematical definition; the tables only rearrange its work.
//!
//! 2. **XOR-output linearity**: two parameter sets differing only in
//!    `xor_output` produce values differing by exactly that XOR.
//!
//! 3. **Source independence**: the same octets fed from a slice, a chained
//!    iterator, or an owned stream produce the same value.

#![cfg(all(test, not(miri)))]

extern crate std;

use proptest::prelude::*;
use traits::Calculator;

use super::reference::{crc16_bitwise, crc32_bitwise, crc8_bitwise};
use crate::{Crc, CrcParams, Engine};

// ─────────────────────────────────────────────────────────────────────────────
// Engine Equivalence
// ─────────────────────────────────────────────────────────────────────────────
//
// The bitwise reference is the oracle. Each width draws the full parameter
// space: any polynomial, any initial remainder, both reflection flags, any
// final XOR. A divergence here means a table engine is wrong, not unlucky.
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn crc8_engines_match_reference(
    polynomial in any::<u8>(),
    initial in any::<u8>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor in any::<u8>(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048)
  ) {
    let params = CrcParams {
      polynomial,
      initial_remainder: initial,
      input_is_reflected: reflect_in,
      output_is_reflected: reflect_out,
      xor_output: xor,
    };
    let expected = crc8_bitwise(polynomial, initial, reflect_in, reflect_out, xor, &data);

    for engine in Engine::ALL {
      let got = Crc::with_engine(params, engine).calculate(&data);
      prop_assert_eq!(got, expected, "engine {} diverged from the reference", engine.as_str());
    }
  }

  #[test]
  fn crc16_engines_match_reference(
    polynomial in any::<u16>(),
    initial in any::<u16>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048)
  ) {
    let params = CrcParams {
      polynomial,
      initial_remainder: initial,
      input_is_reflected: reflect_in,
      output_is_reflected: reflect_out,
      xor_output: xor,
    };
    let expected = crc16_bitwise(polynomial, initial, reflect_in, reflect_out, xor, &data);

    for engine in Engine::ALL {
      let got = Crc::with_engine(params, engine).calculate(&data);
      prop_assert_eq!(got, expected, "engine {} diverged from the reference", engine.as_str());
    }
  }

  #[test]
  fn crc32_engines_match_reference(
    polynomial in any::<u32>(),
    initial in any::<u32>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=2048)
  ) {
    let params = CrcParams {
      polynomial,
      initial_remainder: initial,
      input_is_reflected: reflect_in,
      output_is_reflected: reflect_out,
      xor_output: xor,
    };
    let expected = crc32_bitwise(polynomial, initial, reflect_in, reflect_out, xor, &data);

    for engine in Engine::ALL {
      let got = Crc::with_engine(params, engine).calculate(&data);
      prop_assert_eq!(got, expected, "engine {} diverged from the reference", engine.as_str());
    }
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// XOR-Output Linearity
// ─────────────────────────────────────────────────────────────────────────────
//
// The final XOR is applied after reflection, so two runs over the same data
// that differ only in `xor_output` must differ by exactly the XOR of the two
// masks. This pins the order of the finalisation steps.
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn crc8_xor_output_is_linear(
    polynomial in any::<u8>(),
    initial in any::<u8>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor_a in any::<u8>(),
    xor_b in any::<u8>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024)
  ) {
    let base = CrcParams {
      polynomial,
      initial_remainder: initial,
      input_is_reflected: reflect_in,
      output_is_reflected: reflect_out,
      xor_output: xor_a,
    };
    let other = CrcParams { xor_output: xor_b, ..base };

    let a = Crc::new(base).calculate(&data);
    let b = Crc::new(other).calculate(&data);
    prop_assert_eq!(a ^ b, xor_a ^ xor_b);
  }

  #[test]
  fn crc16_xor_output_is_linear(
    polynomial in any::<u16>(),
    initial in any::<u16>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor_a in any::<u16>(),
    xor_b in any::<u16>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024)
  ) {
    let base = CrcParams {
      polynomial,
      initial_remainder: initial,
      input_is_reflected: reflect_in,
      output_is_reflected: reflect_out,
      xor_output: xor_a,
    };
    let other = CrcParams { xor_output: xor_b, ..base };

    let a = Crc::new(base).calculate(&data);
    let b = Crc::new(other).calculate(&data);
    prop_assert_eq!(a ^ b, xor_a ^ xor_b);
  }

  #[test]
  fn crc32_xor_output_is_linear(
    polynomial in any::<u32>(),
    initial in any::<u32>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    xor_a in any::<u32>(),
    xor_b in any::<u32>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024)
  ) {
    let base = CrcParams {
      polynomial,
      initial_remainder: initial,
      input_is_reflected: reflect_in,
      output_is_reflected: reflect_out,
      xor_output: xor_a,
    };
    let other = CrcParams { xor_output: xor_b, ..base };

    let a = Crc::new(base).calculate(&data);
    let b = Crc::new(other).calculate(&data);
    prop_assert_eq!(a ^ b, xor_a ^ xor_b);
  }
}

// ─────────────────────────────────────────────────────────────────────────────
// Source Independence
// ─────────────────────────────────────────────────────────────────────────────
//
// `calculate` takes any iterator of octets. Splitting the data and chaining
// the halves, or handing over an owned stream, must not change the result.
// ─────────────────────────────────────────────────────────────────────────────

proptest! {
  #![proptest_config(ProptestConfig::with_cases(256))]

  #[test]
  fn crc16_sources_are_equivalent(
    polynomial in any::<u16>(),
    initial in any::<u16>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    split in any::<usize>()
  ) {
    let split = split % (data.len() + 1);
    let params = CrcParams {
      polynomial,
      initial_remainder: initial,
      input_is_reflected: reflect_in,
      output_is_reflected: reflect_out,
      xor_output: 0,
    };
    let crc = Crc::new(params);

    let from_slice = crc.calculate(&data);
    let (head, tail) = data.split_at(split);
    prop_assert_eq!(crc.calculate(head.iter().chain(tail)), from_slice);
    prop_assert_eq!(crc.calculate(data.iter().copied()), from_slice);
  }

  #[test]
  fn crc32_sources_are_equivalent(
    polynomial in any::<u32>(),
    initial in any::<u32>(),
    reflect_in in any::<bool>(),
    reflect_out in any::<bool>(),
    data in proptest::collection::vec(any::<u8>(), 0..=1024),
    split in any::<usize>()
  ) {
    let split = split % (data.len() + 1);
    let params = CrcParams {
      polynomial,
      initial_remainder: initial,
      input_is_reflected: reflect_in,
      output_is_reflected: reflect_out,
      xor_output: 0,
    };
    let crc = Crc::new(params);

    let from_slice = crc.calculate(&data);
    let (head, tail) = data.split_at(split);
    prop_assert_eq!(crc.calculate(head.iter().chain(tail)), from_slice);
    prop_assert_eq!(crc.calculate(data.iter().copied()), from_slice);
  }
}
