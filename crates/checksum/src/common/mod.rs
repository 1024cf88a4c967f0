//! Shared machinery for the calculator family.
//!
//! This module provides:
//! - Per-width `const fn` bitwise implementations (the audit oracle)
//! - Lookup-table generation shared by the augmented and direct engines

pub(crate) mod reference;
pub(crate) mod tables;

// Proptest uses file I/O for failure persistence that Miri cannot interpret.
#[cfg(all(test, not(miri)))]
mod proptests;
