//! Core traits for crckit.
//!
//! This crate provides the foundational traits the crckit calculators conform
//! to. It is `no_std` compatible and has zero dependencies.
//!
//! | Trait | Purpose |
//! |-------|---------|
//! | [`Register`] | Shift-register arithmetic over the supported CRC widths (8, 16, 32) |
//! | [`Calculator`] | One-shot CRC computation over a forward octet source |
//!
//! # Fallibility Discipline
//!
//! This crate denies `unwrap`, `expect`, and indexing in non-test code to ensure
//! all error paths are handled explicitly.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::indexing_slicing))]
#![no_std]

mod calculator;
mod register;

pub use calculator::Calculator;
pub use register::Register;
