//! Basic usage: presets, custom parameters, and engine selection.
//!
//! Run with: `cargo run --example basic -p checksum`

use checksum::{Calculator, Crc, CrcParams, DirectByteCrc, Engine};

fn main() {
  println!("=== CRC Calculation Examples ===\n");

  preset_examples();
  custom_parameter_example();
  engine_comparison();
}

/// Catalogue presets, one-shot.
fn preset_examples() {
  println!("--- Presets ---\n");

  let data = b"123456789";

  let smbus = DirectByteCrc::new(CrcParams::<u8>::SMBUS).calculate(data);
  println!("CRC-8/SMBUS:      0x{smbus:02X}");
  assert_eq!(smbus, 0xF4);

  let maxim = DirectByteCrc::new(CrcParams::<u8>::MAXIM_DOW).calculate(data);
  println!("CRC-8/MAXIM-DOW:  0x{maxim:02X}");
  assert_eq!(maxim, 0xA1);

  let xmodem = DirectByteCrc::new(CrcParams::<u16>::XMODEM).calculate(data);
  println!("CRC-16/XMODEM:    0x{xmodem:04X}");
  assert_eq!(xmodem, 0x31C3);

  let arc = DirectByteCrc::new(CrcParams::<u16>::ARC).calculate(data);
  println!("CRC-16/ARC:       0x{arc:04X}");
  assert_eq!(arc, 0xBB3D);

  let cksum = DirectByteCrc::new(CrcParams::<u32>::CKSUM).calculate(data);
  println!("CRC-32/CKSUM:     0x{cksum:08X}");
  assert_eq!(cksum, 0x765E_7680);

  println!();
}

/// Any five-field parameter combination works; nothing is rejected.
fn custom_parameter_example() {
  println!("--- Custom Parameters ---\n");

  let params = CrcParams::<u16> {
    polynomial: 0x1021,
    initial_remainder: 0xFFFF,
    input_is_reflected: true,
    output_is_reflected: true,
    xor_output: 0xFFFF,
  };

  let crc = Crc::new(params);
  let value = crc.calculate(b"123456789");
  println!("custom crc16:     0x{value:04X}");

  // The input can be any iterator of octets, not just a slice.
  let chunked = crc.calculate(b"12345".iter().chain(b"6789"));
  assert_eq!(chunked, value);
  println!("chunked input:    0x{chunked:04X} (same)");

  println!();
}

/// All five engines agree; they differ only in table size and loop shape.
fn engine_comparison() {
  println!("--- Engines ---\n");

  let data = b"The quick brown fox jumps over the lazy dog";
  let params = CrcParams::<u32>::CKSUM;

  for engine in Engine::ALL {
    let value = Crc::with_engine(params, engine).calculate(data);
    println!("{:<16} 0x{value:08X}", engine.as_str());
    assert_eq!(value, 0x36B7_8081);
  }

  println!();
}
