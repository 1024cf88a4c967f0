//! Differential fuzzing of the catalogue presets against the `crc` crate.
//!
//! The presets are the algorithms this crate ships with check values; here
//! they run against an independent implementation on arbitrary input, not
//! just the pinned `"123456789"` vector.

#![no_main]

use checksum::{Calculator, Crc, CrcParams};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
  test_crc8_presets(data);
  test_crc16_presets(data);
  test_crc32_presets(data);
});

fn test_crc8_presets(data: &[u8]) {
  let ours = Crc::new(CrcParams::<u8>::SMBUS).calculate(data);
  let reference = crc::Crc::<u8>::new(&crc::CRC_8_SMBUS).checksum(data);
  assert_eq!(
    ours,
    reference,
    "crc8/smbus mismatch: ours={ours:#04x}, reference={reference:#04x}, len={}",
    data.len()
  );

  let ours = Crc::new(CrcParams::<u8>::MAXIM_DOW).calculate(data);
  let reference = crc::Crc::<u8>::new(&crc::CRC_8_MAXIM_DOW).checksum(data);
  assert_eq!(
    ours,
    reference,
    "crc8/maxim-dow mismatch: ours={ours:#04x}, reference={reference:#04x}, len={}",
    data.len()
  );
}

fn test_crc16_presets(data: &[u8]) {
  let ours = Crc::new(CrcParams::<u16>::XMODEM).calculate(data);
  let reference = crc::Crc::<u16>::new(&crc::CRC_16_XMODEM).checksum(data);
  assert_eq!(
    ours,
    reference,
    "crc16/xmodem mismatch: ours={ours:#06x}, reference={reference:#06x}, len={}",
    data.len()
  );

  let ours = Crc::new(CrcParams::<u16>::AUG_CCITT).calculate(data);
  let reference = crc::Crc::<u16>::new(&crc::CRC_16_SPI_FUJITSU).checksum(data);
  assert_eq!(
    ours,
    reference,
    "crc16/aug-ccitt mismatch: ours={ours:#06x}, reference={reference:#06x}, len={}",
    data.len()
  );

  let ours = Crc::new(CrcParams::<u16>::ARC).calculate(data);
  let reference = crc::Crc::<u16>::new(&crc::CRC_16_ARC).checksum(data);
  assert_eq!(
    ours,
    reference,
    "crc16/arc mismatch: ours={ours:#06x}, reference={reference:#06x}, len={}",
    data.len()
  );

  let ours = Crc::new(CrcParams::<u16>::UMTS).calculate(data);
  let reference = crc::Crc::<u16>::new(&crc::CRC_16_UMTS).checksum(data);
  assert_eq!(
    ours,
    reference,
    "crc16/umts mismatch: ours={ours:#06x}, reference={reference:#06x}, len={}",
    data.len()
  );
}

fn test_crc32_presets(data: &[u8]) {
  let ours = Crc::new(CrcParams::<u32>::CKSUM).calculate(data);
  let reference = crc::Crc::<u32>::new(&crc::CRC_32_CKSUM).checksum(data);
  assert_eq!(
    ours,
    reference,
    "crc32/cksum mismatch: ours={ours:#010x}, reference={reference:#010x}, len={}",
    data.len()
  );
}
