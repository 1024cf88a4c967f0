//! Engine throughput on each register width.
//!
//! Run: `cargo bench -p checksum -- calculate`
//!
//! Every engine computes the same function, so the interesting signal is the
//! spread: bitwise versus nibble-table versus byte-table, and the augmented
//! tail overhead versus the direct form.

use core::hint::black_box;

use checksum::{Calculator, Crc, CrcParams, Engine};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SIZES: [usize; 3] = [64, 1024, 65536];

fn make_data(len: usize) -> Vec<u8> {
  (0..len)
    .map(|i| (i as u8).wrapping_mul(31).wrapping_add((i >> 8) as u8))
    .collect()
}

fn bench_crc8(c: &mut Criterion) {
  let mut group = c.benchmark_group("calculate/crc8/maxim-dow");
  for size in SIZES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    for engine in Engine::ALL {
      let crc = Crc::with_engine(CrcParams::<u8>::MAXIM_DOW, engine);
      group.bench_with_input(BenchmarkId::new(engine.as_str(), size), &data, |b, data| {
        b.iter(|| black_box(crc.calculate(black_box(data))));
      });
    }
  }
  group.finish();
}

fn bench_crc16(c: &mut Criterion) {
  let mut group = c.benchmark_group("calculate/crc16/aug-ccitt");
  for size in SIZES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    for engine in Engine::ALL {
      let crc = Crc::with_engine(CrcParams::<u16>::AUG_CCITT, engine);
      group.bench_with_input(BenchmarkId::new(engine.as_str(), size), &data, |b, data| {
        b.iter(|| black_box(crc.calculate(black_box(data))));
      });
    }
  }
  group.finish();
}

fn bench_crc32(c: &mut Criterion) {
  let mut group = c.benchmark_group("calculate/crc32/cksum");
  for size in SIZES {
    let data = make_data(size);
    group.throughput(Throughput::Bytes(size as u64));

    for engine in Engine::ALL {
      let crc = Crc::with_engine(CrcParams::<u32>::CKSUM, engine);
      group.bench_with_input(BenchmarkId::new(engine.as_str(), size), &data, |b, data| {
        b.iter(|| black_box(crc.calculate(black_box(data))));
      });
    }
  }
  group.finish();
}

criterion_group!(benches, bench_crc8, bench_crc16, bench_crc32);
criterion_main!(benches);
