//! Criterion benchmarks for the degradation pipeline
//!
//! Run with: cargo bench
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use ochobit_core::{EffectParameters, Mode, Overrides, Pipeline, SampleBuffer};

const BUFFER_SIZES: &[usize] = &[1024, 8192, 65536];

fn generate_test_buffer(size: usize, sample_rate: u32) -> SampleBuffer {
    let samples: Vec<i32> = (0..size)
        .map(|i| {
            let t = i as f64 / f64::from(sample_rate);
            ((2.0 * std::f64::consts::PI * 440.0 * t).sin() * 20_000.0) as i32
        })
        .collect();
    SampleBuffer::new(samples, 1, sample_rate, 2)
}

fn bench_mode(c: &mut Criterion, mode: Mode) {
    let params = EffectParameters::resolve(mode, &Overrides::default()).unwrap();
    let mut group = c.benchmark_group(mode.name());

    for &size in BUFFER_SIZES {
        let input = generate_test_buffer(size, params.sample_rate);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                let mut pipeline = Pipeline::for_params(&params, 42);
                let output = pipeline.run(black_box(&input)).unwrap();
                black_box(output.samples[0])
            })
        });
    }

    group.finish();
}

fn bench_presets(c: &mut Criterion) {
    for mode in Mode::ALL {
        bench_mode(c, mode);
    }
}

criterion_group!(benches, bench_presets);
criterion_main!(benches);
