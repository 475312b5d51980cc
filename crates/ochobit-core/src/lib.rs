//! Ochobit Core - offline 8-bit/chiptune degradation for PCM buffers
//!
//! This crate turns an arbitrary decoded recording into lossy, stylized
//! retro audio. It operates purely in memory: the caller hands over a fully
//! materialized [`SampleBuffer`] (integer samples, interleaved by channel,
//! plus container metadata) and receives a new buffer plus output metadata.
//! File decoding/encoding, resampling, and playback live outside this crate.
//!
//! # Pipeline model
//!
//! A conversion is a fixed-order list of [`Stage`]s chosen by a [`Mode`]
//! preset, followed by a mandatory [`Clipper`]:
//!
//! - **simple** - sample-rate and container-width reduction only
//! - **enhanced** - quantize, square-shape, distort, boost 3 dB
//! - **chiptune** - hard 16-step quantize, pulse shape, tremolo
//!
//! Stages work on an `f64` copy of the buffer and may transiently exceed
//! the representable range; the clipper alone enforces it before narrowing
//! back to integers.
//!
//! # Example
//!
//! ```rust
//! use ochobit_core::{EffectParameters, Mode, Overrides, Pipeline, SampleBuffer};
//!
//! let overrides = Overrides {
//!     quantize_factor: Some(0.9),
//!     ..Overrides::default()
//! };
//! let params = EffectParameters::resolve(Mode::Enhanced, &overrides)?;
//!
//! let input = SampleBuffer::new(vec![120, -120, 90, -90], 1, 8000, 2);
//! let output = Pipeline::for_params(&params, 1234).run(&input)?;
//!
//! assert_eq!(output.channels, 1);
//! assert!(output.samples.iter().all(|&s| (-127..=127).contains(&s)));
//! # Ok::<(), ochobit_core::PipelineError>(())
//! ```
//!
//! # Determinism and concurrency
//!
//! The only nondeterministic stage is distortion, and its noise generator
//! is an explicitly seeded [`NoiseLcg`] owned by the stage. Conversions
//! over different buffers share no state and may run on parallel threads.

pub mod buffer;
pub mod clipper;
pub mod distortion;
pub mod error;
pub mod gain;
pub mod math;
pub mod params;
pub mod pipeline;
pub mod preset;
pub mod quantizer;
pub mod rng;
pub mod shaper;
pub mod stage;
pub mod tremolo;

// Re-export main types at crate root
pub use buffer::SampleBuffer;
pub use clipper::Clipper;
pub use distortion::Distortion;
pub use error::PipelineError;
pub use gain::Gain;
pub use params::{EffectParameters, Mode, Overrides, MAX_BIT_DEPTH};
pub use pipeline::Pipeline;
pub use preset::stages_for;
pub use quantizer::Quantizer;
pub use rng::NoiseLcg;
pub use shaper::{PulseShaper, SquareShaper};
pub use stage::Stage;
pub use tremolo::Tremolo;
