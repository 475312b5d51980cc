//! Pipeline assembly and execution.

use crate::buffer::SampleBuffer;
use crate::clipper::Clipper;
use crate::error::PipelineError;
use crate::params::EffectParameters;
use crate::preset;
use crate::stage::Stage;

/// A ready-to-run degradation pipeline.
///
/// Holds the ordered stage list for one mode plus the closing clipper and
/// the output metadata to stamp. One pipeline performs one synchronous
/// conversion: it owns no shared state, has no suspension points, and runs
/// each stage over the whole buffer before the next starts.
///
/// # Example
///
/// ```rust
/// use ochobit_core::{EffectParameters, Mode, Overrides, Pipeline, SampleBuffer};
///
/// let params = EffectParameters::resolve(Mode::Chiptune, &Overrides::default()).unwrap();
/// let mut pipeline = Pipeline::for_params(&params, 42);
///
/// let input = SampleBuffer::new(vec![1000, -1000, 500, -500], 1, 11025, 2);
/// let output = pipeline.run(&input).unwrap();
/// assert_eq!(output.len(), input.len());
/// assert_eq!(output.sample_width, 2);
/// ```
pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
    clipper: Clipper,
    target_rate: u32,
    output_width: u16,
}

impl Pipeline {
    /// Build a pipeline for resolved parameters.
    ///
    /// The seed feeds the distortion stage's noise generator; pipelines
    /// built from equal parameters and seeds produce identical output.
    pub fn for_params(params: &EffectParameters, seed: u64) -> Self {
        Self {
            stages: preset::stages_for(params, seed),
            clipper: Clipper::for_bit_depth(params.bit_depth),
            target_rate: params.sample_rate,
            output_width: params.output_width(),
        }
    }

    /// Names of the stages in execution order (clipper excluded).
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|s| s.name()).collect()
    }

    /// Run the pipeline over an input buffer.
    ///
    /// The input must already be conformed to the target sample rate; the
    /// pipeline only stamps the rate into the output metadata. Invariants
    /// are checked before anything is copied or mutated, so a failed call
    /// leaves the caller's buffer untouched and returns no partial result.
    pub fn run(&mut self, input: &SampleBuffer) -> Result<SampleBuffer, PipelineError> {
        input.validate()?;

        let mut work: Vec<f64> = input.samples.iter().map(|&s| f64::from(s)).collect();
        for stage in &mut self.stages {
            stage.process(&mut work);
        }
        let samples = self.clipper.finish(&work);

        Ok(SampleBuffer::new(
            samples,
            input.channels,
            self.target_rate,
            self.output_width,
        ))
    }
}
