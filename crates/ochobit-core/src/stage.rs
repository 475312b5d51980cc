//! The buffer-granular stage trait.

/// One transform in a degradation pipeline.
///
/// Stages mutate a whole `f64` working buffer in place. The buffer is the
/// interleaved sample sequence widened to floats; every stage applies the
/// same transform per sample regardless of channel. Stages may push values
/// outside the representable range — only the final clipper enforces it.
///
/// The trait is object-safe so the preset composer can assemble
/// `Vec<Box<dyn Stage>>` pipelines at runtime.
///
/// # Example
///
/// ```rust
/// use ochobit_core::Stage;
///
/// struct Invert;
///
/// impl Stage for Invert {
///     fn name(&self) -> &'static str {
///         "invert"
///     }
///
///     fn process(&mut self, samples: &mut [f64]) {
///         for s in samples.iter_mut() {
///             *s = -*s;
///         }
///     }
/// }
/// ```
pub trait Stage {
    /// Short stage name for logs and progress reporting.
    fn name(&self) -> &'static str;

    /// Transform the working buffer in place.
    ///
    /// Runs to completion over the whole buffer; there are no suspension
    /// points and no partial application.
    fn process(&mut self, samples: &mut [f64]);
}
