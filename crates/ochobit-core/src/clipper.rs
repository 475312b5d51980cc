//! Final clipping and narrowing back to integer samples.

use crate::math::max_val;

/// Hard limiter that closes every pipeline.
///
/// Clamps each working sample into `[-max_val, max_val]` for the target bit
/// depth, then truncates toward zero while narrowing back to integers. This
/// is the only stage that enforces the output range; everything upstream is
/// free to overshoot transiently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Clipper {
    max_val: f64,
}

impl Clipper {
    /// Create a clipper for the given target bit depth.
    pub fn for_bit_depth(bit_depth: u16) -> Self {
        Self {
            max_val: max_val(bit_depth),
        }
    }

    /// Full-scale magnitude the clipper enforces.
    pub fn max_val(&self) -> f64 {
        self.max_val
    }

    /// Clamp and narrow the working buffer into integer samples.
    pub fn finish(&self, samples: &[f64]) -> Vec<i32> {
        samples
            .iter()
            .map(|&s| s.clamp(-self.max_val, self.max_val) as i32)
            .collect()
    }
}
