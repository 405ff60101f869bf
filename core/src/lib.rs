// core holds the seeded hashing, the gradient-noise kernels and the field
// combinator algebra
pub mod hash;
pub mod math;
pub mod noise2;
pub mod noise3;
pub mod opensimplex;
pub mod opensimplex2;
pub mod opensimplex3;
pub mod perlin;
pub mod perlin2;
pub mod perlin3;

pub use noise2::Noise2D;
pub use noise3::Noise3D;
pub use opensimplex2::OpenSimplex2D;
pub use opensimplex3::OpenSimplex3D;
pub use perlin2::{Perlin2D, RepetitivePerlin2D};
pub use perlin3::{Perlin3D, RepetitivePerlin3D};

use thiserror::Error;

// Rejected constructor parameters. Sampling itself is total and never
// fails; the only thing that can go wrong is building a generator from
// parameters that would make its output undefined.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NoiseError {
    #[error("coordinate scale must be positive, got {0}")]
    NonPositiveScale(f64),
    #[error("repeat period must be positive, got {0}")]
    NonPositivePeriod(i32),
}

// Shared constructor validation. A NaN scale compares false and is
// rejected along with zero and negatives.
pub(crate) fn check_scale(scale: f64) -> Result<f64, NoiseError> {
    if scale > 0.0 {
        Ok(scale)
    } else {
        Err(NoiseError::NonPositiveScale(scale))
    }
}

pub(crate) fn check_period(repeat: i32) -> Result<i64, NoiseError> {
    if repeat > 0 {
        Ok(repeat as i64)
    } else {
        Err(NoiseError::NonPositivePeriod(repeat))
    }
}
