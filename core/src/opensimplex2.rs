use crate::hash;
use crate::noise2::Noise2D;
use crate::opensimplex;
use crate::{NoiseError, check_scale};

// 2D OpenSimplex generator. The kernel runs at half the scaled input so
// its feature size lines up with the Perlin generators for the same scale
// settings.
#[derive(Clone, Copy, Debug)]
pub struct OpenSimplex2D {
    seed: i64,
    scale_x: f64,
    scale_y: f64,
}

impl OpenSimplex2D {
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    pub fn with_scale(seed: i64, scale: f64) -> Result<Self, NoiseError> {
        Self::with_axis_scales(seed, scale, scale)
    }

    pub fn with_axis_scales(seed: i64, scale_x: f64, scale_y: f64) -> Result<Self, NoiseError> {
        Ok(Self {
            seed,
            scale_x: check_scale(scale_x)?,
            scale_y: check_scale(scale_y)?,
        })
    }
}

impl Noise2D for OpenSimplex2D {
    fn generate(&self, x: f64, y: f64) -> f64 {
        let x = x / self.scale_x;
        let y = y / self.scale_y;
        opensimplex::compute2(x / 2.0, y / 2.0, |xi, yi| hash::hash2i(self.seed, xi, yi))
    }
}
