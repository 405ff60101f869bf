use crate::hash;
use crate::noise3::Noise3D;
use crate::opensimplex;
use crate::{NoiseError, check_scale};

// 3D OpenSimplex generator, half-scale kernel input as in 2D.
#[derive(Clone, Copy, Debug)]
pub struct OpenSimplex3D {
    seed: i64,
    scale_x: f64,
    scale_y: f64,
    scale_z: f64,
}

impl OpenSimplex3D {
    pub fn new(seed: i64) -> Self {
        Self {
            seed,
            scale_x: 1.0,
            scale_y: 1.0,
            scale_z: 1.0,
        }
    }

    pub fn with_scale(seed: i64, scale: f64) -> Result<Self, NoiseError> {
        Self::with_axis_scales(seed, scale, scale, scale)
    }

    pub fn with_axis_scales(
        seed: i64,
        scale_x: f64,
        scale_y: f64,
        scale_z: f64,
    ) -> Result<Self, NoiseError> {
        Ok(Self {
            seed,
            scale_x: check_scale(scale_x)?,
            scale_y: check_scale(scale_y)?,
            scale_z: check_scale(scale_z)?,
        })
    }
}

impl Noise3D for OpenSimplex3D {
    fn generate(&self, x: f64, y: f64, z: f64) -> f64 {
        let x = x / self.scale_x;
        let y = y / self.scale_y;
        let z = z / self.scale_z;
        opensimplex::compute3(x / 2.0, y / 2.0, z / 2.0, |xi, yi, zi| {
            hash::hash3i(self.seed, xi, yi, zi)
        })
    }
}
