use crate::hash;
use crate::noise3::Noise3D;
use crate::perlin;
use crate::{NoiseError, check_period, check_scale};

// 3D Perlin generator; same shape as Perlin2D with one more axis.
#[derive(Clone, Copy, Debug)]
pub struct Perlin3D {
    seed: i64,
    scale_x: f64,
    scale_y: f64,
    scale_z: f64,
}

impl Perlin3D {
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

impl Noise3D for Perlin3D {
    fn generate(&self, x: f64, y: f64, z: f64) -> f64 {
        let x = x / self.scale_x;
        let y = y / self.scale_y;
        let z = z / self.scale_z;
        perlin::compute3(x, y, z, |xi, yi, zi| hash::hash3i(self.seed, xi, yi, zi))
    }
}

// Tileable 3D variant: exact period repeat * scale along every axis.
#[derive(Clone, Copy, Debug)]
pub struct RepetitivePerlin3D {
    seed: i64,
    scale_x: f64,
    scale_y: f64,
    scale_z: f64,
    repeat_x: i64,
    repeat_y: i64,
    repeat_z: i64,
}

impl RepetitivePerlin3D {
    pub fn new(seed: i64, repeat: i32) -> Result<Self, NoiseError> {
        Self::with_axis_scales(seed, 1.0, 1.0, 1.0, repeat, repeat, repeat)
    }

    pub fn with_scale(seed: i64, scale: f64, repeat: i32) -> Result<Self, NoiseError> {
        Self::with_axis_scales(seed, scale, scale, scale, repeat, repeat, repeat)
    }

    pub fn with_axis_scales(
        seed: i64,
        scale_x: f64,
        scale_y: f64,
        scale_z: f64,
        repeat_x: i32,
        repeat_y: i32,
        repeat_z: i32,
    ) -> Result<Self, NoiseError> {
        Ok(Self {
            seed,
            scale_x: check_scale(scale_x)?,
            scale_y: check_scale(scale_y)?,
            scale_z: check_scale(scale_z)?,
            repeat_x: check_period(repeat_x)?,
            repeat_y: check_period(repeat_y)?,
            repeat_z: check_period(repeat_z)?,
        })
    }
}

impl Noise3D for RepetitivePerlin3D {
    fn generate(&self, x: f64, y: f64, z: f64) -> f64 {
        let x = x / self.scale_x;
        let y = y / self.scale_y;
        let z = z / self.scale_z;
        perlin::compute3(x, y, z, |xi, yi, zi| {
            hash::hash3i(
                self.seed,
                xi.rem_euclid(self.repeat_x),
                yi.rem_euclid(self.repeat_y),
                zi.rem_euclid(self.repeat_z),
            )
        })
    }
}
