use crate::hash;
use crate::noise2::Noise2D;
use crate::perlin;
use crate::{NoiseError, check_period, check_scale};

// 2D Perlin generator: a seed and a per-axis coordinate scale bound to the
// gradient kernel. Input coordinates are divided by the scale, so a larger
// scale means larger features.
#[derive(Clone, Copy, Debug)]
pub struct Perlin2D {
    seed: i64,
    scale_x: f64,
    scale_y: f64,
}

impl Perlin2D {
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

impl Noise2D for Perlin2D {
    fn generate(&self, x: f64, y: f64) -> f64 {
        let x = x / self.scale_x;
        let y = y / self.scale_y;
        perlin::compute2(x, y, |xi, yi| hash::hash2i(self.seed, xi, yi))
    }
}

// Tileable variant: lattice coordinates are wrapped modulo the repeat
// period before hashing, which makes the field exactly periodic with
// period repeat * scale along each input axis.
#[derive(Clone, Copy, Debug)]
pub struct RepetitivePerlin2D {
    seed: i64,
    scale_x: f64,
    scale_y: f64,
    repeat_x: i64,
    repeat_y: i64,
}

impl RepetitivePerlin2D {
    pub fn new(seed: i64, repeat: i32) -> Result<Self, NoiseError> {
        Self::with_axis_scales(seed, 1.0, 1.0, repeat, repeat)
    }

    pub fn with_scale(seed: i64, scale: f64, repeat: i32) -> Result<Self, NoiseError> {
        Self::with_axis_scales(seed, scale, scale, repeat, repeat)
    }

    pub fn with_axis_scales(
        seed: i64,
        scale_x: f64,
        scale_y: f64,
        repeat_x: i32,
        repeat_y: i32,
    ) -> Result<Self, NoiseError> {
        Ok(Self {
            seed,
            scale_x: check_scale(scale_x)?,
            scale_y: check_scale(scale_y)?,
            repeat_x: check_period(repeat_x)?,
            repeat_y: check_period(repeat_y)?,
        })
    }
}

impl Noise2D for RepetitivePerlin2D {
    fn generate(&self, x: f64, y: f64) -> f64 {
        let x = x / self.scale_x;
        let y = y / self.scale_y;
        perlin::compute2(x, y, |xi, yi| {
            // Euclidean remainder keeps the wrap in [0, repeat) on both
            // sides of zero, so the period holds at negative coordinates.
            hash::hash2i(
                self.seed,
                xi.rem_euclid(self.repeat_x),
                yi.rem_euclid(self.repeat_y),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::NoiseError;

    #[test]
    fn perlin2_determinism() {
        let p1 = Perlin2D::new(1234);
        let p2 = Perlin2D::new(1234);
        // Same seed + params => same output
        assert_eq!(p1.generate(10.5, -3.7), p2.generate(10.5, -3.7));
        assert_eq!(p1.generate(1000000.5, 0.5), p2.generate(1000000.5, 0.5));
    }

    #[test]
    fn perlin2_seeds_differ() {
        let a = Perlin2D::new(0);
        let b = Perlin2D::new(1);
        let pts = [(0.5, 0.5), (2.3, -1.7), (-9.9, 14.2)];
        let sa: Vec<f64> = pts.iter().map(|&(x, y)| a.generate(x, y)).collect();
        let sb: Vec<f64> = pts.iter().map(|&(x, y)| b.generate(x, y)).collect();
        assert_ne!(sa, sb);
    }

    #[test]
    fn perlin2_range() {
        let p = Perlin2D::new(0);
        for i in 0..150 {
            for j in 0..150 {
                let v = p.generate(i as f64 * 0.21 - 15.0, j as f64 * 0.17 - 12.0);
                assert!(v.abs() <= 1.0 + 1e-9, "out of range: {}", v);
            }
        }
        // Far-out coordinates still behave.
        let far = p.generate(1000000.5, 0.5);
        assert!(far.abs() <= 1.0 + 1e-9);
    }

    #[test]
    fn perlin2_scale_zooms() {
        let fine = Perlin2D::new(8);
        let coarse = Perlin2D::with_scale(8, 4.0).unwrap();
        // Scaling divides the input, so the coarse field at 4x equals the
        // fine field at 1x.
        assert_eq!(coarse.generate(4.4, -8.8), fine.generate(1.1, -2.2));
    }

    #[test]
    fn perlin2_rejects_bad_scale() {
        assert_eq!(
            Perlin2D::with_scale(0, 0.0).unwrap_err(),
            NoiseError::NonPositiveScale(0.0)
        );
        assert!(Perlin2D::with_axis_scales(0, 1.0, -2.0).is_err());
        assert!(Perlin2D::with_scale(0, f64::NAN).is_err());
    }

    #[test]
    fn repetitive_perlin2_periodicity() {
        let n = RepetitivePerlin2D::new(4242, 8).unwrap();
        // Dyadic sample positions make the comparison exact: the wrap is
        // integer modulo and the fractional offsets are identical bits.
        let mut x = -40.0;
        while x < 40.0 {
            assert_eq!(n.generate(x, 3.25), n.generate(x + 8.0, 3.25), "x = {}", x);
            assert_eq!(n.generate(3.25, x), n.generate(3.25, x + 8.0), "y = {}", x);
            x += 0.25;
        }
    }

    #[test]
    fn repetitive_perlin2_period_scales_with_scale() {
        let n = RepetitivePerlin2D::with_scale(7, 0.5, 8).unwrap();
        // Input-space period is repeat * scale = 4.
        assert_eq!(n.generate(0.25, 0.75), n.generate(4.25, 0.75));
        assert_eq!(n.generate(-3.5, 0.75), n.generate(0.5, 0.75));
    }

    #[test]
    fn repetitive_perlin2_axis_periods() {
        let n = RepetitivePerlin2D::with_axis_scales(7, 1.0, 1.0, 4, 16).unwrap();
        assert_eq!(n.generate(1.5, 2.5), n.generate(5.5, 2.5));
        assert_eq!(n.generate(1.5, 2.5), n.generate(1.5, 18.5));
    }

    #[test]
    fn repetitive_perlin2_range() {
        let n = RepetitivePerlin2D::new(5, 4).unwrap();
        for i in -60..60 {
            for j in -60..60 {
                let v = n.generate(i as f64 * 0.35, j as f64 * 0.35);
                assert!(v.abs() <= 1.0 + 1e-9);
            }
        }
    }

    #[test]
    fn repetitive_perlin2_rejects_bad_period() {
        assert_eq!(
            RepetitivePerlin2D::new(0, 0).unwrap_err(),
            NoiseError::NonPositivePeriod(0)
        );
        assert!(RepetitivePerlin2D::new(0, -8).is_err());
        assert!(RepetitivePerlin2D::with_scale(0, -1.0, 8).is_err());
    }
}
