use crate::hash;
use crate::math;
use crate::noise2::Noise2D;

// 3D noise field and its combinator algebra; the 3D twin of noise2 plus
// the dimensional lifts that reuse a 2D field along a dropped axis.
pub trait Noise3D {
    fn generate(&self, x: f64, y: f64, z: f64) -> f64;

    fn generate_int(&self, x: i64, y: i64, z: i64) -> f64 {
        self.generate(x as f64, y as f64, z as f64)
    }

    fn generate_multiplied(&self, x: f64, y: f64, z: f64, multiplier: f64) -> f64 {
        self.generate(x, y, z) * multiplier
    }

    fn add(self, amount: f64) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| self.generate(x, y, z) + amount
    }

    fn subtract(self, amount: f64) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| self.generate(x, y, z) - amount
    }

    fn multiply(self, amount: f64) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| self.generate(x, y, z) * amount
    }

    // Division by a zero sample follows IEEE semantics and yields an
    // infinity or NaN rather than failing.
    fn divide(self, amount: f64) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| self.generate(x, y, z) / amount
    }

    fn add_noise<N: Noise3D + Send + Sync>(self, other: N) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| self.generate(x, y, z) + other.generate(x, y, z)
    }

    fn subtract_noise<N: Noise3D + Send + Sync>(self, other: N) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| self.generate(x, y, z) - other.generate(x, y, z)
    }

    fn multiply_noise<N: Noise3D + Send + Sync>(self, other: N) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| self.generate(x, y, z) * other.generate(x, y, z)
    }

    fn divide_noise<N: Noise3D + Send + Sync>(self, other: N) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| self.generate(x, y, z) / other.generate(x, y, z)
    }

    fn inverse(self) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| -self.generate(x, y, z)
    }

    fn lerp(self, min: f64, max: f64) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| math::lerp(min, max, (self.generate(x, y, z) + 1.0) / 2.0)
    }

    fn lerp_noise<Min, Max>(self, min: Min, max: Max) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
        Min: Noise3D + Send + Sync,
        Max: Noise3D + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| {
            math::lerp(
                min.generate(x, y, z),
                max.generate(x, y, z),
                (self.generate(x, y, z) + 1.0) / 2.0,
            )
        }
    }

    fn scale(self, factor: f64) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| self.generate(x * factor, y * factor, z * factor)
    }

    fn scale_axes(self, x: f64, y: f64, z: f64) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x1: f64, y1: f64, z1: f64| self.generate(x1 * x, y1 * y, z1 * z)
    }

    // Domain translation, additive on every axis including z.
    fn translate(self, x: f64, y: f64, z: f64) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x1: f64, y1: f64, z1: f64| self.generate(x1 + x, y1 + y, z1 + z)
    }

    fn fractal(self, octaves: u32) -> impl Noise3D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64, z: f64| {
            let mut n = 0.0;
            let mut m = 1.0;
            for _ in 0..octaves {
                n += self.generate(x / m, y / m, z / m) * m;
                m /= 2.0;
            }
            n
        }
    }
}

impl<F> Noise3D for F
where
    F: Fn(f64, f64, f64) -> f64,
{
    fn generate(&self, x: f64, y: f64, z: f64) -> f64 {
        self(x, y, z)
    }
}

impl Noise3D for Box<dyn Noise3D + Send + Sync> {
    fn generate(&self, x: f64, y: f64, z: f64) -> f64 {
        (**self).generate(x, y, z)
    }
}

pub fn constant(value: f64) -> impl Noise3D {
    move |_: f64, _: f64, _: f64| value
}

// Pure hash field in [-1, 1] over unit cells, coordinates truncated
// toward zero.
pub fn random(seed: i64) -> impl Noise3D {
    move |x: f64, y: f64, z: f64| hash::hash3d(seed, x as i64, y as i64, z as i64) * 2.0 - 1.0
}

pub fn combine<F>(combiner: F, noises: Vec<Box<dyn Noise3D + Send + Sync>>) -> impl Noise3D + Send + Sync
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    move |x: f64, y: f64, z: f64| {
        let values: Vec<f64> = noises.iter().map(|n| n.generate(x, y, z)).collect();
        combiner(&values)
    }
}

// Lift a 2D field into 3D by dropping the X axis.
pub fn from_2d_x<N: Noise2D>(noise: N) -> impl Noise3D {
    move |_x: f64, y: f64, z: f64| noise.generate(y, z)
}

// Lift a 2D field into 3D by dropping the Y axis.
pub fn from_2d_y<N: Noise2D>(noise: N) -> impl Noise3D {
    move |x: f64, _y: f64, z: f64| noise.generate(x, z)
}

// Lift a 2D field into 3D by dropping the Z axis.
pub fn from_2d_z<N: Noise2D + Send + Sync>(noise: N) -> impl Noise3D + Send + Sync {
    move |x: f64, y: f64, _z: f64| noise.generate(x, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{OpenSimplex3D, Perlin2D, Perlin3D, RepetitivePerlin3D};

    const EPS: f64 = 1e-12;

    #[test]
    fn field_arithmetic_roundtrip() {
        let a = Perlin3D::new(11);
        let b = OpenSimplex3D::new(12);
        let c = a.add_noise(b).subtract_noise(b);
        for &(x, y, z) in &[(0.4, 1.6, -2.8), (50.5, -0.5, 7.7)] {
            assert!((c.generate(x, y, z) - a.generate(x, y, z)).abs() < EPS);
        }
    }

    #[test]
    fn inverse_negates() {
        let a = Perlin3D::new(4);
        let inv = a.inverse();
        let (x, y, z) = (1.3, -4.1, 0.9);
        assert!((inv.generate(x, y, z) + a.generate(x, y, z)).abs() < EPS);
    }

    #[test]
    fn lerp_maps_bounds() {
        assert!((constant(-1.0).lerp(-3.0, 3.0).generate(0.0, 0.0, 0.0) + 3.0).abs() < EPS);
        assert!((constant(1.0).lerp(-3.0, 3.0).generate(0.0, 0.0, 0.0) - 3.0).abs() < EPS);
        let bounds = constant(0.0).lerp_noise(constant(-3.0), constant(3.0));
        assert!(bounds.generate(9.0, 9.0, 9.0).abs() < EPS);
    }

    #[test]
    fn translate_is_additive_on_all_axes() {
        let field = |x: f64, y: f64, z: f64| x + 10.0 * y + 100.0 * z;
        let t = field.translate(1.0, 2.0, 3.0);
        assert!((t.generate(0.0, 0.0, 0.0) - 321.0).abs() < EPS);
        // In particular the z offset shifts rather than scales: sampling
        // at z = 0 still sees the offset.
        let zshift = field.translate(0.0, 0.0, 5.0);
        assert!((zshift.generate(0.0, 0.0, 0.0) - 500.0).abs() < EPS);
    }

    #[test]
    fn scale_axes_multiplies_each_axis() {
        let field = |x: f64, y: f64, z: f64| x + 10.0 * y + 100.0 * z;
        let s = field.scale_axes(2.0, 3.0, 4.0);
        assert!((s.generate(1.0, 1.0, 1.0) - 432.0).abs() < EPS);
    }

    #[test]
    fn fractal_layers_octaves() {
        let field = |x: f64, y: f64, z: f64| x + y + z;
        let f = field.fractal(3);
        // (1+1+1)*1 + (2+2+2)*1/2 + (4+4+4)*1/4
        assert!((f.generate(1.0, 1.0, 1.0) - 9.0).abs() < EPS);
    }

    #[test]
    fn combine_keeps_order_and_folds() {
        let fields: Vec<Box<dyn Noise3D + Send + Sync>> = vec![
            Box::new(constant(-4.0)),
            Box::new(constant(2.0)),
        ];
        let spread = combine(|values| values[0] - values[1], fields);
        assert_eq!(spread.generate(1.0, 2.0, 3.0), -6.0);
    }

    #[test]
    fn lifts_drop_one_axis() {
        let plane = |x: f64, y: f64| x + 10.0 * y;
        assert!((from_2d_z(plane).generate(1.0, 2.0, 999.0) - 21.0).abs() < EPS);
        assert!((from_2d_y(plane).generate(1.0, 999.0, 2.0) - 21.0).abs() < EPS);
        assert!((from_2d_x(plane).generate(999.0, 1.0, 2.0) - 21.0).abs() < EPS);
    }

    #[test]
    fn lifted_fields_ignore_the_dropped_axis() {
        let lifted = from_2d_z(Perlin2D::new(21));
        let a = lifted.generate(1.5, 2.5, -100.0);
        let b = lifted.generate(1.5, 2.5, 100.0);
        assert_eq!(a, b);
    }

    #[test]
    fn random_truncates_and_stays_in_range() {
        let r = random(13);
        assert_eq!(r.generate(2.1, -3.9, 4.5), r.generate(2.9, -3.1, 4.9));
        for i in -20..20 {
            let v = r.generate(i as f64 * 1.5, 3.0, -7.0);
            assert!((-1.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn composite_fields_are_send_sync() {
        fn assert_send_sync<T: Send + Sync>(_: &T) {}
        assert_send_sync(&Perlin3D::new(1));
        assert_send_sync(&RepetitivePerlin3D::new(1, 8).unwrap());
        assert_send_sync(&from_2d_z(Perlin2D::new(2)).fractal(2));
    }
}
