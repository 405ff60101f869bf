use crate::hash;
use crate::math;

// A 2D noise field: anything mapping two coordinates to one scalar.
// Combinators consume the receiver and hand back a new field, so composite
// fields stack the way iterator adapters do; nothing is ever mutated and
// sampling a composite stays pure.
pub trait Noise2D {
    // Sample the field at (x, y).
    fn generate(&self, x: f64, y: f64) -> f64;

    // Integer coordinates are widened and sampled as-is.
    fn generate_int(&self, x: i64, y: i64) -> f64 {
        self.generate(x as f64, y as f64)
    }

    fn generate_multiplied(&self, x: f64, y: f64, multiplier: f64) -> f64 {
        self.generate(x, y) * multiplier
    }

    fn add(self, amount: f64) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| self.generate(x, y) + amount
    }

    fn subtract(self, amount: f64) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| self.generate(x, y) - amount
    }

    fn multiply(self, amount: f64) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| self.generate(x, y) * amount
    }

    // Division by a zero sample follows IEEE semantics and yields an
    // infinity or NaN rather than failing.
    fn divide(self, amount: f64) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| self.generate(x, y) / amount
    }

    fn add_noise<N: Noise2D + Send + Sync>(self, other: N) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| self.generate(x, y) + other.generate(x, y)
    }

    fn subtract_noise<N: Noise2D + Send + Sync>(self, other: N) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| self.generate(x, y) - other.generate(x, y)
    }

    fn multiply_noise<N: Noise2D + Send + Sync>(self, other: N) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| self.generate(x, y) * other.generate(x, y)
    }

    fn divide_noise<N: Noise2D + Send + Sync>(self, other: N) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| self.generate(x, y) / other.generate(x, y)
    }

    fn inverse(self) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| -self.generate(x, y)
    }

    // Remap the native [-1, 1] range onto [min, max].
    fn lerp(self, min: f64, max: f64) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| math::lerp(min, max, (self.generate(x, y) + 1.0) / 2.0)
    }

    // Same remap, but the bounds are fields themselves.
    fn lerp_noise<Min, Max>(self, min: Min, max: Max) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
        Min: Noise2D + Send + Sync,
        Max: Noise2D + Send + Sync,
    {
        move |x: f64, y: f64| {
            math::lerp(
                min.generate(x, y),
                max.generate(x, y),
                (self.generate(x, y) + 1.0) / 2.0,
            )
        }
    }

    // Domain scaling: the input coordinates are multiplied before
    // delegating, stretching or shrinking the field.
    fn scale(self, factor: f64) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| self.generate(x * factor, y * factor)
    }

    fn scale_axes(self, x: f64, y: f64) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x1: f64, y1: f64| self.generate(x1 * x, y1 * y)
    }

    // Domain translation, additive on every axis.
    fn translate(self, x: f64, y: f64) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x1: f64, y1: f64| self.generate(x1 + x, y1 + y)
    }

    // Fractal octave sum: octave i samples at 2^i times the frequency with
    // 2^-i times the weight, so detail layers in without unbounded growth.
    fn fractal(self, octaves: u32) -> impl Noise2D + Send + Sync
    where
        Self: Sized + Send + Sync,
    {
        move |x: f64, y: f64| {
            let mut n = 0.0;
            let mut m = 1.0;
            for _ in 0..octaves {
                n += self.generate(x / m, y / m) * m;
                m /= 2.0;
            }
            n
        }
    }
}

// Any plain closure over two coordinates is a field. This is what the
// combinators above return.
impl<F> Noise2D for F
where
    F: Fn(f64, f64) -> f64,
{
    fn generate(&self, x: f64, y: f64) -> f64 {
        self(x, y)
    }
}

// Boxed fields sample through the box, so heterogeneous collections of
// fields compose like any other.
impl Noise2D for Box<dyn Noise2D + Send + Sync> {
    fn generate(&self, x: f64, y: f64) -> f64 {
        (**self).generate(x, y)
    }
}

// A field that ignores its coordinates.
pub fn constant(value: f64) -> impl Noise2D {
    move |_: f64, _: f64| value
}

// Pure hash field in [-1, 1]: no gradients, no interpolation, a new value
// in every unit cell. Coordinates are truncated toward zero.
pub fn random(seed: i64) -> impl Noise2D {
    move |x: f64, y: f64| hash::hash2d(seed, x as i64, y as i64) * 2.0 - 1.0
}

// Sample every field at the same point and fold the values, in the order
// the fields were supplied, through the caller's reducer.
pub fn combine<F>(combiner: F, noises: Vec<Box<dyn Noise2D + Send + Sync>>) -> impl Noise2D + Send + Sync
where
    F: Fn(&[f64]) -> f64 + Send + Sync,
{
    move |x: f64, y: f64| {
        let values: Vec<f64> = noises.iter().map(|n| n.generate(x, y)).collect();
        combiner(&values)
    }
}
