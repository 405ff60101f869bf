use crate::math::{fade, grad2, grad3, lerp};

// Perlin gradient kernel, parameterized over the lattice hash. The caller
// decides what a lattice coordinate hashes to (a plain seeded hash, or one
// that wraps coordinates first); the kernel only does geometry. That
// indirection is what lets the repetitive generators reuse this code
// unchanged.

// Raw output with unit gradients is bounded by sqrt(n)/2; rescale so the
// documented range is exactly [-1, 1].
const SCALE2: f64 = std::f64::consts::SQRT_2;
const SCALE3: f64 = 1.154_700_538_379_251_5; // 2 / sqrt(3)

pub fn compute2<H>(x: f64, y: f64, hash: H) -> f64
where
    H: Fn(i64, i64) -> u64,
{
    let xs = x.floor();
    let ys = y.floor();
    // Saturating casts: absurdly large inputs collapse onto the edge
    // lattice cell instead of panicking.
    let xi = xs as i64;
    let yi = ys as i64;
    // Fractional offset within the cell
    let xf = x - xs;
    let yf = y - ys;
    let u = fade(xf);
    let v = fade(yf);

    // Dot the corner gradients with the offsets from each corner
    let n00 = grad2(hash(xi, yi), xf, yf);
    let n10 = grad2(hash(xi.wrapping_add(1), yi), xf - 1.0, yf);
    let n01 = grad2(hash(xi, yi.wrapping_add(1)), xf, yf - 1.0);
    let n11 = grad2(
        hash(xi.wrapping_add(1), yi.wrapping_add(1)),
        xf - 1.0,
        yf - 1.0,
    );

    // Bilinear blend over the faded offsets
    let nx0 = lerp(n00, n10, u);
    let nx1 = lerp(n01, n11, u);
    lerp(nx0, nx1, v) * SCALE2
}

pub fn compute3<H>(x: f64, y: f64, z: f64, hash: H) -> f64
where
    H: Fn(i64, i64, i64) -> u64,
{
    let xs = x.floor();
    let ys = y.floor();
    let zs = z.floor();
    let xi = xs as i64;
    let yi = ys as i64;
    let zi = zs as i64;
    let xf = x - xs;
    let yf = y - ys;
    let zf = z - zs;
    let u = fade(xf);
    let v = fade(yf);
    let w = fade(zf);

    let xj = xi.wrapping_add(1);
    let yj = yi.wrapping_add(1);
    let zj = zi.wrapping_add(1);

    let n000 = grad3(hash(xi, yi, zi), xf, yf, zf);
    let n100 = grad3(hash(xj, yi, zi), xf - 1.0, yf, zf);
    let n010 = grad3(hash(xi, yj, zi), xf, yf - 1.0, zf);
    let n110 = grad3(hash(xj, yj, zi), xf - 1.0, yf - 1.0, zf);
    let n001 = grad3(hash(xi, yi, zj), xf, yf, zf - 1.0);
    let n101 = grad3(hash(xj, yi, zj), xf - 1.0, yf, zf - 1.0);
    let n011 = grad3(hash(xi, yj, zj), xf, yf - 1.0, zf - 1.0);
    let n111 = grad3(hash(xj, yj, zj), xf - 1.0, yf - 1.0, zf - 1.0);

    // Trilinear blend: x pairs, then y, then z
    let nx00 = lerp(n000, n100, u);
    let nx10 = lerp(n010, n110, u);
    let nx01 = lerp(n001, n101, u);
    let nx11 = lerp(n011, n111, u);
    let nxy0 = lerp(nx00, nx10, v);
    let nxy1 = lerp(nx01, nx11, v);
    lerp(nxy0, nxy1, w) * SCALE3
}
