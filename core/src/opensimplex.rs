use crate::math::{grad2, grad3};

// OpenSimplex-style kernel on the skewed simplex lattice. Like the Perlin
// kernel it is a pure function of the coordinates and a lattice hash, so
// any hash source produces correct behavior.

// 2D skew/unskew factors
const F2: f64 = 0.366_025_403_784_438_65; // (sqrt(3) - 1) / 2
const G2: f64 = 0.211_324_865_405_187_12; // (3 - sqrt(3)) / 6
// 3D skew/unskew factors
const F3: f64 = 1.0 / 3.0;
const G3: f64 = 1.0 / 6.0;

// Influence radius: corners at squared distance >= 0.5 contribute exactly
// zero. 0.5 is the largest radius for which a corner's influence dies out
// before the corner traversal changes, so the field stays seamless across
// simplex boundaries.
const RADIUS_SQ: f64 = 0.5;

// A single corner term (0.5 - d^2)^4 * (g . d) with a unit gradient peaks
// at d^2 = 1/18, about 0.0091982. Dividing the sum by corner count times
// that keeps the result inside [-1, 1] for any hash.
const NORM2: f64 = 0.0276;
const NORM3: f64 = 0.0368;

pub fn compute2<H>(x: f64, y: f64, hash: H) -> f64
where
    H: Fn(i64, i64) -> u64,
{
    // Skew onto the triangular lattice and find the containing cell
    let s = (x + y) * F2;
    let i = (x + s).floor();
    let j = (y + s).floor();
    // Unskew the cell origin and take the offset from it
    let t = (i + j) * G2;
    let x0 = x - (i - t);
    let y0 = y - (j - t);

    // Which of the cell's two triangles holds the point decides the
    // middle corner of the traversal.
    let (i1, j1) = if x0 > y0 { (1_i64, 0_i64) } else { (0, 1) };

    let x1 = x0 - i1 as f64 + G2;
    let y1 = y0 - j1 as f64 + G2;
    let x2 = x0 - 1.0 + 2.0 * G2;
    let y2 = y0 - 1.0 + 2.0 * G2;

    let ii = i as i64;
    let jj = j as i64;

    let mut n = 0.0;

    let a0 = RADIUS_SQ - x0 * x0 - y0 * y0;
    if a0 > 0.0 {
        let a = a0 * a0;
        n += a * a * grad2(hash(ii, jj), x0, y0);
    }
    let a1 = RADIUS_SQ - x1 * x1 - y1 * y1;
    if a1 > 0.0 {
        let a = a1 * a1;
        n += a * a * grad2(hash(ii.wrapping_add(i1), jj.wrapping_add(j1)), x1, y1);
    }
    let a2 = RADIUS_SQ - x2 * x2 - y2 * y2;
    if a2 > 0.0 {
        let a = a2 * a2;
        n += a * a * grad2(hash(ii.wrapping_add(1), jj.wrapping_add(1)), x2, y2);
    }

    n / NORM2
}

pub fn compute3<H>(x: f64, y: f64, z: f64, hash: H) -> f64
where
    H: Fn(i64, i64, i64) -> u64,
{
    let s = (x + y + z) * F3;
    let i = (x + s).floor();
    let j = (y + s).floor();
    let k = (z + s).floor();
    let t = (i + j + k) * G3;
    let x0 = x - (i - t);
    let y0 = y - (j - t);
    let z0 = z - (k - t);

    // Rank the fractional coordinates to pick the two intermediate corners
    // of the simplex traversal. The comparisons are fixed, so identical
    // inputs always walk identical corners.
    let (i1, j1, k1, i2, j2, k2) = if x0 >= y0 {
        if y0 >= z0 {
            (1_i64, 0_i64, 0_i64, 1_i64, 1_i64, 0_i64)
        } else if x0 >= z0 {
            (1, 0, 0, 1, 0, 1)
        } else {
            (0, 0, 1, 1, 0, 1)
        }
    } else if y0 < z0 {
        (0, 0, 1, 0, 1, 1)
    } else if x0 < z0 {
        (0, 1, 0, 0, 1, 1)
    } else {
        (0, 1, 0, 1, 1, 0)
    };

    let x1 = x0 - i1 as f64 + G3;
    let y1 = y0 - j1 as f64 + G3;
    let z1 = z0 - k1 as f64 + G3;
    let x2 = x0 - i2 as f64 + 2.0 * G3;
    let y2 = y0 - j2 as f64 + 2.0 * G3;
    let z2 = z0 - k2 as f64 + 2.0 * G3;
    let x3 = x0 - 1.0 + 3.0 * G3;
    let y3 = y0 - 1.0 + 3.0 * G3;
    let z3 = z0 - 1.0 + 3.0 * G3;

    let ii = i as i64;
    let jj = j as i64;
    let kk = k as i64;

    let mut n = 0.0;

    let a0 = RADIUS_SQ - x0 * x0 - y0 * y0 - z0 * z0;
    if a0 > 0.0 {
        let a = a0 * a0;
        n += a * a * grad3(hash(ii, jj, kk), x0, y0, z0);
    }
    let a1 = RADIUS_SQ - x1 * x1 - y1 * y1 - z1 * z1;
    if a1 > 0.0 {
        let a = a1 * a1;
        n += a * a
            * grad3(
                hash(ii.wrapping_add(i1), jj.wrapping_add(j1), kk.wrapping_add(k1)),
                x1,
                y1,
                z1,
            );
    }
    let a2 = RADIUS_SQ - x2 * x2 - y2 * y2 - z2 * z2;
    if a2 > 0.0 {
        let a = a2 * a2;
        n += a * a
            * grad3(
                hash(ii.wrapping_add(i2), jj.wrapping_add(j2), kk.wrapping_add(k2)),
                x2,
                y2,
                z2,
            );
    }
    let a3 = RADIUS_SQ - x3 * x3 - y3 * y3 - z3 * z3;
    if a3 > 0.0 {
        let a = a3 * a3;
        n += a * a
            * grad3(
                hash(ii.wrapping_add(1), jj.wrapping_add(1), kk.wrapping_add(1)),
                x3,
                y3,
                z3,
            );
    }

    n / NORM3
}
