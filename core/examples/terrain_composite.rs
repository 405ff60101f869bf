use core::{Noise2D, OpenSimplex2D, Perlin2D, noise2};
use image::{Rgb, RgbImage};
use palette::{Gradient, LinSrgb};
use std::path::Path;

// Builds a layered composite field out of the combinator algebra and
// colors it through a palette gradient.
fn main() {
    let size = 512;

    // Broad continents from fractal Perlin, sharper ridges from fractal
    // OpenSimplex, folded together by keeping the higher shape.
    let continents = Perlin2D::with_scale(2025, 160.0).unwrap().fractal(5);
    let ridges = OpenSimplex2D::with_scale(2077, 96.0)
        .unwrap()
        .fractal(3)
        .multiply(0.6);
    let height = noise2::combine(
        |values| values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        vec![Box::new(continents), Box::new(ridges)],
    );

    // Sample and track the value range
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut data = vec![vec![0.0f64; size]; size];
    for y in 0..size {
        for x in 0..size {
            let v = height.generate(x as f64, y as f64);
            data[y][x] = v;
            min = min.min(v);
            max = max.max(v);
        }
    }

    // Deep water through sand, grass, rock and snow
    let gradient = Gradient::with_domain(vec![
        (0.00, LinSrgb::new(0.0, 0.0, 0.5)),
        (0.35, LinSrgb::new(0.8, 0.8, 0.5)),
        (0.55, LinSrgb::new(0.1, 0.6, 0.2)),
        (0.78, LinSrgb::new(0.5, 0.4, 0.3)),
        (1.00, LinSrgb::new(1.0, 1.0, 1.0)),
    ]);

    let mut img = RgbImage::new(size as u32, size as u32);
    for y in 0..size {
        for x in 0..size {
            let norm = if (max - min).abs() < f64::EPSILON {
                0.5
            } else {
                (data[y][x] - min) / (max - min)
            };
            let col: LinSrgb = gradient.get(norm as f32);
            let rgb = col.into_format::<u8>();
            img.put_pixel(x as u32, y as u32, Rgb([rgb.red, rgb.green, rgb.blue]));
        }
    }

    let path = Path::new("terrain_composite.png");
    img.save(path).unwrap();
    println!("Saved composite terrain to {:?}", path);
}
