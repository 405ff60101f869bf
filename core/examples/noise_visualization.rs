use core::{Noise2D, Noise3D, OpenSimplex2D, Perlin2D, Perlin3D};
use image::{GrayImage, Luma};
use std::path::Path;

fn save_field2d<N: Noise2D>(field: &N, size: usize, filename: &str) {
    let mut img = GrayImage::new(size as u32, size as u32);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut data = vec![vec![0.0f64; size]; size];

    // Sample the field at pixel coordinates
    for y in 0..size {
        for x in 0..size {
            let v = field.generate(x as f64, y as f64);
            data[y][x] = v;
            min = min.min(v);
            max = max.max(v);
        }
    }

    // Write image, stretched over the sampled range
    for y in 0..size {
        for x in 0..size {
            let v = data[y][x];
            let norm = if (max - min).abs() < f64::EPSILON {
                0.5
            } else {
                (v - min) / (max - min)
            };
            let gray = (norm * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn save_perlin3d_slice(size: usize, slice_z: f64, filename: &str) {
    let field = Perlin3D::with_scale(42, 24.0).unwrap();
    let mut img = GrayImage::new(size as u32, size as u32);
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut data = vec![vec![0.0f64; size]; size];

    for y in 0..size {
        for x in 0..size {
            let v = field.generate(x as f64, y as f64, slice_z);
            data[y][x] = v;
            min = min.min(v);
            max = max.max(v);
        }
    }
    for y in 0..size {
        for x in 0..size {
            let v = data[y][x];
            let norm = if (max - min).abs() < f64::EPSILON {
                0.5
            } else {
                (v - min) / (max - min)
            };
            let gray = (norm * 255.0).round() as u8;
            img.put_pixel(x as u32, y as u32, Luma([gray]));
        }
    }
    img.save(Path::new(filename)).unwrap();
    println!("Saved {}", filename);
}

fn main() {
    let size = 256;
    // 2D Perlin, plain and with fractal octaves
    let perlin2 = Perlin2D::with_scale(42, 32.0).unwrap();
    save_field2d(&perlin2, size, "perlin2d.png");
    save_field2d(&perlin2.fractal(4), size, "perlin2d_fractal.png");

    // 2D OpenSimplex
    let simplex = OpenSimplex2D::with_scale(42, 32.0).unwrap();
    save_field2d(&simplex, size, "opensimplex2d.png");

    // 3D Perlin slice at z = 128
    save_perlin3d_slice(size, size as f64 / 2.0, "perlin3d_slice.png");
}
