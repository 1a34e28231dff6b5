use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgb, RgbImage};
use ndarray::Array2;

use fundusgate_core::raster::NormalizedRaster;

/// The working canvas side; synthetic images are built at this size so
/// the resample inside the gate is an identity.
pub const SIDE: u32 = 512;

/// Encode an image as PNG bytes in memory.
pub fn encode_png(img: &RgbImage) -> Vec<u8> {
    let mut buf = Vec::new();
    DynamicImage::ImageRgb8(img.clone())
        .write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("encode png");
    buf
}

/// A solid-color canvas.
pub fn solid(rgb: [u8; 3]) -> RgbImage {
    RgbImage::from_pixel(SIDE, SIDE, Rgb(rgb))
}

/// A colored disk on a black background.
///
/// Pixels within `solid_radius` of `(cx, cy)` carry the full color;
/// between `solid_radius` and `feather_radius` the color fades linearly
/// to black. `feather_radius == solid_radius` gives a hard edge.
pub fn disk(cx: f32, cy: f32, solid_radius: f32, feather_radius: f32, rgb: [u8; 3]) -> RgbImage {
    let mut img = RgbImage::new(SIDE, SIDE);
    for y in 0..SIDE {
        for x in 0..SIDE {
            let d = ((x as f32 - cx).powi(2) + (y as f32 - cy).powi(2)).sqrt();
            let coverage = if d <= solid_radius {
                1.0
            } else if d < feather_radius {
                (feather_radius - d) / (feather_radius - solid_radius)
            } else {
                0.0
            };
            let pixel = [
                (rgb[0] as f32 * coverage).round() as u8,
                (rgb[1] as f32 * coverage).round() as u8,
                (rgb[2] as f32 * coverage).round() as u8,
            ];
            img.put_pixel(x, y, Rgb(pixel));
        }
    }
    img
}

/// A raster built from uniform color planes, skipping encode/decode.
pub fn uniform_raster(r: f32, g: f32, b: f32) -> NormalizedRaster {
    let side = SIDE as usize;
    NormalizedRaster::from_planes(
        Array2::from_elem((side, side), r),
        Array2::from_elem((side, side), g),
        Array2::from_elem((side, side), b),
    )
}
