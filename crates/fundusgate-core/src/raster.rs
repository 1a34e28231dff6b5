use image::{imageops::FilterType, DynamicImage};
use ndarray::Array2;

use crate::consts::{LUMINANCE_B, LUMINANCE_G, LUMINANCE_R};

/// A decoded upload, normalized to the fixed working canvas.
///
/// All planes are f32 in [0.0, 1.0] (hue excepted, see below), row-major,
/// shape = (height, width), and describe the same spatial content. A raster
/// is built once per validation call and never mutated afterward.
#[derive(Clone, Debug)]
pub struct NormalizedRaster {
    pub red: Array2<f32>,
    pub green: Array2<f32>,
    pub blue: Array2<f32>,
    /// BT.601 luminance derived from the color planes.
    pub gray: Array2<f32>,
    /// HSV hue in degrees [0.0, 360.0). Achromatic pixels carry hue 0.
    pub hue: Array2<f32>,
}

impl NormalizedRaster {
    /// Resample a decoded image to `side`x`side` and derive the grayscale
    /// and hue planes. The resampling filter is bilinear; the screens are
    /// tolerant of the exact choice.
    pub fn from_image(img: &DynamicImage, side: u32) -> Self {
        let resized = img.resize_exact(side, side, FilterType::Triangle);
        let rgb = resized.to_rgb8();
        let (w, h) = (side as usize, side as usize);

        let mut red = Array2::<f32>::zeros((h, w));
        let mut green = Array2::<f32>::zeros((h, w));
        let mut blue = Array2::<f32>::zeros((h, w));

        for (x, y, pixel) in rgb.enumerate_pixels() {
            let (row, col) = (y as usize, x as usize);
            red[[row, col]] = pixel[0] as f32 / 255.0;
            green[[row, col]] = pixel[1] as f32 / 255.0;
            blue[[row, col]] = pixel[2] as f32 / 255.0;
        }

        Self::from_planes(red, green, blue)
    }

    /// Build a raster from color planes already on the working canvas,
    /// deriving the grayscale and hue planes.
    ///
    /// # Panics
    /// Panics if the planes disagree on shape.
    pub fn from_planes(red: Array2<f32>, green: Array2<f32>, blue: Array2<f32>) -> Self {
        assert_eq!(red.dim(), green.dim());
        assert_eq!(red.dim(), blue.dim());

        let (h, w) = red.dim();
        let mut gray = Array2::<f32>::zeros((h, w));
        let mut hue = Array2::<f32>::zeros((h, w));
        for row in 0..h {
            for col in 0..w {
                let r = red[[row, col]];
                let g = green[[row, col]];
                let b = blue[[row, col]];
                gray[[row, col]] = LUMINANCE_R * r + LUMINANCE_G * g + LUMINANCE_B * b;
                hue[[row, col]] = hue_degrees(r, g, b);
            }
        }

        Self {
            red,
            green,
            blue,
            gray,
            hue,
        }
    }

    pub fn width(&self) -> usize {
        self.gray.ncols()
    }

    pub fn height(&self) -> usize {
        self.gray.nrows()
    }

    /// Geometric center of the canvas, (cx, cy) in pixel coordinates.
    pub fn center(&self) -> (f32, f32) {
        (self.width() as f32 / 2.0, self.height() as f32 / 2.0)
    }
}

/// HSV hue of an RGB triple, in degrees [0.0, 360.0).
fn hue_degrees(r: f32, g: f32, b: f32) -> f32 {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;
    if delta <= f32::EPSILON {
        return 0.0;
    }

    let h = if max == r {
        60.0 * (((g - b) / delta) % 6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}
