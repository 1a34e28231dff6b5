use ndarray::Array2;

/// Sobel gradient field of a grayscale plane.
///
/// `magnitude` is reported on the 8-bit scale (input values in [0, 1]
/// multiplied by 255) so edge thresholds stay in the units the detector
/// was tuned with. `direction` is `atan2(gy, gx)` in radians.
pub struct GradientField {
    pub magnitude: Array2<f32>,
    pub direction: Array2<f32>,
}

/// 3x3 Sobel derivatives. Border pixels are left at zero magnitude; the
/// circles of interest never touch the canvas border.
pub fn sobel(data: &Array2<f32>) -> GradientField {
    let (h, w) = data.dim();
    let mut magnitude = Array2::<f32>::zeros((h, w));
    let mut direction = Array2::<f32>::zeros((h, w));

    if h < 3 || w < 3 {
        return GradientField {
            magnitude,
            direction,
        };
    }

    for row in 1..h - 1 {
        for col in 1..w - 1 {
            let tl = data[[row - 1, col - 1]];
            let tc = data[[row - 1, col]];
            let tr = data[[row - 1, col + 1]];
            let ml = data[[row, col - 1]];
            let mr = data[[row, col + 1]];
            let bl = data[[row + 1, col - 1]];
            let bc = data[[row + 1, col]];
            let br = data[[row + 1, col + 1]];

            let gx = (tr + 2.0 * mr + br) - (tl + 2.0 * ml + bl);
            let gy = (bl + 2.0 * bc + br) - (tl + 2.0 * tc + tr);

            magnitude[[row, col]] = (gx * gx + gy * gy).sqrt() * 255.0;
            direction[[row, col]] = gy.atan2(gx);
        }
    }

    GradientField {
        magnitude,
        direction,
    }
}
