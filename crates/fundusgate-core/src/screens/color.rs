use tracing::debug;

use crate::consts::{SKIN_RATIO_EPSILON, WHITE_INTENSITY_CUTOFF};
use crate::gate::GateConfig;
use crate::metrics::{keys, MetricSet};
use crate::raster::NormalizedRaster;
use crate::verdict::RejectReason;

/// Tissue-color screen: reject skin-toned and glare-dominated images.
///
/// Skin tones carry high red with moderate green, so a green/red ratio
/// near or above 1.0 means the image is not retinal tissue. The glare
/// check catches paper scans and flashlight shots. The skin check runs
/// first; the first failing check wins.
pub fn tissue_color_screen(
    raster: &NormalizedRaster,
    config: &GateConfig,
    metrics: &mut MetricSet,
) -> Option<RejectReason> {
    let mean_r = raster.red.mean().unwrap_or(0.0);
    let mean_g = raster.green.mean().unwrap_or(0.0);
    let skin_ratio = mean_g / (mean_r + SKIN_RATIO_EPSILON);
    metrics.record(keys::SKIN_RATIO, skin_ratio as f64);
    debug!(skin_ratio, "tissue-color screen");

    if skin_ratio > config.skin_ratio_max {
        return Some(RejectReason::SkinLike);
    }

    let total = raster.gray.len();
    let white = raster
        .gray
        .iter()
        .filter(|&&v| v > WHITE_INTENSITY_CUTOFF)
        .count();
    let white_pixels = white as f32 / total as f32;
    metrics.record(keys::WHITE_PIXELS, white_pixels as f64);
    debug!(white_pixels, "glare check");

    if white_pixels > config.white_pixel_max {
        return Some(RejectReason::TooBright);
    }

    None
}
