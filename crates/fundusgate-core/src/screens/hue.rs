use tracing::debug;

use crate::gate::GateConfig;
use crate::metrics::{keys, MetricSet};
use crate::raster::NormalizedRaster;
use crate::verdict::RejectReason;

/// Retinal-hue screen: retinal tissue is warm-colored.
///
/// ROP images can be extremely hazy pink/orange/gray, so the bar is as
/// low as it goes: only an image with essentially zero red/orange pixels
/// is rejected. Achromatic pixels carry hue 0 and therefore count as
/// warm, which keeps pale grayscale-leaning fundus photos admissible.
pub fn retinal_hue_screen(
    raster: &NormalizedRaster,
    config: &GateConfig,
    metrics: &mut MetricSet,
) -> Option<RejectReason> {
    let total = raster.hue.len();
    let warm = raster
        .hue
        .iter()
        .filter(|&&h| h < config.red_orange_hue_max_deg)
        .count();
    let red_orange_fraction = warm as f32 / total as f32;
    metrics.record(keys::RED_ORANGE_FRACTION, red_orange_fraction as f64);
    debug!(red_orange_fraction, "retinal-hue screen");

    if red_orange_fraction <= config.red_orange_min {
        return Some(RejectReason::NoRetinalColor);
    }

    None
}
