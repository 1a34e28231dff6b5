use tracing::debug;

use crate::consts::BACKGROUND_INTENSITY_CUTOFF;
use crate::gate::GateConfig;
use crate::metrics::{keys, MetricSet};
use crate::raster::NormalizedRaster;
use crate::verdict::RejectReason;

/// Expected fundus-field radius for a raster, in pixels.
pub fn field_radius(raster: &NormalizedRaster, fraction: f32) -> f32 {
    let half = (raster.width().min(raster.height()) as f32) / 2.0;
    (half * fraction).floor()
}

/// Circular-field screen: the lit part of a fundus photo sits inside the
/// camera's circular field of view.
///
/// `circle_overlap` is the fraction of non-background pixels (grayscale
/// above the background cutoff) that fall inside a disk of the expected
/// field radius, centered on the canvas. The threshold is deliberately
/// permissive: only images with essentially no circular structure fail,
/// e.g. rectangular scans of paper. An overlap at or below the minimum is
/// rejected; an image with no qualifying pixels at all (solid black) has
/// overlap 0.0 and is rejected.
pub fn circular_field_screen(
    raster: &NormalizedRaster,
    config: &GateConfig,
    metrics: &mut MetricSet,
) -> Option<RejectReason> {
    let (cx, cy) = raster.center();
    let r = field_radius(raster, config.field_radius_fraction);
    let r2 = r * r;

    let mut lit = 0usize;
    let mut inside = 0usize;
    for ((row, col), &v) in raster.gray.indexed_iter() {
        if v > BACKGROUND_INTENSITY_CUTOFF {
            lit += 1;
            let dx = col as f32 - cx;
            let dy = row as f32 - cy;
            if dx * dx + dy * dy <= r2 {
                inside += 1;
            }
        }
    }

    let circle_overlap = if lit == 0 {
        0.0
    } else {
        inside as f32 / lit as f32
    };
    metrics.record(keys::CIRCLE_OVERLAP, circle_overlap as f64);
    debug!(circle_overlap, lit, "circular-field screen");

    if circle_overlap <= config.circle_overlap_min {
        return Some(RejectReason::NoCircularField);
    }

    None
}
