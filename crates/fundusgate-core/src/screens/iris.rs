use tracing::debug;

use crate::consts::{IRIS_BLUR_SIGMA, IRIS_MAX_RADIUS_FRACTION, IRIS_MIN_RADIUS_FRACTION};
use crate::detect::detect_circles;
use crate::filters::gaussian_blur_array;
use crate::gate::GateConfig;
use crate::metrics::{keys, MetricSet};
use crate::raster::NormalizedRaster;
use crate::verdict::RejectReason;

use super::field::field_radius;

/// Iris-shape screen: a close-up photo of an external eye shows one
/// large, near-perfect circle (the iris) dead center, whereas a fundus
/// image has diffuse, irregular structure.
///
/// The detector searches a narrow band around the expected field radius
/// on a blurred grayscale plane. Only the strongest candidate is tested
/// for centeredness; secondary circles are ignored.
pub fn iris_shape_screen(
    raster: &NormalizedRaster,
    config: &GateConfig,
    metrics: &mut MetricSet,
) -> Option<RejectReason> {
    let r = field_radius(raster, config.field_radius_fraction);
    let blurred = gaussian_blur_array(&raster.gray, IRIS_BLUR_SIGMA);
    let circles = detect_circles(
        &blurred,
        &config.detector,
        r * IRIS_MIN_RADIUS_FRACTION,
        r * IRIS_MAX_RADIUS_FRACTION,
    );
    metrics.record(keys::IRIS_CIRCLES, circles.len() as f64);

    if let Some(strongest) = circles.first() {
        let (cx, cy) = raster.center();
        let off_x = (strongest.x - cx).abs();
        let off_y = (strongest.y - cy).abs();
        debug!(
            x = strongest.x,
            y = strongest.y,
            radius = strongest.radius,
            votes = strongest.votes,
            "iris-shape screen: strongest circle"
        );
        if off_x < config.iris_center_tolerance_px && off_y < config.iris_center_tolerance_px {
            return Some(RejectReason::IrisLike);
        }
    }

    None
}
