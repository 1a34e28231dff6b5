use serde::{Deserialize, Serialize};

use crate::consts::{
    CANVAS_SIDE, DEFAULT_CIRCLE_OVERLAP_MIN, DEFAULT_FIELD_RADIUS_FRACTION,
    DEFAULT_IRIS_CENTER_TOLERANCE_PX, DEFAULT_RED_ORANGE_HUE_MAX_DEG, DEFAULT_RED_ORANGE_MIN,
    DEFAULT_SKIN_RATIO_MAX, DEFAULT_WHITE_PIXEL_MAX,
};
use crate::detect::CircleDetectorConfig;

/// Thresholds and tuning for the admissibility gate.
///
/// The defaults are calibrated for neonatal ROP screening: accept every
/// plausible fundus photo, however hazy, and reject only obvious
/// non-fundus uploads (skin, paper, external eye photos). Pixel-count
/// thresholds assume the 512x512 working canvas.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GateConfig {
    /// Side length of the square working canvas.
    #[serde(default = "default_canvas_side")]
    pub canvas_side: u32,
    /// Reject as skin-like when mean_green / mean_red exceeds this
    /// (strictly greater; a ratio exactly at the threshold passes).
    #[serde(default = "default_skin_ratio_max")]
    pub skin_ratio_max: f32,
    /// Reject as glare when the white-pixel fraction exceeds this
    /// (strictly greater).
    #[serde(default = "default_white_pixel_max")]
    pub white_pixel_max: f32,
    /// Fundus-field radius as a fraction of the half-canvas.
    #[serde(default = "default_field_radius_fraction")]
    pub field_radius_fraction: f32,
    /// Reject when the fraction of lit pixels inside the field disk is at
    /// or below this; the overlap must strictly exceed it.
    #[serde(default = "default_circle_overlap_min")]
    pub circle_overlap_min: f32,
    /// Hue cutoff (degrees) below which a pixel counts as red/orange.
    #[serde(default = "default_red_orange_hue_max_deg")]
    pub red_orange_hue_max_deg: f32,
    /// Reject when the red/orange pixel fraction is at or below this; the
    /// fraction must strictly exceed it.
    #[serde(default = "default_red_orange_min")]
    pub red_orange_min: f32,
    /// Per-axis distance (pixels) from the canvas center within which a
    /// detected circle counts as a centered iris.
    #[serde(default = "default_iris_center_tolerance_px")]
    pub iris_center_tolerance_px: f32,
    /// Circle detector tuning for the iris screen.
    #[serde(default)]
    pub detector: CircleDetectorConfig,
}

fn default_canvas_side() -> u32 {
    CANVAS_SIDE
}
fn default_skin_ratio_max() -> f32 {
    DEFAULT_SKIN_RATIO_MAX
}
fn default_white_pixel_max() -> f32 {
    DEFAULT_WHITE_PIXEL_MAX
}
fn default_field_radius_fraction() -> f32 {
    DEFAULT_FIELD_RADIUS_FRACTION
}
fn default_circle_overlap_min() -> f32 {
    DEFAULT_CIRCLE_OVERLAP_MIN
}
fn default_red_orange_hue_max_deg() -> f32 {
    DEFAULT_RED_ORANGE_HUE_MAX_DEG
}
fn default_red_orange_min() -> f32 {
    DEFAULT_RED_ORANGE_MIN
}
fn default_iris_center_tolerance_px() -> f32 {
    DEFAULT_IRIS_CENTER_TOLERANCE_PX
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            canvas_side: CANVAS_SIDE,
            skin_ratio_max: DEFAULT_SKIN_RATIO_MAX,
            white_pixel_max: DEFAULT_WHITE_PIXEL_MAX,
            field_radius_fraction: DEFAULT_FIELD_RADIUS_FRACTION,
            circle_overlap_min: DEFAULT_CIRCLE_OVERLAP_MIN,
            red_orange_hue_max_deg: DEFAULT_RED_ORANGE_HUE_MAX_DEG,
            red_orange_min: DEFAULT_RED_ORANGE_MIN,
            iris_center_tolerance_px: DEFAULT_IRIS_CENTER_TOLERANCE_PX,
            detector: CircleDetectorConfig::default(),
        }
    }
}
