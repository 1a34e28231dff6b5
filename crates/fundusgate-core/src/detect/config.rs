use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_ACCUMULATOR_RATIO, DEFAULT_ACCUMULATOR_THRESHOLD, DEFAULT_EDGE_THRESHOLD,
    DEFAULT_MIN_CENTER_DISTANCE,
};

/// Tuning constants for the circle detector.
///
/// These shape how eagerly circles are reported; none of them is
/// semantically load-bearing beyond "detect at most a few large,
/// well-formed circles".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CircleDetectorConfig {
    /// Inverse resolution of the center accumulator: accumulator cells are
    /// `accumulator_ratio` pixels wide.
    #[serde(default = "default_accumulator_ratio")]
    pub accumulator_ratio: f32,
    /// Minimum distance (pixels) between reported circle centers.
    #[serde(default = "default_min_center_distance")]
    pub min_center_distance: f32,
    /// Sobel gradient magnitude (8-bit scale) above which a pixel votes.
    #[serde(default = "default_edge_threshold")]
    pub edge_threshold: f32,
    /// Minimum accumulator votes for a center candidate.
    #[serde(default = "default_accumulator_threshold")]
    pub accumulator_threshold: u32,
}

fn default_accumulator_ratio() -> f32 {
    DEFAULT_ACCUMULATOR_RATIO
}
fn default_min_center_distance() -> f32 {
    DEFAULT_MIN_CENTER_DISTANCE
}
fn default_edge_threshold() -> f32 {
    DEFAULT_EDGE_THRESHOLD
}
fn default_accumulator_threshold() -> u32 {
    DEFAULT_ACCUMULATOR_THRESHOLD
}

impl Default for CircleDetectorConfig {
    fn default() -> Self {
        Self {
            accumulator_ratio: DEFAULT_ACCUMULATOR_RATIO,
            min_center_distance: DEFAULT_MIN_CENTER_DISTANCE,
            edge_threshold: DEFAULT_EDGE_THRESHOLD,
            accumulator_threshold: DEFAULT_ACCUMULATOR_THRESHOLD,
        }
    }
}
