use std::collections::BTreeMap;

use serde::Serialize;

/// Diagnostic scalars accumulated as the screens run.
///
/// Accumulation is incremental, so a set produced by an early-exiting run
/// is partial: it only carries the metrics of the screens that actually
/// executed.
#[derive(Clone, Debug, Default, Serialize)]
pub struct MetricSet(BTreeMap<&'static str, f64>);

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, name: &'static str, value: f64) {
        self.0.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Metric names recorded by the pipeline, in stage order.
pub mod keys {
    pub const SKIN_RATIO: &str = "skin_ratio";
    pub const WHITE_PIXELS: &str = "white_pixels";
    pub const CIRCLE_OVERLAP: &str = "circle_overlap";
    pub const RED_ORANGE_FRACTION: &str = "red_orange_fraction";
    pub const IRIS_CIRCLES: &str = "iris_circles";
}
