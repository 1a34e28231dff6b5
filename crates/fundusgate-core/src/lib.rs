pub mod consts;
pub mod error;
pub mod raster;
pub mod decode;
pub mod filters;
pub mod detect;
pub mod screens;
pub mod metrics;
pub mod verdict;
pub mod gate;
pub mod screening;

pub use gate::{validate, Gate, GateConfig};
pub use metrics::MetricSet;
pub use verdict::{RejectReason, Verdict};
