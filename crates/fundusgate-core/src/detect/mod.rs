//! Hough-gradient circle detection on a grayscale raster.
//!
//! Tuned for the iris screen: find at most a few large, well-formed
//! circles in a narrow radius band. Fully deterministic; no sampling or
//! randomized internals.

pub mod config;
mod gradient;
mod hough;

pub use config::CircleDetectorConfig;
pub use hough::{detect_circles, DetectedCircle};
