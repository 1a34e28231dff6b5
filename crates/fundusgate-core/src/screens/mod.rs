//! Heuristic admissibility screens.
//!
//! Each screen is a pure function over the shared [`NormalizedRaster`]:
//! it records its diagnostic metrics and returns `Some(RejectReason)` if
//! the image should be turned away. The gate runs them in a fixed order
//! and stops at the first rejection.
//!
//! [`NormalizedRaster`]: crate::raster::NormalizedRaster

pub mod color;
pub mod field;
pub mod hue;
pub mod iris;

pub use field::field_radius;
