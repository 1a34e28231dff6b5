mod common;

use approx::assert_abs_diff_eq;
use ndarray::Array2;

use fundusgate_core::metrics::{keys, MetricSet};
use fundusgate_core::raster::NormalizedRaster;
use fundusgate_core::screens::color::tissue_color_screen;
use fundusgate_core::screens::field::circular_field_screen;
use fundusgate_core::screens::hue::retinal_hue_screen;
use fundusgate_core::screens::iris::iris_shape_screen;
use fundusgate_core::{GateConfig, RejectReason};

use common::{uniform_raster, SIDE};

fn raster_by_rows(split_row: usize, top: [f32; 3], bottom: [f32; 3]) -> NormalizedRaster {
    let side = SIDE as usize;
    let plane = |channel: usize| {
        Array2::from_shape_fn((side, side), |(row, _)| {
            if row < split_row {
                top[channel]
            } else {
                bottom[channel]
            }
        })
    };
    NormalizedRaster::from_planes(plane(0), plane(1), plane(2))
}

// ---------------------------------------------------------------------------
// Tissue-color screen
// ---------------------------------------------------------------------------

#[test]
fn test_gray_image_is_skin_like() {
    let raster = uniform_raster(0.5, 0.5, 0.5);
    let mut metrics = MetricSet::new();
    let reason = tissue_color_screen(&raster, &GateConfig::default(), &mut metrics);
    assert_eq!(reason, Some(RejectReason::SkinLike));

    let ratio = metrics.get(keys::SKIN_RATIO).unwrap();
    assert_abs_diff_eq!(ratio, 1.0, epsilon = 1e-3);
    // Short-circuit: the glare metric is never computed.
    assert!(metrics.get(keys::WHITE_PIXELS).is_none());
}

#[test]
fn test_skin_ratio_boundary_is_accepted() {
    // Warm-dominant raster passes with the default threshold.
    let raster = uniform_raster(0.5, 0.4, 0.1);
    let mut metrics = MetricSet::new();
    assert_eq!(
        tissue_color_screen(&raster, &GateConfig::default(), &mut metrics),
        None
    );
    let measured = metrics.get(keys::SKIN_RATIO).unwrap() as f32;

    // Rejection is strictly greater-than: a threshold equal to the
    // measured ratio still accepts.
    let at_boundary = GateConfig {
        skin_ratio_max: measured,
        ..GateConfig::default()
    };
    let mut metrics = MetricSet::new();
    assert_eq!(tissue_color_screen(&raster, &at_boundary, &mut metrics), None);

    let below = GateConfig {
        skin_ratio_max: measured - 1e-4,
        ..GateConfig::default()
    };
    let mut metrics = MetricSet::new();
    assert_eq!(
        tissue_color_screen(&raster, &below, &mut metrics),
        Some(RejectReason::SkinLike)
    );
}

#[test]
fn test_white_pixel_boundary_is_accepted() {
    // Top 205 rows are white; the rest is dark red so the skin check
    // passes. White fraction = 205/512 = 0.4004, just over the default.
    let raster = raster_by_rows(205, [1.0, 1.0, 1.0], [0.8, 0.2, 0.1]);
    let mut metrics = MetricSet::new();
    assert_eq!(
        tissue_color_screen(&raster, &GateConfig::default(), &mut metrics),
        Some(RejectReason::TooBright)
    );
    let measured = metrics.get(keys::WHITE_PIXELS).unwrap() as f32;
    assert!(measured > 0.40 && measured < 0.41);

    // A threshold equal to the measured fraction accepts (strict >).
    let at_boundary = GateConfig {
        white_pixel_max: measured,
        ..GateConfig::default()
    };
    let mut metrics = MetricSet::new();
    assert_eq!(tissue_color_screen(&raster, &at_boundary, &mut metrics), None);

    let below = GateConfig {
        white_pixel_max: measured - 1e-5,
        ..GateConfig::default()
    };
    let mut metrics = MetricSet::new();
    assert_eq!(
        tissue_color_screen(&raster, &below, &mut metrics),
        Some(RejectReason::TooBright)
    );
}

// ---------------------------------------------------------------------------
// Circular-field screen
// ---------------------------------------------------------------------------

#[test]
fn test_black_image_has_zero_overlap() {
    let raster = uniform_raster(0.0, 0.0, 0.0);
    let mut metrics = MetricSet::new();
    assert_eq!(
        circular_field_screen(&raster, &GateConfig::default(), &mut metrics),
        Some(RejectReason::NoCircularField)
    );
    assert_eq!(metrics.get(keys::CIRCLE_OVERLAP), Some(0.0));
}

#[test]
fn test_circle_overlap_boundary_is_rejected() {
    // A fully lit canvas: overlap is the field disk's share of the
    // canvas, about 0.50 at the default radius fraction.
    let raster = uniform_raster(0.5, 0.3, 0.2);
    let mut metrics = MetricSet::new();
    assert_eq!(
        circular_field_screen(&raster, &GateConfig::default(), &mut metrics),
        None
    );
    let measured = metrics.get(keys::CIRCLE_OVERLAP).unwrap() as f32;
    assert!(measured > 0.45 && measured < 0.55);

    // The overlap must strictly exceed the minimum: a threshold equal to
    // the measured value rejects.
    let at_boundary = GateConfig {
        circle_overlap_min: measured,
        ..GateConfig::default()
    };
    let mut metrics = MetricSet::new();
    assert_eq!(
        circular_field_screen(&raster, &at_boundary, &mut metrics),
        Some(RejectReason::NoCircularField)
    );

    let just_below = GateConfig {
        circle_overlap_min: measured - 1e-4,
        ..GateConfig::default()
    };
    let mut metrics = MetricSet::new();
    assert_eq!(
        circular_field_screen(&raster, &just_below, &mut metrics),
        None
    );
}

// ---------------------------------------------------------------------------
// Retinal-hue screen
// ---------------------------------------------------------------------------

#[test]
fn test_blue_image_has_no_retinal_color() {
    let raster = uniform_raster(0.1, 0.2, 0.9);
    let mut metrics = MetricSet::new();
    assert_eq!(
        retinal_hue_screen(&raster, &GateConfig::default(), &mut metrics),
        Some(RejectReason::NoRetinalColor)
    );
    assert_eq!(metrics.get(keys::RED_ORANGE_FRACTION), Some(0.0));
}

#[test]
fn test_orange_image_is_fully_warm() {
    let raster = uniform_raster(0.8, 0.4, 0.1);
    let mut metrics = MetricSet::new();
    assert_eq!(
        retinal_hue_screen(&raster, &GateConfig::default(), &mut metrics),
        None
    );
    assert_eq!(metrics.get(keys::RED_ORANGE_FRACTION), Some(1.0));
}

#[test]
fn test_red_orange_boundary_is_rejected() {
    // 16 warm rows out of 512: fraction 0.03125, above the default floor.
    let raster = raster_by_rows(16, [0.8, 0.4, 0.1], [0.1, 0.2, 0.9]);
    let mut metrics = MetricSet::new();
    assert_eq!(
        retinal_hue_screen(&raster, &GateConfig::default(), &mut metrics),
        None
    );
    let measured = metrics.get(keys::RED_ORANGE_FRACTION).unwrap() as f32;
    assert_abs_diff_eq!(measured, 16.0 / 512.0, epsilon = 1e-6);

    // The fraction must strictly exceed the minimum.
    let at_boundary = GateConfig {
        red_orange_min: measured,
        ..GateConfig::default()
    };
    let mut metrics = MetricSet::new();
    assert_eq!(
        retinal_hue_screen(&raster, &at_boundary, &mut metrics),
        Some(RejectReason::NoRetinalColor)
    );

    let just_below = GateConfig {
        red_orange_min: measured - 1e-5,
        ..GateConfig::default()
    };
    let mut metrics = MetricSet::new();
    assert_eq!(retinal_hue_screen(&raster, &just_below, &mut metrics), None);
}

// ---------------------------------------------------------------------------
// Iris-shape screen
// ---------------------------------------------------------------------------

#[test]
fn test_flat_image_has_no_circles() {
    let raster = uniform_raster(0.4, 0.2, 0.1);
    let mut metrics = MetricSet::new();
    assert_eq!(
        iris_shape_screen(&raster, &GateConfig::default(), &mut metrics),
        None
    );
    assert_eq!(metrics.get(keys::IRIS_CIRCLES), Some(0.0));
}
