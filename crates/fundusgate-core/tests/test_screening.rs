mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use fundusgate_core::raster::NormalizedRaster;
use fundusgate_core::screening::{screen, Classifier, ScreeningOutcome, StageLabel};
use fundusgate_core::{Gate, RejectReason};

use common::{disk, encode_png, solid};

struct FixedClassifier {
    label: StageLabel,
    calls: AtomicUsize,
}

impl FixedClassifier {
    fn new(label: StageLabel) -> Self {
        Self {
            label,
            calls: AtomicUsize::new(0),
        }
    }
}

impl Classifier for FixedClassifier {
    fn classify(&self, _raster: &NormalizedRaster) -> StageLabel {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.label
    }
}

#[test]
fn test_accepted_image_is_classified() {
    let bytes = encode_png(&disk(256.0, 256.0, 110.0, 150.0, [200, 100, 20]));
    let classifier = FixedClassifier::new(StageLabel::Stage2);

    let outcome = screen(&bytes, &Gate::default(), &classifier);
    assert_eq!(outcome, ScreeningOutcome::Classified(StageLabel::Stage2));
    assert_eq!(classifier.calls.load(Ordering::Relaxed), 1);
}

#[test]
fn test_rejected_image_never_reaches_classifier() {
    let bytes = encode_png(&solid([128, 128, 128]));
    let classifier = FixedClassifier::new(StageLabel::Normal);

    let outcome = screen(&bytes, &Gate::default(), &classifier);
    assert_eq!(outcome, ScreeningOutcome::Rejected(RejectReason::SkinLike));
    assert_eq!(classifier.calls.load(Ordering::Relaxed), 0);
}

#[test]
fn test_stage_labels_render_and_carry_guidance() {
    assert_eq!(StageLabel::Stage3.to_string(), "ROP Stage 3");
    assert_eq!(StageLabel::PlusDisease.to_string(), "Plus Disease");
    for label in [
        StageLabel::Normal,
        StageLabel::Stage1,
        StageLabel::Stage2,
        StageLabel::Stage3,
        StageLabel::Stage4,
        StageLabel::Stage5,
        StageLabel::PlusDisease,
        StageLabel::Unknown,
    ] {
        assert!(!label.guidance().is_empty());
    }
}
