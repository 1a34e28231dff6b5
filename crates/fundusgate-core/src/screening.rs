//! Downstream screening seam: admissibility gate in front of an injected
//! ROP classifier.
//!
//! The classifier is an opaque capability supplied by the caller; nothing
//! here loads models or holds global state. On acceptance the original
//! bytes stay untouched for the caller to persist.

use std::fmt;

use serde::Serialize;

use crate::decode::decode_raster;
use crate::gate::Gate;
use crate::raster::NormalizedRaster;
use crate::verdict::{RejectReason, Verdict};

/// ROP staging label assigned by a downstream classifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum StageLabel {
    Normal,
    Stage1,
    Stage2,
    Stage3,
    Stage4,
    Stage5,
    PlusDisease,
    Unknown,
}

impl StageLabel {
    /// Clinical follow-up guidance for a stage.
    pub fn guidance(&self) -> &'static str {
        match self {
            Self::Normal => {
                "Healthy retina. No signs of ROP. Routine follow-up as per \
                 standard screening guidelines."
            }
            Self::Stage1 => {
                "Demarcation line detected. Usually resolves without treatment; \
                 close observation and follow-up exams are required."
            }
            Self::Stage2 => {
                "Ridge detected. Treatment is rarely needed, but frequent \
                 monitoring is essential to ensure it does not progress."
            }
            Self::Stage3 => {
                "Extraretinal fibrovascular proliferation. Treatment (laser or \
                 anti-VEGF) may be required if plus disease is present."
            }
            Self::Stage4 => {
                "Partial retinal detachment. Surgical intervention is typically \
                 required to prevent blindness."
            }
            Self::Stage5 => {
                "Total retinal detachment. Immediate complex surgery is \
                 required; visual prognosis may be guarded."
            }
            Self::PlusDisease => {
                "Dilation and tortuosity of vessels detected. Immediate \
                 treatment (laser/injection) is usually required."
            }
            Self::Unknown => "Unable to determine stage. Consult a specialist immediately.",
        }
    }
}

impl fmt::Display for StageLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Normal => "Normal",
            Self::Stage1 => "ROP Stage 1",
            Self::Stage2 => "ROP Stage 2",
            Self::Stage3 => "ROP Stage 3",
            Self::Stage4 => "ROP Stage 4",
            Self::Stage5 => "ROP Stage 5",
            Self::PlusDisease => "Plus Disease",
            Self::Unknown => "Unknown",
        };
        write!(f, "{label}")
    }
}

/// An opaque stage classifier: normalized raster in, label out.
pub trait Classifier: Send + Sync {
    fn classify(&self, raster: &NormalizedRaster) -> StageLabel;
}

/// Outcome of gating plus (on acceptance) classification.
#[derive(Clone, Debug, PartialEq)]
pub enum ScreeningOutcome {
    /// The image passed the gate and was staged.
    Classified(StageLabel),
    /// The image was turned away; the classifier was never invoked.
    Rejected(RejectReason),
}

/// Gate `bytes`, then classify if and only if the gate accepts.
pub fn screen(bytes: &[u8], gate: &Gate, classifier: &dyn Classifier) -> ScreeningOutcome {
    match gate.validate(bytes) {
        Verdict::Accepted => {
            // The gate already decoded these bytes successfully, so this
            // decode cannot fail with a well-behaved decoder; treat any
            // surprise as an unknown stage rather than a fault.
            match decode_raster(bytes, gate.config().canvas_side) {
                Ok(raster) => ScreeningOutcome::Classified(classifier.classify(&raster)),
                Err(_) => ScreeningOutcome::Classified(StageLabel::Unknown),
            }
        }
        Verdict::Rejected(reason) => ScreeningOutcome::Rejected(reason),
    }
}
