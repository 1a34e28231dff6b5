use std::fmt;

use serde::Serialize;

/// Why an upload was turned away.
///
/// Exactly one reason is produced per rejected call: the first failing
/// screen wins and later screens never run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum RejectReason {
    /// The bytes did not decode as a supported raster image.
    Corrupted,
    /// Green/red balance typical of skin, faces, or external eye photos.
    SkinLike,
    /// Dominated by near-white pixels (paper, flashlight glare).
    TooBright,
    /// No circular high-intensity region where the fundus field should be.
    NoCircularField,
    /// Essentially zero warm (red/orange) coloration.
    NoRetinalColor,
    /// One large, near-perfect, centered circle: a close-up iris photo.
    IrisLike,
    /// An unexpected processing failure, absorbed at the gate boundary.
    Internal(String),
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corrupted => write!(f, "Corrupted image."),
            Self::SkinLike => write!(f, "Invalid: Skin-like image detected."),
            Self::TooBright => write!(f, "Invalid: Image is too bright / glare."),
            Self::NoCircularField => write!(f, "Invalid: No circular fundus-like shape."),
            Self::NoRetinalColor => write!(f, "Invalid: No retinal-like coloration present."),
            Self::IrisLike => write!(f, "Invalid: Iris-like eye photo detected."),
            Self::Internal(msg) => write!(f, "Error: {msg}"),
        }
    }
}

/// Outcome of one validation call.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// The user-facing message for this verdict.
    pub fn message(&self) -> String {
        match self {
            Self::Accepted => "Valid ROP fundus image.".to_string(),
            Self::Rejected(reason) => reason.to_string(),
        }
    }
}
