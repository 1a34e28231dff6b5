use tracing::{debug, warn};

use crate::decode::decode_raster;
use crate::error::{GateError, Result};
use crate::metrics::MetricSet;
use crate::screens::color::tissue_color_screen;
use crate::screens::field::circular_field_screen;
use crate::screens::hue::retinal_hue_screen;
use crate::screens::iris::iris_shape_screen;
use crate::verdict::{RejectReason, Verdict};

use super::config::GateConfig;

/// The image admissibility gate.
///
/// A `Gate` is an immutable bundle of thresholds; validation is a pure,
/// synchronous function of the input bytes. Concurrent calls share
/// nothing, so one `Gate` can serve any number of threads.
#[derive(Clone, Debug, Default)]
pub struct Gate {
    config: GateConfig,
}

impl Gate {
    pub fn new(config: GateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Decide whether `bytes` is a plausible fundus photograph.
    ///
    /// Never panics and never returns an error: every failure mode is
    /// absorbed into a `Rejected` verdict.
    pub fn validate(&self, bytes: &[u8]) -> Verdict {
        self.validate_debug(bytes).0
    }

    /// Like [`validate`](Self::validate), but also returns the diagnostic
    /// metrics when the image is accepted. Rejections carry the reason
    /// only, matching the caller contract: a rejected upload is discarded
    /// and its message shown to the user, nothing more.
    pub fn validate_debug(&self, bytes: &[u8]) -> (Verdict, Option<MetricSet>) {
        let mut metrics = MetricSet::new();
        match self.run(bytes, &mut metrics) {
            Ok(verdict) => {
                let metrics = verdict.is_accepted().then_some(metrics);
                (verdict, metrics)
            }
            Err(GateError::Decode(err)) => {
                warn!(%err, "upload failed to decode");
                (Verdict::Rejected(RejectReason::Corrupted), None)
            }
            Err(err) => {
                warn!(%err, "unexpected failure during validation");
                (
                    Verdict::Rejected(RejectReason::Internal(err.to_string())),
                    None,
                )
            }
        }
    }

    /// Run the screen chain: decode, then tissue color, circular field,
    /// retinal hue, iris shape. The first failing screen wins; later
    /// screens never run.
    fn run(&self, bytes: &[u8], metrics: &mut MetricSet) -> Result<Verdict> {
        let raster = decode_raster(bytes, self.config.canvas_side)?;

        let screens = [
            tissue_color_screen,
            circular_field_screen,
            retinal_hue_screen,
            iris_shape_screen,
        ];
        for screen in screens {
            if let Some(reason) = screen(&raster, &self.config, metrics) {
                debug!(%reason, "upload rejected");
                return Ok(Verdict::Rejected(reason));
            }
        }

        debug!("upload accepted");
        Ok(Verdict::Accepted)
    }
}

/// Validate with the default thresholds.
pub fn validate(bytes: &[u8]) -> Verdict {
    Gate::default().validate(bytes)
}
