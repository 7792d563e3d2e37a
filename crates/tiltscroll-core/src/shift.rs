//! Tilt-to-scroll conversion: per-axis shift arithmetic and the tracker
//! that holds the baseline sample between sensor events.

use crate::sample::{Aspect, OrientationSample, ScrollDelta};
use crate::tuning::ScrollTuning;

/// Converts one angle pair into a scroll offset.
///
/// Deltas at or below the dead-zone threshold yield zero. Above it, the
/// offset is the tilt relative to the baseline angle, scaled by `speed`,
/// with the dead-zone margin subtracted from the new angle first.
///
/// The divisor is the baseline angle itself: a baseline of zero produces an
/// infinite (or NaN) shift. That matches the shipped formula and is kept
/// as-is; callers live with the quirk.
pub fn compute_shift(last_angle: f32, new_angle: f32, tuning: &ScrollTuning) -> f32 {
    let diff = new_angle - last_angle;
    let abs_diff = diff.abs();
    let sign = if diff == 0.0 { 0.0 } else { diff / abs_diff };

    if abs_diff > tuning.insensitivity {
        tuning.speed * ((new_angle - sign * tuning.insensitivity) / last_angle - 1.0)
    } else {
        0.0
    }
}

/// Shift for one axis pair where either side may be missing.
///
/// A missing reading cannot move the page, so the component is zero.
fn axis_shift(last: Option<f32>, new: Option<f32>, tuning: &ScrollTuning) -> f32 {
    match (last, new) {
        (Some(last), Some(new)) => compute_shift(last, new, tuning),
        _ => {
            log::debug!("shift: axis missing on one side, emitting 0");
            0.0
        }
    }
}

/// Holds the baseline orientation sample between sensor events.
///
/// The baseline is (re)captured — "primed" — on every sample that arrives
/// while tracking is disengaged, and on the first sample ever seen. While
/// engaged, every sample is compared against that same baseline; the
/// baseline does NOT advance after a shift is computed, so sustained tilt
/// compounds against the priming sample rather than the previous one.
#[derive(Clone, Copy, Debug, Default)]
pub struct TiltTracker {
    last_alpha: Option<f32>,
    last_beta: Option<f32>,
    last_gamma: Option<f32>,
}

impl TiltTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// The baseline the next engaged sample will be compared against.
    pub fn baseline(&self) -> OrientationSample {
        OrientationSample::new(self.last_alpha, self.last_beta, self.last_gamma)
    }

    /// Feeds one sensor event through the converter.
    ///
    /// Returns `None` on priming events (disengaged, or no usable baseline
    /// yet), otherwise the scroll command for this sample. Axis selection
    /// follows the viewport aspect: portrait scrolls x from alpha and y from
    /// beta, landscape scrolls x from beta and y from gamma.
    pub fn on_sample(
        &mut self,
        sample: OrientationSample,
        engaged: bool,
        aspect: Aspect,
        tuning: &ScrollTuning,
    ) -> Option<ScrollDelta> {
        if !engaged || (self.last_alpha.is_none() && self.last_beta.is_none()) {
            self.last_alpha = sample.alpha;
            self.last_beta = sample.beta;
            self.last_gamma = sample.gamma;
            return None;
        }

        let delta = match aspect {
            Aspect::Portrait => ScrollDelta::new(
                axis_shift(self.last_alpha, sample.alpha, tuning),
                axis_shift(self.last_beta, sample.beta, tuning),
            ),
            Aspect::Landscape => ScrollDelta::new(
                axis_shift(self.last_beta, sample.beta, tuning),
                axis_shift(self.last_gamma, sample.gamma, tuning),
            ),
        };

        Some(delta)
    }
}
