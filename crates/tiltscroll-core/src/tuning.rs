//! Tuning parameters for the tilt-to-scroll conversion.

use crate::options::OptionValue;
use std::collections::HashMap;

/// Conversion tuning. Frozen once activation completes; the converter only
/// ever reads it.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollTuning {
    /// Scroll gain: scale factor from relative tilt to scroll pixels.
    pub speed: f32,

    /// Dead-zone threshold in degrees. Angle deltas at or below this
    /// magnitude produce no scroll, filtering sensor jitter.
    pub insensitivity: f32,

    /// Option keys the tuning does not recognize. Kept verbatim so callers
    /// can pass extra data through; they have no effect on conversion.
    pub extras: HashMap<String, OptionValue>,
}

impl Default for ScrollTuning {
    fn default() -> Self {
        Self {
            speed: 150.0,
            insensitivity: 5.0,
            extras: HashMap::new(),
        }
    }
}

impl ScrollTuning {
    /// Shallow-merges parsed option values over the current tuning.
    ///
    /// Known numeric keys overwrite the matching field; everything else
    /// (unknown keys, or known keys with a non-numeric value) lands in
    /// `extras` untouched. No validation beyond that, by design.
    pub fn merge(&mut self, values: HashMap<String, OptionValue>) {
        for (key, value) in values {
            match (key.as_str(), &value) {
                ("speed", OptionValue::Number(n)) => self.speed = *n,
                ("insensitivity", OptionValue::Number(n)) => self.insensitivity = *n,
                _ => {
                    log::debug!("tuning: keeping unrecognized option {key:?} = {value:?}");
                    self.extras.insert(key, value);
                }
            }
        }
    }
}
