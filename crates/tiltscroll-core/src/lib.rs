//! Core data model and arithmetic for tiltscroll: orientation samples,
//! the tilt-to-scroll converter, and option-string parsing.

pub mod options;
pub mod sample;
pub mod shift;
pub mod tuning;

// Re-export commonly used items
pub use options::{parse_options, OptionValue, ParsedOptions};
pub use sample::{Aspect, OrientationSample, ScrollDelta, Size};
pub use shift::{compute_shift, TiltTracker};
pub use tuning::ScrollTuning;
