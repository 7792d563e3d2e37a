//! Tilt-to-scroll controller: the activation state machine and the seams to
//! the host environment (viewport, control surface, capability probe).
//!
//! The host event loop owns a [`TiltScrollController`] and forwards sensor
//! and touch events into it; the controller drives scrolling through the
//! injected collaborator traits. All state lives on the event-loop thread,
//! no locking involved.

pub mod controller;
pub mod host;
pub mod support;

// Re-export commonly used items
pub use controller::{ActivationPhase, TiltScrollController};
pub use host::{ControlSurface, HostCapabilities, Viewport};
pub use support::SupportCheck;

pub mod prelude {
    pub use crate::controller::{ActivationPhase, TiltScrollController};
    pub use crate::host::{ControlSurface, HostCapabilities, Viewport};
    pub use crate::support::SupportCheck;
    pub use tiltscroll_core::{
        parse_options, Aspect, OptionValue, OrientationSample, ParsedOptions, ScrollDelta,
        ScrollTuning, Size,
    };
}
