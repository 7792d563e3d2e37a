//! The activation state machine.
//!
//! One controller instance exists per page. The host constructs it with its
//! collaborator implementations, then forwards sensor and touch events into
//! the `handle_*` entry points; the public verbs (`charge`, `jump`, `kick`,
//! `toggle`, `discharge`) drive the lifecycle. Calling a verb in a phase
//! where it does not apply is a silent no-op, so pages can invoke them
//! defensively from any state.

use crate::host::{ControlSurface, HostCapabilities, Viewport};
use crate::support::{SupportCheck, SupportProbe};
use std::collections::HashMap;
use std::rc::Rc;
use tiltscroll_core::{OptionValue, OrientationSample, ScrollTuning, TiltTracker};

/// Lifecycle phase of the controller.
///
/// Exactly one control element exists while `Ready` or `Engaged`; it is
/// created on entry to `Ready` and destroyed on return to `Uninitialized`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActivationPhase {
    /// Not charged; every verb except `charge` is ignored.
    Uninitialized,
    /// Support check pending (or failed). Concurrent `charge` calls are
    /// rejected; there is no way back out except the check passing.
    Initializing,
    /// Charged but not translating tilt into scroll.
    Ready,
    /// Actively translating tilt into scroll.
    Engaged,
}

/// Converts orientation samples into viewport scrolling while engaged.
pub struct TiltScrollController {
    phase: ActivationPhase,
    tuning: ScrollTuning,
    tracker: TiltTracker,
    /// Options handed to `charge`, merged into the tuning only once the
    /// support check passes.
    pending_options: Option<HashMap<String, OptionValue>>,
    /// Present only between `charge` and the first delivered sample.
    probe: Option<SupportProbe>,
    viewport: Rc<dyn Viewport>,
    surface: Rc<dyn ControlSurface>,
    capabilities: Rc<dyn HostCapabilities>,
}

impl TiltScrollController {
    pub fn new(
        viewport: Rc<dyn Viewport>,
        surface: Rc<dyn ControlSurface>,
        capabilities: Rc<dyn HostCapabilities>,
    ) -> Self {
        Self {
            phase: ActivationPhase::Uninitialized,
            tuning: ScrollTuning::default(),
            tracker: TiltTracker::new(),
            pending_options: None,
            probe: None,
            viewport,
            surface,
            capabilities,
        }
    }

    pub fn phase(&self) -> ActivationPhase {
        self.phase
    }

    pub fn tuning(&self) -> &ScrollTuning {
        &self.tuning
    }

    fn is_charged(&self) -> bool {
        matches!(self.phase, ActivationPhase::Ready | ActivationPhase::Engaged)
    }

    /// Starts activation: registers the one-shot support probe and returns a
    /// future for its verdict. No-op (returning `None`) unless the
    /// controller is `Uninitialized`.
    ///
    /// The verdict arrives with the first orientation sample the host
    /// delivers; if none ever arrives, the controller stays `Initializing`
    /// indefinitely and the future never resolves.
    pub fn charge(&mut self, options: HashMap<String, OptionValue>) -> Option<SupportCheck> {
        if self.phase != ActivationPhase::Uninitialized {
            log::debug!("charge ignored in phase {:?}", self.phase);
            return None;
        }

        self.phase = ActivationPhase::Initializing;
        self.pending_options = Some(options);
        let probe = SupportProbe::new();
        let check = probe.check();
        self.probe = Some(probe);
        Some(check)
    }

    /// Engages tilt tracking. No-op unless charged.
    pub fn jump(&mut self) {
        if !self.is_charged() {
            log::debug!("jump ignored in phase {:?}", self.phase);
            return;
        }

        self.phase = ActivationPhase::Engaged;
        self.surface.set_control_active(true);
    }

    /// Disengages tilt tracking without discharging. No-op unless charged.
    pub fn kick(&mut self) {
        if !self.is_charged() {
            log::debug!("kick ignored in phase {:?}", self.phase);
            return;
        }

        self.phase = ActivationPhase::Ready;
        self.surface.set_control_active(false);
    }

    /// Dispatches to `jump` or `kick` based on the current engagement.
    pub fn toggle(&mut self) {
        if self.phase == ActivationPhase::Engaged {
            self.kick();
        } else {
            self.jump();
        }
    }

    /// Tears down: disengages, destroys the control, returns to
    /// `Uninitialized`. Idempotent; no-op unless charged. A pending support
    /// probe is not cancellable, so discharging during `Initializing` does
    /// nothing.
    pub fn discharge(&mut self) {
        if !self.is_charged() {
            log::debug!("discharge ignored in phase {:?}", self.phase);
            return;
        }

        self.kick();
        self.surface.remove_control();
        self.phase = ActivationPhase::Uninitialized;
    }

    /// Entry point for orientation sensor events.
    ///
    /// During `Initializing` the first sample settles the support check;
    /// afterwards samples feed the converter (priming while `Ready`,
    /// scrolling while `Engaged`).
    pub fn handle_orientation(&mut self, sample: OrientationSample) {
        match self.phase {
            ActivationPhase::Uninitialized => {}
            ActivationPhase::Initializing => {
                // The probe is consumed by the first sample regardless of
                // outcome; a failed check leaves the controller stuck here.
                if let Some(probe) = self.probe.take() {
                    let supported =
                        self.capabilities.touch_capable() && sample.has_any_axis();
                    if supported {
                        self.finish_charge();
                    } else {
                        log::warn!("tilt scrolling unsupported by this environment");
                    }
                    probe.resolve(supported);
                }
            }
            ActivationPhase::Ready | ActivationPhase::Engaged => {
                let engaged = self.phase == ActivationPhase::Engaged;
                let aspect = self.viewport.size().aspect();
                if let Some(delta) =
                    self.tracker.on_sample(sample, engaged, aspect, &self.tuning)
                {
                    self.viewport.scroll_by(delta);
                }
            }
        }
    }

    /// Entry point for the portrait/landscape flip notification. Disengages
    /// but keeps the control, so the user can re-engage immediately.
    pub fn handle_axis_flip(&mut self) {
        self.kick();
    }

    /// Entry point for a touch on the control element.
    pub fn handle_control_touch(&mut self) {
        self.toggle();
    }

    fn finish_charge(&mut self) {
        if let Some(options) = self.pending_options.take() {
            self.tuning.merge(options);
        }
        self.surface.create_control();
        self.phase = ActivationPhase::Ready;
        log::info!(
            "tilt scrolling ready (speed {}, insensitivity {})",
            self.tuning.speed,
            self.tuning.insensitivity
        );
    }
}
