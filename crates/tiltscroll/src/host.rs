//! Collaborator traits the host environment implements.
//!
//! The controller never touches the page directly; it talks to these seams.
//! Hosts hand in `Rc<dyn _>` implementations at construction time, which
//! keeps the controller testable with plain recording doubles.

use tiltscroll_core::{ScrollDelta, Size};

/// The scrollable surface the controller pans.
pub trait Viewport {
    /// Current viewport dimensions; decides portrait vs. landscape axis
    /// mapping on every sample.
    fn size(&self) -> Size;

    /// Applies a relative scroll. Called once per converted sensor event.
    fn scroll_by(&self, delta: ScrollDelta);
}

/// The single on-page control element reflecting engagement.
///
/// The controller guarantees balanced calls: one `create_control` on
/// activation, one `remove_control` on discharge, and `set_control_active`
/// only in between.
pub trait ControlSurface {
    fn create_control(&self);

    /// Toggles the control's active presentation (engaged vs. not).
    fn set_control_active(&self, active: bool);

    fn remove_control(&self);
}

/// What the host environment can report about itself.
pub trait HostCapabilities {
    /// True when a touch-capable input method is available. Checked once,
    /// during the support probe.
    fn touch_capable(&self) -> bool;
}
