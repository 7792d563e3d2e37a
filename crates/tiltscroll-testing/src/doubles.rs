use std::cell::{Cell, RefCell};
use tiltscroll::{ControlSurface, HostCapabilities, Viewport};
use tiltscroll_core::{ScrollDelta, Size};

/// Viewport double that records every scroll command it receives.
pub struct RecordingViewport {
    size: Cell<Size>,
    scrolls: RefCell<Vec<ScrollDelta>>,
}

impl RecordingViewport {
    pub fn new(size: Size) -> Self {
        Self {
            size: Cell::new(size),
            scrolls: RefCell::new(Vec::new()),
        }
    }

    /// Simulates a window resize (and with it a possible axis flip).
    pub fn set_size(&self, size: Size) {
        self.size.set(size);
    }

    pub fn scrolls(&self) -> Vec<ScrollDelta> {
        self.scrolls.borrow().clone()
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls.borrow().len()
    }

    /// Net scroll position after replaying all recorded commands.
    pub fn position(&self) -> ScrollDelta {
        self.scrolls
            .borrow()
            .iter()
            .fold(ScrollDelta::ZERO, |acc, d| {
                ScrollDelta::new(acc.x + d.x, acc.y + d.y)
            })
    }
}

impl Viewport for RecordingViewport {
    fn size(&self) -> Size {
        self.size.get()
    }

    fn scroll_by(&self, delta: ScrollDelta) {
        self.scrolls.borrow_mut().push(delta);
    }
}

/// One recorded interaction with the control surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceCall {
    Create,
    SetActive(bool),
    Remove,
}

/// Control-surface double tracking element existence and presentation state.
#[derive(Default)]
pub struct FakeControlSurface {
    exists: Cell<bool>,
    active: Cell<bool>,
    calls: RefCell<Vec<SurfaceCall>>,
}

impl FakeControlSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn control_exists(&self) -> bool {
        self.exists.get()
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub fn calls(&self) -> Vec<SurfaceCall> {
        self.calls.borrow().clone()
    }

    pub fn count(&self, call: SurfaceCall) -> usize {
        self.calls.borrow().iter().filter(|c| **c == call).count()
    }
}

impl ControlSurface for FakeControlSurface {
    fn create_control(&self) {
        assert!(!self.exists.get(), "control created twice");
        self.exists.set(true);
        self.calls.borrow_mut().push(SurfaceCall::Create);
    }

    fn set_control_active(&self, active: bool) {
        assert!(self.exists.get(), "control styled before creation");
        self.active.set(active);
        self.calls.borrow_mut().push(SurfaceCall::SetActive(active));
    }

    fn remove_control(&self) {
        assert!(self.exists.get(), "control removed twice");
        self.exists.set(false);
        self.calls.borrow_mut().push(SurfaceCall::Remove);
    }
}

/// Capability probe with a fixed answer.
pub struct StaticCapabilities {
    touch: bool,
}

impl StaticCapabilities {
    pub fn touch() -> Self {
        Self { touch: true }
    }

    pub fn no_touch() -> Self {
        Self { touch: false }
    }
}

impl HostCapabilities for StaticCapabilities {
    fn touch_capable(&self) -> bool {
        self.touch
    }
}
