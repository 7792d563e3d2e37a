//! One-shot support check.
//!
//! Activation waits for the first orientation sample before deciding whether
//! the feature is available. That wait is modeled as a single-resolution
//! future: the controller resolves the shared probe state exactly once, and
//! the [`SupportCheck`] handle the caller got back from `charge` observes the
//! verdict. If the environment never delivers a sample the future simply
//! never resolves; that is a valid terminal outcome, not an error.

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;
use std::task::{Context, Poll, Waker};

#[derive(Default)]
struct ProbeState {
    verdict: Option<bool>,
    waker: Option<Waker>,
}

/// Controller-side handle; resolves the check at most once.
#[derive(Clone, Default)]
pub(crate) struct SupportProbe {
    state: Rc<RefCell<ProbeState>>,
}

impl SupportProbe {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn check(&self) -> SupportCheck {
        SupportCheck {
            state: Rc::clone(&self.state),
        }
    }

    /// Records the verdict and wakes a pending awaiter. Later calls are
    /// ignored; the first verdict sticks.
    pub(crate) fn resolve(&self, supported: bool) {
        let mut state = self.state.borrow_mut();
        if state.verdict.is_some() {
            return;
        }
        state.verdict = Some(supported);
        if let Some(waker) = state.waker.take() {
            waker.wake();
        }
    }
}

/// Caller-side future for the support verdict.
///
/// Resolves `true` when the environment passed the check and the controller
/// reached `Ready`, `false` when the check failed. Dropping it does not
/// cancel the pending probe inside the controller.
pub struct SupportCheck {
    state: Rc<RefCell<ProbeState>>,
}

impl SupportCheck {
    /// Non-blocking peek for hosts that poll from a plain event loop
    /// instead of an executor.
    pub fn verdict(&mut self) -> Option<bool> {
        let waker = futures_task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        match Pin::new(self).poll(&mut cx) {
            Poll::Ready(supported) => Some(supported),
            Poll::Pending => None,
        }
    }
}

impl Future for SupportCheck {
    type Output = bool;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut state = self.state.borrow_mut();
        if let Some(verdict) = state.verdict {
            return Poll::Ready(verdict);
        }
        state.waker = Some(cx.waker().clone());
        Poll::Pending
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_until_resolved() {
        let probe = SupportProbe::new();
        let mut check = probe.check();
        assert_eq!(check.verdict(), None);

        probe.resolve(true);
        assert_eq!(check.verdict(), Some(true));
        // The verdict sticks across repeated polls.
        assert_eq!(check.verdict(), Some(true));
    }

    #[test]
    fn test_first_verdict_wins() {
        let probe = SupportProbe::new();
        let mut check = probe.check();

        probe.resolve(false);
        probe.resolve(true);
        assert_eq!(check.verdict(), Some(false));
    }

    #[test]
    fn test_waker_fires_on_resolution() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        struct CountingWake(AtomicUsize);
        impl futures_task::ArcWake for CountingWake {
            fn wake_by_ref(arc_self: &Arc<Self>) {
                arc_self.0.fetch_add(1, Ordering::SeqCst);
            }
        }

        let probe = SupportProbe::new();
        let mut check = probe.check();

        let wakes = Arc::new(CountingWake(AtomicUsize::new(0)));
        let waker = futures_task::waker(Arc::clone(&wakes));
        let mut cx = Context::from_waker(&waker);

        assert!(Pin::new(&mut check).poll(&mut cx).is_pending());
        probe.resolve(true);
        assert_eq!(wakes.0.load(Ordering::SeqCst), 1);
        assert_eq!(Pin::new(&mut check).poll(&mut cx), Poll::Ready(true));
    }

    #[test]
    fn test_dropping_check_does_not_break_probe() {
        let probe = SupportProbe::new();
        drop(probe.check());
        probe.resolve(true);

        let mut late = probe.check();
        assert_eq!(late.verdict(), Some(true));
    }
}
