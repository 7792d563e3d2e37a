//! Recording doubles for the tiltscroll collaborator traits.
//!
//! Used as a dev-dependency by the controller tests and by the demo app to
//! stand in for a real page environment.

pub mod doubles;

// Re-export testing utilities
pub use doubles::{FakeControlSurface, RecordingViewport, StaticCapabilities, SurfaceCall};
