use tiltscroll::controller::TiltScrollController;
use std::collections::HashMap;
use std::rc::Rc;
use tiltscroll_core::{OrientationSample, ScrollDelta, Size};
use tiltscroll_testing::{FakeControlSurface, RecordingViewport, StaticCapabilities};

const PORTRAIT: Size = Size {
    width: 320.0,
    height: 480.0,
};

fn engaged_controller(viewport: Rc<RecordingViewport>) -> TiltScrollController {
    let surface = Rc::new(FakeControlSurface::new());
    let mut controller = TiltScrollController::new(
        viewport,
        surface,
        Rc::new(StaticCapabilities::touch()),
    );
    controller.charge(HashMap::new()).unwrap();
    // First sample settles the support check only.
    controller.handle_orientation(OrientationSample::new(Some(0.0), None, None));
    controller.jump();
    controller
}

fn assert_close(delta: ScrollDelta, x: f32, y: f32) {
    assert!(
        (delta.x - x).abs() < 1e-3 && (delta.y - y).abs() < 1e-3,
        "expected ({x}, {y}), got ({}, {})",
        delta.x,
        delta.y
    );
}

#[test]
fn test_first_engaged_sample_primes_without_scrolling() {
    let viewport = Rc::new(RecordingViewport::new(PORTRAIT));
    let mut controller = engaged_controller(viewport.clone());

    controller.handle_orientation(OrientationSample::new(Some(100.0), Some(100.0), Some(100.0)));

    assert_eq!(viewport.scroll_count(), 0, "priming must not scroll");
}

#[test]
fn test_engaged_tilt_scrolls_portrait() {
    let viewport = Rc::new(RecordingViewport::new(PORTRAIT));
    let mut controller = engaged_controller(viewport.clone());

    controller.handle_orientation(OrientationSample::new(Some(100.0), Some(100.0), Some(100.0)));
    controller.handle_orientation(OrientationSample::new(Some(110.0), Some(90.0), Some(100.0)));

    let scrolls = viewport.scrolls();
    assert_eq!(scrolls.len(), 1);
    // speed 150, insensitivity 5: 150 * ((110 - 5) / 100 - 1) = 7.5
    assert_close(scrolls[0], 7.5, -7.5);
}

#[test]
fn test_engaged_tilt_scrolls_landscape() {
    let viewport = Rc::new(RecordingViewport::new(Size::new(480.0, 320.0)));
    let mut controller = engaged_controller(viewport.clone());

    controller.handle_orientation(OrientationSample::new(Some(100.0), Some(100.0), Some(100.0)));
    controller.handle_orientation(OrientationSample::new(Some(100.0), Some(110.0), Some(90.0)));

    let scrolls = viewport.scrolls();
    assert_eq!(scrolls.len(), 1);
    assert_close(scrolls[0], 7.5, -7.5);
}

#[test]
fn test_sustained_tilt_keeps_scrolling_against_fixed_baseline() {
    let viewport = Rc::new(RecordingViewport::new(PORTRAIT));
    let mut controller = engaged_controller(viewport.clone());

    controller.handle_orientation(OrientationSample::new(Some(100.0), Some(100.0), Some(100.0)));
    let held = OrientationSample::new(Some(110.0), Some(100.0), Some(100.0));
    controller.handle_orientation(held);
    controller.handle_orientation(held);
    controller.handle_orientation(held);

    // The baseline never advances, so an unchanged tilt keeps producing the
    // same per-event shift and the page keeps moving.
    let scrolls = viewport.scrolls();
    assert_eq!(scrolls.len(), 3);
    assert_eq!(scrolls[0], scrolls[1]);
    assert_eq!(scrolls[1], scrolls[2]);
    assert_close(viewport.position(), 22.5, 0.0);
}

#[test]
fn test_ready_samples_reprime_instead_of_scrolling() {
    let viewport = Rc::new(RecordingViewport::new(PORTRAIT));
    let mut controller = engaged_controller(viewport.clone());

    controller.handle_orientation(OrientationSample::new(Some(100.0), Some(100.0), Some(100.0)));
    controller.kick();

    // Disengaged samples re-prime the baseline without scrolling.
    controller.handle_orientation(OrientationSample::new(Some(50.0), Some(50.0), Some(50.0)));
    controller.handle_orientation(OrientationSample::new(Some(60.0), Some(60.0), Some(60.0)));
    assert_eq!(viewport.scroll_count(), 0);

    // The first engaged sample compares against the freshest baseline (60),
    // not against anything seen while previously engaged.
    controller.jump();
    controller.handle_orientation(OrientationSample::new(Some(66.0), Some(60.0), Some(60.0)));
    let scrolls = viewport.scrolls();
    assert_eq!(scrolls.len(), 1);
    // 150 * ((66 - 5) / 60 - 1) = 2.5
    assert_close(scrolls[0], 2.5, 0.0);
}

#[test]
fn test_dead_zone_tilt_emits_zero_shift() {
    let viewport = Rc::new(RecordingViewport::new(PORTRAIT));
    let mut controller = engaged_controller(viewport.clone());

    controller.handle_orientation(OrientationSample::new(Some(100.0), Some(100.0), Some(100.0)));
    controller.handle_orientation(OrientationSample::new(Some(103.0), Some(98.0), Some(100.0)));

    // The command is still emitted, but jitter inside the dead-zone maps to
    // a zero shift on both axes.
    let scrolls = viewport.scrolls();
    assert_eq!(scrolls.len(), 1);
    assert_eq!(scrolls[0], ScrollDelta::ZERO);
}

#[test]
fn test_aspect_flip_switches_axis_mapping() {
    let viewport = Rc::new(RecordingViewport::new(PORTRAIT));
    let mut controller = engaged_controller(viewport.clone());

    controller.handle_orientation(OrientationSample::new(Some(100.0), Some(100.0), Some(100.0)));

    // Host rotates the window; the axis-flip notification disengages.
    viewport.set_size(Size::new(480.0, 320.0));
    controller.handle_axis_flip();
    controller.handle_orientation(OrientationSample::new(Some(100.0), Some(80.0), Some(100.0)));
    assert_eq!(viewport.scroll_count(), 0, "disengaged after flip");

    // Re-engage: beta now drives x instead of y.
    controller.jump();
    controller.handle_orientation(OrientationSample::new(Some(100.0), Some(90.0), Some(80.0)));
    let scrolls = viewport.scrolls();
    assert_eq!(scrolls.len(), 1);
    // x: 150 * ((90 - 5) / 80 - 1) = 9.375; y: 150 * ((80 + 5) / 100 - 1) = -22.5
    assert_close(scrolls[0], 9.375, -22.5);
}
