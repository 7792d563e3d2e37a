//! Replays a scripted orientation trace through a controller and logs the
//! scroll commands, standing in for a real page host.

use std::rc::Rc;
use tiltscroll::prelude::*;
use tiltscroll_testing::{FakeControlSurface, RecordingViewport, StaticCapabilities};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let viewport = Rc::new(RecordingViewport::new(Size::new(390.0, 844.0)));
    let surface = Rc::new(FakeControlSurface::new());
    let mut controller = TiltScrollController::new(
        viewport.clone(),
        surface.clone(),
        Rc::new(StaticCapabilities::touch()),
    );

    // Options arrive the way a page would supply them: as an attribute string.
    let options = match parse_options("speed:200, insensitivity:2") {
        ParsedOptions::Values(values) => values,
        ParsedOptions::Raw(raw) => {
            log::warn!("unparseable options {raw:?}, using defaults");
            Default::default()
        }
    };

    let mut check = controller
        .charge(options)
        .expect("fresh controller must accept charge");

    // The first delivered sample settles the support check.
    controller.handle_orientation(OrientationSample::new(Some(120.0), Some(40.0), Some(5.0)));
    log::info!("support check verdict: {:?}", check.verdict());

    // User taps the control to engage, then tilts the device and holds it.
    controller.handle_control_touch();
    let resting = OrientationSample::new(Some(120.0), Some(40.0), Some(5.0));
    controller.handle_orientation(resting);

    let tilted = OrientationSample::new(Some(120.0), Some(48.0), Some(5.0));
    for _ in 0..5 {
        controller.handle_orientation(tilted);
    }

    for (i, delta) in viewport.scrolls().iter().enumerate() {
        log::info!("scroll {i}: ({:.2}, {:.2})", delta.x, delta.y);
    }
    let position = viewport.position();
    log::info!("net position: ({:.2}, {:.2})", position.x, position.y);

    // Rotating the device disengages; tapping the control re-engages.
    controller.handle_axis_flip();
    log::info!("after axis flip: {:?}", controller.phase());

    controller.discharge();
    log::info!("after discharge: {:?}", controller.phase());
}
