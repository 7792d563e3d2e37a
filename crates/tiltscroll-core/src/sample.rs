//! Event data types shared between the converter and the controller.

/// A single orientation sensor reading, in degrees.
///
/// Each axis is `None` when the sensor does not report it. Samples are
/// ephemeral; the converter keeps only the one it was last primed with.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct OrientationSample {
    /// Rotation around the z-axis (compass heading), 0..360.
    pub alpha: Option<f32>,
    /// Front-to-back tilt, -180..180.
    pub beta: Option<f32>,
    /// Left-to-right tilt, -90..90.
    pub gamma: Option<f32>,
}

impl OrientationSample {
    pub fn new(alpha: Option<f32>, beta: Option<f32>, gamma: Option<f32>) -> Self {
        Self { alpha, beta, gamma }
    }

    /// True when at least one axis carries a reading. Used by the support
    /// probe to decide whether the sensor is actually delivering data.
    pub fn has_any_axis(&self) -> bool {
        self.alpha.is_some() || self.beta.is_some() || self.gamma.is_some()
    }
}

/// Viewport dimensions in logical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn aspect(&self) -> Aspect {
        if self.height > self.width {
            Aspect::Portrait
        } else {
            Aspect::Landscape
        }
    }
}

/// Device aspect, derived from the viewport size. Decides which sample axes
/// drive which scroll axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Aspect {
    Portrait,
    Landscape,
}

/// A scroll-by command, in logical pixels per axis.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollDelta {
    pub x: f32,
    pub y: f32,
}

impl ScrollDelta {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aspect_from_size() {
        assert_eq!(Size::new(320.0, 480.0).aspect(), Aspect::Portrait);
        assert_eq!(Size::new(480.0, 320.0).aspect(), Aspect::Landscape);
        // A square viewport counts as landscape (height is not greater).
        assert_eq!(Size::new(400.0, 400.0).aspect(), Aspect::Landscape);
    }

    #[test]
    fn test_has_any_axis() {
        assert!(!OrientationSample::default().has_any_axis());
        assert!(OrientationSample::new(None, Some(10.0), None).has_any_axis());
    }
}
