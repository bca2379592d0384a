use crate::error::TrackerError;
use glam::{DVec2, DVec3};

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Orthographic frustum bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrthoBounds {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
    pub near: f64,
    pub far: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Result<Self, TrackerError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(TrackerError::InvalidViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Bounds centred on the origin, one scene unit per canvas pixel.
    pub fn ortho_bounds(&self, near: f64, far: f64) -> OrthoBounds {
        OrthoBounds {
            left: -0.5 * self.width,
            right: 0.5 * self.width,
            top: 0.5 * self.height,
            bottom: -0.5 * self.height,
            near,
            far,
        }
    }

    /// Map an image point (top-left origin, y down) to the scene plane
    /// (centred origin, y up) at z = 0.
    #[inline]
    pub fn image_to_scene(&self, p: DVec2) -> DVec3 {
        DVec3::new(p.x - self.width / 2.0, self.height / 2.0 - p.y, 0.0)
    }
}

impl OrthoBounds {
    /// Placeholder frustum used before the first viewport is known.
    pub fn unit(near: f64, far: f64) -> Self {
        Self {
            left: 1.0,
            right: 1.0,
            top: 1.0,
            bottom: 1.0,
            near,
            far,
        }
    }
}
