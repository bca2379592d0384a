use crate::constants::DEGENERATE_EPSILON;
use crate::error::TrackerError;
use crate::homography::Homography;
use crate::viewport::Viewport;
use glam::{DMat4, DVec2, DVec3};

/// Position, orientation and uniform scale for the model node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub position: DVec3,
    pub rotation: DMat4,
    pub scale: f64,
}

impl Pose {
    /// Decompose `h` into a scene-space pose for the node.
    ///
    /// `track_point` is projected through `h` and moved into the centred,
    /// y-up scene frame of `viewport`; the decomposed scale multiplies
    /// `init_scale`. Returns [`TrackerError::InvalidFrameData`] when the
    /// projection weight or the normalized `m22` vanishes, or when any
    /// component comes out non-finite. Both tests are relative, so `h` and
    /// any positive multiple of it classify the same way.
    pub fn from_homography(
        h: &Homography,
        track_point: DVec2,
        viewport: Viewport,
        init_scale: f64,
    ) -> Result<Self, TrackerError> {
        let p = h.project(track_point);
        if p.z.abs() <= DEGENERATE_EPSILON * p.abs().element_sum() {
            return Err(TrackerError::InvalidFrameData);
        }
        let target = h.translation_at(track_point);
        let rs = h.rotation_and_scale();
        if !target.is_finite() || !rs.is_finite() || rs.scale.abs().recip() <= DEGENERATE_EPSILON
        {
            return Err(TrackerError::InvalidFrameData);
        }
        Ok(Self {
            position: viewport.image_to_scene(target),
            rotation: rs.rotation,
            scale: init_scale * rs.scale,
        })
    }
}
