//! Planar homography decomposition.
//!
//! A tracker reports the pattern-image → view mapping as a row-major 3×3
//! matrix `[m00, m01, m02, m10, m11, m12, m20, m21, m22]`. This module turns
//! that matrix into the pieces a scene node needs: the projected location of a
//! reference point, a rotation built from the first two columns, and a uniform
//! scale.

use crate::error::TrackerError;
use glam::{DMat4, DVec2, DVec3};

/// Validated 3×3 homography, row-major.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Homography {
    m: [f64; 9],
}

impl Homography {
    pub const IDENTITY: Self = Self {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
    };

    /// Wrap nine row-major values without validation.
    pub const fn new(m: [f64; 9]) -> Self {
        Self { m }
    }

    /// Build from tracker output, which must be exactly nine finite numbers.
    pub fn from_slice(data: &[f64]) -> Result<Self, TrackerError> {
        let m: [f64; 9] = data.try_into().map_err(|_| {
            TrackerError::InvalidTransform(format!("expected 9 values, got {}", data.len()))
        })?;
        if let Some(i) = m.iter().position(|v| !v.is_finite()) {
            return Err(TrackerError::InvalidTransform(format!(
                "entry {i} is not finite ({})",
                m[i]
            )));
        }
        Ok(Self { m })
    }

    #[inline]
    pub fn as_array(&self) -> &[f64; 9] {
        &self.m
    }

    /// Element-wise multiple of this matrix.
    pub fn scaled(&self, k: f64) -> Self {
        Self {
            m: self.m.map(|v| v * k),
        }
    }

    /// Homogeneous image `(x', y', w')` of `(p.x, p.y, 1)`.
    #[inline]
    pub fn project(&self, p: DVec2) -> DVec3 {
        let [m00, m01, m02, m10, m11, m12, m20, m21, m22] = self.m;
        DVec3::new(
            m00 * p.x + m01 * p.y + m02,
            m10 * p.x + m11 * p.y + m12,
            m20 * p.x + m21 * p.y + m22,
        )
    }

    pub fn translation_at(&self, p: DVec2) -> DVec2 {
        decompose_translation(&self.m, p.x, p.y)
    }

    pub fn rotation_and_scale(&self) -> RotationScale {
        decompose_rotation_scale(&self.m)
    }
}

/// Project `(x, y)` through `td` and perspective-divide.
///
/// The result is non-finite when the homogeneous weight is zero; callers
/// decide whether that frame is usable.
pub fn decompose_translation(td: &[f64; 9], x: f64, y: f64) -> DVec2 {
    let h = Homography::new(*td).project(DVec2::new(x, y));
    let sc = 1.0 / h.z;
    let t = DVec2::new(h.x * sc, h.y * sc);
    log::debug!("[pose] translation ({:.3}, {:.3})", t.x, t.y);
    t
}

/// Rotation and uniform scale recovered from a homography.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RotationScale {
    /// `c1`, `c2` from the normalized first two columns, `c3 = c1 × c2`.
    pub axes: [DVec3; 3],
    /// Homogeneous 4×4 laid out as the scene graph consumes it.
    pub rotation: DMat4,
    pub scale: f64,
}

impl RotationScale {
    /// Column-major array form of [`Self::rotation`].
    pub fn rotation_array(&self) -> [f64; 16] {
        self.rotation.to_cols_array()
    }

    pub fn is_finite(&self) -> bool {
        self.scale.is_finite() && self.rotation.is_finite()
    }
}

/// Split `td` into an orientation and a scale.
///
/// The matrix is normalized by the length of its first column, the first two
/// columns become rotation axes and the third axis is their cross product.
/// No further orthonormalization is applied, so drift between `c1` and `c2`
/// carries into the result. `scale` is the reciprocal of the normalized `m22`.
pub fn decompose_rotation_scale(td: &[f64; 9]) -> RotationScale {
    let norm = (td[0] * td[0] + td[3] * td[3] + td[6] * td[6]).sqrt();
    let [m00, m01, _m02, m10, m11, _m12, m20, m21, m22] = td.map(|v| v / norm);

    let c1 = DVec3::new(m00, m10, m20);
    let c2 = DVec3::new(m01, m11, m21);
    let c3 = DVec3::new(
        m21 * m10 - m20 * m11,
        m20 * m01 - m21 * m00,
        m00 * m11 - m10 * m01,
    );
    let scale = 1.0 / m22;

    #[rustfmt::skip]
    let rotation = DMat4::from_cols_array(&[
        c1.x, c2.x, c3.x, 0.0,
        c1.y, c2.y, c3.y, 0.0,
        c1.z, c2.z, c3.z, 0.0,
        0.0,  0.0,  0.0,  1.0,
    ]);

    log::debug!("[pose] scale {:.4}", scale);
    RotationScale {
        axes: [c1, c2, c3],
        rotation,
        scale,
    }
}
