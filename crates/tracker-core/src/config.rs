//! Runtime configuration for a tracker session.
//!
//! Defaults come from [`crate::constants`]; front-ends override individual
//! fields before creating a session.

use crate::constants::*;
use glam::{DVec2, DVec3};

/// Parameters handed to [`SceneBackend::create_scene`](crate::SceneBackend::create_scene).
#[derive(Clone, Debug, PartialEq)]
pub struct SceneSetup {
    pub near: f64,
    pub far: f64,
    pub ambient_color: u32,
    pub directional_color: u32,
    pub directional_intensity: f64,
    pub directional_position: DVec3,
    pub pixel_ratio: f64,
}

#[derive(Clone, Debug)]
pub struct TrackerConfig {
    pub init_scale: f64,
    /// Point on the pattern image whose projection positions the model.
    pub track_point: DVec2,
    pub camera_near: f64,
    pub camera_far: f64,
    pub ambient_color: u32,
    pub directional_color: u32,
    pub directional_intensity: f64,
    pub directional_position: DVec3,
    pub loading_title: String,
    pub load_failed_title: String,
    pub toast_duration_ms: u32,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            init_scale: INIT_SCALE,
            track_point: DVec2::from_array(TRACK_POINT),
            camera_near: CAMERA_NEAR,
            camera_far: CAMERA_FAR,
            ambient_color: AMBIENT_LIGHT_COLOR,
            directional_color: DIRECTIONAL_LIGHT_COLOR,
            directional_intensity: DIRECTIONAL_LIGHT_INTENSITY,
            directional_position: DVec3::from_array(DIRECTIONAL_LIGHT_POSITION),
            loading_title: LOADING_TITLE.to_string(),
            load_failed_title: LOAD_FAILED_TITLE.to_string(),
            toast_duration_ms: TOAST_DURATION_MS,
        }
    }
}

impl TrackerConfig {
    pub fn scene_setup(&self, pixel_ratio: f64) -> SceneSetup {
        SceneSetup {
            near: self.camera_near,
            far: self.camera_far,
            ambient_color: self.ambient_color,
            directional_color: self.directional_color,
            directional_intensity: self.directional_intensity,
            directional_position: self.directional_position,
            pixel_ratio,
        }
    }
}
