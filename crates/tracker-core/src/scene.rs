//! Capability traits the session drives.
//!
//! These keep the decomposition and pose bookkeeping free of any rendering
//! library. The web front-end implements them over three.js and the DOM;
//! tests implement them with recording fakes.

use crate::config::SceneSetup;
use crate::error::TrackerError;
use crate::pose::Pose;
use crate::viewport::OrthoBounds;

/// Minimal scene-graph surface: camera, lights, nodes and a render call.
pub trait SceneBackend {
    /// Loaded asset as returned by the model loader.
    type Asset;
    /// Scaling container that wraps an asset inside the scene.
    type Node;

    /// Build camera, scene, lights and renderer.
    fn create_scene(&mut self, setup: &SceneSetup) -> Result<(), TrackerError>;
    fn set_camera_bounds(&mut self, bounds: &OrthoBounds);
    fn wrap_asset(&mut self, asset: Self::Asset, scale: f64) -> Self::Node;
    fn add_node(&mut self, node: &Self::Node);
    fn remove_node(&mut self, node: &Self::Node);
    fn set_node_pose(&mut self, node: &Self::Node, pose: &Pose);
    fn render(&mut self);
    /// Release renderer resources. Called once.
    fn dispose(&mut self);
}

/// Device queries and transient user feedback provided by the host.
pub trait Host {
    fn pixel_ratio(&self) -> f64;
    fn show_loading(&self, title: &str);
    fn hide_loading(&self);
    fn show_toast(&self, title: &str, duration_ms: u32);
}
