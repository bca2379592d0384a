//! Per-canvas tracker session.
//!
//! A [`TrackerSession`] owns the scene backend, the live model node and the
//! cached viewport. Every operation takes `&mut self`, so a model swap and a
//! render step can never interleave.

use crate::config::TrackerConfig;
use crate::error::TrackerError;
use crate::homography::Homography;
use crate::loader::{fetch_model, ModelLoader};
use crate::pose::Pose;
use crate::scene::{Host, SceneBackend};
use crate::viewport::{OrthoBounds, Viewport};

/// What a call to [`TrackerSession::set_model`] did with the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FrameOutcome {
    Applied(Pose),
    /// No model loaded yet; only the viewport was updated.
    NoModel,
    /// Degenerate homography; the node kept its previous pose.
    Skipped,
}

pub struct TrackerSession<B: SceneBackend> {
    backend: B,
    config: TrackerConfig,
    model: Option<B::Node>,
    viewport: Option<Viewport>,
    frustum_updates: u64,
    disposed: bool,
}

impl<B: SceneBackend> TrackerSession<B> {
    /// Build the scene on `backend`. The camera starts with placeholder
    /// bounds until the first frame reports a viewport.
    pub fn new(
        mut backend: B,
        config: TrackerConfig,
        pixel_ratio: f64,
    ) -> Result<Self, TrackerError> {
        log::info!("[session] device pixel ratio {}", pixel_ratio);
        backend.create_scene(&config.scene_setup(pixel_ratio))?;
        backend.set_camera_bounds(&OrthoBounds::unit(config.camera_near, config.camera_far));
        Ok(Self {
            backend,
            config,
            model: None,
            viewport: None,
            frustum_updates: 0,
            disposed: false,
        })
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn model(&self) -> Option<&B::Node> {
        self.model.as_ref()
    }

    #[inline]
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    #[inline]
    pub fn viewport(&self) -> Option<Viewport> {
        self.viewport
    }

    /// How many times the camera frustum has been recomputed.
    #[inline]
    pub fn frustum_updates(&self) -> u64 {
        self.frustum_updates
    }

    #[inline]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    fn ensure_live(&self) -> Result<(), TrackerError> {
        if self.disposed {
            return Err(TrackerError::Disposed);
        }
        Ok(())
    }

    /// Update the cached viewport; returns `true` if the frustum changed.
    pub fn resize(&mut self, width: f64, height: f64) -> Result<bool, TrackerError> {
        self.ensure_live()?;
        let viewport = Viewport::new(width, height)?;
        Ok(self.apply_viewport(viewport))
    }

    fn apply_viewport(&mut self, viewport: Viewport) -> bool {
        if self.viewport == Some(viewport) {
            return false;
        }
        self.viewport = Some(viewport);
        let bounds = viewport.ortho_bounds(self.config.camera_near, self.config.camera_far);
        self.backend.set_camera_bounds(&bounds);
        self.frustum_updates += 1;
        log::debug!("[session] viewport {}x{}", viewport.width, viewport.height);
        true
    }

    /// Apply one tracked frame to the model node.
    ///
    /// `transform` is the tracker's row-major homography. The viewport is
    /// refreshed first, even when no model is loaded yet.
    pub fn set_model(
        &mut self,
        transform: &[f64],
        width: f64,
        height: f64,
    ) -> Result<FrameOutcome, TrackerError> {
        self.ensure_live()?;
        let viewport = Viewport::new(width, height)?;
        self.apply_viewport(viewport);
        let Some(node) = self.model.as_ref() else {
            log::debug!("[session] set_model: 3d model is not loaded");
            return Ok(FrameOutcome::NoModel);
        };
        let h = Homography::from_slice(transform)?;
        let pose = Pose::from_homography(
            &h,
            self.config.track_point,
            viewport,
            self.config.init_scale,
        );
        match pose {
            Ok(pose) => {
                self.backend.set_node_pose(node, &pose);
                Ok(FrameOutcome::Applied(pose))
            }
            Err(TrackerError::InvalidFrameData) => {
                log::warn!("[session] skipping degenerate frame {:?}", transform);
                Ok(FrameOutcome::Skipped)
            }
            Err(e) => Err(e),
        }
    }

    /// Wrap `asset` at the initial scale and make it the live model.
    ///
    /// Returns `true` if a previous model was replaced.
    pub fn install_model(&mut self, asset: B::Asset) -> Result<bool, TrackerError> {
        self.ensure_live()?;
        let node = self.backend.wrap_asset(asset, self.config.init_scale);
        let previous = self.model.take();
        if let Some(old) = &previous {
            self.backend.remove_node(old);
        }
        self.backend.add_node(&node);
        self.model = Some(node);
        Ok(previous.is_some())
    }

    /// Fetch and install a model. Also used to replace one; with no model
    /// loaded it behaves as the initial load.
    pub async fn load_model<L, H>(
        &mut self,
        loader: &L,
        host: &H,
        url: &str,
    ) -> Result<bool, TrackerError>
    where
        L: ModelLoader<Asset = B::Asset>,
        H: Host + ?Sized,
    {
        self.ensure_live()?;
        let asset = fetch_model(loader, host, &self.config, url).await?;
        self.install_model(asset)
    }

    pub fn render_frame(&mut self) -> Result<(), TrackerError> {
        self.ensure_live()?;
        self.backend.render();
        Ok(())
    }

    /// Drop the model and release the backend. Allowed once.
    pub fn dispose(&mut self) -> Result<(), TrackerError> {
        self.ensure_live()?;
        if let Some(node) = self.model.take() {
            self.backend.remove_node(&node);
        }
        self.backend.dispose();
        self.viewport = None;
        self.disposed = true;
        log::info!("[session] disposed");
        Ok(())
    }
}
