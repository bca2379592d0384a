use thiserror::Error;

/// Failure reported by a [`ModelLoader`](crate::ModelLoader).
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("fetch failed: {0}")]
    Fetch(String),
    #[error("asset could not be parsed: {0}")]
    Parse(String),
}

#[derive(Debug, Error)]
pub enum TrackerError {
    /// Model fetch/parse failed. The previously loaded model stays in place.
    #[error("failed to load model from {url}")]
    AssetLoad {
        url: String,
        #[source]
        source: LoadError,
    },
    /// The homography produced a non-finite or degenerate pose.
    #[error("transform yields a degenerate pose")]
    InvalidFrameData,
    #[error("invalid transform: {0}")]
    InvalidTransform(String),
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },
    #[error("canvas #{0} not found")]
    CanvasNotFound(String),
    #[error("scene backend error: {0}")]
    Backend(String),
    #[error("tracker has not been initialized")]
    NotInitialized,
    #[error("tracker has already been initialized")]
    AlreadyInitialized,
    #[error("tracker has been disposed")]
    Disposed,
}
