pub mod config;
pub mod constants;
pub mod error;
pub mod homography;
pub mod loader;
pub mod pose;
pub mod render_loop;
pub mod scene;
pub mod session;
pub mod viewport;

pub use config::*;
pub use error::*;
pub use homography::*;
pub use loader::*;
pub use pose::*;
pub use render_loop::*;
pub use scene::*;
pub use session::*;
pub use viewport::*;
