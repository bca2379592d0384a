use crate::config::TrackerConfig;
use crate::error::{LoadError, TrackerError};
use crate::scene::Host;
use instant::Instant;
use std::future::Future;

/// Asynchronous asset source (glTF on the web).
pub trait ModelLoader {
    type Asset;

    fn load(&self, url: &str) -> impl Future<Output = Result<Self::Asset, LoadError>>;
}

/// Fetch one model with host feedback around it.
///
/// The loading indicator is shown for the duration of the request. A failure
/// raises a toast and comes back as [`TrackerError::AssetLoad`]; nothing is
/// retried.
pub async fn fetch_model<L, H>(
    loader: &L,
    host: &H,
    config: &TrackerConfig,
    url: &str,
) -> Result<L::Asset, TrackerError>
where
    L: ModelLoader,
    H: Host + ?Sized,
{
    host.show_loading(&config.loading_title);
    let started = Instant::now();
    let result = loader.load(url).await;
    host.hide_loading();
    match result {
        Ok(asset) => {
            log::info!(
                "[loader] loaded {} in {} ms",
                url,
                started.elapsed().as_millis()
            );
            Ok(asset)
        }
        Err(source) => {
            log::error!("[loader] {}: {}", url, source);
            host.show_toast(&config.load_failed_title, config.toast_duration_ms);
            Err(TrackerError::AssetLoad {
                url: url.to_string(),
                source,
            })
        }
    }
}
