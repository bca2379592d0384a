#![cfg(target_arch = "wasm32")]
use js_sys::{Float64Array, Promise, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use tracker_core::{
    fetch_model, FrameOutcome, Host, RenderLoop, TrackerConfig, TrackerError, TrackerSession,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

mod backend;
mod constants;
mod dom;
mod frame;
mod loader;
mod overlay;
mod state;
mod three;

use state::Slot;

/// Everything alive between `initThree` and `dispose`.
pub(crate) struct Running {
    session: TrackerSession<backend::ThreeBackend>,
    render_loop: RenderLoop<frame::RafScheduler>,
    loader: loader::GltfModelLoader,
}

pub(crate) type TrackerSlot = Slot<Running>;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("tracker-web starting");
    Ok(())
}

fn to_js(e: TrackerError) -> JsValue {
    log::error!("[tracker] {}", e);
    JsError::new(&e.to_string()).into()
}

/// Pull `prediction.transform.data` out of a tracker result.
fn transform_data(prediction: &JsValue) -> Result<Vec<f64>, TrackerError> {
    let field = |obj: &JsValue, key: &str| {
        Reflect::get(obj, &JsValue::from_str(key))
            .ok()
            .filter(|v| v.is_object())
            .ok_or_else(|| TrackerError::InvalidTransform(format!("missing `{key}`")))
    };
    let data = field(&field(prediction, "transform")?, "data")?;
    Ok(Float64Array::new(&data).to_vec())
}

/// Image-tracker pose binding for one canvas.
///
/// Lifecycle: `new` → `initThree` → any number of `setModel` /
/// `updateModel` → `stopAnimate` → `dispose`. Calls after `dispose` throw.
#[wasm_bindgen]
#[derive(Clone)]
pub struct ImageTracker {
    slot: Rc<RefCell<TrackerSlot>>,
    host: Rc<overlay::DomHost>,
    config: Rc<TrackerConfig>,
}

impl Default for ImageTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl ImageTracker {
    #[wasm_bindgen(constructor)]
    pub fn new() -> ImageTracker {
        ImageTracker {
            slot: Rc::new(RefCell::new(Slot::Uninitialized)),
            host: Rc::new(overlay::DomHost),
            config: Rc::new(TrackerConfig::default()),
        }
    }

    /// Bind to `canvasId`, start rendering and load the first model.
    #[wasm_bindgen(js_name = initThree)]
    pub fn init_three(&self, canvas_id: String, model_url: String) -> Promise {
        let this = self.clone();
        future_to_promise(async move {
            this.init(&canvas_id).map_err(to_js)?;
            this.load(&model_url).await.map_err(to_js)?;
            Ok(JsValue::UNDEFINED)
        })
    }

    /// Apply one tracker result. Returns `true` if the model moved.
    ///
    /// Frames that arrive before `initThree` has resolved are ignored and
    /// return `false`.
    #[wasm_bindgen(js_name = setModel)]
    pub fn set_model(
        &self,
        prediction: &JsValue,
        canvas_width: f64,
        canvas_height: f64,
    ) -> Result<bool, JsValue> {
        let mut slot = self.slot.borrow_mut();
        let Some(running) = slot.frame_target().map_err(to_js)? else {
            log::debug!("[tracker] setModel before initThree resolved; frame ignored");
            return Ok(false);
        };
        let transform = transform_data(prediction).map_err(to_js)?;
        log::debug!("[tracker] prediction {:?}", transform);
        let outcome = running
            .session
            .set_model(&transform, canvas_width, canvas_height)
            .map_err(to_js)?;
        Ok(matches!(outcome, FrameOutcome::Applied(_)))
    }

    /// Replace the current model; with none loaded this is the first load.
    #[wasm_bindgen(js_name = updateModel)]
    pub fn update_model(&self, model_url: String) -> Promise {
        let this = self.clone();
        future_to_promise(async move {
            let replaced = this.load(&model_url).await.map_err(to_js)?;
            Ok(JsValue::from_bool(replaced))
        })
    }

    /// Stop scheduling frames. No frame renders after this returns.
    #[wasm_bindgen(js_name = stopAnimate)]
    pub fn stop_animate(&self) -> Result<(), JsValue> {
        match &mut *self.slot.borrow_mut() {
            Slot::Ready(running) => running.render_loop.stop(),
            Slot::Uninitialized => {}
            Slot::Disposed => return Err(to_js(TrackerError::Disposed)),
        }
        Ok(())
    }

    /// Release scene, renderer and model. Allowed once.
    pub fn dispose(&self) -> Result<(), JsValue> {
        let previous = std::mem::replace(&mut *self.slot.borrow_mut(), Slot::Disposed);
        match previous {
            Slot::Ready(mut running) => {
                running.render_loop.stop();
                running.session.dispose().map_err(to_js)?;
                log::info!(
                    "[tracker] disposed after {} frames",
                    running.render_loop.frames_rendered()
                );
                Ok(())
            }
            Slot::Uninitialized => Ok(()),
            Slot::Disposed => Err(to_js(TrackerError::Disposed)),
        }
    }

    /// How many times the camera frustum followed a viewport change.
    #[wasm_bindgen(js_name = frustumUpdates)]
    pub fn frustum_updates(&self) -> Result<f64, JsValue> {
        let slot = self.slot.borrow();
        let running = slot.running().map_err(to_js)?;
        Ok(running.session.frustum_updates() as f64)
    }
}

impl ImageTracker {
    fn init(&self, canvas_id: &str) -> Result<(), TrackerError> {
        match &*self.slot.borrow() {
            Slot::Uninitialized => {}
            Slot::Ready(_) => return Err(TrackerError::AlreadyInitialized),
            Slot::Disposed => return Err(TrackerError::Disposed),
        }
        let canvas = dom::canvas_by_id(canvas_id)?;
        let loader = loader::GltfModelLoader::new()
            .map_err(|e| TrackerError::Backend(format!("{e:#}")))?;
        let session = TrackerSession::new(
            backend::ThreeBackend::new(canvas),
            (*self.config).clone(),
            self.host.pixel_ratio(),
        )?;

        let mut render_loop = RenderLoop::new(frame::RafScheduler::default());
        render_loop
            .scheduler_mut()
            .bind(frame::frame_callback(Rc::downgrade(&self.slot)));
        render_loop.start();

        *self.slot.borrow_mut() = Slot::Ready(Running {
            session,
            render_loop,
            loader,
        });
        log::info!("[tracker] initialized on #{}", canvas_id);
        Ok(())
    }

    /// Fetch without holding the state borrow, then install.
    async fn load(&self, url: &str) -> Result<bool, TrackerError> {
        let loader = self.slot.borrow().running()?.loader.clone();
        let asset = fetch_model(&loader, &*self.host, &self.config, url).await?;
        let replaced = self
            .slot
            .borrow_mut()
            .running_mut()?
            .session
            .install_model(asset)?;
        let action = if replaced { "replaced" } else { "loaded" };
        log::info!("[tracker] model {} {}", action, url);
        Ok(replaced)
    }
}
