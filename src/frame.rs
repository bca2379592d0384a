use crate::TrackerSlot;
use std::cell::RefCell;
use std::rc::Weak;
use tracker_core::FrameScheduler;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// `requestAnimationFrame` scheduling for one bound callback.
#[derive(Default)]
pub struct RafScheduler {
    callback: Option<Closure<dyn FnMut()>>,
}

impl RafScheduler {
    pub fn bind(&mut self, callback: Closure<dyn FnMut()>) {
        self.callback = Some(callback);
    }
}

impl FrameScheduler for RafScheduler {
    type Handle = i32;

    fn request_frame(&mut self) -> Option<i32> {
        let callback = self.callback.as_ref()?;
        let window = web::window()?;
        match window.request_animation_frame(callback.as_ref().unchecked_ref()) {
            Ok(id) => Some(id),
            Err(e) => {
                log::error!("[frame] requestAnimationFrame failed: {:?}", e);
                None
            }
        }
    }

    fn cancel_frame(&mut self, handle: i32) {
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(handle);
        }
    }
}

/// Frame callback holding only a weak reference, so the loop never keeps a
/// disposed tracker alive.
pub fn frame_callback(slot: Weak<RefCell<TrackerSlot>>) -> Closure<dyn FnMut()> {
    Closure::wrap(Box::new(move || on_frame(&slot)) as Box<dyn FnMut()>)
}

fn on_frame(weak: &Weak<RefCell<TrackerSlot>>) {
    let Some(slot) = weak.upgrade() else {
        return;
    };
    let Ok(mut slot) = slot.try_borrow_mut() else {
        // The tick (and with it the next request) has to happen, or the loop
        // dies with a stale handle. A stop in the meantime turns it into a no-op.
        log::warn!("[frame] tracker busy; retrying next frame");
        retry_next_frame(weak.clone());
        return;
    };
    if let TrackerSlot::Ready(running) = &mut *slot {
        if running.render_loop.tick() {
            if let Err(e) = running.session.render_frame() {
                log::error!("render error: {:?}", e);
            }
        }
    }
}

fn retry_next_frame(weak: Weak<RefCell<TrackerSlot>>) {
    let retry = Closure::once_into_js(move || on_frame(&weak));
    let Some(window) = web::window() else {
        log::error!("[frame] no window; render loop stopped");
        return;
    };
    if let Err(e) = window.request_animation_frame(retry.unchecked_ref()) {
        log::error!("[frame] retry request failed, render loop stopped: {:?}", e);
    }
}
