use crate::constants::*;
use crate::dom;
use tracker_core::Host;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
fn show(el: &web::Element) {
    _ = el.class_list().remove_1(HIDDEN_CLASS);
    // fallback for environments without CSS class
    _ = el.set_attribute("style", "");
}

#[inline]
fn hide(el: &web::Element) {
    _ = el.class_list().add_1(HIDDEN_CLASS);
    // fallback
    _ = el.set_attribute("style", HIDDEN_STYLE);
}

fn element(id: &str) -> Option<web::Element> {
    dom::window_document().and_then(|d| d.get_element_by_id(id))
}

/// Host feedback through optional page elements; falls back to the log.
#[derive(Default)]
pub struct DomHost;

impl Host for DomHost {
    fn pixel_ratio(&self) -> f64 {
        web::window()
            .map(|w| w.device_pixel_ratio())
            .filter(|r| r.is_finite() && *r > 0.0)
            .unwrap_or(DEFAULT_PIXEL_RATIO)
    }

    fn show_loading(&self, title: &str) {
        match element(LOADING_OVERLAY_ID) {
            Some(el) => {
                el.set_text_content(Some(title));
                show(&el);
            }
            None => log::info!("[host] {}", title),
        }
    }

    fn hide_loading(&self) {
        if let Some(el) = element(LOADING_OVERLAY_ID) {
            hide(&el);
        }
    }

    fn show_toast(&self, title: &str, duration_ms: u32) {
        let Some(el) = element(TOAST_ID) else {
            log::warn!("[host] {}", title);
            return;
        };
        el.set_text_content(Some(title));
        show(&el);
        if let Some(window) = web::window() {
            let hide_later = Closure::once_into_js(move || hide(&el));
            _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                hide_later.unchecked_ref(),
                duration_ms.min(i32::MAX as u32) as i32,
            );
        }
    }
}
