use tracker_core::TrackerError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Resolve `#canvas_id` (leading `#` optional) to a canvas element.
pub fn canvas_by_id(canvas_id: &str) -> Result<web::HtmlCanvasElement, TrackerError> {
    let id = canvas_id.trim_start_matches('#');
    let document =
        window_document().ok_or_else(|| TrackerError::Backend("no document".to_string()))?;
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
        .ok_or_else(|| TrackerError::CanvasNotFound(id.to_string()))
}

/// Readable text for a thrown JS value.
pub fn describe(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
