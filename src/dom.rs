use crate::constants::OPEN_MENU_SELECTOR;
use crate::input::viewport_size;
use glam::Vec2;
use serde::Serialize;
use stage_core::Rect;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn canvas_origin(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(rect.left() as f32, rect.top() as f32)
}

#[inline]
pub fn canvas_viewport(canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    viewport_size(rect.width(), rect.height())
}

/// Bounding boxes of currently open menus, relative to the canvas.
pub fn open_menu_rects(document: &web::Document, canvas: &web::HtmlCanvasElement) -> Vec<Rect> {
    let origin = canvas_origin(canvas);
    let Ok(nodes) = document.query_selector_all(OPEN_MENU_SELECTOR) else {
        return Vec::new();
    };
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .map(|el| {
            let r = el.get_bounding_client_rect();
            Rect::new(
                r.left() as f32 - origin.x,
                r.top() as f32 - origin.y,
                r.width() as f32,
                r.height() as f32,
            )
        })
        .collect()
}

/// Fire a `CustomEvent` on `document` with `detail` serialized through JSON.
pub fn dispatch<T: Serialize + ?Sized>(document: &web::Document, name: &str, detail: &T) {
    let detail = match serde_json::to_string(detail)
        .map_err(|e| JsValue::from_str(&e.to_string()))
        .and_then(|s| js_sys::JSON::parse(&s))
    {
        Ok(v) => v,
        Err(e) => {
            log::error!("[dom] {} detail: {:?}", name, e);
            return;
        }
    };
    let init = web::CustomEventInit::new();
    init.set_detail(&detail);
    match web::CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(ev) => {
            _ = document.dispatch_event(&ev);
        }
        Err(e) => log::error!("[dom] {} event: {:?}", name, e),
    }
}

pub fn add_window_listener(name: &str, mut handler: impl FnMut() + 'static) {
    let closure = Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    if let Some(w) = web::window() {
        _ = w.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
