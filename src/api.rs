//! Functions the page's menus call back into.

use crate::app;
use crate::input::parse_coordinate;
use crate::stages;
use glam::Vec3;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = selectAnnotation)]
pub fn select_annotation(index: usize) -> bool {
    let Some(app) = app::current() else {
        return false;
    };
    let now = app.now_ms();
    app.with_scene(|scene, rig| scene.select_annotation(index, now, rig))
}

/// Hover driven from the annotation list; `undefined` clears it.
#[wasm_bindgen(js_name = hoverAnnotation)]
pub fn hover_annotation(index: Option<usize>) {
    if let Some(app) = app::current() {
        app.with_scene(|scene, _| scene.hover_annotation_from_menu(index));
    }
}

#[wasm_bindgen(js_name = closeAnnotationMenu)]
pub fn close_annotation_menu() {
    if let Some(app) = app::current() {
        app.with_scene(|scene, _| scene.close_annotation_menu());
    }
}

#[wasm_bindgen(js_name = moveCameraTo)]
pub fn move_camera_to(
    px: f32,
    py: f32,
    pz: f32,
    lx: f32,
    ly: f32,
    lz: f32,
    duration_ms: Option<f64>,
) -> bool {
    let Some(app) = app::current() else {
        return false;
    };
    let now = app.now_ms();
    app.with_scene(|scene, rig| {
        scene.move_camera_to(
            Vec3::new(px, py, pz),
            Vec3::new(lx, ly, lz),
            duration_ms,
            now,
            rig,
        )
    })
}

#[wasm_bindgen(js_name = setMarkerVisible)]
pub fn set_marker_visible(visible: bool) {
    if let Some(app) = app::current() {
        app.with_scene(|scene, _| scene.set_marker_visible(visible));
    }
}

#[wasm_bindgen(js_name = setMarkerPosition)]
pub fn set_marker_position(x: f32, y: f32, z: f32) {
    if let Some(app) = app::current() {
        app.with_scene(|scene, _| scene.set_marker_position(Vec3::new(x, y, z)));
    }
}

/// Raw text from the coordinate fields; unparsable fields keep their value.
#[wasm_bindgen(js_name = setMarkerCoordinates)]
pub fn set_marker_coordinates(x: &str, y: &str, z: &str) {
    if let Some(app) = app::current() {
        app.with_scene(|scene, _| {
            let old = scene.marker().position();
            let p = Vec3::new(
                parse_coordinate(x, old.x),
                parse_coordinate(y, old.y),
                parse_coordinate(z, old.z),
            );
            scene.set_marker_position(p);
        });
    }
}

#[wasm_bindgen(js_name = setZoomLock)]
pub fn set_zoom_lock(min: f32, max: f32) -> bool {
    let Some(app) = app::current() else {
        return false;
    };
    app.with_scene(|scene, rig| scene.set_zoom_lock(min, max, rig))
}

#[wasm_bindgen(js_name = clearZoomLock)]
pub fn clear_zoom_lock() {
    if let Some(app) = app::current() {
        app.with_scene(|scene, rig| scene.clear_zoom_lock(rig));
    }
}

#[wasm_bindgen(js_name = loadStage)]
pub fn load_stage(index: usize) {
    stages::request_current(index);
}

#[wasm_bindgen(js_name = isStageLoading)]
pub fn is_stage_loading() -> bool {
    app::current().is_some_and(|app| app.scene.borrow().is_loading())
}
