//! Bindings to the JS splat viewer that owns the camera, orbit controls and
//! render loop trigger. The page creates it through `window.createSplatViewer`.

use crate::input::{quat_from_slice, ray_parts, vec3_from_slice};
use glam::{Quat, Vec2, Vec3};
use stage_core::{Ray, SceneRig};
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, Debug)]
    pub type SplatViewer;

    #[wasm_bindgen(catch, js_namespace = window, js_name = createSplatViewer)]
    pub fn create_splat_viewer(canvas: &web::HtmlCanvasElement) -> Result<SplatViewer, JsValue>;

    /// False while a scene swap has torn down the camera/controls.
    #[wasm_bindgen(method, getter)]
    pub fn ready(this: &SplatViewer) -> bool;

    #[wasm_bindgen(method, catch, js_name = loadScene)]
    pub fn load_scene(this: &SplatViewer, url: &str) -> Result<js_sys::Promise, JsValue>;

    #[wasm_bindgen(method)]
    pub fn render(this: &SplatViewer);

    #[wasm_bindgen(method, js_name = cameraPosition)]
    fn camera_position(this: &SplatViewer) -> Vec<f32>;
    #[wasm_bindgen(method, js_name = setCameraPosition)]
    fn set_camera_position(this: &SplatViewer, x: f32, y: f32, z: f32);
    #[wasm_bindgen(method, js_name = cameraQuaternion)]
    fn camera_quaternion(this: &SplatViewer) -> Vec<f32>;
    #[wasm_bindgen(method, js_name = cameraDirection)]
    fn camera_direction(this: &SplatViewer) -> Vec<f32>;
    #[wasm_bindgen(method, js_name = pointerRay)]
    fn pointer_ray(this: &SplatViewer, ndc_x: f32, ndc_y: f32) -> Vec<f32>;

    #[wasm_bindgen(method, js_name = controlsTarget)]
    fn controls_target(this: &SplatViewer) -> Vec<f32>;
    #[wasm_bindgen(method, js_name = setControlsTarget)]
    fn set_controls_target(this: &SplatViewer, x: f32, y: f32, z: f32);
    #[wasm_bindgen(method, js_name = setDistanceBounds)]
    fn set_distance_bounds(this: &SplatViewer, min: f32, max: f32);
    #[wasm_bindgen(method, js_name = setMaxPolarAngle)]
    fn set_max_polar_angle(this: &SplatViewer, radians: f32);
    #[wasm_bindgen(method, js_name = setControlsEnabled)]
    fn set_controls_enabled(this: &SplatViewer, enabled: bool);
    #[wasm_bindgen(method, js_name = updateControls)]
    fn update_controls(this: &SplatViewer);

    #[wasm_bindgen(method, js_name = setAnnotationCount)]
    pub fn set_annotation_count(this: &SplatViewer, count: u32);
    #[wasm_bindgen(method, js_name = setAnnotation)]
    pub fn set_annotation(
        this: &SplatViewer,
        index: u32,
        position: &[f32],
        rotation: &[f32],
        scale: f32,
        opacity: f32,
    );
    #[wasm_bindgen(method, js_name = setMarker)]
    pub fn set_marker(this: &SplatViewer, x: f32, y: f32, z: f32, visible: bool);
}

/// [`SceneRig`] over the JS viewer's camera and controls.
pub struct JsRig {
    viewer: SplatViewer,
}

impl JsRig {
    /// `None` while the viewer has no live camera/controls.
    pub fn acquire(viewer: &SplatViewer) -> Option<Self> {
        viewer.ready().then(|| Self {
            viewer: viewer.clone(),
        })
    }
}

impl SceneRig for JsRig {
    fn camera_position(&self) -> Vec3 {
        vec3_from_slice(&self.viewer.camera_position()).unwrap_or_default()
    }

    fn set_camera_position(&mut self, p: Vec3) {
        self.viewer.set_camera_position(p.x, p.y, p.z);
    }

    fn camera_rotation(&self) -> Quat {
        quat_from_slice(&self.viewer.camera_quaternion()).unwrap_or_default()
    }

    fn view_direction(&self) -> Vec3 {
        vec3_from_slice(&self.viewer.camera_direction()).unwrap_or(Vec3::NEG_Z)
    }

    fn pointer_ray(&self, ndc: Vec2) -> Option<Ray> {
        let (origin, dir) = ray_parts(&self.viewer.pointer_ray(ndc.x, ndc.y))?;
        Ray::new(origin, dir)
    }

    fn orbit_target(&self) -> Vec3 {
        vec3_from_slice(&self.viewer.controls_target()).unwrap_or_default()
    }

    fn set_orbit_target(&mut self, t: Vec3) {
        self.viewer.set_controls_target(t.x, t.y, t.z);
    }

    fn set_distance_bounds(&mut self, min: f32, max: f32) {
        self.viewer.set_distance_bounds(min, max);
    }

    fn set_max_polar_angle(&mut self, radians: f32) {
        self.viewer.set_max_polar_angle(radians);
    }

    fn set_orbit_enabled(&mut self, enabled: bool) {
        self.viewer.set_controls_enabled(enabled);
    }

    fn update_controls(&mut self) {
        self.viewer.update_controls();
    }
}
