use crate::app::{self, App};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One animation frame: advance the scene, mirror visuals, redraw.
pub fn frame(app: &App) {
    let now = app.now_ms();
    app.with_scene(|scene, rig| scene.tick(now, rig));
    app.push_visuals();
    // the controls move the camera outside of tick, so every ready frame redraws
    if app.viewer.ready() {
        app.viewer.render();
    }
}

pub fn start_loop() {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(app) = app::current() {
            frame(&app);
        }
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
