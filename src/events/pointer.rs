use crate::app::App;
use crate::dom;
use crate::input;
use glam::Vec2;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_pointer_handlers(app: &Rc<App>) {
    wire_pointerdown(app);
    wire_pointermove(app);
    wire_pointerup(app);
    wire_pointerleave(app);
}

/// Pointer position in canvas CSS pixels, refreshing the router's view of the
/// viewport and open menus first.
fn locate(app: &App, ev: &web::PointerEvent, with_menus: bool) -> Vec2 {
    let origin = dom::canvas_origin(&app.canvas);
    let viewport = dom::canvas_viewport(&app.canvas);
    let menus = with_menus.then(|| dom::open_menu_rects(&app.document, &app.canvas));
    let mut scene = app.scene.borrow_mut();
    let router = scene.router_mut();
    router.set_viewport(viewport);
    if let Some(menus) = menus {
        router.set_transient_regions(&menus);
    }
    input::client_to_viewport(
        Vec2::new(ev.client_x() as f32, ev.client_y() as f32),
        origin,
    )
}

fn wire_pointerdown(app: &Rc<App>) {
    let app_cb = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let app = &app_cb;
        let p = locate(app, &ev, true);
        let now = app.now_ms();
        let target = app.with_scene(|scene, rig| scene.pointer_down(p, now, rig));
        if target.claims() {
            // keep the orbit controls (same canvas) from seeing this press
            ev.stop_immediate_propagation();
            ev.prevent_default();
            _ = app.canvas.set_pointer_capture(ev.pointer_id());
            log::debug!("[pointer] down claimed by {:?}", target);
        }
    }) as Box<dyn FnMut(_)>);
    // capture phase so the claim happens before the controls' own listener
    _ = app.canvas.add_event_listener_with_callback_and_bool(
        "pointerdown",
        closure.as_ref().unchecked_ref(),
        true,
    );
    closure.forget();
}

fn wire_pointermove(app: &Rc<App>) {
    let app_cb = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let app = &app_cb;
        let p = locate(app, &ev, false);
        let now = app.now_ms();
        let dragging = app.with_scene(|scene, rig| scene.pointer_move(p, now, rig));
        if dragging {
            ev.prevent_default();
        }
    }) as Box<dyn FnMut(_)>);
    // on the window so leaving the canvas still clears hover
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(
            "pointermove",
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}

fn wire_pointerup(app: &Rc<App>) {
    let app_cb = app.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let app = &app_cb;
        app.with_scene(|scene, rig| scene.pointer_up(rig));
        if app.canvas.has_pointer_capture(ev.pointer_id()) {
            _ = app.canvas.release_pointer_capture(ev.pointer_id());
        }
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback(
            "pointerup",
            closure.as_ref().unchecked_ref(),
        );
        _ = wnd.add_event_listener_with_callback(
            "pointercancel",
            closure.as_ref().unchecked_ref(),
        );
    }
    closure.forget();
}

fn wire_pointerleave(app: &Rc<App>) {
    let app_cb = app.clone();
    let closure = Closure::wrap(Box::new(move |_ev: web::PointerEvent| {
        app_cb.with_scene(|scene, _rig| scene.pointer_leave());
    }) as Box<dyn FnMut(_)>);
    _ = app
        .canvas
        .add_event_listener_with_callback("pointerleave", closure.as_ref().unchecked_ref());
    closure.forget();
}
