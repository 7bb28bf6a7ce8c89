#![cfg(target_arch = "wasm32")]
use stage_core::{parse_stages, SceneContext};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod api;
mod app;
mod constants;
mod dom;
mod events;
mod frame;
mod input;
mod notify;
mod stages;
mod viewer;

use app::App;
use constants::{CANVAS_ID, STAGES_URL};

fn wire_canvas_resize(app: &Rc<App>) {
    let app_resize = app.clone();
    dom::add_window_listener("resize", move || {
        let viewport = dom::canvas_viewport(&app_resize.canvas);
        app_resize.scene.borrow_mut().router_mut().set_viewport(viewport);
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("stage-viewer starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    let viewer =
        viewer::create_splat_viewer(&canvas).map_err(|e| anyhow::anyhow!("viewer: {:?}", e))?;

    let stages = parse_stages(&stages::fetch_text(STAGES_URL).await?)?;
    log::info!("[stage] {} stages in manifest", stages.len());
    if stages.is_empty() {
        anyhow::bail!("{} lists no stages", STAGES_URL);
    }

    let mut scene = SceneContext::new(dom::canvas_viewport(&canvas));
    scene.set_stages(stages);

    let app = Rc::new(App::new(scene, viewer, canvas, document));
    app::install(app.clone());

    events::wire_pointer_handlers(&app);
    wire_canvas_resize(&app);
    frame::start_loop();

    stages::request_stage(&app, 0);
    Ok(())
}
