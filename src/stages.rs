use crate::app::{self, App};
use anyhow::{anyhow, Result};
use stage_core::{parse_annotations, Annotation, LoadTicket, StageDescriptor};
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub async fn fetch_text(url: &str) -> Result<String> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow!("fetch {}: {:?}", url, e))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow!("fetch {}: not a Response ({:?})", url, e))?;
    if !resp.ok() {
        return Err(anyhow!("fetch {}: HTTP {}", url, resp.status()));
    }
    let text = JsFuture::from(resp.text().map_err(|e| anyhow!("{:?}", e))?)
        .await
        .map_err(|e| anyhow!("read {}: {:?}", url, e))?;
    text.as_string()
        .ok_or_else(|| anyhow!("read {}: body is not text", url))
}

/// Start loading stage `index`. Ignored (with a log line) while another load
/// is still in flight.
pub fn request_stage(app: &Rc<App>, index: usize) {
    let ticket = match app.scene.borrow_mut().begin_stage_load(index) {
        Ok(t) => t,
        Err(e) => {
            log::warn!("[stage] load of {} refused: {}", index, e);
            return;
        }
    };
    let stage = app.scene.borrow().stages().get(index).cloned();
    let Some(stage) = stage else {
        _ = app.scene.borrow_mut().abort_stage_load(ticket);
        return;
    };
    let app = app.clone();
    spawn_local(async move {
        match load(&app, &stage).await {
            Ok(annotations) => finish(&app, ticket, annotations),
            Err(e) => {
                log::error!("[stage] '{}' failed to load: {:?}", stage.title, e);
                if let Err(e) = app.scene.borrow_mut().abort_stage_load(ticket) {
                    log::warn!("[stage] abort: {}", e);
                }
            }
        }
    });
}

async fn load(app: &App, stage: &StageDescriptor) -> Result<Vec<Annotation>> {
    log::info!("[stage] loading '{}' from {}", stage.title, stage.splat_source);
    let annotations = match &stage.annotations_source {
        Some(url) => parse_annotations(&fetch_text(url).await?)?
            .into_iter()
            .map(Annotation::from)
            .collect(),
        None => Vec::new(),
    };
    let promise = app
        .viewer
        .load_scene(&stage.splat_source)
        .map_err(|e| anyhow!("loadScene: {:?}", e))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("loadScene {}: {:?}", stage.splat_source, e))?;
    Ok(annotations)
}

fn finish(app: &App, ticket: LoadTicket, annotations: Vec<Annotation>) {
    let result = app.with_scene(|scene, rig| scene.finish_stage_load(ticket, annotations, rig));
    if let Err(e) = result {
        log::error!("[stage] finish: {}", e);
    }
}

/// Entry used by the exported API where only the installed app is reachable.
pub fn request_current(index: usize) {
    match app::current() {
        Some(app) => request_stage(&app, index),
        None => log::warn!("[stage] load of {} before init", index),
    }
}
