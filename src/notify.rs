//! Page notifications built from drained [`SceneEvent`]s.
//!
//! Payloads own their data so they can be dispatched after the scene borrow
//! ends; page listeners may call straight back into the scene.

use crate::constants::*;
use serde::Serialize;
use stage_core::{SceneContext, SceneEvent};

/// A page notification with its payload already detached from the scene.
pub struct Notice {
    pub name: &'static str,
    pub detail: serde_json::Value,
    pub annotation_count: Option<u32>,
}

impl Notice {
    pub fn new(name: &'static str, detail: serde_json::Value) -> Self {
        Self {
            name,
            detail,
            annotation_count: None,
        }
    }
}

pub fn notice(scene: &SceneContext, ev: SceneEvent) -> Notice {
    match ev {
        SceneEvent::OpenAnnotationPanel(i) => {
            Notice::new(EVT_OPEN_ANNOTATION, serde_json::json!({ "index": i }))
        }
        SceneEvent::AnnotationsChanged => {
            let rows: Vec<AnnotationRow> = scene
                .annotations()
                .iter()
                .enumerate()
                .map(|(index, a)| AnnotationRow {
                    index,
                    title: &a.title,
                    desc: &a.description,
                })
                .collect();
            let detail = serde_json::to_value(&rows).unwrap_or_else(|e| {
                log::error!("[dom] annotation rows: {}", e);
                serde_json::Value::Array(Vec::new())
            });
            Notice {
                annotation_count: Some(rows.len() as u32),
                ..Notice::new(EVT_ANNOTATIONS_CHANGED, detail)
            }
        }
        SceneEvent::SelectionCleared => {
            Notice::new(EVT_SELECTION_CLEARED, serde_json::Value::Null)
        }
        SceneEvent::MarkerMoved(p) => Notice::new(
            EVT_MARKER_MOVED,
            serde_json::json!({ "x": p.x, "y": p.y, "z": p.z }),
        ),
        SceneEvent::StageLoaded(i) => {
            let title = scene.stages().get(i).map(|s| s.title.as_str()).unwrap_or("");
            Notice::new(
                EVT_STAGE_LOADED,
                serde_json::json!({ "index": i, "title": title }),
            )
        }
    }
}

#[derive(Serialize)]
struct AnnotationRow<'a> {
    index: usize,
    title: &'a str,
    desc: &'a str,
}
