// Host-side tests for page notification payloads.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
#[path = "../src/notify.rs"]
mod notify;

use glam::Vec3;
use notify::*;
use stage_core::{parse_stages, Annotation, SceneContext, SceneEvent};
use std::cell::RefCell;

fn scene() -> SceneContext {
    let mut ctx = SceneContext::new(glam::Vec2::new(800.0, 600.0));
    ctx.set_stages(
        parse_stages(
            r#"[{
              "title": "Foundations",
              "initialCameraPosition": [0, 0, 6],
              "initialCameraLookAt": [0, 0, 0],
              "splatSource": "splats/foundations.ksplat"
            }]"#,
        )
        .unwrap(),
    );
    let ticket = ctx.begin_stage_load(0).unwrap();
    let annotations = vec![
        Annotation::new(Vec3::ZERO, "Footing").with_description("Poured 3 May"),
        Annotation::new(Vec3::X, "Drain"),
    ];
    ctx.finish_stage_load(ticket, annotations, None).unwrap();
    ctx
}

fn build(scene: &RefCell<SceneContext>) -> Vec<Notice> {
    let mut s = scene.borrow_mut();
    let events = s.drain_events();
    let notices = events.into_iter().map(|ev| notice(&s, ev)).collect();
    notices
}

#[test]
fn stage_load_notices_carry_rows_and_title() {
    let scene = RefCell::new(scene());
    let notices = build(&scene);
    assert_eq!(notices.len(), 2);

    assert_eq!(notices[0].name, constants::EVT_ANNOTATIONS_CHANGED);
    assert_eq!(notices[0].annotation_count, Some(2));
    assert_eq!(notices[0].detail[0]["title"], "Footing");
    assert_eq!(notices[0].detail[0]["desc"], "Poured 3 May");
    assert_eq!(notices[0].detail[1]["index"], 1);

    assert_eq!(notices[1].name, constants::EVT_STAGE_LOADED);
    assert_eq!(notices[1].detail["title"], "Foundations");
}

#[test]
fn listeners_can_reenter_the_scene_while_notices_are_delivered() {
    let scene = RefCell::new(scene());
    let notices = build(&scene);
    for n in &notices {
        // what a page listener calling back into the exports does
        let mut s = scene
            .try_borrow_mut()
            .expect("scene must not be borrowed during dispatch");
        s.select_annotation(1, 0.0, None);
        s.close_annotation_menu();
        assert!(!n.name.is_empty());
    }
    assert_eq!(notices[1].detail["title"], "Foundations");
}

#[test]
fn marker_and_selection_notices() {
    let ctx = scene();
    let moved = notice(&ctx, SceneEvent::MarkerMoved(Vec3::new(1.0, 2.0, 3.0)));
    assert_eq!(moved.name, constants::EVT_MARKER_MOVED);
    assert_eq!(moved.detail["y"], 2.0);
    assert_eq!(moved.annotation_count, None);

    let open = notice(&ctx, SceneEvent::OpenAnnotationPanel(1));
    assert_eq!(open.detail["index"], 1);

    let cleared = notice(&ctx, SceneEvent::SelectionCleared);
    assert!(cleared.detail.is_null());
}
