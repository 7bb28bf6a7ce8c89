use crate::dom;
use crate::notify::{notice, Notice};
use crate::viewer::{JsRig, SplatViewer};
use instant::Instant;
use stage_core::{SceneContext, SceneRig};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

thread_local! {
    static APP: RefCell<Option<Rc<App>>> = const { RefCell::new(None) };
}

pub fn install(app: Rc<App>) {
    APP.with(|a| *a.borrow_mut() = Some(app));
}

/// The running viewer, if `init` has finished.
pub fn current() -> Option<Rc<App>> {
    APP.with(|a| a.borrow().clone())
}

pub struct App {
    pub scene: RefCell<SceneContext>,
    pub viewer: SplatViewer,
    pub canvas: web::HtmlCanvasElement,
    pub document: web::Document,
    epoch: Instant,
}

impl App {
    pub fn new(
        scene: SceneContext,
        viewer: SplatViewer,
        canvas: web::HtmlCanvasElement,
        document: web::Document,
    ) -> Self {
        Self {
            scene: RefCell::new(scene),
            viewer,
            canvas,
            document,
            epoch: Instant::now(),
        }
    }

    pub fn now_ms(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64() * 1000.0
    }

    /// Run `f` against the scene with the viewer's rig (absent while the viewer
    /// is not ready), then forward queued notifications to the page.
    pub fn with_scene<R>(
        &self,
        f: impl FnOnce(&mut SceneContext, Option<&mut dyn SceneRig>) -> R,
    ) -> R {
        let mut rig = JsRig::acquire(&self.viewer);
        let out = {
            let mut scene = self.scene.borrow_mut();
            f(&mut scene, rig.as_mut().map(|r| r as &mut dyn SceneRig))
        };
        self.flush_events();
        out
    }

    /// Listeners run synchronously inside `dispatch` and may call back into the
    /// exported API, so payloads are built first and no scene borrow is held
    /// while dispatching.
    fn flush_events(&self) {
        let notices = {
            let mut scene = self.scene.borrow_mut();
            let events = scene.drain_events();
            let notices: Vec<Notice> = events
                .into_iter()
                .map(|ev| notice(&scene, ev))
                .collect();
            notices
        };
        for n in notices {
            if let Some(count) = n.annotation_count {
                self.viewer.set_annotation_count(count);
            }
            debug_assert!(self.scene.try_borrow_mut().is_ok());
            dom::dispatch(&self.document, n.name, &n.detail);
        }
    }

    /// Mirror billboard and marker state into the renderer.
    pub fn push_visuals(&self) {
        let scene = self.scene.borrow();
        for (i, a) in scene.annotations().iter().enumerate() {
            self.viewer.set_annotation(
                i as u32,
                &a.position.to_array(),
                &a.rotation.to_array(),
                a.visual.current_scale,
                a.visual.current_opacity,
            );
        }
        let m = scene.marker();
        let p = m.position();
        self.viewer.set_marker(p.x, p.y, p.z, m.visible());
    }
}
