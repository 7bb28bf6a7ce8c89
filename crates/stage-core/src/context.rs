//! The scene interaction context: everything the viewer mutates in response
//! to pointer, menu and frame events, owned in one place.
//!
//! All entry points take the renderer's camera/controls as
//! `Option<&mut dyn SceneRig>`; with `None` they degrade to no-ops (the stage
//! swap window), never errors. Notifications for the menu/DOM layer are queued
//! as [`SceneEvent`]s and drained by the caller after each call.

use crate::annotation::{Annotation, AnnotationSet};
use crate::constraints::{OrbitConstraints, ZoomRange};
use crate::error::SceneError;
use crate::marker::DraggableMarker;
use crate::rig::SceneRig;
use crate::router::{pick_annotation, PointerRouter, PointerTarget};
use crate::stage::{LoadTicket, StageDescriptor, StageLoader};
use crate::tween::Choreographer;
use glam::{Vec2, Vec3};

#[derive(Clone, Debug, PartialEq)]
pub enum SceneEvent {
    /// Open the annotations panel and scroll to this row.
    OpenAnnotationPanel(usize),
    AnnotationsChanged,
    SelectionCleared,
    MarkerMoved(Vec3),
    StageLoaded(usize),
}

pub struct SceneContext {
    pub(crate) annotations: AnnotationSet,
    pub(crate) marker: DraggableMarker,
    pub(crate) choreographer: Choreographer,
    pub(crate) constraints: OrbitConstraints,
    pub(crate) router: PointerRouter,
    stages: Vec<StageDescriptor>,
    loader: StageLoader,
    /// Initial pose of a stage that finished loading without a rig; the rig
    /// sync and the jump happen on the first tick that has one.
    pub(crate) pending_pose: Option<(Vec3, Vec3)>,
    events: Vec<SceneEvent>,
}

impl SceneContext {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            annotations: AnnotationSet::default(),
            marker: DraggableMarker::default(),
            choreographer: Choreographer::default(),
            constraints: OrbitConstraints::default(),
            router: PointerRouter::new(viewport),
            stages: Vec::new(),
            loader: StageLoader::default(),
            pending_pose: None,
            events: Vec::new(),
        }
    }

    pub fn annotations(&self) -> &AnnotationSet {
        &self.annotations
    }

    pub fn marker(&self) -> &DraggableMarker {
        &self.marker
    }

    pub fn choreographer(&self) -> &Choreographer {
        &self.choreographer
    }

    pub fn constraints(&self) -> &OrbitConstraints {
        &self.constraints
    }

    pub fn router(&self) -> &PointerRouter {
        &self.router
    }

    pub fn router_mut(&mut self) -> &mut PointerRouter {
        &mut self.router
    }

    pub fn stages(&self) -> &[StageDescriptor] {
        &self.stages
    }

    pub fn set_stages(&mut self, stages: Vec<StageDescriptor>) {
        self.stages = stages;
    }

    pub fn active_stage(&self) -> Option<usize> {
        self.loader.active_stage()
    }

    pub fn is_loading(&self) -> bool {
        self.loader.is_loading()
    }

    pub fn drain_events(&mut self) -> Vec<SceneEvent> {
        std::mem::take(&mut self.events)
    }

    // ---------------- Pointer ----------------

    /// Route a pointer-down at viewport point `p`. When the returned target
    /// [claims](PointerTarget::claims) the event, orbiting is already disabled.
    pub fn pointer_down(
        &mut self,
        p: Vec2,
        now_ms: f64,
        rig: Option<&mut dyn SceneRig>,
    ) -> PointerTarget {
        if self.router.is_reserved(p) {
            return PointerTarget::UiZone;
        }
        let Some(rig) = rig else {
            return PointerTarget::Nothing;
        };
        let target = self
            .router
            .resolve_down(p, &*rig, &self.marker, &self.annotations);
        match target {
            PointerTarget::Marker => {
                if !self.marker.begin_drag(rig.view_direction()) {
                    return PointerTarget::Nothing;
                }
                rig.set_orbit_enabled(false);
            }
            PointerTarget::Annotation(i) => {
                rig.set_orbit_enabled(false);
                log::info!("[click] annotation {}", i);
                self.select_annotation(i, now_ms, Some(rig));
            }
            PointerTarget::UiZone | PointerTarget::Nothing => {}
        }
        target
    }

    /// Drag the marker or update hover. Returns `true` when a drag consumed the move.
    pub fn pointer_move(&mut self, p: Vec2, now_ms: f64, rig: Option<&mut dyn SceneRig>) -> bool {
        if self.marker.is_dragging() {
            let Some(rig) = rig else {
                return true;
            };
            if let Some(ray) = self.router.pointer_ray(&*rig, p) {
                if let Some(pos) = self.marker.drag_to(&ray) {
                    self.events.push(SceneEvent::MarkerMoved(pos));
                }
            }
            return true;
        }
        if !self.router.in_viewport(p) {
            self.annotations.set_hovered(None);
            return false;
        }
        if !self.router.hover_due(now_ms) {
            return false;
        }
        let Some(rig) = rig else {
            return false;
        };
        let hit = self
            .router
            .pointer_ray(&*rig, p)
            .and_then(|ray| pick_annotation(&ray, &self.annotations));
        if self.annotations.set_hovered(hit) {
            log::debug!("[hover] {:?}", hit);
        }
        false
    }

    /// Always ends a drag and hands the camera back to the orbit controls.
    pub fn pointer_up(&mut self, rig: Option<&mut dyn SceneRig>) {
        self.marker.end_drag();
        if let Some(rig) = rig {
            rig.set_orbit_enabled(true);
        }
    }

    /// Pointer left the viewport: hover clears even without a move inside it.
    pub fn pointer_leave(&mut self) {
        self.annotations.set_hovered(None);
    }

    // ---------------- Annotations ----------------

    /// Select an annotation, open its panel row and fly the camera to it.
    pub fn select_annotation(
        &mut self,
        index: usize,
        now_ms: f64,
        rig: Option<&mut dyn SceneRig>,
    ) -> bool {
        if !self.annotations.select(index) {
            log::warn!("[select] no annotation at {}", index);
            return false;
        }
        self.events.push(SceneEvent::OpenAnnotationPanel(index));
        if let Some(rig) = rig {
            if let Some((position, look_at)) = self.fly_to_pose(index, &*rig) {
                self.choreographer
                    .move_to(&*rig, position, look_at, None, now_ms);
            }
        }
        true
    }

    /// Camera pose for flying to annotation `index`: its hint, or else the
    /// current camera offset re-aimed at the annotation.
    fn fly_to_pose(&self, index: usize, rig: &dyn SceneRig) -> Option<(Vec3, Vec3)> {
        let a = self.annotations.get(index)?;
        Some(match a.camera_hint {
            Some(hint) => (hint.position, hint.look_at),
            None => {
                let offset = rig.camera_position() - rig.orbit_target();
                (a.position + offset, a.position)
            }
        })
    }

    /// Hover coming from the annotation list rather than the canvas.
    pub fn hover_annotation_from_menu(&mut self, index: Option<usize>) {
        self.annotations.set_hovered(index);
    }

    pub fn close_annotation_menu(&mut self) {
        if self.annotations.clear_selection().is_some() {
            self.events.push(SceneEvent::SelectionCleared);
        }
    }

    // ---------------- Camera ----------------

    /// Fly to a pose; a silent no-op without a rig.
    pub fn move_camera_to(
        &mut self,
        position: Vec3,
        look_at: Vec3,
        duration_ms: Option<f64>,
        now_ms: f64,
        rig: Option<&mut dyn SceneRig>,
    ) -> bool {
        let Some(rig) = rig else {
            log::debug!("[tween] no camera; request dropped");
            return false;
        };
        self.choreographer
            .move_to(&*rig, position, look_at, duration_ms, now_ms);
        true
    }

    // ---------------- Marker ----------------

    pub fn set_marker_visible(&mut self, visible: bool) {
        self.marker.set_visible(visible);
    }

    /// Position typed into the coordinate fields.
    pub fn set_marker_position(&mut self, position: Vec3) {
        self.marker.set_position(position);
    }

    // ---------------- Zoom lock ----------------

    /// Set the process-wide fallback range. Returns `false` for an invalid range.
    pub fn set_zoom_lock(&mut self, min: f32, max: f32, rig: Option<&mut dyn SceneRig>) -> bool {
        let Some(range) = ZoomRange::new(min, max) else {
            log::warn!("[zoom] invalid range ({}, {}) ignored", min, max);
            return false;
        };
        self.update_global_zoom(Some(range), rig);
        true
    }

    pub fn clear_zoom_lock(&mut self, rig: Option<&mut dyn SceneRig>) {
        self.update_global_zoom(None, rig);
    }

    fn update_global_zoom(&mut self, zoom: Option<ZoomRange>, rig: Option<&mut dyn SceneRig>) {
        if self.constraints.set_global_zoom(zoom) {
            if let Some(rig) = rig {
                self.constraints.write_zoom(rig);
            }
        }
    }

    // ---------------- Stages ----------------

    /// Claim the load guard for `index`. Concurrent loads are rejected.
    pub fn begin_stage_load(&mut self, index: usize) -> Result<LoadTicket, SceneError> {
        self.loader.begin(index, self.stages.len())
    }

    /// Swap in a fully loaded stage: annotations replaced, hover/selection and
    /// any tween dropped, constraints applied, camera jumped to the initial pose.
    pub fn finish_stage_load(
        &mut self,
        ticket: LoadTicket,
        annotations: Vec<Annotation>,
        rig: Option<&mut dyn SceneRig>,
    ) -> Result<(), SceneError> {
        let Some(stage) = self.stages.get(ticket.stage).cloned() else {
            self.loader.abort(ticket)?;
            return Err(SceneError::NoSuchStage {
                index: ticket.stage,
                count: self.stages.len(),
            });
        };
        self.loader.complete(ticket)?;
        self.annotations.replace(annotations);
        self.choreographer.clear();
        self.marker.end_drag();
        self.constraints.apply_stage(stage.constraints());
        self.pending_pose = Some(stage.initial_pose());
        if let Some(rig) = rig {
            self.apply_pending_pose(rig);
        } else {
            log::debug!("[stage] no camera yet; pose deferred to the next frame");
        }
        log::info!(
            "[stage] '{}' ready with {} annotations",
            stage.title,
            self.annotations.len()
        );
        self.events.push(SceneEvent::AnnotationsChanged);
        self.events.push(SceneEvent::StageLoaded(ticket.stage));
        Ok(())
    }

    /// Write the stage's orbit bounds and jump to its initial pose, once.
    pub(crate) fn apply_pending_pose(&mut self, rig: &mut dyn SceneRig) {
        let Some((position, look_at)) = self.pending_pose.take() else {
            return;
        };
        self.constraints.sync_rig(rig);
        rig.set_camera_position(position);
        rig.set_orbit_target(look_at);
        rig.update_controls();
    }

    /// Give up on a load; the previous scene stays as it was.
    pub fn abort_stage_load(&mut self, ticket: LoadTicket) -> Result<(), SceneError> {
        self.loader.abort(ticket)
    }
}
