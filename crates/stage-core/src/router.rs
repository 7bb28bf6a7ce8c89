//! Pointer ownership between UI chrome, the debug marker and annotations.
//!
//! Pointer-down resolves in strict priority:
//! 1. reserved UI regions (top-right cluster, open menus) -> propagate
//! 2. the visible debug marker -> drag
//! 3. the nearest annotation billboard -> select
//! 4. nothing -> propagate
//!
//! Hover only ever ray-casts annotations.

use crate::annotation::AnnotationSet;
use crate::constants::{
    ANNOTATION_PICK_RADIUS, HOT_ZONE_HEIGHT_PX, HOT_ZONE_WIDTH_PX, HOVER_INTERVAL_MS,
};
use crate::geometry::{pixel_to_ndc, ray_sphere, Ray};
use crate::marker::DraggableMarker;
use crate::rig::SceneRig;
use glam::Vec2;
use smallvec::SmallVec;

/// Axis-aligned rectangle in viewport CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.x && p.x <= self.x + self.w && p.y >= self.y && p.y <= self.y + self.h
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerTarget {
    UiZone,
    Marker,
    Annotation(usize),
    Nothing,
}

impl PointerTarget {
    /// Whether the scene consumed the event (the caller stops propagation).
    pub fn claims(self) -> bool {
        matches!(self, PointerTarget::Marker | PointerTarget::Annotation(_))
    }
}

#[derive(Clone, Debug)]
pub struct PointerRouter {
    viewport: Vec2,
    transient: SmallVec<[Rect; 4]>,
    last_hover_ms: Option<f64>,
}

impl PointerRouter {
    pub fn new(viewport: Vec2) -> Self {
        Self {
            viewport,
            transient: SmallVec::new(),
            last_hover_ms: None,
        }
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Vec2) {
        self.viewport = viewport;
    }

    /// Replace the set of currently open menu regions.
    pub fn set_transient_regions(&mut self, regions: &[Rect]) {
        self.transient.clear();
        self.transient.extend_from_slice(regions);
    }

    pub fn top_right_zone(&self) -> Rect {
        Rect::new(
            self.viewport.x - HOT_ZONE_WIDTH_PX,
            0.0,
            HOT_ZONE_WIDTH_PX,
            HOT_ZONE_HEIGHT_PX,
        )
    }

    pub fn is_reserved(&self, p: Vec2) -> bool {
        self.top_right_zone().contains(p) || self.transient.iter().any(|r| r.contains(p))
    }

    pub fn in_viewport(&self, p: Vec2) -> bool {
        Rect::new(0.0, 0.0, self.viewport.x, self.viewport.y).contains(p)
    }

    pub fn pointer_ray(&self, rig: &dyn SceneRig, p: Vec2) -> Option<Ray> {
        rig.pointer_ray(pixel_to_ndc(p, self.viewport))
    }

    /// Decide who owns a pointer-down at viewport point `p`.
    pub fn resolve_down(
        &self,
        p: Vec2,
        rig: &dyn SceneRig,
        marker: &DraggableMarker,
        annotations: &AnnotationSet,
    ) -> PointerTarget {
        if self.is_reserved(p) {
            return PointerTarget::UiZone;
        }
        let Some(ray) = self.pointer_ray(rig, p) else {
            return PointerTarget::Nothing;
        };
        if marker.hit(&ray).is_some() {
            return PointerTarget::Marker;
        }
        match pick_annotation(&ray, annotations) {
            Some(i) => PointerTarget::Annotation(i),
            None => PointerTarget::Nothing,
        }
    }

    /// Rate limiter for hover ray casts. Returns `true` when a sample is due
    /// and records `now_ms` as the last sample time.
    pub fn hover_due(&mut self, now_ms: f64) -> bool {
        match self.last_hover_ms {
            Some(last) if now_ms - last < HOVER_INTERVAL_MS => false,
            _ => {
                self.last_hover_ms = Some(now_ms);
                true
            }
        }
    }
}

/// Nearest annotation whose billboard (ring + disc, one pick volume scaled by
/// its live size) the ray passes through.
pub fn pick_annotation(ray: &Ray, annotations: &AnnotationSet) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, a) in annotations.iter().enumerate() {
        let radius = ANNOTATION_PICK_RADIUS * a.visual.current_scale;
        if let Some(t) = ray_sphere(ray.origin, ray.dir, a.position, radius) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}
