use crate::constants::MARKER_PICK_RADIUS;
use crate::geometry::{ray_plane, ray_sphere, Plane, Ray};
use glam::Vec3;

/// The single debug marker that can be dragged across a camera-facing plane.
///
/// The drag plane is captured once at grab time (normal = camera view
/// direction, through the marker) and stays fixed until the drag ends.
#[derive(Clone, Debug, Default)]
pub struct DraggableMarker {
    position: Vec3,
    visible: bool,
    drag_plane: Option<Plane>,
}

impl DraggableMarker {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            visible: false,
            drag_plane: None,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    /// Hiding the marker also drops an in-progress drag.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        if !visible {
            self.drag_plane = None;
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_plane.is_some()
    }

    pub fn drag_plane(&self) -> Option<&Plane> {
        self.drag_plane.as_ref()
    }

    /// Distance along `ray` to the marker's pick sphere; hidden markers never hit.
    pub fn hit(&self, ray: &Ray) -> Option<f32> {
        if !self.visible {
            return None;
        }
        ray_sphere(ray.origin, ray.dir, self.position, MARKER_PICK_RADIUS)
    }

    /// Capture the drag plane. Returns `false` for a degenerate view direction.
    pub fn begin_drag(&mut self, view_direction: Vec3) -> bool {
        self.drag_plane = Plane::from_normal_and_point(view_direction, self.position);
        if self.drag_plane.is_some() {
            log::info!(
                "[drag] begin at ({:.3},{:.3},{:.3})",
                self.position.x,
                self.position.y,
                self.position.z
            );
        }
        self.drag_plane.is_some()
    }

    /// Move the marker to where `ray` meets the drag plane.
    ///
    /// Returns the new position, or `None` if not dragging or the ray misses
    /// the plane (the marker stays put).
    pub fn drag_to(&mut self, ray: &Ray) -> Option<Vec3> {
        let plane = self.drag_plane?;
        let hit = ray_plane(ray, &plane)?;
        self.position = hit;
        Some(hit)
    }

    pub fn end_drag(&mut self) -> bool {
        let was = self.drag_plane.take().is_some();
        if was {
            log::info!("[drag] end");
        }
        was
    }
}
