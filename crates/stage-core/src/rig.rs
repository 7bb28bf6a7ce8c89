//! Camera + orbit-controls capability consumed by the core.
//!
//! The renderer owns its camera and controls; the core only ever borrows them
//! through [`SceneRig`] for the duration of one call. Callers pass
//! `Option<&mut dyn SceneRig>` so an absent rig (e.g. mid stage swap) degrades
//! every operation to a no-op instead of an error.

use crate::constants::FREE_MAX_POLAR;
use crate::geometry::{pixel_to_ndc, unproject_ray, Ray};
use glam::{Mat4, Quat, Vec2, Vec3};

pub trait SceneRig {
    fn camera_position(&self) -> Vec3;
    fn set_camera_position(&mut self, position: Vec3);
    /// World-space orientation of the camera; billboards copy it.
    fn camera_rotation(&self) -> Quat;
    /// Unit forward vector of the camera in world space.
    fn view_direction(&self) -> Vec3;
    /// World-space ray through a point given in normalized device coordinates.
    fn pointer_ray(&self, ndc: Vec2) -> Option<Ray>;

    fn orbit_target(&self) -> Vec3;
    fn set_orbit_target(&mut self, target: Vec3);
    fn set_distance_bounds(&mut self, min: f32, max: f32);
    fn set_max_polar_angle(&mut self, radians: f32);
    fn set_orbit_enabled(&mut self, enabled: bool);
    /// Let the controls re-derive the camera from their target and bounds.
    fn update_controls(&mut self);
}

/// Right-handed perspective camera orbiting a target, with orbit-control bounds.
///
/// Used by host-side tests and by embedders without a JS renderer.
#[derive(Clone, Debug)]
pub struct OrbitRig {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
    pub viewport: Vec2,
    pub min_distance: f32,
    pub max_distance: f32,
    pub max_polar_angle: f32,
    pub enabled: bool,
}

impl Default for OrbitRig {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, 6.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 16.0 / 9.0,
            fovy_radians: std::f32::consts::FRAC_PI_4,
            znear: 0.1,
            zfar: 500.0,
            viewport: Vec2::new(1280.0, 720.0),
            min_distance: 0.0,
            max_distance: f32::INFINITY,
            max_polar_angle: FREE_MAX_POLAR,
            enabled: true,
        }
    }
}

impl OrbitRig {
    pub fn looking_at(eye: Vec3, target: Vec3) -> Self {
        Self {
            eye,
            target,
            ..Self::default()
        }
    }

    pub fn distance_bounds(&self) -> (f32, f32) {
        (self.min_distance, self.max_distance)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Ray through a viewport pixel, a convenience over [`SceneRig::pointer_ray`].
    pub fn pixel_ray(&self, px: Vec2) -> Option<Ray> {
        self.pointer_ray(pixel_to_ndc(px, self.viewport))
    }
}

impl SceneRig for OrbitRig {
    fn camera_position(&self) -> Vec3 {
        self.eye
    }

    fn set_camera_position(&mut self, position: Vec3) {
        self.eye = position;
    }

    fn camera_rotation(&self) -> Quat {
        Quat::from_mat4(&self.view_matrix().inverse())
    }

    fn view_direction(&self) -> Vec3 {
        (self.target - self.eye).normalize_or_zero()
    }

    fn pointer_ray(&self, ndc: Vec2) -> Option<Ray> {
        let inv = (self.projection_matrix() * self.view_matrix()).inverse();
        unproject_ray(inv, ndc, self.eye)
    }

    fn orbit_target(&self) -> Vec3 {
        self.target
    }

    fn set_orbit_target(&mut self, target: Vec3) {
        self.target = target;
    }

    fn set_distance_bounds(&mut self, min: f32, max: f32) {
        self.min_distance = min;
        self.max_distance = max;
    }

    fn set_max_polar_angle(&mut self, radians: f32) {
        self.max_polar_angle = radians;
    }

    fn set_orbit_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn update_controls(&mut self) {
        let offset = self.eye - self.target;
        let radius = offset.length();
        if radius < 1e-6 {
            return;
        }
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let clamped_radius = radius.clamp(self.min_distance, self.max_distance);
        let clamped_polar = polar.clamp(0.0, self.max_polar_angle);
        // leave the eye untouched when nothing is out of bounds
        if clamped_radius == radius && clamped_polar == polar {
            return;
        }
        let azimuth = offset.x.atan2(offset.z);
        let (sin_p, cos_p) = clamped_polar.sin_cos();
        let dir = Vec3::new(sin_p * azimuth.sin(), cos_p, sin_p * azimuth.cos());
        self.eye = self.target + dir * clamped_radius;
    }
}
