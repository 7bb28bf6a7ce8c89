//! Per-frame orbit constraints: ground clamp (pan lock), polar limit
//! (rotation lock) and camera distance bounds (zoom lock).
//!
//! Zoom bounds resolve by precedence: the active stage's own range, else the
//! process-wide fallback, else unrestricted.

use crate::constants::{FREE_MAX_POLAR, GROUND_LEVEL, LOCKED_MAX_POLAR};
use crate::rig::SceneRig;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomRange {
    pub min: f32,
    pub max: f32,
}

impl ZoomRange {
    pub const UNRESTRICTED: ZoomRange = ZoomRange {
        min: 0.0,
        max: f32::INFINITY,
    };

    /// Validated range: `0 <= min <= max`, no NaNs.
    pub fn new(min: f32, max: f32) -> Option<Self> {
        if min.is_nan() || max.is_nan() || min < 0.0 || min > max {
            return None;
        }
        Some(Self { min, max })
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StageConstraints {
    pub pan_lock: bool,
    pub rotation_lock: bool,
    pub zoom: Option<ZoomRange>,
}

#[derive(Clone, Debug, Default)]
pub struct OrbitConstraints {
    stage: StageConstraints,
    global_zoom: Option<ZoomRange>,
}

impl OrbitConstraints {
    pub fn stage(&self) -> &StageConstraints {
        &self.stage
    }

    pub fn global_zoom(&self) -> Option<ZoomRange> {
        self.global_zoom
    }

    pub fn effective_zoom(&self) -> ZoomRange {
        self.stage
            .zoom
            .or(self.global_zoom)
            .unwrap_or(ZoomRange::UNRESTRICTED)
    }

    /// Adopt a newly loaded stage's constraints. Call [`Self::sync_rig`] to
    /// write them into the controls.
    pub fn apply_stage(&mut self, stage: StageConstraints) {
        self.stage = stage;
    }

    /// Set or clear the process-wide fallback.
    ///
    /// Returns `true` when the controls need rewriting, i.e. the active stage
    /// has no range of its own.
    pub fn set_global_zoom(&mut self, zoom: Option<ZoomRange>) -> bool {
        self.global_zoom = zoom;
        if self.stage.zoom.is_some() {
            log::debug!("[zoom] stage range active; fallback stored only");
            return false;
        }
        true
    }

    /// Write distance bounds and the polar limit into the controls.
    pub fn sync_rig(&self, rig: &mut dyn SceneRig) {
        self.write_zoom(rig);
        rig.set_max_polar_angle(if self.stage.rotation_lock {
            LOCKED_MAX_POLAR
        } else {
            FREE_MAX_POLAR
        });
    }

    pub fn write_zoom(&self, rig: &mut dyn SceneRig) {
        let z = self.effective_zoom();
        rig.set_distance_bounds(z.min, z.max);
        log::info!("[zoom] distance bounds min={} max={}", z.min, z.max);
    }

    /// Per-frame pass; must run after the tween step so it corrects the pose the
    /// tween just wrote.
    pub fn enforce(&self, rig: &mut dyn SceneRig) {
        if !self.stage.pan_lock {
            return;
        }
        let clamped = clamp_to_ground(rig.camera_position(), rig.orbit_target());
        if let Some((camera, target)) = clamped {
            rig.set_camera_position(camera);
            rig.set_orbit_target(target);
        }
    }
}

/// Shift camera and target down together so the target sits on the ground.
///
/// Returns `None` when the target is already at or below ground level.
#[inline]
pub fn clamp_to_ground(camera: Vec3, target: Vec3) -> Option<(Vec3, Vec3)> {
    let excess = target.y - GROUND_LEVEL;
    if excess <= 0.0 {
        return None;
    }
    Some((
        Vec3::new(camera.x, camera.y - excess, camera.z),
        Vec3::new(target.x, GROUND_LEVEL, target.z),
    ))
}
