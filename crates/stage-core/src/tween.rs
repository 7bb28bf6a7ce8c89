//! Time-based camera flights between two poses.

use crate::constants::DEFAULT_TWEEN_MS;
use crate::geometry::smoothstep;
use crate::rig::SceneRig;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraTween {
    pub start_position: Vec3,
    pub start_look_at: Vec3,
    pub end_position: Vec3,
    pub end_look_at: Vec3,
    pub start_time_ms: f64,
    pub duration_ms: f64,
    pub active: bool,
}

impl CameraTween {
    /// Linear progress in \[0, 1\] at `now_ms`.
    pub fn progress(&self, now_ms: f64) -> f32 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_time_ms) / self.duration_ms).clamp(0.0, 1.0) as f32
    }

    /// Eased `(position, look_at)` at `now_ms`. At full progress the end pose is
    /// returned verbatim so the flight lands without float drift.
    pub fn pose_at(&self, now_ms: f64) -> (Vec3, Vec3) {
        let t = self.progress(now_ms);
        if t >= 1.0 {
            return (self.end_position, self.end_look_at);
        }
        let e = smoothstep(t);
        (
            self.start_position.lerp(self.end_position, e),
            self.start_look_at.lerp(self.end_look_at, e),
        )
    }
}

/// Owns the single live tween. A new request always replaces the current one.
#[derive(Clone, Debug, Default)]
pub struct Choreographer {
    tween: Option<CameraTween>,
}

impl Choreographer {
    pub fn current(&self) -> Option<&CameraTween> {
        self.tween.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.tween.map(|t| t.active).unwrap_or(false)
    }

    /// Start a flight from the rig's current pose to `(position, look_at)`.
    pub fn move_to(
        &mut self,
        rig: &dyn SceneRig,
        position: Vec3,
        look_at: Vec3,
        duration_ms: Option<f64>,
        now_ms: f64,
    ) {
        let duration_ms = duration_ms.unwrap_or(DEFAULT_TWEEN_MS).max(0.0);
        if self.is_active() {
            log::debug!("[tween] superseding in-flight tween");
        }
        self.tween = Some(CameraTween {
            start_position: rig.camera_position(),
            start_look_at: rig.orbit_target(),
            end_position: position,
            end_look_at: look_at,
            start_time_ms: now_ms,
            duration_ms,
            active: true,
        });
        log::info!(
            "[tween] start -> pos=({:.2},{:.2},{:.2}) look=({:.2},{:.2},{:.2}) {:.0}ms",
            position.x,
            position.y,
            position.z,
            look_at.x,
            look_at.y,
            look_at.z,
            duration_ms
        );
    }

    /// Push this frame's pose into the rig. Returns `true` while the tween ran this frame.
    pub fn step(&mut self, rig: &mut dyn SceneRig, now_ms: f64) -> bool {
        let Some(tween) = self.tween.as_mut().filter(|t| t.active) else {
            return false;
        };
        let (position, look_at) = tween.pose_at(now_ms);
        rig.set_camera_position(position);
        rig.set_orbit_target(look_at);
        rig.update_controls();
        if tween.progress(now_ms) >= 1.0 {
            tween.active = false;
            log::debug!("[tween] done");
        }
        true
    }

    pub(crate) fn clear(&mut self) {
        self.tween = None;
    }
}
