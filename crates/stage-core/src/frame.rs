use crate::context::SceneContext;
use crate::rig::SceneRig;

impl SceneContext {
    /// Per-frame update, in fixed order:
    /// tween step -> orbit constraints -> annotation smoothing -> billboard facing.
    ///
    /// Constraints read the pose the tween just wrote, and facing reads the
    /// final camera orientation for the frame, so the order must not change.
    /// A stage that finished loading without a camera is settled first.
    pub fn tick(&mut self, now_ms: f64, rig: Option<&mut dyn SceneRig>) {
        let Some(rig) = rig else {
            self.annotations.step();
            return;
        };
        self.apply_pending_pose(rig);
        self.choreographer.step(rig, now_ms);
        self.constraints.enforce(rig);
        self.annotations.step();
        self.annotations.face(rig.camera_rotation());
    }
}
