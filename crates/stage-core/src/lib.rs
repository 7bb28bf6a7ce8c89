//! Interaction core for the construction stage viewer.
//!
//! Platform-free: pointer routing, annotation hover/select visuals, camera
//! tweens and orbit constraints, all driven through [`SceneContext`]. The web
//! frontend supplies the renderer's camera/controls through [`SceneRig`].

pub mod annotation;
pub mod constants;
pub mod constraints;
pub mod context;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod marker;
pub mod rig;
pub mod router;
pub mod stage;
pub mod tween;

pub use annotation::{Annotation, AnnotationSet, CameraHint, VisualState, VisualTier};
pub use constants::*;
pub use constraints::{clamp_to_ground, OrbitConstraints, StageConstraints, ZoomRange};
pub use context::{SceneContext, SceneEvent};
pub use error::SceneError;
pub use geometry::{lerp, ray_plane, ray_sphere, smoothstep, Plane, Ray};
pub use marker::DraggableMarker;
pub use rig::{OrbitRig, SceneRig};
pub use router::{pick_annotation, PointerRouter, PointerTarget, Rect};
pub use stage::{
    parse_annotations, parse_stages, AnnotationDescriptor, LoadTicket, StageDescriptor,
    StageLoader,
};
pub use tween::{CameraTween, Choreographer};
