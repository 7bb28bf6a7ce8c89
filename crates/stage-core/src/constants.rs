use std::f32::consts::{FRAC_PI_2, PI};

// Shared interaction tuning constants used by the core and the web frontend.

// Annotation visual tiers (scale, opacity)
pub const IDLE_SCALE: f32 = 1.0;
pub const IDLE_OPACITY: f32 = 0.01; // near-invisible but still hit-testable
pub const HOVER_SCALE: f32 = 1.5;
pub const HOVER_OPACITY: f32 = 0.8;
pub const SELECTED_SCALE: f32 = 2.0;
pub const SELECTED_OPACITY: f32 = 1.0;

// Per-frame exponential smoothing toward the tier targets
pub const VISUAL_SMOOTHING: f32 = 0.1; // fraction of the remaining distance per frame
pub const VISUAL_EPSILON: f32 = 0.001; // residual treated as converged

// Camera tweens
pub const DEFAULT_TWEEN_MS: f64 = 1500.0;

// Hover ray casts are sampled at most this often (~60 Hz)
pub const HOVER_INTERVAL_MS: f64 = 1000.0 / 60.0;

// Picking
pub const MARKER_PICK_RADIUS: f32 = 0.15; // world units
pub const ANNOTATION_PICK_RADIUS: f32 = 0.12; // outer ring radius at scale 1.0

// Reserved top-right control cluster, in CSS pixels from the viewport corner
pub const HOT_ZONE_WIDTH_PX: f32 = 220.0;
pub const HOT_ZONE_HEIGHT_PX: f32 = 72.0;

// Orbit constraints
pub const GROUND_LEVEL: f32 = 0.0; // up-axis (Y) coordinate of the pan-lock plane
pub const LOCKED_MAX_POLAR: f32 = FRAC_PI_2; // upper hemisphere only
pub const FREE_MAX_POLAR: f32 = PI;
