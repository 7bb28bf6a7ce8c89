//! Per-annotation hover/select state and its smoothed visual representation.
//!
//! Every annotation sits in one of three tiers. The tier fixes the *target*
//! scale and opacity; the *current* values chase the target a fixed fraction
//! per frame so billboards grow and fade smoothly.
//!
//! | tier     | scale | opacity |
//! |----------|-------|---------|
//! | Idle     | 1.0   | 0.01    |
//! | Hovered  | 1.5   | 0.8     |
//! | Selected | 2.0   | 1.0     |
//!
//! Selection dominates hover: moving the pointer off a selected annotation
//! never demotes it, and hovering the selected one changes nothing.

use crate::constants::*;
use glam::{Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisualTier {
    Idle,
    Hovered,
    Selected,
}

impl VisualTier {
    pub const fn scale(self) -> f32 {
        match self {
            VisualTier::Idle => IDLE_SCALE,
            VisualTier::Hovered => HOVER_SCALE,
            VisualTier::Selected => SELECTED_SCALE,
        }
    }

    pub const fn opacity(self) -> f32 {
        match self {
            VisualTier::Idle => IDLE_OPACITY,
            VisualTier::Hovered => HOVER_OPACITY,
            VisualTier::Selected => SELECTED_OPACITY,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisualState {
    pub current_scale: f32,
    pub current_opacity: f32,
    tier: VisualTier,
}

impl Default for VisualState {
    fn default() -> Self {
        Self {
            current_scale: IDLE_SCALE,
            current_opacity: IDLE_OPACITY,
            tier: VisualTier::Idle,
        }
    }
}

impl VisualState {
    #[inline]
    pub fn tier(&self) -> VisualTier {
        self.tier
    }

    #[inline]
    pub fn target_scale(&self) -> f32 {
        self.tier.scale()
    }

    #[inline]
    pub fn target_opacity(&self) -> f32 {
        self.tier.opacity()
    }

    pub fn set_tier(&mut self, tier: VisualTier) {
        self.tier = tier;
    }

    pub fn is_converged(&self) -> bool {
        (self.target_scale() - self.current_scale).abs() < VISUAL_EPSILON
            && (self.target_opacity() - self.current_opacity).abs() < VISUAL_EPSILON
    }

    /// Advance one frame. Returns `true` when either value moved.
    pub fn step(&mut self) -> bool {
        let scale_moved = approach(&mut self.current_scale, self.tier.scale());
        let opacity_moved = approach(&mut self.current_opacity, self.tier.opacity());
        scale_moved || opacity_moved
    }
}

#[inline]
fn approach(current: &mut f32, target: f32) -> bool {
    let residual = target - *current;
    if residual.abs() < VISUAL_EPSILON {
        return false;
    }
    *current += residual * VISUAL_SMOOTHING;
    true
}

/// Camera pose suggested for "fly to annotation".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraHint {
    pub position: Vec3,
    pub look_at: Vec3,
}

#[derive(Clone, Debug)]
pub struct Annotation {
    pub position: Vec3,
    pub title: String,
    pub description: String,
    pub camera_hint: Option<CameraHint>,
    pub visual: VisualState,
    /// Billboard facing, copied from the camera every frame.
    pub rotation: Quat,
}

impl Annotation {
    pub fn new(position: Vec3, title: impl Into<String>) -> Self {
        Self {
            position,
            title: title.into(),
            description: String::new(),
            camera_hint: None,
            visual: VisualState::default(),
            rotation: Quat::IDENTITY,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_camera_hint(mut self, position: Vec3, look_at: Vec3) -> Self {
        self.camera_hint = Some(CameraHint { position, look_at });
        self
    }
}

/// The active stage's annotations plus the authoritative hovered/selected indices.
#[derive(Clone, Debug, Default)]
pub struct AnnotationSet {
    items: Vec<Annotation>,
    hovered: Option<usize>,
    selected: Option<usize>,
}

impl AnnotationSet {
    pub fn new(items: Vec<Annotation>) -> Self {
        Self {
            items,
            hovered: None,
            selected: None,
        }
    }

    /// Replace every annotation at once; nothing carries over.
    pub fn replace(&mut self, items: Vec<Annotation>) {
        *self = Self::new(items);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Annotation> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Annotation> {
        self.items.iter()
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Move the hover to `index` (or clear it). Returns `true` if the hovered index changed.
    pub fn set_hovered(&mut self, index: Option<usize>) -> bool {
        let index = index.filter(|&i| i < self.items.len());
        if index == self.hovered {
            return false;
        }
        if let Some(prev) = self.hovered {
            if Some(prev) != self.selected {
                self.items[prev].visual.set_tier(VisualTier::Idle);
            }
        }
        if let Some(next) = index {
            if Some(next) != self.selected {
                self.items[next].visual.set_tier(VisualTier::Hovered);
            }
        }
        self.hovered = index;
        true
    }

    /// Select `index`, demoting any previous selection to Idle.
    ///
    /// Returns `false` (and changes nothing) for an out-of-range index.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        if let Some(prev) = self.selected {
            if prev != index {
                self.items[prev].visual.set_tier(VisualTier::Idle);
            }
        }
        self.items[index].visual.set_tier(VisualTier::Selected);
        self.selected = Some(index);
        true
    }

    /// Drop the selection. Returns the previously selected index.
    pub fn clear_selection(&mut self) -> Option<usize> {
        let prev = self.selected.take()?;
        self.items[prev].visual.set_tier(VisualTier::Idle);
        Some(prev)
    }

    /// Smooth every annotation toward its tier. Returns `true` if anything moved.
    pub fn step(&mut self) -> bool {
        let mut moved = false;
        for a in &mut self.items {
            moved |= a.visual.step();
        }
        moved
    }

    pub fn face(&mut self, rotation: Quat) {
        for a in &mut self.items {
            a.rotation = rotation;
        }
    }
}
