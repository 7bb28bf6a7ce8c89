//! Stage and annotation manifests plus the single-flight load guard.

use crate::annotation::Annotation;
use crate::constraints::{StageConstraints, ZoomRange};
use crate::error::SceneError;
use glam::Vec3;
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StageDescriptor {
    pub title: String,
    pub initial_camera_position: [f32; 3],
    pub initial_camera_look_at: [f32; 3],
    pub splat_source: String,
    #[serde(default)]
    pub pan_lock: bool,
    #[serde(default)]
    pub rotation_lock: bool,
    #[serde(default)]
    pub min_zoom: Option<f32>,
    #[serde(default)]
    pub max_zoom: Option<f32>,
    #[serde(default)]
    pub annotations_source: Option<String>,
}

impl StageDescriptor {
    pub fn initial_pose(&self) -> (Vec3, Vec3) {
        (
            Vec3::from_array(self.initial_camera_position),
            Vec3::from_array(self.initial_camera_look_at),
        )
    }

    /// Stage zoom range. A missing side is unrestricted; an inverted or
    /// negative range is ignored.
    pub fn zoom_range(&self) -> Option<ZoomRange> {
        if self.min_zoom.is_none() && self.max_zoom.is_none() {
            return None;
        }
        let min = self.min_zoom.unwrap_or(0.0);
        let max = self.max_zoom.unwrap_or(f32::INFINITY);
        let range = ZoomRange::new(min, max);
        if range.is_none() {
            log::warn!(
                "[stage] '{}' has an invalid zoom range ({}, {}); ignoring",
                self.title,
                min,
                max
            );
        }
        range
    }

    pub fn constraints(&self) -> StageConstraints {
        StageConstraints {
            pan_lock: self.pan_lock,
            rotation_lock: self.rotation_lock,
            zoom: self.zoom_range(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationDescriptor {
    pub pos: [f32; 3],
    pub title: String,
    #[serde(default)]
    pub desc: String,
    #[serde(default)]
    pub camera_pos: Option<[f32; 3]>,
    #[serde(default)]
    pub camera_look_at: Option<[f32; 3]>,
}

impl From<AnnotationDescriptor> for Annotation {
    fn from(d: AnnotationDescriptor) -> Self {
        let a = Annotation::new(Vec3::from_array(d.pos), d.title).with_description(d.desc);
        match (d.camera_pos, d.camera_look_at) {
            (Some(p), Some(l)) => a.with_camera_hint(Vec3::from_array(p), Vec3::from_array(l)),
            // a position without a look-at aims at the annotation itself
            (Some(p), None) => a.with_camera_hint(Vec3::from_array(p), Vec3::from_array(d.pos)),
            _ => a,
        }
    }
}

pub fn parse_stages(json: &str) -> Result<Vec<StageDescriptor>, SceneError> {
    Ok(serde_json::from_str(json)?)
}

pub fn parse_annotations(json: &str) -> Result<Vec<AnnotationDescriptor>, SceneError> {
    Ok(serde_json::from_str(json)?)
}

/// Proof that the holder owns the one load currently in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub stage: usize,
    id: u64,
}

/// Re-entrancy guard: at most one load in flight; others are rejected, not queued.
#[derive(Clone, Debug, Default)]
pub struct StageLoader {
    in_flight: Option<LoadTicket>,
    active: Option<usize>,
    next_id: u64,
}

impl StageLoader {
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn active_stage(&self) -> Option<usize> {
        self.active
    }

    pub fn begin(&mut self, stage: usize, stage_count: usize) -> Result<LoadTicket, SceneError> {
        if let Some(t) = self.in_flight {
            log::warn!("[stage] load of {} rejected; {} still loading", stage, t.stage);
            return Err(SceneError::LoadInFlight(t.stage));
        }
        if stage >= stage_count {
            return Err(SceneError::NoSuchStage {
                index: stage,
                count: stage_count,
            });
        }
        self.next_id += 1;
        let ticket = LoadTicket {
            stage,
            id: self.next_id,
        };
        self.in_flight = Some(ticket);
        log::info!("[stage] loading {}", stage);
        Ok(ticket)
    }

    /// Release the guard and mark the ticket's stage active.
    pub fn complete(&mut self, ticket: LoadTicket) -> Result<(), SceneError> {
        self.release(ticket)?;
        self.active = Some(ticket.stage);
        Ok(())
    }

    /// Release the guard; the previously active stage stays active.
    pub fn abort(&mut self, ticket: LoadTicket) -> Result<(), SceneError> {
        self.release(ticket)?;
        log::warn!("[stage] load of {} aborted", ticket.stage);
        Ok(())
    }

    fn release(&mut self, ticket: LoadTicket) -> Result<(), SceneError> {
        if self.in_flight != Some(ticket) {
            return Err(SceneError::StaleTicket);
        }
        self.in_flight = None;
        Ok(())
    }
}
