use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::content::SectionVisibility;
use crate::error::{RigError, RigResult};

/// Backend-agnostic state for one draw pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeFrame {
    pub camera: CameraPose,
    pub progress: f64,
    /// `None` while no scroll container is mounted.
    pub active_phase: Option<usize>,
    pub intra_phase_progress: f64,
    pub sections: Vec<SectionVisibility>,
}

impl NarrativeFrame {
    #[must_use]
    pub fn new(camera: CameraPose) -> Self {
        Self {
            camera,
            progress: 0.0,
            active_phase: None,
            intra_phase_progress: 0.0,
            sections: Vec::new(),
        }
    }

    pub fn validate(&self) -> RigResult<()> {
        if !self.camera.position.is_finite() || !self.camera.look_at.is_finite() {
            return Err(RigError::InvalidInput(
                "frame camera position/look_at must be finite".to_owned(),
            ));
        }
        if !self.camera.fov.is_finite() || self.camera.fov <= 0.0 || self.camera.fov >= 180.0 {
            return Err(RigError::InvalidInput(
                "frame camera fov must be finite and in (0, 180)".to_owned(),
            ));
        }
        for (name, value) in [
            ("progress", self.progress),
            ("intra_phase_progress", self.intra_phase_progress),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(RigError::InvalidInput(format!(
                    "frame `{name}` must be finite and in [0, 1]"
                )));
            }
        }
        for section in &self.sections {
            if !(0.0..=1.0).contains(&section.opacity) {
                return Err(RigError::InvalidInput(format!(
                    "section {} opacity must be in [0, 1]",
                    section.phase_index
                )));
            }
        }
        if let Some(active) = self.active_phase {
            if !self.sections.is_empty() && active >= self.sections.len() {
                return Err(RigError::InvalidInput(format!(
                    "active phase {active} is outside {} sections",
                    self.sections.len()
                )));
            }
        }
        Ok(())
    }

    #[must_use]
    pub fn visible_sections(&self) -> impl Iterator<Item = &SectionVisibility> {
        self.sections.iter().filter(|section| section.is_visible())
    }
}
