use crate::error::{RigError, RigResult};
use crate::render::Renderer;

use super::{EngineSnapshot, NarrativeEngine};

impl<R: Renderer> NarrativeEngine<R> {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            clock_ms: self.clock_ms(),
            geometry: self.geometry(),
            scroll: self.scroll_state(),
            progress: self.progress(),
            phase_index: self.phase_index(),
            phase_locked: self.is_phase_locked(),
            active_animation: self.active_animation(),
            camera_pose: self.camera_pose(),
            camera_target: self.camera_target(),
            content: self.content_visibility().cloned(),
            phase_labels: self
                .phases()
                .iter()
                .map(|phase| (phase.index, phase.label.clone()))
                .collect(),
            observer_ids: self.core.runtime.observers.keys().cloned().collect(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> RigResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| RigError::InvalidInput(format!("failed to serialize snapshot: {e}")))
    }
}
