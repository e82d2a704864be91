use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::camera::CameraPose;
use crate::content::ContentVisibility;
use crate::core::{ScrollGeometry, ScrollState};
use crate::interaction::ScrollAnimationKind;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub clock_ms: f64,
    pub geometry: Option<ScrollGeometry>,
    pub scroll: ScrollState,
    pub progress: f64,
    pub phase_index: Option<usize>,
    pub phase_locked: bool,
    pub active_animation: Option<ScrollAnimationKind>,
    pub camera_pose: CameraPose,
    pub camera_target: CameraPose,
    pub content: Option<ContentVisibility>,
    /// Phase label keyed by index, in catalog order.
    pub phase_labels: IndexMap<usize, String>,
    pub observer_ids: Vec<String>,
}

impl EngineSnapshot {
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.phase_index.is_some()
    }
}
