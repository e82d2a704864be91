use indexmap::IndexMap;

use crate::camera::CameraInterpolator;
use crate::content::{ContentVisibility, ContentVisibilityResolver};
use crate::core::{ProgressMapper, ScrollGeometry};
use crate::extensions::NarrativeObserver;
use crate::interaction::InputTranslator;

use super::{NarrativeEngineConfig, PhaseStateStore};

/// Internal engine core state used by the public facade (`NarrativeEngine`).
pub(super) struct EngineCore {
    pub(super) config: NarrativeEngineConfig,
    pub(super) mapper: ProgressMapper,
    pub(super) translator: InputTranslator,
    pub(super) camera: CameraInterpolator,
    pub(super) content_resolver: ContentVisibilityResolver,
    pub(super) runtime: EngineRuntimeState,
}

/// Mount-scoped and clock state grouped separately from static setup.
pub(super) struct EngineRuntimeState {
    pub(super) clock_ms: f64,
    pub(super) geometry: Option<ScrollGeometry>,
    /// Present exactly while a scroll container is mounted.
    pub(super) store: Option<PhaseStateStore>,
    pub(super) content: Option<ContentVisibility>,
    pub(super) observers: IndexMap<String, Box<dyn NarrativeObserver>>,
}

impl EngineRuntimeState {
    #[must_use]
    pub(super) fn unmounted() -> Self {
        Self {
            clock_ms: 0.0,
            geometry: None,
            store: None,
            content: None,
            observers: IndexMap::new(),
        }
    }
}
