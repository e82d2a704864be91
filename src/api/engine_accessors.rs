use crate::camera::{CameraPose, CameraSmoothingConfig};
use crate::content::ContentVisibility;
use crate::core::{Phase, PhaseCatalog, ScrollGeometry, ScrollState};
use crate::error::RigResult;
use crate::interaction::{InputConfig, JumpConfig, ScrollAnimationKind, SnapConfig};
use crate::render::{NarrativeFrame, Renderer};

use super::{
    NarrativeEngine, NarrativeEngineConfig,
    validation::{
        validate_camera_smoothing, validate_input_config, validate_jump_config,
        validate_snap_config,
    },
};

impl<R: Renderer> NarrativeEngine<R> {
    #[must_use]
    pub fn config(&self) -> &NarrativeEngineConfig {
        &self.core.config
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.core.runtime.store.is_some()
    }

    #[must_use]
    pub fn geometry(&self) -> Option<ScrollGeometry> {
        self.core.runtime.geometry
    }

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.core.translator.scroll_state()
    }

    /// Last published progress; `0.0` while unmounted.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.core
            .runtime
            .store
            .as_ref()
            .map_or(0.0, |store| store.progress())
    }

    /// Current phase; `None` while unmounted.
    #[must_use]
    pub fn phase_index(&self) -> Option<usize> {
        self.core
            .runtime
            .store
            .as_ref()
            .map(|store| store.phase_index())
    }

    #[must_use]
    pub fn phase_count(&self) -> usize {
        self.core.mapper.phase_count()
    }

    #[must_use]
    pub fn phases(&self) -> &PhaseCatalog {
        &self.core.config.phases
    }

    #[must_use]
    pub fn current_phase(&self) -> Option<&Phase> {
        self.phase_index()
            .and_then(|index| self.core.config.phases.get(index))
    }

    /// Whether an in-flight jump currently pins the phase.
    #[must_use]
    pub fn is_phase_locked(&self) -> bool {
        self.core
            .runtime
            .store
            .as_ref()
            .is_some_and(|store| store.phase_lock().is_some())
    }

    #[must_use]
    pub fn active_animation(&self) -> Option<ScrollAnimationKind> {
        self.core.translator.active_animation()
    }

    /// Engine clock in milliseconds, advanced by [`Self::tick`].
    #[must_use]
    pub fn clock_ms(&self) -> f64 {
        self.core.runtime.clock_ms
    }

    /// Smoothed pose that is handed to the renderer.
    #[must_use]
    pub fn camera_pose(&self) -> CameraPose {
        self.core.camera.pose()
    }

    /// Keyframe target the pose is converging toward.
    #[must_use]
    pub fn camera_target(&self) -> CameraPose {
        self.core.camera.target()
    }

    #[must_use]
    pub fn content_visibility(&self) -> Option<&ContentVisibility> {
        self.core.runtime.content.as_ref()
    }

    /// Materializes the current render state without drawing it.
    #[must_use]
    pub fn frame(&self) -> NarrativeFrame {
        let mut frame = NarrativeFrame::new(self.camera_pose());
        frame.progress = self.progress();
        if let Some(content) = self.core.runtime.content.as_ref() {
            frame.active_phase = Some(content.active_phase);
            frame.intra_phase_progress = content.intra_phase_progress;
            frame.sections = content.sections.clone();
        }
        frame
    }

    #[must_use]
    pub fn input_config(&self) -> InputConfig {
        self.core.translator.input_config()
    }

    pub fn set_input_config(&mut self, config: InputConfig) -> RigResult<()> {
        let config = validate_input_config(config)?;
        self.core.config.input = config;
        self.core.translator.set_input_config(config);
        Ok(())
    }

    #[must_use]
    pub fn snap_config(&self) -> SnapConfig {
        self.core.translator.snap_config()
    }

    /// Replaces snap tuning. Disabling snap cancels a pending idle timer but
    /// lets a running snap animation finish.
    pub fn set_snap_config(&mut self, config: SnapConfig) -> RigResult<()> {
        let config = validate_snap_config(config)?;
        self.core.config.snap = config;
        self.core.translator.set_snap_config(config);
        Ok(())
    }

    #[must_use]
    pub fn jump_config(&self) -> JumpConfig {
        self.core.config.jump
    }

    /// Applies to jumps started after this call.
    pub fn set_jump_config(&mut self, config: JumpConfig) -> RigResult<()> {
        self.core.config.jump = validate_jump_config(config)?;
        Ok(())
    }

    #[must_use]
    pub fn camera_smoothing(&self) -> CameraSmoothingConfig {
        self.core.camera.smoothing()
    }

    pub fn set_camera_smoothing(&mut self, config: CameraSmoothingConfig) -> RigResult<()> {
        let config = validate_camera_smoothing(config)?;
        self.core.config.camera_smoothing = config;
        self.core.camera.set_smoothing(config);
        Ok(())
    }
}
