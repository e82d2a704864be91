use tracing::debug;

use crate::camera::CameraPose;
use crate::error::RigResult;
use crate::extensions::NarrativeEvent;
use crate::interaction::ScrollAnimationKind;
use crate::render::Renderer;

use super::{NarrativeEngine, validation::validate_tick_delta};

impl<R: Renderer> NarrativeEngine<R> {
    /// Advances the engine clock by one render tick.
    ///
    /// Fires a due idle snap, samples the running animation and steps camera
    /// smoothing. Smoothing runs every tick, mounted or not, and the smoothed
    /// pose is returned.
    pub fn tick(&mut self, delta_seconds: f64) -> RigResult<CameraPose> {
        validate_tick_delta(delta_seconds)?;
        self.core.runtime.clock_ms += delta_seconds * 1_000.0;

        if self.is_mounted() {
            self.advance_animations();
        }
        Ok(self.core.camera.step())
    }

    fn advance_animations(&mut self) {
        let outcome = self.core.translator.advance(self.core.runtime.clock_ms);

        if let Some(target) = outcome.snap_started {
            debug!(
                anchor_index = target.anchor_index,
                target_offset = target.target_offset,
                distance = target.distance,
                "idle snap started"
            );
            self.emit_event(NarrativeEvent::SnapStarted {
                anchor_index: target.anchor_index,
                target_offset: target.target_offset,
            });
        }

        if outcome.offset_changed {
            self.publish_scroll_state();
        }

        let Some(kind) = outcome.settled else {
            return;
        };
        debug!(?kind, "scroll animation settled");
        let release_notifications = match (kind, self.core.runtime.store.as_mut()) {
            (ScrollAnimationKind::Jump { .. }, Some(store)) => store.release_phase_lock(),
            _ => Default::default(),
        };
        if !release_notifications.is_empty() {
            self.sync_presentation();
        }
        self.emit_event(NarrativeEvent::AnimationSettled { kind });
        self.emit_all(release_notifications);
    }
}
