use tracing::{debug, warn};

use crate::core::ScrollGeometry;
use crate::error::RigResult;
use crate::extensions::NarrativeEvent;
use crate::interaction::ScrollAnimationKind;
use crate::render::Renderer;

use super::{NarrativeEngine, PhaseStateStore};

impl<R: Renderer> NarrativeEngine<R> {
    /// Attaches a scroll container and publishes the initial state.
    ///
    /// The offset starts at 0. Observers receive `Mounted`, then
    /// `PhaseChanged(0)`, then `ScrollProgress(0)`. Mounting an already
    /// mounted engine unmounts first.
    pub fn mount(&mut self, geometry: ScrollGeometry) -> RigResult<()> {
        let geometry = geometry.validate()?;
        if self.is_mounted() {
            self.unmount();
        }

        let max_offset = geometry.max_offset();
        self.core.translator.reset(max_offset);
        let mut store = PhaseStateStore::new(self.core.mapper, max_offset);
        let notifications = store.initialize();
        self.core.runtime.geometry = Some(geometry);
        self.core.runtime.store = Some(store);
        self.sync_presentation();
        self.core.camera.settle();

        debug!(
            scroll_width = geometry.scroll_width,
            client_width = geometry.client_width,
            max_offset,
            "scroll container mounted"
        );
        self.emit_event(NarrativeEvent::Mounted { max_offset });
        self.emit_all(notifications);
        Ok(())
    }

    /// Re-derives the scroll range from new container geometry.
    ///
    /// The offset is re-clamped and any running animation is cancelled.
    /// Returns `Ok(false)` when unmounted or when the range did not change.
    pub fn resize(&mut self, geometry: ScrollGeometry) -> RigResult<bool> {
        let geometry = geometry.validate()?;
        if !self.is_mounted() {
            return Ok(false);
        }
        self.core.runtime.geometry = Some(geometry);

        let max_offset = geometry.max_offset();
        if max_offset == self.core.translator.scroll_state().max_offset() {
            return Ok(false);
        }

        let cancelled = self.core.translator.cancel_pending();
        self.core.translator.set_max_offset(max_offset);
        // the publish below re-derives the phase against the new range
        self.handle_cancelled(cancelled, true);
        debug!(
            max_offset,
            offset = self.core.translator.scroll_state().offset(),
            "scroll container resized"
        );
        self.emit_event(NarrativeEvent::Resized { max_offset });
        self.publish_scroll_state();
        Ok(true)
    }

    /// Detaches the scroll container. Returns `false` when nothing was mounted.
    pub fn unmount(&mut self) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let cancelled = self.core.translator.cancel_pending();
        self.handle_cancelled(cancelled, false);

        self.core.translator.reset(0.0);
        self.core.runtime.store = None;
        self.core.runtime.geometry = None;
        self.core.runtime.content = None;
        debug!("scroll container unmounted");
        self.emit_event(NarrativeEvent::Unmounted);
        true
    }

    /// Switches to `index` right away and animates the offset to its anchor.
    ///
    /// Out-of-range indices clamp to the last phase. The phase stays at the
    /// target for the whole animation while progress keeps updating every
    /// tick. Returns `false` when unmounted.
    pub fn jump_to_phase(&mut self, index: usize) -> bool {
        if !self.is_mounted() {
            return false;
        }
        // a superseded jump hands its lock straight to the new one
        let cancelled = self.core.translator.cancel_pending();
        self.handle_cancelled(cancelled, false);

        let Some(store) = self.core.runtime.store.as_mut() else {
            return false;
        };
        let (plan, notifications) = store.jump_to_phase(index);
        if plan.was_clamped() {
            warn!(
                requested_index = plan.requested_index,
                phase_index = plan.phase_index,
                "jump target clamped to phase range"
            );
        }

        let jump = self.core.config.jump;
        self.core.translator.start_animation(
            ScrollAnimationKind::Jump {
                phase_index: plan.phase_index,
            },
            plan.target_offset,
            self.core.runtime.clock_ms,
            jump.duration_ms,
            jump.easing,
        );
        self.sync_presentation();

        debug!(
            phase_index = plan.phase_index,
            target_offset = plan.target_offset,
            duration_ms = jump.duration_ms,
            "phase jump started"
        );
        self.emit_event(NarrativeEvent::JumpStarted {
            phase_index: plan.phase_index,
            target_offset: plan.target_offset,
        });
        self.emit_all(notifications);
        true
    }
}
