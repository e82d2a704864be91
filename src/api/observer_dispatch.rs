use tracing::debug;

use crate::extensions::{NarrativeEvent, ObserverContext};
use crate::interaction::ScrollAnimationKind;
use crate::render::Renderer;

use super::NarrativeEngine;

impl<R: Renderer> NarrativeEngine<R> {
    pub(super) fn observer_context(&self) -> ObserverContext {
        let scroll = self.core.translator.scroll_state();
        let store = self.core.runtime.store.as_ref();
        ObserverContext {
            mounted: store.is_some(),
            phase_count: self.core.mapper.phase_count(),
            phase_index: store.map(|store| store.phase_index()),
            progress: store.map_or(0.0, |store| store.progress()),
            offset: scroll.offset(),
            max_offset: scroll.max_offset(),
            animation: self.core.translator.active_animation(),
        }
    }

    pub(super) fn emit_event(&mut self, event: NarrativeEvent) {
        if let NarrativeEvent::PhaseChanged { phase_index } = event {
            debug!(phase_index, "phase changed");
        }
        let context = self.observer_context();
        for observer in self.core.runtime.observers.values_mut() {
            observer.on_event(event, context);
        }
    }

    pub(super) fn emit_all(&mut self, events: impl IntoIterator<Item = NarrativeEvent>) {
        for event in events {
            self.emit_event(event);
        }
    }

    /// Recomputes camera target and content visibility from the store.
    pub(super) fn sync_presentation(&mut self) {
        let Some(store) = self.core.runtime.store.as_ref() else {
            self.core.runtime.content = None;
            return;
        };
        let scroll = store.scroll_state();
        let phase_index = store.phase_index();
        self.core.camera.set_progress(store.progress());
        self.core.runtime.content = Some(self.core.content_resolver.resolve(
            phase_index,
            scroll.offset(),
            scroll.max_offset(),
        ));
    }

    /// Pushes the translator's scroll state through the store and fans the
    /// result out to camera, content and observers.
    pub(super) fn publish_scroll_state(&mut self) {
        let scroll = self.core.translator.scroll_state();
        let Some(store) = self.core.runtime.store.as_mut() else {
            return;
        };
        let notifications = store.apply_scroll_state(scroll.offset(), scroll.max_offset());
        self.sync_presentation();
        self.emit_all(notifications);
    }

    /// Reports a superseded animation.
    ///
    /// With `drop_phase_lock` set, a cancelled jump gives up its phase lock
    /// silently and the caller publishes the scroll state once afterwards.
    /// Returns `true` when a lock was dropped.
    pub(super) fn handle_cancelled(
        &mut self,
        cancelled: Option<ScrollAnimationKind>,
        drop_phase_lock: bool,
    ) -> bool {
        let Some(kind) = cancelled else {
            return false;
        };
        debug!(?kind, "scroll animation cancelled");
        self.emit_event(NarrativeEvent::AnimationCancelled { kind });
        drop_phase_lock
            && self
                .core
                .runtime
                .store
                .as_mut()
                .is_some_and(|store| store.drop_phase_lock())
    }
}
