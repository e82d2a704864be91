use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PhaseEdgeTrigger, ProgressMapper, ScrollState};
use crate::extensions::NarrativeEvent;

/// Notifications produced by one store mutation, in delivery order.
pub type Notifications = SmallVec<[NarrativeEvent; 2]>;

/// Resolved explicit phase jump.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpPlan {
    pub requested_index: usize,
    pub phase_index: usize,
    pub target_offset: f64,
    pub target_progress: f64,
}

impl JumpPlan {
    #[must_use]
    pub fn was_clamped(self) -> bool {
        self.requested_index != self.phase_index
    }
}

/// Single source of truth for `(progress, phase_index)` while a scroll
/// container is mounted.
///
/// Every mutation returns the notifications it produced. A `PhaseChanged`
/// always precedes the `ScrollProgress` of the same mutation, and phase
/// notifications are edge-triggered.
#[derive(Debug, Clone, PartialEq)]
pub struct PhaseStateStore {
    mapper: ProgressMapper,
    scroll: ScrollState,
    progress: f64,
    phase_index: usize,
    phase_edge: PhaseEdgeTrigger,
    last_emitted_progress: Option<f64>,
    phase_lock: Option<usize>,
}

impl PhaseStateStore {
    #[must_use]
    pub fn new(mapper: ProgressMapper, max_offset: f64) -> Self {
        Self {
            mapper,
            scroll: ScrollState::new(0.0, max_offset),
            progress: 0.0,
            phase_index: 0,
            phase_edge: PhaseEdgeTrigger::default(),
            last_emitted_progress: None,
            phase_lock: None,
        }
    }

    #[must_use]
    pub fn mapper(&self) -> ProgressMapper {
        self.mapper
    }

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    /// Last published progress. During a jump this is the jump target until
    /// the first animation tick lands.
    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn phase_index(&self) -> usize {
        self.phase_index
    }

    /// Phase held by an in-flight jump, if any.
    #[must_use]
    pub fn phase_lock(&self) -> Option<usize> {
        self.phase_lock
    }

    /// Publishes the initial state unconditionally.
    pub fn initialize(&mut self) -> Notifications {
        self.phase_edge.reset();
        self.last_emitted_progress = None;
        self.phase_lock = None;
        self.apply_scroll_state(self.scroll.offset(), self.scroll.max_offset())
    }

    /// Authoritative mutation path for every scroll offset change.
    pub fn apply_scroll_state(&mut self, offset: f64, max_offset: f64) -> Notifications {
        self.scroll = ScrollState::new(offset, max_offset);
        let sample = self
            .mapper
            .map(self.scroll.offset(), self.scroll.max_offset());
        self.progress = sample.progress;
        self.phase_index = self.phase_lock.unwrap_or(sample.phase_index);

        let mut notifications = Notifications::new();
        self.push_phase(&mut notifications);
        self.push_progress(&mut notifications, false);
        notifications
    }

    /// Switches to `index` (clamped) right away and plans the offset animation.
    ///
    /// The phase stays locked at the target until [`Self::release_phase_lock`],
    /// so intermediate animation offsets only move progress.
    pub fn jump_to_phase(&mut self, index: usize) -> (JumpPlan, Notifications) {
        let phase_index = self.mapper.clamp_phase(index);
        let max_offset = self.scroll.max_offset();
        let target_offset = self.mapper.anchor_offset(phase_index, max_offset);
        let target_progress = crate::core::normalized_progress(target_offset, max_offset);

        self.phase_lock = Some(phase_index);
        self.phase_index = phase_index;
        self.progress = target_progress;

        let mut notifications = Notifications::new();
        self.push_phase(&mut notifications);
        self.push_progress(&mut notifications, true);

        (
            JumpPlan {
                requested_index: index,
                phase_index,
                target_offset,
                target_progress,
            },
            notifications,
        )
    }

    /// Drops the jump lock and re-derives the phase from the current offset.
    pub fn release_phase_lock(&mut self) -> Notifications {
        if self.phase_lock.take().is_none() {
            return Notifications::new();
        }
        self.apply_scroll_state(self.scroll.offset(), self.scroll.max_offset())
    }

    /// Drops the jump lock without publishing. Returns `true` when a lock was
    /// held.
    ///
    /// The next [`Self::apply_scroll_state`] derives the phase from its offset.
    pub fn drop_phase_lock(&mut self) -> bool {
        self.phase_lock.take().is_some()
    }

    fn push_phase(&mut self, notifications: &mut Notifications) {
        if let Some(phase_index) = self.phase_edge.observe(self.phase_index) {
            notifications.push(NarrativeEvent::PhaseChanged { phase_index });
        }
    }

    fn push_progress(&mut self, notifications: &mut Notifications, force: bool) {
        if force || self.last_emitted_progress != Some(self.progress) {
            self.last_emitted_progress = Some(self.progress);
            notifications.push(NarrativeEvent::ScrollProgress {
                progress: self.progress,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PhaseStateStore;
    use crate::core::{PhaseRounding, ProgressMapper};
    use crate::extensions::NarrativeEvent;

    fn store() -> PhaseStateStore {
        PhaseStateStore::new(
            ProgressMapper::new(5, PhaseRounding::Anchor).expect("mapper"),
            400.0,
        )
    }

    #[test]
    fn initialize_publishes_phase_then_progress() {
        let mut store = store();
        let events = store.initialize();
        assert_eq!(
            events.as_slice(),
            &[
                NarrativeEvent::PhaseChanged { phase_index: 0 },
                NarrativeEvent::ScrollProgress { progress: 0.0 },
            ]
        );
    }

    #[test]
    fn repeated_state_is_silent() {
        let mut store = store();
        store.initialize();
        let first = store.apply_scroll_state(100.0, 400.0);
        assert_eq!(first.len(), 2);
        let second = store.apply_scroll_state(100.0, 400.0);
        assert!(second.is_empty());
    }

    #[test]
    fn progress_without_phase_change_emits_progress_only() {
        let mut store = store();
        store.initialize();
        let events = store.apply_scroll_state(20.0, 400.0);
        assert_eq!(
            events.as_slice(),
            &[NarrativeEvent::ScrollProgress { progress: 0.05 }]
        );
    }

    #[test]
    fn jump_locks_phase_until_released() {
        let mut store = store();
        store.initialize();
        let (plan, events) = store.jump_to_phase(3);
        assert_eq!(plan.target_offset, 300.0);
        assert_eq!(plan.target_progress, 0.75);
        assert_eq!(
            events.as_slice(),
            &[
                NarrativeEvent::PhaseChanged { phase_index: 3 },
                NarrativeEvent::ScrollProgress { progress: 0.75 },
            ]
        );

        // halfway through the animation the offset maps to phase 2
        let events = store.apply_scroll_state(150.0, 400.0);
        assert_eq!(store.phase_index(), 3);
        assert_eq!(
            events.as_slice(),
            &[NarrativeEvent::ScrollProgress { progress: 0.375 }]
        );

        store.apply_scroll_state(300.0, 400.0);
        assert!(store.release_phase_lock().is_empty());
        assert_eq!(store.phase_index(), 3);
        assert_eq!(store.phase_lock(), None);
    }

    #[test]
    fn jump_index_clamps() {
        let mut store = store();
        store.initialize();
        let (plan, _) = store.jump_to_phase(17);
        assert!(plan.was_clamped());
        assert_eq!(plan.phase_index, 4);
        assert_eq!(plan.target_offset, 400.0);
    }

    #[test]
    fn releasing_early_rederives_phase_from_offset() {
        let mut store = store();
        store.initialize();
        store.jump_to_phase(4);
        store.apply_scroll_state(120.0, 400.0);
        let events = store.release_phase_lock();
        assert_eq!(store.phase_index(), 1);
        assert_eq!(
            events.as_slice(),
            &[NarrativeEvent::PhaseChanged { phase_index: 1 }]
        );
    }

    #[test]
    fn dropped_lock_defers_to_next_scroll_state() {
        let mut store = store();
        store.initialize();
        store.jump_to_phase(4);
        store.apply_scroll_state(200.0, 400.0);

        assert!(store.drop_phase_lock());
        assert!(!store.drop_phase_lock());
        assert_eq!(store.phase_index(), 4);

        // one scroll state after the drop yields exactly one phase change
        let events = store.apply_scroll_state(0.0, 400.0);
        assert_eq!(
            events.as_slice(),
            &[
                NarrativeEvent::PhaseChanged { phase_index: 0 },
                NarrativeEvent::ScrollProgress { progress: 0.0 },
            ]
        );
    }
}
