use serde::{Deserialize, Serialize};

use crate::interaction::ScrollAnimationKind;

/// Read-only state snapshot passed to observer hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub mounted: bool,
    pub phase_count: usize,
    /// `None` while unmounted.
    pub phase_index: Option<usize>,
    pub progress: f64,
    pub offset: f64,
    pub max_offset: f64,
    pub animation: Option<ScrollAnimationKind>,
}

/// Event stream exposed to observers.
///
/// Within one engine call a `PhaseChanged` is always delivered before the
/// `ScrollProgress` that caused it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum NarrativeEvent {
    Mounted { max_offset: f64 },
    Resized { max_offset: f64 },
    Unmounted,
    PhaseChanged { phase_index: usize },
    ScrollProgress { progress: f64 },
    SnapStarted { anchor_index: usize, target_offset: f64 },
    JumpStarted { phase_index: usize, target_offset: f64 },
    AnimationSettled { kind: ScrollAnimationKind },
    AnimationCancelled { kind: ScrollAnimationKind },
    Rendered,
}

/// Observer hook interface.
///
/// Observers see events and a context snapshot; they cannot mutate engine
/// state.
pub trait NarrativeObserver {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: NarrativeEvent, context: ObserverContext);
}

/// Adapter turning a closure into a [`NarrativeObserver`].
pub struct FnObserver<F>
where
    F: FnMut(NarrativeEvent, ObserverContext),
{
    id: String,
    callback: F,
}

impl<F> FnObserver<F>
where
    F: FnMut(NarrativeEvent, ObserverContext),
{
    pub fn new(id: impl Into<String>, callback: F) -> Self {
        Self {
            id: id.into(),
            callback,
        }
    }
}

impl<F> NarrativeObserver for FnObserver<F>
where
    F: FnMut(NarrativeEvent, ObserverContext),
{
    fn id(&self) -> &str {
        &self.id
    }

    fn on_event(&mut self, event: NarrativeEvent, context: ObserverContext) {
        (self.callback)(event, context);
    }
}
