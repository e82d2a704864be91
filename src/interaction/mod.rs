//! Raw input to scroll offset translation.
//!
//! `InputTranslator` is the single writer of the scroll offset. Wheel and touch
//! handlers, the idle snap and phase-jump animations all go through it, and
//! any new input cancels an in-flight animation before writing.

mod idle_timer;
mod scroll_tween;
mod snap;

pub use idle_timer::IdleTimer;
pub use scroll_tween::ScrollTween;
pub use snap::{SnapConfig, SnapTarget, resolve_snap_target};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Easing, ProgressMapper, ScrollState};

/// Input scaling factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Offset units per wheel delta unit.
    pub wheel_sensitivity: f64,
    /// Offset units per pointer unit of horizontal touch travel.
    pub touch_sensitivity: f64,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            wheel_sensitivity: 1.2,
            touch_sensitivity: 2.0,
        }
    }
}

/// Tuning for explicit phase jumps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JumpConfig {
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for JumpConfig {
    fn default() -> Self {
        Self {
            duration_ms: 1_000.0,
            easing: Easing::Power3InOut,
        }
    }
}

/// One wheel event as reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
}

impl WheelInput {
    #[must_use]
    pub fn new(delta_x: f64, delta_y: f64) -> Self {
        Self { delta_x, delta_y }
    }

    /// Delta along the axis with the larger magnitude; ties go to `delta_x`.
    #[must_use]
    pub fn dominant_delta(self) -> f64 {
        if self.delta_y.abs() > self.delta_x.abs() {
            self.delta_y
        } else {
            self.delta_x
        }
    }
}

/// What a scroll animation is driving toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScrollAnimationKind {
    Snap { anchor_index: usize },
    Jump { phase_index: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
struct ScrollAnimation {
    kind: ScrollAnimationKind,
    tween: ScrollTween,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct TouchAnchor {
    start_x: f64,
    start_offset: f64,
}

/// Result of feeding one input event.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputOutcome {
    pub offset_changed: bool,
    pub cancelled: Option<ScrollAnimationKind>,
}

/// Result of advancing timers and animations to a new clock value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AdvanceOutcome {
    pub snap_started: Option<SnapTarget>,
    pub offset_changed: bool,
    pub settled: Option<ScrollAnimationKind>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InputTranslator {
    input: InputConfig,
    snap: SnapConfig,
    mapper: ProgressMapper,
    scroll: ScrollState,
    touch: Option<TouchAnchor>,
    idle_timer: IdleTimer,
    animation: Option<ScrollAnimation>,
}

impl InputTranslator {
    #[must_use]
    pub fn new(input: InputConfig, snap: SnapConfig, mapper: ProgressMapper) -> Self {
        Self {
            input,
            snap,
            mapper,
            scroll: ScrollState::default(),
            touch: None,
            idle_timer: IdleTimer::default(),
            animation: None,
        }
    }

    #[must_use]
    pub fn scroll_state(&self) -> ScrollState {
        self.scroll
    }

    #[must_use]
    pub fn input_config(&self) -> InputConfig {
        self.input
    }

    pub fn set_input_config(&mut self, config: InputConfig) {
        self.input = config;
    }

    #[must_use]
    pub fn snap_config(&self) -> SnapConfig {
        self.snap
    }

    pub fn set_snap_config(&mut self, config: SnapConfig) {
        self.snap = config;
        if !config.enabled {
            self.idle_timer.cancel();
        }
    }

    #[must_use]
    pub fn idle_timer(&self) -> IdleTimer {
        self.idle_timer
    }

    #[must_use]
    pub fn active_animation(&self) -> Option<ScrollAnimationKind> {
        self.animation.map(|animation| animation.kind)
    }

    #[must_use]
    pub fn is_touching(&self) -> bool {
        self.touch.is_some()
    }

    /// Drops all gesture, timer and animation state and rests at offset 0.
    pub fn reset(&mut self, max_offset: f64) {
        self.scroll = ScrollState::new(0.0, max_offset);
        self.touch = None;
        self.idle_timer.cancel();
        self.animation = None;
    }

    /// Replaces the scroll range. Returns `true` when the offset was re-clamped.
    pub fn set_max_offset(&mut self, max_offset: f64) -> bool {
        self.scroll.set_max_offset(max_offset)
    }

    /// Cancels the idle timer and any running animation.
    pub fn cancel_pending(&mut self) -> Option<ScrollAnimationKind> {
        self.idle_timer.cancel();
        self.animation.take().map(|animation| animation.kind)
    }

    pub fn on_wheel(&mut self, wheel: WheelInput, now_ms: f64) -> InputOutcome {
        let cancelled = self.animation.take().map(|animation| animation.kind);
        let delta = wheel.dominant_delta() * self.input.wheel_sensitivity;
        let offset_changed = self.scroll.set_offset(self.scroll.offset() + delta);
        if self.snap.enabled {
            self.idle_timer.arm(now_ms, self.snap.idle_delay_ms);
        }
        trace!(
            delta,
            offset = self.scroll.offset(),
            offset_changed,
            "wheel input"
        );
        InputOutcome {
            offset_changed,
            cancelled,
        }
    }

    pub fn on_touch_start(&mut self, x: f64) -> InputOutcome {
        let cancelled = self.cancel_pending();
        self.touch = Some(TouchAnchor {
            start_x: x,
            start_offset: self.scroll.offset(),
        });
        InputOutcome {
            offset_changed: false,
            cancelled,
        }
    }

    /// Drags the offset opposite to finger travel. Ignored outside a gesture.
    pub fn on_touch_move(&mut self, x: f64) -> InputOutcome {
        let Some(anchor) = self.touch else {
            return InputOutcome::default();
        };
        let cancelled = self.cancel_pending();
        let walk = (x - anchor.start_x) * self.input.touch_sensitivity;
        let offset_changed = self.scroll.set_offset(anchor.start_offset - walk);
        trace!(walk, offset = self.scroll.offset(), "touch move");
        InputOutcome {
            offset_changed,
            cancelled,
        }
    }

    pub fn on_touch_end(&mut self) {
        self.touch = None;
    }

    /// Starts an animation toward `target_offset`, replacing whatever was running.
    pub fn start_animation(
        &mut self,
        kind: ScrollAnimationKind,
        target_offset: f64,
        now_ms: f64,
        duration_ms: f64,
        easing: Easing,
    ) -> Option<ScrollAnimationKind> {
        let cancelled = self.cancel_pending();
        let target_offset = target_offset.clamp(0.0, self.scroll.max_offset());
        self.animation = Some(ScrollAnimation {
            kind,
            tween: ScrollTween::new(
                self.scroll.offset(),
                target_offset,
                now_ms,
                duration_ms,
                easing,
            ),
        });
        cancelled
    }

    /// Fires a due idle timer, then samples the running animation at `now_ms`.
    pub fn advance(&mut self, now_ms: f64) -> AdvanceOutcome {
        let mut outcome = AdvanceOutcome::default();

        if self.idle_timer.fire_if_due(now_ms) && self.animation.is_none() && self.touch.is_none()
        {
            if let Some(target) = resolve_snap_target(
                self.scroll.offset(),
                self.scroll.max_offset(),
                self.mapper,
                self.snap.threshold_ratio,
            ) {
                self.start_animation(
                    ScrollAnimationKind::Snap {
                        anchor_index: target.anchor_index,
                    },
                    target.target_offset,
                    now_ms,
                    self.snap.duration_ms,
                    self.snap.easing,
                );
                outcome.snap_started = Some(target);
            }
        }

        if let Some(animation) = self.animation {
            outcome.offset_changed = self.scroll.set_offset(animation.tween.sample(now_ms));
            if animation.tween.is_done(now_ms) {
                self.animation = None;
                outcome.settled = Some(animation.kind);
            }
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::{
        InputConfig, InputTranslator, ScrollAnimationKind, SnapConfig, WheelInput,
    };
    use crate::core::{Easing, PhaseRounding, ProgressMapper};

    fn translator() -> InputTranslator {
        let mapper = ProgressMapper::new(5, PhaseRounding::Anchor).expect("mapper");
        let mut translator =
            InputTranslator::new(InputConfig::default(), SnapConfig::default(), mapper);
        translator.reset(400.0);
        translator
    }

    #[test]
    fn wheel_uses_dominant_axis() {
        assert_eq!(WheelInput::new(3.0, -10.0).dominant_delta(), -10.0);
        assert_eq!(WheelInput::new(12.0, 5.0).dominant_delta(), 12.0);
        assert_eq!(WheelInput::new(4.0, 4.0).dominant_delta(), 4.0);
    }

    #[test]
    fn wheel_scales_and_clamps() {
        let mut translator = translator();
        translator.on_wheel(WheelInput::new(0.0, 50.0), 0.0);
        assert!((translator.scroll_state().offset() - 60.0).abs() <= 1e-9);

        let outcome = translator.on_wheel(WheelInput::new(0.0, -500.0), 10.0);
        assert!(outcome.offset_changed);
        assert_eq!(translator.scroll_state().offset(), 0.0);

        let outcome = translator.on_wheel(WheelInput::new(0.0, -5.0), 20.0);
        assert!(!outcome.offset_changed);
    }

    #[test]
    fn touch_drag_moves_against_finger() {
        let mut translator = translator();
        translator.on_touch_start(300.0);
        translator.on_touch_move(250.0);
        assert_eq!(translator.scroll_state().offset(), 100.0);
        translator.on_touch_move(320.0);
        assert_eq!(translator.scroll_state().offset(), 0.0);
        translator.on_touch_end();
        let outcome = translator.on_touch_move(0.0);
        assert!(!outcome.offset_changed);
    }

    #[test]
    fn idle_timer_triggers_snap_and_settles_on_anchor() {
        let mut translator = translator();
        // 1.2 * 75 = 90, ten units short of anchor 1.
        translator.on_wheel(WheelInput::new(0.0, 75.0), 0.0);
        assert!(translator.advance(299.0).snap_started.is_none());

        let outcome = translator.advance(300.0);
        let snap = outcome.snap_started.expect("snap");
        assert_eq!(snap.anchor_index, 1);

        let settle = translator.advance(700.0);
        assert_eq!(
            settle.settled,
            Some(ScrollAnimationKind::Snap { anchor_index: 1 })
        );
        assert_eq!(translator.scroll_state().offset(), 100.0);
    }

    #[test]
    fn new_wheel_input_cancels_running_animation() {
        let mut translator = translator();
        translator.start_animation(
            ScrollAnimationKind::Jump { phase_index: 3 },
            300.0,
            0.0,
            1_000.0,
            Easing::Power3InOut,
        );
        translator.advance(500.0);
        let outcome = translator.on_wheel(WheelInput::new(0.0, 1.0), 500.0);
        assert_eq!(
            outcome.cancelled,
            Some(ScrollAnimationKind::Jump { phase_index: 3 })
        );
        assert!(translator.active_animation().is_none());
    }

    #[test]
    fn disabled_snap_never_arms_timer() {
        let mut translator = translator();
        translator.set_snap_config(SnapConfig {
            enabled: false,
            ..SnapConfig::default()
        });
        translator.on_wheel(WheelInput::new(0.0, 75.0), 0.0);
        assert!(!translator.idle_timer().is_armed());
        assert!(translator.advance(10_000.0).snap_started.is_none());
    }
}
