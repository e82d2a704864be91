use crate::error::RigResult;
use crate::interaction::{InputOutcome, WheelInput};
use crate::render::Renderer;

use super::{
    NarrativeEngine,
    validation::{validate_pointer_x, validate_wheel_delta},
};

impl<R: Renderer> NarrativeEngine<R> {
    /// Feeds one wheel event. The dominant axis drives the offset.
    ///
    /// Cancels any running snap or jump and re-arms the idle snap timer.
    /// Returns `Ok(true)` whenever the engine is mounted, even when the offset
    /// is pinned at either end of the range, so hosts can suppress native page
    /// scrolling on that value alone.
    pub fn wheel(&mut self, delta_x: f64, delta_y: f64) -> RigResult<bool> {
        validate_wheel_delta(delta_x, delta_y)?;
        if !self.is_mounted() {
            return Ok(false);
        }
        let outcome = self
            .core
            .translator
            .on_wheel(WheelInput::new(delta_x, delta_y), self.core.runtime.clock_ms);
        self.apply_input_outcome(outcome);
        Ok(true)
    }

    /// Starts a horizontal drag gesture at pointer `x`.
    pub fn touch_start(&mut self, x: f64) -> RigResult<bool> {
        validate_pointer_x(x)?;
        if !self.is_mounted() {
            return Ok(false);
        }
        let outcome = self.core.translator.on_touch_start(x);
        Ok(self.apply_input_outcome(outcome))
    }

    /// Moves the active drag gesture. Ignored when no gesture is active.
    pub fn touch_move(&mut self, x: f64) -> RigResult<bool> {
        validate_pointer_x(x)?;
        if !self.is_mounted() {
            return Ok(false);
        }
        let outcome = self.core.translator.on_touch_move(x);
        Ok(self.apply_input_outcome(outcome))
    }

    pub fn touch_end(&mut self) -> bool {
        if !self.is_mounted() || !self.core.translator.is_touching() {
            return false;
        }
        self.core.translator.on_touch_end();
        true
    }

    fn apply_input_outcome(&mut self, outcome: InputOutcome) -> bool {
        let lock_dropped = self.handle_cancelled(outcome.cancelled, true);
        if outcome.offset_changed || lock_dropped {
            self.publish_scroll_state();
        }
        outcome.offset_changed
    }
}
