use serde::{Deserialize, Serialize};

use crate::error::{RigError, RigResult};

/// Host container geometry the scroll range is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScrollGeometry {
    pub scroll_width: f64,
    pub client_width: f64,
}

impl ScrollGeometry {
    #[must_use]
    pub fn new(scroll_width: f64, client_width: f64) -> Self {
        Self {
            scroll_width,
            client_width,
        }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.scroll_width.is_finite()
            && self.client_width.is_finite()
            && self.scroll_width >= 0.0
            && self.client_width >= 0.0
    }

    pub fn validate(self) -> RigResult<Self> {
        if !self.is_valid() {
            return Err(RigError::InvalidGeometry {
                scroll_width: self.scroll_width,
                client_width: self.client_width,
            });
        }
        Ok(self)
    }

    /// Scrollable travel; zero when the content fits without overflow.
    #[must_use]
    pub fn max_offset(self) -> f64 {
        (self.scroll_width - self.client_width).max(0.0)
    }
}

/// Scroll offset together with its admissible range.
///
/// `0 <= offset <= max_offset` always holds; out-of-range writes clamp.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollState {
    offset: f64,
    max_offset: f64,
}

impl ScrollState {
    #[must_use]
    pub fn new(offset: f64, max_offset: f64) -> Self {
        let max_offset = if max_offset.is_finite() {
            max_offset.max(0.0)
        } else {
            0.0
        };
        let mut state = Self {
            offset: 0.0,
            max_offset,
        };
        state.set_offset(offset);
        state
    }

    #[must_use]
    pub fn offset(self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn max_offset(self) -> f64 {
        self.max_offset
    }

    /// Writes a new offset, clamped. Returns `true` when the stored value changed.
    pub fn set_offset(&mut self, offset: f64) -> bool {
        let clamped = if offset.is_finite() {
            offset.clamp(0.0, self.max_offset)
        } else {
            self.offset
        };
        let changed = clamped != self.offset;
        self.offset = clamped;
        changed
    }

    /// Replaces the range and re-clamps the current offset.
    ///
    /// Returns `true` when the offset had to move.
    pub fn set_max_offset(&mut self, max_offset: f64) -> bool {
        let previous = self.offset;
        *self = Self::new(previous, max_offset);
        self.offset != previous
    }

    #[must_use]
    pub fn progress(self) -> f64 {
        super::progress::normalized_progress(self.offset, self.max_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::{ScrollGeometry, ScrollState};

    #[test]
    fn scroll_state_clamps_silently() {
        let mut state = ScrollState::new(-20.0, 400.0);
        assert_eq!(state.offset(), 0.0);
        assert!(state.set_offset(1_000.0));
        assert_eq!(state.offset(), 400.0);
        assert!(!state.set_offset(f64::NAN));
        assert_eq!(state.offset(), 400.0);
    }

    #[test]
    fn shrinking_range_reclamps_offset() {
        let mut state = ScrollState::new(350.0, 400.0);
        state.set_max_offset(200.0);
        assert_eq!(state.offset(), 200.0);
        assert_eq!(state.max_offset(), 200.0);
    }

    #[test]
    fn geometry_without_overflow_has_zero_travel() {
        assert_eq!(ScrollGeometry::new(800.0, 1_000.0).max_offset(), 0.0);
        assert_eq!(ScrollGeometry::new(5_000.0, 1_000.0).max_offset(), 4_000.0);
        assert!(ScrollGeometry::new(f64::NAN, 1.0).validate().is_err());
    }
}
