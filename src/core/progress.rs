use serde::{Deserialize, Serialize};

use crate::error::{RigError, RigResult};

/// Rule mapping normalized progress to a discrete phase index.
///
/// Both rules switch phases halfway between two anchors; they differ in where
/// the anchors sit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PhaseRounding {
    /// Anchors at `i / (phase_count - 1)`: the first phase rests at progress 0,
    /// the last at progress 1. Index is `floor(progress * (phase_count - 1) + 0.5)`.
    #[default]
    Anchor,
    /// Anchors at `i / phase_count`: each phase owns an equal value-width of
    /// progress. Index is `floor(progress * phase_count + 0.5)`, clamped.
    ValueWidth,
}

impl PhaseRounding {
    fn anchor_divisor(self, phase_count: usize) -> f64 {
        match self {
            Self::Anchor => phase_count.saturating_sub(1).max(1) as f64,
            Self::ValueWidth => phase_count.max(1) as f64,
        }
    }

    #[must_use]
    pub fn phase_for_progress(self, progress: f64, phase_count: usize) -> usize {
        if phase_count <= 1 || !progress.is_finite() {
            return 0;
        }
        let scaled = match self {
            Self::Anchor => progress * (phase_count - 1) as f64,
            Self::ValueWidth => progress * phase_count as f64,
        };
        let index = (scaled + 0.5).floor().max(0.0) as usize;
        index.min(phase_count - 1)
    }

    /// Progress at which `index` rests. Feeding it back through
    /// [`Self::phase_for_progress`] yields `index` again.
    #[must_use]
    pub fn anchor_progress(self, index: usize, phase_count: usize) -> f64 {
        if phase_count <= 1 {
            return 0.0;
        }
        let index = index.min(phase_count - 1);
        (index as f64 / self.anchor_divisor(phase_count)).clamp(0.0, 1.0)
    }
}

/// Result of one progress mapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSample {
    pub progress: f64,
    pub phase_index: usize,
}

/// `offset / max_offset` clamped to `[0, 1]`; `0` when there is no travel.
#[must_use]
pub fn normalized_progress(offset: f64, max_offset: f64) -> f64 {
    if max_offset <= 0.0 || !max_offset.is_finite() || !offset.is_finite() {
        return 0.0;
    }
    (offset / max_offset).clamp(0.0, 1.0)
}

/// Stateless mapping of `(offset, max_offset, phase_count)` to a [`ProgressSample`].
#[must_use]
pub fn map_progress(
    offset: f64,
    max_offset: f64,
    phase_count: usize,
    rounding: PhaseRounding,
) -> ProgressSample {
    let progress = normalized_progress(offset, max_offset);
    ProgressSample {
        progress,
        phase_index: rounding.phase_for_progress(progress, phase_count),
    }
}

/// Fixed phase layout over a scroll range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressMapper {
    phase_count: usize,
    rounding: PhaseRounding,
}

impl ProgressMapper {
    pub fn new(phase_count: usize, rounding: PhaseRounding) -> RigResult<Self> {
        if phase_count == 0 {
            return Err(RigError::InvalidConfig(
                "phase count must be >= 1".to_owned(),
            ));
        }
        Ok(Self {
            phase_count,
            rounding,
        })
    }

    #[must_use]
    pub fn phase_count(self) -> usize {
        self.phase_count
    }

    #[must_use]
    pub fn rounding(self) -> PhaseRounding {
        self.rounding
    }

    #[must_use]
    pub fn map(self, offset: f64, max_offset: f64) -> ProgressSample {
        map_progress(offset, max_offset, self.phase_count, self.rounding)
    }

    #[must_use]
    pub fn clamp_phase(self, index: usize) -> usize {
        index.min(self.phase_count - 1)
    }

    /// Offset distance between two neighbouring phase anchors.
    #[must_use]
    pub fn phase_width(self, max_offset: f64) -> f64 {
        if max_offset <= 0.0 || !max_offset.is_finite() {
            return 0.0;
        }
        max_offset / self.rounding.anchor_divisor(self.phase_count)
    }

    /// Offset at which phase `index` rests. Out-of-range indices clamp.
    #[must_use]
    pub fn anchor_offset(self, index: usize, max_offset: f64) -> f64 {
        if max_offset <= 0.0 || !max_offset.is_finite() {
            return 0.0;
        }
        self.rounding.anchor_progress(index, self.phase_count) * max_offset
    }
}

/// Edge detector for phase notifications: reports an index only when it
/// differs from the previously reported one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PhaseEdgeTrigger {
    last_emitted: Option<usize>,
}

impl PhaseEdgeTrigger {
    #[must_use]
    pub fn last_emitted(self) -> Option<usize> {
        self.last_emitted
    }

    pub fn observe(&mut self, index: usize) -> Option<usize> {
        if self.last_emitted == Some(index) {
            return None;
        }
        self.last_emitted = Some(index);
        Some(index)
    }

    pub fn reset(&mut self) {
        self.last_emitted = None;
    }
}
