use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{Easing, ProgressMapper};

/// Tuning for idle snap-to-anchor behavior.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapConfig {
    pub enabled: bool,
    /// Quiet time after the last wheel event before snapping is considered.
    pub idle_delay_ms: f64,
    /// Snap only when the distance to the nearest anchor is below
    /// `threshold_ratio * phase_width`.
    pub threshold_ratio: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            idle_delay_ms: 300.0,
            threshold_ratio: 0.2,
            duration_ms: 400.0,
            easing: Easing::Power2Out,
        }
    }
}

/// Anchor chosen by the idle snap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SnapTarget {
    pub anchor_index: usize,
    pub target_offset: f64,
    pub distance: f64,
}

/// Picks the anchor nearest to `offset` and accepts it when it lies inside
/// the snap threshold.
///
/// Returns `None` when there is no travel, when the offset already rests on
/// the anchor, or when the nearest anchor is too far away.
#[must_use]
pub fn resolve_snap_target(
    offset: f64,
    max_offset: f64,
    mapper: ProgressMapper,
    threshold_ratio: f64,
) -> Option<SnapTarget> {
    let phase_width = mapper.phase_width(max_offset);
    if phase_width <= 0.0 || !offset.is_finite() {
        return None;
    }

    let lower = mapper.clamp_phase((offset / phase_width).floor().max(0.0) as usize);
    let upper = mapper.clamp_phase(lower + 1);

    let mut candidates: SmallVec<[(OrderedFloat<f64>, SnapTarget); 2]> = SmallVec::new();
    for anchor_index in [lower, upper] {
        let target_offset = mapper.anchor_offset(anchor_index, max_offset);
        let distance = (offset - target_offset).abs();
        candidates.push((
            OrderedFloat(distance),
            SnapTarget {
                anchor_index,
                target_offset,
                distance,
            },
        ));
    }

    let (_, nearest) = candidates.into_iter().min_by_key(|item| item.0)?;
    if nearest.distance <= f64::EPSILON || nearest.distance >= phase_width * threshold_ratio {
        return None;
    }
    Some(nearest)
}
