//! Phase-driven content visibility.

use serde::{Deserialize, Serialize};

use crate::core::ProgressMapper;

/// Navigation indicator state of one phase relative to the active phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndicatorState {
    Visited,
    Active,
    Upcoming,
}

impl IndicatorState {
    #[must_use]
    pub fn resolve(index: usize, active_phase: usize) -> Self {
        match index.cmp(&active_phase) {
            std::cmp::Ordering::Less => Self::Visited,
            std::cmp::Ordering::Equal => Self::Active,
            std::cmp::Ordering::Greater => Self::Upcoming,
        }
    }
}

/// Visibility decision for one narrative section.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SectionVisibility {
    pub phase_index: usize,
    /// `1.0` for the active section, `0.0` otherwise. Fades belong to the renderer.
    pub opacity: f64,
    pub indicator: IndicatorState,
    /// Whether the connector from this indicator to the next one is filled.
    /// Always `false` for the last section.
    pub connector_filled: bool,
}

impl SectionVisibility {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.opacity > 0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentVisibility {
    pub active_phase: usize,
    /// Progress through the active phase in `[0, 1]`, anchored at the active
    /// phase's resting offset.
    pub intra_phase_progress: f64,
    pub sections: Vec<SectionVisibility>,
}

impl ContentVisibility {
    #[must_use]
    pub fn opacity(&self, phase_index: usize) -> f64 {
        self.sections
            .get(phase_index)
            .map_or(0.0, |section| section.opacity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentVisibilityResolver {
    mapper: ProgressMapper,
}

impl ContentVisibilityResolver {
    #[must_use]
    pub fn new(mapper: ProgressMapper) -> Self {
        Self { mapper }
    }

    /// `(offset - anchor(active_phase)) / phase_width`, clamped to `[0, 1]`.
    ///
    /// The caller's phase is trusted as-is rather than re-derived from
    /// `offset`, so the value does not flip when a boundary is crossed before
    /// the phase notification lands.
    #[must_use]
    pub fn intra_phase_progress(self, active_phase: usize, offset: f64, max_offset: f64) -> f64 {
        let phase_width = self.mapper.phase_width(max_offset);
        if phase_width <= 0.0 || !offset.is_finite() {
            return 0.0;
        }
        let phase_start = self.mapper.anchor_offset(active_phase, max_offset);
        ((offset - phase_start) / phase_width).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn resolve(self, active_phase: usize, offset: f64, max_offset: f64) -> ContentVisibility {
        let phase_count = self.mapper.phase_count();
        let active_phase = self.mapper.clamp_phase(active_phase);
        let sections = (0..phase_count)
            .map(|phase_index| SectionVisibility {
                phase_index,
                opacity: if phase_index == active_phase { 1.0 } else { 0.0 },
                indicator: IndicatorState::resolve(phase_index, active_phase),
                connector_filled: phase_index + 1 < phase_count && phase_index < active_phase,
            })
            .collect();
        ContentVisibility {
            active_phase,
            intra_phase_progress: self.intra_phase_progress(active_phase, offset, max_offset),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ContentVisibilityResolver, IndicatorState};
    use crate::core::{PhaseRounding, ProgressMapper};

    fn resolver() -> ContentVisibilityResolver {
        ContentVisibilityResolver::new(
            ProgressMapper::new(5, PhaseRounding::Anchor).expect("mapper"),
        )
    }

    #[test]
    fn only_active_section_is_opaque() {
        let visibility = resolver().resolve(2, 200.0, 400.0);
        let opacities: Vec<f64> = visibility.sections.iter().map(|s| s.opacity).collect();
        assert_eq!(opacities, vec![0.0, 0.0, 1.0, 0.0, 0.0]);
        assert!(visibility.sections[2].is_visible());
        assert_eq!(visibility.opacity(9), 0.0);
    }

    #[test]
    fn indicator_and_connector_states_follow_active_phase() {
        let visibility = resolver().resolve(2, 200.0, 400.0);
        let indicators: Vec<IndicatorState> =
            visibility.sections.iter().map(|s| s.indicator).collect();
        assert_eq!(
            indicators,
            vec![
                IndicatorState::Visited,
                IndicatorState::Visited,
                IndicatorState::Active,
                IndicatorState::Upcoming,
                IndicatorState::Upcoming,
            ]
        );
        let connectors: Vec<bool> = visibility
            .sections
            .iter()
            .map(|s| s.connector_filled)
            .collect();
        assert_eq!(connectors, vec![true, true, false, false, false]);
    }

    #[test]
    fn intra_phase_progress_is_anchored_to_given_phase() {
        let resolver = resolver();
        assert_eq!(resolver.intra_phase_progress(1, 125.0, 400.0), 0.25);
        // past the switch point but still reported against phase 1
        assert_eq!(resolver.intra_phase_progress(1, 160.0, 400.0), 0.6);
        // behind the anchor clamps instead of going negative
        assert_eq!(resolver.intra_phase_progress(2, 160.0, 400.0), 0.0);
        assert_eq!(resolver.intra_phase_progress(0, 10.0, 0.0), 0.0);
    }

    #[test]
    fn out_of_range_phase_clamps() {
        let visibility = resolver().resolve(42, 400.0, 400.0);
        assert_eq!(visibility.active_phase, 4);
        assert_eq!(visibility.opacity(4), 1.0);
    }
}
