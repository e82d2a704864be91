pub mod easing;
pub mod keyframes;
pub mod phase;
pub mod progress;
pub mod types;

pub use easing::{Easing, lerp, smoothstep};
pub use keyframes::{CameraKeyframe, KeyframeSegment, KeyframeTrack};
pub use phase::{Phase, PhaseCatalog};
pub use progress::{
    PhaseEdgeTrigger, PhaseRounding, ProgressMapper, ProgressSample, map_progress,
    normalized_progress,
};
pub use glam::DVec3;
pub use types::{ScrollGeometry, ScrollState};
