use serde::{Deserialize, Serialize};

use glam::DVec3;
use crate::error::{RigError, RigResult};

/// Static camera anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraKeyframe {
    pub position: DVec3,
    pub look_at: DVec3,
    /// Vertical field of view in degrees.
    pub fov: f64,
}

impl CameraKeyframe {
    #[must_use]
    pub const fn new(position: DVec3, look_at: DVec3, fov: f64) -> Self {
        Self {
            position,
            look_at,
            fov,
        }
    }

    pub fn validate(self) -> RigResult<Self> {
        if !self.position.is_finite() || !self.look_at.is_finite() {
            return Err(RigError::InvalidConfig(
                "camera keyframe position/look_at must be finite".to_owned(),
            ));
        }
        if !self.fov.is_finite() || self.fov <= 0.0 || self.fov >= 180.0 {
            return Err(RigError::InvalidConfig(
                "camera keyframe fov must be finite and in (0, 180)".to_owned(),
            ));
        }
        Ok(self)
    }
}

/// Position of a progress value inside the keyframe sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KeyframeSegment {
    pub from_index: usize,
    pub to_index: usize,
    /// Linear position between the two keyframes in `[0, 1)`.
    pub t: f64,
}

/// Ordered camera keyframes spread evenly over the whole progress range.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyframeTrack {
    keyframes: Vec<CameraKeyframe>,
}

impl KeyframeTrack {
    pub fn new(keyframes: Vec<CameraKeyframe>) -> RigResult<Self> {
        for keyframe in &keyframes {
            keyframe.validate()?;
        }
        Ok(Self { keyframes })
    }

    /// Fifteen keyframes, three per phase of the reference narrative.
    #[must_use]
    pub fn reference() -> Self {
        let kf = |p: (f64, f64, f64), l: (f64, f64, f64), fov: f64| {
            CameraKeyframe::new(DVec3::new(p.0, p.1, p.2), DVec3::new(l.0, l.1, l.2), fov)
        };
        Self {
            keyframes: vec![
                // front view, slow approach
                kf((0.0, -1.5, 9.0), (0.0, 0.0, 0.0), 55.0),
                kf((0.0, -1.0, 7.5), (0.0, -0.2, 0.0), 52.0),
                kf((0.0, -0.5, 7.0), (0.0, 0.0, 0.0), 50.0),
                // right side orbit with elevation
                kf((3.0, 0.0, 6.0), (0.0, 0.0, 0.0), 49.0),
                kf((5.0, 0.5, 5.0), (0.0, 0.2, 0.0), 48.0),
                kf((6.0, 1.0, 4.5), (0.0, 0.0, 0.0), 47.0),
                // top-down angles
                kf((5.0, 2.0, 5.0), (0.0, 0.3, 0.0), 47.0),
                kf((4.0, 3.0, 5.0), (0.0, 0.5, 0.0), 46.0),
                kf((3.0, 3.5, 5.5), (0.0, 0.5, 0.0), 45.0),
                // left side sweep
                kf((-3.0, 2.5, 6.0), (0.0, 0.3, 0.0), 46.0),
                kf((-5.0, 2.0, 5.0), (0.0, 0.0, 0.0), 45.0),
                kf((-6.0, 1.5, 4.5), (0.0, -0.2, 0.0), 44.0),
                // pull back reveal
                kf((-3.0, 2.0, 7.0), (0.0, 0.0, 0.0), 48.0),
                kf((0.0, 2.5, 8.0), (0.0, 0.2, 0.0), 50.0),
                kf((0.0, 2.0, 9.0), (0.0, 0.0, 0.0), 52.0),
            ],
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.keyframes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keyframes.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CameraKeyframe> {
        self.keyframes.get(index)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[CameraKeyframe] {
        &self.keyframes
    }

    /// Keyframes per phase when the track partitions evenly, `None` otherwise.
    #[must_use]
    pub fn keyframes_per_phase(&self, phase_count: usize) -> Option<usize> {
        if phase_count == 0 || self.keyframes.is_empty() || self.keyframes.len() % phase_count != 0
        {
            return None;
        }
        Some(self.keyframes.len() / phase_count)
    }

    /// Locates `progress` (clamped to `[0, 1]`) between two neighbouring keyframes.
    ///
    /// Returns `None` for an empty track. A single-entry track always resolves
    /// to that entry with `t = 0`.
    #[must_use]
    pub fn locate(&self, progress: f64) -> Option<KeyframeSegment> {
        let len = self.keyframes.len();
        if len == 0 {
            return None;
        }
        let last = len - 1;
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let keyframe_progress = progress * last as f64;
        let from_index = (keyframe_progress.floor() as usize).min(last);
        let to_index = (from_index + 1).min(last);
        let t = if from_index == to_index {
            0.0
        } else {
            keyframe_progress - from_index as f64
        };
        Some(KeyframeSegment {
            from_index,
            to_index,
            t,
        })
    }
}
