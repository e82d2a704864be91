//! Cinematic camera rig driven by scroll progress.
//!
//! Two stages run at different rates. Target resolution happens whenever
//! progress changes and may jump arbitrarily far. Pose smoothing happens once
//! per render tick and low-pass filters the rendered pose toward the target,
//! so the camera never teleports even when progress does.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{DVec3, KeyframeTrack, lerp, smoothstep};

/// Rendered or target camera state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub position: DVec3,
    pub look_at: DVec3,
    /// Vertical field of view in degrees.
    pub fov: f64,
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: DVec3::new(0.0, 0.0, 8.0),
            look_at: DVec3::ZERO,
            fov: 45.0,
        }
    }
}

/// Per-tick exponential smoothing factors in `(0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraSmoothingConfig {
    pub position_factor: f64,
    pub look_at_factor: f64,
}

impl Default for CameraSmoothingConfig {
    fn default() -> Self {
        Self {
            position_factor: 0.04,
            look_at_factor: 0.04,
        }
    }
}

/// Resolves the target pose for `progress` from the keyframe track.
///
/// Position and look-at use smoothstep-eased interpolation; field of view is
/// interpolated linearly. Returns `None` for an empty track.
#[must_use]
pub fn resolve_keyframe_target(track: &KeyframeTrack, progress: f64) -> Option<CameraPose> {
    let segment = track.locate(progress)?;
    let from = track.get(segment.from_index)?;
    let to = track.get(segment.to_index)?;
    let eased = smoothstep(segment.t);
    Some(CameraPose {
        position: from.position.lerp(to.position, eased),
        look_at: from.look_at.lerp(to.look_at, eased),
        fov: lerp(from.fov, to.fov, segment.t),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CameraInterpolator {
    track: KeyframeTrack,
    smoothing: CameraSmoothingConfig,
    progress: f64,
    target: CameraPose,
    pose: CameraPose,
}

impl CameraInterpolator {
    /// Creates a rig resting on the progress-0 target.
    #[must_use]
    pub fn new(track: KeyframeTrack, smoothing: CameraSmoothingConfig) -> Self {
        let target = resolve_keyframe_target(&track, 0.0).unwrap_or_default();
        Self {
            track,
            smoothing,
            progress: 0.0,
            target,
            pose: target,
        }
    }

    #[must_use]
    pub fn track(&self) -> &KeyframeTrack {
        &self.track
    }

    #[must_use]
    pub fn smoothing(&self) -> CameraSmoothingConfig {
        self.smoothing
    }

    pub fn set_smoothing(&mut self, smoothing: CameraSmoothingConfig) {
        self.smoothing = smoothing;
    }

    #[must_use]
    pub fn progress(&self) -> f64 {
        self.progress
    }

    #[must_use]
    pub fn target(&self) -> CameraPose {
        self.target
    }

    #[must_use]
    pub fn pose(&self) -> CameraPose {
        self.pose
    }

    /// Retargets the rig. Field of view is applied to the pose immediately.
    ///
    /// Returns `true` when the target changed.
    pub fn set_progress(&mut self, progress: f64) -> bool {
        let progress = if progress.is_finite() {
            progress.clamp(0.0, 1.0)
        } else {
            0.0
        };
        if progress == self.progress {
            return false;
        }
        self.progress = progress;
        let Some(target) = resolve_keyframe_target(&self.track, progress) else {
            return false;
        };
        self.target = target;
        self.pose.fov = target.fov;
        trace!(progress, fov = target.fov, "camera retarget");
        true
    }

    /// Advances pose smoothing by one render tick.
    pub fn step(&mut self) -> CameraPose {
        self.pose.position = self
            .pose
            .position
            .lerp(self.target.position, self.smoothing.position_factor);
        self.pose.look_at = self
            .pose
            .look_at
            .lerp(self.target.look_at, self.smoothing.look_at_factor);
        self.pose
    }

    /// Places the rendered pose on the target without smoothing.
    pub fn settle(&mut self) {
        self.pose = self.target;
    }
}
