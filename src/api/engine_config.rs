use serde::{Deserialize, Serialize};

use crate::camera::CameraSmoothingConfig;
use crate::core::{KeyframeTrack, PhaseCatalog, PhaseRounding};
use crate::error::{RigError, RigResult};
use crate::interaction::{InputConfig, JumpConfig, SnapConfig};

/// Public engine bootstrap configuration.
///
/// This type is serializable so host applications can ship narrative setup
/// as data instead of code. Every field falls back to the reference
/// narrative when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NarrativeEngineConfig {
    #[serde(default = "default_phases")]
    pub phases: PhaseCatalog,
    #[serde(default = "default_keyframes")]
    pub keyframes: KeyframeTrack,
    #[serde(default = "default_phase_rounding")]
    pub phase_rounding: PhaseRounding,
    #[serde(default = "default_input_config")]
    pub input: InputConfig,
    #[serde(default = "default_snap_config")]
    pub snap: SnapConfig,
    #[serde(default = "default_jump_config")]
    pub jump: JumpConfig,
    #[serde(default = "default_camera_smoothing")]
    pub camera_smoothing: CameraSmoothingConfig,
}

impl NarrativeEngineConfig {
    /// Reference narrative: five phases, fifteen keyframes, default tuning.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phases: default_phases(),
            keyframes: default_keyframes(),
            phase_rounding: default_phase_rounding(),
            input: default_input_config(),
            snap: default_snap_config(),
            jump: default_jump_config(),
            camera_smoothing: default_camera_smoothing(),
        }
    }

    #[must_use]
    pub fn phase_count(&self) -> usize {
        self.phases.len()
    }

    /// Sets the phase table.
    #[must_use]
    pub fn with_phases(mut self, phases: PhaseCatalog) -> Self {
        self.phases = phases;
        self
    }

    /// Sets the camera keyframe track.
    #[must_use]
    pub fn with_keyframes(mut self, keyframes: KeyframeTrack) -> Self {
        self.keyframes = keyframes;
        self
    }

    /// Sets the progress-to-phase rounding rule.
    #[must_use]
    pub fn with_phase_rounding(mut self, rounding: PhaseRounding) -> Self {
        self.phase_rounding = rounding;
        self
    }

    #[must_use]
    pub fn with_input_config(mut self, input: InputConfig) -> Self {
        self.input = input;
        self
    }

    #[must_use]
    pub fn with_snap_config(mut self, snap: SnapConfig) -> Self {
        self.snap = snap;
        self
    }

    #[must_use]
    pub fn with_jump_config(mut self, jump: JumpConfig) -> Self {
        self.jump = jump;
        self
    }

    #[must_use]
    pub fn with_camera_smoothing(mut self, smoothing: CameraSmoothingConfig) -> Self {
        self.camera_smoothing = smoothing;
        self
    }

    pub fn to_json_pretty(&self) -> RigResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RigError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    pub fn from_json_str(input: &str) -> RigResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| RigError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

impl Default for NarrativeEngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_phases() -> PhaseCatalog {
    PhaseCatalog::reference()
}

fn default_keyframes() -> KeyframeTrack {
    KeyframeTrack::reference()
}

fn default_phase_rounding() -> PhaseRounding {
    PhaseRounding::Anchor
}

fn default_input_config() -> InputConfig {
    InputConfig::default()
}

fn default_snap_config() -> SnapConfig {
    SnapConfig::default()
}

fn default_jump_config() -> JumpConfig {
    JumpConfig::default()
}

fn default_camera_smoothing() -> CameraSmoothingConfig {
    CameraSmoothingConfig::default()
}
