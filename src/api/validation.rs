use crate::camera::CameraSmoothingConfig;
use crate::core::KeyframeTrack;
use crate::error::{RigError, RigResult};
use crate::interaction::{InputConfig, JumpConfig, SnapConfig};

use super::NarrativeEngineConfig;

pub(super) fn validate_engine_config(config: &NarrativeEngineConfig) -> RigResult<()> {
    if config.phases.is_empty() {
        return Err(RigError::InvalidConfig(
            "phase catalog must contain at least one phase".to_owned(),
        ));
    }
    validate_keyframe_track(&config.keyframes)?;
    validate_input_config(config.input)?;
    validate_snap_config(config.snap)?;
    validate_jump_config(config.jump)?;
    validate_camera_smoothing(config.camera_smoothing)?;
    Ok(())
}

pub(super) fn validate_keyframe_track(track: &KeyframeTrack) -> RigResult<()> {
    for (index, keyframe) in track.as_slice().iter().enumerate() {
        keyframe.validate().map_err(|err| {
            RigError::InvalidConfig(format!("keyframe {index}: {err}"))
        })?;
    }
    Ok(())
}

pub(super) fn validate_input_config(config: InputConfig) -> RigResult<InputConfig> {
    for (name, value) in [
        ("wheel_sensitivity", config.wheel_sensitivity),
        ("touch_sensitivity", config.touch_sensitivity),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(RigError::InvalidConfig(format!(
                "input {name} must be finite and > 0"
            )));
        }
    }
    Ok(config)
}

pub(super) fn validate_snap_config(config: SnapConfig) -> RigResult<SnapConfig> {
    if !config.idle_delay_ms.is_finite() || config.idle_delay_ms < 0.0 {
        return Err(RigError::InvalidConfig(
            "snap idle_delay_ms must be finite and >= 0".to_owned(),
        ));
    }
    if !config.threshold_ratio.is_finite() || !(0.0..=0.5).contains(&config.threshold_ratio) {
        return Err(RigError::InvalidConfig(
            "snap threshold_ratio must be finite and in [0, 0.5]".to_owned(),
        ));
    }
    if !config.duration_ms.is_finite() || config.duration_ms <= 0.0 {
        return Err(RigError::InvalidConfig(
            "snap duration_ms must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_jump_config(config: JumpConfig) -> RigResult<JumpConfig> {
    if !config.duration_ms.is_finite() || config.duration_ms <= 0.0 {
        return Err(RigError::InvalidConfig(
            "jump duration_ms must be finite and > 0".to_owned(),
        ));
    }
    Ok(config)
}

pub(super) fn validate_camera_smoothing(
    config: CameraSmoothingConfig,
) -> RigResult<CameraSmoothingConfig> {
    for (name, value) in [
        ("position_factor", config.position_factor),
        ("look_at_factor", config.look_at_factor),
    ] {
        if !value.is_finite() || value <= 0.0 || value > 1.0 {
            return Err(RigError::InvalidConfig(format!(
                "camera smoothing {name} must be finite and in (0, 1]"
            )));
        }
    }
    Ok(config)
}

pub(super) fn validate_wheel_delta(delta_x: f64, delta_y: f64) -> RigResult<()> {
    if !delta_x.is_finite() || !delta_y.is_finite() {
        return Err(RigError::InvalidInput(
            "wheel delta must be finite".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_pointer_x(x: f64) -> RigResult<()> {
    if !x.is_finite() {
        return Err(RigError::InvalidInput(
            "touch pointer x must be finite".to_owned(),
        ));
    }
    Ok(())
}

pub(super) fn validate_tick_delta(delta_seconds: f64) -> RigResult<()> {
    if !delta_seconds.is_finite() || delta_seconds < 0.0 {
        return Err(RigError::InvalidInput(
            "tick delta_seconds must be finite and >= 0".to_owned(),
        ));
    }
    Ok(())
}
