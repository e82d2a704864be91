use approx::assert_abs_diff_eq;
use scroll_rig::api::{NarrativeEngine, NarrativeEngineConfig};
use scroll_rig::camera::{CameraPose, CameraSmoothingConfig};
use scroll_rig::core::{CameraKeyframe, DVec3, KeyframeTrack, ScrollGeometry};
use scroll_rig::interaction::SnapConfig;
use scroll_rig::render::NullRenderer;

const TICK: f64 = 1.0 / 60.0;

fn mounted_engine(config: NarrativeEngineConfig) -> NarrativeEngine<NullRenderer> {
    let mut engine = NarrativeEngine::new(NullRenderer::default(), config).expect("engine init");
    engine
        .mount(ScrollGeometry::new(1_400.0, 1_000.0))
        .expect("mount");
    engine
}

fn without_snap() -> NarrativeEngineConfig {
    NarrativeEngineConfig::new().with_snap_config(SnapConfig {
        enabled: false,
        ..SnapConfig::default()
    })
}

#[test]
fn mount_rests_camera_on_first_keyframe() {
    let engine = mounted_engine(NarrativeEngineConfig::new());
    let first = *KeyframeTrack::reference().get(0).expect("keyframe");
    let pose = engine.camera_pose();
    assert_eq!(pose.position, first.position);
    assert_eq!(pose.look_at, first.look_at);
    assert_eq!(pose.fov, first.fov);
    assert_eq!(engine.camera_target(), pose);
}

#[test]
fn jump_retargets_immediately_and_pose_converges() {
    let mut engine = mounted_engine(NarrativeEngineConfig::new());
    let seventh = *KeyframeTrack::reference().get(7).expect("keyframe");
    let start = engine.camera_pose();

    engine.jump_to_phase(2);
    assert_eq!(engine.camera_target().position, seventh.position);
    assert_eq!(engine.camera_pose().fov, seventh.fov);
    // position only moves on ticks
    assert_eq!(engine.camera_pose().position, start.position);

    for _ in 0..600 {
        engine.tick(TICK).expect("tick");
    }
    let pose = engine.camera_pose();
    assert!(pose.position.distance(seventh.position) < 1e-3);
    assert!(pose.look_at.distance(seventh.look_at) < 1e-3);
    assert_eq!(pose.fov, seventh.fov);
}

#[test]
fn each_tick_moves_pose_by_smoothing_factor() {
    let mut engine = mounted_engine(without_snap());
    engine.touch_start(1_000.0).expect("touch start");
    engine.touch_move(900.0).expect("touch move");

    for _ in 0..5 {
        let before = engine.camera_pose();
        let target = engine.camera_target();
        let after = engine.tick(TICK).expect("tick");
        let step = before.position.distance(after.position);
        let gap = before.position.distance(target.position);
        assert_abs_diff_eq!(step, gap * 0.04, epsilon = 1e-9);
    }
}

#[test]
fn crossing_a_phase_boundary_does_not_teleport_the_camera() {
    let mut engine = mounted_engine(without_snap());
    engine.touch_start(1_000.0).expect("touch start");

    let mut x = 1_000.0;
    for _ in 0..30 {
        x -= 2.0;
        let before = engine.camera_pose();
        engine.touch_move(x).expect("touch move");
        let target = engine.camera_target();
        let after = engine.tick(TICK).expect("tick");
        let max_step = before.position.distance(target.position) * 0.04 + 1e-9;
        assert!(before.position.distance(after.position) <= max_step);
    }
    // 30 moves of 4 units each cross the phase 0 -> 1 switch point at 50
    assert_eq!(engine.phase_index(), Some(1));
}

#[test]
fn smoothing_factor_is_tunable() {
    let mut engine = mounted_engine(without_snap());
    engine
        .set_camera_smoothing(CameraSmoothingConfig {
            position_factor: 1.0,
            look_at_factor: 1.0,
        })
        .expect("smoothing");
    engine.jump_to_phase(4);
    engine.tick(1.0).expect("tick");
    let pose = engine.tick(TICK).expect("tick");
    let target = engine.camera_target();
    assert!(pose.position.distance(target.position) < 1e-12);
    assert!(pose.look_at.distance(target.look_at) < 1e-12);

    let err = engine
        .set_camera_smoothing(CameraSmoothingConfig {
            position_factor: 1.5,
            look_at_factor: 0.04,
        })
        .expect_err("factor above one must fail");
    assert!(format!("{err}").contains("position_factor"));
}

#[test]
fn single_keyframe_track_pins_the_target() {
    let only = CameraKeyframe::new(DVec3::new(1.0, 2.0, 3.0), DVec3::ZERO, 60.0);
    let track = KeyframeTrack::new(vec![only]).expect("track");
    let mut engine = mounted_engine(without_snap().with_keyframes(track));

    engine.wheel(0.0, 200.0).expect("wheel");
    let target = engine.camera_target();
    assert_eq!(target.position, only.position);
    assert_eq!(target.fov, 60.0);
    engine.render().expect("render");
}

#[test]
fn empty_keyframe_track_keeps_default_pose() {
    let mut engine = mounted_engine(without_snap().with_keyframes(KeyframeTrack::default()));
    engine.jump_to_phase(3);
    engine.tick(1.0).expect("tick");
    assert_eq!(engine.camera_pose(), CameraPose::default());
    engine.render().expect("render");
}

#[test]
fn unmounted_engine_keeps_smoothing_toward_last_target() {
    let mut engine = mounted_engine(without_snap());
    engine.jump_to_phase(4);
    engine.tick(1.0).expect("tick");
    engine.unmount();

    let before = engine.camera_pose();
    let after = engine.tick(TICK).expect("tick");
    let target = engine.camera_target().position;
    assert!(after.position.distance(target) < before.position.distance(target));
}
