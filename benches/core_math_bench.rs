use criterion::{Criterion, criterion_group, criterion_main};
use scroll_rig::api::{NarrativeEngine, NarrativeEngineConfig};
use scroll_rig::camera::resolve_keyframe_target;
use scroll_rig::core::{KeyframeTrack, PhaseRounding, ProgressMapper, ScrollGeometry};
use scroll_rig::interaction::resolve_snap_target;
use scroll_rig::render::NullRenderer;
use std::hint::black_box;

fn bench_progress_mapping_sweep(c: &mut Criterion) {
    let mapper = ProgressMapper::new(5, PhaseRounding::Anchor).expect("valid mapper");

    c.bench_function("progress_mapping_sweep_4k", |b| {
        b.iter(|| {
            for offset in 0..4_000 {
                let _ = mapper.map(black_box(offset as f64 * 0.1), black_box(400.0));
            }
        })
    });
}

fn bench_keyframe_target_resolution(c: &mut Criterion) {
    let track = KeyframeTrack::reference();

    c.bench_function("keyframe_target_resolution_1k", |b| {
        b.iter(|| {
            for step in 0..1_000 {
                let progress = step as f64 / 999.0;
                let _ = resolve_keyframe_target(black_box(&track), black_box(progress));
            }
        })
    });
}

fn bench_snap_target_resolution(c: &mut Criterion) {
    let mapper = ProgressMapper::new(5, PhaseRounding::Anchor).expect("valid mapper");

    c.bench_function("snap_target_resolution", |b| {
        b.iter(|| {
            let _ = resolve_snap_target(
                black_box(187.5),
                black_box(400.0),
                black_box(mapper),
                black_box(0.2),
            );
        })
    });
}

fn bench_engine_wheel_and_tick(c: &mut Criterion) {
    let mut engine = NarrativeEngine::new(NullRenderer::default(), NarrativeEngineConfig::new())
        .expect("engine init");
    engine
        .mount(ScrollGeometry::new(1_400.0, 1_000.0))
        .expect("mount");

    c.bench_function("engine_wheel_and_tick", |b| {
        b.iter(|| {
            let _ = engine.wheel(black_box(0.0), black_box(3.0)).expect("wheel");
            let _ = engine.tick(black_box(1.0 / 60.0)).expect("tick");
            if engine.progress() >= 1.0 {
                engine.jump_to_phase(0);
            }
        })
    });
}

criterion_group!(
    benches,
    bench_progress_mapping_sweep,
    bench_keyframe_target_resolution,
    bench_snap_target_resolution,
    bench_engine_wheel_and_tick
);
criterion_main!(benches);
