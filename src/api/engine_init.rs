use tracing::{debug, warn};

use crate::camera::CameraInterpolator;
use crate::content::ContentVisibilityResolver;
use crate::core::ProgressMapper;
use crate::error::RigResult;
use crate::interaction::InputTranslator;
use crate::render::Renderer;

use super::{
    NarrativeEngine, NarrativeEngineConfig,
    engine_core::{EngineCore, EngineRuntimeState},
    validation::validate_engine_config,
};

impl<R: Renderer> NarrativeEngine<R> {
    /// Creates an engine with no scroll container mounted.
    ///
    /// Input and jumps are no-ops until [`Self::mount`] is called.
    pub fn new(renderer: R, config: NarrativeEngineConfig) -> RigResult<Self> {
        validate_engine_config(&config)?;

        let phase_count = config.phase_count();
        let mapper = ProgressMapper::new(phase_count, config.phase_rounding)?;
        match config.keyframes.keyframes_per_phase(phase_count) {
            Some(per_phase) => debug!(
                phase_count,
                keyframes = config.keyframes.len(),
                per_phase,
                "narrative engine configured"
            ),
            None => warn!(
                phase_count,
                keyframes = config.keyframes.len(),
                "keyframe track does not partition evenly across phases"
            ),
        }

        let translator = InputTranslator::new(config.input, config.snap, mapper);
        let camera = CameraInterpolator::new(config.keyframes.clone(), config.camera_smoothing);

        Ok(Self {
            renderer,
            core: EngineCore {
                config,
                mapper,
                translator,
                camera,
                content_resolver: ContentVisibilityResolver::new(mapper),
                runtime: EngineRuntimeState::unmounted(),
            },
        })
    }
}
