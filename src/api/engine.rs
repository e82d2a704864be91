use crate::error::RigResult;
use crate::extensions::NarrativeEvent;
use crate::render::Renderer;

use super::engine_core::EngineCore;

/// Main orchestration facade consumed by host applications.
///
/// `NarrativeEngine` owns the input translator, the phase state store, the
/// camera rig and the content resolver, and hands a materialized frame to the
/// renderer.
pub struct NarrativeEngine<R: Renderer> {
    pub(super) renderer: R,
    pub(super) core: EngineCore,
}

impl<R: Renderer> NarrativeEngine<R> {
    pub fn render(&mut self) -> RigResult<()> {
        let frame = self.frame();
        self.renderer.render(&frame)?;
        self.emit_event(NarrativeEvent::Rendered);
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
