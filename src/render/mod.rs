mod frame;
mod null_renderer;

pub use frame::NarrativeFrame;
pub use null_renderer::NullRenderer;

use crate::error::RigResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized `NarrativeFrame` (camera pose and
/// section visibility) so drawing code stays isolated from input and phase
/// logic.
pub trait Renderer {
    fn render(&mut self, frame: &NarrativeFrame) -> RigResult<()>;
}
