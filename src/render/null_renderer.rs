use crate::error::RigResult;
use crate::render::{NarrativeFrame, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so tests catch invalid state before a
/// real backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_frame: Option<NarrativeFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &NarrativeFrame) -> RigResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
