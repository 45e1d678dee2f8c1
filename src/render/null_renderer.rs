use crate::error::AtlasResult;
use crate::render::{Renderer, ScatterFrame};

/// No-op renderer used by tests and headless usage.
///
/// It still validates frames so tests catch inconsistent arrays before a real
/// backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_point_count: usize,
    pub last_frame: Option<ScatterFrame>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &ScatterFrame) -> AtlasResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_point_count = frame.len();
        self.last_frame = Some(frame.clone());
        Ok(())
    }
}
