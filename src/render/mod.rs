mod frame;
mod null_renderer;
mod primitives;
mod style;

pub use frame::ScatterFrame;
pub use null_renderer::NullRenderer;
pub use primitives::Color;
pub use style::ScatterStyle;

use crate::error::AtlasResult;

/// Contract implemented by any plotting backend.
///
/// Backends receive a fully materialized `ScatterFrame`; hit-testing, zoom
/// and pan stay on the backend side. Clicks and lifecycle signals travel back
/// through [`crate::api::ExplorerHandle`].
pub trait Renderer {
    fn render(&mut self, frame: &ScatterFrame) -> AtlasResult<()>;
}
