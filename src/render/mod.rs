mod frame;
mod null_renderer;

pub use frame::{LabelBox, SliderFrame, TickMark};
pub use null_renderer::NullRenderer;

use crate::error::SliderResult;

/// Contract implemented by any drawing backend.
///
/// Backends receive a fully materialized `SliderFrame` so drawing code stays
/// isolated from navigation and gesture logic.
pub trait Renderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()>;
}
