use crate::error::SliderResult;
use crate::render::{Renderer, SliderFrame};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests can catch invalid geometry before
/// a real backend is attached.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_tick_count: usize,
    pub last_active_tick: Option<f64>,
    pub last_label_text: Option<String>,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &SliderFrame) -> SliderResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_tick_count = frame.ticks.len();
        self.last_active_tick = frame.active_tick().map(|tick| tick.offset);
        self.last_label_text = Some(frame.label.text.clone());
        Ok(())
    }
}
