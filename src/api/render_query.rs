use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::core::date_scale::validate_width;
use crate::core::{DatedSequence, label_offset, tick_is_active, tick_offsets};
use crate::error::{SliderError, SliderResult};
use crate::render::{LabelBox, Renderer, SliderFrame, TickMark};

use super::{DateNavigator, format_label};

pub type LabelFormatterFn = Arc<dyn Fn(DateTime<Utc>) -> String + Send + Sync + 'static>;

impl<S: DatedSequence> DateNavigator<S> {
    /// Overrides the built-in label text formatter.
    pub fn set_label_formatter(&mut self, formatter: LabelFormatterFn) {
        self.label_formatter = Some(formatter);
    }

    pub fn clear_label_formatter(&mut self) {
        self.label_formatter = None;
    }

    /// Formats `date` with the custom formatter or the display config.
    #[must_use]
    pub fn format_date(&self, date: DateTime<Utc>) -> String {
        match &self.label_formatter {
            Some(formatter) => formatter(date),
            None => format_label(date, self.display),
        }
    }

    /// Label text for the item the slider currently points at.
    #[must_use]
    pub fn slider_label(&self) -> String {
        self.format_date(self.slider_date())
    }

    #[must_use]
    pub fn label_width(&self) -> f64 {
        self.display.label_width()
    }

    /// Whole-pixel tick offsets for the visible items.
    pub fn tick_offsets(&self, width: f64) -> SliderResult<Vec<f64>> {
        let times =
            (self.leading_index..=self.trailing_index).map(|index| self.sequence.time_at(index));
        tick_offsets(self.date_scale()?, times, width)
    }

    /// Whether the tick at `offset` marks the slider item.
    ///
    /// The slider item is placed on the same whole-pixel bar as the ticks.
    pub fn tick_is_active(&self, offset: f64, width: f64) -> SliderResult<bool> {
        Ok(tick_is_active(offset, self.active_tick_offset(width)?))
    }

    fn active_tick_offset(&self, width: f64) -> SliderResult<f64> {
        validate_width(width)?;
        let round_width = width.trunc();
        if round_width <= 0.0 {
            return Err(SliderError::InvalidWidth { width });
        }
        self.offset_of_time(self.sequence.time_at(self.slider_index), round_width)
    }

    /// Raw pointer position the label is anchored to.
    pub fn slider_offset(&self, width: f64) -> SliderResult<f64> {
        self.offset_of_time(self.dragging_time, width)
    }

    /// Shift that keeps the label inside the bar for the current slider position.
    pub fn label_offset(&self, width: f64) -> SliderResult<f64> {
        let anchor = self.slider_offset(width)?;
        Ok(label_offset(self.label_width(), anchor, width))
    }

    /// Materializes everything a backend needs to paint the bar.
    pub fn build_frame(&self, width: f64) -> SliderResult<SliderFrame> {
        let active_offset = self.active_tick_offset(width)?;
        let ticks = self
            .tick_offsets(width)?
            .into_iter()
            .map(|offset| TickMark {
                offset,
                active: tick_is_active(offset, active_offset),
            })
            .collect();

        let anchor_x = self.slider_offset(width)?;
        let label = LabelBox {
            anchor_x,
            offset_x: label_offset(self.label_width(), anchor_x, width),
            width: self.label_width(),
            text: self.slider_label(),
        };

        Ok(SliderFrame {
            width,
            ticks,
            label,
        })
    }

    pub fn render_into<R: Renderer>(&self, renderer: &mut R, width: f64) -> SliderResult<()> {
        let frame = self.build_frame(width)?;
        renderer.render(&frame)
    }
}
