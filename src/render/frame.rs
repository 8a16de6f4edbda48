use serde::{Deserialize, Serialize};

use crate::error::{SliderError, SliderResult};

/// One tick mark on the slider bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickMark {
    /// Whole-pixel offset from the leading edge.
    pub offset: f64,
    /// Marks the item the label currently points at.
    pub active: bool,
}

/// Floating label that names the slider item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelBox {
    /// Raw slider position the label is anchored to.
    pub anchor_x: f64,
    /// Shift applied to the label so it stays inside the bar.
    pub offset_x: f64,
    pub width: f64,
    pub text: String,
}

impl LabelBox {
    pub fn validate(&self) -> SliderResult<()> {
        for (field, value) in [
            ("anchor_x", self.anchor_x),
            ("offset_x", self.offset_x),
            ("width", self.width),
        ] {
            if !value.is_finite() {
                return Err(SliderError::InvalidData(format!(
                    "label `{field}` must be finite"
                )));
            }
        }
        if self.width < 0.0 {
            return Err(SliderError::InvalidData(
                "label width must be >= 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Backend-agnostic description of one slider paint pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderFrame {
    pub width: f64,
    pub ticks: Vec<TickMark>,
    pub label: LabelBox,
}

impl SliderFrame {
    pub fn validate(&self) -> SliderResult<()> {
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(SliderError::InvalidWidth { width: self.width });
        }

        for tick in &self.ticks {
            if !tick.offset.is_finite() || tick.offset < 0.0 || tick.offset > self.width {
                return Err(SliderError::InvalidData(format!(
                    "tick offset {} must be finite and within [0, {}]",
                    tick.offset, self.width
                )));
            }
        }
        self.label.validate()
    }

    #[must_use]
    pub fn active_tick(&self) -> Option<TickMark> {
        self.ticks.iter().copied().find(|tick| tick.active)
    }
}
