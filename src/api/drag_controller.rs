use tracing::{trace, warn};

use crate::core::DatedSequence;
use crate::core::date_scale::validate_width;
use crate::error::{SliderError, SliderResult};
use crate::interaction::{DragOrigin, DragUpdate};

use super::{DateNavigator, SearchScope};

impl<S: DatedSequence> DateNavigator<S> {
    /// Moves the in-flight slider position for one pointer sample.
    ///
    /// The first sample of a gesture offsets the committed selection by the
    /// cumulative translation; later samples offset the last raw position by
    /// the delta since the previous sample. The raw offset is clamped to the
    /// bar and the slider snaps to the nearest visible item. The committed
    /// selection is left untouched until [`DateNavigator::drag_end`].
    ///
    /// Returns the new slider index.
    pub fn drag_update(&mut self, update: DragUpdate, width: f64) -> SliderResult<usize> {
        validate_width(width)?;
        if !update.location_x.is_finite() || !update.translation_x.is_finite() {
            warn!(?update, "rejecting non-finite drag sample");
            return Err(SliderError::InvalidData(
                "drag location and translation must be finite".to_owned(),
            ));
        }

        let scale = self.date_scale()?;
        let raw_offset = match self.drag.on_drag_update(update) {
            DragOrigin::Selection { translation_x } => {
                scale.offset_of(self.sequence.time_at(self.selected_index), width)? + translation_x
            }
            DragOrigin::Raw { delta_x } => scale.offset_of(self.dragging_time, width)? + delta_x,
        };
        let offset = raw_offset.clamp(0.0, width);

        self.dragging_time = scale.time_at(offset, width)?;
        self.slider_index = self.nearest_index_to_time(self.dragging_time, SearchScope::Visible);
        trace!(
            offset,
            dragging_time = self.dragging_time,
            slider = self.slider_index,
            "drag update"
        );
        Ok(self.slider_index)
    }

    /// Ends the gesture and commits the slider item as the selection.
    pub fn drag_end(&mut self) -> usize {
        self.drag.on_drag_end();
        self.commit_index(self.slider_index)
    }
}
