use tracing::{debug, trace};

use crate::core::DatedSequence;

use super::zoom_target_resolver::{
    resolve_zoom_in_targets, resolve_zoom_out_leading, resolve_zoom_out_targets,
    resolve_zoom_out_trailing,
};
use super::{DateNavigator, SearchScope};

/// Windows with fewer visible items than this cannot be zoomed into.
const MIN_ZOOM_IN_VISIBLE_COUNT: usize = 4;

impl<S: DatedSequence> DateNavigator<S> {
    #[must_use]
    pub fn can_zoom_in(&self) -> bool {
        self.visible_count() >= MIN_ZOOM_IN_VISIBLE_COUNT
    }

    #[must_use]
    pub fn can_zoom_out(&self) -> bool {
        !self.is_full_extent()
    }

    /// Narrows the window around the selected date.
    ///
    /// New bounds are snapped to items of the current window so both edges
    /// stay anchored on real data and the selection stays visible.
    ///
    /// Returns `true` when the visible window changed.
    pub fn zoom_in(&mut self) -> bool {
        if !self.can_zoom_in() {
            return false;
        }

        let targets = resolve_zoom_in_targets(
            self.order,
            self.sequence.time_at(self.leading_index),
            self.sequence.time_at(self.selected_index),
            self.sequence.time_at(self.trailing_index),
        );
        let leading = self
            .nearest_index_to_time(targets.leading_time, SearchScope::Visible)
            .min(self.selected_index);
        let trailing = self
            .nearest_index_to_time(targets.trailing_time, SearchScope::Visible)
            .max(self.selected_index);

        self.apply_window(leading, trailing, "zoom in")
    }

    /// Widens the window around the selected date.
    ///
    /// New bounds are snapped against the full sequence. A bound whose snap
    /// would not move is forced one item outward so every call makes
    /// progress until the full extent is visible.
    ///
    /// Returns `true` when the visible window changed.
    pub fn zoom_out(&mut self) -> bool {
        if !self.can_zoom_out() {
            return false;
        }

        let targets = resolve_zoom_out_targets(
            self.order,
            self.sequence.time_at(self.leading_index),
            self.sequence.time_at(self.selected_index),
            self.sequence.time_at(self.trailing_index),
        );
        let leading = resolve_zoom_out_leading(
            self.nearest_index_to_time(targets.leading_time, SearchScope::Full),
            self.leading_index,
            self.first_index,
        );
        let trailing = resolve_zoom_out_trailing(
            self.nearest_index_to_time(targets.trailing_time, SearchScope::Full),
            self.trailing_index,
            self.last_index,
        );

        self.apply_window(leading, trailing, "zoom out")
    }

    /// Shows the whole sequence again, keeping the selection.
    pub fn reset_zoom(&mut self) -> bool {
        self.apply_window(self.first_index, self.last_index, "reset zoom")
    }

    fn apply_window(&mut self, leading: usize, trailing: usize, reason: &'static str) -> bool {
        let changed = (leading, trailing) != self.window();
        self.leading_index = leading;
        self.trailing_index = trailing;
        if self.is_dragging() {
            self.resnap_drag_to_window();
        }
        self.debug_assert_window_invariants();
        if changed {
            debug!(
                leading,
                trailing,
                selected = self.selected_index,
                reason,
                "visible window changed"
            );
        }
        changed
    }

    /// Pulls an in-flight drag back inside the visible window.
    fn resnap_drag_to_window(&mut self) {
        let leading_time = self.sequence.time_at(self.leading_index);
        let trailing_time = self.sequence.time_at(self.trailing_index);
        self.dragging_time = self
            .dragging_time
            .clamp(leading_time.min(trailing_time), leading_time.max(trailing_time));
        self.slider_index = self.nearest_index_to_time(self.dragging_time, SearchScope::Visible);
        trace!(
            dragging_time = self.dragging_time,
            slider = self.slider_index,
            "drag resnapped to window"
        );
    }
}
