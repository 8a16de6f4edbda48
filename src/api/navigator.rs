use std::ops::RangeInclusive;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::primitives::{datetime_to_unix_seconds, unix_seconds_to_datetime};
use crate::core::{DateScale, DatedSequence, SequenceOrder, search};
use crate::error::{SliderError, SliderResult};
use crate::interaction::{DragPhase, DragState};

use super::{DisplayConfig, LabelFormatterFn, NavigatorConfig, SelectionChangedFn};

const MIN_SEQUENCE_LEN: usize = 2;

/// Which part of the sequence a nearest-item lookup searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchScope {
    /// Only the visible window `leading..=trailing`.
    Visible,
    /// The whole sequence `first..=last`.
    Full,
}

/// Date selection state machine behind a slider widget.
///
/// `DateNavigator` owns a read-only dated sequence plus the visible window,
/// the committed selection and the in-flight drag position. Hosts drive it
/// with drag samples and toolbar actions, and query it for paint data.
///
/// After every completed action `first <= leading <= selected <= trailing <= last`
/// holds, and window bounds always name real items.
pub struct DateNavigator<S: DatedSequence> {
    pub(super) sequence: S,
    pub(super) order: SequenceOrder,
    pub(super) first_index: usize,
    pub(super) last_index: usize,
    pub(super) leading_index: usize,
    pub(super) trailing_index: usize,
    pub(super) selected_index: usize,
    pub(super) slider_index: usize,
    pub(super) dragging_time: f64,
    pub(super) drag: DragState,
    pub(super) display: DisplayConfig,
    pub(super) label_formatter: Option<LabelFormatterFn>,
    pub(super) selection_listener: Option<SelectionChangedFn>,
}

impl<S: DatedSequence> DateNavigator<S> {
    /// Builds a navigator showing the full sequence.
    ///
    /// The sequence order is detected from its first two items and trusted
    /// for the navigator's lifetime.
    pub fn new(sequence: S, config: NavigatorConfig) -> SliderResult<Self> {
        let len = sequence.len();
        if len < MIN_SEQUENCE_LEN {
            warn!(len, "rejecting dated sequence shorter than two items");
            return Err(SliderError::InvalidSequence { len });
        }
        if config.initial_selection >= len {
            warn!(
                index = config.initial_selection,
                len, "rejecting out-of-range initial selection"
            );
            return Err(SliderError::SelectionOutOfRange {
                index: config.initial_selection,
                len,
            });
        }

        let order = SequenceOrder::detect(sequence.time_at(0), sequence.time_at(1));
        let selected = config.initial_selection;
        let dragging_time = sequence.time_at(selected);
        debug!(len, ?order, selected, "create date navigator");

        Ok(Self {
            sequence,
            order,
            first_index: 0,
            last_index: len - 1,
            leading_index: 0,
            trailing_index: len - 1,
            selected_index: selected,
            slider_index: selected,
            dragging_time,
            drag: DragState::default(),
            display: config.display,
            label_formatter: None,
            selection_listener: None,
        })
    }

    /// Registers the callback fired with the committed date on every commit.
    pub fn set_selection_listener<F>(&mut self, listener: F)
    where
        F: FnMut(DateTime<Utc>) + Send + 'static,
    {
        self.selection_listener = Some(Box::new(listener));
    }

    pub fn clear_selection_listener(&mut self) {
        self.selection_listener = None;
    }

    #[must_use]
    pub fn sequence(&self) -> &S {
        &self.sequence
    }

    /// Releases the sequence, e.g. to rebuild a navigator over replaced data.
    #[must_use]
    pub fn into_sequence(self) -> S {
        self.sequence
    }

    #[must_use]
    pub fn order(&self) -> SequenceOrder {
        self.order
    }

    #[must_use]
    pub fn display_config(&self) -> DisplayConfig {
        self.display
    }

    pub fn set_display_config(&mut self, display: DisplayConfig) {
        self.display = display;
    }

    #[must_use]
    pub fn first_index(&self) -> usize {
        self.first_index
    }

    #[must_use]
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    #[must_use]
    pub fn leading_index(&self) -> usize {
        self.leading_index
    }

    #[must_use]
    pub fn trailing_index(&self) -> usize {
        self.trailing_index
    }

    /// Visible window as `(leading, trailing)` indices.
    #[must_use]
    pub fn window(&self) -> (usize, usize) {
        (self.leading_index, self.trailing_index)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.trailing_index - self.leading_index + 1
    }

    #[must_use]
    pub fn is_full_extent(&self) -> bool {
        self.leading_index == self.first_index && self.trailing_index == self.last_index
    }

    #[must_use]
    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    #[must_use]
    pub fn slider_index(&self) -> usize {
        self.slider_index
    }

    #[must_use]
    pub fn drag_phase(&self) -> DragPhase {
        self.drag.phase()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.phase() == DragPhase::Dragging
    }

    #[must_use]
    pub fn leading_date(&self) -> DateTime<Utc> {
        self.sequence.date_at(self.leading_index)
    }

    #[must_use]
    pub fn trailing_date(&self) -> DateTime<Utc> {
        self.sequence.date_at(self.trailing_index)
    }

    #[must_use]
    pub fn selected_date(&self) -> DateTime<Utc> {
        self.sequence.date_at(self.selected_index)
    }

    /// Date of the item the label points at; where a drag snaps on release.
    #[must_use]
    pub fn slider_date(&self) -> DateTime<Utc> {
        self.sequence.date_at(self.slider_index)
    }

    /// Raw, unsnapped time of the pointer as fractional unix seconds.
    #[must_use]
    pub fn dragging_time(&self) -> f64 {
        self.dragging_time
    }

    /// Raw, unsnapped date of the pointer.
    #[must_use]
    pub fn dragging_date(&self) -> DateTime<Utc> {
        unix_seconds_to_datetime(self.dragging_time).unwrap_or_else(|_| self.slider_date())
    }

    /// Linear offset mapping for the current visible window.
    pub fn date_scale(&self) -> SliderResult<DateScale> {
        DateScale::new(
            self.sequence.time_at(self.leading_index),
            self.sequence.time_at(self.trailing_index),
        )
    }

    /// Offset of `date` from the leading edge of a bar `width` pixels wide.
    pub fn offset_of(&self, date: DateTime<Utc>, width: f64) -> SliderResult<f64> {
        self.offset_of_time(datetime_to_unix_seconds(date), width)
    }

    pub fn offset_of_time(&self, time: f64, width: f64) -> SliderResult<f64> {
        self.date_scale()?.offset_of(time, width)
    }

    /// Date at `offset` pixels from the leading edge of a bar `width` pixels wide.
    pub fn date_at(&self, offset: f64, width: f64) -> SliderResult<DateTime<Utc>> {
        unix_seconds_to_datetime(self.time_at(offset, width)?)
    }

    pub fn time_at(&self, offset: f64, width: f64) -> SliderResult<f64> {
        self.date_scale()?.time_at(offset, width)
    }

    /// Index of the item closest to `date` within `scope`.
    #[must_use]
    pub fn nearest_index(&self, date: DateTime<Utc>, scope: SearchScope) -> usize {
        self.nearest_index_to_time(datetime_to_unix_seconds(date), scope)
    }

    #[must_use]
    pub fn nearest_index_to_time(&self, time: f64, scope: SearchScope) -> usize {
        search::nearest_index(&self.sequence, self.scope_range(scope), self.order, time)
    }

    pub(super) fn scope_range(&self, scope: SearchScope) -> RangeInclusive<usize> {
        match scope {
            SearchScope::Visible => self.leading_index..=self.trailing_index,
            SearchScope::Full => self.first_index..=self.last_index,
        }
    }

    /// Commits `index` as the selection, syncs the slider and notifies the host.
    pub(super) fn commit_index(&mut self, index: usize) -> usize {
        debug_assert!(
            (self.leading_index..=self.trailing_index).contains(&index),
            "committed index {index} outside window {}..={}",
            self.leading_index,
            self.trailing_index
        );
        let date = self.sequence.date_at(index);
        self.selected_index = index;
        self.slider_index = index;
        self.dragging_time = self.sequence.time_at(index);
        debug!(index, %date, "commit selection");
        if let Some(listener) = self.selection_listener.as_mut() {
            listener(date);
        }
        index
    }

    pub(super) fn debug_assert_window_invariants(&self) {
        debug_assert!(self.first_index <= self.leading_index);
        debug_assert!(self.leading_index <= self.selected_index);
        debug_assert!(self.selected_index <= self.trailing_index);
        debug_assert!(self.trailing_index <= self.last_index);
    }
}
