use serde::{Deserialize, Serialize};

use crate::core::DatedSequence;

use super::{DateNavigator, SearchScope};

/// Toolbar actions a host can bind to buttons or keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NavigatorAction {
    ZoomOut,
    MoveToLeadingEdge,
    StepTowardLeading,
    StepTowardTrailing,
    MoveToTrailingEdge,
    ZoomIn,
    ResetZoom,
}

impl<S: DatedSequence> DateNavigator<S> {
    /// Index one step toward the leading edge of `scope`, or `from` when already there.
    #[must_use]
    pub fn next_index_toward_leading(&self, from: usize, scope: SearchScope) -> usize {
        let start = *self.scope_range(scope).start();
        if from > start { from - 1 } else { from }
    }

    /// Index one step toward the trailing edge of `scope`, or `from` when already there.
    #[must_use]
    pub fn next_index_toward_trailing(&self, from: usize, scope: SearchScope) -> usize {
        let end = *self.scope_range(scope).end();
        if from < end { from + 1 } else { from }
    }

    /// Selects the first visible item.
    pub fn move_to_leading_edge(&mut self) -> usize {
        self.commit_index(self.leading_index)
    }

    /// Selects the last visible item.
    pub fn move_to_trailing_edge(&mut self) -> usize {
        self.commit_index(self.trailing_index)
    }

    /// Selects the visible item before the selection; a no-op at the leading edge.
    pub fn step_toward_leading(&mut self) -> usize {
        let index = self.next_index_toward_leading(self.selected_index, SearchScope::Visible);
        self.commit_index(index)
    }

    /// Selects the visible item after the selection; a no-op at the trailing edge.
    pub fn step_toward_trailing(&mut self) -> usize {
        let index = self.next_index_toward_trailing(self.selected_index, SearchScope::Visible);
        self.commit_index(index)
    }

    #[must_use]
    pub fn can_move_to_leading_edge(&self) -> bool {
        self.selected_index != self.first_index
    }

    #[must_use]
    pub fn can_move_to_trailing_edge(&self) -> bool {
        self.selected_index != self.last_index
    }

    #[must_use]
    pub fn can_step_toward_leading(&self) -> bool {
        self.next_index_toward_leading(self.selected_index, SearchScope::Visible)
            != self.selected_index
    }

    #[must_use]
    pub fn can_step_toward_trailing(&self) -> bool {
        self.next_index_toward_trailing(self.selected_index, SearchScope::Visible)
            != self.selected_index
    }

    /// Whether a toolbar control for `action` should be enabled.
    #[must_use]
    pub fn is_action_enabled(&self, action: NavigatorAction) -> bool {
        match action {
            NavigatorAction::ZoomOut | NavigatorAction::ResetZoom => self.can_zoom_out(),
            NavigatorAction::MoveToLeadingEdge => self.can_move_to_leading_edge(),
            NavigatorAction::StepTowardLeading => self.can_step_toward_leading(),
            NavigatorAction::StepTowardTrailing => self.can_step_toward_trailing(),
            NavigatorAction::MoveToTrailingEdge => self.can_move_to_trailing_edge(),
            NavigatorAction::ZoomIn => self.can_zoom_in(),
        }
    }

    /// Dispatches a toolbar action.
    ///
    /// Returns `true` when the selection or the visible window changed.
    pub fn apply_action(&mut self, action: NavigatorAction) -> bool {
        let before = (self.window(), self.selected_index);
        match action {
            NavigatorAction::ZoomOut => {
                self.zoom_out();
            }
            NavigatorAction::MoveToLeadingEdge => {
                self.move_to_leading_edge();
            }
            NavigatorAction::StepTowardLeading => {
                self.step_toward_leading();
            }
            NavigatorAction::StepTowardTrailing => {
                self.step_toward_trailing();
            }
            NavigatorAction::MoveToTrailingEdge => {
                self.move_to_trailing_edge();
            }
            NavigatorAction::ZoomIn => {
                self.zoom_in();
            }
            NavigatorAction::ResetZoom => {
                self.reset_zoom();
            }
        }
        before != (self.window(), self.selected_index)
    }
}
