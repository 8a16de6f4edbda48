use serde::{Deserialize, Serialize};

use super::DisplayConfig;

/// Construction-time options for `DateNavigator`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavigatorConfig {
    /// Index of the initially committed item.
    pub initial_selection: usize,
    pub display: DisplayConfig,
}

impl NavigatorConfig {
    #[must_use]
    pub fn new(display: DisplayConfig) -> Self {
        Self {
            initial_selection: 0,
            display,
        }
    }

    #[must_use]
    pub fn with_initial_selection(mut self, index: usize) -> Self {
        self.initial_selection = index;
        self
    }

    #[must_use]
    pub fn with_display(mut self, display: DisplayConfig) -> Self {
        self.display = display;
        self
    }
}
