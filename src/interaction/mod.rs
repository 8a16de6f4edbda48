use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragPhase {
    Idle,
    Dragging,
}

/// Pointer sample delivered by the host gesture recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DragUpdate {
    /// Current pointer x in slider coordinates.
    pub location_x: f64,
    /// Cumulative x translation since the gesture started.
    pub translation_x: f64,
}

impl DragUpdate {
    #[must_use]
    pub fn new(location_x: f64, translation_x: f64) -> Self {
        Self {
            location_x,
            translation_x,
        }
    }
}

/// How the next raw slider offset is derived from a drag sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragOrigin {
    /// First sample of a gesture: apply the cumulative translation to the committed selection.
    Selection { translation_x: f64 },
    /// Later samples: apply the incremental delta to the last raw position.
    Raw { delta_x: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    previous_pointer_x: Option<f64>,
}

impl DragState {
    #[must_use]
    pub fn phase(self) -> DragPhase {
        if self.previous_pointer_x.is_some() {
            DragPhase::Dragging
        } else {
            DragPhase::Idle
        }
    }

    #[must_use]
    pub fn previous_pointer_x(self) -> Option<f64> {
        self.previous_pointer_x
    }

    /// Records a pointer sample and reports how to derive the new offset.
    pub fn on_drag_update(&mut self, update: DragUpdate) -> DragOrigin {
        let origin = match self.previous_pointer_x {
            None => DragOrigin::Selection {
                translation_x: update.translation_x,
            },
            Some(previous) => DragOrigin::Raw {
                delta_x: update.location_x - previous,
            },
        };
        self.previous_pointer_x = Some(update.location_x);
        origin
    }

    pub fn on_drag_end(&mut self) {
        self.previous_pointer_x = None;
    }
}
