use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::{DatedSequence, SequenceOrder};
use crate::error::{SliderError, SliderResult};
use crate::interaction::DragPhase;

use super::DateNavigator;

pub const NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable navigator state used by regression tests and debugging tools.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorSnapshot {
    pub len: usize,
    pub order: SequenceOrder,
    pub window: (usize, usize),
    pub selected_index: usize,
    pub slider_index: usize,
    pub selected_date: DateTime<Utc>,
    pub slider_date: DateTime<Utc>,
    pub dragging_time: f64,
    pub drag_phase: DragPhase,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigatorSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: NavigatorSnapshot,
}

impl NavigatorSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> SliderResult<String> {
        let payload = NavigatorSnapshotJsonContractV1 {
            schema_version: NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            SliderError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_contract_str(input: &str) -> SliderResult<Self> {
        let payload: NavigatorSnapshotJsonContractV1 =
            serde_json::from_str(input).map_err(|e| {
                SliderError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
            })?;
        if payload.schema_version != NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(SliderError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}

impl<S: DatedSequence> DateNavigator<S> {
    #[must_use]
    pub fn snapshot(&self) -> NavigatorSnapshot {
        NavigatorSnapshot {
            len: self.last_index + 1,
            order: self.order,
            window: self.window(),
            selected_index: self.selected_index,
            slider_index: self.slider_index,
            selected_date: self.selected_date(),
            slider_date: self.slider_date(),
            dragging_time: self.dragging_time,
            drag_phase: self.drag_phase(),
        }
    }
}
