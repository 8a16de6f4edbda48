use serde::{Deserialize, Serialize};

/// Direction in which item dates progress through a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SequenceOrder {
    Ascending,
    Descending,
}

impl SequenceOrder {
    /// Detects order from the first two item times.
    ///
    /// Equal times are treated as descending.
    #[must_use]
    pub fn detect(first_time: f64, second_time: f64) -> Self {
        if first_time < second_time {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    #[must_use]
    pub fn is_ascending(self) -> bool {
        matches!(self, Self::Ascending)
    }

    /// Returns `true` when `item_time` is on or past `target_time` in sequence order.
    #[must_use]
    pub fn reaches(self, item_time: f64, target_time: f64) -> bool {
        match self {
            Self::Ascending => item_time >= target_time,
            Self::Descending => item_time <= target_time,
        }
    }

    /// Moves `time` toward the trailing end of the sequence by a non-negative amount.
    #[must_use]
    pub fn advance(self, time: f64, amount: f64) -> f64 {
        match self {
            Self::Ascending => time + amount,
            Self::Descending => time - amount,
        }
    }

    /// Moves `time` toward the leading end of the sequence by a non-negative amount.
    #[must_use]
    pub fn retreat(self, time: f64, amount: f64) -> f64 {
        self.advance(time, -amount)
    }

    /// Non-negative distance travelled from `from` to `to` in sequence order.
    #[must_use]
    pub fn span(self, from: f64, to: f64) -> f64 {
        match self {
            Self::Ascending => to - from,
            Self::Descending => from - to,
        }
    }
}
