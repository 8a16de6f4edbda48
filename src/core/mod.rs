pub mod date_scale;
pub mod dated;
pub mod order;
pub mod primitives;
pub mod search;
pub mod ticks;

pub use date_scale::DateScale;
pub use dated::{Dated, DatedSequence};
pub use order::SequenceOrder;
pub use search::{bisect_first, index_toward_trailing, nearest_index};
pub use ticks::{label_offset, tick_is_active, tick_offsets};
