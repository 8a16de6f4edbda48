use thiserror::Error;

pub type SliderResult<T> = Result<T, SliderError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SliderError {
    #[error("invalid sequence: at least 2 dated items are required, got {len}")]
    InvalidSequence { len: usize },

    #[error("selection index {index} is out of range for a sequence of {len} items")]
    SelectionOutOfRange { index: usize, len: usize },

    #[error("invalid slider width: {width}")]
    InvalidWidth { width: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
