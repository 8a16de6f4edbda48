//! date-slider: state machine behind a date selection slider widget.
//!
//! The crate maps pixel offsets to dates over a visible window of an ordered
//! dated sequence, snaps arbitrary dates to the nearest real item with a
//! binary search, and drives step, zoom and drag navigation. Drawing and
//! input delivery stay with the host UI toolkit.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DateNavigator, NavigatorConfig};
pub use error::{SliderError, SliderResult};
