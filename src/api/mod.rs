mod display_config;
mod drag_controller;
mod navigation_controller;
mod navigator;
mod navigator_config;
mod render_query;
mod snapshot;
mod zoom_controller;
mod zoom_target_resolver;

use chrono::{DateTime, Utc};

pub use display_config::{DisplayConfig, DisplayStyle, LabelTimeZone, format_label};
pub use navigation_controller::NavigatorAction;
pub use navigator::{DateNavigator, SearchScope};
pub use navigator_config::NavigatorConfig;
pub use render_query::LabelFormatterFn;
pub use snapshot::{
    NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1, NavigatorSnapshot, NavigatorSnapshotJsonContractV1,
};

/// Callback fired with the committed date whenever a selection is committed.
pub type SelectionChangedFn = Box<dyn FnMut(DateTime<Utc>) + Send + 'static>;
