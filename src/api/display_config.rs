use chrono::{DateTime, FixedOffset, Local, Offset, Utc};
use serde::{Deserialize, Serialize};

const SHORT_DATE_LABEL_WIDTH_PX: f64 = 66.0;
const SHORT_DATE_TIME_LABEL_WIDTH_PX: f64 = 128.0;

/// Detail level of the slider label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum DisplayStyle {
    /// Short numeric date, e.g. `11/14/23`.
    #[default]
    ShortDate,
    /// Short numeric date followed by hour and minute.
    ShortDateTime,
}

/// Time zone used to render label text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum LabelTimeZone {
    /// Host machine's local time zone.
    #[default]
    Local,
    Utc,
    FixedOffsetMinutes {
        minutes: i16,
    },
}

impl LabelTimeZone {
    #[must_use]
    pub(super) fn fixed_offset(self, date: DateTime<Utc>) -> FixedOffset {
        let seconds = match self {
            Self::Local => date.with_timezone(&Local).offset().local_minus_utc(),
            Self::Utc => 0,
            Self::FixedOffsetMinutes { minutes } => i32::from(minutes) * 60,
        };
        FixedOffset::east_opt(seconds).unwrap_or_else(|| Utc.fix())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct DisplayConfig {
    pub style: DisplayStyle,
    pub time_zone: LabelTimeZone,
}

impl DisplayConfig {
    #[must_use]
    pub fn new(style: DisplayStyle, time_zone: LabelTimeZone) -> Self {
        Self { style, time_zone }
    }

    #[must_use]
    pub fn short_date_utc() -> Self {
        Self::new(DisplayStyle::ShortDate, LabelTimeZone::Utc)
    }

    #[must_use]
    pub fn short_date_time_utc() -> Self {
        Self::new(DisplayStyle::ShortDateTime, LabelTimeZone::Utc)
    }

    #[must_use]
    pub fn short_date_local() -> Self {
        Self::new(DisplayStyle::ShortDate, LabelTimeZone::Local)
    }

    #[must_use]
    pub fn short_date_time_local() -> Self {
        Self::new(DisplayStyle::ShortDateTime, LabelTimeZone::Local)
    }

    /// Fixed pixel width reserved for the floating label.
    #[must_use]
    pub fn label_width(self) -> f64 {
        match self.style {
            DisplayStyle::ShortDate => SHORT_DATE_LABEL_WIDTH_PX,
            DisplayStyle::ShortDateTime => SHORT_DATE_TIME_LABEL_WIDTH_PX,
        }
    }
}

/// Formats `date` with the built-in short patterns of `config`.
#[must_use]
pub fn format_label(date: DateTime<Utc>, config: DisplayConfig) -> String {
    let local = date.with_timezone(&config.time_zone.fixed_offset(date));
    match config.style {
        DisplayStyle::ShortDate => local.format("%-m/%-d/%y").to_string(),
        DisplayStyle::ShortDateTime => local.format("%-m/%-d/%y, %-I:%M %p").to_string(),
    }
}
