use chrono::{DateTime, Utc};

use crate::error::{SliderError, SliderResult};

/// Converts a UTC timestamp into fractional unix seconds with microsecond precision.
#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_micros() as f64 / 1_000_000.0
}

/// Converts fractional unix seconds back into a UTC timestamp.
///
/// The value is rounded to the nearest microsecond.
pub fn unix_seconds_to_datetime(seconds: f64) -> SliderResult<DateTime<Utc>> {
    if !seconds.is_finite() {
        return Err(SliderError::InvalidData(
            "timestamp seconds must be finite".to_owned(),
        ));
    }
    let micros = (seconds * 1_000_000.0).round();
    if micros > i64::MAX as f64 || micros < i64::MIN as f64 {
        return Err(SliderError::InvalidData(format!(
            "timestamp {seconds} is outside the representable range"
        )));
    }
    DateTime::from_timestamp_micros(micros as i64).ok_or_else(|| {
        SliderError::InvalidData(format!("timestamp {seconds} is outside the chrono range"))
    })
}
