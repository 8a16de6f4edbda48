use crate::error::{SliderError, SliderResult};

/// Linear mapping between slider pixel offsets and times for one window.
///
/// Offset `0` maps to `leading_time` and offset `width` maps to
/// `trailing_time`. For descending sequences `trailing_time < leading_time`;
/// the same formula still places later-in-sequence items further right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateScale {
    leading_time: f64,
    trailing_time: f64,
}

impl DateScale {
    pub fn new(leading_time: f64, trailing_time: f64) -> SliderResult<Self> {
        if !leading_time.is_finite() || !trailing_time.is_finite() {
            return Err(SliderError::InvalidData(
                "window bounds must be finite".to_owned(),
            ));
        }

        Ok(Self {
            leading_time,
            trailing_time,
        })
    }

    #[must_use]
    pub fn bounds(self) -> (f64, f64) {
        (self.leading_time, self.trailing_time)
    }

    /// Whether the window collapses to a single distinct time.
    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.trailing_time == self.leading_time
    }

    /// Pixel offset of `time` from the leading edge of `width`.
    ///
    /// A degenerate window maps every time to offset `0`.
    pub fn offset_of(self, time: f64, width: f64) -> SliderResult<f64> {
        validate_width(width)?;
        if !time.is_finite() {
            return Err(SliderError::InvalidData("time must be finite".to_owned()));
        }
        if self.is_degenerate() {
            return Ok(0.0);
        }

        let total_span = self.trailing_time - self.leading_time;
        let time_span = time - self.leading_time;
        Ok(width * (time_span / total_span))
    }

    /// Time corresponding to a pixel offset from the leading edge of `width`.
    pub fn time_at(self, offset: f64, width: f64) -> SliderResult<f64> {
        validate_width(width)?;
        if !offset.is_finite() {
            return Err(SliderError::InvalidData("offset must be finite".to_owned()));
        }

        let total_span = self.trailing_time - self.leading_time;
        Ok(self.leading_time + total_span * offset / width)
    }
}

pub(crate) fn validate_width(width: f64) -> SliderResult<()> {
    if !width.is_finite() || width <= 0.0 {
        return Err(SliderError::InvalidWidth { width });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::DateScale;
    use crate::error::SliderError;

    #[test]
    fn offset_and_time_are_inverse() {
        let scale = DateScale::new(100.0, 1100.0).expect("scale");
        let offset = scale.offset_of(350.0, 200.0).expect("offset");
        assert_relative_eq!(offset, 50.0);
        let time = scale.time_at(offset, 200.0).expect("time");
        assert_relative_eq!(time, 350.0);
    }

    #[test]
    fn descending_window_grows_toward_trailing() {
        let scale = DateScale::new(1000.0, 0.0).expect("scale");
        assert_relative_eq!(scale.offset_of(1000.0, 100.0).expect("leading"), 0.0);
        assert_relative_eq!(scale.offset_of(250.0, 100.0).expect("inner"), 75.0);
        assert_relative_eq!(scale.time_at(100.0, 100.0).expect("trailing"), 0.0);
    }

    #[test]
    fn degenerate_window_maps_to_zero_offset() {
        let scale = DateScale::new(42.0, 42.0).expect("scale");
        assert!(scale.is_degenerate());
        assert_eq!(scale.offset_of(42.0, 300.0).expect("offset"), 0.0);
        assert_eq!(scale.offset_of(99.0, 300.0).expect("offset"), 0.0);
        assert_eq!(scale.time_at(150.0, 300.0).expect("time"), 42.0);
    }

    #[test]
    fn invalid_width_is_rejected() {
        let scale = DateScale::new(0.0, 10.0).expect("scale");
        assert_eq!(
            scale.offset_of(5.0, 0.0),
            Err(SliderError::InvalidWidth { width: 0.0 })
        );
        assert!(scale.time_at(5.0, f64::NAN).is_err());
        assert!(scale.time_at(f64::INFINITY, 10.0).is_err());
    }
}
