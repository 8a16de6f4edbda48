use crate::core::DateScale;
use crate::core::date_scale::validate_width;
use crate::error::{SliderError, SliderResult};

/// Whole-pixel tick offsets for window item times, in sequence order.
///
/// Offsets are truncated toward zero and deduplicated, so dense windows
/// produce at most one tick per pixel column. Iteration stops as soon as a
/// tick reaches the trailing edge, keeping the list bounded by the width.
pub fn tick_offsets<I>(scale: DateScale, times: I, width: f64) -> SliderResult<Vec<f64>>
where
    I: IntoIterator<Item = f64>,
{
    validate_width(width)?;
    let round_width = width.trunc();
    if round_width <= 0.0 {
        return Err(SliderError::InvalidWidth { width });
    }

    let mut times = times.into_iter().peekable();
    let Some(&first_time) = times.peek() else {
        return Ok(Vec::new());
    };

    let mut offsets = vec![scale.offset_of(first_time, round_width)?.trunc()];
    let mut previous = offsets[0];
    for time in times {
        let next = scale.offset_of(time, round_width)?.trunc();
        if next > previous {
            offsets.push(next);
            previous = next;
            if next >= round_width {
                break;
            }
        }
    }
    Ok(offsets)
}

/// Whether a tick drawn at `tick_offset` marks the same pixel column as `active_offset`.
#[must_use]
pub fn tick_is_active(tick_offset: f64, active_offset: f64) -> bool {
    tick_offset.trunc() == active_offset.trunc()
}

/// Horizontal shift that keeps a floating label of `label_width` inside `width`.
///
/// Half the label width at the leading edge, zero at the center, minus half
/// the label width at the trailing edge.
#[must_use]
pub fn label_offset(label_width: f64, anchor_offset: f64, width: f64) -> f64 {
    let half_width = width / 2.0;
    if half_width <= 0.0 {
        return 0.0;
    }
    let offset_from_center = half_width - anchor_offset;
    label_width / 2.0 * (offset_from_center / half_width)
}
