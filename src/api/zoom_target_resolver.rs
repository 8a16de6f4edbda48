use crate::core::SequenceOrder;

/// Zoom-in moves each bound a quarter of the way toward the selection.
const ZOOM_IN_SPAN_DIVISOR: f64 = 4.0;
/// Zoom-out pushes each bound out by a third of its distance to the selection.
const ZOOM_OUT_SPAN_DIVISOR: f64 = 3.0;

/// Raw (unsnapped) leading/trailing times for a zoom step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct ZoomTargets {
    pub(super) leading_time: f64,
    pub(super) trailing_time: f64,
}

pub(super) fn resolve_zoom_in_targets(
    order: SequenceOrder,
    leading_time: f64,
    selected_time: f64,
    trailing_time: f64,
) -> ZoomTargets {
    let leading_increment = order.span(leading_time, selected_time) / ZOOM_IN_SPAN_DIVISOR;
    let trailing_increment = order.span(selected_time, trailing_time) / ZOOM_IN_SPAN_DIVISOR;
    ZoomTargets {
        leading_time: order.advance(leading_time, leading_increment),
        trailing_time: order.retreat(trailing_time, trailing_increment),
    }
}

pub(super) fn resolve_zoom_out_targets(
    order: SequenceOrder,
    leading_time: f64,
    selected_time: f64,
    trailing_time: f64,
) -> ZoomTargets {
    let leading_increment = order.span(leading_time, selected_time) / ZOOM_OUT_SPAN_DIVISOR;
    let trailing_increment = order.span(selected_time, trailing_time) / ZOOM_OUT_SPAN_DIVISOR;
    ZoomTargets {
        leading_time: order.retreat(leading_time, leading_increment),
        trailing_time: order.advance(trailing_time, trailing_increment),
    }
}

/// Resolves the new leading bound after zooming out.
///
/// The snapped candidate never moves inward. When it stalls on the current
/// bound, the bound is forced one item outward (saturating at `first_index`).
pub(super) fn resolve_zoom_out_leading(
    snapped: usize,
    current: usize,
    first_index: usize,
) -> usize {
    let candidate = snapped.min(current);
    if candidate == current && current > first_index {
        current - 1
    } else {
        candidate
    }
}

/// Trailing-side counterpart of [`resolve_zoom_out_leading`].
pub(super) fn resolve_zoom_out_trailing(
    snapped: usize,
    current: usize,
    last_index: usize,
) -> usize {
    let candidate = snapped.max(current);
    if candidate == current && current < last_index {
        current + 1
    } else {
        candidate
    }
}
