use std::ops::RangeInclusive;

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::core::{DatedSequence, SequenceOrder};

/// Returns the first index in `range` for which `predicate` holds.
///
/// `predicate` must be monotonic over the range (false..false, true..true).
/// Runs in O(log n) predicate evaluations.
pub fn bisect_first<P>(range: std::ops::Range<usize>, mut predicate: P) -> Option<usize>
where
    P: FnMut(usize) -> bool,
{
    let end = range.end;
    let mut low = range.start;
    let mut high = range.end;
    while low < high {
        let mid = low + (high - low) / 2;
        if predicate(mid) {
            high = mid;
        } else {
            low = mid + 1;
        }
    }
    (low < end).then_some(low)
}

/// First index in `range` whose item is on or past `target_time` in sequence order.
///
/// Falls back to the last index of the range when no item qualifies.
pub fn index_toward_trailing<S>(
    sequence: &S,
    range: RangeInclusive<usize>,
    order: SequenceOrder,
    target_time: f64,
) -> usize
where
    S: DatedSequence + ?Sized,
{
    let (start, end) = (*range.start(), *range.end());
    bisect_first(start..end + 1, |index| {
        order.reaches(sequence.time_at(index), target_time)
    })
    .unwrap_or(end)
}

/// Index of the item in `range` whose time is closest to `target_time`.
///
/// Only the bisection result and its predecessor are compared. When both are
/// equally close the earlier (leading) candidate wins.
pub fn nearest_index<S>(
    sequence: &S,
    range: RangeInclusive<usize>,
    order: SequenceOrder,
    target_time: f64,
) -> usize
where
    S: DatedSequence + ?Sized,
{
    let start = *range.start();
    let trailing = index_toward_trailing(sequence, range, order, target_time);
    let leading = trailing.saturating_sub(1).max(start);

    let candidates: SmallVec<[(OrderedFloat<f64>, usize); 2]> = [leading, trailing]
        .into_iter()
        .map(|index| {
            let distance = (target_time - sequence.time_at(index)).abs();
            (OrderedFloat(distance), index)
        })
        .collect();

    // `min_by_key` keeps the first of equal keys, so ties resolve to `leading`.
    candidates
        .into_iter()
        .min_by_key(|(distance, _)| *distance)
        .map_or(trailing, |(_, index)| index)
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};

    use super::{bisect_first, index_toward_trailing, nearest_index};
    use crate::core::SequenceOrder;

    fn seconds(values: &[i64]) -> Vec<DateTime<Utc>> {
        values
            .iter()
            .map(|value| Utc.timestamp_opt(*value, 0).single().expect("valid time"))
            .collect()
    }

    #[test]
    fn bisect_finds_first_true_index() {
        let values = [1, 3, 5, 7, 9];
        assert_eq!(bisect_first(0..5, |i| values[i] >= 5), Some(2));
        assert_eq!(bisect_first(0..5, |i| values[i] >= 0), Some(0));
        assert_eq!(bisect_first(0..5, |i| values[i] >= 10), None);
        assert_eq!(bisect_first(2..4, |i| values[i] >= 1), Some(2));
        assert_eq!(bisect_first(3..3, |_| true), None);
    }

    #[test]
    fn toward_trailing_falls_back_to_range_end() {
        let items = seconds(&[10, 20, 30, 40]);
        let index = index_toward_trailing(&items, 0..=2, SequenceOrder::Ascending, 35.0);
        assert_eq!(index, 2);
    }

    #[test]
    fn nearest_prefers_closer_candidate() {
        let items = seconds(&[10, 20, 30, 40]);
        assert_eq!(nearest_index(&items, 0..=3, SequenceOrder::Ascending, 24.0), 1);
        assert_eq!(nearest_index(&items, 0..=3, SequenceOrder::Ascending, 26.0), 2);
        assert_eq!(nearest_index(&items, 0..=3, SequenceOrder::Ascending, -5.0), 0);
        assert_eq!(nearest_index(&items, 0..=3, SequenceOrder::Ascending, 99.0), 3);
    }

    #[test]
    fn nearest_tie_resolves_to_leading_candidate() {
        let items = seconds(&[10, 20, 30, 40]);
        assert_eq!(nearest_index(&items, 0..=3, SequenceOrder::Ascending, 25.0), 1);
    }

    #[test]
    fn nearest_stays_inside_sub_range() {
        let items = seconds(&[10, 20, 30, 40, 50]);
        assert_eq!(nearest_index(&items, 2..=3, SequenceOrder::Ascending, 12.0), 2);
        assert_eq!(nearest_index(&items, 1..=2, SequenceOrder::Ascending, 48.0), 2);
    }

    #[test]
    fn nearest_handles_descending_order() {
        let items = seconds(&[50, 40, 30, 20, 10]);
        assert_eq!(nearest_index(&items, 0..=4, SequenceOrder::Descending, 27.0), 2);
        assert_eq!(nearest_index(&items, 0..=4, SequenceOrder::Descending, 23.0), 3);
        assert_eq!(nearest_index(&items, 0..=4, SequenceOrder::Descending, 25.0), 2);
    }
}
