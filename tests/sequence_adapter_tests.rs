use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use date_slider::api::{DateNavigator, NavigatorConfig, SearchScope};
use date_slider::core::{Dated, DatedSequence};
use indexmap::IndexSet;

fn day(n: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(n * 86_400, 0).single().expect("valid day")
}

#[derive(Debug, Clone, PartialEq)]
struct Reading {
    taken_at: DateTime<Utc>,
    celsius: f64,
}

impl Dated for Reading {
    fn date(&self) -> DateTime<Utc> {
        self.taken_at
    }
}

fn readings() -> Vec<Reading> {
    [(0, 12.5), (2, 14.0), (3, 9.5), (7, 11.0)]
        .into_iter()
        .map(|(n, celsius)| Reading {
            taken_at: day(n),
            celsius,
        })
        .collect()
}

#[test]
fn custom_items_drive_navigation_by_date_only() {
    let mut navigator =
        DateNavigator::new(readings(), NavigatorConfig::default()).expect("navigator");
    navigator.step_toward_trailing();
    navigator.step_toward_trailing();

    let index = navigator.selected_index();
    assert_eq!(navigator.selected_date(), day(3));
    assert_eq!(navigator.sequence()[index].celsius, 9.5);
}

#[test]
fn borrowed_slices_are_navigable() {
    let dates = [day(0), day(4), day(8)];
    let mut navigator =
        DateNavigator::new(&dates[..], NavigatorConfig::default()).expect("navigator");
    navigator.move_to_trailing_edge();
    assert_eq!(navigator.selected_date(), day(8));
    assert_eq!(navigator.nearest_index(day(3), SearchScope::Full), 1);
}

#[test]
fn index_sets_and_deques_are_navigable() {
    let set = (0..6).map(day).collect::<IndexSet<_>>();
    let navigator = DateNavigator::new(set, NavigatorConfig::default()).expect("set navigator");
    assert_eq!(navigator.last_index(), 5);
    assert_eq!(navigator.nearest_index(day(4), SearchScope::Visible), 4);

    let deque = (0..6).rev().map(day).collect::<VecDeque<_>>();
    let navigator =
        DateNavigator::new(deque, NavigatorConfig::default()).expect("deque navigator");
    assert_eq!(navigator.leading_date(), day(5));
    assert_eq!(navigator.nearest_index(day(4), SearchScope::Visible), 1);
}

#[test]
fn shared_sequences_can_back_several_navigators() {
    let shared = Arc::new(readings());
    let mut first =
        DateNavigator::new(Arc::clone(&shared), NavigatorConfig::default()).expect("first");
    let second =
        DateNavigator::new(Arc::clone(&shared), NavigatorConfig::default()).expect("second");

    first.move_to_trailing_edge();
    assert_eq!(first.selected_date(), day(7));
    assert_eq!(second.selected_date(), day(0));
    assert_eq!(Arc::strong_count(&shared), 3);

    let local = Rc::new(vec![day(1), day(2)]);
    let navigator = DateNavigator::new(local, NavigatorConfig::default()).expect("rc");
    assert_eq!(navigator.sequence().len(), 2);
}
