use chrono::{DateTime, TimeZone, Utc};
use date_slider::SliderError;
use date_slider::api::{DateNavigator, DisplayConfig, NavigatorConfig};
use date_slider::core::SequenceOrder;
use date_slider::interaction::DragPhase;

fn day(n: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(n * 86_400, 0).single().expect("valid day")
}

fn days(values: &[i64]) -> Vec<DateTime<Utc>> {
    values.iter().map(|value| day(*value)).collect()
}

#[test]
fn new_navigator_shows_full_extent_with_first_item_selected() {
    let navigator =
        DateNavigator::new(days(&[0, 1, 2, 3, 4]), NavigatorConfig::default()).expect("navigator");

    assert_eq!(navigator.first_index(), 0);
    assert_eq!(navigator.last_index(), 4);
    assert_eq!(navigator.window(), (0, 4));
    assert!(navigator.is_full_extent());
    assert_eq!(navigator.visible_count(), 5);
    assert_eq!(navigator.selected_index(), 0);
    assert_eq!(navigator.slider_index(), 0);
    assert_eq!(navigator.selected_date(), day(0));
    assert_eq!(navigator.dragging_date(), day(0));
    assert_eq!(navigator.drag_phase(), DragPhase::Idle);
    assert_eq!(navigator.order(), SequenceOrder::Ascending);
}

#[test]
fn initial_selection_can_be_configured() {
    let config = NavigatorConfig::new(DisplayConfig::short_date_utc()).with_initial_selection(3);
    let navigator = DateNavigator::new(days(&[0, 1, 2, 3, 4]), config).expect("navigator");

    assert_eq!(navigator.selected_index(), 3);
    assert_eq!(navigator.slider_date(), day(3));
    assert_eq!(navigator.display_config(), DisplayConfig::short_date_utc());
}

#[test]
fn descending_order_is_detected_from_first_pair() {
    let navigator =
        DateNavigator::new(days(&[4, 3, 2, 1, 0]), NavigatorConfig::default()).expect("navigator");
    assert_eq!(navigator.order(), SequenceOrder::Descending);
    assert_eq!(navigator.leading_date(), day(4));
    assert_eq!(navigator.trailing_date(), day(0));
}

#[test]
fn sequences_shorter_than_two_items_are_rejected() {
    let err = DateNavigator::new(days(&[7]), NavigatorConfig::default())
        .err()
        .expect("single item must fail");
    assert_eq!(err, SliderError::InvalidSequence { len: 1 });

    let empty: Vec<DateTime<Utc>> = Vec::new();
    let err = DateNavigator::new(empty, NavigatorConfig::default())
        .err()
        .expect("empty must fail");
    assert!(format!("{err}").contains("at least 2"));
}

#[test]
fn out_of_range_initial_selection_is_rejected() {
    let config = NavigatorConfig::default().with_initial_selection(5);
    let err = DateNavigator::new(days(&[0, 1, 2, 3, 4]), config)
        .err()
        .expect("selection must fail");
    assert_eq!(err, SliderError::SelectionOutOfRange { index: 5, len: 5 });
}

#[test]
fn into_sequence_returns_ownership_for_rebuilds() {
    let navigator =
        DateNavigator::new(days(&[0, 2]), NavigatorConfig::default()).expect("navigator");
    let mut sequence = navigator.into_sequence();
    sequence.push(day(5));

    let rebuilt = DateNavigator::new(sequence, NavigatorConfig::default()).expect("rebuilt");
    assert_eq!(rebuilt.last_index(), 2);
    assert_eq!(rebuilt.trailing_date(), day(5));
}

#[test]
fn default_tracing_can_only_be_installed_once() {
    let _ = date_slider::telemetry::init_default_tracing();
    assert!(!date_slider::telemetry::init_default_tracing());
}
