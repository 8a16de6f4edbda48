use chrono::{DateTime, TimeZone, Utc};
use date_slider::api::{
    DateNavigator, NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1, NavigatorConfig, NavigatorSnapshot,
};
use date_slider::core::SequenceOrder;
use date_slider::interaction::{DragPhase, DragUpdate};

fn day(n: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(n * 86_400, 0).single().expect("valid day")
}

fn build_navigator() -> DateNavigator<Vec<DateTime<Utc>>> {
    let dates = [0, 1, 5, 9, 10].into_iter().map(day).collect::<Vec<_>>();
    DateNavigator::new(dates, NavigatorConfig::default().with_initial_selection(2))
        .expect("navigator")
}

#[test]
fn snapshot_captures_window_and_selection() {
    let mut navigator = build_navigator();
    navigator.zoom_in();

    let snapshot = navigator.snapshot();
    assert_eq!(snapshot.len, 5);
    assert_eq!(snapshot.order, SequenceOrder::Ascending);
    assert_eq!(snapshot.window, (1, 3));
    assert_eq!(snapshot.selected_index, 2);
    assert_eq!(snapshot.slider_index, 2);
    assert_eq!(snapshot.selected_date, day(5));
    assert_eq!(snapshot.drag_phase, DragPhase::Idle);
}

#[test]
fn snapshot_json_contract_round_trips() {
    let mut navigator = build_navigator();
    navigator
        .drag_update(DragUpdate::new(80.0, 30.0), 100.0)
        .expect("drag");

    let snapshot = navigator.snapshot();
    assert_eq!(snapshot.drag_phase, DragPhase::Dragging);

    let json = snapshot.to_json_contract_v1_pretty().expect("serialize");
    assert!(json.contains(&format!(
        "\"schema_version\": {NAVIGATOR_SNAPSHOT_JSON_SCHEMA_V1}"
    )));

    let parsed = NavigatorSnapshot::from_json_contract_str(&json).expect("parse");
    assert_eq!(parsed, snapshot);
}

#[test]
fn unknown_schema_version_is_rejected() {
    let json = build_navigator()
        .snapshot()
        .to_json_contract_v1_pretty()
        .expect("serialize")
        .replace("\"schema_version\": 1", "\"schema_version\": 2");

    let err = NavigatorSnapshot::from_json_contract_str(&json).expect_err("must fail");
    assert!(format!("{err}").contains("unsupported snapshot schema version"));
}

#[test]
fn malformed_json_is_reported_as_invalid_data() {
    let err = NavigatorSnapshot::from_json_contract_str("{ not json").expect_err("must fail");
    assert!(format!("{err}").contains("failed to parse snapshot json payload"));
}
