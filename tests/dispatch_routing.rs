use serde_json::{json, Value};
use sightline::{dispatch, BodyPosition, Dispatcher, Sighting, TableAlmanac};
use std::sync::Arc;

fn as_sighting(value: Value) -> Sighting {
    serde_json::from_value(value).unwrap()
}

fn betelgeuse() -> Arc<TableAlmanac> {
    Arc::new(TableAlmanac::new().with_entry(
        "Betelgeuse",
        "2016-01-17",
        "03:15:42",
        BodyPosition {
            lat: 7.405,
            long: 75.893333,
        },
    ))
}

#[test]
fn shape_errors_replace_the_input() {
    assert_eq!(
        dispatch(None),
        as_sighting(json!({"error": "parameter is missing"}))
    );
    assert_eq!(
        dispatch(Some(json!(42))),
        as_sighting(json!({"error": "parameter is not a dictionary"}))
    );
}

#[test]
fn op_errors_keep_the_input() {
    assert_eq!(
        dispatch(Some(json!({"body": "Sirius"}))),
        as_sighting(json!({"body": "Sirius", "error": "no op is specified"}))
    );
    assert_eq!(
        dispatch(Some(json!({"op": "unknown"}))),
        as_sighting(json!({"op": "unknown", "error": "op is not a legal operation"}))
    );
}

#[test]
fn locate_and_unbacked_predict_pass_through() {
    for op in ["locate", "predict"] {
        let input = json!({"op": op, "body": "Betelgeuse", "date": "2016-01-17"});
        assert_eq!(dispatch(Some(input.clone())), as_sighting(input));
    }
}

#[test]
fn predict_fills_position_from_almanac() {
    let dispatcher = Dispatcher::new().with_almanac(betelgeuse());
    let output = dispatcher.dispatch(Some(json!({
        "op": "predict",
        "body": "betelgeuse",
        "date": "2016-01-17",
        "time": "03:15:42",
    })));
    assert_eq!(output.get_str("lat"), Some("7d24.3"));
    assert_eq!(output.get_str("long"), Some("75d53.6"));
    assert!(!output.has_error());

    let output = dispatcher.dispatch(Some(json!({
        "op": "predict",
        "body": "Betelgeuse",
        "date": "2016-01-18",
        "time": "03:15:42",
    })));
    assert!(!output.contains("lat"));
}

#[test]
fn predicted_position_feeds_correct() {
    let dispatcher = Dispatcher::new().with_almanac(betelgeuse());
    let mut sighting = dispatcher.dispatch(Some(json!({
        "op": "predict",
        "body": "Betelgeuse",
        "date": "2016-01-17",
        "time": "03:15:42",
        "altitude": "30d0.0",
        "assumedLat": "10d0.0",
        "assumedLong": "300d0.0",
    })));
    sighting.insert("op", "correct");
    let output = dispatcher.dispatch_sighting(sighting);
    assert!(output.contains("correctedDistance"));
    assert!(output.contains("correctedAzimuth"));
}

#[test]
fn dispatch_is_idempotent_for_identical_inputs() {
    let inputs = [
        json!({"op": "adjust", "observation": "45d15.2", "height": "6", "temperature": "71"}),
        json!({"op": "adjust", "observation": "oops"}),
        json!({"op": "correct", "lat": "16d32.3"}),
        json!([]),
    ];
    for input in inputs {
        let first = dispatch(Some(input.clone()));
        let second = dispatch(Some(input));
        assert_eq!(first, second);
    }
}

#[test]
fn output_serializes_as_flat_object() {
    let output = dispatch(Some(json!({"op": "adjust", "observation": "42d0.0"})));
    assert_eq!(
        Value::from(output),
        json!({"op": "adjust", "observation": "42d0.0", "altitude": "41d59.0"})
    );
}
