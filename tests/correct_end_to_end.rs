use serde_json::{json, Value};
use sightline::{dispatch, CorrectErrorPolicy, DispatchConfig, Dispatcher, Sighting};

fn reference() -> Value {
    json!({
        "op": "correct",
        "lat": "16d32.3",
        "long": "95d41.6",
        "altitude": "13d42.3",
        "assumedLat": "-53d38.4",
        "assumedLong": "74d35.3",
    })
}

fn reporting() -> Dispatcher {
    Dispatcher::new().with_config(DispatchConfig {
        correct_errors: CorrectErrorPolicy::Report,
        ..DispatchConfig::default()
    })
}

#[test]
fn reference_sight_reduces_to_distance_and_azimuth() {
    let output = dispatch(Some(reference()));
    let mut expected: Sighting = serde_json::from_value(reference()).unwrap();
    expected.insert("correctedDistance", "3950");
    expected.insert("correctedAzimuth", "164d42.9");
    assert_eq!(output, expected);
}

#[test]
fn distance_is_negative_when_body_is_lower_than_computed() {
    let output = dispatch(Some(json!({
        "op": "correct",
        "lat": "45d0.0",
        "long": "10d0.0",
        "altitude": "30d0.0",
        "assumedLat": "44d0.0",
        "assumedLong": "20d0.0",
    })));
    assert_eq!(output.get_str("correctedDistance"), Some("-2322"));
    assert_eq!(output.get_str("correctedAzimuth"), Some("76d44.9"));
}

#[test]
fn invalid_sighting_is_returned_unchanged_by_default() {
    for field in ["lat", "long", "altitude", "assumedLat", "assumedLong"] {
        let mut input = reference();
        input.as_object_mut().unwrap().remove(field);
        let output = dispatch(Some(input.clone()));
        let expected: Sighting = serde_json::from_value(input).unwrap();
        assert_eq!(output, expected, "missing {field}");
    }

    let mut input = reference();
    input["assumedLong"] = json!("360d0.0");
    let output = dispatch(Some(input.clone()));
    assert_eq!(output, serde_json::from_value::<Sighting>(input).unwrap());
}

#[test]
fn report_policy_names_first_failing_field() {
    let cases = [
        ("lat", json!("90d0.0"), "lat is invalid"),
        ("lat", json!("-90d0.0"), "lat is invalid"),
        ("long", json!("360d0.0"), "long is invalid"),
        ("long", json!("-1d0.0"), "long is invalid"),
        ("altitude", json!("0d0.0"), "altitude is invalid"),
        ("altitude", json!("90d0.0"), "altitude is invalid"),
        ("assumedLat", json!("45d60.0"), "assumedLat is invalid"),
        ("assumedLong", json!(74.5), "assumedLong is invalid"),
    ];
    let dispatcher = reporting();
    for (field, value, message) in cases {
        let mut input = reference();
        input[field] = value;
        let output = dispatcher.dispatch(Some(input));
        assert_eq!(output.error(), Some(message));
        assert!(!output.contains("correctedDistance"));
        assert!(!output.contains("correctedAzimuth"));
    }

    let output = dispatcher.dispatch(Some(json!({"op": "correct", "lat": "16d32.3"})));
    assert_eq!(output.error(), Some("missing mandatory field long"));
}

#[test]
fn boundary_longitudes_and_latitudes_are_accepted() {
    let dispatcher = reporting();
    for (field, value) in [
        ("long", "0d0.0"),
        ("long", "359d59.9"),
        ("assumedLong", "0d0.0"),
        ("lat", "-89d59.9"),
        ("assumedLat", "89d59.9"),
    ] {
        let mut input = reference();
        input[field] = json!(value);
        let output = dispatcher.dispatch(Some(input));
        assert!(!output.has_error(), "{field}={value}: {:?}", output.error());
        assert!(output.contains("correctedAzimuth"));
    }
}

#[test]
fn body_at_assumed_position_has_zero_azimuth() {
    let output = dispatch(Some(json!({
        "op": "correct",
        "lat": "30d0.0",
        "long": "10d0.0",
        "altitude": "89d0.0",
        "assumedLat": "30d0.0",
        "assumedLong": "350d0.0",
    })));
    assert_eq!(output.get_str("correctedDistance"), Some("-60"));
    assert_eq!(output.get_str("correctedAzimuth"), Some("0d0.0"));
}

#[test]
fn assumed_position_next_to_body_reduces_cleanly() {
    let output = dispatch(Some(json!({
        "op": "correct",
        "lat": "30d0.0",
        "long": "0d0.0",
        "altitude": "45d0.0",
        "assumedLat": "30d0.1",
        "assumedLong": "0d0.0",
    })));
    assert_eq!(output.get_str("correctedDistance"), Some("-2700"));
    assert_eq!(output.get_str("correctedAzimuth"), Some("180d0.0"));

    for whole in (-80..=80).step_by(10) {
        for minutes in ["0.1", "0.2", "0.3"] {
            let lat = format!("{whole}d0.0");
            let assumed_lat = format!("{whole}d{minutes}");
            let expected = if whole < 0 { "0d0.0" } else { "180d0.0" };
            let output = dispatch(Some(json!({
                "op": "correct",
                "lat": lat,
                "long": "120d0.0",
                "altitude": "45d0.0",
                "assumedLat": assumed_lat,
                "assumedLong": "240d0.0",
            })));
            assert!(!output.has_error(), "{lat} / {assumed_lat}");
            assert_eq!(
                output.get_str("correctedAzimuth"),
                Some(expected),
                "{lat} / {assumed_lat}"
            );
        }
    }
}
