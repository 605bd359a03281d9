use chart_autoskip::SkipError;
use chart_autoskip::api::{AUTOSKIP_RESPONSE_JSON_SCHEMA_V1, AutoSkipRequest};
use serde_json::{Value, json};

fn request_json() -> Value {
    json!({
        "geometry": { "length": 90.0, "max_length": 1000.0, "tick_size": 10.0 },
        "options": { "max_ticks_limit": 4, "major_enabled": true },
        "ticks": (0..20)
            .map(|index| json!({ "value": format!("t{index}"), "major": ([0, 5, 15].contains(&index)) }))
            .collect::<Vec<_>>()
    })
}

#[test]
fn bare_request_runs_selection() {
    let request =
        AutoSkipRequest::from_json_compat_str(&request_json().to_string()).expect("request");
    let response = request.run();

    assert_eq!(response.capacity, 10);
    assert_eq!(response.limit, 4);
    assert_eq!(response.indices, vec![0, 5, 10, 15]);
    assert_eq!(response.ticks[2].value, json!("t10"));
    assert!(!response.ticks[2].major);
}

#[test]
fn versioned_request_round_trips_through_contract() {
    let request =
        AutoSkipRequest::from_json_compat_str(&request_json().to_string()).expect("request");
    let contract = request.to_json_contract_v1_pretty().expect("contract json");

    let parsed = AutoSkipRequest::from_json_compat_str(&contract).expect("versioned request");
    assert_eq!(parsed, request);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let payload = json!({ "schema_version": 7, "request": request_json() });
    let err = AutoSkipRequest::from_json_compat_str(&payload.to_string())
        .expect_err("unknown schema");
    assert!(matches!(err, SkipError::InvalidData(message) if message.contains("schema version")));
}

#[test]
fn invalid_geometry_is_rejected_while_parsing() {
    let mut payload = request_json();
    payload["geometry"]["tick_size"] = json!(0.0);
    assert!(AutoSkipRequest::from_json_compat_str(&payload.to_string()).is_err());
}

#[test]
fn missing_options_use_defaults() {
    let mut payload = request_json();
    payload
        .as_object_mut()
        .expect("object payload")
        .remove("options");
    let request = AutoSkipRequest::from_json_compat_str(&payload.to_string()).expect("request");
    let response = request.run();

    // majors disabled, geometry capacity 10 -> spacing 2
    assert_eq!(response.limit, 10);
    assert_eq!(response.indices, (0..20).step_by(2).collect::<Vec<_>>());
}

#[test]
fn response_contract_carries_schema_version() {
    let request =
        AutoSkipRequest::from_json_compat_str(&request_json().to_string()).expect("request");
    let json = request
        .run()
        .to_json_contract_v1_pretty()
        .expect("response json");
    let value: Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["schema_version"], json!(AUTOSKIP_RESPONSE_JSON_SCHEMA_V1));
    assert_eq!(value["response"]["indices"], json!([0, 5, 10, 15]));
}
