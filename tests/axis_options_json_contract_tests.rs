use chartlet::ChartError;
use chartlet::api::{AxisSide, YAxisOptions};

#[test]
fn options_round_trip_through_the_versioned_contract() {
    let options = YAxisOptions::new(true, true)
        .with_side(AxisSide::Right)
        .with_x_shift(24.5);

    let json = options
        .to_json_contract_v1_pretty()
        .expect("serialize options contract");
    let parsed = YAxisOptions::from_json_compat_str(&json).expect("parse options contract");

    assert_eq!(parsed, options);
}

#[test]
fn bare_payload_is_accepted_for_compatibility() {
    let json = r#"{ "show_text": true, "side": "Right", "x_shift": 12.5 }"#;
    let parsed = YAxisOptions::from_json_compat_str(json).expect("parse bare payload");

    assert!(parsed.show_text);
    assert!(!parsed.show_lines);
    assert_eq!(parsed.side, AxisSide::Right);
    assert_eq!(parsed.x_shift, 12.5);
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let parsed = YAxisOptions::from_json_compat_str("{}").expect("parse empty payload");
    assert_eq!(parsed, YAxisOptions::default());
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let json = r#"{ "schema_version": 99, "options": {} }"#;
    match YAxisOptions::from_json_compat_str(json) {
        Ok(_) => panic!("unsupported schema version must fail"),
        Err(err) => assert!(matches!(err, ChartError::Contract(_))),
    }
}

#[test]
fn malformed_payload_is_rejected() {
    assert!(YAxisOptions::from_json_compat_str("not json").is_err());
}
