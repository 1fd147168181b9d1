//! Tests for label records.

use super::*;

#[test]
fn test_hex_color_accepts_six_hex_digits() {
    for color in ["d73a4a", "FFFFFF", "000000", "a2EeF0", "123456"] {
        assert!(is_hex_color(color), "{color} should be accepted");
    }
}

#[test]
fn test_hex_color_rejects_everything_else() {
    for color in [
        "", "fff", "12345", "1234567", "#d73a4a", "ggg000", "d73a4a ", " d73a4a", "red",
    ] {
        assert!(!is_hex_color(color), "{color:?} should be rejected");
    }
}

#[test]
fn test_validate_color_error_message() {
    let err = validate_color("#fff").unwrap_err();

    assert!(matches!(err, Error::Validation(_)));
    assert!(err.to_string().contains("Expects hex code without leading #"));
}

#[test]
fn test_validate_name_rejects_empty() {
    assert!(validate_name("bug").is_ok());
    assert!(matches!(validate_name(""), Err(Error::Validation(_))));
}

#[test]
fn test_new_validates() {
    let label = LabelRecord::new("bug", "ff0000", "Something broken").unwrap();
    assert_eq!(label.name, "bug");

    assert!(LabelRecord::new("", "ff0000", "").is_err());
    assert!(LabelRecord::new("bug", "f00", "").is_err());
}

#[test]
fn test_serialization_field_order() {
    let label = LabelRecord::new("bug", "ff0000", "Something broken").unwrap();

    let json = serde_json::to_string(&label).unwrap();

    assert_eq!(
        json,
        r#"{"name":"bug","color":"ff0000","description":"Something broken"}"#
    );
}

#[test]
fn test_deserialization_without_description() {
    let label: LabelRecord = serde_json::from_str(r#"{"name":"bug","color":"ff0000"}"#).unwrap();

    assert_eq!(label.description, "");
}

#[test]
fn test_to_remote_and_to_update() {
    let label = LabelRecord::new("defect", "00ff00", "Renamed").unwrap();

    let remote = label.to_remote();
    assert_eq!(remote.name, "defect");
    assert_eq!(remote.description.as_deref(), Some("Renamed"));

    let update = label.to_update();
    assert_eq!(update.new_name, "defect");
    assert_eq!(update.color, "00ff00");
}
