use super::*;

#[test]
fn missing_element_is_flagged() {
    let err = SiteError::missing("#hero");
    assert!(err.is_missing_element());
    assert_eq!(err.to_string(), "element not found: #hero");
}

#[test]
fn js_failure_is_not_missing_element() {
    let err = SiteError::Js("boom".to_owned());
    assert!(!err.is_missing_element());
    assert_eq!(err.to_string(), "browser call failed: boom");
}

#[test]
fn json_errors_convert_into_config_variant() {
    let parse = serde_json::from_str::<serde_json::Value>("{");
    let Err(json_err) = parse else {
        panic!("truncated json should not parse");
    };
    let err = SiteError::from(json_err);
    assert!(matches!(err, SiteError::Config(_)));
    assert!(err.to_string().starts_with("invalid site config:"));
}
