use super::*;

#[test]
fn test_accepted() {
    let result = ValidationResult::accepted();

    assert!(result.is_accepted());
    assert_eq!(result.rule(), None);
    assert_eq!(result.message(), None);
}

#[test]
fn test_rejected() {
    let result = ValidationResult::rejected(TitleRule::Pattern, "no match");

    assert!(!result.is_accepted());
    assert_eq!(result.rule(), Some(TitleRule::Pattern));
    assert_eq!(result.message(), Some("no match"));
}

#[test]
fn test_title_rule_display() {
    let cases = [
        (TitleRule::MinLength, "Min Length"),
        (TitleRule::MaxLength, "Max Length"),
        (TitleRule::AllowedPrefix, "Allowed Prefix"),
        (TitleRule::DisallowedPrefix, "Disallowed Prefix"),
        (TitleRule::AllowedSuffix, "Allowed Suffix"),
        (TitleRule::DisallowedSuffix, "Disallowed Suffix"),
        (TitleRule::Pattern, "Pattern"),
    ];

    for (rule, expected) in cases {
        assert_eq!(rule.to_string(), expected);
    }
}

#[test]
fn test_accepted_serialization() {
    let json = serde_json::to_value(ValidationResult::accepted()).unwrap();

    assert_eq!(json, serde_json::json!({ "status": "accepted" }));
}

#[test]
fn test_rejected_serialization() {
    let result = ValidationResult::rejected(TitleRule::DisallowedSuffix, "ends with '.'");

    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["status"], "rejected");
    assert_eq!(json["rule"], "disallowed_suffix");
    assert_eq!(json["message"], "ends with '.'");
}

#[test]
fn test_rejected_deserialization() {
    let json = r#"{"status": "rejected", "rule": "max_length", "message": "too long"}"#;

    let result: ValidationResult = serde_json::from_str(json).unwrap();

    assert_eq!(
        result,
        ValidationResult::rejected(TitleRule::MaxLength, "too long")
    );
}
