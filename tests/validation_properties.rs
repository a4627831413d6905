use regex::Regex;
use user_crud_core::forms::{has_errors, validate_field, validate_form};
use user_crud_core::schema::{
    user_schema, FieldSchema, FieldType, FormErrors, FormValues, Schema, ValidationRule,
};

fn optional_with_rules() -> FieldSchema {
    FieldSchema::new("nickname", "Nickname", FieldType::Text)
        .with_optional()
        .with_rule(
            ValidationRule::new("Nickname must be lowercase, 3-8 characters")
                .with_pattern(Regex::new("^[a-z]+$").unwrap())
                .with_length(Some(3), Some(8)),
        )
}

#[test]
fn required_fields_reject_empty_and_blank_input() {
    for field in user_schema() {
        let expected = format!("{} is required", field.label);
        assert_eq!(validate_field("", field), Some(expected.clone()));
        assert_eq!(validate_field("   ", field), Some(expected.clone()));
        assert_eq!(validate_field("\t\n", field), Some(expected));
    }
}

#[test]
fn optional_empty_values_skip_every_rule() {
    let field = optional_with_rules();
    assert_eq!(validate_field("", &field), None);
    assert_eq!(validate_field("    ", &field), None);
    assert!(validate_field("AB", &field).is_some());
}

#[test]
fn pattern_mismatch_reports_rule_message() {
    let email = user_schema().field("email").unwrap();
    assert_eq!(
        validate_field("not-an-email", email).as_deref(),
        Some("Please enter a valid email address")
    );

    let phone = user_schema().field("phoneNumber").unwrap();
    assert_eq!(
        validate_field("555-123-4567", phone).as_deref(),
        Some("Enter a valid phone number with country code (e.g., +1 555-123-4567)")
    );
}

#[test]
fn phone_numbers_accept_only_ascii_digits() {
    let phone = user_schema().field("phoneNumber").unwrap();
    assert_eq!(validate_field("+1 555 123 4567", phone), None);
    for sample in ["+1 ٥٥٥ ١٢٣ ٤٥٦٧", "+1 ५५५ १२३ ४५६७"] {
        assert_eq!(
            validate_field(sample, phone).as_deref(),
            Some("Enter a valid phone number with country code (e.g., +1 555-123-4567)"),
            "{sample} must be rejected"
        );
    }
}

#[test]
fn byte_order_mark_alone_is_blank() {
    let first = user_schema().field("firstName").unwrap();
    assert_eq!(
        validate_field("\u{FEFF}", first).as_deref(),
        Some("First Name is required")
    );
}

#[test]
fn values_are_trimmed_before_length_checks() {
    let first = user_schema().field("firstName").unwrap();
    assert_eq!(validate_field("  Al  ", first), None);
    assert!(validate_field("  A  ", first).is_some());
    assert!(validate_field(&"x".repeat(51), first).is_some());
    assert_eq!(validate_field(&"x".repeat(50), first), None);
}

#[test]
fn length_counts_characters_not_bytes() {
    let first = user_schema().field("firstName").unwrap();
    assert_eq!(validate_field("Zoë", first), None);
    assert_eq!(validate_field(&"é".repeat(50), first), None);
}

#[test]
fn validate_form_treats_missing_keys_as_empty() {
    let schema = user_schema();
    let mut values = FormValues::new();
    values.insert("firstName".into(), "Ada".into());
    values.insert("lastName".into(), "Lovelace".into());

    let errors = validate_form(&values, schema);
    let failing: Vec<&str> = errors.keys().map(String::as_str).collect();
    assert_eq!(failing, vec!["email", "phoneNumber"]);
    assert_eq!(
        errors["email"].as_deref(),
        Some("Email Address is required")
    );
    assert!(has_errors(&errors));
}

#[test]
fn has_errors_ignores_cleared_entries() {
    let mut errors = FormErrors::new();
    assert!(!has_errors(&errors));

    errors.insert("email".into(), None);
    errors.insert("firstName".into(), None);
    assert!(!has_errors(&errors));

    errors.insert("lastName".into(), Some("Last Name is required".into()));
    assert!(has_errors(&errors));
}

#[test]
fn each_field_reports_a_single_error() {
    let schema = Schema::new(vec![optional_with_rules()]).unwrap();
    let mut values = FormValues::new();
    values.insert("nickname".into(), "AB".into());
    let errors = validate_form(&values, &schema);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors["nickname"].as_deref(),
        Some("Nickname must be lowercase, 3-8 characters")
    );
}
