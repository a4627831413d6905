//! Pure validation functions over the field schema.

use crate::schema::{FieldSchema, FormErrors, FormValues, Schema};

/// Whitespace stripped from both ends of a value before validation: Unicode
/// white space plus the byte order mark, without NEXT LINE (U+0085).
fn is_edge_whitespace(ch: char) -> bool {
    ch == '\u{FEFF}' || (ch.is_whitespace() && ch != '\u{0085}')
}

/// Validates a single value, returning the first failing check's message.
///
/// Checks run in the order required, pattern, minimum length, maximum length.
/// Empty optional values are always valid.
pub fn validate_field(value: &str, field: &FieldSchema) -> Option<String> {
    let trimmed = value.trim_matches(is_edge_whitespace);

    if trimmed.is_empty() {
        return field
            .required
            .then(|| format!("{} is required", field.label));
    }

    let rule = field.validation.as_ref()?;
    let length = trimmed.chars().count();

    let failed = rule
        .pattern
        .as_ref()
        .is_some_and(|pattern| !pattern.is_match(trimmed))
        || rule.min_length.is_some_and(|min| length < min)
        || rule.max_length.is_some_and(|max| length > max);

    failed.then(|| rule.message.clone())
}

/// Validates every schema field. Only failing fields appear in the result.
pub fn validate_form(values: &FormValues, schema: &Schema) -> FormErrors {
    schema
        .iter()
        .filter_map(|field| {
            let value = values.get(field.name).map(String::as_str).unwrap_or("");
            validate_field(value, field).map(|error| (field.name.to_string(), Some(error)))
        })
        .collect()
}

pub fn has_errors(errors: &FormErrors) -> bool {
    errors.values().any(Option::is_some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldType, ValidationRule};
    use regex::Regex;

    fn code_field() -> FieldSchema {
        FieldSchema::new("code", "Code", FieldType::Text).with_rule(
            ValidationRule::new("Code must be three capitals")
                .with_pattern(Regex::new("^[A-Z]+$").unwrap())
                .with_length(Some(3), Some(3)),
        )
    }

    #[test]
    fn required_check_comes_first() {
        assert_eq!(
            validate_field("  ", &code_field()).as_deref(),
            Some("Code is required")
        );
    }

    #[test]
    fn pattern_then_length() {
        let field = code_field();
        assert_eq!(
            validate_field("ab", &field).as_deref(),
            Some("Code must be three capitals")
        );
        assert_eq!(
            validate_field("AB", &field).as_deref(),
            Some("Code must be three capitals")
        );
        assert_eq!(
            validate_field("ABCD", &field).as_deref(),
            Some("Code must be three capitals")
        );
        assert_eq!(validate_field(" ABC ", &field), None);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let field = FieldSchema::new("name", "Name", FieldType::Text)
            .with_rule(ValidationRule::new("too long").with_length(None, Some(3)));
        assert_eq!(validate_field("äöü", &field), None);
    }

    #[test]
    fn byte_order_mark_counts_as_blank() {
        assert_eq!(
            validate_field("\u{FEFF}", &code_field()).as_deref(),
            Some("Code is required")
        );
        assert_eq!(validate_field("\u{FEFF}ABC\u{FEFF}", &code_field()), None);
    }

    #[test]
    fn next_line_is_kept_as_content() {
        let field = FieldSchema::new("name", "Name", FieldType::Text)
            .with_rule(
                ValidationRule::new("Name must be 2-5 characters").with_length(Some(2), Some(5)),
            );
        assert_eq!(
            validate_field("\u{0085}", &field).as_deref(),
            Some("Name must be 2-5 characters")
        );
        assert_eq!(validate_field("A\u{0085}", &field), None);
    }

    #[test]
    fn optional_empty_skips_rules() {
        let field = code_field().with_optional();
        assert_eq!(validate_field("", &field), None);
        assert_eq!(validate_field("   ", &field), None);
    }

    #[test]
    fn has_errors_ignores_cleared_entries() {
        let mut errors = FormErrors::new();
        assert!(!has_errors(&errors));
        errors.insert("code".into(), None);
        assert!(!has_errors(&errors));
        errors.insert("name".into(), Some("bad".into()));
        assert!(has_errors(&errors));
    }

    #[test]
    fn validate_form_treats_missing_keys_as_empty() {
        let schema = Schema::new(vec![
            code_field(),
            FieldSchema::new("notes", "Notes", FieldType::TextArea).with_optional(),
        ])
        .unwrap();
        let errors = validate_form(&FormValues::new(), &schema);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors["code"].as_deref(), Some("Code is required"));
    }
}
