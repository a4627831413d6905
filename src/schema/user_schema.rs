//! The canonical field schema for [`User`](crate::user::User) records.
//!
//! Adding an entry here updates the table, the form and validation.

use once_cell::sync::Lazy;
use regex::Regex;

use super::{FieldSchema, FieldType, Schema, ValidationRule};
use crate::errors::SchemaError;
use crate::user::User;

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

// Country code prefix followed by 7-15 digits with optional separators:
// +1-555-123-4567, +1 (555) 123-4567, +44 20 7946 0958, +91 98765 43210
// Digits are ASCII only; `\d` would also admit other Unicode digit scripts.
const PHONE_PATTERN: &str =
    r"^\+[1-9][0-9]{0,2}[\s.-]?\(?[0-9]{1,4}\)?[\s.-]?[0-9]{1,4}[\s.-]?[0-9]{1,9}$";

static USER_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    build_user_schema().unwrap_or_else(|err| panic!("user schema is malformed: {err}"))
});

/// Returns the process-wide user schema, building it on first use.
pub fn user_schema() -> &'static Schema {
    &USER_SCHEMA
}

fn build_user_schema() -> Result<Schema, SchemaError> {
    Schema::for_record::<User>(vec![
        FieldSchema::new("firstName", "First Name", FieldType::Text)
            .with_width(6)
            .with_placeholder("Enter first name")
            .with_rule(
                ValidationRule::new("First name must be 2-50 characters")
                    .with_length(Some(2), Some(50)),
            ),
        FieldSchema::new("lastName", "Last Name", FieldType::Text)
            .with_width(6)
            .with_placeholder("Enter last name")
            .with_rule(
                ValidationRule::new("Last name must be 2-50 characters")
                    .with_length(Some(2), Some(50)),
            ),
        FieldSchema::new("email", "Email Address", FieldType::Email)
            .with_width(6)
            .with_placeholder("email@example.com")
            .with_rule(
                ValidationRule::new("Please enter a valid email address")
                    .with_pattern(compile(EMAIL_PATTERN)),
            ),
        FieldSchema::new("phoneNumber", "Phone Number", FieldType::Tel)
            .with_width(6)
            .with_placeholder("+1 (555) 123-4567")
            .with_helper("Include country code (e.g., +1 for US)")
            .with_rule(
                ValidationRule::new(
                    "Enter a valid phone number with country code (e.g., +1 555-123-4567)",
                )
                .with_pattern(compile(PHONE_PATTERN))
                .with_length(Some(10), Some(20)),
            ),
    ])
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|err| panic!("invalid schema pattern `{pattern}`: {err}"))
}
