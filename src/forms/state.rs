//! Per-form interaction state driven by change, blur and submit events.
//!
//! Errors are cleared as soon as the user edits a field and recomputed only on
//! blur or submit, so a field being corrected never flickers between states.
//! An error is shown only once its field has been touched.

use std::collections::BTreeSet;

use tracing::warn;

use super::validation::{has_errors, validate_field, validate_form};
use crate::schema::{FormErrors, FormValues, Schema};

/// Lifecycle of a single field within an open form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Pristine,
    TouchedValid,
    TouchedInvalid,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// No field failed validation; carries the full values map.
    Accepted(FormValues),
    /// At least one field failed; every error is now visible.
    Rejected(FormErrors),
}

/// Values, errors and touched flags of one open form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FormValues,
    pub errors: FormErrors,
    pub touched: BTreeSet<String>,
}

pub struct FormController<'s> {
    schema: &'s Schema,
    state: FormState,
}

impl<'s> FormController<'s> {
    /// Seeds every field from `initial`, then the field default, then "".
    pub fn new(schema: &'s Schema, initial: &FormValues) -> Self {
        let values = schema
            .iter()
            .map(|field| {
                let value = initial
                    .get(field.name)
                    .cloned()
                    .unwrap_or_else(|| field.initial_value());
                (field.name.to_string(), value)
            })
            .collect();

        Self {
            schema,
            state: FormState {
                values,
                ..FormState::default()
            },
        }
    }

    pub fn schema(&self) -> &'s Schema {
        self.schema
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn values(&self) -> &FormValues {
        &self.state.values
    }

    pub fn errors(&self) -> &FormErrors {
        &self.state.errors
    }

    pub fn value(&self, name: &str) -> &str {
        self.state
            .values
            .get(name)
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn on_change(&mut self, name: &str, value: impl Into<String>) {
        if self.schema.field(name).is_none() {
            warn!(field = name, "change event for a field outside the schema");
            return;
        }
        self.state.values.insert(name.to_string(), value.into());
        if let Some(error) = self.state.errors.get_mut(name) {
            *error = None;
        }
    }

    pub fn on_blur(&mut self, name: &str) {
        let schema = self.schema;
        let Some(field) = schema.field(name) else {
            warn!(field = name, "blur event for a field outside the schema");
            return;
        };
        self.state.touched.insert(name.to_string());
        let error = validate_field(self.value(name), field);
        self.state.errors.insert(name.to_string(), error);
    }

    pub fn on_submit(&mut self) -> SubmitOutcome {
        let errors = validate_form(&self.state.values, self.schema);
        self.state.errors = errors.clone();
        self.state.touched = self
            .schema
            .iter()
            .map(|field| field.name.to_string())
            .collect();

        if has_errors(&errors) {
            SubmitOutcome::Rejected(errors)
        } else {
            SubmitOutcome::Accepted(self.state.values.clone())
        }
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.state.touched.contains(name)
    }

    /// The field's error if it is eligible for display.
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        if !self.is_touched(name) {
            return None;
        }
        self.state.errors.get(name).and_then(|error| error.as_deref())
    }

    pub fn field_status(&self, name: &str) -> FieldStatus {
        if !self.is_touched(name) {
            FieldStatus::Pristine
        } else if self.visible_error(name).is_some() {
            FieldStatus::TouchedInvalid
        } else {
            FieldStatus::TouchedValid
        }
    }

    /// Whether a submit right now would be accepted.
    pub fn is_submittable(&self) -> bool {
        !has_errors(&validate_form(&self.state.values, self.schema))
    }
}
