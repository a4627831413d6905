//! Declarative field schema shared by the table, the form and validation.
//!
//! A [`Schema`] is an ordered list of [`FieldSchema`] entries. The order is the
//! table column order and the form field order. Construction checks the
//! structural invariants once so every consumer can rely on them.

pub mod field;
pub mod user_schema;

use std::collections::{BTreeMap, HashSet};

pub use field::{FieldSchema, FieldType, SelectOption, ValidationRule, FULL_WIDTH};
pub use user_schema::user_schema;

use crate::errors::SchemaError;

/// Field name to string value. Every value is string typed.
pub type FormValues = BTreeMap<String, String>;

/// Field name to error message; `None` marks a field as valid.
pub type FormErrors = BTreeMap<String, Option<String>>;

/// A record whose attributes can be projected onto a schema.
pub trait FormRecord {
    /// Editable attribute names, excluding the server-assigned id.
    const ATTRIBUTES: &'static [&'static str];

    fn id(&self) -> &str;

    fn attribute(&self, name: &str) -> Option<&str>;
}

#[derive(Debug, Clone)]
pub struct Schema {
    fields: Vec<FieldSchema>,
}

impl Schema {
    pub fn new(fields: Vec<FieldSchema>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name) {
                return Err(SchemaError::DuplicateField(field.name.to_string()));
            }
            if !(1..=FULL_WIDTH).contains(&field.layout_width) {
                return Err(SchemaError::InvalidLayoutWidth {
                    field: field.name.to_string(),
                    width: field.layout_width,
                });
            }
            match (field.field_type, field.options.is_empty()) {
                (FieldType::Select, true) => {
                    return Err(SchemaError::MissingOptions(field.name.to_string()))
                }
                (FieldType::Select, false) | (_, true) => {}
                (_, false) => return Err(SchemaError::UnexpectedOptions(field.name.to_string())),
            }
        }
        Ok(Self { fields })
    }

    /// Builds a schema and checks that every field names an attribute of `R`.
    pub fn for_record<R: FormRecord>(fields: Vec<FieldSchema>) -> Result<Self, SchemaError> {
        if let Some(field) = fields
            .iter()
            .find(|field| !R::ATTRIBUTES.contains(&field.name))
        {
            return Err(SchemaError::UnknownAttribute(field.name.to_string()));
        }
        Self::new(fields)
    }

    pub fn fields(&self) -> &[FieldSchema] {
        &self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldSchema> {
        self.fields.iter()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&FieldSchema> {
        self.fields.iter().find(|field| field.name == name)
    }

    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.iter().map(|field| field.name).collect()
    }

    /// Every field mapped to its default value, or an empty string.
    pub fn initial_values(&self) -> FormValues {
        self.fields
            .iter()
            .map(|field| (field.name.to_string(), field.initial_value()))
            .collect()
    }

    /// Projects a record onto the schema, for seeding an edit form.
    pub fn values_from_record<R: FormRecord>(&self, record: &R) -> FormValues {
        self.fields
            .iter()
            .filter_map(|field| {
                record
                    .attribute(field.name)
                    .map(|value| (field.name.to_string(), value.to_string()))
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Schema {
    type Item = &'a FieldSchema;
    type IntoIter = std::slice::Iter<'a, FieldSchema>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}
