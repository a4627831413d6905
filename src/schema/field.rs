use std::fmt;

use regex::Regex;

/// Input kinds a field can declare. Drives widget choice in the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Text,
    Email,
    Tel,
    Number,
    Date,
    TextArea,
    Select,
}

impl FieldType {
    pub const ALL: [FieldType; 7] = [
        FieldType::Text,
        FieldType::Email,
        FieldType::Tel,
        FieldType::Number,
        FieldType::Date,
        FieldType::TextArea,
        FieldType::Select,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Email => "email",
            FieldType::Tel => "tel",
            FieldType::Number => "number",
            FieldType::Date => "date",
            FieldType::TextArea => "textarea",
            FieldType::Select => "select",
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Content constraints checked after the required check.
///
/// Every present constraint is checked in the order pattern, minimum length,
/// maximum length. The first failure reports `message`.
#[derive(Debug, Clone)]
pub struct ValidationRule {
    pub pattern: Option<Regex>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub message: String,
}

impl ValidationRule {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            pattern: None,
            min_length: None,
            max_length: None,
            message: message.into(),
        }
    }

    pub fn with_pattern(mut self, pattern: Regex) -> Self {
        self.pattern = Some(pattern);
        self
    }

    pub fn with_length(mut self, min: Option<usize>, max: Option<usize>) -> Self {
        self.min_length = min;
        self.max_length = max;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Full-row width on the twelve column layout grid.
pub const FULL_WIDTH: u8 = 12;

/// Declarative description of one editable entity attribute.
#[derive(Debug, Clone)]
pub struct FieldSchema {
    pub name: &'static str,
    pub label: &'static str,
    pub field_type: FieldType,
    pub required: bool,
    pub validation: Option<ValidationRule>,
    pub default_value: Option<String>,
    pub options: Vec<SelectOption>,
    pub layout_width: u8,
    pub placeholder: Option<&'static str>,
    pub helper_text: Option<&'static str>,
}

impl FieldSchema {
    /// Creates a required field spanning the full row.
    pub fn new(name: &'static str, label: &'static str, field_type: FieldType) -> Self {
        Self {
            name,
            label,
            field_type,
            required: true,
            validation: None,
            default_value: None,
            options: Vec::new(),
            layout_width: FULL_WIDTH,
            placeholder: None,
            helper_text: None,
        }
    }

    pub fn with_optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_rule(mut self, rule: ValidationRule) -> Self {
        self.validation = Some(rule);
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn with_options(mut self, options: Vec<SelectOption>) -> Self {
        self.options = options;
        self
    }

    pub fn with_width(mut self, width: u8) -> Self {
        self.layout_width = width;
        self
    }

    pub fn with_placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = Some(placeholder);
        self
    }

    pub fn with_helper(mut self, helper: &'static str) -> Self {
        self.helper_text = Some(helper);
        self
    }

    /// Value seeded into a fresh form when no initial value is supplied.
    pub fn initial_value(&self) -> String {
        self.default_value.clone().unwrap_or_default()
    }
}
