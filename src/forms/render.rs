//! Maps schema fields onto concrete widgets, layout slots and table columns.
//!
//! The widget toolkit itself lives outside this crate. A front end asks for a
//! [`FieldView`] per field and draws it; tables ask for [`Column`]s and rows.

use crate::forms::state::FormController;
use crate::schema::{FieldSchema, FieldType, FormRecord, Schema, SelectOption, FULL_WIDTH};

/// Rows shown by a multi-line text area.
pub const TEXTAREA_ROWS: u8 = 4;

/// HTML-style input type used by single-line inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Number,
    Date,
}

impl InputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Tel => "tel",
            InputType::Number => "number",
            InputType::Date => "date",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Widget {
    /// Single-line input. `shrink_label` keeps the label above the input,
    /// needed where the toolkit shows its own placeholder (dates).
    Input {
        input_type: InputType,
        shrink_label: bool,
    },
    TextArea { rows: u8 },
    Select { options: Vec<SelectOption> },
}

impl FieldType {
    pub fn widget(&self, options: &[SelectOption]) -> Widget {
        let input = |input_type| Widget::Input {
            input_type,
            shrink_label: false,
        };
        match self {
            FieldType::Text => input(InputType::Text),
            FieldType::Email => input(InputType::Email),
            FieldType::Tel => input(InputType::Tel),
            FieldType::Number => input(InputType::Number),
            FieldType::Date => Widget::Input {
                input_type: InputType::Date,
                shrink_label: true,
            },
            FieldType::TextArea => Widget::TextArea {
                rows: TEXTAREA_ROWS,
            },
            FieldType::Select => Widget::Select {
                options: options.to_vec(),
            },
        }
    }
}

/// Everything a toolkit needs to draw one form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: String,
    pub name: &'static str,
    pub label: &'static str,
    pub widget: Widget,
    pub required: bool,
    /// Grid columns out of twelve.
    pub width: u8,
    pub value: String,
    pub placeholder: Option<&'static str>,
    /// Visible error, or the helper text when there is none.
    pub helper: Option<String>,
    pub invalid: bool,
}

pub fn field_view(field: &FieldSchema, value: &str, error: Option<&str>) -> FieldView {
    FieldView {
        id: format!("field-{}", field.name),
        name: field.name,
        label: field.label,
        widget: field.field_type.widget(&field.options),
        required: field.required,
        width: field.layout_width,
        value: value.to_string(),
        placeholder: field.placeholder,
        helper: error
            .map(str::to_string)
            .or_else(|| field.helper_text.map(str::to_string)),
        invalid: error.is_some(),
    }
}

/// Views for every field of an open form, in schema order.
pub fn form_views(form: &FormController<'_>) -> Vec<FieldView> {
    form.schema()
        .iter()
        .map(|field| field_view(field, form.value(field.name), form.visible_error(field.name)))
        .collect()
}

/// Groups views into grid rows of at most twelve columns.
pub fn layout_rows(views: &[FieldView]) -> Vec<Vec<&FieldView>> {
    let mut rows: Vec<Vec<&FieldView>> = Vec::new();
    let mut used = 0u8;
    for view in views {
        let fits = !rows.is_empty() && used + view.width <= FULL_WIDTH;
        if fits {
            if let Some(row) = rows.last_mut() {
                row.push(view);
            }
            used += view.width;
        } else {
            rows.push(vec![view]);
            used = view.width;
        }
    }
    rows
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
}

pub fn table_columns(schema: &Schema) -> Vec<Column> {
    schema
        .iter()
        .map(|field| Column {
            key: field.name,
            header: field.label,
        })
        .collect()
}

/// One cell per schema field for each record; missing attributes render empty.
pub fn table_rows<R: FormRecord>(schema: &Schema, records: &[R]) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| {
            schema
                .iter()
                .map(|field| record.attribute(field.name).unwrap_or("").to_string())
                .collect()
        })
        .collect()
}
