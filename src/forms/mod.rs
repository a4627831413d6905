//! Schema-driven form engine: validation, interaction state and rendering.

pub mod render;
pub mod state;
pub mod validation;

pub use render::{field_view, form_views, table_columns, table_rows, Column, FieldView, Widget};
pub use state::{FieldStatus, FormController, FormState, SubmitOutcome};
pub use validation::{has_errors, validate_field, validate_form};
