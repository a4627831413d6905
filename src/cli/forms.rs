//! Drives a [`FormController`] from the terminal.
//!
//! Interactive sessions prompt field by field; every answer is a change
//! followed by a blur, and a field with a visible error is asked again.
//! Script sessions apply `field=value` assignments the same way. Both end with
//! a submit, which is the only way values leave the form.

use dialoguer::{theme::ColorfulTheme, Input};

use crate::cli::core::CommandError;
use crate::cli::output;
use crate::forms::render::{field_view, FieldView, Widget};
use crate::forms::{FormController, SubmitOutcome};
use crate::schema::FormValues;

/// Source of answers for an interactive form.
pub trait FormInteraction {
    fn prompt_field(&mut self, view: &FieldView) -> Result<String, CommandError>;

    fn show_error(&mut self, view: &FieldView, message: &str);
}

pub struct DialoguerInteraction<'a> {
    theme: &'a ColorfulTheme,
}

impl<'a> DialoguerInteraction<'a> {
    pub fn new(theme: &'a ColorfulTheme) -> Self {
        Self { theme }
    }
}

fn prompt_label(view: &FieldView) -> String {
    let mut label = view.label.to_string();
    if view.required {
        label.push_str(" *");
    }
    if let Widget::Select { options } = &view.widget {
        let values: Vec<&str> = options.iter().map(|option| option.value.as_str()).collect();
        label.push_str(&format!(" [{}]", values.join("/")));
    }
    if view.value.is_empty() {
        if let Some(placeholder) = view.placeholder {
            label.push_str(&format!(" ({placeholder})"));
        }
    }
    label
}

impl FormInteraction for DialoguerInteraction<'_> {
    fn prompt_field(&mut self, view: &FieldView) -> Result<String, CommandError> {
        if !view.invalid {
            if let Some(helper) = &view.helper {
                output::info(helper);
            }
        }
        Input::<String>::with_theme(self.theme)
            .with_prompt(prompt_label(view))
            .with_initial_text(view.value.clone())
            .allow_empty(true)
            .interact_text()
            .map_err(CommandError::from)
    }

    fn show_error(&mut self, view: &FieldView, message: &str) {
        output::error(format!("{}: {}", view.label, message));
    }
}

/// Prompts every field in schema order until each one passes its blur check.
pub fn fill_interactively(
    form: &mut FormController<'_>,
    interaction: &mut dyn FormInteraction,
) -> Result<(), CommandError> {
    let schema = form.schema();
    for field in schema {
        loop {
            let view = field_view(field, form.value(field.name), form.visible_error(field.name));
            let answer = interaction.prompt_field(&view)?;
            form.on_change(field.name, answer);
            form.on_blur(field.name);
            match form.visible_error(field.name) {
                Some(message) => {
                    let view = field_view(field, form.value(field.name), Some(message));
                    interaction.show_error(&view, message);
                }
                None => break,
            }
        }
    }
    Ok(())
}

/// Splits `field=value` arguments, rejecting malformed or unknown fields.
pub fn parse_assignments(
    form: &FormController<'_>,
    args: &[&str],
) -> Result<Vec<(String, String)>, CommandError> {
    args.iter()
        .map(|arg| {
            let (name, value) = arg.split_once('=').ok_or_else(|| {
                CommandError::InvalidArguments(format!("expected field=value, got `{arg}`"))
            })?;
            if form.schema().field(name).is_none() {
                let known = form.schema().field_names().join(", ");
                return Err(CommandError::InvalidArguments(format!(
                    "unknown field `{name}` (fields: {known})"
                )));
            }
            Ok((name.to_string(), value.to_string()))
        })
        .collect()
}

pub fn apply_assignments(form: &mut FormController<'_>, assignments: &[(String, String)]) {
    for (name, value) in assignments {
        form.on_change(name, value.clone());
        form.on_blur(name);
    }
}

/// Submits the form, printing every visible error when it is rejected.
pub fn submit(form: &mut FormController<'_>) -> Option<FormValues> {
    match form.on_submit() {
        SubmitOutcome::Accepted(values) => Some(values),
        SubmitOutcome::Rejected(_) => {
            for field in form.schema() {
                if let Some(message) = form.visible_error(field.name) {
                    output::error(format!("{}: {}", field.label, message));
                }
            }
            None
        }
    }
}
