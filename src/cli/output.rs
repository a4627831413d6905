use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// No colors and ASCII-only rules; used by script mode.
    pub plain_mode: bool,
    pub quiet_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

pub fn current_preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn icon(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "[i]",
        MessageKind::Success => "[ok]",
        MessageKind::Warning => "[!]",
        MessageKind::Error => "[x]",
        MessageKind::Section => "",
    }
}

pub fn format_message(
    kind: MessageKind,
    message: impl fmt::Display,
    prefs: &OutputPreferences,
) -> String {
    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", message.to_string().trim()),
        _ => format!("{} {}", icon(kind), message),
    };

    if prefs.plain_mode {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = current_preferences();
    if prefs.quiet_mode && matches!(kind, MessageKind::Info | MessageKind::Section) {
        return;
    }
    let formatted = format_message(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{formatted}"),
        _ => println!("{formatted}"),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Prints aligned `label: value` lines.
pub fn two_column(rows: &[(&str, String)]) {
    let width = rows
        .iter()
        .map(|(label, _)| label.chars().count())
        .max()
        .unwrap_or(0);
    for (label, value) in rows {
        println!("  {label:<width$}  {value}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_mode_has_no_escape_codes() {
        let prefs = OutputPreferences {
            plain_mode: true,
            quiet_mode: false,
        };
        assert_eq!(
            format_message(MessageKind::Error, "boom", &prefs),
            "[x] boom"
        );
        assert_eq!(
            format_message(MessageKind::Section, " Users ", &prefs),
            "=== Users ==="
        );
    }
}
