use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};

use crate::cli::core::{CliError, CliMode, LoopControl, ShellContext};
use crate::cli::output;
use crate::schema::user_schema;

/// Set to any value to read commands from stdin without prompts or colors.
pub const SCRIPT_MODE_VAR: &str = "USER_CRUD_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_MODE_VAR).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;
    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output::section("User CRUD shell");
    output::info(format!(
        "Connected to {}. Type `help` for commands.",
        context.config.describe_backend()
    ));

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();
                match context.process_line(trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm("Exit shell?")? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    for line in io::stdin().lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match context.process_line(&line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

/// Completes command names in the first word and `field=` in later words.
struct CommandHelper {
    commands: Vec<String>,
    fields: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_ascii_lowercase).collect();
        commands.sort();
        commands.dedup();
        let fields = user_schema()
            .field_names()
            .into_iter()
            .map(|name| format!("{name}="))
            .collect();
        Self { commands, fields }
    }

    fn candidates(&self, needle: &str, first_word: bool) -> Vec<Pair> {
        let pool = if first_word {
            &self.commands
        } else {
            &self.fields
        };
        pool.iter()
            .filter(|name| name.to_ascii_lowercase().starts_with(&needle.to_ascii_lowercase()))
            .map(|name| Pair {
                display: name.clone(),
                replacement: name.clone(),
            })
            .collect()
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let first_word = prefix[..start].trim().is_empty();
        Ok((start, self.candidates(&prefix[start..], first_word)))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(input)
}
