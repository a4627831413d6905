//! Core CLI loop, dispatch, and shell context helpers.

use std::{future::Future, io};

use dialoguer::{theme::ColorfulTheme, Confirm};
use rustyline::error::ReadlineError;
use strsim::levenshtein;
use tokio::runtime::Builder;

use crate::api::{HttpClient, HttpUserService, MemoryUserService, UserService};
use crate::config::Config;
use crate::errors::ConfigError;
use crate::store::UserStore;

use super::commands;
use super::output::{self, set_preferences, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};
pub use super::shell_context::{CliMode, ShellContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Failures that end the shell.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Command failed: {0}")]
    Command(String),
}

/// Failures of a single command; reported and the shell keeps running.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("User `{0}` not found")]
    UserNotFound(String),
    #[error("A request is already in progress")]
    Busy,
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

impl From<CommandError> for CliError {
    fn from(err: CommandError) -> Self {
        CliError::Command(err.to_string())
    }
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = Config::from_env()?;
        let service: Box<dyn UserService> = if config.offline {
            Box::new(MemoryUserService::new())
        } else {
            Box::new(HttpUserService::new(HttpClient::new(
                config.api_base_url.clone(),
            )))
        };
        Self::with_service(mode, config, service)
    }

    pub fn with_service(
        mode: CliMode,
        config: Config,
        service: Box<dyn UserService>,
    ) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        set_preferences(OutputPreferences {
            plain_mode: mode == CliMode::Script,
            quiet_mode: false,
        });

        let runtime = Builder::new_current_thread().enable_all().build()?;
        tracing::debug!(base_url = %config.api_base_url, offline = config.offline, "shell ready");

        Ok(ShellContext {
            mode,
            registry,
            config,
            store: UserStore::new(service),
            runtime,
            theme: ColorfulTheme::default(),
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub(crate) fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub(crate) fn prompt(&self) -> String {
        "users> ".to_string()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        let Some(handler) = self.registry.handler(command) else {
            self.suggest_command(raw);
            return Ok(LoopControl::Continue);
        };
        match handler(self, args) {
            Ok(()) => Ok(LoopControl::Continue),
            Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
            Err(err) => Err(err),
        }
    }

    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match super::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                output::warning(err.to_string());
                return Ok(LoopControl::Continue);
            }
        };
        let Some(raw) = tokens.first() else {
            return Ok(LoopControl::Continue);
        };

        let command = raw.to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.last_command = Some(line.trim().to_string());

        let control = self.dispatch(&command, raw, &args)?;
        if control == LoopControl::Exit {
            self.running = false;
        }
        Ok(control)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let best = self
            .registry
            .names()
            .map(|name| (levenshtein(name, &input.to_lowercase()), name))
            .min_by_key(|(distance, _)| *distance);

        if let Some((distance, name)) = best {
            if distance <= 3 {
                output::info(format!("Suggestion: `{}`?", name));
            }
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        output::error(err);
        Ok(())
    }

    /// Shows the store's failure notification once, then dismisses it.
    pub(crate) fn report_store_error(&self) {
        if let Some(message) = self.store.error() {
            output::error(message);
            self.store.clear_error();
        }
    }

    pub(crate) fn confirm(&self, prompt: &str) -> Result<bool, CommandError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        Confirm::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(false)
            .interact()
            .map_err(CommandError::from)
    }
}

#[cfg(test)]
pub(crate) fn process_script(
    service: Box<dyn UserService>,
    lines: &[&str],
) -> Result<ShellContext, CliError> {
    let mut app = ShellContext::with_service(CliMode::Script, Config::default(), service)?;
    for line in lines {
        match app.process_line(line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => app.report_error(err)?,
        }
    }
    Ok(app)
}
