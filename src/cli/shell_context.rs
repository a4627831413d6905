use dialoguer::theme::ColorfulTheme;
use tokio::runtime::Runtime;

use crate::api::UserService;
use crate::config::Config;
use crate::store::UserStore;

use super::registry::CommandRegistry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

pub type DynUserStore = UserStore<Box<dyn UserService>>;

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub config: Config,
    pub store: DynUserStore,
    pub runtime: Runtime,
    pub theme: ColorfulTheme,
    pub last_command: Option<String>,
    pub running: bool,
}
