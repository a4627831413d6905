pub mod system;
pub mod users;

use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(users::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}
