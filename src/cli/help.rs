use crate::cli::output::{info, section};
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub fn print_overview(registry: &CommandRegistry) {
    section("Available commands");
    for entry in registry.list() {
        info(format!("  {:<8} {}", entry.name, entry.description));
    }
    info("Use `help <command>` for details.");
}

pub fn print_command(entry: &CommandEntry) {
    section(format!("Help: {}", entry.name));
    info(format!("  Description: {}", entry.description));
    info(format!("  Usage: {}", entry.usage));
}
