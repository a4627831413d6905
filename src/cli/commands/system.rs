use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::output::{self, section as output_section};
use crate::cli::registry::CommandEntry;
use crate::cli::ui::table_renderer::{Table, TableColumn};
use crate::schema::user_schema;
use crate::utils::build_info;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "schema",
            "Show the user field schema",
            "schema",
            cmd_schema,
        ),
        CommandEntry::new(
            "config",
            "Show the effective configuration",
            "config",
            cmd_config,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new(
            "help",
            "Show available commands",
            "help [command]",
            cmd_help,
        ),
        CommandEntry::new("exit", "Exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_schema(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let schema = user_schema();
    let table = Table {
        columns: ["Name", "Label", "Type", "Required", "Width"]
            .into_iter()
            .map(TableColumn::new)
            .collect(),
        rows: schema
            .iter()
            .map(|field| {
                vec![
                    field.name.to_string(),
                    field.label.to_string(),
                    field.field_type.to_string(),
                    if field.required { "yes" } else { "no" }.to_string(),
                    field.layout_width.to_string(),
                ]
            })
            .collect(),
        padding: 1,
    };
    output_section("User schema");
    println!("{}", table.render());
    Ok(())
}

fn cmd_config(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Configuration");
    println!("{}", serde_json::to_string_pretty(&context.config)?);
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let meta = build_info::current();
    output_section(format!("User CRUD core {}", meta.version));
    output::two_column(&meta.rows());
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(command) = context.command(&command) {
            help::print_command(command);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}
