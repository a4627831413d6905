use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::forms::{self, DialoguerInteraction};
use crate::cli::output;
use crate::cli::registry::CommandEntry;
use crate::cli::shell_context::DynUserStore;
use crate::cli::ui::table_renderer::Table;
use crate::forms::FormController;
use crate::schema::{user_schema, FormRecord, FormValues};
use crate::user::{CreateUserDto, UpdateUserDto, User};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("list", "Fetch and list all users", "list", cmd_list),
        CommandEntry::new("show", "Show a single user", "show <id>", cmd_show),
        CommandEntry::new(
            "add",
            "Create a user (prompts for each field when no values are given)",
            "add [field=value ...]",
            cmd_add,
        ),
        CommandEntry::new(
            "edit",
            "Edit an existing user",
            "edit <id> [field=value ...]",
            cmd_edit,
        ),
        CommandEntry::new("delete", "Delete a user", "delete <id>", cmd_delete),
    ]
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    ensure_idle(&context.store)?;
    context.block_on(context.store.fetch());
    context.report_store_error();

    let users = context.store.users();
    output::section(format!("Users ({})", users.len()));
    if users.is_empty() {
        output::info("No users found.");
    } else {
        println!("{}", Table::from_schema(user_schema(), &users).render());
    }
    Ok(())
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let id = required_id(args, "show <id>")?;
    let user = match context.block_on(context.store.service().get(id)) {
        Ok(user) => user,
        Err(err) if err.status() == Some(404) => {
            return Err(CommandError::UserNotFound(id.to_string()))
        }
        Err(err) => {
            output::error(err);
            return Ok(());
        }
    };

    output::section(user.full_name());
    let mut rows = vec![("ID", user.id.clone())];
    rows.extend(
        user_schema()
            .iter()
            .map(|field| (field.label, user.attribute(field.name).unwrap_or("").to_string())),
    );
    output::two_column(&rows);
    Ok(())
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    ensure_idle(&context.store)?;
    let schema = user_schema();
    let Some(values) = collect_values(context, schema.initial_values(), args)? else {
        return Ok(());
    };

    let created = context.block_on(context.store.add(CreateUserDto::from_values(&values)));
    match created {
        Some(user) => output::success(format!("Created user {} ({})", user.full_name(), user.id)),
        None => context.report_store_error(),
    }
    Ok(())
}

fn cmd_edit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    ensure_idle(&context.store)?;
    let id = required_id(args, "edit <id> [field=value ...]")?;
    let existing = find_user(context, id)?;
    let initial = user_schema().values_from_record(&existing);
    let Some(values) = collect_values(context, initial, &args[1..])? else {
        return Ok(());
    };

    let updated = context.block_on(context.store.edit(id, UpdateUserDto::from_values(&values)));
    match updated {
        Some(user) => output::success(format!("Updated user {} ({})", user.full_name(), user.id)),
        None => context.report_store_error(),
    }
    Ok(())
}

fn cmd_delete(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    ensure_idle(&context.store)?;
    let id = required_id(args, "delete <id>")?;
    let user = find_user(context, id)?;
    if !context.confirm(&format!("Delete {}?", user.full_name()))? {
        output::info("Operation cancelled.");
        return Ok(());
    }

    if context.block_on(context.store.remove(id)) {
        output::success(format!("Deleted user {} ({})", user.full_name(), id));
    } else {
        context.report_store_error();
    }
    Ok(())
}

/// Runs the form against `initial` and returns the submitted values, or
/// `None` when validation rejected them.
fn collect_values(
    context: &ShellContext,
    initial: FormValues,
    args: &[&str],
) -> Result<Option<FormValues>, CommandError> {
    let mut form = FormController::new(user_schema(), &initial);
    if args.is_empty() && context.mode == CliMode::Interactive {
        let mut interaction = DialoguerInteraction::new(&context.theme);
        forms::fill_interactively(&mut form, &mut interaction)?;
    } else {
        let assignments = forms::parse_assignments(&form, args)?;
        forms::apply_assignments(&mut form, &assignments);
    }
    Ok(forms::submit(&mut form))
}

/// Looks the user up in the loaded list, fetching it first when needed.
fn find_user(context: &ShellContext, id: &str) -> Result<User, CommandError> {
    if let Some(user) = context.store.find(id) {
        return Ok(user);
    }
    context.block_on(context.store.fetch());
    context.report_store_error();
    context
        .store
        .find(id)
        .ok_or_else(|| CommandError::UserNotFound(id.to_string()))
}

/// Refuses to start while the store has a request in flight. The shell itself
/// blocks on every store call, so this only trips for embedders that share the
/// store across tasks.
fn ensure_idle(store: &DynUserStore) -> Result<(), CommandError> {
    if store.is_loading() {
        return Err(CommandError::Busy);
    }
    Ok(())
}

fn required_id<'a>(args: &[&'a str], usage: &str) -> Result<&'a str, CommandError> {
    args.first()
        .copied()
        .ok_or_else(|| CommandError::InvalidArguments(format!("usage: {usage}")))
}
