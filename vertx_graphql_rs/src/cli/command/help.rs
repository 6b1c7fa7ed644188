//! Help and version text.

use super::descriptor::{CommandDescriptor, FlagDescriptor};
use super::registry::{BINARY_NAME, COMMANDS, GLOBAL_FLAGS};
use crate::colors::Painter;

const HELP_FLAG: FlagDescriptor =
    FlagDescriptor::switch(Some('h'), "help", "output usage information");

/// `0.1.0` - printed for `-v/--version`.
pub fn format_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn push_table(help: &mut String, rows: &[(String, &str)]) {
    let width = rows.iter().map(|(left, _)| left.len()).max().unwrap_or(0);
    for (left, right) in rows {
        if right.is_empty() {
            help.push_str(&format!("    {left}\n"));
        } else {
            help.push_str(&format!("    {left:<width$}  {right}\n"));
        }
    }
}

fn push_options(help: &mut String, flags: &[FlagDescriptor]) {
    let rows: Vec<(String, &str)> = flags.iter().map(|f| (f.flags(), f.description)).collect();
    help.push_str("  Options:\n\n");
    push_table(help, &rows);
}

/// Root help: usage, description, global options, command list and the
/// trailing hint about per-command help.
pub fn format_root_help(painter: &Painter) -> String {
    let mut help = String::new();
    help.push_str(&format!("\n  Usage: {BINARY_NAME} <command> [options]\n\n"));
    help.push_str(&format!("  {}\n\n", env!("CARGO_PKG_DESCRIPTION")));

    push_options(&mut help, GLOBAL_FLAGS);
    help.push('\n');

    help.push_str("  Commands:\n\n");
    let rows: Vec<(String, &str)> = COMMANDS
        .iter()
        .map(|c| (c.usage(), c.description))
        .collect();
    push_table(&mut help, &rows);

    help.push('\n');
    help.push_str(&format!(
        "  Run {} for detailed usage of given command.\n\n",
        painter.command(&format!("{BINARY_NAME} <command> --help"))
    ));
    help
}

/// Help for one command (`<command> --help`).
pub fn format_command_help(command: &CommandDescriptor) -> String {
    let mut help = String::new();
    help.push_str(&format!("\n  Usage: {}\n\n", command.usage()));
    help.push_str(&format!("  {}\n\n", command.description));

    let mut flags: Vec<FlagDescriptor> = command.flags.to_vec();
    flags.push(HELP_FLAG);
    push_options(&mut help, &flags);
    help.push('\n');
    help
}
