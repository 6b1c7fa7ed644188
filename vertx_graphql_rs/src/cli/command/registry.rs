//! The command table. Built at compile time, iterated by the dispatcher.

use super::descriptor::{CommandDescriptor, FlagDescriptor, PositionalDescriptor};
use crate::cli::dispatch::handlers::{dev, info, project, ui};

/// Executable name used in usage lines.
pub const BINARY_NAME: &str = "vertx-graphql";

/// Flags understood before any command.
pub static GLOBAL_FLAGS: &[FlagDescriptor] = &[
    FlagDescriptor::switch(Some('v'), "version", "output the version number"),
    FlagDescriptor::switch(Some('h'), "help", "output usage information"),
];

static CREATE_FLAGS: &[FlagDescriptor] = &[
    FlagDescriptor::switch(Some('d'), "default", "Skip prompts and use default preset"),
    FlagDescriptor::optional(
        Some('g'),
        "git",
        "message",
        "Force git initialization with initial commit message",
    ),
    FlagDescriptor::negate(Some('n'), "no-git", "git", "Skip git initialization"),
    FlagDescriptor::switch(Some('f'), "force", "Overwrite target directory if it exists"),
    FlagDescriptor::switch(
        Some('b'),
        "bare",
        "Scaffold project without beginner instructions",
    ),
    FlagDescriptor::switch(
        None,
        "skipGetStarted",
        "Skip displaying \"Get started\" instructions",
    ),
];

static SERVE_FLAGS: &[FlagDescriptor] = &[
    FlagDescriptor::switch(Some('o'), "open", "Open browser"),
    FlagDescriptor::switch(Some('c'), "copy", "Copy local url to clipboard"),
    FlagDescriptor::required(
        Some('p'),
        "port",
        "port",
        "Port used by the server (default: 8080 or next available port)",
    ),
];

static BUILD_FLAGS: &[FlagDescriptor] = &[
    FlagDescriptor::required(
        Some('t'),
        "target",
        "target",
        "Build target (app | lib | wc | wc-async, default: app)",
    ),
    FlagDescriptor::required(
        Some('n'),
        "name",
        "name",
        "name for lib or web-component mode (default: entry filename)",
    ),
    FlagDescriptor::required(Some('d'), "dest", "dir", "output directory (default: dist)"),
];

static UI_FLAGS: &[FlagDescriptor] = &[
    FlagDescriptor::required(
        Some('H'),
        "host",
        "host",
        "Host used for the UI server (default: localhost)",
    ),
    FlagDescriptor::required(
        Some('p'),
        "port",
        "port",
        "Port used for the UI server (by default search for available port)",
    ),
    FlagDescriptor::switch(Some('D'), "dev", "Run in dev mode"),
    FlagDescriptor::switch(None, "quiet", "Don't output starting messages"),
    FlagDescriptor::switch(None, "headless", "Don't open browser on start and output port"),
];

/// All commands in registration order. Suggestion ties resolve in this order.
pub static COMMANDS: &[CommandDescriptor] = &[
    CommandDescriptor {
        name: "create",
        description: "create a new project powered by vertx-graphql-cli",
        positionals: &[PositionalDescriptor::required("app-name")],
        flags: CREATE_FLAGS,
        handler: project::handle_create,
    },
    CommandDescriptor {
        name: "serve",
        description: "serve a .js file in development mode",
        positionals: &[PositionalDescriptor::optional("entry")],
        flags: SERVE_FLAGS,
        handler: dev::handle_serve,
    },
    CommandDescriptor {
        name: "build",
        description: "build a .js file in production mode",
        positionals: &[PositionalDescriptor::optional("entry")],
        flags: BUILD_FLAGS,
        handler: dev::handle_build,
    },
    CommandDescriptor {
        name: "ui",
        description: "start and open the vertx-graphql-cli ui",
        positionals: &[],
        flags: UI_FLAGS,
        handler: ui::handle_ui,
    },
    CommandDescriptor {
        name: "info",
        description: "print debugging information about your environment",
        positionals: &[],
        flags: &[],
        handler: info::handle_info,
    },
];

pub fn find_command(name: &str) -> Option<&'static CommandDescriptor> {
    COMMANDS.iter().find(|c| c.name == name)
}

/// Snapshot of registered names, used as suggestion candidates.
pub fn command_names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|c| c.name)
}
