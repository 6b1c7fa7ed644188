//! Command declarations, the normalized argument map and help text.
//!
//! - `descriptor`: `CommandDescriptor` / `FlagDescriptor` types
//! - `registry`: the static command table
//! - `args`: flag values, `camelize` and `normalize`
//! - `help`: help and version output

pub mod args;
pub mod descriptor;
mod help;
pub mod registry;

pub use args::{ArgumentMap, FlagState, Value, camelize, normalize};
pub use descriptor::{
    CommandDescriptor, FlagArity, FlagDefault, FlagDescriptor, Handler, PositionalDescriptor,
};
pub use help::{format_command_help, format_root_help, format_version};
pub use registry::{BINARY_NAME, COMMANDS, GLOBAL_FLAGS, command_names, find_command};
