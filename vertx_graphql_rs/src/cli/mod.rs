//! The `vertx-graphql <command> [options]` interface.
//!
//! ```text
//!  argv ──► parser ──► ParseOutcome ──► dispatch ──┬─► help / version
//!                                                  ├─► handler(Invocation)
//!                                                  └─► unknown command + suggestion
//! ```
//!
//! - [`command`] - static command table, flag descriptors, normalized arguments
//! - [`parser`] - argv tokenizer and parse errors
//! - [`dispatch`] - state machine and handlers
//! - [`entrypoint`] - process main body

pub mod command;
pub mod dispatch;
pub mod entrypoint;
pub mod parser;

pub use command::{
    ArgumentMap, COMMANDS, CommandDescriptor, FlagDescriptor, Value, camelize, normalize,
};
pub use dispatch::{DispatchResult, Dispatcher, HandlerContext, Invocation};
pub use parser::{ParseError, ParseOutcome, parse_command};
