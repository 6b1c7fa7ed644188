//! # vertx-graphql-cli
//!
//! Command line front end for scaffolding and running Vert.x GraphQL
//! projects: `create`, `serve`, `build`, `ui` and `info`.
//!
//! The crate provides the pieces around the commands:
//!
//! - **Version gate** - refuse to run on a Node runtime older than the
//!   declared range, warn on end-of-life releases ([`environment`])
//! - **Dispatcher** - static command table, flag parsing, help output
//!   ([`cli`])
//! - **Suggestions** - "did you mean" for mistyped commands ([`similarity`])
//! - **Environment report** - the `info` command ([`envinfo`])
//!
//! ## Library usage
//!
//! ```rust
//! use vertx_graphql::cli::command::find_command;
//! use vertx_graphql::similarity::suggest;
//!
//! let names = vertx_graphql::cli::COMMANDS.iter().map(|c| c.name);
//! assert_eq!(suggest("buidl", names), Some("build"));
//! assert!(find_command("serve").is_some());
//! ```

pub mod cli;
pub mod colors;
pub mod config;
pub mod envinfo;
pub mod environment;
pub mod similarity;
pub mod types;

pub use config::RuntimeConfig;
pub use environment::{NodeRuntime, VersionError};
pub use types::ColorMode;
