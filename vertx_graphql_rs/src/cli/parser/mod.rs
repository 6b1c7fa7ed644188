//! Command-line parser.
//!
//! - [`core`] - argv to [`ParseOutcome`]
//! - [`error`] - [`ParseError`] and its highlighted rendering

mod core;
mod error;

pub use core::{ParseOutcome, ParsedCommand, parse_command, parse_command_args};
pub use error::ParseError;
