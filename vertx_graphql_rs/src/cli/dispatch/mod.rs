//! Dispatcher: routes a parse outcome to help output, a handler, or the
//! unknown-command path with a "did you mean" suggestion.
//!
//! Nothing here exits the process. The caller turns the returned
//! [`DispatchResult`] into an exit code.

pub mod handlers;

use std::io::{self, Write};

use tracing::debug;

use super::command::{
    ArgumentMap, command_names, format_command_help, format_root_help, format_version, normalize,
};
use super::parser::{ParseError, ParseOutcome, ParsedCommand, parse_command};
use crate::colors::Painter;
use crate::environment::{NodeRuntime, VersionError};
use crate::envinfo::EnvironmentReporter;
use crate::similarity::Suggester;

/// What a handler receives: positionals plus the normalized flag map.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub command: &'static str,
    pub positionals: Vec<String>,
    pub options: ArgumentMap,
}

impl Invocation {
    pub fn positional(&self, index: usize) -> Option<&str> {
        self.positionals.get(index).map(String::as_str)
    }
}

impl From<ParsedCommand> for Invocation {
    fn from(parsed: ParsedCommand) -> Self {
        Self {
            command: parsed.command.name,
            options: normalize(parsed.command, &parsed.state),
            positionals: parsed.positionals,
        }
    }
}

/// Everything a handler may touch besides its arguments.
pub struct HandlerContext<'a> {
    /// Standard output (or a buffer in tests)
    pub out: &'a mut dyn Write,
    pub painter: Painter,
    pub node: &'a NodeRuntime,
    pub reporter: &'a dyn EnvironmentReporter,
}

/// Terminal state of one dispatch.
#[derive(Debug)]
pub enum DispatchResult {
    /// Handler ran to completion.
    Dispatched(&'static str),
    HelpShown,
    VersionShown,
    UnknownCommand {
        token: String,
        suggestion: Option<&'static str>,
    },
    ParseFailed(ParseError),
    /// Handler returned an error (already printed).
    HandlerFailed(&'static str),
}

impl DispatchResult {
    pub fn exit_code(&self) -> i32 {
        match self {
            DispatchResult::Dispatched(_)
            | DispatchResult::HelpShown
            | DispatchResult::VersionShown => 0,
            DispatchResult::UnknownCommand { .. }
            | DispatchResult::ParseFailed(_)
            | DispatchResult::HandlerFailed(_) => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher {
    suggester: Suggester,
}

impl Dispatcher {
    pub fn new(suggester: Suggester) -> Self {
        Self { suggester }
    }

    /// Closest registered command name to `token`, if any.
    pub fn suggest_command(&self, token: &str) -> Option<&'static str> {
        self.suggester.suggest(token, command_names())
    }

    /// Parse `args` and run whatever they ask for.
    ///
    /// Help, suggestions and handler output go to `ctx.out`; parse and
    /// handler errors go to `err`.
    pub fn dispatch(
        &self,
        args: &[String],
        ctx: &mut HandlerContext<'_>,
        err: &mut dyn Write,
    ) -> io::Result<DispatchResult> {
        let outcome = match parse_command(args) {
            Ok(outcome) => outcome,
            Err(parse_err) => {
                debug!(error = %parse_err, "parse failed");
                write_error(err, &parse_err.render(&ctx.painter))?;
                return Ok(DispatchResult::ParseFailed(parse_err));
            }
        };

        match outcome {
            ParseOutcome::RootHelp => {
                write!(ctx.out, "{}", format_root_help(&ctx.painter))?;
                Ok(DispatchResult::HelpShown)
            }
            ParseOutcome::CommandHelp(command) => {
                write!(ctx.out, "{}", format_command_help(command))?;
                Ok(DispatchResult::HelpShown)
            }
            ParseOutcome::Version => {
                writeln!(ctx.out, "{}", format_version())?;
                Ok(DispatchResult::VersionShown)
            }
            ParseOutcome::UnknownCommand(token) => {
                let suggestion = self.suggest_command(&token);
                debug!(%token, ?suggestion, "unknown command");
                let painter = ctx.painter;
                write!(ctx.out, "{}", format_root_help(&painter))?;
                writeln!(
                    ctx.out,
                    "  {}",
                    painter.error(&format!("Unknown command {}.", painter.token(&token)))
                )?;
                writeln!(ctx.out)?;
                if let Some(candidate) = suggestion {
                    writeln!(
                        ctx.out,
                        "  {}",
                        painter.error(&format!("Did you mean {}?", painter.token(candidate)))
                    )?;
                }
                Ok(DispatchResult::UnknownCommand { token, suggestion })
            }
            ParseOutcome::Command(parsed) => {
                let command = parsed.command;
                let invocation = Invocation::from(parsed);
                debug!(
                    command = command.name,
                    positionals = ?invocation.positionals,
                    options = ?invocation.options,
                    "dispatching"
                );

                match (command.handler)(&invocation, &mut *ctx) {
                    Ok(()) => Ok(DispatchResult::Dispatched(command.name)),
                    Err(handler_err) => {
                        report_handler_error(&handler_err, ctx, err)?;
                        Ok(DispatchResult::HandlerFailed(command.name))
                    }
                }
            }
        }
    }
}

fn write_error(err: &mut dyn Write, message: &str) -> io::Result<()> {
    writeln!(err)?;
    writeln!(err, "  error: {message}")?;
    writeln!(err)
}

/// Version gate failures print like the startup gate (red, stdout);
/// anything else is a plain error on stderr.
fn report_handler_error(
    handler_err: &anyhow::Error,
    ctx: &mut HandlerContext<'_>,
    err: &mut dyn Write,
) -> io::Result<()> {
    if let Some(version_err) = handler_err.downcast_ref::<VersionError>() {
        writeln!(ctx.out, "{}", ctx.painter.error(&version_err.to_string()))
    } else {
        write_error(err, &format!("{handler_err:#}"))
    }
}
