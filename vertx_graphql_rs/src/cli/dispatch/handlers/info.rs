//! Environment report handler.

use super::super::{HandlerContext, Invocation};
use crate::envinfo::{INFO_OPTIONS, INFO_REQUEST};

/// Handle `info`: print the environment report for bug reports.
pub fn handle_info(_invocation: &Invocation, ctx: &mut HandlerContext<'_>) -> anyhow::Result<()> {
    writeln!(ctx.out, "{}", ctx.painter.header("\nEnvironment Info:"))?;
    let report = ctx.reporter.report(&INFO_REQUEST, &INFO_OPTIONS)?;
    writeln!(ctx.out, "{report}")?;
    Ok(())
}
