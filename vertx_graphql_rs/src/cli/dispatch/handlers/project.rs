//! Project scaffolding handler.

use anyhow::Context;
use tracing::debug;

use super::super::{HandlerContext, Invocation};

/// Handle `create <app-name>`.
///
/// Resolves the app name and options; project generation itself is not
/// part of this tool yet.
pub fn handle_create(invocation: &Invocation, _ctx: &mut HandlerContext<'_>) -> anyhow::Result<()> {
    let app_name = invocation
        .positional(0)
        .context("create requires an <app-name>")?;

    debug!(
        app_name,
        git = ?invocation.options.get("git"),
        init_git = invocation.options.flag("git"),
        force = invocation.options.flag("force"),
        "create requested"
    );
    Ok(())
}
