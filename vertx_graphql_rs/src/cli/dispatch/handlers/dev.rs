//! Development server and production build handlers.

use tracing::debug;

use super::super::{HandlerContext, Invocation};

/// Handle `serve [entry]`.
pub fn handle_serve(invocation: &Invocation, _ctx: &mut HandlerContext<'_>) -> anyhow::Result<()> {
    debug!(
        entry = invocation.positional(0),
        port = invocation.options.get_str("port"),
        open = invocation.options.flag("open"),
        copy = invocation.options.flag("copy"),
        "serve requested"
    );
    Ok(())
}

/// Handle `build [entry]`.
pub fn handle_build(invocation: &Invocation, _ctx: &mut HandlerContext<'_>) -> anyhow::Result<()> {
    debug!(
        entry = invocation.positional(0),
        target = invocation.options.get_str("target"),
        name = invocation.options.get_str("name"),
        dest = invocation.options.get_str("dest"),
        "build requested"
    );
    Ok(())
}
