//! UI server handler.

use tracing::debug;

use super::super::{HandlerContext, Invocation};
use crate::environment::{UI_LABEL, UI_REQUIRED_NODE, check_node_version};

/// Handle `ui`. The UI has its own Node requirement.
pub fn handle_ui(invocation: &Invocation, ctx: &mut HandlerContext<'_>) -> anyhow::Result<()> {
    check_node_version(ctx.node, UI_REQUIRED_NODE, UI_LABEL)?;

    debug!(
        host = invocation.options.get_str("host"),
        port = invocation.options.get_str("port"),
        dev = invocation.options.flag("dev"),
        quiet = invocation.options.flag("quiet"),
        headless = invocation.options.flag("headless"),
        "ui requested"
    );
    Ok(())
}
