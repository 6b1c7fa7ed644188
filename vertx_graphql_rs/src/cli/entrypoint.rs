//! Process entry point shared by the `vertx-graphql` binary.
//!
//! Order matters: logging, configuration, the Node version gate, then
//! dispatch. This is the only place that calls `std::process::exit`.

use std::io::{self, Write};

use tracing_subscriber::EnvFilter;

use super::dispatch::{Dispatcher, HandlerContext};
use crate::colors::Painter;
use crate::config::RuntimeConfig;
use crate::environment::{
    REQUIRED_NODE, TOOL_LABEL, check_node_version, check_recommendations, detect_node,
};
use crate::envinfo::ProbeReporter;
use crate::types::ColorMode;

const DEFAULT_LOG_FILTER: &str = "warn";

/// Install the stderr tracing subscriber. `RUST_LOG` overrides the default
/// `warn` filter.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(filter)
        .try_init();
}

/// Run the CLI. This is the shared main() body.
pub fn run() -> io::Result<()> {
    init_tracing();

    // nosemgrep: rust.lang.security.args.args
    let raw_args: Vec<String> = std::env::args().skip(1).collect();
    let config = RuntimeConfig::from_env();
    let painter = Painter::new(ColorMode::Auto);

    let node = detect_node(&config);
    if let Err(err) = check_node_version(&node, REQUIRED_NODE, TOOL_LABEL) {
        println!("{}", painter.error(&err.to_string()));
        std::process::exit(1);
    }
    if let Some(warning) = check_recommendations(&node) {
        println!("{}", painter.error(&warning));
    }

    let reporter = ProbeReporter::system(&config);
    let mut stdout = io::stdout().lock();
    let mut stderr = io::stderr().lock();
    let mut ctx = HandlerContext {
        out: &mut stdout,
        painter,
        node: &node,
        reporter: &reporter,
    };

    let result = Dispatcher::default().dispatch(&raw_args, &mut ctx, &mut stderr)?;
    stdout.flush()?;
    stderr.flush()?;

    let code = result.exit_code();
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}
