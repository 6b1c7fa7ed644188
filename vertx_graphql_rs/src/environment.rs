//! Node runtime detection and version gating.
//!
//! The CLI scaffolds and drives Node-based projects, so before anything else
//! it checks that the Node runtime on the machine satisfies the declared
//! `engines` range. Failing that check is fatal; running an end-of-life but
//! still compatible release only produces an advisory.

use std::fmt;
use std::process::Command;

use semver::{Version, VersionReq};
use thiserror::Error;
use tracing::debug;

use crate::config::RuntimeConfig;

/// Node range required by the CLI as a whole.
pub const REQUIRED_NODE: &str = ">=8.9";

/// Label used in the fatal message for the tool-wide check.
pub const TOOL_LABEL: &str = "vertx-graphql-cli";

/// Node range required by the `ui` command.
pub const UI_REQUIRED_NODE: &str = ">=8.6";

pub const UI_LABEL: &str = "vertx-graphql ui";

/// Releases that still work but are past end-of-life.
const END_OF_LIFE_RANGE: &str = "9.x";

/// The Node runtime as seen by the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeRuntime {
    Detected(Version),
    /// No runtime found, or its `--version` output was unreadable.
    Missing,
}

impl NodeRuntime {
    pub fn version(&self) -> Option<&Version> {
        match self {
            NodeRuntime::Detected(version) => Some(version),
            NodeRuntime::Missing => None,
        }
    }
}

impl fmt::Display for NodeRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRuntime::Detected(version) => write!(f, "v{version}"),
            NodeRuntime::Missing => f.write_str("unknown"),
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error(
        "You are using Node {running}, but this version of {label} requires Node {wanted}.\nPlease upgrade your Node version."
    )]
    Unsatisfied {
        running: String,
        label: String,
        wanted: String,
    },

    #[error(
        "Could not find a Node runtime, but this version of {label} requires Node {wanted}.\nPlease install Node and make sure it is on your PATH."
    )]
    RuntimeNotFound { label: String, wanted: String },

    #[error("Invalid Node version range '{range}': {reason}")]
    InvalidRange { range: String, reason: String },
}

/// Parse the output of `node --version` (`v18.17.0`).
///
/// Missing minor/patch components are treated as zero so that pinned
/// values like `v18` still work.
pub fn parse_node_version(raw: &str) -> Option<Version> {
    let token = raw.split_whitespace().next()?;
    let token = token.trim_start_matches(['v', 'V']);
    if let Ok(version) = Version::parse(token) {
        return Some(version);
    }

    let mut parts = token.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next().map_or(Some(0), |p| p.parse().ok())?;
    let patch = parts.next().map_or(Some(0), |p| p.parse().ok())?;
    if parts.next().is_some() {
        return None;
    }
    Some(Version::new(major, minor, patch))
}

/// Determine the Node runtime, honoring the pinned version if configured.
pub fn detect_node(config: &RuntimeConfig) -> NodeRuntime {
    if let Some(pinned) = &config.node_version_override {
        debug!(pinned = %pinned, "using pinned node version");
        return parse_node_version(pinned).map_or(NodeRuntime::Missing, NodeRuntime::Detected);
    }

    let output = match Command::new(&config.node_bin).arg("--version").output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => {
            debug!(status = %output.status, "node --version failed");
            return NodeRuntime::Missing;
        }
        Err(err) => {
            debug!(error = %err, bin = ?config.node_bin, "could not spawn node");
            return NodeRuntime::Missing;
        }
    };

    let stdout = String::from_utf8_lossy(&output.stdout);
    let runtime = parse_node_version(&stdout).map_or(NodeRuntime::Missing, NodeRuntime::Detected);
    debug!(%runtime, "detected node runtime");
    runtime
}

fn parse_range(range: &str) -> Result<VersionReq, VersionError> {
    VersionReq::parse(range).map_err(|err| VersionError::InvalidRange {
        range: range.to_string(),
        reason: err.to_string(),
    })
}

/// Check that `runtime` satisfies `wanted`; `label` names the tool or
/// subcommand in the error message.
pub fn check_node_version(
    runtime: &NodeRuntime,
    wanted: &str,
    label: &str,
) -> Result<(), VersionError> {
    let req = parse_range(wanted)?;
    match runtime {
        NodeRuntime::Detected(version) if req.matches(version) => Ok(()),
        NodeRuntime::Detected(_) => Err(VersionError::Unsatisfied {
            running: runtime.to_string(),
            label: label.to_string(),
            wanted: wanted.to_string(),
        }),
        NodeRuntime::Missing => Err(VersionError::RuntimeNotFound {
            label: label.to_string(),
            wanted: wanted.to_string(),
        }),
    }
}

/// Advisory for compatible but end-of-life releases. Never fatal.
pub fn check_recommendations(runtime: &NodeRuntime) -> Option<String> {
    let version = runtime.version()?;
    let eol = parse_range(END_OF_LIFE_RANGE).ok()?;
    if !eol.matches(version) {
        return None;
    }
    Some(format!(
        "You are using Node {runtime}.\n\
         Node.js 9.x has already reached end-of-life and will not be supported in future major releases.\n\
         It's strongly recommended to use an active LTS version instead."
    ))
}
