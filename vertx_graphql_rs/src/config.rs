//! Runtime configuration.
//!
//! There is no configuration file; the few knobs the CLI has are read from
//! the process environment once at startup.

use std::ffi::OsString;

/// Environment variable naming the Node binary used for version detection.
pub const NODE_BIN_ENV: &str = "VERTX_GRAPHQL_NODE";

/// Environment variable that pins the Node version instead of probing.
pub const NODE_VERSION_ENV: &str = "VERTX_GRAPHQL_NODE_VERSION";

const DEFAULT_NODE_BIN: &str = "node";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Program spawned as `<node_bin> --version`
    pub node_bin: OsString,

    /// Version string used verbatim when set (e.g. `v18.17.0`)
    pub node_version_override: Option<String>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            node_bin: OsString::from(DEFAULT_NODE_BIN),
            node_version_override: None,
        }
    }
}

impl RuntimeConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var_os(key))
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let mut config = Self::default();
        if let Some(bin) = lookup(NODE_BIN_ENV).filter(|v| !v.is_empty()) {
            config.node_bin = bin;
        }
        config.node_version_override = lookup(NODE_VERSION_ENV)
            .and_then(|v| v.into_string().ok())
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty());
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<OsString> {
        let map: HashMap<String, OsString> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), OsString::from(v)))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, RuntimeConfig::default());
        assert_eq!(config.node_bin, OsString::from("node"));
    }

    #[test]
    fn test_reads_overrides() {
        let config = RuntimeConfig::from_lookup(lookup_from(&[
            (NODE_BIN_ENV, "/opt/node/bin/node"),
            (NODE_VERSION_ENV, " v18.17.0 "),
        ]));
        assert_eq!(config.node_bin, OsString::from("/opt/node/bin/node"));
        assert_eq!(config.node_version_override.as_deref(), Some("v18.17.0"));
    }

    #[test]
    fn test_empty_values_are_ignored() {
        let config =
            RuntimeConfig::from_lookup(lookup_from(&[(NODE_BIN_ENV, ""), (NODE_VERSION_ENV, "")]));
        assert_eq!(config, RuntimeConfig::default());
    }
}
