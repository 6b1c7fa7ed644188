//! Environment report for `vertx-graphql info`.
//!
//! The report is produced by an [`EnvironmentReporter`]; the CLI only fixes
//! what it asks for ([`INFO_REQUEST`]) and how ([`INFO_OPTIONS`]). The
//! default [`ProbeReporter`] answers by spawning `--version` probes and
//! `npm ls -g`, and never fails the command when a probe does.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::process::Command;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::config::RuntimeConfig;

/// Which items the report should cover, per section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportRequest {
    pub system: &'static [&'static str],
    pub binaries: &'static [&'static str],
    pub browsers: &'static [&'static str],
    pub npm_global_packages: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Render missing items as `Not Found` instead of skipping them.
    pub show_not_found: bool,
    /// List every distinct version of a package, not just the first.
    pub duplicates: bool,
    /// Search the whole global dependency tree, not only top-level packages.
    pub full_tree: bool,
}

pub const INFO_REQUEST: ReportRequest = ReportRequest {
    system: &["OS", "CPU"],
    binaries: &["Node", "Yarn", "npm"],
    browsers: &["Chrome", "Edge", "Firefox", "Safari"],
    npm_global_packages: &["vertx-graphql-cli"],
};

pub const INFO_OPTIONS: ReportOptions = ReportOptions {
    show_not_found: true,
    duplicates: true,
    full_tree: true,
};

const NOT_FOUND: &str = "Not Found";

pub trait EnvironmentReporter {
    fn report(&self, request: &ReportRequest, options: &ReportOptions) -> anyhow::Result<String>;
}

/// Runs an external program and returns its stdout.
pub trait Probe {
    fn run(&self, program: &OsStr, args: &[&str]) -> Option<String>;
}

/// Probe backed by real processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemProbe;

impl Probe for SystemProbe {
    fn run(&self, program: &OsStr, args: &[&str]) -> Option<String> {
        match Command::new(program).args(args).output() {
            Ok(output) => {
                let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
                if stdout.is_empty() {
                    debug!(?program, status = %output.status, "probe produced no output");
                    None
                } else {
                    Some(stdout)
                }
            }
            Err(err) => {
                debug!(?program, error = %err, "probe could not run");
                None
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct ProbeReporter<P = SystemProbe> {
    probe: P,
    config: RuntimeConfig,
}

impl ProbeReporter<SystemProbe> {
    pub fn system(config: &RuntimeConfig) -> Self {
        Self::new(SystemProbe, config)
    }
}

type Section = (&'static str, Vec<(String, Option<String>)>);

impl<P: Probe> ProbeReporter<P> {
    pub fn new(probe: P, config: &RuntimeConfig) -> Self {
        Self {
            probe,
            config: config.clone(),
        }
    }

    fn probe_version(&self, program: &OsStr) -> Option<String> {
        self.probe
            .run(program, &["--version"])
            .and_then(|out| extract_version(&out))
    }

    fn system_item(&self, item: &str) -> Option<String> {
        match item {
            "OS" => {
                let kernel = if cfg!(unix) {
                    self.probe.run(OsStr::new("uname"), &["-sr"])
                } else {
                    None
                };
                Some(kernel.unwrap_or_else(|| std::env::consts::OS.to_string()))
            }
            "CPU" => {
                let cores = std::thread::available_parallelism().map_or(1, |n| n.get());
                Some(format!("({cores}) {}", std::env::consts::ARCH))
            }
            _ => None,
        }
    }

    fn binary_item(&self, name: &str) -> Option<String> {
        if name == "Node" {
            if let Some(pinned) = &self.config.node_version_override {
                return extract_version(pinned);
            }
            return self.probe_version(&self.config.node_bin);
        }
        self.probe_version(OsStr::new(&name.to_lowercase()))
    }

    fn browser_item(&self, name: &str) -> Option<String> {
        if name == "Safari" {
            if !cfg!(target_os = "macos") {
                return None;
            }
            return self
                .probe
                .run(
                    OsStr::new("defaults"),
                    &[
                        "read",
                        "/Applications/Safari.app/Contents/Info",
                        "CFBundleShortVersionString",
                    ],
                )
                .and_then(|out| extract_version(&out));
        }
        browser_programs(name)
            .iter()
            .find_map(|program| self.probe_version(OsStr::new(program)))
    }

    fn global_packages(&self, names: &[&str], options: &ReportOptions) -> Vec<(String, Option<String>)> {
        let mut args = vec!["ls", "-g", "--json"];
        if !options.full_tree {
            args.push("--depth=0");
        }
        let tree = self
            .probe
            .run(OsStr::new("npm"), &args)
            .and_then(|out| match serde_json::from_str::<NpmNode>(&out) {
                Ok(tree) => Some(tree),
                Err(err) => {
                    warn!(error = %err, "could not read `npm ls -g` output");
                    None
                }
            });

        names
            .iter()
            .map(|name| {
                let versions = tree
                    .as_ref()
                    .map(|tree| tree.versions_of(name))
                    .unwrap_or_default();
                (name.to_string(), format_versions(&versions, options.duplicates))
            })
            .collect()
    }
}

impl<P: Probe> EnvironmentReporter for ProbeReporter<P> {
    fn report(&self, request: &ReportRequest, options: &ReportOptions) -> anyhow::Result<String> {
        let sections: Vec<Section> = vec![
            ("System", collect_items(request.system, |n| self.system_item(n))),
            ("Binaries", collect_items(request.binaries, |n| self.binary_item(n))),
            ("Browsers", collect_items(request.browsers, |n| self.browser_item(n))),
            (
                "npmGlobalPackages",
                self.global_packages(request.npm_global_packages, options),
            ),
        ];
        Ok(render(&sections, options))
    }
}

fn collect_items<F>(names: &[&str], lookup: F) -> Vec<(String, Option<String>)>
where
    F: Fn(&str) -> Option<String>,
{
    names
        .iter()
        .map(|name| (name.to_string(), lookup(name)))
        .collect()
}

fn browser_programs(name: &str) -> &'static [&'static str] {
    match name {
        "Chrome" => &[
            "google-chrome",
            "google-chrome-stable",
            "chromium",
            "chromium-browser",
            "/Applications/Google Chrome.app/Contents/MacOS/Google Chrome",
        ],
        "Edge" => &[
            "microsoft-edge",
            "microsoft-edge-stable",
            "/Applications/Microsoft Edge.app/Contents/MacOS/Microsoft Edge",
        ],
        "Firefox" => &["firefox", "/Applications/Firefox.app/Contents/MacOS/firefox"],
        _ => &[],
    }
}

/// First token that looks like a version: `Google Chrome 120.0.6099.109`
/// -> `120.0.6099.109`, `v18.17.0` -> `18.17.0`.
pub fn extract_version(output: &str) -> Option<String> {
    output.split_whitespace().find_map(|token| {
        let token = token.trim_start_matches(['v', 'V']).trim_end_matches([',', ';', ')']);
        let looks_like_version = token.starts_with(|c: char| c.is_ascii_digit())
            && token.contains('.')
            && token
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '+');
        looks_like_version.then(|| token.to_string())
    })
}

fn format_versions(versions: &[String], duplicates: bool) -> Option<String> {
    let (first, rest) = versions.split_first()?;
    if duplicates && !rest.is_empty() {
        Some(format!("{first} ({})", rest.join(", ")))
    } else {
        Some(first.clone())
    }
}

fn render(sections: &[Section], options: &ReportOptions) -> String {
    let mut out = String::new();
    for (title, entries) in sections {
        let shown: Vec<_> = entries
            .iter()
            .filter(|(_, value)| value.is_some() || options.show_not_found)
            .collect();
        if shown.is_empty() {
            continue;
        }
        out.push_str(&format!("  {title}:\n"));
        for (name, value) in shown {
            out.push_str(&format!(
                "    {name}: {}\n",
                value.as_deref().unwrap_or(NOT_FOUND)
            ));
        }
    }
    out
}

/// Node of `npm ls --json` output.
#[derive(Debug, Default, Deserialize)]
struct NpmNode {
    #[serde(default)]
    version: Option<String>,
    #[serde(default)]
    dependencies: BTreeMap<String, NpmNode>,
}

impl NpmNode {
    /// Distinct versions of `name` below this node. A direct dependency
    /// comes before any nested copy, so the top-level install is first.
    fn versions_of(&self, name: &str) -> Vec<String> {
        let mut found = Vec::new();
        self.collect_versions(name, &mut found);
        found
    }

    fn collect_versions(&self, name: &str, found: &mut Vec<String>) {
        let direct = self.dependencies.get(name).and_then(|dep| dep.version.as_ref());
        if let Some(version) = direct {
            if !found.contains(version) {
                found.push(version.clone());
            }
        }
        for dep in self.dependencies.values() {
            dep.collect_versions(name, found);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakeProbe {
        outputs: HashMap<String, String>,
    }

    impl FakeProbe {
        fn with(mut self, command: &str, output: &str) -> Self {
            self.outputs.insert(command.to_string(), output.to_string());
            self
        }
    }

    impl Probe for FakeProbe {
        fn run(&self, program: &OsStr, args: &[&str]) -> Option<String> {
            let key = format!("{} {}", program.to_string_lossy(), args.join(" "));
            self.outputs.get(&key).cloned()
        }
    }

    const NPM_TREE: &str = r#"{
        "dependencies": {
            "vertx-graphql-cli": { "version": "0.2.0" },
            "some-tool": {
                "version": "1.0.0",
                "dependencies": {
                    "vertx-graphql-cli": { "version": "0.1.0" }
                }
            }
        }
    }"#;

    fn reporter(probe: FakeProbe) -> ProbeReporter<FakeProbe> {
        ProbeReporter::new(probe, &RuntimeConfig::default())
    }

    #[test]
    fn test_extract_version() {
        assert_eq!(extract_version("v18.17.0"), Some("18.17.0".into()));
        assert_eq!(
            extract_version("Google Chrome 120.0.6099.109 "),
            Some("120.0.6099.109".into())
        );
        assert_eq!(extract_version("Mozilla Firefox 121.0"), Some("121.0".into()));
        assert_eq!(extract_version("1.22.19"), Some("1.22.19".into()));
        assert_eq!(extract_version("command not found"), None);
        assert_eq!(extract_version(""), None);
    }

    #[test]
    fn test_report_sections_and_not_found() {
        let probe = FakeProbe::default()
            .with("node --version", "v18.17.0")
            .with("npm --version", "9.6.7")
            .with("firefox --version", "Mozilla Firefox 121.0")
            .with("npm ls -g --json", NPM_TREE);
        let report = reporter(probe).report(&INFO_REQUEST, &INFO_OPTIONS).unwrap();

        assert!(report.contains("  System:\n"));
        assert!(report.contains("    CPU: ("));
        assert!(report.contains("  Binaries:\n    Node: 18.17.0\n    Yarn: Not Found\n    npm: 9.6.7\n"));
        assert!(report.contains("    Chrome: Not Found\n"));
        assert!(report.contains("    Firefox: 121.0\n"));
        assert!(report.contains("  npmGlobalPackages:\n    vertx-graphql-cli: 0.2.0 (0.1.0)\n"));
    }

    #[test]
    fn test_hidden_not_found_and_no_duplicates() {
        let probe = FakeProbe::default()
            .with("npm --version", "9.6.7")
            .with("npm ls -g --json --depth=0", NPM_TREE);
        let options = ReportOptions {
            show_not_found: false,
            duplicates: false,
            full_tree: false,
        };
        let report = reporter(probe).report(&INFO_REQUEST, &options).unwrap();

        assert!(!report.contains(NOT_FOUND));
        assert!(!report.contains("Browsers:"));
        assert!(report.contains("    npm: 9.6.7\n"));
        assert!(report.contains("    vertx-graphql-cli: 0.2.0\n"));
    }

    #[test]
    fn test_top_level_install_comes_before_nested_copies() {
        let tree: NpmNode = serde_json::from_str(NPM_TREE).unwrap();
        assert_eq!(tree.versions_of("vertx-graphql-cli"), vec!["0.2.0", "0.1.0"]);
        assert!(tree.versions_of("left-pad").is_empty());

        // Alphabetical key order must not let a nested copy win.
        let nested_first: NpmNode = serde_json::from_str(
            r#"{ "dependencies": {
                "a-tool": { "dependencies": { "vertx-graphql-cli": { "version": "0.1.0" } } },
                "vertx-graphql-cli": { "version": "0.3.0" }
            } }"#,
        )
        .unwrap();
        assert_eq!(nested_first.versions_of("vertx-graphql-cli"), vec!["0.3.0", "0.1.0"]);
    }

    #[test]
    fn test_pinned_node_version_is_reported() {
        let config = RuntimeConfig {
            node_version_override: Some("v12.22.1".into()),
            ..RuntimeConfig::default()
        };
        let report = ProbeReporter::new(FakeProbe::default(), &config)
            .report(&INFO_REQUEST, &INFO_OPTIONS)
            .unwrap();
        assert!(report.contains("    Node: 12.22.1\n"));
    }

    #[test]
    fn test_broken_npm_output_is_not_fatal() {
        let probe = FakeProbe::default().with("npm ls -g --json", "npm ERR! something");
        let report = reporter(probe).report(&INFO_REQUEST, &INFO_OPTIONS).unwrap();
        assert!(report.contains("    vertx-graphql-cli: Not Found\n"));
    }
}
