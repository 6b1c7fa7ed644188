//! Terminal color utilities for CLI output.
//!
//! Provides ANSI color codes and semantic helpers for the highlighted
//! messages the CLI prints (version gate, unknown commands, parse errors).

use std::io::IsTerminal;

use crate::types::ColorMode;

// ============================================================================
// ANSI Color Codes
// ============================================================================

pub const RED: &str = "\x1b[31m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

pub const BOLD: &str = "\x1b[1m";
pub const RESET: &str = "\x1b[0m";

// ============================================================================
// Color State
// ============================================================================

/// Determines if colors should be used based on ColorMode and terminal detection.
pub fn is_enabled(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => std::io::stdout().is_terminal(),
    }
}

/// Colorizer that can be passed around to format functions.
#[derive(Clone, Copy, Debug)]
pub struct Painter {
    enabled: bool,
}

impl Painter {
    pub fn new(mode: ColorMode) -> Self {
        Self {
            enabled: is_enabled(mode),
        }
    }

    /// Painter that never emits escape codes.
    pub fn plain() -> Self {
        Self { enabled: false }
    }

    /// Fatal messages, unknown commands - RED
    pub fn error(&self, s: &str) -> String {
        self.wrap(s, RED)
    }

    /// Offending tokens inside messages - YELLOW
    pub fn token(&self, s: &str) -> String {
        self.wrap(s, YELLOW)
    }

    /// Commands the user can copy - CYAN
    pub fn command(&self, s: &str) -> String {
        self.wrap(s, CYAN)
    }

    /// Headers, titles - BOLD
    pub fn header(&self, s: &str) -> String {
        self.wrap(s, BOLD)
    }

    /// Color `s` with `code`. A styled span nested inside `s` ends with
    /// `RESET`, so `code` is re-opened after each one.
    pub fn wrap(&self, s: &str, code: &str) -> String {
        if self.enabled {
            let reopened = s.replace(RESET, &format!("{RESET}{code}"));
            format!("{code}{reopened}{RESET}")
        } else {
            s.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_painter_disabled() {
        let p = Painter { enabled: false };
        assert_eq!(p.error("test"), "test");
        assert_eq!(p.token("test"), "test");
        assert_eq!(p.command("test"), "test");
    }

    #[test]
    fn test_painter_enabled() {
        let p = Painter { enabled: true };
        assert_eq!(p.error("test"), "\x1b[31mtest\x1b[0m");
        assert_eq!(p.token("test"), "\x1b[33mtest\x1b[0m");
        assert_eq!(p.command("test"), "\x1b[36mtest\x1b[0m");
        assert_eq!(p.header("test"), "\x1b[1mtest\x1b[0m");
    }

    #[test]
    fn test_nested_highlight_keeps_outer_color() {
        let p = Painter { enabled: true };
        let msg = p.error(&format!("Unknown command {}.", p.token("crete")));
        assert_eq!(
            msg,
            "\x1b[31mUnknown command \x1b[33mcrete\x1b[0m\x1b[31m.\x1b[0m"
        );

        let plain = Painter::plain();
        assert_eq!(
            plain.error(&format!("Did you mean {}?", plain.token("create"))),
            "Did you mean create?"
        );
    }

    #[test]
    fn test_color_mode_detection() {
        assert!(is_enabled(ColorMode::Always));
        assert!(!is_enabled(ColorMode::Never));
        // Auto depends on terminal, can't reliably test
    }
}
