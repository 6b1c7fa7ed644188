//! Small shared types.

/// When to emit ANSI color codes.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}
