//! Static declarations of commands, positional arguments and flags.

use super::args::{Value, flag_key};
use crate::cli::dispatch::{HandlerContext, Invocation};

/// Handler invoked for a matched command.
pub type Handler = fn(&Invocation, &mut HandlerContext<'_>) -> anyhow::Result<()>;

/// How many values a flag consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagArity {
    /// `--open`: presence sets `true`.
    Switch,
    /// `--git [message]`: bare sets `true`, otherwise takes the next token.
    Optional(&'static str),
    /// `--port <port>`: value is mandatory.
    Required(&'static str),
    /// `--no-git`: presence sets the named flag's key to `false`; that key
    /// defaults to `true`.
    Negate(&'static str),
}

/// Compile-time default for a flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagDefault {
    Bool(bool),
    Str(&'static str),
}

impl From<FlagDefault> for Value {
    fn from(default: FlagDefault) -> Self {
        match default {
            FlagDefault::Bool(b) => Value::Bool(b),
            FlagDefault::Str(s) => Value::Str(s.to_string()),
        }
    }
}

/// One command-line option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlagDescriptor {
    pub short: Option<char>,
    /// Long name without the leading `--`.
    pub long: &'static str,
    pub arity: FlagArity,
    pub default: Option<FlagDefault>,
    pub description: &'static str,
}

impl FlagDescriptor {
    pub const fn switch(short: Option<char>, long: &'static str, description: &'static str) -> Self {
        Self {
            short,
            long,
            arity: FlagArity::Switch,
            default: None,
            description,
        }
    }

    pub const fn optional(
        short: Option<char>,
        long: &'static str,
        placeholder: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            short,
            long,
            arity: FlagArity::Optional(placeholder),
            default: None,
            description,
        }
    }

    pub const fn required(
        short: Option<char>,
        long: &'static str,
        placeholder: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            short,
            long,
            arity: FlagArity::Required(placeholder),
            default: None,
            description,
        }
    }

    pub const fn negate(
        short: Option<char>,
        long: &'static str,
        negates: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            short,
            long,
            arity: FlagArity::Negate(negates),
            default: None,
            description,
        }
    }

    pub const fn with_default(mut self, default: FlagDefault) -> Self {
        self.default = Some(default);
        self
    }

    /// The flag spelled as in help output: `-p, --port <port>`.
    pub fn flags(&self) -> String {
        let mut out = String::new();
        if let Some(short) = self.short {
            out.push('-');
            out.push(short);
            out.push_str(", ");
        }
        out.push_str("--");
        out.push_str(self.long);
        match self.arity {
            FlagArity::Switch | FlagArity::Negate(_) => {}
            FlagArity::Optional(placeholder) => {
                out.push_str(&format!(" [{placeholder}]"));
            }
            FlagArity::Required(placeholder) => {
                out.push_str(&format!(" <{placeholder}>"));
            }
        }
        out
    }

    pub fn takes_value(&self) -> bool {
        !matches!(self.arity, FlagArity::Switch | FlagArity::Negate(_))
    }

    /// Key the flag's value is stored under. A negating flag writes to the
    /// key of the flag it negates.
    pub fn key(&self) -> String {
        match self.arity {
            FlagArity::Negate(negates) => flag_key(negates),
            _ => flag_key(self.long),
        }
    }

    /// Value recorded when a flag that takes no value is present.
    pub fn presence_value(&self) -> Value {
        Value::Bool(!matches!(self.arity, FlagArity::Negate(_)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PositionalDescriptor {
    pub name: &'static str,
    pub required: bool,
}

impl PositionalDescriptor {
    pub const fn required(name: &'static str) -> Self {
        Self {
            name,
            required: true,
        }
    }

    pub const fn optional(name: &'static str) -> Self {
        Self {
            name,
            required: false,
        }
    }

    /// `<name>` or `[name]`.
    pub fn usage(&self) -> String {
        if self.required {
            format!("<{}>", self.name)
        } else {
            format!("[{}]", self.name)
        }
    }
}

/// A named subcommand: declared once at startup, never mutated.
#[derive(Debug, Clone, Copy)]
pub struct CommandDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub positionals: &'static [PositionalDescriptor],
    pub flags: &'static [FlagDescriptor],
    pub handler: Handler,
}

impl CommandDescriptor {
    /// Names that belong to the command machinery itself. A flag whose
    /// normalized key lands on one of these is never handed to a handler.
    pub const RESERVED_NAMES: &'static [&'static str] = &[
        "action",
        "alias",
        "arguments",
        "commands",
        "description",
        "handler",
        "help",
        "options",
        "outputHelp",
        "parent",
        "parse",
        "positionals",
        "usage",
        "version",
    ];

    pub fn is_reserved(key: &str) -> bool {
        Self::RESERVED_NAMES.contains(&key)
    }

    pub fn find_long(&self, long: &str) -> Option<&'static FlagDescriptor> {
        self.flags.iter().find(|f| f.long == long)
    }

    pub fn find_short(&self, short: char) -> Option<&'static FlagDescriptor> {
        self.flags.iter().find(|f| f.short == Some(short))
    }

    /// `create [options] <app-name>`
    pub fn usage(&self) -> String {
        let mut usage = self.name.to_string();
        if !self.flags.is_empty() {
            usage.push_str(" [options]");
        }
        for positional in self.positionals {
            usage.push(' ');
            usage.push_str(&positional.usage());
        }
        usage
    }
}
