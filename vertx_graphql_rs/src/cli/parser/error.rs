//! Parse failures and their highlighted rendering.

use thiserror::Error;

use crate::colors::Painter;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A required positional (`<app-name>`) was not supplied.
    #[error("Missing required argument <{0}>.")]
    MissingArgument(String),

    #[error("Unknown option {0}.")]
    UnknownOption(String),

    /// A value-taking flag had no value; `got` is the flag-like token found
    /// in its place, if any.
    #[error("Missing required argument for option {flags}{}", got_suffix(.got))]
    OptionMissingArgument { flags: String, got: Option<String> },
}

fn got_suffix(got: &Option<String>) -> String {
    got.as_ref().map(|g| format!(", got {g}")).unwrap_or_default()
}

impl ParseError {
    /// The message with the offending token highlighted.
    pub fn render(&self, painter: &Painter) -> String {
        match self {
            ParseError::MissingArgument(name) => {
                format!("Missing required argument {}.", painter.token(&format!("<{name}>")))
            }
            ParseError::UnknownOption(option) => {
                format!("Unknown option {}.", painter.token(option))
            }
            ParseError::OptionMissingArgument { flags, got } => {
                let mut msg = format!("Missing required argument for option {}", painter.token(flags));
                if let Some(got) = got {
                    msg.push_str(&format!(", got {}", painter.token(got)));
                }
                msg
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_messages() {
        assert_eq!(
            ParseError::MissingArgument("app-name".into()).to_string(),
            "Missing required argument <app-name>."
        );
        assert_eq!(
            ParseError::UnknownOption("--foo".into()).to_string(),
            "Unknown option --foo."
        );
        assert_eq!(
            ParseError::OptionMissingArgument {
                flags: "-p, --port <port>".into(),
                got: None
            }
            .to_string(),
            "Missing required argument for option -p, --port <port>"
        );
        assert_eq!(
            ParseError::OptionMissingArgument {
                flags: "-p, --port <port>".into(),
                got: Some("--open".into())
            }
            .to_string(),
            "Missing required argument for option -p, --port <port>, got --open"
        );
    }

    #[test]
    fn test_render_matches_plain_without_color() {
        let painter = Painter::plain();
        let errors = [
            ParseError::MissingArgument("app-name".into()),
            ParseError::UnknownOption("-x".into()),
            ParseError::OptionMissingArgument {
                flags: "-d, --dest <dir>".into(),
                got: Some("-t".into()),
            },
        ];
        for err in errors {
            assert_eq!(err.render(&painter), err.to_string());
        }
    }
}
