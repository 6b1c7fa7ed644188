//! Argument parsing: `vertx-graphql <command> [options] [args...]`.
//!
//! The first positional token selects the command. Everything after it is
//! matched against that command's flag table; `--` ends option parsing.

use super::super::command::{
    CommandDescriptor, FlagArity, FlagDescriptor, FlagState, Value, find_command,
};
use super::error::ParseError;

/// A command matched and its arguments parsed.
#[derive(Debug, Clone)]
pub struct ParsedCommand {
    pub command: &'static CommandDescriptor,
    pub positionals: Vec<String>,
    pub state: FlagState,
}

/// What the invocation asks for.
#[derive(Debug, Clone)]
pub enum ParseOutcome {
    /// No arguments, or `--help` before any command.
    RootHelp,
    CommandHelp(&'static CommandDescriptor),
    Version,
    Command(ParsedCommand),
    /// First positional did not name a registered command.
    UnknownCommand(String),
}

fn is_help(arg: &str) -> bool {
    arg == "-h" || arg == "--help"
}

fn is_flag_like(arg: &str) -> bool {
    arg.len() > 1 && arg.starts_with('-')
}

/// Help flags count only before `--`.
fn wants_help(args: &[String]) -> bool {
    args.iter()
        .take_while(|a| a.as_str() != "--")
        .any(|a| is_help(a))
}

/// Parse raw arguments (without the program name).
pub fn parse_command(args: &[String]) -> Result<ParseOutcome, ParseError> {
    if args.is_empty() {
        return Ok(ParseOutcome::RootHelp);
    }

    // Only help, version and `--` may precede the command name.
    let i = match args[0].as_str() {
        "-h" | "--help" => return Ok(ParseOutcome::RootHelp),
        "-v" | "--version" => return Ok(ParseOutcome::Version),
        "--" => 1,
        arg if is_flag_like(arg) => {
            let name = arg.split('=').next().unwrap_or(arg);
            return Err(ParseError::UnknownOption(name.to_string()));
        }
        _ => 0,
    };

    let Some(token) = args.get(i) else {
        return Ok(ParseOutcome::RootHelp);
    };
    let rest = &args[i + 1..];

    let Some(command) = find_command(token) else {
        if wants_help(rest) {
            return Ok(ParseOutcome::RootHelp);
        }
        return Ok(ParseOutcome::UnknownCommand(token.clone()));
    };

    if wants_help(rest) {
        return Ok(ParseOutcome::CommandHelp(command));
    }

    parse_command_args(command, rest).map(ParseOutcome::Command)
}

/// Parse the arguments following a matched command name.
pub fn parse_command_args(
    command: &'static CommandDescriptor,
    args: &[String],
) -> Result<ParsedCommand, ParseError> {
    let mut state = FlagState::with_defaults(command);
    let mut positionals = Vec::new();
    let mut first_unknown: Option<String> = None;
    let mut options_done = false;
    let mut i = 0;

    while i < args.len() {
        let arg = args[i].as_str();
        i += 1;

        if options_done || !is_flag_like(arg) {
            positionals.push(arg.to_string());
            continue;
        }
        if arg == "--" {
            options_done = true;
            continue;
        }

        if let Some(long) = arg.strip_prefix("--") {
            let (name, inline) = match long.split_once('=') {
                Some((name, value)) => (name, Some(value)),
                None => (long, None),
            };
            let Some(flag) = command.find_long(name) else {
                first_unknown.get_or_insert_with(|| format!("--{name}"));
                continue;
            };
            if inline.is_some() && !flag.takes_value() {
                first_unknown.get_or_insert_with(|| arg.to_string());
                continue;
            }
            let value = take_value(flag, inline, args, &mut i)?;
            state.set(&flag.key(), value);
            continue;
        }

        // Short form: `-o`, clustered switches `-oc`, or attached value `-p3000`.
        let cluster = &arg[1..];
        for (offset, short) in cluster.char_indices() {
            let Some(flag) = command.find_short(short) else {
                first_unknown.get_or_insert_with(|| format!("-{short}"));
                continue;
            };
            if !flag.takes_value() {
                state.set(&flag.key(), flag.presence_value());
                continue;
            }
            let attached = &cluster[offset + short.len_utf8()..];
            let inline = (!attached.is_empty()).then_some(attached);
            let value = take_value(flag, inline, args, &mut i)?;
            state.set(&flag.key(), value);
            break;
        }
    }

    if let Some(option) = first_unknown {
        return Err(ParseError::UnknownOption(option));
    }

    for (index, positional) in command.positionals.iter().enumerate() {
        if positional.required && positionals.len() <= index {
            return Err(ParseError::MissingArgument(positional.name.to_string()));
        }
    }

    Ok(ParsedCommand {
        command,
        positionals,
        state,
    })
}

/// Resolve the value of a flag, consuming the next argument when needed.
fn take_value(
    flag: &FlagDescriptor,
    inline: Option<&str>,
    args: &[String],
    i: &mut usize,
) -> Result<Value, ParseError> {
    if let Some(value) = inline {
        return Ok(Value::Str(value.to_string()));
    }
    let next = args.get(*i).map(String::as_str);
    match flag.arity {
        FlagArity::Switch | FlagArity::Negate(_) => Ok(flag.presence_value()),
        FlagArity::Optional(_) => match next {
            Some(value) if !is_flag_like(value) => {
                *i += 1;
                Ok(Value::Str(value.to_string()))
            }
            _ => Ok(Value::Bool(true)),
        },
        FlagArity::Required(_) => match next {
            Some(value) if !is_flag_like(value) => {
                *i += 1;
                Ok(Value::Str(value.to_string()))
            }
            got => Err(ParseError::OptionMissingArgument {
                flags: flag.flags(),
                got: got.map(str::to_string),
            }),
        },
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn parse_ok(list: &[&str]) -> ParsedCommand {
        match parse_command(&args(list)).unwrap() {
            ParseOutcome::Command(parsed) => parsed,
            other => panic!("Expected command, got {other:?}"),
        }
    }

    #[test]
    fn test_no_args_is_root_help() {
        assert!(matches!(parse_command(&[]), Ok(ParseOutcome::RootHelp)));
    }

    #[test]
    fn test_global_flags() {
        assert!(matches!(
            parse_command(&args(&["--help"])),
            Ok(ParseOutcome::RootHelp)
        ));
        assert!(matches!(
            parse_command(&args(&["-v"])),
            Ok(ParseOutcome::Version)
        ));
        assert!(matches!(
            parse_command(&args(&["--version"])),
            Ok(ParseOutcome::Version)
        ));
    }

    #[test]
    fn test_unknown_global_flag() {
        let err = parse_command(&args(&["--nope=1"])).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("--nope".into()));
    }

    #[test]
    fn test_unknown_command() {
        match parse_command(&args(&["crete", "my-app"])).unwrap() {
            ParseOutcome::UnknownCommand(token) => assert_eq!(token, "crete"),
            other => panic!("Expected unknown command, got {other:?}"),
        }
    }

    #[test]
    fn test_command_help() {
        match parse_command(&args(&["serve", "--help"])).unwrap() {
            ParseOutcome::CommandHelp(command) => assert_eq!(command.name, "serve"),
            other => panic!("Expected command help, got {other:?}"),
        }
        // help after `--` is a positional
        let parsed = parse_ok(&["serve", "--", "--help"]);
        assert_eq!(parsed.positionals, vec!["--help"]);
    }

    #[test]
    fn test_create_with_switches() {
        let parsed = parse_ok(&["create", "my-app", "-d", "--force", "--skipGetStarted"]);
        assert_eq!(parsed.command.name, "create");
        assert_eq!(parsed.positionals, vec!["my-app"]);
        assert_eq!(parsed.state.get("default"), Some(&Value::Bool(true)));
        assert_eq!(parsed.state.get("force"), Some(&Value::Bool(true)));
        assert_eq!(parsed.state.get("skipGetStarted"), Some(&Value::Bool(true)));
        assert_eq!(parsed.state.get("bare"), None);
    }

    #[test]
    fn test_optional_value_flag() {
        let bare = parse_ok(&["create", "my-app", "--git"]);
        assert_eq!(bare.state.get("git"), Some(&Value::Bool(true)));

        let with_message = parse_ok(&["create", "my-app", "-g", "initial commit"]);
        assert_eq!(
            with_message.state.get("git"),
            Some(&Value::Str("initial commit".into()))
        );

        let before_flag = parse_ok(&["create", "my-app", "-g", "-f"]);
        assert_eq!(before_flag.state.get("git"), Some(&Value::Bool(true)));
        assert_eq!(before_flag.state.get("force"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_no_git_negates_git() {
        let default = parse_ok(&["create", "my-app"]);
        assert_eq!(default.state.get("git"), Some(&Value::Bool(true)));

        for flag in ["--no-git", "-n"] {
            let parsed = parse_ok(&["create", "my-app", flag]);
            assert_eq!(parsed.state.get("git"), Some(&Value::Bool(false)));
            assert_eq!(parsed.state.get("noGit"), None);
        }

        // Last one wins.
        let negated = parse_ok(&["create", "my-app", "-g", "-n"]);
        assert_eq!(negated.state.get("git"), Some(&Value::Bool(false)));
        let restored = parse_ok(&["create", "my-app", "--no-git", "--git", "init"]);
        assert_eq!(restored.state.get("git"), Some(&Value::Str("init".into())));

        assert_eq!(
            parse_command(&args(&["create", "my-app", "--no-git=x"])).unwrap_err(),
            ParseError::UnknownOption("--no-git=x".into())
        );
    }

    #[test]
    fn test_required_value_forms() {
        for list in [
            &["serve", "--port", "3000"][..],
            &["serve", "--port=3000"][..],
            &["serve", "-p", "3000"][..],
            &["serve", "-p3000"][..],
        ] {
            let parsed = parse_ok(list);
            assert_eq!(
                parsed.state.get("port"),
                Some(&Value::Str("3000".into())),
                "{list:?}"
            );
        }
    }

    #[test]
    fn test_clustered_switches() {
        let parsed = parse_ok(&["serve", "-oc", "src/main.js"]);
        assert_eq!(parsed.state.get("open"), Some(&Value::Bool(true)));
        assert_eq!(parsed.state.get("copy"), Some(&Value::Bool(true)));
        assert_eq!(parsed.positionals, vec!["src/main.js"]);
    }

    #[test]
    fn test_cluster_ending_in_value_flag() {
        let parsed = parse_ok(&["serve", "-op", "8081"]);
        assert_eq!(parsed.state.get("open"), Some(&Value::Bool(true)));
        assert_eq!(parsed.state.get("port"), Some(&Value::Str("8081".into())));
    }

    #[test]
    fn test_later_flag_overrides() {
        let parsed = parse_ok(&["build", "-d", "out", "--dest", "public"]);
        assert_eq!(parsed.state.get("dest"), Some(&Value::Str("public".into())));
    }

    #[test]
    fn test_missing_required_positional() {
        let err = parse_command(&args(&["create"])).unwrap_err();
        assert_eq!(err, ParseError::MissingArgument("app-name".into()));
    }

    #[test]
    fn test_optional_positional_may_be_absent() {
        let parsed = parse_ok(&["build"]);
        assert!(parsed.positionals.is_empty());
    }

    #[test]
    fn test_unknown_option() {
        let err = parse_command(&args(&["serve", "--nope"])).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("--nope".into()));
        let err = parse_command(&args(&["serve", "-x"])).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("-x".into()));
    }

    #[test]
    fn test_unknown_option_wins_over_missing_argument() {
        let err = parse_command(&args(&["create", "--nope"])).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("--nope".into()));
    }

    #[test]
    fn test_switch_with_inline_value_is_unknown() {
        let err = parse_command(&args(&["serve", "--open=yes"])).unwrap_err();
        assert_eq!(err, ParseError::UnknownOption("--open=yes".into()));
    }

    #[test]
    fn test_option_missing_argument() {
        let err = parse_command(&args(&["serve", "--port"])).unwrap_err();
        assert_eq!(
            err,
            ParseError::OptionMissingArgument {
                flags: "-p, --port <port>".into(),
                got: None
            }
        );

        let err = parse_command(&args(&["serve", "-p", "--open"])).unwrap_err();
        assert_eq!(
            err,
            ParseError::OptionMissingArgument {
                flags: "-p, --port <port>".into(),
                got: Some("--open".into())
            }
        );
    }

    #[test]
    fn test_double_dash_ends_options() {
        let parsed = parse_ok(&["build", "--", "-weird-entry.js"]);
        assert_eq!(parsed.positionals, vec!["-weird-entry.js"]);
    }

    #[test]
    fn test_ui_uppercase_shorts() {
        let parsed = parse_ok(&["ui", "-H", "0.0.0.0", "-D", "--headless"]);
        assert_eq!(parsed.state.get("host"), Some(&Value::Str("0.0.0.0".into())));
        assert_eq!(parsed.state.get("dev"), Some(&Value::Bool(true)));
        assert_eq!(parsed.state.get("headless"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_extra_positionals_are_kept() {
        let parsed = parse_ok(&["info", "extra", "args"]);
        assert_eq!(parsed.positionals, vec!["extra", "args"]);
    }
}
