use std::path::PathBuf;

use podium_core::{
    input::InputEvent,
    render::{ColorParseError, Rgb},
};
use thiserror::Error;

pub(super) const HELP: &str = "\
Keys (one per line):
  n, next     next segment          p, prev     previous segment
  f, focus    toggle focus mode     t           next theme
  +           larger font           -           smaller font
  >           faster                <           slower
Commands:
  open PATH        load another file
  theme NAME       select a theme preset
  wpm N            set reading speed (10-500)
  size PX          set font size (10-60)
  colors BG FG     custom colors, e.g. colors #1E1E1E #DCDCDC
  outline          list all segments
  help             show this help
  quit             leave";

#[derive(Clone, Debug, PartialEq)]
pub(super) enum Command {
    Key(InputEvent),
    Open(PathBuf),
    Theme(String),
    Wpm(i64),
    Size(i64),
    Colors(Rgb, Rgb),
    Outline,
    Help,
    Redraw,
    Quit,
}

#[derive(Debug, Error, PartialEq)]
pub(super) enum CommandError {
    #[error("unknown command {0:?}; type 'help' for the list")]
    Unknown(String),
    #[error("'{command}' needs {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("'{command}' expects a whole number, got {value:?}")]
    InvalidNumber { command: &'static str, value: String },
    #[error("invalid color {value:?}: {source}")]
    InvalidColor {
        value: String,
        source: ColorParseError,
    },
}

/// Parses one input line. An empty line redraws the current screen.
pub(super) fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    if let Some(event) = key_event(word) {
        if rest.is_empty() {
            return Ok(Command::Key(event));
        }
    }

    match word.to_ascii_lowercase().as_str() {
        "" => Ok(Command::Redraw),
        "open" => required(rest, "open", "a file path").map(|path| Command::Open(path.into())),
        "theme" => required(rest, "theme", "a preset name").map(|name| Command::Theme(name.into())),
        "wpm" => number(rest, "wpm").map(Command::Wpm),
        "size" => number(rest, "size").map(Command::Size),
        "colors" => colors(rest),
        "outline" | "o" => Ok(Command::Outline),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        _ => Err(CommandError::Unknown(line.to_string())),
    }
}

fn key_event(word: &str) -> Option<InputEvent> {
    let event = match word.to_ascii_lowercase().as_str() {
        "n" | "next" => InputEvent::Next,
        "p" | "prev" | "previous" => InputEvent::Previous,
        "f" | "focus" => InputEvent::ToggleFocus,
        "t" => InputEvent::NextTheme,
        "+" => InputEvent::FontLarger,
        "-" => InputEvent::FontSmaller,
        ">" => InputEvent::SpeedUp,
        "<" => InputEvent::SpeedDown,
        _ => return None,
    };
    Some(event)
}

fn required<'a>(
    rest: &'a str,
    command: &'static str,
    expected: &'static str,
) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument { command, expected })
    } else {
        Ok(rest)
    }
}

fn number(rest: &str, command: &'static str) -> Result<i64, CommandError> {
    let value = required(rest, command, "a number")?;
    value.parse().map_err(|_| CommandError::InvalidNumber {
        command,
        value: value.to_string(),
    })
}

fn colors(rest: &str) -> Result<Command, CommandError> {
    let mut parts = rest.split_whitespace();
    let (Some(bg), Some(fg), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(CommandError::MissingArgument {
            command: "colors",
            expected: "a background and a text color",
        });
    };

    Ok(Command::Colors(color(bg)?, color(fg)?))
}

fn color(value: &str) -> Result<Rgb, CommandError> {
    value.parse().map_err(|source| CommandError::InvalidColor {
        value: value.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_keys_map_to_events() {
        assert_eq!(parse("n"), Ok(Command::Key(InputEvent::Next)));
        assert_eq!(parse("  PREV "), Ok(Command::Key(InputEvent::Previous)));
        assert_eq!(parse("f"), Ok(Command::Key(InputEvent::ToggleFocus)));
        assert_eq!(parse("+"), Ok(Command::Key(InputEvent::FontLarger)));
        assert_eq!(parse("-"), Ok(Command::Key(InputEvent::FontSmaller)));
        assert_eq!(parse(">"), Ok(Command::Key(InputEvent::SpeedUp)));
        assert_eq!(parse("<"), Ok(Command::Key(InputEvent::SpeedDown)));
        assert_eq!(parse("t"), Ok(Command::Key(InputEvent::NextTheme)));
    }

    #[test]
    fn argument_commands() {
        assert_eq!(
            parse("open ~/scripts/ep 12.md"),
            Ok(Command::Open(PathBuf::from("~/scripts/ep 12.md")))
        );
        assert_eq!(
            parse("theme High contrast"),
            Ok(Command::Theme("High contrast".to_string()))
        );
        assert_eq!(parse("wpm 180"), Ok(Command::Wpm(180)));
        assert_eq!(parse("size -3"), Ok(Command::Size(-3)));
        assert_eq!(
            parse("colors #1E1E1E dcdcdc"),
            Ok(Command::Colors(
                Rgb::new(0x1E, 0x1E, 0x1E),
                Rgb::new(0xDC, 0xDC, 0xDC)
            ))
        );
        assert_eq!(parse(""), Ok(Command::Redraw));
        assert_eq!(parse("quit"), Ok(Command::Quit));
        assert_eq!(parse("outline"), Ok(Command::Outline));
    }

    #[test]
    fn malformed_commands() {
        assert_eq!(
            parse("wpm fast"),
            Err(CommandError::InvalidNumber {
                command: "wpm",
                value: "fast".to_string()
            })
        );
        assert!(matches!(
            parse("open"),
            Err(CommandError::MissingArgument { command: "open", .. })
        ));
        assert!(matches!(
            parse("colors #000000"),
            Err(CommandError::MissingArgument { command: "colors", .. })
        ));
        assert!(matches!(
            parse("colors #000000 #zzzzzz"),
            Err(CommandError::InvalidColor { .. })
        ));
        assert!(matches!(parse("next please"), Err(CommandError::Unknown(_))));
        assert!(matches!(parse("jump 3"), Err(CommandError::Unknown(_))));
    }

    #[test]
    fn error_messages_name_the_command() {
        let err = parse("size").unwrap_err();
        assert_eq!(err.to_string(), "'size' needs a number");
    }
}
