//! Command mapping from text lines to host commands.
//!
//! ```text
//! down 0 0        drag-start on tile (0, 0)
//! move 1 1        drag-extend onto tile (1, 1)
//! up              drag-end
//! tick 0.016      advance the clock by 16 ms
//! level wordsWithinTime
//! mode endless
//! restart
//! state
//! quit
//! ```
//!
//! Blank lines and lines starting with `#` are skipped by [`parse_script`].

use thiserror::Error;

use crate::types::{GameMode, LevelType, Position};

/// One stimulus from the host
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostCommand {
    DragStart(Position),
    DragExtend(Position),
    DragEnd,
    Tick(f32),
    SetLevelType(LevelType),
    SetMode(GameMode),
    Restart,
    /// Ask for a snapshot of the match.
    Report,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("empty command")]
    Empty,
    #[error("unknown command: {0}")]
    UnknownCommand(String),
    #[error("{command}: expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },
    #[error("{command}: invalid value {value:?}")]
    InvalidArgument { command: &'static str, value: String },
    #[error("{command}: unexpected trailing input {rest:?}")]
    TrailingInput { command: &'static str, rest: String },
}

fn next_arg<'a, I>(args: &mut I, command: &'static str, expected: &'static str) -> Result<&'a str, ParseError>
where
    I: Iterator<Item = &'a str>,
{
    args.next()
        .ok_or(ParseError::MissingArgument { command, expected })
}

fn parse_position<'a, I>(args: &mut I, command: &'static str) -> Result<Position, ParseError>
where
    I: Iterator<Item = &'a str>,
{
    let mut coord = |name: &'static str| {
        let raw = next_arg(args, command, name)?;
        raw.parse::<i32>().map_err(|_| ParseError::InvalidArgument {
            command,
            value: raw.to_string(),
        })
    };
    let x = coord("x coordinate")?;
    let y = coord("y coordinate")?;
    Ok(Position::new(x, y))
}

/// Map one line of input to a host command.
pub fn parse_command(line: &str) -> Result<HostCommand, ParseError> {
    let mut args = line.split_whitespace();
    let head = args.next().ok_or(ParseError::Empty)?.to_lowercase();

    let (name, command) = match head.as_str() {
        "down" | "start" => ("down", HostCommand::DragStart(parse_position(&mut args, "down")?)),
        "move" | "drag" | "extend" => ("move", HostCommand::DragExtend(parse_position(&mut args, "move")?)),
        "up" | "end" => ("up", HostCommand::DragEnd),
        "tick" => {
            let raw = next_arg(&mut args, "tick", "seconds")?;
            let seconds = raw
                .parse::<f32>()
                .ok()
                .filter(|s| s.is_finite() && *s >= 0.0)
                .ok_or_else(|| ParseError::InvalidArgument {
                    command: "tick",
                    value: raw.to_string(),
                })?;
            ("tick", HostCommand::Tick(seconds))
        }
        "level" => {
            let raw = next_arg(&mut args, "level", "level type")?;
            let level = raw
                .parse::<usize>()
                .ok()
                .and_then(LevelType::from_index)
                .or_else(|| LevelType::from_str(raw))
                .ok_or_else(|| ParseError::InvalidArgument {
                    command: "level",
                    value: raw.to_string(),
                })?;
            ("level", HostCommand::SetLevelType(level))
        }
        "mode" => {
            let raw = next_arg(&mut args, "mode", "levels or endless")?;
            let mode = GameMode::from_str(raw).ok_or_else(|| ParseError::InvalidArgument {
                command: "mode",
                value: raw.to_string(),
            })?;
            ("mode", HostCommand::SetMode(mode))
        }
        "restart" => ("restart", HostCommand::Restart),
        "state" | "report" => ("state", HostCommand::Report),
        "quit" | "exit" => ("quit", HostCommand::Quit),
        _ => return Err(ParseError::UnknownCommand(head.clone())),
    };

    let rest: Vec<&str> = args.collect();
    if !rest.is_empty() {
        return Err(ParseError::TrailingInput {
            command: name,
            rest: rest.join(" "),
        });
    }
    Ok(command)
}

/// Parse a multi-line script, skipping blank lines and `#` comments.
///
/// Errors carry the 1-based line number.
pub fn parse_script(script: &str) -> Result<Vec<HostCommand>, (usize, ParseError)> {
    script
        .lines()
        .enumerate()
        .filter(|(_, line)| {
            let trimmed = line.trim();
            !trimmed.is_empty() && !trimmed.starts_with('#')
        })
        .map(|(i, line)| parse_command(line).map_err(|e| (i + 1, e)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_commands() {
        assert_eq!(parse_command("down 0 0"), Ok(HostCommand::DragStart(Position::new(0, 0))));
        assert_eq!(parse_command("MOVE 2 -1"), Ok(HostCommand::DragExtend(Position::new(2, -1))));
        assert_eq!(parse_command("  up  "), Ok(HostCommand::DragEnd));
    }

    #[test]
    fn test_tick_command() {
        assert_eq!(parse_command("tick 0.5"), Ok(HostCommand::Tick(0.5)));
        assert!(matches!(
            parse_command("tick -1"),
            Err(ParseError::InvalidArgument { command: "tick", .. })
        ));
        assert!(matches!(
            parse_command("tick"),
            Err(ParseError::MissingArgument { command: "tick", .. })
        ));
    }

    #[test]
    fn test_level_and_mode_commands() {
        assert_eq!(
            parse_command("level scoreWithinTime"),
            Ok(HostCommand::SetLevelType(LevelType::ScoreWithinTime))
        );
        assert_eq!(
            parse_command("level 3"),
            Ok(HostCommand::SetLevelType(LevelType::BonusWordCountGoal))
        );
        assert_eq!(parse_command("mode Endless"), Ok(HostCommand::SetMode(GameMode::Endless)));
        assert!(matches!(
            parse_command("level 9"),
            Err(ParseError::InvalidArgument { command: "level", .. })
        ));
    }

    #[test]
    fn test_bad_input() {
        assert_eq!(parse_command(""), Err(ParseError::Empty));
        assert_eq!(parse_command("jump"), Err(ParseError::UnknownCommand("jump".to_string())));
        assert!(matches!(
            parse_command("down 1"),
            Err(ParseError::MissingArgument { command: "down", .. })
        ));
        assert!(matches!(
            parse_command("down a 1"),
            Err(ParseError::InvalidArgument { command: "down", .. })
        ));
        assert!(matches!(
            parse_command("up now"),
            Err(ParseError::TrailingInput { command: "up", .. })
        ));
    }

    #[test]
    fn test_parse_script() {
        let script = "# warm-up\ndown 0 0\n\nmove 0 1\nup\nquit\n";
        let commands = parse_script(script).unwrap();
        assert_eq!(commands.len(), 4);
        assert_eq!(commands[3], HostCommand::Quit);

        assert_eq!(
            parse_script("down 0 0\nbogus"),
            Err((2, ParseError::UnknownCommand("bogus".to_string())))
        );
    }
}
