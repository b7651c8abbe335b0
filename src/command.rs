//! # Terminal Commands
//!
//! Parses one line of player input for the interactive terminal quiz.
//!
//! ## Syntax
//! - `<string> <fret>` - guess; fret is `0`-`12`, `open`, or `-1`
//! - `mode` - toggle mode; `mode single` / `mode all` set it
//! - `debug` - toggle the note grid
//! - `hover <string> <fret>` / `hover off`
//! - `help`
//! - `quit` / `exit` / `q`
//!
//! Coordinates are checked against the board here, so a parsed
//! [`Command::Guess`] always names a real cell.
//!
//! ## Example
//! ```rust
//! use fretquiz::command::{parse_command, Command};
//!
//! assert!(matches!(parse_command("4 3"), Ok(Some(Command::Guess(_)))));
//! assert_eq!(parse_command("   "), Ok(None));
//! assert!(parse_command("4").is_err());
//! ```

use crate::error::QuizError;
use crate::fretboard::{Position, OPEN_CLICK_SENTINEL};
use crate::session::Mode;

pub const USAGE: &str = "commands: <string 1-4> <fret 0-12|open>, mode [single|all], debug, hover <string> <fret>|off, help, quit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Guess(Position),
    ToggleMode,
    SetMode(Mode),
    ToggleDebug,
    Hover(Option<Position>),
    Help,
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
pub fn parse_command(line: &str) -> Result<Option<Command>, QuizError> {
    let words: Vec<String> = line.split_whitespace().map(|w| w.to_ascii_lowercase()).collect();
    let words: Vec<&str> = words.iter().map(String::as_str).collect();

    let command = match words.as_slice() {
        [] => return Ok(None),
        ["quit"] | ["exit"] | ["q"] => Command::Quit,
        ["help"] | ["?"] => Command::Help,
        ["debug"] => Command::ToggleDebug,
        ["mode"] => Command::ToggleMode,
        ["mode", mode] => Command::SetMode(mode.parse().map_err(|_| invalid(line))?),
        ["hover", "off"] => Command::Hover(None),
        ["hover", string, fret] => Command::Hover(Some(parse_position(string, fret)?)),
        [string, fret] => Command::Guess(parse_position(string, fret)?),
        _ => return Err(invalid(line)),
    };
    Ok(Some(command))
}

fn parse_position(string: &str, fret: &str) -> Result<Position, QuizError> {
    let string: u8 = string
        .parse()
        .map_err(|_| QuizError::InvalidCommand(format!("not a string number: {}", string)))?;
    let fret: i32 = match fret {
        "open" | "o" => OPEN_CLICK_SENTINEL,
        n => n
            .parse()
            .map_err(|_| QuizError::InvalidCommand(format!("not a fret number: {}", n)))?,
    };
    Position::from_click(string, fret)
}

fn invalid(line: &str) -> QuizError {
    QuizError::InvalidCommand(format!("{:?} ({})", line.trim(), USAGE))
}
