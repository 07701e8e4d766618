use sweeper_core::{Command, Coord};
use thiserror::Error;

/// One line typed by the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Input {
    Command(Command),
    Help,
    Quit,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("Empty input, type ? for help")]
    Empty,
    #[error("Unknown command {0:?}, type ? for help")]
    UnknownCommand(String),
    #[error("Expected a row and a column, e.g. `r 3 4`")]
    MissingCoords,
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
}

pub const HELP: &str = "\
r ROW COL   reveal a cell
f ROW COL   flag or unflag a cell
n           new game
q           quit
?           this help";

pub fn parse_input(line: &str) -> Result<Input, InputError> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Err(InputError::Empty);
    };

    Ok(match verb.to_ascii_lowercase().as_str() {
        "r" | "reveal" => Input::Command(Command::Reveal(parse_coords(words)?)),
        "f" | "flag" => Input::Command(Command::ToggleFlag(parse_coords(words)?)),
        "n" | "new" | "reset" => Input::Command(Command::Reset),
        "q" | "quit" | "exit" => Input::Quit,
        "?" | "h" | "help" => Input::Help,
        _ => return Err(InputError::UnknownCommand(verb.to_string())),
    })
}

fn parse_coords<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<(Coord, Coord), InputError> {
    let row = words.next().ok_or(InputError::MissingCoords)?;
    let col = words.next().ok_or(InputError::MissingCoords)?;
    Ok((parse_coord(row)?, parse_coord(col)?))
}

fn parse_coord(word: &str) -> Result<Coord, InputError> {
    word.parse()
        .map_err(|_| InputError::InvalidCoord(word.to_string()))
}
