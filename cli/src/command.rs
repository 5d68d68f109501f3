use minesweep_core::{Coord, Coord2};
use thiserror::Error;

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Reveal(Coord2),
    Mark(Coord2),
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("I didn't understand that.")]
    Unrecognized,
    #[error("Co-ordinates not valid.")]
    OutOfBounds,
}

/// Parses `q`/`quit`/`exit`, or a cell like `b3` (reveal) or `!b3` (mark), case-insensitive.
///
/// Columns are letters starting at `A`, rows are numbered from 1. Only the shape of the
/// coordinates is checked here, the board decides whether they are in range.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();

    if ["q", "quit", "exit"]
        .iter()
        .any(|quit| line.eq_ignore_ascii_case(quit))
    {
        return Ok(Command::Quit);
    }

    let (mark, cell) = match line.strip_prefix('!') {
        Some(rest) => (true, rest),
        None => (false, line),
    };

    let mut chars = cell.chars();
    let column = match chars.next() {
        Some(letter) if letter.is_ascii_alphabetic() => letter.to_ascii_uppercase() as u8 - b'A',
        _ => return Err(CommandError::Unrecognized),
    };

    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CommandError::Unrecognized);
    }

    let row = digits
        .parse::<u32>()
        .ok()
        .and_then(|row| row.checked_sub(1))
        .and_then(|row| Coord::try_from(row).ok())
        .ok_or(CommandError::OutOfBounds)?;

    let coords = (column, row);
    Ok(if mark {
        Command::Mark(coords)
    } else {
        Command::Reveal(coords)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quit_words() {
        for line in ["q", "Q", "quit", "QUIT", "exit", "  Exit \n"] {
            assert_eq!(parse_command(line), Ok(Command::Quit), "{line:?}");
        }
    }

    #[test]
    fn parses_reveal_and_mark() {
        assert_eq!(parse_command("a1"), Ok(Command::Reveal((0, 0))));
        assert_eq!(parse_command("C12\n"), Ok(Command::Reveal((2, 11))));
        assert_eq!(parse_command("!b3"), Ok(Command::Mark((1, 2))));
        assert_eq!(parse_command("!Z26"), Ok(Command::Mark((25, 25))));
    }

    #[test]
    fn rejects_malformed_lines() {
        for line in ["", "!", "1a", "a", "a1b", "aa1", "! a1", "a-1", "é1", "quitt"] {
            assert_eq!(parse_command(line), Err(CommandError::Unrecognized), "{line:?}");
        }
    }

    #[test]
    fn row_zero_and_huge_rows_are_out_of_bounds() {
        assert_eq!(parse_command("a0"), Err(CommandError::OutOfBounds));
        assert_eq!(parse_command("a257"), Err(CommandError::OutOfBounds));
        assert_eq!(parse_command("a99999999999"), Err(CommandError::OutOfBounds));
        assert_eq!(parse_command("a256"), Ok(Command::Reveal((0, 255))));
    }
}
