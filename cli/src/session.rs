use std::io::{self, BufRead, Write};

use minesweep_core::{Board, GameState, Overlay};

use crate::command::{parse_command, Command, CommandError};
use crate::render::render;

const PROMPT: &str = "> ";

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionEnd {
    Won,
    Lost,
    Quit,
}

/// Drives one game: reads commands line by line, applies them to the board and redraws.
pub struct Session<R, W> {
    board: Board,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(board: Board, input: R, output: W) -> Self {
        Self {
            board,
            input,
            output,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn run(&mut self) -> io::Result<SessionEnd> {
        render(&self.board, &mut self.output)?;

        loop {
            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            // raw bytes, a line that is not UTF-8 is bad input rather than a terminal failure
            let mut line = Vec::new();
            if self.input.read_until(b'\n', &mut line)? == 0 {
                writeln!(self.output)?;
                return Ok(SessionEnd::Quit);
            }

            let command = match self.validated_command(&line) {
                Ok(command) => command,
                Err(err) => {
                    log::debug!(
                        "Rejected input {:?}: {:?}",
                        String::from_utf8_lossy(&line).trim_end(),
                        err
                    );
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            match command {
                Command::Quit => return Ok(SessionEnd::Quit),
                Command::Mark(coords) => {
                    if self.board.mark(coords).has_update() {
                        render(&self.board, &mut self.output)?;
                    } else {
                        writeln!(self.output, "Only hidden cells can be marked.")?;
                    }
                }
                Command::Reveal(coords) => {
                    let outcome = self.board.reveal(coords);
                    log::debug!("Reveal {:?}: {:?}", coords, outcome);

                    if !outcome.has_update() {
                        let reason = match self.board.overlay_at(coords) {
                            Overlay::Marked => "That cell is marked, remove the mark first.",
                            _ => "That cell has already been revealed.",
                        };
                        writeln!(self.output, "{reason}")?;
                        continue;
                    }

                    render(&self.board, &mut self.output)?;
                    if let Some(end) = self.report_end()? {
                        return Ok(end);
                    }
                }
            }
        }
    }

    /// Announces a finished game, `None` while safe cells remain hidden.
    fn report_end(&mut self) -> io::Result<Option<SessionEnd>> {
        let state = self.board.status();
        if !state.is_finished() {
            return Ok(None);
        }

        let (message, end) = if state == GameState::Won {
            ("Congratulations, you have swept all the mines and won!", SessionEnd::Won)
        } else {
            ("Oh no, you hit a mine and lost!", SessionEnd::Lost)
        };
        writeln!(self.output, "{message}")?;
        Ok(Some(end))
    }

    /// Parses a line and range checks its coordinates against the board.
    fn validated_command(&self, line: &[u8]) -> Result<Command, CommandError> {
        let line = std::str::from_utf8(line).map_err(|_| CommandError::Unrecognized)?;
        let command = parse_command(line)?;
        match command {
            Command::Quit => Ok(command),
            Command::Reveal(coords) | Command::Mark(coords) => self
                .board
                .validate_coords(coords)
                .map(|_| command)
                .map_err(|_| CommandError::OutOfBounds),
        }
    }
}
