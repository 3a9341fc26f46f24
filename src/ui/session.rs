use std::io::{BufRead, Write};

use tracing::{debug, info};

use crate::error::SessionError;
use crate::game::{GameOutcome, GameState, MoveOutcome, MoveResult};
use crate::input::parse_column;

use super::board_view::render_board;

/// Console game loop: prompt, read a column, apply it, print the board.
pub struct Session<R, W> {
    game_state: GameState,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(game_state: GameState, input: R, output: W) -> Self {
        Session {
            game_state,
            input,
            output,
        }
    }

    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    /// Play until someone wins or the board fills up.
    ///
    /// Unparseable input and invalid columns are reported and the same player
    /// is asked again.
    pub fn run(&mut self) -> Result<GameOutcome, SessionError> {
        writeln!(
            self.output,
            "Game for {} players starts:\n",
            self.game_state.player_count()
        )?;
        self.print_board()?;

        loop {
            if let Some(outcome) = self.game_state.outcome() {
                info!(?outcome, "game finished");
                return Ok(outcome);
            }

            let player = self.game_state.current_player();
            let width = self.game_state.board().width();
            write!(
                self.output,
                "Player {player}, make your selection (0-{}): ",
                width - 1
            )?;
            self.output.flush()?;

            let line = self.read_line()?;
            let column = match parse_column(&line, width) {
                Ok(column) => column,
                Err(err) => {
                    debug!(%player, input = line.trim(), %err, "rejected input");
                    writeln!(self.output, "{err}")?;
                    continue;
                }
            };

            match self.game_state.apply_move(column) {
                Ok(result) => self.report(result)?,
                Err(err) if err.is_invalid_column() => {
                    debug!(
                        %player,
                        column,
                        %err,
                        legal = ?self.game_state.legal_columns(),
                        "rejected move"
                    );
                    writeln!(self.output, "Invalid move, try again.")?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn read_line(&mut self) -> Result<String, SessionError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        Ok(line)
    }

    fn report(&mut self, result: MoveResult) -> Result<(), SessionError> {
        debug!(
            player = %result.player,
            row = result.row,
            column = result.column,
            "piece placed"
        );
        self.print_board()?;
        match result.outcome {
            MoveOutcome::Win(player) => writeln!(self.output, "Player {player} wins!")?,
            MoveOutcome::Draw => writeln!(self.output, "The game is a draw!")?,
            MoveOutcome::Continue { .. } => {}
        }
        Ok(())
    }

    fn print_board(&mut self) -> Result<(), SessionError> {
        let board = render_board(self.game_state.board(), self.game_state.player_count());
        writeln!(self.output, "{board}")?;
        Ok(())
    }
}
