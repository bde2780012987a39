use std::fmt;
use std::io::{BufRead, Write};

use common::games::tictactoe::{
    BOARD_SIZE, GameStatus, MoveError, Player, Position, TicTacToeGameState, validate_move_input,
};
use common::log;

#[derive(Debug)]
pub enum RunnerError {
    Io(std::io::Error),
    Move(MoveError),
    InputClosed,
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::Io(e) => write!(f, "IO error: {}", e),
            RunnerError::Move(e) => write!(f, "Move error: {}", e),
            RunnerError::InputClosed => write!(f, "Input closed"),
        }
    }
}

impl std::error::Error for RunnerError {}

impl From<std::io::Error> for RunnerError {
    fn from(e: std::io::Error) -> Self {
        RunnerError::Io(e)
    }
}

impl From<MoveError> for RunnerError {
    fn from(e: MoveError) -> Self {
        RunnerError::Move(e)
    }
}

/// Drives one game over a line-based input and a text output.
pub struct TerminalRunner<R: BufRead, W: Write> {
    input: R,
    output: W,
    show_scores: bool,
}

impl<R: BufRead, W: Write> TerminalRunner<R, W> {
    pub fn new(input: R, output: W, show_scores: bool) -> Self {
        Self {
            input,
            output,
            show_scores,
        }
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self, state: &mut TicTacToeGameState) -> Result<GameStatus, RunnerError> {
        self.print_board(state)?;

        while !state.status.is_over() {
            match state.current_player {
                Player::Human => {
                    let pos = self.read_human_move(state)?;
                    state.place_mark(Player::Human, pos)?;
                    log!("Human played {}", pos);
                }
                Player::Ai => {
                    writeln!(self.output, "AI's turn:")?;
                    let bot_move = state.play_bot_turn()?;
                    log!("AI played {} with score {}", bot_move.position, bot_move.score);
                    if self.show_scores {
                        writeln!(
                            self.output,
                            "AI played {} (score {})",
                            bot_move.position, bot_move.score
                        )?;
                    }
                }
            }
            self.print_board(state)?;
        }

        let message = match state.status {
            GameStatus::HumanWon => "You win!",
            GameStatus::AiWon => "AI wins!",
            _ => "It's a tie!",
        };
        writeln!(self.output, "{}", message)?;
        if let Some(line) = state.winning_line() {
            log!("{} won along {} -> {}", line.player, line.start(), line.end());
        }
        log!("Game over: {:?}", state.status);

        Ok(state.status)
    }

    fn read_human_move(&mut self, state: &TicTacToeGameState) -> Result<Position, RunnerError> {
        let last = BOARD_SIZE - 1;
        loop {
            let row = self.prompt(&format!("Enter row (0-{}): ", last))?;
            let col = self.prompt(&format!("Enter col (0-{}): ", last))?;

            match validate_move_input(&state.board, &row, &col) {
                Ok(pos) => return Ok(pos),
                Err(e) => {
                    log!("Rejected input row={:?} col={:?}: {:?}", row.trim(), col.trim(), e);
                    writeln!(self.output, "{}", e)?;
                }
            }
        }
    }

    fn prompt(&mut self, text: &str) -> Result<String, RunnerError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(RunnerError::InputClosed);
        }
        Ok(line)
    }

    fn print_board(&mut self, state: &TicTacToeGameState) -> Result<(), RunnerError> {
        writeln!(self.output, "{}", state.board)?;
        Ok(())
    }
}
