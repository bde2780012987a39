use std::fmt;

use crate::games::SessionRng;
use super::board::{Board, is_full};
use super::bot_controller::{BotMove, choose_move};
use super::types::{FirstPlayerMode, GameStatus, Player, Position, WinningLine};
use super::win_detector::{check_win_with_line, has_won};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    GameOver,
    NotYourTurn,
    OutOfBounds(Position),
    CellOccupied(Position),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::GameOver => write!(f, "Game is already over"),
            MoveError::NotYourTurn => write!(f, "Not your turn"),
            MoveError::OutOfBounds(pos) => write!(f, "Position {} is out of bounds", pos),
            MoveError::CellOccupied(pos) => write!(f, "Cell {} is already marked", pos),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug)]
pub struct TicTacToeGameState {
    pub board: Board,
    pub current_player: Player,
    pub status: GameStatus,
    pub last_move: Option<Position>,
}

impl TicTacToeGameState {
    pub fn new(first_player: Player) -> Self {
        Self {
            board: Board::new(),
            current_player: first_player,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn with_mode(first_player_mode: FirstPlayerMode, rng: &mut SessionRng) -> Self {
        let first_player = match first_player_mode {
            FirstPlayerMode::Human => Player::Human,
            FirstPlayerMode::Ai => Player::Ai,
            FirstPlayerMode::Random => {
                if rng.random_bool() {
                    Player::Human
                } else {
                    Player::Ai
                }
            }
        };
        Self::new(first_player)
    }

    pub fn place_mark(&mut self, player: Player, pos: Position) -> Result<(), MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if player != self.current_player {
            return Err(MoveError::NotYourTurn);
        }

        if !pos.is_in_bounds() {
            return Err(MoveError::OutOfBounds(pos));
        }

        if !self.board.is_empty_at(pos) {
            return Err(MoveError::CellOccupied(pos));
        }

        self.board.set(pos, player.mark());
        self.finish_turn(pos);

        Ok(())
    }

    /// Lets the AI search and place its mark. The turn and game-over checks here
    /// are what keep the search away from full or decided boards.
    pub fn play_bot_turn(&mut self) -> Result<BotMove, MoveError> {
        if self.status != GameStatus::InProgress {
            return Err(MoveError::GameOver);
        }

        if self.current_player != Player::Ai {
            return Err(MoveError::NotYourTurn);
        }

        let bot_move = choose_move(&mut self.board).ok_or(MoveError::GameOver)?;
        self.finish_turn(bot_move.position);

        Ok(bot_move)
    }

    fn finish_turn(&mut self, pos: Position) {
        self.last_move = Some(pos);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.current_player = self.current_player.opponent();
        }
    }

    fn check_game_over(&mut self) {
        if has_won(&self.board, self.current_player.mark()) {
            self.status = match self.current_player {
                Player::Human => GameStatus::HumanWon,
                Player::Ai => GameStatus::AiWon,
            };
            return;
        }

        if is_full(&self.board) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn get_winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::HumanWon => Some(Player::Human),
            GameStatus::AiWon => Some(Player::Ai),
            _ => None,
        }
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        check_win_with_line(&self.board)
    }
}
