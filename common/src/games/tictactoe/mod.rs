mod board;
mod bot_controller;
mod game_state;
mod types;
mod validate;
mod win_detector;

pub use board::{Board, get_empty_cells, is_full, is_valid_move};
pub use bot_controller::{BotMove, Score, WIN_SCORE, choose_move, evaluate, find_best_move, minimax};
pub use game_state::{MoveError, TicTacToeGameState};
pub use types::{BOARD_SIZE, FirstPlayerMode, GameStatus, Mark, Player, Position, WinningLine};
pub use validate::{MoveInputError, parse_coordinate, validate_move_input};
pub use win_detector::{check_win, check_win_with_line, has_won};
