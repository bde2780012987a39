use std::fmt;

use super::board::Board;
use super::types::{BOARD_SIZE, Position};

/// Why a typed coordinate pair was rejected. Callers re-prompt on any of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveInputError {
    NotANumber(String),
    OutOfRange(usize),
    CellOccupied(Position),
}

impl fmt::Display for MoveInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveInputError::NotANumber(_) | MoveInputError::OutOfRange(_) => write!(
                f,
                "Invalid input. Enter numbers between 0 and {}.",
                BOARD_SIZE - 1
            ),
            MoveInputError::CellOccupied(_) => write!(f, "Cell is already occupied. Try again."),
        }
    }
}

impl std::error::Error for MoveInputError {}

pub fn parse_coordinate(input: &str) -> Result<usize, MoveInputError> {
    let trimmed = input.trim();
    let value: usize = trimmed
        .parse()
        .map_err(|_| MoveInputError::NotANumber(trimmed.to_string()))?;
    if value >= BOARD_SIZE {
        return Err(MoveInputError::OutOfRange(value));
    }
    Ok(value)
}

/// Turns the raw row and column answers into a playable position.
pub fn validate_move_input(board: &Board, row: &str, col: &str) -> Result<Position, MoveInputError> {
    let pos = Position::new(parse_coordinate(row)?, parse_coordinate(col)?);
    if !board.is_empty_at(pos) {
        return Err(MoveInputError::CellOccupied(pos));
    }
    Ok(pos)
}
