use std::fmt;

use super::types::{BOARD_SIZE, Mark, Position};

/// The 3x3 grid. Indexed as `cells[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Mark; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Mark::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Builds a board from three row strings using the display glyphs
    /// (`X` for the AI, `O` for the human, space or `.` for empty).
    pub fn from_rows(rows: [&str; BOARD_SIZE]) -> Result<Self, String> {
        let mut board = Self::new();
        for (row, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().collect();
            if chars.len() != BOARD_SIZE {
                return Err(format!(
                    "row {} must have {} cells, got {}",
                    row,
                    BOARD_SIZE,
                    chars.len()
                ));
            }
            for (col, c) in chars.into_iter().enumerate() {
                board.cells[row][col] = match c {
                    'X' | 'x' => Mark::Ai,
                    'O' | 'o' => Mark::Human,
                    ' ' | '.' => Mark::Empty,
                    other => {
                        return Err(format!("invalid cell '{}' at ({}, {})", other, row, col));
                    }
                };
            }
        }
        Ok(board)
    }

    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.row][pos.col]
    }

    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row][pos.col] = mark;
    }

    pub fn clear(&mut self, pos: Position) {
        self.cells[pos.row][pos.col] = Mark::Empty;
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    pub fn rows(&self) -> &[[Mark; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Swaps human and AI marks, leaving empty cells alone.
    pub fn relabeled(&self) -> Self {
        let mut board = *self;
        for pos in Position::ALL {
            if let Some(other) = self.get(pos).opponent() {
                board.set(pos, other);
            }
        }
        board
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|mark| mark.glyph().to_string()).collect();
            writeln!(f, "{}", line.join(" | "))?;
        }
        Ok(())
    }
}

/// Empty cells in row-major order. The search relies on this order for tie-breaking.
pub fn get_empty_cells(board: &Board) -> Vec<Position> {
    Position::ALL
        .into_iter()
        .filter(|&pos| board.is_empty_at(pos))
        .collect()
}

pub fn is_full(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
}

pub fn is_valid_move(board: &Board, pos: Position) -> bool {
    pos.is_in_bounds() && board.is_empty_at(pos)
}
