use super::board::Board;
use super::types::{BOARD_SIZE, Mark, Player, Position, WinningLine};

/// Rows, then columns, then the main diagonal, then the anti-diagonal.
const LINES: [[Position; BOARD_SIZE]; 8] = [
    [Position::new(0, 0), Position::new(0, 1), Position::new(0, 2)],
    [Position::new(1, 0), Position::new(1, 1), Position::new(1, 2)],
    [Position::new(2, 0), Position::new(2, 1), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 0), Position::new(2, 0)],
    [Position::new(0, 1), Position::new(1, 1), Position::new(2, 1)],
    [Position::new(0, 2), Position::new(1, 2), Position::new(2, 2)],
    [Position::new(0, 0), Position::new(1, 1), Position::new(2, 2)],
    [Position::new(0, 2), Position::new(1, 1), Position::new(2, 0)],
];

fn find_line(board: &Board, mark: Mark) -> Option<[Position; BOARD_SIZE]> {
    LINES
        .iter()
        .find(|line| line.iter().all(|&pos| board.get(pos) == mark))
        .copied()
}

/// True iff `mark` fills a row, a column or a diagonal. Always false for `Mark::Empty`.
pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    find_line(board, mark).is_some()
}

pub fn check_win(board: &Board) -> Option<Player> {
    check_win_with_line(board).map(|line| line.player)
}

pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    [Player::Ai, Player::Human].into_iter().find_map(|player| {
        find_line(board, player.mark()).map(|cells| WinningLine::new(player, cells))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[Position], mark: Mark) -> Board {
        let mut board = Board::new();
        for &pos in cells {
            board.set(pos, mark);
        }
        board
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in LINES {
            for mark in [Mark::Human, Mark::Ai] {
                let board = board_with(&line, mark);
                assert!(has_won(&board, mark), "{:?} should win on {:?}", mark, line);
                assert!(!has_won(&board, mark.opponent().unwrap()));
            }
        }
    }

    #[test]
    fn test_no_line_no_win() {
        let boards = [
            Board::new(),
            Board::from_rows(["XOX", "XOO", "OXX"]).unwrap(),
            Board::from_rows(["XX ", "OO ", "   "]).unwrap(),
            Board::from_rows(["X O", " O ", "X  "]).unwrap(),
        ];
        for board in boards {
            assert!(!has_won(&board, Mark::Ai));
            assert!(!has_won(&board, Mark::Human));
            assert_eq!(check_win(&board), None);
        }
    }

    #[test]
    fn test_all_positions_two_of_three_never_win() {
        for line in LINES {
            for skip in 0..BOARD_SIZE {
                let cells: Vec<Position> = line
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip)
                    .map(|(_, &pos)| pos)
                    .collect();
                let board = board_with(&cells, Mark::Ai);
                assert!(!has_won(&board, Mark::Ai));
            }
        }
    }

    #[test]
    fn test_empty_mark_never_wins() {
        assert!(!has_won(&Board::new(), Mark::Empty));
    }

    #[test]
    fn test_check_win_with_line_reports_cells() {
        let board = Board::from_rows(["O X", "OX ", "X O"]).unwrap();
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.player, Player::Ai);
        assert_eq!(line.start(), Position::new(0, 2));
        assert_eq!(line.end(), Position::new(2, 0));
    }

    #[test]
    fn test_check_win_human_column() {
        let board = Board::from_rows(["XO ", "XO ", " O "]).unwrap();
        assert_eq!(check_win(&board), Some(Player::Human));
    }
}
