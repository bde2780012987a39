use super::board::{Board, get_empty_cells, is_full};
use super::types::{Player, Position};
use super::win_detector::has_won;

/// Search evaluation. Positive favors the bot, negative its opponent.
pub type Score = i32;

/// Score of a win found at depth 0. Each ply of depth moves it one step toward zero.
pub const WIN_SCORE: Score = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BotMove {
    pub position: Position,
    pub score: Score,
}

/// Picks the AI move and places it on the board.
///
/// The board must have at least one empty cell and no winner; on a full board
/// nothing is placed and `None` is returned.
pub fn choose_move(board: &mut Board) -> Option<BotMove> {
    let bot_move = find_best_move(board, Player::Ai)?;
    board.set(bot_move.position, Player::Ai.mark());
    Some(bot_move)
}

/// Scores every empty cell for `bot` and returns the best one without placing it.
/// Ties go to the first cell in row-major order.
pub fn find_best_move(board: &mut Board, bot: Player) -> Option<BotMove> {
    let mut best_move = None;
    let mut best_score = Score::MIN;

    for position in get_empty_cells(board) {
        board.set(position, bot.mark());

        let score = minimax(board, 0, false, bot, Score::MIN, Score::MAX);

        board.clear(position);

        if score > best_score {
            best_score = score;
            best_move = Some(BotMove { position, score });
        }
    }

    best_move
}

/// Alpha-beta search from the AI's point of view.
pub fn evaluate(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    alpha: Score,
    beta: Score,
) -> Score {
    minimax(board, depth, is_maximizing, Player::Ai, alpha, beta)
}

/// Full-depth minimax with alpha-beta pruning, scored for `bot`.
///
/// `is_maximizing` means `bot` is the player to move. Every mark placed during
/// the walk is cleared again before the next sibling is tried, so the board is
/// unchanged on return.
pub fn minimax(
    board: &mut Board,
    depth: usize,
    is_maximizing: bool,
    bot: Player,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    if has_won(board, bot.mark()) {
        return WIN_SCORE - depth as Score;
    }
    if has_won(board, bot.opponent().mark()) {
        return depth as Score - WIN_SCORE;
    }
    if is_full(board) {
        return 0;
    }

    if is_maximizing {
        let mut max_eval = Score::MIN;
        for position in Position::ALL {
            if !board.is_empty_at(position) {
                continue;
            }

            board.set(position, bot.mark());
            let eval = minimax(board, depth + 1, false, bot, alpha, beta);
            board.clear(position);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(eval);
            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let opponent_mark = bot.opponent().mark();
        let mut min_eval = Score::MAX;
        for position in Position::ALL {
            if !board.is_empty_at(position) {
                continue;
            }

            board.set(position, opponent_mark);
            let eval = minimax(board, depth + 1, true, bot, alpha, beta);
            board.clear(position);

            min_eval = min_eval.min(eval);
            beta = beta.min(eval);
            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{Mark, check_win};

    fn board(rows: [&str; 3]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    /// Unpruned reference search.
    fn plain_minimax(board: &mut Board, depth: usize, is_maximizing: bool, bot: Player) -> Score {
        if has_won(board, bot.mark()) {
            return WIN_SCORE - depth as Score;
        }
        if has_won(board, bot.opponent().mark()) {
            return depth as Score - WIN_SCORE;
        }
        if is_full(board) {
            return 0;
        }
        let mover = if is_maximizing { bot } else { bot.opponent() };
        let scores: Vec<Score> = get_empty_cells(board)
            .into_iter()
            .map(|pos| {
                board.set(pos, mover.mark());
                let score = plain_minimax(board, depth + 1, !is_maximizing, bot);
                board.clear(pos);
                score
            })
            .collect();
        if is_maximizing {
            scores.into_iter().max().unwrap()
        } else {
            scores.into_iter().min().unwrap()
        }
    }

    fn sample_boards() -> Vec<Board> {
        vec![
            board(["   ", "   ", "   "]),
            board(["X  ", "   ", "   "]),
            board(["O  ", " X ", "   "]),
            board(["XX ", "OO ", "   "]),
            board(["OO ", " X ", "   "]),
            board(["X O", " O ", "X  "]),
            board(["XOX", " O ", "   "]),
            board(["XO ", "OX ", "  O"]),
        ]
    }

    #[test]
    fn test_empty_board_is_a_forced_draw() {
        let mut b = Board::new();
        let bot_move = choose_move(&mut b).unwrap();
        assert!(bot_move.position.is_corner() || bot_move.position.is_center());
        assert_eq!(bot_move.score, 0);
        assert_eq!(get_empty_cells(&b).len(), 8);
        assert_eq!(b.get(bot_move.position), Mark::Ai);
    }

    #[test]
    fn test_completes_row_to_win() {
        let mut b = board(["XX ", "OO ", "   "]);
        let bot_move = choose_move(&mut b).unwrap();
        assert_eq!(bot_move.position, Position::new(0, 2));
        assert_eq!(bot_move.score, WIN_SCORE);
        assert!(has_won(&b, Mark::Ai));
    }

    #[test]
    fn test_prefers_win_over_block() {
        let mut b = board(["OO ", "XX ", "   "]);
        let bot_move = choose_move(&mut b).unwrap();
        assert_eq!(bot_move.position, Position::new(1, 2));
        assert_eq!(bot_move.score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_single_threat() {
        let mut b = board(["OO ", " X ", "   "]);
        let bot_move = choose_move(&mut b).unwrap();
        assert_eq!(bot_move.position, Position::new(0, 2));
        assert!(bot_move.score > -WIN_SCORE + 1);
    }

    #[test]
    fn test_blocks_column_threat() {
        let mut b = board(["XO ", " O ", "   "]);
        let bot_move = choose_move(&mut b).unwrap();
        assert_eq!(bot_move.position, Position::new(2, 1));
    }

    #[test]
    fn test_losing_position_scores_negative() {
        // Human threatens both (0,2) and (2,0); only one can be blocked.
        let mut b = board(["OO ", "OX ", " XO"]);
        let bot_move = find_best_move(&mut b, Player::Ai).unwrap();
        assert_eq!(bot_move.score, 1 - WIN_SCORE);
    }

    #[test]
    fn test_search_restores_board() {
        for mut b in sample_boards() {
            let before = b;
            let _ = evaluate(&mut b, 0, true, Score::MIN, Score::MAX);
            assert_eq!(b, before);
            let _ = evaluate(&mut b, 0, false, Score::MIN, Score::MAX);
            assert_eq!(b, before);
            let _ = find_best_move(&mut b, Player::Ai);
            assert_eq!(b, before);
        }
    }

    #[test]
    fn test_choose_move_changes_exactly_one_cell() {
        for mut b in sample_boards() {
            if check_win(&b).is_some() || is_full(&b) {
                continue;
            }
            let before = b;
            let bot_move = choose_move(&mut b).unwrap();
            for pos in Position::ALL {
                if pos == bot_move.position {
                    assert_eq!(before.get(pos), Mark::Empty);
                    assert_eq!(b.get(pos), Mark::Ai);
                } else {
                    assert_eq!(b.get(pos), before.get(pos));
                }
            }
        }
    }

    #[test]
    fn test_choose_move_on_full_board_does_nothing() {
        let mut b = board(["XOX", "XOO", "OXX"]);
        let before = b;
        assert_eq!(choose_move(&mut b), None);
        assert_eq!(b, before);
    }

    #[test]
    fn test_terminal_scores() {
        let mut ai_won = board(["XXX", "OO ", "   "]);
        assert_eq!(evaluate(&mut ai_won, 3, false, Score::MIN, Score::MAX), WIN_SCORE - 3);
        let mut human_won = board(["OOO", "XX ", "X  "]);
        assert_eq!(evaluate(&mut human_won, 4, true, Score::MIN, Score::MAX), 4 - WIN_SCORE);
        let mut draw = board(["XOX", "XOO", "OXX"]);
        assert_eq!(evaluate(&mut draw, 9, true, Score::MIN, Score::MAX), 0);
    }

    #[test]
    fn test_pruning_matches_plain_minimax() {
        for mut b in sample_boards() {
            for is_maximizing in [true, false] {
                let expected = plain_minimax(&mut b, 0, is_maximizing, Player::Ai);
                let actual = evaluate(&mut b, 0, is_maximizing, Score::MIN, Score::MAX);
                assert_eq!(actual, expected, "board:\n{}", b);
            }
        }
    }

    #[test]
    fn test_score_stays_in_range() {
        for mut b in sample_boards() {
            for is_maximizing in [true, false] {
                let score = evaluate(&mut b, 0, is_maximizing, Score::MIN, Score::MAX);
                assert!((-WIN_SCORE..=WIN_SCORE).contains(&score));
            }
        }
    }

    #[test]
    fn test_symmetric_under_relabeling() {
        for mut b in sample_boards() {
            let mut swapped = b.relabeled();
            for is_maximizing in [true, false] {
                let ai_view = minimax(&mut b, 0, is_maximizing, Player::Ai, Score::MIN, Score::MAX);
                let relabeled =
                    minimax(&mut swapped, 0, is_maximizing, Player::Human, Score::MIN, Score::MAX);
                assert_eq!(ai_view, relabeled);

                let human_view =
                    minimax(&mut b, 0, !is_maximizing, Player::Human, Score::MIN, Score::MAX);
                assert_eq!(ai_view, -human_view);
            }
        }
    }

    #[test]
    fn test_self_play_ends_in_draw() {
        let mut b = Board::new();
        let mut mover = Player::Ai;
        while check_win(&b).is_none() && !is_full(&b) {
            let bot_move = find_best_move(&mut b, mover).unwrap();
            assert_eq!(bot_move.score, 0);
            b.set(bot_move.position, mover.mark());
            mover = mover.opponent();
        }
        assert_eq!(check_win(&b), None);
    }

    fn assert_ai_never_loses(b: &mut Board, human_to_move: bool) {
        if check_win(b).is_some() || is_full(b) {
            assert_ne!(check_win(b), Some(Player::Human), "human won:\n{}", b);
            return;
        }
        if human_to_move {
            for pos in get_empty_cells(b) {
                b.set(pos, Mark::Human);
                assert_ai_never_loses(b, false);
                b.clear(pos);
            }
        } else {
            let before = *b;
            let bot_move = choose_move(b).unwrap();
            assert_ai_never_loses(b, true);
            b.clear(bot_move.position);
            assert_eq!(*b, before);
        }
    }

    #[test]
    fn test_ai_never_loses_when_human_starts() {
        assert_ai_never_loses(&mut Board::new(), true);
    }

    #[test]
    fn test_ai_never_loses_when_ai_starts() {
        assert_ai_never_loses(&mut Board::new(), false);
    }
}
