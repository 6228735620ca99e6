use crate::game::{Board, Piece};

use super::eval::{Evaluator, HeuristicWeights};

/// Score of a decided game; dwarfs anything the static heuristic can produce.
pub const WIN_SCORE: i64 = 9_999_999;

/// Outcome of one search call: the chosen column (absent in base cases, where
/// only the score is meaningful) and the minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: Option<usize>,
    pub score: i64,
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// No transposition table, no iterative deepening, no move ordering beyond
/// ascending column index: depth is the only control over search cost. Each
/// recursive step works on its own copy of the board, so the caller's board
/// is never touched.
#[derive(Debug, Clone, Copy)]
pub struct SearchEngine {
    evaluator: Evaluator,
}

impl SearchEngine {
    pub fn new(weights: HeuristicWeights) -> Self {
        SearchEngine {
            evaluator: Evaluator::new(weights),
        }
    }

    /// Explore the move tree below `board` to `depth` plies. `maximizing`
    /// means the Bot is to move; the minimizing side moves the Player piece.
    /// Callers seed `alpha`/`beta` with `i64::MIN`/`i64::MAX`.
    ///
    /// At the depth horizon the static heuristic is always evaluated from the
    /// Bot's perspective, whichever side is to move.
    ///
    /// Ties between equally scored columns resolve to the lowest index: only
    /// a strictly better score replaces the chosen column.
    pub fn search(
        &self,
        board: &Board,
        depth: u32,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
    ) -> SearchResult {
        if depth == 0 || board.is_terminal() {
            return SearchResult {
                column: None,
                score: self.leaf_score(board),
            };
        }

        if maximizing {
            let mut column = None;
            let mut value = i64::MIN;
            for col in board.valid_moves() {
                let mut child = *board;
                let row = child.next_open_row(col).expect("valid move has an open row");
                child.place(row, col, Piece::Bot);
                let score = self.search(&child, depth - 1, alpha, beta, false).score;
                if score > value {
                    value = score;
                    column = Some(col);
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            }
            SearchResult { column, score: value }
        } else {
            let mut column = None;
            let mut value = i64::MAX;
            for col in board.valid_moves() {
                let mut child = *board;
                let row = child.next_open_row(col).expect("valid move has an open row");
                child.place(row, col, Piece::Player);
                let score = self.search(&child, depth - 1, alpha, beta, true).score;
                if score < value {
                    value = score;
                    column = Some(col);
                }
                beta = beta.min(value);
                if alpha >= beta {
                    break;
                }
            }
            SearchResult { column, score: value }
        }
    }

    fn leaf_score(&self, board: &Board) -> i64 {
        if board.is_win(Piece::Bot) {
            WIN_SCORE
        } else if board.is_win(Piece::Player) {
            -WIN_SCORE
        } else if board.valid_moves().is_empty() {
            0 // true draw
        } else {
            // Depth exhausted on a live board: heuristic, always for the Bot.
            self.evaluator.score(board, Piece::Bot)
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn drop(board: &mut Board, col: usize, piece: Piece) {
        let row = board.next_open_row(col).expect("column is full");
        board.place(row, col, piece);
    }

    fn engine() -> SearchEngine {
        SearchEngine::new(HeuristicWeights::default())
    }

    /// Reference minimax without pruning, for differential testing.
    fn plain_minimax(engine: &SearchEngine, board: &Board, depth: u32, maximizing: bool) -> i64 {
        if depth == 0 || board.is_terminal() {
            return engine.leaf_score(board);
        }
        let mover = if maximizing { Piece::Bot } else { Piece::Player };
        let scores = board.valid_moves().into_iter().map(|col| {
            let mut child = *board;
            drop(&mut child, col, mover);
            plain_minimax(engine, &child, depth - 1, !maximizing)
        });
        if maximizing {
            scores.max().expect("non-terminal board has moves")
        } else {
            scores.min().expect("non-terminal board has moves")
        }
    }

    /// Play `plies` random legal moves, alternating from a random first mover.
    fn random_board(rng: &mut StdRng, plies: usize) -> Board {
        let mut board = Board::new();
        let mut mover = if rng.random_bool(0.5) {
            Piece::Bot
        } else {
            Piece::Player
        };
        for _ in 0..plies {
            if board.is_terminal() {
                break;
            }
            let moves = board.valid_moves();
            let col = moves[rng.random_range(0..moves.len())];
            drop(&mut board, col, mover);
            mover = mover.other();
        }
        board
    }

    #[test]
    fn depth_zero_on_empty_board() {
        let result = engine().search(&Board::new(), 0, i64::MIN, i64::MAX, true);
        assert_eq!(result.column, None);
        assert_eq!(result.score, 0);
    }

    #[test]
    fn bot_win_at_root_scores_win() {
        let mut board = Board::new();
        for col in 0..4 {
            drop(&mut board, col, Piece::Bot);
        }
        for depth in [0, 3] {
            for maximizing in [true, false] {
                let result = engine().search(&board, depth, i64::MIN, i64::MAX, maximizing);
                assert_eq!(result.column, None);
                assert_eq!(result.score, WIN_SCORE);
            }
        }
    }

    #[test]
    fn player_win_at_root_scores_loss() {
        let mut board = Board::new();
        for _ in 0..4 {
            drop(&mut board, 6, Piece::Player);
        }
        for depth in [0, 3] {
            for maximizing in [true, false] {
                let result = engine().search(&board, depth, i64::MIN, i64::MAX, maximizing);
                assert_eq!(result.column, None);
                assert_eq!(result.score, -WIN_SCORE);
            }
        }
    }

    #[test]
    fn finds_immediate_winning_column() {
        // Bot has an open three on the bottom row; only column 3 completes it.
        let mut board = Board::new();
        for col in 0..3 {
            drop(&mut board, col, Piece::Bot);
            drop(&mut board, col, Piece::Player);
        }
        let result = engine().search(&board, 1, i64::MIN, i64::MAX, true);
        assert_eq!(result.column, Some(3));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn blocks_opponent_winning_column() {
        // Player threatens column 3; every other Bot reply loses.
        let mut board = Board::new();
        for col in 0..3 {
            drop(&mut board, col, Piece::Player);
        }
        drop(&mut board, 6, Piece::Bot);
        drop(&mut board, 6, Piece::Bot);
        let result = engine().search(&board, 2, i64::MIN, i64::MAX, true);
        assert_eq!(result.column, Some(3));
    }

    #[test]
    fn tie_breaks_to_lowest_column() {
        // On an empty board every Player move scores 0 for the Bot heuristic,
        // so the minimizing side keeps the first column it examined.
        let result = engine().search(&Board::new(), 1, i64::MIN, i64::MAX, false);
        assert_eq!(result.column, Some(0));
        assert_eq!(result.score, 0);
    }

    #[test]
    fn full_board_draw_scores_zero_at_any_depth() {
        // Full board with no winner: each column alternates pieces, columns
        // grouped as AABBAAB, which leaves no four in a row anywhere.
        let mut board = Board::new();
        for col in 0..crate::game::COLS {
            for row in 0..crate::game::ROWS {
                let base = matches!(col, 0 | 1 | 4 | 5);
                let piece = if base != (row % 2 == 1) {
                    Piece::Player
                } else {
                    Piece::Bot
                };
                board.place(row, col, piece);
            }
        }
        assert!(board.is_terminal());
        for depth in [0, 2, 5] {
            let result = engine().search(&board, depth, i64::MIN, i64::MAX, true);
            assert_eq!(result.column, None);
            assert_eq!(result.score, 0);
        }
    }

    #[test]
    fn pruning_never_changes_the_score() {
        let engine = engine();
        let mut rng = StdRng::seed_from_u64(0xC4);
        for _ in 0..25 {
            let plies = rng.random_range(0..=12);
            let board = random_board(&mut rng, plies);
            if board.is_terminal() {
                continue;
            }
            for depth in 1..=4 {
                for maximizing in [true, false] {
                    let pruned = engine.search(&board, depth, i64::MIN, i64::MAX, maximizing);
                    let reference = plain_minimax(&engine, &board, depth, maximizing);
                    assert_eq!(
                        pruned.score, reference,
                        "score diverged at depth {depth}, maximizing {maximizing}"
                    );
                }
            }
        }
    }
}
