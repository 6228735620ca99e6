use serde::{Deserialize, Serialize};

use crate::game::{Board, Cell, Piece, COLS, ROWS, WINDOW};

/// Heuristic weights, tunable from the TOML config file.
///
/// Note the asymmetry: an opponent open three costs a flat `block_penalty`,
/// with no positive mirror of the `three` bonus. That is how the heuristic is
/// meant to behave, not an oversight to balance out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicWeights {
    /// Bonus per own piece in the center column.
    pub center: i64,
    /// Four own pieces in a window.
    pub four: i64,
    /// Three own pieces plus one empty cell.
    pub three: i64,
    /// Two own pieces plus two empty cells.
    pub two: i64,
    /// Subtracted when the opponent has three pieces plus one empty cell.
    pub block_penalty: i64,
}

impl Default for HeuristicWeights {
    fn default() -> Self {
        HeuristicWeights {
            center: 3,
            four: 100,
            three: 5,
            two: 2,
            block_penalty: 4,
        }
    }
}

/// Static positional evaluator: sums a center-column bias and a score for
/// every 4-cell window along rows, columns, and both diagonals.
#[derive(Debug, Clone, Copy)]
pub struct Evaluator {
    weights: HeuristicWeights,
}

impl Evaluator {
    pub fn new(weights: HeuristicWeights) -> Self {
        Evaluator { weights }
    }

    /// How favorable `board` looks for `piece`, independent of whose turn it
    /// is. Pure and total: every window is visited exactly once.
    pub fn score(&self, board: &Board, piece: Piece) -> i64 {
        let own = piece.to_cell();
        let mut score = 0;

        // Center column controls the most winning lines.
        let center = COLS / 2;
        for row in 0..ROWS {
            if board.get(row, center) == own {
                score += self.weights.center;
            }
        }

        // Horizontal windows
        for row in 0..ROWS {
            for col in 0..=COLS - WINDOW {
                score += self.score_window(piece, |i| board.get(row, col + i));
            }
        }

        // Vertical windows
        for col in 0..COLS {
            for row in 0..=ROWS - WINDOW {
                score += self.score_window(piece, |i| board.get(row + i, col));
            }
        }

        // Ascending diagonals (/)
        for row in 0..=ROWS - WINDOW {
            for col in 0..=COLS - WINDOW {
                score += self.score_window(piece, |i| board.get(row + i, col + i));
            }
        }

        // Descending diagonals (\)
        for row in 0..=ROWS - WINDOW {
            for col in 0..=COLS - WINDOW {
                score += self.score_window(piece, |i| board.get(row + WINDOW - 1 - i, col + i));
            }
        }

        score
    }

    fn score_window(&self, piece: Piece, cell_at: impl Fn(usize) -> Cell) -> i64 {
        let own_cell = piece.to_cell();
        let opp_cell = piece.other().to_cell();

        let mut own = 0;
        let mut opp = 0;
        let mut empty = 0;
        for i in 0..WINDOW {
            match cell_at(i) {
                c if c == own_cell => own += 1,
                c if c == opp_cell => opp += 1,
                _ => empty += 1,
            }
        }

        let mut score = 0;
        if own == 4 {
            score += self.weights.four;
        } else if own == 3 && empty == 1 {
            score += self.weights.three;
        } else if own == 2 && empty == 2 {
            score += self.weights.two;
        }
        // The defensive penalty applies on top of any own-piece bonus.
        if opp == 3 && empty == 1 {
            score -= self.weights.block_penalty;
        }
        score
    }
}
