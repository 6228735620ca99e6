use super::board::COLS;
use super::{Board, Piece};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Piece),
    Tie,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// Drives a single game: holds the only long-lived board, alternates the
/// acting piece, and detects the end of the game. The caller picks the first
/// mover; game modes draw it at random.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current: Piece,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create an initial state with an empty board and `first` to move.
    pub fn new(first: Piece) -> Self {
        GameState {
            board: Board::new(),
            current: first,
            outcome: None,
        }
    }

    /// Piece to move next
    pub fn current(&self) -> Piece {
        self.current
    }

    /// Get reference to the board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if the game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Drop the current piece into `col`, check for a win or a full board,
    /// and hand the turn to the other side.
    pub fn apply_move(&mut self, col: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        if !self.board.is_valid_move(col) {
            return Err(MoveError::ColumnFull);
        }

        let row = self
            .board
            .next_open_row(col)
            .expect("non-full column has an open row");
        self.board.place(row, col, self.current);

        if self.board.is_win(self.current) {
            self.outcome = Some(GameOutcome::Winner(self.current));
        } else if self.board.valid_moves().is_empty() {
            self.outcome = Some(GameOutcome::Tie);
        }

        self.current = self.current.other();
        Ok(())
    }
}
