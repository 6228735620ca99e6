pub const ROWS: usize = 6;
pub const COLS: usize = 7;
/// Length of the line needed to win, and of every scored window.
pub const WINDOW: usize = 4;

use super::piece::Piece;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Player,
    Bot,
}

/// A 6x7 Connect Four grid. Row 0 is the bottom row, so a dropped piece
/// lands at the lowest empty row of its column.
///
/// The board is `Copy`: the search engine explores hypothetical moves on
/// independent copies and never mutates the caller's board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    /// Row 0 is the bottom, row 5 is the top.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// True iff a piece can still be dropped into `col`.
    /// `col` must be in range; callers validate user input before calling.
    pub fn is_valid_move(&self, col: usize) -> bool {
        self.cells[ROWS - 1][col] == Cell::Empty
    }

    /// Lowest empty row of `col`, or `None` when the column is full.
    pub fn next_open_row(&self, col: usize) -> Option<usize> {
        (0..ROWS).find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// Set a single cell. No validation: legality is the caller's job, via
    /// `is_valid_move` / `next_open_row`.
    pub fn place(&mut self, row: usize, col: usize, piece: Piece) {
        self.cells[row][col] = piece.to_cell();
    }

    /// Columns that can still accept a piece, in ascending order.
    /// An empty result means the board is full.
    pub fn valid_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| self.is_valid_move(col)).collect()
    }

    /// True iff `piece` has four in a row anywhere on the board.
    /// All four line families are scanned; the first hit short-circuits.
    pub fn is_win(&self, piece: Piece) -> bool {
        let target = piece.to_cell();

        // Horizontal
        for row in 0..ROWS {
            for col in 0..=COLS - WINDOW {
                if (0..WINDOW).all(|i| self.cells[row][col + i] == target) {
                    return true;
                }
            }
        }

        // Vertical
        for col in 0..COLS {
            for row in 0..=ROWS - WINDOW {
                if (0..WINDOW).all(|i| self.cells[row + i][col] == target) {
                    return true;
                }
            }
        }

        // Ascending diagonal (/)
        for row in 0..=ROWS - WINDOW {
            for col in 0..=COLS - WINDOW {
                if (0..WINDOW).all(|i| self.cells[row + i][col + i] == target) {
                    return true;
                }
            }
        }

        // Descending diagonal (\)
        for row in 0..=ROWS - WINDOW {
            for col in 0..=COLS - WINDOW {
                if (0..WINDOW).all(|i| self.cells[row + WINDOW - 1 - i][col + i] == target) {
                    return true;
                }
            }
        }

        false
    }

    /// True iff either side has won or the board is full.
    pub fn is_terminal(&self) -> bool {
        self.is_win(Piece::Player) || self.is_win(Piece::Bot) || self.valid_moves().is_empty()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Drop a piece into `col`, returning the row it landed in.
    fn drop(board: &mut Board, col: usize, piece: Piece) -> usize {
        let row = board.next_open_row(col).expect("column is full");
        board.place(row, col, piece);
        row
    }

    /// Fill the whole board with a pattern that contains no four in a row:
    /// cell(r, c) is Player iff (c in {0,1,4,5}) XOR (r odd).
    fn full_draw_board() -> Board {
        let mut board = Board::new();
        for col in 0..COLS {
            for row in 0..ROWS {
                let base = matches!(col, 0 | 1 | 4 | 5);
                let piece = if base != (row % 2 == 1) {
                    Piece::Player
                } else {
                    Piece::Bot
                };
                board.place(row, col, piece);
            }
        }
        board
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.valid_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_pieces_stack_from_the_bottom() {
        let mut board = Board::new();

        let row = drop(&mut board, 3, Piece::Player);
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Cell::Player);

        let row = drop(&mut board, 3, Piece::Bot);
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Cell::Bot);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            drop(&mut board, 0, Piece::Player);
        }

        assert!(!board.is_valid_move(0));
        assert_eq!(board.next_open_row(0), None);
        assert!(!board.valid_moves().contains(&0));
    }

    #[test]
    fn test_valid_moves_ascending() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            drop(&mut board, 2, Piece::Bot);
            drop(&mut board, 5, Piece::Player);
        }
        assert_eq!(board.valid_moves(), vec![0, 1, 3, 4, 6]);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            drop(&mut board, col, Piece::Player);
        }
        assert!(board.is_win(Piece::Player));
        assert!(!board.is_win(Piece::Bot));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            drop(&mut board, 3, Piece::Bot);
        }
        assert!(board.is_win(Piece::Bot));
        assert!(!board.is_win(Piece::Player));
    }

    #[test]
    fn test_ascending_diagonal_win() {
        let mut board = Board::new();
        // Bot at (0,0), (1,1), (2,2), (3,3) with Player filler underneath.
        for col in 0..4 {
            for _ in 0..col {
                drop(&mut board, col, Piece::Player);
            }
            drop(&mut board, col, Piece::Bot);
        }
        assert!(board.is_win(Piece::Bot));
    }

    #[test]
    fn test_descending_diagonal_win() {
        let mut board = Board::new();
        // Bot at (3,0), (2,1), (1,2), (0,3) with Player filler underneath.
        for col in 0..4 {
            for _ in 0..3 - col {
                drop(&mut board, col, Piece::Player);
            }
            drop(&mut board, col, Piece::Bot);
        }
        assert!(board.is_win(Piece::Bot));
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            drop(&mut board, col, Piece::Player);
        }
        for _ in 0..3 {
            drop(&mut board, 6, Piece::Bot);
        }
        assert!(!board.is_win(Piece::Player));
        assert!(!board.is_win(Piece::Bot));
        assert!(!board.is_terminal());
    }

    #[test]
    fn test_full_board_without_winner_is_terminal() {
        let board = full_draw_board();
        assert!(board.valid_moves().is_empty());
        assert!(!board.is_win(Piece::Player));
        assert!(!board.is_win(Piece::Bot));
        assert!(board.is_terminal());
    }
}
