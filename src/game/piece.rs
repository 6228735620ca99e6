use super::board::Cell;

/// One of the two sides: the human player or the minimax bot. Doubles as the
/// mover for search and evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    Player,
    Bot,
}

impl Piece {
    /// Get the opposing piece
    pub fn other(self) -> Piece {
        match self {
            Piece::Player => Piece::Bot,
            Piece::Bot => Piece::Player,
        }
    }

    /// Convert piece to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Piece::Player => Cell::Player,
            Piece::Bot => Cell::Bot,
        }
    }

    /// Get piece name for display
    pub fn name(self) -> &'static str {
        match self {
            Piece::Player => "Player",
            Piece::Bot => "Bot",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_piece() {
        assert_eq!(Piece::Player.other(), Piece::Bot);
        assert_eq!(Piece::Bot.other(), Piece::Player);
    }

    #[test]
    fn test_to_cell() {
        assert_eq!(Piece::Player.to_cell(), Cell::Player);
        assert_eq!(Piece::Bot.to_cell(), Cell::Bot);
    }

    #[test]
    fn test_piece_name() {
        assert_eq!(Piece::Player.name(), "Player");
        assert_eq!(Piece::Bot.name(), "Bot");
    }
}
