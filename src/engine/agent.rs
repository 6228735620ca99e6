use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{GameState, Piece};

use super::eval::HeuristicWeights;
use super::search::SearchEngine;

/// Interface for anything that can pick a column: the minimax engine, or a
/// random baseline in tests. The caller guarantees the game is not over.
pub trait Agent {
    /// Select a column for the current position.
    fn select_column(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}

/// How an agent picks its search depth each turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepthPolicy {
    /// Same depth every turn (interactive play and statistics runs).
    Fixed(u32),
    /// A fresh uniform draw per turn (bot-vs-bot exhibition games).
    Uniform { min: u32, max: u32 },
}

/// Plays one side via the alpha-beta search engine.
pub struct MinimaxAgent {
    piece: Piece,
    policy: DepthPolicy,
    engine: SearchEngine,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(piece: Piece, policy: DepthPolicy, weights: HeuristicWeights) -> Self {
        MinimaxAgent {
            piece,
            policy,
            engine: SearchEngine::new(weights),
            rng: StdRng::from_os_rng(),
        }
    }

    fn next_depth(&mut self) -> u32 {
        match self.policy {
            DepthPolicy::Fixed(depth) => depth,
            DepthPolicy::Uniform { min, max } => self.rng.random_range(min..=max),
        }
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, state: &GameState) -> usize {
        let depth = self.next_depth();
        // The Bot side maximizes; the Player side minimizes the Bot's score.
        let maximizing = self.piece == Piece::Bot;
        let result = self
            .engine
            .search(state.board(), depth, i64::MIN, i64::MAX, maximizing);
        result
            .column
            .expect("search on a live board returns a column")
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}

/// Selects uniformly at random from the legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, state: &GameState) -> usize {
        let moves = state.board().valid_moves();
        assert!(!moves.is_empty(), "no valid moves available");
        moves[self.rng.random_range(0..moves.len())]
    }

    fn name(&self) -> &str {
        "Random"
    }
}
