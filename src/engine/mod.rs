//! The minimax engine: static window heuristic, depth-limited alpha-beta
//! search, and the agents that wrap them for game play.

mod agent;
mod eval;
mod search;

pub use agent::{Agent, DepthPolicy, MinimaxAgent, RandomAgent};
pub use eval::{Evaluator, HeuristicWeights};
pub use search::{SearchEngine, SearchResult, WIN_SCORE};
