//! Win/tie statistics over batches of fully automated games, persisted as an
//! ordered JSON array of run summaries.

use std::fs;
use std::path::{Path, PathBuf};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::engine::{Agent, DepthPolicy, MinimaxAgent};
use crate::error::StatsError;
use crate::game::{GameOutcome, GameState, Piece};

/// Summary of one statistics batch. Rates are percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsRecord {
    pub total_games: usize,
    pub bot_win_rate: f64,
    pub player_win_rate: f64,
    pub tie_rate: f64,
}

/// Play `num_games` fully automated games (minimax on both sides at the
/// configured statistics depth, random first mover) and aggregate the
/// outcomes into one record.
pub fn collect_statistics(num_games: usize, config: &AppConfig) -> StatsRecord {
    collect_statistics_with(num_games, config, |_| {})
}

/// Like [`collect_statistics`], invoking `on_game_finished` with the number
/// of completed games after each one, so a caller can drive a progress
/// indicator from another thread.
pub fn collect_statistics_with(
    num_games: usize,
    config: &AppConfig,
    mut on_game_finished: impl FnMut(usize),
) -> StatsRecord {
    let depth = DepthPolicy::Fixed(config.search.stats_depth);
    let mut bot_agent = MinimaxAgent::new(Piece::Bot, depth, config.weights);
    let mut player_agent = MinimaxAgent::new(Piece::Player, depth, config.weights);
    let mut rng = rand::rng();

    let mut bot_wins = 0;
    let mut player_wins = 0;
    let mut ties = 0;

    for game in 0..num_games {
        let first = if rng.random_bool(0.5) {
            Piece::Bot
        } else {
            Piece::Player
        };
        let mut state = GameState::new(first);

        while !state.is_terminal() {
            let col = match state.current() {
                Piece::Bot => bot_agent.select_column(&state),
                Piece::Player => player_agent.select_column(&state),
            };
            state
                .apply_move(col)
                .expect("agent selected a legal column");
        }

        match state.outcome() {
            Some(GameOutcome::Winner(Piece::Bot)) => bot_wins += 1,
            Some(GameOutcome::Winner(Piece::Player)) => player_wins += 1,
            _ => ties += 1,
        }
        on_game_finished(game + 1);
    }

    let total = num_games as f64;
    StatsRecord {
        total_games: num_games,
        bot_win_rate: bot_wins as f64 / total * 100.0,
        player_win_rate: player_wins as f64 / total * 100.0,
        tie_rate: ties as f64 / total * 100.0,
    }
}

/// Appends run summaries to a JSON file holding an ordered array of records.
#[derive(Debug, Clone)]
pub struct StatsStore {
    path: PathBuf,
}

impl StatsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        StatsStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All records persisted so far. A missing file is an empty history.
    pub fn load(&self) -> Result<Vec<StatsRecord>, StatsError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let json = fs::read_to_string(&self.path).map_err(|e| StatsError::FileRead {
            path: self.path.clone(),
            source: e,
        })?;
        serde_json::from_str(&json).map_err(|e| StatsError::Parse {
            path: self.path.clone(),
            source: e,
        })
    }

    /// Read the existing history, append `record`, and write the whole array
    /// back pretty-printed.
    pub fn append(&self, record: &StatsRecord) -> Result<(), StatsError> {
        let mut records = self.load()?;
        records.push(record.clone());
        let json = serde_json::to_string_pretty(&records)?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
