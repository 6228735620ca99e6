//! # Minimax Connect Four
//!
//! Connect Four played against a fixed-depth minimax bot with alpha-beta
//! pruning and a windowed positional heuristic, rendered in a terminal UI
//! built with Ratatui. Batches of fully automated games can be played to
//! gather win/tie statistics, which are appended to a JSON history file.
//!
//! ## Modules
//!
//! - [`game`] — Core game model: board, pieces, game state machine
//! - [`engine`] — Static evaluator, alpha-beta search, playing agents
//! - [`stats`] — Automated game batches and JSON persistence
//! - [`ui`] — Terminal UI: menu, game screen, statistics screen
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod stats;
pub mod ui;
