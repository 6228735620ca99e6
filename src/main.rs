use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use minimax_connect_four::config::AppConfig;
use minimax_connect_four::stats::{collect_statistics_with, StatsStore};
use minimax_connect_four::ui::App;

/// Connect Four with a minimax bot.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax bot")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Run a headless statistics batch of N games and append to the stats
    /// file instead of starting the UI
    #[arg(long, value_name = "GAMES")]
    stats: Option<usize>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.stats {
        Some(games) => run_headless_stats(games, &config),
        None => run_tui(config),
    }
}

fn run_headless_stats(games: usize, config: &AppConfig) -> Result<()> {
    println!("Playing {games} automated games at depth {}...", config.search.stats_depth);
    let record = collect_statistics_with(games, config, |done| {
        println!("  game {done}/{games} finished");
    });

    println!("Total games:     {}", record.total_games);
    println!("Bot win rate:    {:.1}%", record.bot_win_rate);
    println!("Player win rate: {:.1}%", record.player_win_rate);
    println!("Tie rate:        {:.1}%", record.tie_rate);

    let store = StatsStore::new(&config.stats.output_path);
    store
        .append(&record)
        .with_context(|| format!("saving statistics to {}", store.path().display()))?;
    println!("Appended to {}", store.path().display());
    Ok(())
}

fn run_tui(config: AppConfig) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run
    let mut app = App::new(config);
    let res = app.run(&mut terminal);

    // Restore terminal state before reporting any error
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res.context("running the terminal UI")
}
