use std::io;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand::Rng;
use ratatui::{backend::Backend, Terminal};

use crate::config::AppConfig;
use crate::engine::{Agent, DepthPolicy, MinimaxAgent};
use crate::game::{GameOutcome, GameState, MoveError, Piece, COLS};
use crate::stats::{self, StatsRecord, StatsStore};

pub(crate) const MENU_ITEMS: [&str; 4] = [
    "Play against the bot",
    "Watch bot vs bot",
    "Gather statistics",
    "Quit",
];

/// Spinner shown while a statistics batch runs.
pub(crate) const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum GameMode {
    HumanVsBot,
    BotVsBot,
}

/// One running game and the agents that play in it.
pub(crate) struct GameScreen {
    pub(crate) mode: GameMode,
    pub(crate) state: GameState,
    pub(crate) selected_column: usize,
    pub(crate) message: Option<String>,
    bot: MinimaxAgent,
    /// Plays the Player piece in exhibition games.
    rival: Option<MinimaxAgent>,
}

impl GameScreen {
    fn new(mode: GameMode, config: &AppConfig) -> Self {
        let (bot_policy, rival) = match mode {
            GameMode::HumanVsBot => (DepthPolicy::Fixed(config.search.interactive_depth), None),
            GameMode::BotVsBot => {
                let policy = DepthPolicy::Uniform {
                    min: config.search.exhibition_min_depth,
                    max: config.search.exhibition_max_depth,
                };
                (policy, Some(MinimaxAgent::new(Piece::Player, policy, config.weights)))
            }
        };

        let first = if rand::rng().random_bool(0.5) {
            Piece::Bot
        } else {
            Piece::Player
        };

        let mut screen = GameScreen {
            mode,
            state: GameState::new(first),
            selected_column: COLS / 2,
            message: None,
            bot: MinimaxAgent::new(Piece::Bot, bot_policy, config.weights),
            rival,
        };

        // When the bot draws the first turn of a human game it replies
        // immediately; exhibition games advance on ticks instead.
        if mode == GameMode::HumanVsBot && first == Piece::Bot {
            screen.bot_reply();
        }
        screen
    }

    pub(crate) fn mode_name(&self) -> &'static str {
        match self.mode {
            GameMode::HumanVsBot => "Human vs Bot",
            GameMode::BotVsBot => "Bot vs Bot",
        }
    }

    fn handle_key(&mut self, key: KeyEvent, config: &AppConfig) {
        self.message = None;

        match key.code {
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < COLS {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                if self.mode == GameMode::HumanVsBot {
                    self.drop_human_piece();
                }
            }
            KeyCode::Char('r') => {
                *self = GameScreen::new(self.mode, config);
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    fn drop_human_piece(&mut self) {
        if self.state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.state.apply_move(self.selected_column) {
            Ok(()) => {
                self.announce_outcome();
                if !self.state.is_terminal() {
                    self.bot_reply();
                }
            }
            Err(MoveError::ColumnFull) => {
                self.message = Some("Column is full. Choose another column.".to_string());
            }
            Err(MoveError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is over!".to_string());
            }
        }
    }

    /// Search and apply the bot's move. Synchronous: the UI blocks for the
    /// duration of the search, which is short at the configured depths.
    fn bot_reply(&mut self) {
        let col = self.bot.select_column(&self.state);
        if self.state.apply_move(col).is_ok() {
            self.announce_outcome();
        }
    }

    /// Advance an exhibition game by one ply.
    fn tick(&mut self) {
        if self.mode != GameMode::BotVsBot || self.state.is_terminal() {
            return;
        }
        let col = match self.state.current() {
            Piece::Bot => self.bot.select_column(&self.state),
            Piece::Player => self
                .rival
                .as_mut()
                .expect("exhibition games have a rival agent")
                .select_column(&self.state),
        };
        if self.state.apply_move(col).is_ok() {
            self.announce_outcome();
        }
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(piece) => format!("{} wins!", piece.name()),
                GameOutcome::Tie => "It's a tie!".to_string(),
            });
        }
    }
}

/// Statistics batch screen: a worker thread plays the games while the UI
/// spins, then the finished record is appended to the stats file.
pub(crate) enum StatsScreen {
    Running {
        rx: mpsc::Receiver<usize>,
        handle: Option<JoinHandle<StatsRecord>>,
        games_done: usize,
        total: usize,
        spinner_frame: usize,
    },
    Finished {
        record: Option<StatsRecord>,
        message: String,
    },
}

impl StatsScreen {
    fn start(config: &AppConfig) -> Self {
        let worker_config = config.clone();
        let total = config.stats.num_games;
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            stats::collect_statistics_with(total, &worker_config, |done| {
                let _ = tx.send(done);
            })
        });

        StatsScreen::Running {
            rx,
            handle: Some(handle),
            games_done: 0,
            total,
            spinner_frame: 0,
        }
    }

    /// Advance the spinner, drain progress updates, and when the worker is
    /// done persist its record and return the finished screen.
    fn tick(&mut self, config: &AppConfig) -> Option<StatsScreen> {
        let StatsScreen::Running {
            rx,
            handle,
            games_done,
            spinner_frame,
            ..
        } = self
        else {
            return None;
        };

        *spinner_frame = (*spinner_frame + 1) % SPINNER.len();
        while let Ok(done) = rx.try_recv() {
            *games_done = done;
        }

        if !handle.as_ref().is_some_and(|h| h.is_finished()) {
            return None;
        }
        let handle = handle.take().expect("worker handle still present");

        Some(match handle.join() {
            Ok(record) => {
                let store = StatsStore::new(&config.stats.output_path);
                let message = match store.append(&record) {
                    Ok(()) => format!("Appended to {}", store.path().display()),
                    Err(err) => format!("Failed to save statistics: {err}"),
                };
                StatsScreen::Finished {
                    record: Some(record),
                    message,
                }
            }
            Err(_) => StatsScreen::Finished {
                record: None,
                message: "Statistics run failed.".to_string(),
            },
        })
    }
}

pub(crate) enum Screen {
    Menu { selected: usize },
    Game(GameScreen),
    Stats(StatsScreen),
}

enum Action {
    None,
    OpenMenuItem(usize),
    BackToMenu,
    Quit,
}

pub struct App {
    config: AppConfig,
    screen: Screen,
    should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            config,
            screen: Screen::Menu { selected: 0 },
            should_quit: false,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
            self.on_tick();
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let mut action = Action::None;

        match &mut self.screen {
            Screen::Menu { selected } => match key.code {
                KeyCode::Up | KeyCode::Char('k') => *selected = selected.saturating_sub(1),
                KeyCode::Down | KeyCode::Char('j') => {
                    if *selected + 1 < MENU_ITEMS.len() {
                        *selected += 1;
                    }
                }
                KeyCode::Enter | KeyCode::Char(' ') => action = Action::OpenMenuItem(*selected),
                KeyCode::Char('q') | KeyCode::Esc => action = Action::Quit,
                _ => {}
            },
            Screen::Game(game) => match key.code {
                KeyCode::Esc => action = Action::BackToMenu,
                KeyCode::Char('q') => action = Action::Quit,
                _ => game.handle_key(key, &self.config),
            },
            Screen::Stats(stats) => match key.code {
                KeyCode::Char('q') => action = Action::Quit,
                KeyCode::Enter | KeyCode::Esc => {
                    // The batch itself is not cancellable; only the finished
                    // screen responds.
                    if matches!(stats, StatsScreen::Finished { .. }) {
                        action = Action::BackToMenu;
                    }
                }
                _ => {}
            },
        }

        match action {
            Action::None => {}
            Action::OpenMenuItem(item) => self.open_menu_item(item),
            Action::BackToMenu => self.screen = Screen::Menu { selected: 0 },
            Action::Quit => self.should_quit = true,
        }
    }

    fn open_menu_item(&mut self, item: usize) {
        match item {
            0 => self.screen = Screen::Game(GameScreen::new(GameMode::HumanVsBot, &self.config)),
            1 => self.screen = Screen::Game(GameScreen::new(GameMode::BotVsBot, &self.config)),
            2 => self.screen = Screen::Stats(StatsScreen::start(&self.config)),
            _ => self.should_quit = true,
        }
    }

    fn on_tick(&mut self) {
        let next = match &mut self.screen {
            Screen::Game(game) => {
                game.tick();
                None
            }
            Screen::Stats(stats) => stats.tick(&self.config),
            Screen::Menu { .. } => None,
        };
        if let Some(finished) = next {
            self.screen = Screen::Stats(finished);
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        match &self.screen {
            Screen::Menu { selected } => super::menu_view::render(frame, *selected),
            Screen::Game(game) => super::game_view::render(frame, game),
            Screen::Stats(stats) => super::stats_view::render(frame, stats),
        }
    }
}
