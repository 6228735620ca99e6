//! Terminal UI: menu, game screen with colored board rendering, and the
//! statistics screen with its progress spinner.

mod app;
mod game_view;
mod menu_view;
mod stats_view;

pub use app::App;
