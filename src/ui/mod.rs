//! Terminal front end: drives a [`GameEngine`](crate::game::GameEngine)
//! from keyboard input, animates falling tokens and flashes the winning line.

mod animation;
mod app;
mod board_widget;
mod game_view;

pub use animation::{DropAnimation, Flash};
pub use app::App;
pub use board_widget::{BoardOverlay, Palette};
