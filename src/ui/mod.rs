//! GUI module for the Gomoku game
//!
//! Native front-end using egui/eframe. It only submits cells to the game
//! pipeline and renders the returned state.

mod app;
mod board_view;
mod session;
mod theme;

pub use app::GomokuApp;
pub use session::Session;
