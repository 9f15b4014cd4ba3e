//! Ratatui front-end: a sidebar menu with the data grid, the customer form
//! and the insight charts in the main pane.

mod app;
mod forms;
mod helpers;
mod screens;
mod terminal;

pub use app::App;
pub use terminal::run_app;
