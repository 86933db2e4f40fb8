//! The `seekgrid` program: pick a strategy, a grid and a visualization, then
//! watch the search.

pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod presets;
pub mod prompt;

pub use app::run;
