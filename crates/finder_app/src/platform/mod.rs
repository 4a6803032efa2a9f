//! Terminal front end: argument parsing, event loop and rendering.
mod app;
pub mod config;
mod effects;
mod input;
mod ui;

pub use app::run_app;
