//! Core module: the board state engine shared by every front end

pub mod board;
pub mod config;
pub mod document;
pub mod models;
pub mod progress;
pub mod store;

/// Returns the current version of the `MallaTracker` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
