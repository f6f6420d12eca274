pub mod calendar;
pub mod clock;
pub mod commands;
pub mod config;
pub mod error;
pub mod formatting;
pub mod greeting;
pub mod tui;
pub mod types;
