//! Hint Clock - a polling display for shared escape-room timer state
//!
//! This library polls an endpoint for `start,stop,hints,pause` snapshots,
//! derives the elapsed time and publishes the clock and hints regions to the
//! terminal and a small HTTP display server.

pub mod config;
pub mod state;
pub mod display;
pub mod api;
pub mod services;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::{AppState, DisplayState, TimerPhase, TimerState};
pub use api::create_router;
pub use services::{EndpointClient, ParseError, PollError};
pub use utils::signals::shutdown_signal;
