//! Background tasks module
//!
//! This module contains the periodic tasks that keep the clock in sync:
//! polling the endpoint, rendering the display and drawing it on the terminal.

pub mod poller;
pub mod render;
pub mod terminal;

// Re-export main functions
pub use poller::{poll_once, poll_task};
pub use render::render_task;
pub use terminal::terminal_display_task;
