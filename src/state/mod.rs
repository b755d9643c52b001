//! State management module
//!
//! This module contains the timer snapshot, the rendered display and the
//! shared application state that ties them together.

pub mod timer_state;
pub mod display_state;
pub mod app_state;

// Re-export main types
pub use timer_state::{current_tick, tick_at, TimerPhase, TimerState, TICKS_PER_SECOND};
pub use display_state::{DisplayState, PollStats};
pub use app_state::AppState;
