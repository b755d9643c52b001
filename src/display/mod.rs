//! Display formatting module
//!
//! Pure functions turning elapsed ticks and hint counts into the text shown
//! in the clock and hints regions.

pub mod format;

pub use format::{compute_score, format_clock, format_hints, HINTS_LABEL};
