//! Clock, hint and score formatting

const TICKS_PER_MINUTE: i64 = 600;
const TICKS_PER_HOUR: i64 = 36_000;

/// Label written in front of the hint count
pub const HINTS_LABEL: &str = "Hints: ";

/// Format elapsed ticks as `H:MM:SS`. Negative values render as zero.
pub fn format_clock(elapsed_ticks: i64) -> String {
    let elapsed = elapsed_ticks.max(0);
    let seconds = (elapsed / 10) % 60;
    let minutes = (elapsed / TICKS_PER_MINUTE) % 60;
    let hours = elapsed / TICKS_PER_HOUR;

    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}

pub fn format_hints(hints: i64) -> String {
    format!("{}{}", HINTS_LABEL, hints)
}

/// Operator score: faster runs and fewer hints score higher.
/// Rounded to three decimals, `None` before any time has elapsed.
pub fn compute_score(elapsed_ticks: i64, hints: i64) -> Option<f64> {
    if elapsed_ticks <= 0 || hints < 0 {
        return None;
    }

    let penalty = hints as f64 / 4.0 + 1.0;
    let score = 10_000_000.0 / (elapsed_ticks as f64 * penalty);
    Some((score * 1000.0).round() / 1000.0)
}
