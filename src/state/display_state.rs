//! Rendered display and poll bookkeeping

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{TimerPhase, TimerState};
use crate::display::{compute_score, format_clock, format_hints};

/// Contents of the clock and hints regions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayState {
    pub clock: String,
    pub hints: String,
    pub phase: TimerPhase,
    pub elapsed_ticks: i64,
    pub score: Option<f64>,
    /// Set while the latest poll failed or no poll has succeeded yet
    pub stale: bool,
}

impl DisplayState {
    /// Render a timer snapshot at the given tick
    pub fn render(timer: &TimerState, now_tick: i64, stale: bool) -> Self {
        let elapsed_ticks = timer.elapsed(now_tick);
        Self {
            clock: format_clock(elapsed_ticks),
            hints: format_hints(timer.hints),
            phase: timer.phase(),
            elapsed_ticks,
            score: compute_score(elapsed_ticks, timer.hints),
            stale,
        }
    }

    /// Single terminal line holding both regions
    pub fn status_line(&self) -> String {
        if self.stale {
            format!("{}  {}  [offline]", self.clock, self.hints)
        } else {
            format!("{}  {}", self.clock, self.hints)
        }
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::render(&TimerState::default(), 0, true)
    }
}

/// Counters describing how polling has gone so far
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PollStats {
    pub successes: u64,
    pub failures: u64,
    pub consecutive_failures: u64,
    pub last_success_time: Option<DateTime<Utc>>,
    pub last_error: Option<String>,
    pub last_error_time: Option<DateTime<Utc>>,
}

impl PollStats {
    pub fn record_success(&mut self) {
        self.successes += 1;
        self.consecutive_failures = 0;
        self.last_success_time = Some(Utc::now());
    }

    pub fn record_failure(&mut self, error: String) {
        self.failures += 1;
        self.consecutive_failures += 1;
        self.last_error = Some(error);
        self.last_error_time = Some(Utc::now());
    }

    /// The display is stale until the first success and after any failure
    pub fn is_stale(&self) -> bool {
        self.successes == 0 || self.consecutive_failures > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_display_is_blank_and_stale() {
        let display = DisplayState::default();
        assert_eq!(display.clock, "0:00:00");
        assert_eq!(display.hints, "Hints: 0");
        assert_eq!(display.phase, TimerPhase::NotStarted);
        assert!(display.stale);
        assert_eq!(display.score, None);
    }

    #[test]
    fn render_running_timer() {
        let timer = TimerState::new(1_000, 0, 2, 0);
        let display = DisplayState::render(&timer, 1_000 + 6_015, false);
        assert_eq!(display.clock, "0:10:01");
        assert_eq!(display.hints, "Hints: 2");
        assert_eq!(display.phase, TimerPhase::Running);
        assert_eq!(display.status_line(), "0:10:01  Hints: 2");
    }

    #[test]
    fn stale_line_is_marked() {
        let display = DisplayState::render(&TimerState::new(10, 0, 0, 20), 0, true);
        assert_eq!(display.status_line(), "0:00:01  Hints: 0  [offline]");
    }

    #[test]
    fn stats_track_failure_streaks() {
        let mut stats = PollStats::default();
        assert!(stats.is_stale());

        stats.record_success();
        assert!(!stats.is_stale());

        stats.record_failure("status 500".to_string());
        stats.record_failure("status 502".to_string());
        assert!(stats.is_stale());
        assert_eq!(stats.consecutive_failures, 2);
        assert_eq!(stats.last_error.as_deref(), Some("status 502"));

        stats.record_success();
        assert!(!stats.is_stale());
        assert_eq!(stats.failures, 2);
        assert_eq!(stats.successes, 2);
    }
}
