//! Timer state structure and elapsed-time calculation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ticks are tenths of a second since the Unix epoch
pub const TICKS_PER_SECOND: i64 = 10;

/// Latest timer snapshot reported by the server
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    /// Tick when timing began, 0 if not started
    pub start: i64,
    /// Tick when timing was stopped, 0 while active
    pub stop: i64,
    /// Hints used so far
    pub hints: i64,
    /// Tick when timing was paused, 0 if not paused
    pub pause: i64,
}

/// Display phase derived from which tick fields are set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimerPhase {
    #[default]
    NotStarted,
    Running,
    Paused,
    Stopped,
}

impl TimerPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimerPhase::NotStarted => "not_started",
            TimerPhase::Running => "running",
            TimerPhase::Paused => "paused",
            TimerPhase::Stopped => "stopped",
        }
    }

    /// Whether the displayed time still advances
    pub fn is_running(&self) -> bool {
        matches!(self, TimerPhase::Running)
    }
}

impl TimerState {
    pub fn new(start: i64, stop: i64, hints: i64, pause: i64) -> Self {
        Self { start, stop, hints, pause }
    }

    /// Derive the phase. A stopped timer wins over a paused one.
    pub fn phase(&self) -> TimerPhase {
        if self.start == 0 {
            TimerPhase::NotStarted
        } else if self.stop != 0 {
            TimerPhase::Stopped
        } else if self.pause != 0 {
            TimerPhase::Paused
        } else {
            TimerPhase::Running
        }
    }

    /// Elapsed ticks at `now_tick`. Saturates at the `i64` bounds.
    pub fn elapsed(&self, now_tick: i64) -> i64 {
        match self.phase() {
            TimerPhase::NotStarted => 0,
            TimerPhase::Stopped if self.pause == 0 => self.stop.saturating_sub(self.start),
            TimerPhase::Stopped | TimerPhase::Paused => self.pause.saturating_sub(self.start),
            TimerPhase::Running => now_tick.saturating_sub(self.start),
        }
    }
}

/// Tick for a wall-clock instant
pub fn tick_at(time: DateTime<Utc>) -> i64 {
    time.timestamp_millis().div_euclid(1000 / TICKS_PER_SECOND)
}

/// Current tick from the system clock
pub fn current_tick() -> i64 {
    tick_at(Utc::now())
}
