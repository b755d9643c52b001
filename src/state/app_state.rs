//! Main application state management

use std::{
    sync::{Arc, Mutex},
    time::Instant,
};
use tokio::sync::watch;
use tracing::{debug, info};

use super::{DisplayState, PollStats, TimerState};
use crate::services::PollError;

/// Shared state of the clock: latest snapshot, poll bookkeeping and rendered display
#[derive(Debug)]
pub struct AppState {
    /// Latest snapshot received from the endpoint
    pub timer_state: Arc<Mutex<TimerState>>,
    /// Poll success/failure bookkeeping
    pub poll_stats: Arc<Mutex<PollStats>>,
    /// Endpoint and display server metadata
    pub endpoint: String,
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
    /// Channel carrying the most recently rendered display.
    /// Publishing and reading work with no receiver attached.
    display_tx: watch::Sender<DisplayState>,
}

impl AppState {
    /// Create a new AppState with a blank, stale display
    pub fn new(endpoint: String, host: String, port: u16) -> Self {
        let (display_tx, _) = watch::channel(DisplayState::default());

        Self {
            timer_state: Arc::new(Mutex::new(TimerState::default())),
            poll_stats: Arc::new(Mutex::new(PollStats::default())),
            endpoint,
            start_time: Instant::now(),
            port,
            host,
            display_tx,
        }
    }

    /// Replace the stored snapshot after a successful poll
    pub fn apply_snapshot(&self, snapshot: TimerState) -> Result<TimerState, String> {
        let mut timer_state = self.timer_state.lock()
            .map_err(|e| format!("Failed to lock timer state: {}", e))?;

        let previous = *timer_state;
        *timer_state = snapshot;
        drop(timer_state); // Release the lock early

        if previous.phase() != snapshot.phase() {
            info!("Timer phase changed: {} -> {}",
                  previous.phase().as_str(), snapshot.phase().as_str());
        }
        if previous.hints != snapshot.hints {
            info!("Hint count changed: {} -> {}", previous.hints, snapshot.hints);
        }

        let mut stats = self.poll_stats.lock()
            .map_err(|e| format!("Failed to lock poll stats: {}", e))?;
        if stats.consecutive_failures > 0 {
            info!("Endpoint reachable again after {} failed polls", stats.consecutive_failures);
        }
        stats.record_success();

        Ok(previous)
    }

    /// Record a failed poll. The stored snapshot is left untouched.
    /// Returns the length of the current failure streak.
    pub fn record_poll_failure(&self, error: &PollError) -> Result<u64, String> {
        let mut stats = self.poll_stats.lock()
            .map_err(|e| format!("Failed to lock poll stats: {}", e))?;

        stats.record_failure(error.to_string());
        debug!("Poll failure recorded ({}), streak={}", error.kind(), stats.consecutive_failures);
        Ok(stats.consecutive_failures)
    }

    /// Get current timer snapshot
    pub fn get_timer_state(&self) -> Result<TimerState, String> {
        self.timer_state.lock()
            .map(|state| *state)
            .map_err(|e| format!("Failed to lock timer state: {}", e))
    }

    /// Get current poll statistics
    pub fn get_poll_stats(&self) -> Result<PollStats, String> {
        self.poll_stats.lock()
            .map(|stats| stats.clone())
            .map_err(|e| format!("Failed to lock poll stats: {}", e))
    }

    /// Render the display at `now_tick` and publish it if it changed
    pub fn render(&self, now_tick: i64) -> Result<DisplayState, String> {
        let timer_state = self.get_timer_state()?;
        let stale = self.get_poll_stats()?.is_stale();
        let display = DisplayState::render(&timer_state, now_tick, stale);

        let published = display.clone();
        self.display_tx.send_if_modified(move |current| {
            if *current == published {
                false
            } else {
                *current = published;
                true
            }
        });

        Ok(display)
    }

    /// Most recently rendered display
    pub fn get_display_state(&self) -> DisplayState {
        self.display_tx.borrow().clone()
    }

    /// Subscribe to display updates
    pub fn subscribe_display(&self) -> watch::Receiver<DisplayState> {
        self.display_tx.subscribe()
    }

    /// Calculate process uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{parse_payload, ParseError};
    use crate::state::TimerPhase;

    fn state() -> AppState {
        AppState::new("http://localhost/getdata.php".to_string(), "127.0.0.1".to_string(), 0)
    }

    #[test]
    fn snapshot_replaces_state_and_clears_staleness() {
        let app = state();
        assert!(app.render(0).unwrap().stale);

        let previous = app.apply_snapshot(TimerState::new(120, 0, 3, 0)).unwrap();
        assert_eq!(previous, TimerState::default());
        assert_eq!(app.get_timer_state().unwrap(), TimerState::new(120, 0, 3, 0));

        let display = app.render(720).unwrap();
        assert!(!display.stale);
        assert_eq!(display.clock, "0:01:00");
        assert_eq!(display.hints, "Hints: 3");
        assert_eq!(display.phase, TimerPhase::Running);
        assert_eq!(app.get_display_state(), display);
    }

    #[test]
    fn failure_keeps_last_snapshot() {
        let app = state();
        app.apply_snapshot(TimerState::new(100, 0, 1, 400)).unwrap();

        let error = PollError::Parse(ParseError::MissingField { field: "pause", position: 3 });
        assert_eq!(app.record_poll_failure(&error).unwrap(), 1);
        assert_eq!(app.record_poll_failure(&PollError::Status(503)).unwrap(), 2);

        assert_eq!(app.get_timer_state().unwrap(), TimerState::new(100, 0, 1, 400));
        let display = app.render(10_000).unwrap();
        assert!(display.stale);
        assert_eq!(display.clock, "0:00:30");

        let stats = app.get_poll_stats().unwrap();
        assert_eq!(stats.failures, 2);
        assert_eq!(stats.last_error.as_deref(), Some("endpoint answered with status 503"));
    }

    #[test]
    fn unchanged_render_does_not_notify() {
        let app = state();
        app.apply_snapshot(TimerState::new(100, 0, 0, 400)).unwrap();

        let mut rx = app.subscribe_display();
        app.render(500).unwrap();
        assert!(rx.has_changed().unwrap());
        rx.borrow_and_update();

        app.render(900).unwrap();
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn extreme_payload_renders_without_panicking() {
        let app = state();
        app.apply_snapshot(parse_payload("-9223372036854775808,1,0,0").unwrap()).unwrap();

        let display = app.render(17_000_000_000).unwrap();
        assert_eq!(display.phase, TimerPhase::Stopped);
        assert_eq!(display.elapsed_ticks, i64::MAX);
        assert_eq!(display.clock, "256204778801521:33:00");

        // The next render still works
        assert_eq!(app.render(17_000_000_010).unwrap(), display);
    }

    #[test]
    fn display_is_readable_without_subscribers() {
        let app = state();
        app.apply_snapshot(TimerState::new(50, 0, 2, 0)).unwrap();
        let display = app.render(650).unwrap();
        assert_eq!(app.get_display_state(), display);
        assert_eq!(app.get_display_state().clock, "0:01:00");
    }

    #[test]
    fn uptime_starts_in_seconds() {
        assert!(state().get_uptime().ends_with('s'));
    }
}
