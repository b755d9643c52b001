//! Endpoint polling background task

use std::{sync::Arc, time::Duration};
use tokio::time::{interval, MissedTickBehavior};
use tracing::{debug, error, info, warn};

use crate::{
    services::{EndpointClient, PollError},
    state::{AppState, TimerState},
};

/// Run a single poll and fold its outcome into the shared state.
/// A snapshot that could not be stored is reported as `PollError::State`.
pub async fn poll_once(state: &AppState, client: &EndpointClient) -> Result<TimerState, PollError> {
    let outcome = match client.fetch().await {
        Ok(snapshot) => state
            .apply_snapshot(snapshot)
            .map(|_| snapshot)
            .map_err(PollError::State),
        Err(e) => Err(e),
    };

    match outcome {
        Ok(snapshot) => {
            debug!("Received snapshot: {:?}", snapshot);
            Ok(snapshot)
        }
        Err(e) => {
            match state.record_poll_failure(&e) {
                Ok(1) => warn!("Poll of {} failed ({}): {}", client.url(), e.kind(), e),
                Ok(streak) => debug!("Poll failed again ({} in a row): {}", streak, e),
                Err(lock_error) => error!("Failed to record poll failure ({}): {}", e, lock_error),
            }
            Err(e)
        }
    }
}

/// Background task that polls the endpoint on a fixed cadence.
///
/// Each request is awaited before the next tick is taken, so at most one
/// request is in flight. Ticks missed while a slow request was pending are
/// skipped rather than replayed.
pub async fn poll_task(state: Arc<AppState>, client: EndpointClient, period: Duration) {
    info!("Starting poll task: {} every {:?}", client.url(), period);

    let mut interval = interval(period);
    interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

    loop {
        interval.tick().await;
        // Errors are already logged and recorded
        let _ = poll_once(&state, &client).await;
    }
}
