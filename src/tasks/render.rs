//! Clock render background task

use std::{sync::Arc, time::Duration};
use tokio::time::interval;
use tracing::{error, info};

use crate::state::{current_tick, AppState};

/// Background task that recomputes the display from the latest snapshot
pub async fn render_task(state: Arc<AppState>, period: Duration) {
    info!("Starting render task every {:?}", period);

    let mut interval = interval(period);

    loop {
        interval.tick().await;

        if let Err(e) = state.render(current_tick()) {
            error!("Failed to render display: {}", e);
        }
    }
}
