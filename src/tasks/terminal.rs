//! Terminal output task

use std::{
    io::{self, Write},
    sync::Arc,
};
use tracing::{debug, warn};

use crate::state::AppState;

/// Redraw the clock line on stdout whenever the rendered display changes
pub async fn terminal_display_task(state: Arc<AppState>) {
    let mut display_rx = state.subscribe_display();
    let mut width = 0;

    loop {
        let line = display_rx.borrow_and_update().status_line();
        if let Err(e) = draw_line(&mut io::stdout().lock(), &line, width) {
            warn!("Failed to write clock line: {}", e);
        }
        width = line.len();

        if display_rx.changed().await.is_err() {
            debug!("Display channel closed, stopping terminal output");
            break;
        }
    }
}

/// Overwrite the current line, padding over leftovers from a longer previous one
fn draw_line<W: Write>(out: &mut W, line: &str, previous_width: usize) -> io::Result<()> {
    let padding = previous_width.saturating_sub(line.len());
    write!(out, "\r{}{}", line, " ".repeat(padding))?;
    out.flush()
}
