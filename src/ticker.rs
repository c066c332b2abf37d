use chrono::{DateTime, Local};
use eframe::egui;
use tokio::sync::watch;
use tokio::{task, time};

use crate::config::TICK_INTERVAL;

pub type Tick = DateTime<Local>;

/// Reads the wall clock once per [`TICK_INTERVAL`] and publishes the reading
/// to the UI thread. Only the newest reading is kept; state is only ever
/// touched by whoever holds the receiver.
pub fn spawn(ctx: egui::Context) -> watch::Receiver<Tick> {
    let (tx, rx) = watch::channel(Local::now());

    task::spawn(async move {
        let mut interval = time::interval(TICK_INTERVAL);

        loop {
            interval.tick().await;
            let now = Local::now();
            tracing::trace!(%now, "tick");
            if tx.send(now).is_err() {
                break;
            }
            ctx.request_repaint();
        }

        tracing::debug!("clock window gone, ticker stopped");
    });

    rx
}

/// Reading published since the last call, if any.
pub fn latest(rx: &mut watch::Receiver<Tick>) -> Option<Tick> {
    match rx.has_changed() {
        Ok(true) => Some(*rx.borrow_and_update()),
        _ => None,
    }
}
