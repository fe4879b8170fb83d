//! Channel-backed sink handed to background units.

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;
use vidgrab_core::{AppEvent, ReadySink, StatusSink};

/// Forwards status text and readiness to the coordinator as [`AppEvent`]s.
///
/// Sending never blocks. If the coordinator has been dropped the event is
/// discarded.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<AppEvent>,
}

impl ChannelSink {
    pub const fn new(tx: UnboundedSender<AppEvent>) -> Self {
        Self { tx }
    }

    pub fn send(&self, event: AppEvent) {
        if let Err(err) = self.tx.send(event) {
            debug!(event = ?err.0, "Coordinator gone, dropping event");
        }
    }
}

impl StatusSink for ChannelSink {
    fn report_status(&self, text: &str) {
        self.send(AppEvent::status(text));
    }
}

impl ReadySink for ChannelSink {
    fn on_ready(&self) {
        self.send(AppEvent::Ready);
    }
}
