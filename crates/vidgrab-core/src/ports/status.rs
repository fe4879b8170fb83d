//! Status and readiness sinks.
//!
//! These are the only capabilities a background unit gets for talking to
//! the UI collaborator. They must be callable from any thread and must not
//! block.

/// Accepts human-readable progress text.
pub trait StatusSink: Send + Sync {
    fn report_status(&self, text: &str);
}

/// Accepts the one-shot "all tools present" signal.
pub trait ReadySink: Send + Sync {
    fn on_ready(&self);
}

impl<F> StatusSink for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report_status(&self, text: &str) {
        self(text);
    }
}

/// Discards everything. Useful for tests and headless callers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopStatusSink;

impl StatusSink for NoopStatusSink {
    fn report_status(&self, _text: &str) {}
}

impl ReadySink for NoopStatusSink {
    fn on_ready(&self) {}
}
