//! Shared fakes for runtime integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use vidgrab_core::{
    ExecutionError, FetchError, ProcessExecutor, ProcessExit, ReadySink, StatusSink, ToolEntry,
    ToolFetcher, ToolInvocation, ToolManifest, ToolRole,
};
use vidgrab_runtime::UiSurface;

/// Ordered log shared between fakes so cross-fake ordering can be asserted.
pub type EventLog = Arc<Mutex<Vec<String>>>;

pub fn event_log() -> EventLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn manifest(names: [&str; 3]) -> ToolManifest {
    ToolManifest::new(vec![
        ToolEntry::new(names[0], format!("https://mirror.test/{}", names[0]), ToolRole::Auxiliary),
        ToolEntry::new(names[1], format!("https://mirror.test/{}", names[1]), ToolRole::Runtime),
        ToolEntry::new(names[2], format!("https://mirror.test/{}", names[2]), ToolRole::Primary),
    ])
    .unwrap()
}

/// Writes a small payload and records every fetched URL.
pub struct RecordingFetcher {
    pub log: EventLog,
    pub fail_on: Option<String>,
}

impl RecordingFetcher {
    pub fn new(log: EventLog) -> Self {
        Self { log, fail_on: None }
    }

    pub fn failing_on(log: EventLog, url_suffix: &str) -> Self {
        Self {
            log,
            fail_on: Some(url_suffix.to_string()),
        }
    }

    pub fn fetches(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| e.strip_prefix("fetch:").map(str::to_string))
            .collect()
    }
}

#[async_trait]
impl ToolFetcher for RecordingFetcher {
    async fn fetch(&self, source_url: &str, dest: &Path) -> Result<u64, FetchError> {
        let name = source_url.rsplit('/').next().unwrap_or(source_url);
        self.log.lock().unwrap().push(format!("fetch:{name}"));

        if self.fail_on.as_deref().is_some_and(|s| source_url.ends_with(s)) {
            return Err(FetchError::Status {
                url: source_url.to_string(),
                status: 404,
            });
        }

        std::fs::write(dest, b"binary").map_err(|source| FetchError::Write {
            path: dest.to_path_buf(),
            source,
        })?;
        Ok(6)
    }
}

/// Records status text and ready signals into a shared log.
pub struct LogSink {
    pub log: EventLog,
    pub ready_count: AtomicUsize,
}

impl LogSink {
    pub fn new(log: EventLog) -> Self {
        Self {
            log,
            ready_count: AtomicUsize::new(0),
        }
    }

    pub fn statuses(&self) -> Vec<String> {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| e.strip_prefix("status:").map(str::to_string))
            .collect()
    }

    pub fn ready_count(&self) -> usize {
        self.ready_count.load(Ordering::SeqCst)
    }
}

impl StatusSink for LogSink {
    fn report_status(&self, text: &str) {
        self.log.lock().unwrap().push(format!("status:{text}"));
    }
}

impl ReadySink for LogSink {
    fn on_ready(&self) {
        self.ready_count.fetch_add(1, Ordering::SeqCst);
        self.log.lock().unwrap().push("ready".to_string());
    }
}

/// Returns a fixed exit code and counts invocations.
pub struct ScriptedExecutor {
    pub code: i32,
    pub calls: AtomicUsize,
    pub invocations: Mutex<Vec<ToolInvocation>>,
}

impl ScriptedExecutor {
    pub fn exiting_with(code: i32) -> Self {
        Self {
            code,
            calls: AtomicUsize::new(0),
            invocations: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProcessExecutor for ScriptedExecutor {
    fn execute(&self, invocation: &ToolInvocation) -> Result<ProcessExit, ExecutionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.invocations.lock().unwrap().push(invocation.clone());
        Ok(ProcessExit::from_code(self.code))
    }
}

/// UI surface that remembers everything it was told.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub statuses: Vec<String>,
    pub enabled_history: Vec<bool>,
}

impl RecordingSurface {
    pub fn last_status(&self) -> Option<&str> {
        self.statuses.last().map(String::as_str)
    }

    pub fn trigger_enabled(&self) -> bool {
        self.enabled_history.last().copied().unwrap_or(false)
    }
}

impl UiSurface for RecordingSurface {
    fn show_status(&mut self, text: &str) {
        self.statuses.push(text.to_string());
    }

    fn set_trigger_enabled(&mut self, enabled: bool) {
        self.enabled_history.push(enabled);
    }
}
