//! The coordinating unit.
//!
//! [`Coordinator`] owns every piece of state the UI can see: the
//! provisioning lifecycle, the trigger state and the status text. Background
//! units (one provisioning task, at most one supervisor task) never mutate
//! it; they send [`AppEvent`]s over a channel and the coordinator applies
//! them in [`Coordinator::next_event`].
//!
//! The trigger is enabled iff provisioning is `Ready` and no invocation is
//! in flight. A trigger while disabled is ignored; there is no queue.

mod sink;

pub use sink::ChannelSink;

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};
use vidgrab_core::{
    AppEvent, ProvisioningState, RunFailure, RunOutcome, RunRequest, StatusSink, TriggerState,
    status,
};

use crate::provision::Provisioner;
use crate::supervisor::ExecutionSupervisor;

/// The UI collaborator. Only the coordinator calls these, always from the
/// coordinating unit.
pub trait UiSurface: Send {
    fn show_status(&mut self, text: &str);
    fn set_trigger_enabled(&mut self, enabled: bool);
}

/// What happened to a trigger action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerResponse {
    /// A supervisor invocation was started on a background unit.
    Started,
    /// The URL was blank; a validation message was shown.
    Invalid,
    /// The trigger was disabled (not ready, failed, or already running).
    Ignored,
}

pub struct Coordinator<U: UiSurface> {
    surface: U,
    provisioner: Arc<Provisioner>,
    supervisor: Arc<ExecutionSupervisor>,
    provisioning: ProvisioningState,
    trigger: TriggerState,
    status: String,
    last_outcome: Option<RunOutcome>,
    tx: UnboundedSender<AppEvent>,
    rx: UnboundedReceiver<AppEvent>,
}

impl<U: UiSurface> Coordinator<U> {
    /// Create the coordinator and put the surface in its initial state:
    /// "Initializing..." with the trigger disabled.
    pub fn new(
        mut surface: U,
        provisioner: Arc<Provisioner>,
        supervisor: Arc<ExecutionSupervisor>,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        surface.show_status(status::INITIALIZING);
        surface.set_trigger_enabled(false);

        Self {
            surface,
            provisioner,
            supervisor,
            provisioning: ProvisioningState::default(),
            trigger: TriggerState::default(),
            status: status::INITIALIZING.to_string(),
            last_outcome: None,
            tx,
            rx,
        }
    }

    pub const fn provisioning(&self) -> &ProvisioningState {
        &self.provisioning
    }

    pub const fn trigger_state(&self) -> TriggerState {
        self.trigger
    }

    pub const fn trigger_enabled(&self) -> bool {
        self.provisioning.is_ready() && !self.trigger.is_running()
    }

    pub fn status_text(&self) -> &str {
        &self.status
    }

    pub const fn last_outcome(&self) -> Option<&RunOutcome> {
        self.last_outcome.as_ref()
    }

    pub const fn surface(&self) -> &U {
        &self.surface
    }

    pub fn into_surface(self) -> U {
        self.surface
    }

    fn sink(&self) -> ChannelSink {
        ChannelSink::new(self.tx.clone())
    }

    /// Spawn the provisioning task. Only the first call has any effect.
    pub fn start_provisioning(&mut self) -> bool {
        if !self.provisioning.begin() {
            debug!(state = ?self.provisioning, "Provisioning already started");
            return false;
        }

        let provisioner = Arc::clone(&self.provisioner);
        let sink = self.sink();
        tokio::spawn(async move {
            let task_sink = sink.clone();
            let task = tokio::spawn(async move { provisioner.run(&task_sink, &task_sink).await });

            let reason = match task.await {
                Ok(Ok(_)) => return,
                // The provisioner already reported this one.
                Ok(Err(err)) => err.to_string(),
                Err(join_err) => {
                    let reason = format!("provisioning task aborted: {join_err}");
                    error!(%reason, "Provisioning task did not complete");
                    sink.report_status(&status::setup_failed(&reason));
                    reason
                }
            };
            sink.send(AppEvent::provisioning_failed(reason));
        });
        true
    }

    /// Handle the trigger action for `raw_url`.
    pub fn trigger(&mut self, raw_url: &str) -> TriggerResponse {
        if !self.trigger_enabled() {
            debug!(
                provisioning = ?self.provisioning,
                trigger = ?self.trigger,
                "Trigger disabled, ignoring request"
            );
            return TriggerResponse::Ignored;
        }

        let request = match RunRequest::parse(raw_url) {
            Ok(request) => request,
            Err(err) => {
                debug!(error = %err, "Rejected run request");
                self.apply_status(status::EMPTY_URL);
                return TriggerResponse::Invalid;
            }
        };

        self.trigger.start();
        self.surface.set_trigger_enabled(false);
        info!(url = %request.url(), "Starting run");

        let supervisor = Arc::clone(&self.supervisor);
        let sink = self.sink();
        tokio::spawn(async move {
            let worker_sink = sink.clone();
            let result =
                tokio::task::spawn_blocking(move || supervisor.run(&request, &worker_sink)).await;

            let outcome = result.unwrap_or_else(|join_err| {
                error!(error = %join_err, "Download task did not complete");
                sink.report_status(status::RUN_FAILED);
                RunOutcome::Failure(RunFailure::Spawn {
                    reason: format!("download task aborted: {join_err}"),
                })
            });
            sink.send(AppEvent::run_finished(outcome));
        });

        TriggerResponse::Started
    }

    /// Wait for the next hand-off message, apply it and return it.
    ///
    /// The coordinator keeps a sender of its own, so the channel never
    /// closes and this only returns `None` if that invariant is broken.
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        let event = self.rx.recv().await?;
        self.apply(event.clone());
        Some(event)
    }

    /// Apply events until `done` holds.
    ///
    /// Callers must only wait for states that work already in flight can
    /// reach; otherwise this waits forever.
    pub async fn run_until(&mut self, done: impl Fn(&Self) -> bool) {
        while !done(self) {
            self.next_event().await;
        }
    }

    /// Apply events until provisioning reaches `Ready` or `Failed`.
    ///
    /// Returns at once if provisioning was never started, since no event
    /// could ever settle it.
    pub async fn wait_for_provisioning(&mut self) -> &ProvisioningState {
        if self.provisioning == ProvisioningState::Uninitialized {
            debug!("Provisioning not started, nothing to wait for");
            return &self.provisioning;
        }
        self.run_until(|c| c.provisioning.is_terminal()).await;
        &self.provisioning
    }

    /// Apply events until the in-flight invocation (if any) has finished.
    ///
    /// Returns at once when the trigger is idle.
    pub async fn wait_for_run(&mut self) -> Option<&RunOutcome> {
        self.run_until(|c| !c.trigger.is_running()).await;
        self.last_outcome.as_ref()
    }

    fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::Status { text } => self.apply_status(&text),
            AppEvent::Ready => {
                if self.provisioning.mark_ready() {
                    info!("Tools ready");
                } else {
                    warn!(state = ?self.provisioning, "Ignoring unexpected ready signal");
                }
                self.sync_trigger();
            }
            AppEvent::ProvisioningFailed { reason } => {
                self.provisioning.mark_failed(reason);
                self.sync_trigger();
            }
            AppEvent::RunFinished { outcome } => {
                self.trigger.finish();
                self.last_outcome = Some(outcome);
                self.sync_trigger();
            }
        }
    }

    fn apply_status(&mut self, text: &str) {
        text.clone_into(&mut self.status);
        self.surface.show_status(text);
    }

    fn sync_trigger(&mut self) {
        let enabled = self.trigger_enabled();
        self.surface.set_trigger_enabled(enabled);
    }
}
