// SPDX-License-Identifier: MPL-2.0
//! Tokio host for the notification engine.
//!
//! The [`Engine`] is a synchronous state machine. [`spawn`] moves it onto a
//! dedicated task that owns it exclusively and applies [`Command`]s one at a
//! time, which makes that task the single serialization point for every
//! producer: the ingress listener, taps coming from the UI and expiring
//! timers. Producers hold a cloneable [`EngineHandle`].
//!
//! Timers are spawned sleeps. On expiry they post a [`Command::Wake`]
//! through a weak sender so that pending timers never keep the actor alive
//! after the last handle is gone.

use crate::application::port::{ActionExecutor, PresentationPort, Scheduler, Wakeup};
use crate::application::{Engine, EngineSettings, EngineSnapshot, EnqueueOutcome, VariantPicker};
use crate::domain::notification::NotificationRequest;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::{AbortHandle, JoinHandle};

/// Work items processed by the engine task.
#[derive(Debug)]
pub enum Command {
    /// Show now, replacing whatever is on screen.
    Show(NotificationRequest),
    /// Show when idle, otherwise wait in the pending queue.
    Enqueue(NotificationRequest),
    /// Hide the current toast.
    Dismiss,
    /// The toast was tapped.
    Activate,
    /// A timer expired.
    Wake(Wakeup),
    /// Reply with the current engine state.
    Snapshot(oneshot::Sender<EngineSnapshot>),
}

/// Returned when the engine task is no longer running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("notification engine is not running")]
pub struct EngineStopped;

/// Cloneable handle to a running engine.
#[derive(Debug, Clone)]
pub struct EngineHandle {
    commands: mpsc::UnboundedSender<Command>,
}

impl EngineHandle {
    /// Shows `request` immediately.
    pub fn show(&self, request: NotificationRequest) -> Result<(), EngineStopped> {
        self.send(Command::Show(request))
    }

    /// Shows `request` once the current toast (and queue) is done.
    pub fn enqueue(&self, request: NotificationRequest) -> Result<(), EngineStopped> {
        self.send(Command::Enqueue(request))
    }

    pub fn dismiss(&self) -> Result<(), EngineStopped> {
        self.send(Command::Dismiss)
    }

    /// Reports a tap on the toast.
    pub fn activate(&self) -> Result<(), EngineStopped> {
        self.send(Command::Activate)
    }

    /// Fetches the engine state. Commands sent earlier from this handle are
    /// applied before the snapshot is taken.
    pub async fn snapshot(&self) -> Result<EngineSnapshot, EngineStopped> {
        let (reply, response) = oneshot::channel();
        self.send(Command::Snapshot(reply))?;
        response.await.map_err(|_| EngineStopped)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        !self.commands.is_closed()
    }

    fn send(&self, command: Command) -> Result<(), EngineStopped> {
        self.commands.send(command).map_err(|_| EngineStopped)
    }
}

/// [`Scheduler`] backed by Tokio timers.
#[derive(Debug)]
pub struct TokioScheduler {
    commands: mpsc::WeakUnboundedSender<Command>,
}

impl Scheduler for TokioScheduler {
    type Handle = AbortHandle;

    fn schedule(&mut self, delay: Duration, wakeup: Wakeup) -> AbortHandle {
        let commands = self.commands.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if let Some(commands) = commands.upgrade() {
                // The engine drops wake-ups whose token is no longer armed.
                let _ = commands.send(Command::Wake(wakeup));
            }
        })
        .abort_handle()
    }

    fn cancel(&mut self, handle: AbortHandle) {
        handle.abort();
    }
}

/// Builds an engine and runs it on a new task.
///
/// Must be called from within a Tokio runtime. The task ends once every
/// [`EngineHandle`] has been dropped.
pub fn spawn<P, A>(
    presenter: P,
    executor: A,
    picker: VariantPicker,
    settings: EngineSettings,
) -> (EngineHandle, JoinHandle<()>)
where
    P: PresentationPort + 'static,
    A: ActionExecutor + 'static,
{
    let (commands, receiver) = mpsc::unbounded_channel();
    let scheduler = TokioScheduler {
        commands: commands.downgrade(),
    };
    let engine = Engine::new(presenter, executor, scheduler, picker, settings);
    let task = tokio::spawn(run(engine, receiver));
    (EngineHandle { commands }, task)
}

async fn run<P, A>(
    mut engine: Engine<P, A, TokioScheduler>,
    mut commands: mpsc::UnboundedReceiver<Command>,
) where
    P: PresentationPort,
    A: ActionExecutor,
{
    tracing::debug!(settings = ?engine.settings(), "notification engine started");
    while let Some(command) = commands.recv().await {
        apply(&mut engine, command);
    }
    tracing::debug!("notification engine stopped");
}

fn apply<P, A>(engine: &mut Engine<P, A, TokioScheduler>, command: Command)
where
    P: PresentationPort,
    A: ActionExecutor,
{
    match command {
        Command::Show(request) => engine.show(request),
        Command::Enqueue(request) => {
            if let EnqueueOutcome::Evicted(dropped) = engine.enqueue(request) {
                tracing::info!(title = dropped.title(), "queued notification evicted");
            }
        }
        Command::Dismiss => engine.dismiss(),
        Command::Activate => engine.activate(),
        Command::Wake(wakeup) => engine.on_wakeup(wakeup),
        Command::Snapshot(reply) => {
            let _ = reply.send(engine.snapshot());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::Phase;
    use crate::domain::notification::{Action, DisplayDuration, Kind};
    use crate::domain::variants;
    use crate::infrastructure::presenter::{ChannelPresenter, PresentationEvent};
    use crate::test_utils::RecordingExecutor;
    use std::sync::Arc;

    fn start() -> (
        EngineHandle,
        mpsc::UnboundedReceiver<PresentationEvent>,
        Arc<RecordingExecutor>,
    ) {
        let (presenter, events) = ChannelPresenter::channel();
        let executor = Arc::new(RecordingExecutor::default());
        let (handle, _task) = spawn(
            presenter,
            executor.clone(),
            VariantPicker::seeded(3),
            EngineSettings::default(),
        );
        (handle, events, executor)
    }

    fn secs(value: f64) -> DisplayDuration {
        DisplayDuration::from_secs(value).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn error_toast_runs_full_timeline() {
        let (engine, _events, _) = start();
        engine
            .show(NotificationRequest::new(Kind::Error).with_duration(secs(1.0)))
            .unwrap();

        let shown = engine.snapshot().await.unwrap();
        assert!(shown.visible);
        let message = shown.current.as_ref().unwrap().message().to_string();
        assert!(variants::pool(Kind::Error).contains(&message.as_str()));

        tokio::time::sleep(Duration::from_millis(1_010)).await;
        let leaving = engine.snapshot().await.unwrap();
        assert!(!leaving.visible);
        assert_eq!(leaving.phase, Phase::Leaving);
        assert!(leaving.current.is_some());

        tokio::time::sleep(Duration::from_millis(300)).await;
        let idle = engine.snapshot().await.unwrap();
        assert_eq!(idle.phase, Phase::Idle);
        assert!(idle.current.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn invalid_url_still_dismisses() {
        let (engine, _events, executor) = start();
        engine
            .show(
                NotificationRequest::new(Kind::Info)
                    .with_message("open me")
                    .with_action(Action::open_url("not a url")),
            )
            .unwrap();
        engine.activate().unwrap();

        let snapshot = engine.snapshot().await.unwrap();
        assert!(!snapshot.visible);
        assert_eq!(executor.executed(), vec![Action::open_url("not a url")]);

        tokio::time::sleep(Duration::from_millis(310)).await;
        assert_eq!(engine.snapshot().await.unwrap().phase, Phase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn replaced_toast_uses_new_duration() {
        let (engine, _events, _) = start();
        engine
            .show(NotificationRequest::new(Kind::Info).with_message("a").with_duration(secs(1.0)))
            .unwrap();
        tokio::time::sleep(Duration::from_millis(800)).await;
        engine
            .show(NotificationRequest::new(Kind::Info).with_message("b").with_duration(secs(1.0)))
            .unwrap();

        // The first timer would have fired here.
        tokio::time::sleep(Duration::from_millis(400)).await;
        let snapshot = engine.snapshot().await.unwrap();
        assert!(snapshot.visible);
        assert_eq!(snapshot.current.unwrap().message(), "b");

        tokio::time::sleep(Duration::from_millis(700)).await;
        assert!(!engine.snapshot().await.unwrap().visible);
    }

    #[tokio::test(start_paused = true)]
    async fn enqueued_toast_follows_after_exit_grace() {
        let (engine, _events, _) = start();
        engine
            .show(NotificationRequest::new(Kind::Info).with_message("first").with_duration(secs(1.0)))
            .unwrap();
        engine
            .enqueue(NotificationRequest::new(Kind::Success).with_message("second"))
            .unwrap();
        assert_eq!(engine.snapshot().await.unwrap().pending, 1);

        tokio::time::sleep(Duration::from_millis(1_310)).await;
        let snapshot = engine.snapshot().await.unwrap();
        assert!(snapshot.visible);
        assert_eq!(snapshot.current.unwrap().message(), "second");
        assert_eq!(snapshot.pending, 0);
    }

    #[tokio::test(start_paused = true)]
    async fn presentation_events_follow_port_calls() {
        let (engine, mut events, _) = start();
        engine
            .show(NotificationRequest::new(Kind::Waiting).with_message("hi"))
            .unwrap();
        engine.dismiss().unwrap();
        engine.snapshot().await.unwrap();

        let received: Vec<_> = std::iter::from_fn(|| events.try_recv().ok()).collect();
        assert!(matches!(
            received.as_slice(),
            [
                PresentationEvent::Render { animating: true, .. },
                PresentationEvent::Position,
                PresentationEvent::Show,
                PresentationEvent::Render { animating: false, .. },
                PresentationEvent::Hide,
            ]
        ));
    }

    #[tokio::test]
    async fn dropping_every_handle_stops_the_task() {
        let (presenter, _events) = ChannelPresenter::channel();
        let (handle, task) = spawn(
            presenter,
            RecordingExecutor::default(),
            VariantPicker::seeded(0),
            EngineSettings::default(),
        );
        handle
            .show(NotificationRequest::new(Kind::Info).with_message("x"))
            .unwrap();
        drop(handle);
        task.await.unwrap();
    }
}
