// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the agent.
//!
//! [`agent`] owns the engine task and the ingress listener for the whole
//! lifetime of the daemon and forwards presentation events to the UI.

use super::Message;
use crate::application::{EngineSettings, VariantPicker};
use crate::domain::notification::{DisplayDuration, Kind, NotificationRequest};
use crate::infrastructure::ingress::IngressServer;
use crate::infrastructure::{runtime, ChannelPresenter, SystemActionExecutor, SystemSoundPlayer};
use crate::ui::design_tokens::motion;
use iced::futures::SinkExt;
use iced::{stream, time, window, Subscription};
use std::sync::Arc;

/// Subscription ID for the agent's engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct AgentId;

/// Settings carried into the subscription; identified by [`AgentId`] only.
struct AgentData(AgentSettings);

impl std::hash::Hash for AgentData {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        AgentId.hash(state);
    }
}

/// Message of the toast shown once the agent listens.
pub const STARTUP_MESSAGE: &str = "Ready to go!";

/// Everything the agent subscription needs to build the engine.
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub engine: EngineSettings,
    pub ingress_address: String,
    pub fallback_apps: Vec<String>,
    pub sound_enabled: bool,
    pub announce: bool,
}

/// Starts the engine and the ingress listener, then streams presentation
/// events as [`Message::Presentation`].
///
/// Sends [`Message::EngineReady`] once the engine runs, and
/// [`Message::IngressFailed`] if the listener cannot bind.
pub fn agent(settings: AgentSettings) -> Subscription<Message> {
    Subscription::run_with(AgentData(settings), |AgentData(settings)| {
        let settings = settings.clone();
        stream::channel(
            100,
            move |mut output: iced::futures::channel::mpsc::Sender<Message>| async move {
                let (presenter, mut events) = ChannelPresenter::channel();
                let presenter = if settings.sound_enabled {
                    presenter.with_sound(Arc::new(SystemSoundPlayer::new()))
                } else {
                    presenter
                };
                let executor = SystemActionExecutor::new(settings.fallback_apps.clone());
                let (engine, _task) =
                    runtime::spawn(presenter, executor, VariantPicker::new(), settings.engine);

                match IngressServer::bind(&settings.ingress_address).await {
                    Ok(server) => {
                        tokio::spawn(server.serve(engine.clone()));
                    }
                    Err(err) => {
                        tracing::error!(
                            address = %settings.ingress_address,
                            error = %err,
                            "failed to start ingress listener"
                        );
                        let _ = output
                            .send(Message::IngressFailed(format!(
                                "cannot listen on {}: {err}",
                                settings.ingress_address
                            )))
                            .await;
                        return;
                    }
                }

                if settings.announce {
                    let _ = engine.show(startup_request());
                }
                let _ = output.send(Message::EngineReady(engine)).await;

                while let Some(event) = events.recv().await {
                    if output.send(Message::Presentation(event)).await.is_err() {
                        break;
                    }
                }
                tracing::debug!("presentation stream closed");
            },
        )
    })
}

fn startup_request() -> NotificationRequest {
    let request = NotificationRequest::new(Kind::Info).with_message(STARTUP_MESSAGE);
    match DisplayDuration::from_secs(2.5) {
        Some(duration) => request.with_duration(duration),
        None => request,
    }
}

/// Redraw ticks while the toast moves.
pub fn animation_ticks(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(motion::FRAME).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Windows closed by the system.
pub fn window_closes() -> Subscription<Message> {
    window::close_events().map(Message::WindowClosed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_toast_is_short_info() {
        let request = startup_request();
        assert_eq!(request.kind(), Kind::Info);
        assert_eq!(request.message(), STARTUP_MESSAGE);
        assert_eq!(request.duration().map(DisplayDuration::secs), Some(2.5));
    }
}
