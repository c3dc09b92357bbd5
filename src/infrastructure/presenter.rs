// SPDX-License-Identifier: MPL-2.0
//! [`PresentationPort`] adapter that forwards engine calls to the UI.
//!
//! The engine runs on its own task and must not touch the window directly.
//! [`ChannelPresenter`] turns each port call into a [`PresentationEvent`]
//! sent over an unbounded channel; the toast UI drains that channel from a
//! subscription. Sounds do not go through the UI and are played directly.

use super::platform::SoundPlayer;
use crate::application::port::PresentationPort;
use crate::domain::notification::ResolvedNotification;
use std::sync::Arc;
use tokio::sync::mpsc;

/// One display change requested by the engine.
#[derive(Debug, Clone, PartialEq)]
pub enum PresentationEvent {
    /// Show this content; `animating` selects the animated glyph.
    Render {
        notification: ResolvedNotification,
        animating: bool,
    },
    /// Move the surface to the target display.
    Position,
    /// Start the entry transition.
    Show,
    /// Start the exit transition.
    Hide,
}

/// Presentation port writing into a channel.
pub struct ChannelPresenter {
    events: mpsc::UnboundedSender<PresentationEvent>,
    sound: Option<Arc<dyn SoundPlayer>>,
}

impl ChannelPresenter {
    /// Creates a presenter and the receiving end of its event stream.
    #[must_use]
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<PresentationEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        (Self { events, sound: None }, receiver)
    }

    /// Plays requested sounds through `player`. Without a player sounds are
    /// dropped.
    #[must_use]
    pub fn with_sound(mut self, player: Arc<dyn SoundPlayer>) -> Self {
        self.sound = Some(player);
        self
    }

    fn emit(&self, event: PresentationEvent) {
        if self.events.send(event).is_err() {
            tracing::trace!("presentation receiver gone, event dropped");
        }
    }
}

impl std::fmt::Debug for ChannelPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelPresenter")
            .field("sound", &self.sound.is_some())
            .finish_non_exhaustive()
    }
}

impl PresentationPort for ChannelPresenter {
    fn render(&mut self, notification: &ResolvedNotification, animating: bool) {
        self.emit(PresentationEvent::Render {
            notification: notification.clone(),
            animating,
        });
    }

    fn position(&mut self) {
        self.emit(PresentationEvent::Position);
    }

    fn show(&mut self) {
        self.emit(PresentationEvent::Show);
    }

    fn hide(&mut self) {
        self.emit(PresentationEvent::Hide);
    }

    fn play_sound(&mut self, name: &str) {
        match &self.sound {
            Some(player) => player.play(name),
            None => tracing::trace!(sound = name, "sound disabled"),
        }
    }
}
