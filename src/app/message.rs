// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the agent.

use crate::app::config::Config;
use crate::infrastructure::{EngineHandle, PresentationEvent};
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The engine task is up; taps can be forwarded from now on.
    EngineReady(EngineHandle),
    /// The request listener could not be started.
    IngressFailed(String),
    /// The engine changed what should be on screen.
    Presentation(PresentationEvent),
    /// Animation frame.
    Tick(Instant),
    /// The toast was clicked.
    Tapped,
    WindowOpened(window::Id),
    WindowClosed(window::Id),
}

/// Runtime flags passed in from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Configuration loaded at startup.
    pub config: Config,
    /// Show a short "ready" toast once the agent is listening.
    pub announce: bool,
}
