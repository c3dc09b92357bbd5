// SPDX-License-Identifier: MPL-2.0
//! Agent root state and the overlay window lifecycle.
//!
//! The agent runs as an Iced daemon without windows at rest. The engine
//! subscription pushes presentation events; the overlay window is opened
//! when the engine positions the toast and closed once the exit transition
//! has played. Clicks on the toast are forwarded to the engine.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use subscription::{AgentSettings, STARTUP_MESSAGE};
pub use update::WindowCommand;

use crate::infrastructure::EngineHandle;
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::ToastState;
use iced::{theme, window, Color, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Overlay window width.
pub const WINDOW_WIDTH: f32 = sizing::TOAST_WIDTH;

/// Overlay window height, with room for the slide and the shadow.
pub const WINDOW_HEIGHT: f32 = sizing::TOAST_HEIGHT + 2.0 * sizing::SLIDE_DISTANCE;

/// Root Iced daemon state.
pub struct App {
    toast: ToastState,
    engine: Option<EngineHandle>,
    window_id: Option<window::Id>,
    agent: AgentSettings,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("stage", &self.toast.stage())
            .field("engine_ready", &self.engine.is_some())
            .field("window_id", &self.window_id)
            .finish_non_exhaustive()
    }
}

/// Places the overlay at the top centre of the screen.
fn top_center(window: Size, monitor: Size) -> Point {
    Point::new(
        ((monitor.width - window.width) / 2.0).max(0.0),
        sizing::TOP_OFFSET,
    )
}

/// Builds the overlay window settings.
pub fn overlay_window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_WIDTH, WINDOW_HEIGHT),
        position: window::Position::SpecificWith(top_center),
        resizable: false,
        decorations: false,
        transparent: true,
        level: window::Level::AlwaysOnTop,
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the agent.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::daemon(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .style(App::style)
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = flags.config;
        let agent = AgentSettings {
            engine: config.engine_settings(),
            ingress_address: config.ingress_address(),
            fallback_apps: config.fallback_apps(),
            sound_enabled: config.sound_enabled(),
            announce: flags.announce,
        };
        tracing::info!(
            address = %agent.ingress_address,
            exit_grace_ms = agent.engine.exit_grace.as_millis() as u64,
            queue_capacity = agent.engine.queue_capacity,
            "starting agent"
        );

        let app = App {
            toast: ToastState::new(config.animation_cap()),
            engine: None,
            window_id: None,
            agent,
        };
        (app, Task::none())
    }

    fn title(&self, _window: window::Id) -> String {
        String::from("NotchDrop")
    }

    fn theme(&self, _window: window::Id) -> Theme {
        Theme::Dark
    }

    fn style(&self, theme: &Theme) -> theme::Style {
        theme::Style {
            background_color: Color::TRANSPARENT,
            text_color: theme.palette().text,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::agent(self.agent.clone()),
            subscription::animation_ticks(self.toast.is_animating()),
            subscription::window_closes(),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::EngineReady(handle) => {
                tracing::info!("engine ready");
                self.engine = Some(handle);
                Task::none()
            }
            Message::IngressFailed(reason) => {
                tracing::error!(%reason, "agent cannot accept requests, exiting");
                iced::exit()
            }
            Message::Presentation(event) => {
                let command = update::apply_presentation(
                    &mut self.toast,
                    event,
                    self.window_id.is_some(),
                    Instant::now(),
                );
                self.window_task(command)
            }
            Message::Tick(now) => {
                let command = update::apply_tick(&mut self.toast, self.window_id.is_some(), now);
                self.window_task(command)
            }
            Message::Tapped => {
                match &self.engine {
                    Some(engine) => {
                        if engine.activate().is_err() {
                            tracing::warn!("tap ignored, engine stopped");
                        }
                    }
                    None => tracing::debug!("tap before engine ready"),
                }
                Task::none()
            }
            Message::WindowOpened(id) => {
                tracing::debug!(?id, "overlay window opened");
                Task::none()
            }
            Message::WindowClosed(id) => {
                if self.window_id == Some(id) {
                    self.window_id = None;
                }
                Task::none()
            }
        }
    }

    fn window_task(&mut self, command: WindowCommand) -> Task<Message> {
        match command {
            WindowCommand::None => Task::none(),
            WindowCommand::Open => {
                let (id, open) = window::open(overlay_window_settings());
                self.window_id = Some(id);
                open.map(Message::WindowOpened)
            }
            WindowCommand::Close => match self.window_id.take() {
                Some(id) => window::close(id),
                None => Task::none(),
            },
        }
    }

    fn view(&self, _window: window::Id) -> Element<'_, Message> {
        view::view(&self.toast)
    }
}
