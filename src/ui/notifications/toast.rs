// SPDX-License-Identifier: MPL-2.0
//! Toast state and widget.
//!
//! [`ToastState`] mirrors what the engine pushed through the presentation
//! events: the notification content, whether the glyph animates, and where
//! the entry or exit transition stands. [`view`] renders it as a pill with
//! a kind-colored tint, the glyph, title, message and a status dot.

use super::glyph::{self, GlyphAnimation};
use crate::app::config::ANIMATION_DURATION_RATIO;
use crate::domain::notification::{Kind, ResolvedNotification};
use crate::ui::design_tokens::{
    border, motion, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{column, container, mouse_area, row, space, text, Container};
use iced::{alignment, Color, Element, Font, Length, Padding};
use std::time::{Duration, Instant};

/// Where the toast is in its visual lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Hidden,
    Entering { since: Instant },
    Shown,
    Exiting { since: Instant },
}

/// Everything the toast view needs.
#[derive(Debug, Clone)]
pub struct ToastState {
    notification: Option<ResolvedNotification>,
    glyph: GlyphAnimation,
    stage: Stage,
    animation_cap: Duration,
    now: Instant,
}

impl ToastState {
    #[must_use]
    pub fn new(animation_cap: Duration) -> Self {
        Self {
            notification: None,
            glyph: GlyphAnimation::default(),
            stage: Stage::Hidden,
            animation_cap,
            now: Instant::now(),
        }
    }

    /// Replaces the content. A fresh `animating` render restarts the glyph.
    pub fn render(&mut self, notification: ResolvedNotification, animating: bool, now: Instant) {
        self.now = now;
        if animating {
            let window = glyph::animation_window(
                notification.duration(),
                ANIMATION_DURATION_RATIO,
                self.animation_cap,
            );
            self.glyph.start(notification.kind(), now, window);
        } else {
            self.glyph.stop(notification.kind());
        }
        self.notification = Some(notification);
    }

    /// Starts the entry transition.
    pub fn show(&mut self, now: Instant) {
        self.now = now;
        self.stage = Stage::Entering { since: now };
    }

    /// Starts the exit transition. Hiding a hidden toast does nothing.
    pub fn hide(&mut self, now: Instant) {
        self.now = now;
        if self.stage != Stage::Hidden {
            self.stage = Stage::Exiting { since: now };
        }
    }

    /// Advances animations. Returns `true` once an exit transition has
    /// finished, at which point the surface can go away.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.now = now;
        self.glyph.tick(now);
        match self.stage {
            Stage::Entering { since } if now.saturating_duration_since(since) >= motion::ENTER => {
                self.stage = Stage::Shown;
                false
            }
            Stage::Exiting { since } if now.saturating_duration_since(since) >= motion::EXIT => {
                self.stage = Stage::Hidden;
                true
            }
            _ => false,
        }
    }

    /// Whether anything moves and needs frequent redraws.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.glyph.is_running() || matches!(self.stage, Stage::Entering { .. } | Stage::Exiting { .. })
    }

    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    #[must_use]
    pub fn notification(&self) -> Option<&ResolvedNotification> {
        self.notification.as_ref()
    }

    #[must_use]
    pub fn glyph_frame(&self) -> &'static str {
        self.glyph.current()
    }

    /// 0.0 fully hidden, 1.0 fully in place.
    #[must_use]
    pub fn reveal(&self) -> f32 {
        match self.stage {
            Stage::Hidden => 0.0,
            Stage::Shown => 1.0,
            Stage::Entering { since } => ease_out_back(progress(self.now, since, motion::ENTER)),
            Stage::Exiting { since } => 1.0 - ease_in(progress(self.now, since, motion::EXIT)),
        }
    }
}

fn progress(now: Instant, since: Instant, length: Duration) -> f32 {
    (now.saturating_duration_since(since).as_secs_f32() / length.as_secs_f32()).clamp(0.0, 1.0)
}

/// Slight overshoot, like a damped spring.
fn ease_out_back(t: f32) -> f32 {
    const C1: f32 = 1.2;
    const C3: f32 = C1 + 1.0;
    1.0 + C3 * (t - 1.0).powi(3) + C1 * (t - 1.0).powi(2)
}

fn ease_in(t: f32) -> f32 {
    t * t
}

/// Accent color of `kind`.
#[must_use]
pub fn accent(kind: Kind) -> Color {
    match kind {
        Kind::Waiting => palette::WAITING,
        Kind::Success => palette::SUCCESS,
        Kind::Error => palette::ERROR,
        Kind::Info => palette::INFO,
    }
}

fn with_alpha(color: Color, alpha: f32) -> Color {
    Color { a: alpha, ..color }
}

/// Renders the toast. A press anywhere on it emits `on_tap`.
pub fn view<'a, Message: Clone + 'a>(
    state: &'a ToastState,
    on_tap: Message,
) -> Element<'a, Message> {
    let Some(notification) = state.notification() else {
        return space::horizontal().into();
    };

    let reveal = state.reveal();
    let fade = reveal.clamp(0.0, 1.0);
    let accent_color = accent(notification.kind());
    let dot_alpha = if state.glyph.is_running() {
        opacity::OPAQUE
    } else {
        opacity::DOT_IDLE
    };

    let glyph = container(
        text(state.glyph_frame())
            .font(Font::MONOSPACE)
            .size(typography::GLYPH)
            .color(with_alpha(accent_color, fade)),
    )
    .width(Length::Fixed(sizing::GLYPH))
    .height(Length::Fixed(sizing::GLYPH))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    let lines = column![
        text(notification.title())
            .size(typography::TITLE)
            .font(Font {
                weight: iced::font::Weight::Semibold,
                ..Font::DEFAULT
            })
            .color(with_alpha(palette::WHITE, fade)),
        text(notification.message())
            .size(typography::BODY)
            .color(with_alpha(palette::WHITE, opacity::MESSAGE * fade)),
    ]
    .spacing(spacing::XXS)
    .width(Length::Fill);

    let dot = container(space::horizontal())
        .width(Length::Fixed(sizing::STATUS_DOT))
        .height(Length::Fixed(sizing::STATUS_DOT))
        .style(move |_theme: &iced::Theme| container::Style {
            background: Some(with_alpha(accent_color, dot_alpha * fade).into()),
            border: iced::Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        });

    let content = row![glyph, lines, dot]
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Center);

    let pill = Container::new(content)
        .width(Length::Fixed(sizing::TOAST_WIDTH))
        .height(Length::Fixed(sizing::TOAST_HEIGHT))
        .padding(Padding {
            top: spacing::SM,
            bottom: spacing::SM,
            left: spacing::LG,
            right: spacing::LG,
        })
        .style(move |_theme: &iced::Theme| pill_style(accent_color, fade));

    // Slides down from above while fading in.
    let offset = sizing::SLIDE_DISTANCE * reveal.clamp(0.0, 1.2);
    let placed = container(pill).padding(Padding {
        top: offset,
        ..Padding::ZERO
    });

    mouse_area(placed).on_press(on_tap).into()
}

/// Surface with an accent wash, a hairline outline and a soft shadow.
fn pill_style(accent_color: Color, fade: f32) -> container::Style {
    let surface = palette::SURFACE;
    let tinted = Color {
        r: surface.r + (accent_color.r - surface.r) * opacity::ACCENT_TINT,
        g: surface.g + (accent_color.g - surface.g) * opacity::ACCENT_TINT,
        b: surface.b + (accent_color.b - surface.b) * opacity::ACCENT_TINT,
        a: opacity::SURFACE * fade,
    };

    container::Style {
        background: Some(tinted.into()),
        border: iced::Border {
            color: with_alpha(palette::WHITE, opacity::OUTLINE * fade),
            width: border::WIDTH_SM,
            radius: radius::TOAST.into(),
        },
        shadow: iced::Shadow {
            color: with_alpha(shadow::TOAST.color, shadow::TOAST.color.a * fade),
            ..shadow::TOAST
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}
