// SPDX-License-Identifier: MPL-2.0
//! Animated status glyph shown at the left edge of the toast.
//!
//! Each kind has a short loop of text frames played while the toast is
//! fresh, and a still idle frame used afterwards and while leaving.

use crate::domain::notification::Kind;
use std::time::{Duration, Instant};

/// Frames per loop.
pub const FRAME_COUNT: usize = 8;

/// Time each frame stays on screen.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(100);

const WAITING: [&str; FRAME_COUNT] = ["·  ", "·· ", "···", " ··", "  ·", "   ", "·  ", "·· "];
const SUCCESS: [&str; FRAME_COUNT] = ["[ ]", "[.]", "[o]", "[O]", "[v]", "[V]", "[v]", "[V]"];
const ERROR: [&str; FRAME_COUNT] = ["(!)", "( )", "(!)", "( )", "(!)", "(!)", "( )", "(!)"];
const INFO: [&str; FRAME_COUNT] = ["( )", "(.)", "(i)", "(i)", "(I)", "(i)", "(i)", "(.)"];

/// Animation frames of `kind`.
#[must_use]
pub fn frames(kind: Kind) -> &'static [&'static str; FRAME_COUNT] {
    match kind {
        Kind::Waiting => &WAITING,
        Kind::Success => &SUCCESS,
        Kind::Error => &ERROR,
        Kind::Info => &INFO,
    }
}

/// Still frame of `kind`.
#[must_use]
pub fn idle_frame(kind: Kind) -> &'static str {
    match kind {
        Kind::Waiting => "···",
        Kind::Success => "[v]",
        Kind::Error => "(!)",
        Kind::Info => "(i)",
    }
}

/// How long the glyph animates for a toast displayed for `display`.
///
/// A share of the display time, capped so long toasts settle quickly.
#[must_use]
pub fn animation_window(display: Duration, ratio: f64, cap: Duration) -> Duration {
    display.mul_f64(ratio.clamp(0.0, 1.0)).min(cap)
}

/// Playback position of a glyph loop.
#[derive(Debug, Clone)]
pub struct GlyphAnimation {
    kind: Kind,
    frame: usize,
    started: Option<Instant>,
    until: Option<Instant>,
}

impl Default for GlyphAnimation {
    fn default() -> Self {
        Self {
            kind: Kind::default(),
            frame: 0,
            started: None,
            until: None,
        }
    }
}

impl GlyphAnimation {
    /// Restarts the loop of `kind` from the first frame for `run_for`.
    pub fn start(&mut self, kind: Kind, now: Instant, run_for: Duration) {
        self.kind = kind;
        self.frame = 0;
        self.started = Some(now);
        self.until = Some(now + run_for);
    }

    /// Switches to the idle frame of `kind`.
    pub fn stop(&mut self, kind: Kind) {
        self.kind = kind;
        self.frame = 0;
        self.started = None;
        self.until = None;
    }

    /// Advances to the frame due at `now`; stops once the window is over.
    pub fn tick(&mut self, now: Instant) {
        let (Some(started), Some(until)) = (self.started, self.until) else {
            return;
        };
        if now >= until {
            self.stop(self.kind);
            return;
        }
        let elapsed = now.saturating_duration_since(started);
        let steps = elapsed.as_millis() / FRAME_INTERVAL.as_millis();
        self.frame = (steps % FRAME_COUNT as u128) as usize;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.until.is_some()
    }

    /// Text to draw right now.
    #[must_use]
    pub fn current(&self) -> &'static str {
        if self.is_running() {
            frames(self.kind)[self.frame]
        } else {
            idle_frame(self.kind)
        }
    }
}
