// SPDX-License-Identifier: MPL-2.0
//! `notchdrop` shows short animated toast notifications near the top of the
//! screen.
//!
//! A long-running agent owns the notification engine and the overlay window.
//! The `notify` command encodes a request as a `notchdrop://notify?b64=…`
//! URI and delivers it to the agent over a loopback socket. The engine
//! replaces or queues toasts, dismisses them after their duration and runs
//! the toast's action (focus an application or open a URL) when clicked.

pub mod app;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
