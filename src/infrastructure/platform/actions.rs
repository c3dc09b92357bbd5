// SPDX-License-Identifier: MPL-2.0
//! [`ActionExecutor`] implementation for the desktop.
//!
//! Focus actions try the requested application first and then the
//! configured fallbacks, foregrounding the first one that is running. URL
//! actions open the link with the default handler. Both run on Tokio's
//! blocking pool so the engine is never held up by a slow helper process.

use super::focus::{AppFocuser, SystemFocuser};
use crate::application::port::ActionExecutor;
use crate::domain::notification::{Action, ActionKind};
use std::io;
use std::sync::Arc;
use url::Url;

/// Opens URLs with the system's default handler.
pub trait UrlOpener: Send + Sync {
    fn open(&self, url: &Url) -> io::Result<()>;
}

/// [`UrlOpener`] backed by the `webbrowser` crate.
#[derive(Debug, Clone, Default)]
pub struct BrowserOpener;

impl UrlOpener for BrowserOpener {
    fn open(&self, url: &Url) -> io::Result<()> {
        webbrowser::open(url.as_str())
    }
}

/// Runs tap actions against the real desktop.
#[derive(Clone)]
pub struct SystemActionExecutor {
    focuser: Arc<dyn AppFocuser>,
    opener: Arc<dyn UrlOpener>,
    fallback_apps: Arc<[String]>,
}

impl SystemActionExecutor {
    /// Creates an executor using the system focuser and browser.
    #[must_use]
    pub fn new(fallback_apps: Vec<String>) -> Self {
        Self::with_backends(
            Arc::new(SystemFocuser::new()),
            Arc::new(BrowserOpener),
            fallback_apps,
        )
    }

    #[must_use]
    pub fn with_backends(
        focuser: Arc<dyn AppFocuser>,
        opener: Arc<dyn UrlOpener>,
        fallback_apps: Vec<String>,
    ) -> Self {
        Self {
            focuser,
            opener,
            fallback_apps: fallback_apps.into(),
        }
    }

    #[must_use]
    pub fn fallback_apps(&self) -> &[String] {
        &self.fallback_apps
    }

    fn focus(&self, target: Option<&str>) {
        let candidates = focus_candidates(target, &self.fallback_apps);
        let focuser = Arc::clone(&self.focuser);
        run_blocking(move || {
            for app_id in &candidates {
                match focuser.focus(app_id) {
                    Ok(true) => {
                        tracing::debug!(app_id = %app_id, "focused application");
                        return;
                    }
                    Ok(false) => tracing::trace!(app_id = %app_id, "application not running"),
                    Err(err) => tracing::debug!(app_id = %app_id, error = %err, "focus attempt failed"),
                }
            }
            tracing::debug!(?candidates, "no candidate application is running");
        });
    }

    fn open_url(&self, target: Option<&str>) {
        let Some(url) = target.and_then(parse_url) else {
            tracing::debug!(target = ?target, "ignoring open-url action without a valid URL");
            return;
        };
        let opener = Arc::clone(&self.opener);
        run_blocking(move || {
            if let Err(err) = opener.open(&url) {
                tracing::debug!(url = %url, error = %err, "failed to open URL");
            }
        });
    }
}

impl std::fmt::Debug for SystemActionExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SystemActionExecutor")
            .field("fallback_apps", &self.fallback_apps)
            .finish_non_exhaustive()
    }
}

impl ActionExecutor for SystemActionExecutor {
    fn execute(&self, action: &Action) {
        match action.kind() {
            ActionKind::None => {}
            ActionKind::Focus => self.focus(action.target()),
            ActionKind::OpenUrl => self.open_url(action.target()),
        }
    }
}

/// The requested application followed by the fallbacks, without repeats.
fn focus_candidates(target: Option<&str>, fallbacks: &[String]) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::with_capacity(fallbacks.len() + 1);
    for app_id in target.into_iter().chain(fallbacks.iter().map(String::as_str)) {
        let app_id = app_id.trim();
        if !app_id.is_empty() && !candidates.iter().any(|c| c == app_id) {
            candidates.push(app_id.to_string());
        }
    }
    candidates
}

/// Absolute URLs only; `"not a url"` and relative paths are rejected.
fn parse_url(target: &str) -> Option<Url> {
    Url::parse(target.trim()).ok()
}

/// Runs `job` on the blocking pool, or inline when no runtime is active.
fn run_blocking<F>(job: F)
where
    F: FnOnce() + Send + 'static,
{
    match tokio::runtime::Handle::try_current() {
        Ok(runtime) => {
            runtime.spawn_blocking(job);
        }
        Err(_) => job(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakeFocuser {
        running: Vec<&'static str>,
        attempts: Mutex<Vec<String>>,
    }

    impl AppFocuser for FakeFocuser {
        fn focus(&self, app_id: &str) -> io::Result<bool> {
            self.attempts.lock().unwrap().push(app_id.to_string());
            Ok(self.running.contains(&app_id))
        }
    }

    #[derive(Default)]
    struct FakeOpener {
        opened: Mutex<Vec<String>>,
    }

    impl UrlOpener for FakeOpener {
        fn open(&self, url: &Url) -> io::Result<()> {
            self.opened.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn executor(
        running: Vec<&'static str>,
    ) -> (SystemActionExecutor, Arc<FakeFocuser>, Arc<FakeOpener>) {
        let focuser = Arc::new(FakeFocuser {
            running,
            ..FakeFocuser::default()
        });
        let opener = Arc::new(FakeOpener::default());
        let executor = SystemActionExecutor::with_backends(
            focuser.clone(),
            opener.clone(),
            vec!["com.apple.Terminal".into(), "com.googlecode.iterm2".into()],
        );
        (executor, focuser, opener)
    }

    #[test]
    fn focus_prefers_target() {
        let (executor, focuser, _) = executor(vec!["dev.zed.Zed", "com.apple.Terminal"]);
        executor.execute(&Action::focus(Some("dev.zed.Zed")));
        assert_eq!(*focuser.attempts.lock().unwrap(), vec!["dev.zed.Zed"]);
    }

    #[test]
    fn focus_falls_back_in_order() {
        let (executor, focuser, _) = executor(vec!["com.googlecode.iterm2"]);
        executor.execute(&Action::focus(Some("dev.zed.Zed")));
        assert_eq!(
            *focuser.attempts.lock().unwrap(),
            vec!["dev.zed.Zed", "com.apple.Terminal", "com.googlecode.iterm2"]
        );
    }

    #[test]
    fn focus_without_target_goes_straight_to_fallbacks() {
        let (executor, focuser, _) = executor(vec!["com.apple.Terminal"]);
        executor.execute(&Action::focus(None::<String>));
        assert_eq!(*focuser.attempts.lock().unwrap(), vec!["com.apple.Terminal"]);
    }

    #[test]
    fn nothing_running_is_a_no_op() {
        let (executor, focuser, opener) = executor(vec![]);
        executor.execute(&Action::focus(Some("dev.zed.Zed")));
        assert_eq!(focuser.attempts.lock().unwrap().len(), 3);
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn valid_url_is_opened() {
        let (executor, _, opener) = executor(vec![]);
        executor.execute(&Action::open_url("https://example.com/pr/1"));
        assert_eq!(
            *opener.opened.lock().unwrap(),
            vec!["https://example.com/pr/1"]
        );
    }

    #[test]
    fn invalid_url_is_ignored() {
        let (executor, focuser, opener) = executor(vec![]);
        executor.execute(&Action::open_url("not a url"));
        assert!(opener.opened.lock().unwrap().is_empty());
        assert!(focuser.attempts.lock().unwrap().is_empty());
    }

    #[test]
    fn none_action_does_nothing() {
        let (executor, focuser, opener) = executor(vec!["com.apple.Terminal"]);
        executor.execute(&Action::none());
        assert!(focuser.attempts.lock().unwrap().is_empty());
        assert!(opener.opened.lock().unwrap().is_empty());
    }

    #[test]
    fn candidates_skip_duplicates_and_blanks() {
        let fallbacks = vec!["a".to_string(), " ".to_string(), "b".to_string()];
        assert_eq!(focus_candidates(Some("b"), &fallbacks), vec!["b", "a"]);
    }
}
