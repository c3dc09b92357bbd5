// SPDX-License-Identifier: MPL-2.0
//! Command-line front end.
//!
//! `notify` encodes a notification request and hands it to the running
//! agent over the loopback ingress; `agent` runs the overlay itself.
//! Parsing is kept separate from execution so it can be tested with
//! [`pico_args::Arguments::from_vec`].

use crate::app::{self, Flags};
use crate::app::config;
use crate::domain::notification::{
    Action, ActionKind, DisplayDuration, Kind, NotificationRequest, DEFAULT_TITLE,
};
use crate::error::DeliveryError;
use crate::infrastructure::ingress::{self, codec};
use crate::logging;
use crate::app::paths;
use std::ffi::OsString;
use std::process::ExitCode;
use thiserror::Error;

/// Usage text printed by `help` and on command errors.
pub const USAGE: &str = "\
NotchDrop v1.0.0

USAGE:
    notchdrop notify [options]
    notchdrop agent [--announce]

NOTIFY OPTIONS:
    --title, -t            Notification title (default: \"NotchDrop\")
    --message, -m          Notification message (omit for a random variant)
    --kind, -k             Kind: waiting|success|error|info (default: info)
    --duration, -d         Display duration in seconds (default: 2.8)
    --sound, -s            System sound name, e.g. Glass (default: none)
    --action, -a           Action on click: focus|open-url|none (default: none)
    --app-bundle-id, -b    Application to focus (alias: --bundle-id)
    --url, -u              URL for the open-url action
    --queue, -q            Wait for the current toast instead of replacing it

GLOBAL OPTIONS:
    --config-dir <PATH>    Use another configuration directory
    --help, -h             Print this help
    --version              Print the version

EXAMPLES:
    notchdrop notify --title \"Build\" --kind waiting --sound Glass --action focus
    notchdrop notify -t \"Error\" -m \"Compilation failed\" -k error -s Basso
";

/// What the user asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Notify(NotifyArgs),
    Agent { announce: bool },
    Help,
    Version,
}

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub config_dir: Option<String>,
    pub command: Command,
    /// Arguments nobody recognised. Reported and otherwise ignored.
    pub ignored: Vec<String>,
}

/// Options of the `notify` subcommand.
#[derive(Debug, Clone, PartialEq)]
pub struct NotifyArgs {
    pub title: String,
    pub message: String,
    pub kind: Kind,
    pub duration: Option<DisplayDuration>,
    pub sound: Option<String>,
    pub action: ActionKind,
    pub bundle_id: Option<String>,
    pub url: Option<String>,
    pub queue: bool,
}

impl Default for NotifyArgs {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            message: String::new(),
            kind: Kind::Info,
            duration: None,
            sound: None,
            action: ActionKind::None,
            bundle_id: None,
            url: None,
            queue: false,
        }
    }
}

impl NotifyArgs {
    /// Builds the request sent to the agent.
    ///
    /// The action target is taken from `--app-bundle-id` for `focus` and
    /// from `--url` for `open-url`. No action is attached for `none`.
    #[must_use]
    pub fn to_request(&self) -> NotificationRequest {
        let mut request = NotificationRequest::new(self.kind)
            .with_title(self.title.clone())
            .with_message(self.message.clone());
        if let Some(duration) = self.duration {
            request = request.with_duration(duration);
        }
        if let Some(sound) = &self.sound {
            request = request.with_sound(sound.clone());
        }
        let target = match self.action {
            ActionKind::None => None,
            ActionKind::Focus => self.bundle_id.clone(),
            ActionKind::OpenUrl => self.url.clone(),
        };
        if self.action != ActionKind::None {
            request = request.with_action(Action::new(self.action, target));
        }
        request
    }
}

/// Command-line errors. All of them end with exit code 1.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("no command given")]
    MissingCommand,

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(#[from] pico_args::Error),

    #[error("duration must be a positive number of seconds, got {0}")]
    InvalidDuration(f64),
}

impl CliError {
    /// Whether the usage text should follow the error message.
    #[must_use]
    pub fn wants_usage(&self) -> bool {
        matches!(self, CliError::MissingCommand | CliError::UnknownCommand(_))
    }
}

/// Parses the process arguments (without the program name).
pub fn parse(mut args: pico_args::Arguments) -> Result<Invocation, CliError> {
    let config_dir: Option<String> = args.opt_value_from_str("--config-dir")?;

    let command = match args.subcommand()?.as_deref() {
        Some("notify") => {
            if args.contains(["-h", "--help"]) {
                Command::Help
            } else {
                Command::Notify(parse_notify(&mut args)?)
            }
        }
        Some("agent") => Command::Agent {
            announce: args.contains("--announce"),
        },
        Some("help") => Command::Help,
        Some("version") => Command::Version,
        Some(other) => return Err(CliError::UnknownCommand(other.to_string())),
        None => {
            if args.contains(["-h", "--help"]) {
                Command::Help
            } else if args.contains("--version") {
                Command::Version
            } else {
                return Err(CliError::MissingCommand);
            }
        }
    };

    let ignored = args
        .finish()
        .into_iter()
        .map(|arg: OsString| arg.to_string_lossy().into_owned())
        .collect();

    Ok(Invocation {
        config_dir,
        command,
        ignored,
    })
}

fn parse_notify(args: &mut pico_args::Arguments) -> Result<NotifyArgs, CliError> {
    let defaults = NotifyArgs::default();

    let duration = match args.opt_value_from_str::<_, f64>(["-d", "--duration"])? {
        Some(secs) => Some(DisplayDuration::from_secs(secs).ok_or(CliError::InvalidDuration(secs))?),
        None => None,
    };
    let bundle_id = match args.opt_value_from_str(["-b", "--app-bundle-id"])? {
        Some(id) => Some(id),
        None => args.opt_value_from_str("--bundle-id")?,
    };

    Ok(NotifyArgs {
        title: args
            .opt_value_from_str(["-t", "--title"])?
            .unwrap_or(defaults.title),
        message: args
            .opt_value_from_str(["-m", "--message"])?
            .unwrap_or(defaults.message),
        kind: args
            .opt_value_from_str(["-k", "--kind"])?
            .unwrap_or(defaults.kind),
        duration,
        sound: args.opt_value_from_str(["-s", "--sound"])?,
        action: args
            .opt_value_from_str(["-a", "--action"])?
            .unwrap_or(defaults.action),
        bundle_id,
        url: args.opt_value_from_str(["-u", "--url"])?,
        queue: args.contains(["-q", "--queue"]),
    })
}

/// Parses the process arguments and runs the command.
#[must_use]
pub fn main() -> ExitCode {
    match parse(pico_args::Arguments::from_env()) {
        Ok(invocation) => run(invocation),
        Err(err) => {
            eprintln!("{err}");
            if err.wants_usage() {
                eprintln!();
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

/// Runs a parsed invocation and returns the process exit code.
pub fn run(invocation: Invocation) -> ExitCode {
    for arg in &invocation.ignored {
        eprintln!("Unknown option: {arg}");
    }
    paths::init_cli_overrides(invocation.config_dir);

    match invocation.command {
        Command::Help => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("notchdrop {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Command::Notify(notify) => run_notify(&notify),
        Command::Agent { announce } => run_agent(announce),
    }
}

fn run_agent(announce: bool) -> ExitCode {
    let (config, config_warning) = config::load();
    logging::init_agent(config.log_level());
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }

    match app::run(Flags { config, announce }) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "agent terminated");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run_notify(notify: &NotifyArgs) -> ExitCode {
    logging::init_command();
    let (config, config_warning) = config::load();
    if let Some(warning) = config_warning {
        tracing::warn!("{warning}");
    }

    let address = config.ingress_address();
    let uri = codec::encode_uri(&notify.to_request(), notify.queue);
    tracing::debug!(%address, kind = %notify.kind, queue = notify.queue, "delivering notification");

    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("Error: cannot start runtime: {err}");
            return ExitCode::FAILURE;
        }
    };

    delivery_exit_code(runtime.block_on(ingress::deliver(&address, &uri)))
}

/// Maps a delivery result to an exit code, printing what went wrong.
pub fn delivery_exit_code(result: Result<(), DeliveryError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) if err.is_soft() => {
            eprintln!("Warning: {err}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!("Make sure the agent is running (`notchdrop agent`).");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_strs(args: &[&str]) -> Result<Invocation, CliError> {
        parse(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    fn notify(args: &[&str]) -> NotifyArgs {
        match parse_strs(args).unwrap().command {
            Command::Notify(notify) => notify,
            other => panic!("expected notify, got {other:?}"),
        }
    }

    #[test]
    fn notify_defaults() {
        assert_eq!(notify(&["notify"]), NotifyArgs::default());
    }

    #[test]
    fn notify_reads_all_long_flags() {
        let args = notify(&[
            "notify",
            "--title",
            "Build",
            "--message",
            "All green",
            "--kind",
            "success",
            "--duration",
            "4.5",
            "--sound",
            "Glass",
            "--action",
            "focus",
            "--app-bundle-id",
            "com.apple.Terminal",
            "--queue",
        ]);
        assert_eq!(args.title, "Build");
        assert_eq!(args.message, "All green");
        assert_eq!(args.kind, Kind::Success);
        assert_eq!(args.duration.map(DisplayDuration::secs), Some(4.5));
        assert_eq!(args.sound.as_deref(), Some("Glass"));
        assert_eq!(args.action, ActionKind::Focus);
        assert_eq!(args.bundle_id.as_deref(), Some("com.apple.Terminal"));
        assert!(args.queue);
    }

    #[test]
    fn notify_reads_short_flags_and_bundle_alias() {
        let args = notify(&[
            "notify", "-t", "T", "-m", "M", "-k", "error", "-d", "1", "-s", "Basso", "-a",
            "open-url", "-u", "https://example.com", "-q",
        ]);
        assert_eq!(args.kind, Kind::Error);
        assert_eq!(args.action, ActionKind::OpenUrl);
        assert_eq!(args.url.as_deref(), Some("https://example.com"));
        assert!(args.queue);

        let alias = notify(&["notify", "--bundle-id", "org.kde.konsole"]);
        assert_eq!(alias.bundle_id.as_deref(), Some("org.kde.konsole"));
    }

    #[test]
    fn invalid_values_are_errors() {
        assert!(matches!(
            parse_strs(&["notify", "--kind", "loud"]),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_strs(&["notify", "--action", "launch"]),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_strs(&["notify", "-d", "soon"]),
            Err(CliError::InvalidArgument(_))
        ));
        assert!(matches!(
            parse_strs(&["notify", "-d", "0"]),
            Err(CliError::InvalidDuration(_))
        ));
    }

    #[test]
    fn enormous_duration_is_clamped() {
        let args = notify(&["notify", "-d", "1e30"]);
        assert_eq!(
            args.duration.map(DisplayDuration::secs),
            Some(crate::domain::notification::MAX_DURATION_SECS)
        );
    }

    #[test]
    fn unknown_options_are_collected_not_fatal() {
        let invocation = parse_strs(&["notify", "--loud", "-t", "Hi"]).unwrap();
        assert_eq!(invocation.ignored, vec!["--loud".to_string()]);
        match invocation.command {
            Command::Notify(args) => assert_eq!(args.title, "Hi"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn help_and_version_forms() {
        for form in [&["help"][..], &["--help"], &["-h"], &["notify", "--help"]] {
            assert_eq!(parse_strs(form).unwrap().command, Command::Help, "{form:?}");
        }
        for form in [&["version"][..], &["--version"]] {
            assert_eq!(parse_strs(form).unwrap().command, Command::Version, "{form:?}");
        }
    }

    #[test]
    fn missing_and_unknown_commands_want_usage() {
        let missing = parse_strs(&[]).unwrap_err();
        assert!(matches!(missing, CliError::MissingCommand));
        assert!(missing.wants_usage());

        let unknown = parse_strs(&["shout"]).unwrap_err();
        assert_eq!(unknown.to_string(), "Unknown command: shout");
        assert!(unknown.wants_usage());
    }

    #[test]
    fn agent_and_config_dir() {
        let invocation = parse_strs(&["--config-dir", "/tmp/nd", "agent", "--announce"]).unwrap();
        assert_eq!(invocation.config_dir.as_deref(), Some("/tmp/nd"));
        assert_eq!(invocation.command, Command::Agent { announce: true });
    }

    #[test]
    fn request_takes_target_matching_action() {
        let focus = NotifyArgs {
            action: ActionKind::Focus,
            bundle_id: Some("com.apple.Terminal".into()),
            url: Some("https://example.com".into()),
            ..NotifyArgs::default()
        };
        assert_eq!(
            focus.to_request().action(),
            Some(&Action::focus(Some("com.apple.Terminal")))
        );

        let open = NotifyArgs {
            action: ActionKind::OpenUrl,
            ..focus.clone()
        };
        assert_eq!(
            open.to_request().action(),
            Some(&Action::open_url("https://example.com"))
        );

        let none = NotifyArgs {
            action: ActionKind::None,
            ..focus
        };
        assert_eq!(none.to_request().action(), None);
    }

    #[test]
    fn request_round_trips_through_uri() {
        let args = NotifyArgs {
            title: "Agent".into(),
            kind: Kind::Waiting,
            queue: true,
            ..NotifyArgs::default()
        };
        let decoded = codec::decode_uri(&codec::encode_uri(&args.to_request(), args.queue)).unwrap();
        assert_eq!(decoded.request, args.to_request());
        assert!(decoded.queue);
    }

    #[test]
    fn unreachable_agent_fails_but_soft_errors_succeed() {
        let hard = DeliveryError::Unreachable {
            address: "127.0.0.1:1".into(),
            source: std::io::Error::from(std::io::ErrorKind::ConnectionRefused),
        };
        assert_eq!(delivery_exit_code(Err(hard)), ExitCode::FAILURE);
        assert_eq!(
            delivery_exit_code(Err(DeliveryError::Rejected("rejected".into()))),
            ExitCode::SUCCESS
        );
        assert_eq!(delivery_exit_code(Ok(())), ExitCode::SUCCESS);
    }
}
