//! Logging for `quasarctl` advanced users.
//!
//! Logs are disabled by default so command output stays clean: users opt into
//! a JSON log file when debugging sessions with the Control Plane.
use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Context as _;
use anyhow::Result;
use clap::Args;
use clap::ValueEnum;
use slog::o;
use slog::Drain;
use slog::FnValue;
use slog::Logger;
use slog::Record;

use crate::utils::resolve_home;

/// Enumerate valid log verbosity levels.
#[derive(Clone, Debug, ValueEnum)]
enum LogLevel {
    Critical,
    Error,
    Warning,
    Info,
    Debug,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Critical => write!(f, "critical"),
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
        }
    }
}

impl From<LogLevel> for slog::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Critical => slog::Level::Critical,
            LogLevel::Error => slog::Level::Error,
            LogLevel::Warning => slog::Level::Warning,
            LogLevel::Info => slog::Level::Info,
            LogLevel::Debug => slog::Level::Debug,
        }
    }
}

/// Logging-related options.
#[derive(Args, Debug)]
pub struct LogOpt {
    /// If provided, logs will be emitted to this file.
    #[arg(long = "log-file", name = "log-file", global = true, env = "QCTL_LOG_FILE")]
    file: Option<String>,

    /// Verbosity level for the log file.
    #[arg(
        long = "log-level",
        global = true,
        default_value_t = LogLevel::Info,
        value_enum
    )]
    level: LogLevel,
}

/// Initialise a logger based on the given CLI arguments.
///
/// Without a `--log-file` all events are discarded.
pub fn configure(opt: &LogOpt) -> Result<Logger> {
    let file = match &opt.file {
        Some(file) => resolve_home(file)?,
        None => return Ok(Logger::root(slog::Discard, o!())),
    };
    file_logger(file, opt.level.clone().into())
}

/// Build a logger appending JSON encoded events to a file.
///
/// Events are flushed as they are logged so a session cut short by an error
/// still leaves its trail behind. Write failures are ignored: logging must
/// never take a command down with it.
fn file_logger(path: String, level: slog::Level) -> Result<Logger> {
    let writer = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("unable to open log file at {}", path))?;
    let drain = slog_json::Json::new(writer)
        .set_newlines(true)
        .set_flush(true)
        .add_default_keys()
        .build();
    let drain = Mutex::new(drain).filter_level(level).ignore_res();
    let logger = Logger::root(
        drain,
        o!(
            "module" => FnValue(|record: &Record| record.module()),
            "version" => env!("CARGO_PKG_VERSION"),
        ),
    );
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::configure;
    use super::LogLevel;
    use super::LogOpt;

    fn temp_log_path() -> String {
        let mut path = std::env::temp_dir();
        path.push(format!("quasarctl-logging-test-{}.log", std::process::id()));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn defaults_to_discarding_events() {
        let opt = LogOpt {
            file: None,
            level: LogLevel::Info,
        };
        let logger = configure(&opt).expect("a logger");
        slog::info!(logger, "nothing to see");
    }

    #[test]
    fn writes_json_lines_to_the_log_file() {
        let path = temp_log_path();
        let _ = std::fs::remove_file(&path);
        let opt = LogOpt {
            file: Some(path.clone()),
            level: LogLevel::Debug,
        };
        let logger = configure(&opt).expect("a logger");
        slog::info!(logger, "session opened"; "context" => "default");
        drop(logger);

        let contents = std::fs::read_to_string(&path).expect("log file to exist");
        let _ = std::fs::remove_file(&path);
        let line = contents.lines().last().expect("a logged line");
        let event: serde_json::Value = serde_json::from_str(line).expect("JSON encoded event");
        assert_eq!(event["msg"], "session opened");
        assert_eq!(event["context"], "default");
        assert_eq!(event["version"], env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn events_below_the_level_are_filtered() {
        let path = temp_log_path() + ".filtered";
        let _ = std::fs::remove_file(&path);
        let opt = LogOpt {
            file: Some(path.clone()),
            level: LogLevel::Error,
        };
        let logger = configure(&opt).expect("a logger");
        slog::debug!(logger, "too detailed to keep");
        drop(logger);

        let contents = std::fs::read_to_string(&path).expect("log file to exist");
        let _ = std::fs::remove_file(&path);
        assert_eq!(contents, "");
    }
}
