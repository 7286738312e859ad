//! Log sink setup
//!
//! Logs go to the `--log` file when it can be opened, stderr otherwise.
//! The subscriber is returned as a [`Dispatch`] for the caller to scope;
//! nothing is installed globally.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing::{Dispatch, Level};
use tracing_subscriber::FmtSubscriber;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Where log lines are written
pub struct LogSink {
    writer: BoxMakeWriter,
    ansi: bool,
    /// Why the sink fell back to stderr, if it did
    fallback: Option<String>,
}

impl LogSink {
    /// Open `path` for appending, or fall back to stderr
    pub fn open(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::stderr("No logging path set, using stderr".to_string());
        };

        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(file) => Self {
                writer: BoxMakeWriter::new(Mutex::new(file)),
                ansi: false,
                fallback: None,
            },
            Err(e) => Self::stderr(format!(
                "Cannot open log file {} ({}), using stderr",
                path.display(),
                e
            )),
        }
    }

    fn stderr(reason: String) -> Self {
        Self {
            writer: BoxMakeWriter::new(std::io::stderr),
            ansi: true,
            fallback: Some(reason),
        }
    }

    /// Reason for falling back to stderr, if any
    pub fn fallback(&self) -> Option<&str> {
        self.fallback.as_deref()
    }
}

/// Log level for the `--debug` flag
pub fn level(debug: bool) -> Level {
    if debug { Level::DEBUG } else { Level::INFO }
}

/// Build the subscriber for this run
pub fn dispatch(level: Level, sink: LogSink) -> Dispatch {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_ansi(sink.ansi)
        .with_writer(sink.writer)
        .finish();

    Dispatch::new(subscriber)
}
