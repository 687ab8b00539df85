use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, fmt::writer::BoxMakeWriter, layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "userdir=info";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Where tracing output goes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogSink {
    Disabled,
    Stderr,
    File(PathBuf),
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing(sink: &LogSink, format: LogFormat) -> Result<()> {
    let (writer, ansi) = match sink {
        LogSink::Disabled => return Ok(()),
        LogSink::Stderr => (BoxMakeWriter::new(io::stderr), true),
        LogSink::File(path) => (BoxMakeWriter::new(Mutex::new(open_log_file(path)?)), false),
    };

    let layer = match format {
        LogFormat::Text => fmt::layer().with_writer(writer).with_ansi(ansi).boxed(),
        LogFormat::Json => fmt::layer().json().with_writer(writer).boxed(),
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(layer)
        .try_init()
        .context("Failed to install tracing subscriber")
}

pub(crate) fn open_log_file(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file {}", path.display()))
}
