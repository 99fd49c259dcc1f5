use std::{io, path::Path};

use anyhow::{Context, Result};
use tracing::{Level, level_filters::LevelFilter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{Layer, layer::SubscriberExt};

/// Upper-cases the first character of `s`, leaving the rest untouched.
pub(crate) fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Final `/`-delimited segment of a namespaced sound name, or the whole name when that
/// segment is empty.
pub(crate) fn last_segment(name: &str) -> &str {
    match name.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => name,
    }
}

/// Installs the global subscriber. Logs go to stderr so stdout stays clean for output,
/// and additionally to a daily log file when `log_dir` is given.
pub fn setup_logger(max_level: Level, log_dir: Option<&Path>) -> Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .with_filter(LevelFilter::from(max_level));

    let file_layer = match log_dir {
        Some(dir) => {
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::DAILY)
                .filename_prefix("sound-indexer")
                .filename_suffix("log")
                .build(dir)
                .context("Failed to create the log file appender")?;
            Some(
                tracing_subscriber::fmt::layer()
                    .with_writer(appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_filter(LevelFilter::from(max_level)),
            )
        }
        None => None,
    };

    let subscriber = tracing_subscriber::registry()
        .with(fmt_layer)
        .with(file_layer);
    let _ = tracing::subscriber::set_global_default(subscriber);
    Ok(())
}
