//! CLI logging initialization
//!
//! Stage-scoped log control built on `tracing-subscriber`.

use crate::config::LogConfig;
use solbuild_config::Stage;
use std::io;
use tracing_subscriber::{
    filter::Targets, fmt, layer::SubscriberExt, registry::LookupSpan,
    util::SubscriberInitExt, Layer,
};

/// Log output format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    /// Colorful formatting (development use)
    Pretty,
    /// Compact format
    Compact,
    /// JSON format (tool integration)
    Json,
}

/// Initialize the logging system with the given format and log configuration
///
/// When a file is given, logs go to both stderr and the file, in the same
/// format. Fails when the log file cannot be opened.
pub fn init_with_file<P: AsRef<std::path::Path>>(
    log_config: &LogConfig,
    format: LogFormat,
    file: Option<P>,
) -> io::Result<()> {
    // Build filter targets
    let targets = Targets::new()
        .with_default(log_config.global)
        .with_target(Stage::Loader.target(), log_config.level_for(Stage::Loader))
        .with_target(Stage::Resolver.target(), log_config.level_for(Stage::Resolver))
        .with_target(Stage::Plugins.target(), log_config.level_for(Stage::Plugins))
        .with_target(Stage::Cli.target(), log_config.level_for(Stage::Cli));

    // If file specified, output to both console and file
    if let Some(path) = file {
        let file_handle = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)?;

        let stderr_layer =
            create_format_layer(format, io::stderr).with_filter(targets.clone());

        let file_layer = create_format_layer(format, move || {
            file_handle.try_clone().expect("Failed to clone file handle")
        })
        .with_filter(targets);

        tracing_subscriber::registry()
            .with(stderr_layer)
            .with(file_layer)
            .init();
    } else {
        // Console only
        let stderr_layer = create_format_layer(format, io::stderr).with_filter(targets);
        tracing_subscriber::registry().with(stderr_layer).init();
    }

    Ok(())
}

/// Create formatter layer based on format
fn create_format_layer<S, W, F>(format: LogFormat, make_writer: F) -> Box<dyn Layer<S> + Send + Sync>
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    W: io::Write + Send + Sync + 'static,
    F: Fn() -> W + Send + Sync + 'static,
{
    match format {
        LogFormat::Pretty => fmt::layer()
            .pretty()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Compact => fmt::layer()
            .compact()
            .with_target(false)
            .without_time()
            .with_writer(make_writer)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .with_target(true)
            .with_timer(fmt::time::time())
            .with_writer(make_writer)
            .boxed(),
    }
}
