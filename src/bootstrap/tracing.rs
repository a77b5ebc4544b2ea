//! Tracing configuration for AR Style
//!
//! Installs the global `tracing-subscriber` registry:
//!
//! - `EnvFilter` honouring `RUST_LOG`, debug in debug builds, info otherwise
//! - stdout fmt layer with UTC timestamps
//! - optional non-blocking file layer writing `arstyle.log`

use std::path::Path;
use std::{fs, io, sync::OnceLock};

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry};

pub const LOG_FILE_NAME: &str = "arstyle.log";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives, used when `RUST_LOG` is unset.
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let app_level = if is_dev { "debug" } else { "info" };
    vec![
        app_level.to_string(),
        "hyper_util=warn".to_string(),
        "reqwest=info".to_string(),
        "rustls=warn".to_string(),
        format!("ars_app={app_level}"),
        format!("ars_infra={app_level}"),
        // Per-tick progress is debug; keep it out of production logs.
        if is_dev {
            "ars_app::usecases::flow=debug"
        } else {
            "ars_app::usecases::flow=info"
        }
        .to_string(),
    ]
}

/// Initialize the tracing subscriber.
///
/// `log_dir` enables the file layer; when it cannot be created the
/// subscriber falls back to stdout only.
///
/// # Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(log_dir: Option<&Path>) -> anyhow::Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        tracing_subscriber::EnvFilter::new(build_filter_directives(is_development()).join(","))
    });

    let stdout_writer: BoxMakeWriter = BoxMakeWriter::new(io::stdout);
    let file_writer = match log_dir.map(build_file_writer).transpose() {
        Ok(writer) => writer,
        Err(err) => {
            eprintln!("Failed to initialize file logging, falling back to stdout: {err}");
            None
        }
    };

    let stdout_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stdout_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    let subscriber = registry().with(env_filter).with(stdout_layer);
    if let Some(layer) = file_layer {
        subscriber.with(layer).try_init()?;
    } else {
        subscriber.try_init()?;
    }

    Ok(())
}

fn build_file_writer(log_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE_NAME);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
