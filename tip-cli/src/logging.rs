//! Tracing setup for the `tipcalc` binary.
//!
//! Log lines go to stderr so they never interleave with the rendered form on
//! stdout, and optionally to a file named on the command line. The filter
//! can be swapped while the interactive calculator is running.

use std::{
    fs::File,
    io::{self, IsTerminal},
    path::PathBuf,
    sync::{Mutex, OnceLock},
};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::{
    EnvFilter, Registry,
    fmt::{
        FmtContext,
        format::{FormatEvent, FormatFields, Writer},
    },
    layer::SubscriberExt,
    registry::LookupSpan,
    reload,
    util::SubscriberInitExt,
};

const DEFAULT_FILTER: &str = "warn";

static FILTER_HANDLE: OnceLock<reload::Handle<EnvFilter, Registry>> = OnceLock::new();

/// Where log output goes and how much of it.
#[derive(Debug, Clone, Default)]
pub struct LogOptions {
    /// `EnvFilter` directive. Falls back to `RUST_LOG`, then `warn`.
    pub filter: Option<String>,
    /// File to append log lines to, in addition to stderr.
    pub file: Option<PathBuf>,
}

/// `12:04:31.118  WARN tip_core: input out of bounds; clamped field="tip" ...`
///
/// Only the crate part of the target is printed; the fields say the rest.
struct CalcFmt;

impl<S, N> FormatEvent<S, N> for CalcFmt
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> std::fmt::Result {
        let meta = event.metadata();
        let time = Local::now().format("%H:%M:%S%.3f");
        let level = meta.level();
        let origin = meta
            .target()
            .split("::")
            .next()
            .unwrap_or_else(|| meta.target());

        if writer.has_ansi_escapes() {
            let color = level_color(level);
            write!(
                writer,
                "\x1b[2m{time}\x1b[0m {color}{level:>5}\x1b[0m \x1b[2m{origin}:\x1b[0m "
            )?;
        } else {
            write!(writer, "{time} {level:>5} {origin}: ")?;
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_color(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "\x1b[1;31m",
        Level::WARN => "\x1b[1;33m",
        Level::INFO => "\x1b[1;32m",
        Level::DEBUG => "\x1b[1;34m",
        Level::TRACE => "\x1b[1;35m",
    }
}

fn build_filter(filter: Option<&str>) -> Result<EnvFilter> {
    match filter {
        Some(directive) => EnvFilter::try_new(directive)
            .with_context(|| format!("invalid log filter '{directive}'")),
        None => Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))),
    }
}

/// Installs the global subscriber. Call once at startup.
///
/// # Errors
///
/// Fails on a malformed filter, an unopenable log file, or a second call.
pub fn init_logging(options: &LogOptions) -> Result<()> {
    let (filter, handle) = reload::Layer::new(build_filter(options.filter.as_deref())?);

    let file_layer = match &options.file {
        Some(path) => {
            let file = File::options()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("cannot open log file '{}'", path.display()))?;
            Some(
                tracing_subscriber::fmt::layer()
                    .event_format(CalcFmt)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
        }
        None => None,
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .event_format(CalcFmt)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .context("logging already initialized")?;

    let _ = FILTER_HANDLE.set(handle);
    Ok(())
}

/// Replaces the active filter, e.g. `debug` or `tip_core=debug`.
pub fn set_log_level(filter: &str) -> Result<()> {
    let handle = FILTER_HANDLE
        .get()
        .context("logging not yet initialized")?;
    handle
        .reload(build_filter(Some(filter))?)
        .context("filter reload failed")
}
