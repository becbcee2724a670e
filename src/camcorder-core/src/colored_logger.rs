//! Colored logging with per-command prefixes
//!
//! A tracing formatter that prefixes each line with a timestamp and a
//! colored tag naming the command that produced it.

use owo_colors::{OwoColorize, Style};
use std::fmt;
use std::io;
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::{
    format::{FormatEvent, FormatFields, Writer},
    FmtContext,
};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::EnvFilter;

/// Component identifier for prefixing logs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Main,
    Record,
    Plan,
    Check,
}

impl Component {
    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Main => "MAIN",
            Component::Record => "RECORD",
            Component::Plan => "PLAN",
            Component::Check => "CHECK",
        }
    }

    pub fn color_style(&self) -> Style {
        match self {
            Component::Main => Style::new().cyan().bold(),
            Component::Record => Style::new().green().bold(),
            Component::Plan => Style::new().yellow().bold(),
            Component::Check => Style::new().magenta().bold(),
        }
    }
}

pub struct ColoredFormatter {
    pub component: Component,
}

impl<S, N> FormatEvent<S, N> for ColoredFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let now = chrono::Local::now();
        write!(writer, "{} ", now.format("%H:%M:%S").dimmed())?;

        let prefix = format!("[{:6}]", self.component.as_str());
        write!(writer, "{} ", prefix.style(self.component.color_style()))?;

        match *event.metadata().level() {
            Level::ERROR => write!(writer, "{} ", "ERROR".red().bold())?,
            Level::WARN => write!(writer, "{} ", "WARN ".yellow().bold())?,
            Level::INFO => write!(writer, "{} ", "INFO ".green().bold())?,
            Level::DEBUG => write!(writer, "{} ", "DEBUG".blue().bold())?,
            Level::TRACE => write!(writer, "{} ", "TRACE".dimmed().bold())?,
        }

        ctx.field_format().format_fields(writer.by_ref(), event)?;

        writeln!(writer)
    }
}

/// Level filter for a command.
///
/// Directives from `env` (the value of `RUST_LOG`) win when present and
/// non-empty. Otherwise the level is INFO, or DEBUG when `verbose` is set.
pub fn build_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .parse_lossy(env.unwrap_or_default())
}

/// Initialize colored logging for a command
///
/// Logs go to stderr so command output on stdout stays clean.
pub fn init_component_logger(component: Component, verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(ColoredFormatter { component })
        .with_writer(io::stderr);

    tracing_subscriber::registry()
        .with(build_filter(verbose, env.as_deref()))
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
