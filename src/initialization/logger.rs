//! Logger initialization.
//!
//! `--log-level` sets the baseline for every target. `RUST_LOG` directives are
//! applied on top of it, so a per-module directive such as
//! `rank_tracker::resolver=trace` wins for that module only.

use std::io::{self, Write};

use crate::config::LogFormat;
use crate::error_handling::InitializationError;
use colored::*;
use env_logger::fmt::Formatter;
use log::{LevelFilter, Record};

/// Dependencies that are noisy at `debug`.
const CLAMPED_MODULES: &[(&str, LevelFilter)] = &[
    ("sqlx", LevelFilter::Warn),
    ("reqwest", LevelFilter::Info),
    ("hyper", LevelFilter::Info),
    ("hyper_util", LevelFilter::Info),
    ("rustls", LevelFilter::Warn),
];

/// Initializes the logger with the specified level and format.
///
/// Supports plain text (with colors and emojis) and one JSON object per line.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Debug output from the resolver only, info everywhere else
/// RUST_LOG=rank_tracker::resolver=debug rank_tracker check --brand-url example.com "seo agency"
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    colored::control::set_override(true);

    let directives = std::env::var("RUST_LOG").ok();
    logger_builder(level, format, directives.as_deref())
        .try_init()
        .map_err(InitializationError::from)
}

fn logger_builder(
    level: LevelFilter,
    format: LogFormat,
    directives: Option<&str>,
) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level);
    for (module, clamp) in CLAMPED_MODULES {
        builder.filter_module(module, (*clamp).min(level));
    }
    // Later directives replace earlier ones for the same target
    if let Some(directives) = directives.filter(|d| !d.trim().is_empty()) {
        builder.parse_filters(directives);
    }

    match format {
        LogFormat::Json => builder.format(format_json),
        LogFormat::Plain => builder.format(format_plain),
    };
    builder
}

fn format_json(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    writeln!(
        buf,
        "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
        chrono::Utc::now().timestamp_millis(),
        record.level(),
        record.target(),
        serde_json::to_string(&record.args().to_string()).unwrap_or_else(|_| "\"\"".into())
    )
}

fn format_plain(buf: &mut Formatter, record: &Record) -> io::Result<()> {
    let level = record.level();
    let (emoji, colored_level) = match level {
        log::Level::Error => ("❌", level.to_string().red()),
        log::Level::Warn => ("⚠️", level.to_string().yellow()),
        log::Level::Info => ("✔️", level.to_string().green()),
        log::Level::Debug => ("🔍", level.to_string().blue()),
        log::Level::Trace => ("🔬", level.to_string().purple()),
    };
    writeln!(
        buf,
        "{} {} [{}] {}",
        emoji,
        record.target().cyan(),
        colored_level,
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Metadata};

    fn enabled(logger: &env_logger::Logger, target: &str, level: Level) -> bool {
        logger.enabled(&Metadata::builder().target(target).level(level).build())
    }

    #[test]
    fn test_cli_level_applies_without_directives() {
        let logger = logger_builder(LevelFilter::Info, LogFormat::Plain, None).build();
        assert!(enabled(&logger, "rank_tracker::run", Level::Info));
        assert!(!enabled(&logger, "rank_tracker::run", Level::Debug));
    }

    #[test]
    fn test_rust_log_module_directive_wins_for_crate() {
        let logger = logger_builder(
            LevelFilter::Info,
            LogFormat::Plain,
            Some("rank_tracker::resolver=debug"),
        )
        .build();
        assert!(enabled(&logger, "rank_tracker::resolver", Level::Debug));
        assert!(!enabled(&logger, "rank_tracker::run", Level::Debug));
    }

    #[test]
    fn test_dependencies_clamped_at_debug() {
        let logger = logger_builder(LevelFilter::Debug, LogFormat::Json, None).build();
        assert!(enabled(&logger, "rank_tracker::search", Level::Debug));
        assert!(!enabled(&logger, "sqlx::query", Level::Info));
        assert!(!enabled(&logger, "reqwest::connect", Level::Debug));
    }

    #[test]
    fn test_clamp_never_raises_verbosity() {
        let logger = logger_builder(LevelFilter::Error, LogFormat::Plain, None).build();
        assert!(!enabled(&logger, "reqwest::connect", Level::Info));
    }

    #[test]
    fn test_init_logger_twice_fails_second_time() {
        let _ = init_logger_with(LevelFilter::Info, LogFormat::Plain);
        assert!(init_logger_with(LevelFilter::Debug, LogFormat::Json).is_err());
    }
}
