//! Logging utilities for dbml_builder
//!
//! This module provides logging setup and configuration.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::{Error, Result};

/// Initialize logging based on configuration
///
/// Without a `[logging]` section, events at `info` and above go to stderr.
/// `verbose` raises the crate's level to `debug` whatever the config says.
/// Console output always goes to stderr so stdout only carries command results.
pub fn init_logging(config: Option<&LoggingConfig>, verbose: bool) -> Result<()> {
    let defaults = LoggingConfig::default();
    let config = config.unwrap_or(&defaults);

    let level = if verbose {
        Level::DEBUG
    } else {
        parse_level(&config.level)
    };

    let directive: Directive = format!("dbml_builder={}", level)
        .parse()
        .map_err(|e| Error::ConfigError(format!("Invalid log directive: {}", e)))?;
    let env_filter = EnvFilter::from_default_env().add_directive(directive);

    let writer = if let Some(file_path) = &config.file {
        if let Some(parent) = Path::new(file_path).parent() {
            std::fs::create_dir_all(parent)?;
        }
        BoxMakeWriter::new(Mutex::new(File::create(file_path)?))
    } else if config.console {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        return Ok(());
    };

    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(writer);
    let json = config.format.eq_ignore_ascii_case("json");

    let installed = match (json, config.include_timestamps) {
        (true, true) => tracing::subscriber::set_global_default(builder.json().finish()),
        (true, false) => {
            tracing::subscriber::set_global_default(builder.json().without_time().finish())
        }
        (false, true) => tracing::subscriber::set_global_default(builder.finish()),
        (false, false) => {
            tracing::subscriber::set_global_default(builder.without_time().finish())
        }
    };

    installed.map_err(|e| Error::Unknown(e.to_string()))
}

fn parse_level(level: &str) -> Level {
    match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
