//! Configuration handling for dbml_builder

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};

/// Load configuration from a TOML file
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
    let path = path.as_ref();
    let config_str = fs::read_to_string(path).map_err(|e| {
        Error::ConfigError(format!("Failed to read config file {}: {}", path.display(), e))
    })?;

    let config: Config = toml::from_str(&config_str)
        .map_err(|e| Error::ConfigError(format!("Failed to parse config file: {}", e)))?;

    Ok(config)
}

/// Represents the complete dbml_builder configuration
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub python: PythonConfig,
    pub generator: GeneratorConfig,
    pub logging: Option<LoggingConfig>,
    pub patches: PatchesConfig,
}

/// Python interpreter used to run pydbml and omymodels
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct PythonConfig {
    pub interpreter: String,
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            interpreter: "python3".to_string(),
        }
    }
}

/// Model generation behavior
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Forward the code generator's own console chatter to the debug log
    /// instead of discarding it
    pub show_diagnostics: bool,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
    pub format: String,
    pub console: bool,
    pub include_timestamps: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            format: "text".to_string(),
            console: true,
            include_timestamps: true,
        }
    }
}

/// Extra text rewrites applied after the built-in fix-ups
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
#[serde(default)]
pub struct PatchesConfig {
    pub ddl: Vec<PatchRuleConfig>,
    pub schema: Vec<PatchRuleConfig>,
    pub orm: Vec<PatchRuleConfig>,
}

/// A single regex rewrite
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PatchRuleConfig {
    pub pattern: String,
    #[serde(default)]
    pub replacement: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.python.interpreter, "python3");
        assert!(!config.generator.show_diagnostics);
        assert!(config.logging.is_none());
        assert!(config.patches.orm.is_empty());
    }

    #[test]
    fn full_config_parses() {
        let config_str = r###"
        [python]
        interpreter = ".venv/bin/python"

        [generator]
        show_diagnostics = true

        [logging]
        level = "debug"
        format = "json"

        [patches]
        orm = [
          { pattern = "from gino import Gino", replacement = "from app.db import db" },
        ]
        schema = [{ pattern = "\\bOptional\\b" }]
        "###;

        let config: Config = toml::from_str(config_str).expect("Failed to parse test config");

        assert_eq!(config.python.interpreter, ".venv/bin/python");
        assert!(config.generator.show_diagnostics);
        let logging = config.logging.unwrap();
        assert_eq!(logging.level, "debug");
        assert_eq!(logging.format, "json");
        assert!(logging.console);
        assert_eq!(config.patches.orm[0].replacement, "from app.db import db");
        assert_eq!(config.patches.schema[0].replacement, "");
        assert!(config.patches.ddl.is_empty());
    }

    #[test]
    fn missing_config_file_is_config_error() {
        let err = load_from_file("does/not/exist.toml").unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
