//! Configuration file support for license-report.
//!
//! Provides YAML-based configuration through `license-report.config.yml`
//! files, and merges file values with command-line overrides into the
//! effective [`Settings`] of a run.

use anyhow::bail;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::warn;

use crate::adapters::outbound::filesystem::{
    DEFAULT_CONFIDENCE_THRESHOLD, DEFAULT_GIT_REMOTES, DEFAULT_MANIFEST,
};
use crate::application::dto::ReportFormat;
use crate::report_generation::services::IgnoreFilter;
use crate::shared::error::ConfigError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "license-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub ignore: Option<Vec<String>>,
    pub git_remotes: Option<Vec<String>>,
    pub confidence_threshold: Option<f64>,
    pub manifest: Option<PathBuf>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> std::result::Result<ConfigFile, ConfigError> {
    let invalid = |details: String| ConfigError::InvalidConfigFile {
        path: path.to_path_buf(),
        details,
    };

    let content = std::fs::read_to_string(path).map_err(|e| {
        invalid(format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            e
        ))
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).map_err(|e| {
        invalid(format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            e
        ))
    })?;

    validate_config(&config).map_err(|e| invalid(e.to_string()))?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> std::result::Result<Option<ConfigFile>, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        format.parse::<ReportFormat>()?;
    }

    if let Some(threshold) = config.confidence_threshold {
        validate_threshold(threshold)?;
    }

    if let Some(ref remotes) = config.git_remotes {
        if remotes.iter().any(|r| r.trim().is_empty()) {
            bail!(
                "git_remotes entries must not be empty.\n\n\
                 💡 Hint: List remote names such as \"origin\" or \"upstream\"."
            );
        }
    }

    if let Some(ref ignore) = config.ignore {
        IgnoreFilter::new(ignore)?;
    }
    Ok(())
}

fn validate_threshold(threshold: f64) -> std::result::Result<f64, ConfigError> {
    if (0.0..=1.0).contains(&threshold) {
        Ok(threshold)
    } else {
        Err(ConfigError::InvalidThreshold { value: threshold })
    }
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        warn!("Unknown config field '{}' will be ignored", key);
    }
}

/// Values given on the command line. `None` and empty lists defer to the
/// config file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub table: bool,
    pub md_table: bool,
    pub ignore: Vec<String>,
    pub git_remotes: Vec<String>,
    pub confidence_threshold: Option<f64>,
    pub manifest: Option<PathBuf>,
}

/// Effective settings of a run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: ReportFormat,
    pub ignore_patterns: Vec<String>,
    pub git_remotes: Vec<String>,
    pub confidence_threshold: f64,
    pub manifest: PathBuf,
}

impl Settings {
    /// Merges command-line values over the config file
    ///
    /// Scalars from the command line win; ignore patterns from both sources
    /// are combined. Everything is validated here so that a bad invocation is
    /// rejected before any dependency is resolved.
    pub fn resolve(
        cli: CliOverrides,
        config: Option<ConfigFile>,
    ) -> std::result::Result<Self, ConfigError> {
        let config = config.unwrap_or_default();

        let format = match ReportFormat::from_flags(cli.table, cli.md_table)? {
            Some(format) => format,
            None => match config.format {
                Some(ref value) => value.parse()?,
                None => ReportFormat::default(),
            },
        };

        let mut ignore_patterns = config.ignore.unwrap_or_default();
        for pattern in cli.ignore {
            if !ignore_patterns.contains(&pattern) {
                ignore_patterns.push(pattern);
            }
        }
        IgnoreFilter::new(&ignore_patterns).map_err(|e| ConfigError::InvalidIgnorePattern {
            details: e.to_string(),
        })?;

        let git_remotes = if !cli.git_remotes.is_empty() {
            cli.git_remotes
        } else {
            config
                .git_remotes
                .filter(|remotes| !remotes.is_empty())
                .unwrap_or_else(|| DEFAULT_GIT_REMOTES.iter().map(|r| r.to_string()).collect())
        };

        let confidence_threshold = validate_threshold(
            cli.confidence_threshold
                .or(config.confidence_threshold)
                .unwrap_or(DEFAULT_CONFIDENCE_THRESHOLD),
        )?;

        let manifest = cli
            .manifest
            .or(config.manifest)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_MANIFEST));

        Ok(Self {
            format,
            ignore_patterns,
            git_remotes,
            confidence_threshold,
            manifest,
        })
    }
}
