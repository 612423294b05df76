// Rust guideline compliant 2026-10-16

//! Configuration management for jsonfold.

use crate::error::{CliError, Result};
use jsonfold_core::{ArrayStrategy, MergeOptions};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config file looked up in the project root when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "jsonfold.toml";

/// Widest indent accepted from any source.
pub const MAX_INDENT: usize = 10;

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Settings for one jsonfold run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Input files, lowest precedence first.
    #[serde(default)]
    pub inputs: Vec<String>,

    /// Output file.
    #[serde(default = "default_output")]
    pub output: String,

    /// Drop missing inputs instead of failing.
    #[serde(default)]
    pub skip_missing: bool,

    /// Pretty-print the output.
    #[serde(default = "default_pretty")]
    pub pretty: bool,

    /// Report what would be written without writing.
    #[serde(default)]
    pub dry_run: bool,

    /// Keep `<output>.bak` when overwriting.
    #[serde(default)]
    pub backup: bool,

    /// Explicit indent width.
    #[serde(default)]
    pub indent: Option<usize>,

    /// Array combination policy.
    #[serde(default)]
    pub array_merge: ArrayStrategy,

    /// Log level: trace, debug, info, warn, error or off.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Hold an advisory lock on the output while merging.
    #[serde(default)]
    pub lock: bool,
}

fn default_output() -> String {
    "merged.json".to_string()
}

fn default_pretty() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            inputs: Vec::new(),
            output: default_output(),
            skip_missing: false,
            pretty: default_pretty(),
            dry_run: false,
            backup: false,
            indent: None,
            array_merge: ArrayStrategy::default(),
            log_level: default_log_level(),
            lock: false,
        }
    }
}

/// Values given on the command line. `None` and `false` leave the loaded
/// configuration untouched.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    /// Positional inputs; replace configured inputs when non-empty.
    pub inputs: Vec<String>,
    /// `--output`.
    pub output: Option<String>,
    /// `--skip-missing`.
    pub skip_missing: bool,
    /// `--compact`.
    pub compact: bool,
    /// `--dry-run`.
    pub dry_run: bool,
    /// `--backup`.
    pub backup: bool,
    /// `--indent`.
    pub indent: Option<usize>,
    /// `--array-merge`.
    pub array_merge: Option<ArrayStrategy>,
    /// `--log-level`.
    pub log_level: Option<String>,
    /// `--lock`.
    pub lock: bool,
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. `explicit` config file, or `jsonfold.toml` in `root` if present
    /// 3. Environment variables with `JSONFOLD_` prefix
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config file is missing or unreadable
    /// - The config file contains invalid TOML or unknown keys
    /// - An environment variable has an invalid value
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Some(root.join(DEFAULT_CONFIG_FILE)).filter(|p| p.is_file()),
        };

        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Loads configuration, applies command-line overrides and validates.
    ///
    /// # Errors
    ///
    /// Any error from [`Config::load`], or a validation failure.
    pub fn resolve(root: &Path, explicit: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let mut config = Self::load(root, explicit)?;
        config.apply_overrides(overrides);
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| {
            CliError::Config(format!("invalid config file {}: {}", path.display(), e))
        })
    }

    /// Applies `JSONFOLD_*` environment variable overrides.
    ///
    /// Supported environment variables:
    /// - `JSONFOLD_OUTPUT` - Output path
    /// - `JSONFOLD_SKIP_MISSING`, `JSONFOLD_PRETTY`, `JSONFOLD_DRY_RUN`,
    ///   `JSONFOLD_BACKUP`, `JSONFOLD_LOCK` - true/false
    /// - `JSONFOLD_INDENT` - Indent width
    /// - `JSONFOLD_ARRAY_MERGE` - replace/concat
    /// - `JSONFOLD_LOG` - Log level
    ///
    /// # Errors
    ///
    /// Returns an error if a value cannot be parsed.
    fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("JSONFOLD_OUTPUT") {
            self.output = val;
        }

        for (key, field) in [
            ("JSONFOLD_SKIP_MISSING", &mut self.skip_missing),
            ("JSONFOLD_PRETTY", &mut self.pretty),
            ("JSONFOLD_DRY_RUN", &mut self.dry_run),
            ("JSONFOLD_BACKUP", &mut self.backup),
            ("JSONFOLD_LOCK", &mut self.lock),
        ] {
            if let Some(val) = lookup(key) {
                *field = val
                    .parse()
                    .map_err(|_| CliError::Config(format!("{key} must be true or false")))?;
            }
        }

        if let Some(val) = lookup("JSONFOLD_INDENT") {
            let indent = val.parse().map_err(|_| {
                CliError::Config("JSONFOLD_INDENT must be a non-negative number".to_string())
            })?;
            self.indent = Some(indent);
        }

        if let Some(val) = lookup("JSONFOLD_ARRAY_MERGE") {
            self.array_merge = match val.as_str() {
                "replace" => ArrayStrategy::Replace,
                "concat" => ArrayStrategy::Concat,
                _ => {
                    return Err(CliError::Config(
                        "JSONFOLD_ARRAY_MERGE must be replace or concat".to_string(),
                    ))
                }
            };
        }

        if let Some(val) = lookup("JSONFOLD_LOG") {
            self.log_level = val;
        }

        Ok(())
    }

    /// Applies command-line overrides on top of file and environment values.
    pub fn apply_overrides(&mut self, overrides: Overrides) {
        if !overrides.inputs.is_empty() {
            self.inputs = overrides.inputs;
        }
        if let Some(output) = overrides.output {
            self.output = output;
        }
        self.skip_missing |= overrides.skip_missing;
        self.dry_run |= overrides.dry_run;
        self.backup |= overrides.backup;
        self.lock |= overrides.lock;
        if overrides.compact {
            self.pretty = false;
        }
        if let Some(indent) = overrides.indent {
            self.indent = Some(indent);
        }
        if let Some(strategy) = overrides.array_merge {
            self.array_merge = strategy;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `output` is empty
    /// - `indent` is larger than [`MAX_INDENT`]
    /// - `log_level` is not a known level
    pub fn validate(&self) -> Result<()> {
        if self.output.trim().is_empty() {
            return Err(CliError::Config("output must not be empty".to_string()));
        }

        if let Some(indent) = self.indent {
            if indent > MAX_INDENT {
                return Err(CliError::Config(format!(
                    "indent must be 0-{MAX_INDENT}, got {indent}"
                )));
            }
        }

        let level = self.log_level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(CliError::Config(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        Ok(())
    }

    /// Builds the immutable option record handed to the merge.
    #[must_use]
    pub fn to_merge_options(&self) -> MergeOptions {
        MergeOptions {
            inputs: self.inputs.clone(),
            output: self.output.clone(),
            skip_missing: self.skip_missing,
            pretty: self.pretty,
            dry_run: self.dry_run,
            backup: self.backup,
            indent: self.indent,
            array_strategy: self.array_merge,
        }
    }
}
