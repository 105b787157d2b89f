//! Formatting options with TOML config-file support.
//!
//! Merges settings from three sources (highest precedence first):
//! 1. CLI flags
//! 2. Config file (`~/.config/plume/config.toml` or `$XDG_CONFIG_HOME/plume/config.toml`)
//! 3. Built-in defaults (everything off)
//!
//! Options are resolved once and are immutable for the life of a stream.

use std::fmt;
use std::path::PathBuf;

use serde::Deserialize;

use crate::cli::Cli;
use crate::error::PlumeError;

/// A caller-supplied full-line formatter.
///
/// When configured, it replaces the built-in formatting entirely: it
/// receives the decoded record and its return value becomes the output line.
/// Invocation is unguarded — a panicking formatter propagates to the caller.
pub type LineFormatter = Box<dyn Fn(&serde_json::Value) -> String + Send + Sync>;

/// Formatting options, fixed at stream construction.
#[derive(Default)]
pub struct FormatOptions {
    /// Only rewrite the `time` field to ISO-8601; keep lines as JSON.
    pub time_only: bool,
    /// Print the level token before the timestamp bracket.
    pub level_first: bool,
    /// Emit ANSI colors even when the destination is not a terminal.
    pub force_color: bool,
    /// External full-line formatter; overrides every other option.
    pub formatter: Option<LineFormatter>,
}

impl fmt::Debug for FormatOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatOptions")
            .field("time_only", &self.time_only)
            .field("level_first", &self.level_first)
            .field("force_color", &self.force_color)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl FormatOptions {
    /// Build [`FormatOptions`] from CLI arguments, loading the config file
    /// if present.
    ///
    /// Merge precedence: CLI flags > config file > defaults. Flags only
    /// enable; a flag left off falls back to the file setting.
    pub fn from_cli(cli: &Cli) -> Result<Self, PlumeError> {
        let mut options = Self::default();

        let config_path = cli.config.clone().unwrap_or_else(default_config_path);
        if config_path.exists() {
            let file_config = FileConfig::load(&config_path)?;
            options.apply_file_config(&file_config);
        }

        if cli.time_only {
            options.time_only = true;
        }
        if cli.level_first {
            options.level_first = true;
        }
        if cli.force_color {
            options.force_color = true;
        }

        Ok(options)
    }

    fn apply_file_config(&mut self, file: &FileConfig) {
        if let Some(time_only) = file.time_only {
            self.time_only = time_only;
        }
        if let Some(level_first) = file.level_first {
            self.level_first = level_first;
        }
        if let Some(force_color) = file.force_color {
            self.force_color = force_color;
        }
    }
}

/// Default config file path: `$XDG_CONFIG_HOME/plume/config.toml` or
/// `~/.config/plume/config.toml`.
fn default_config_path() -> PathBuf {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("plume").join("config.toml")
    } else if let Some(home) = std::env::var_os("HOME") {
        PathBuf::from(home)
            .join(".config")
            .join("plume")
            .join("config.toml")
    } else {
        PathBuf::from(".config/plume/config.toml")
    }
}

/// Config file structure (TOML deserialization).
#[derive(Debug, Deserialize)]
struct FileConfig {
    time_only: Option<bool>,
    level_first: Option<bool>,
    force_color: Option<bool>,
}

impl FileConfig {
    fn load(path: &PathBuf) -> Result<Self, PlumeError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            PlumeError::Config(format!("cannot read config file {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }
}
