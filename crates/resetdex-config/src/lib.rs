//! Shared configuration for the resetdex CLI and TUI.
//!
//! A single TOML file (plus `RESETDEX_*` environment overrides) selects
//! the catalog source and carries per-frontend defaults. Both binaries
//! depend on this crate; the CLI layers its `GlobalOpts` on top.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use resetdex_core::{Catalog, CoreError};

/// Environment variable prefix for overrides. Nested keys use a double
/// underscore: `RESETDEX_TUI__MODAL=false`.
pub const ENV_PREFIX: &str = "RESETDEX_";

const OUTPUT_FORMATS: &[&str] = &["table", "json", "json-compact", "yaml", "plain"];
const COLOR_MODES: &[&str] = &["auto", "always", "never"];

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error(transparent)]
    Catalog(#[from] CoreError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration shared by CLI and TUI.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// External catalog file. The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<PathBuf>,

    /// CLI output defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Terminal UI settings.
    #[serde(default)]
    pub tui: TuiSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TuiSettings {
    /// Show device details in a modal overlay. When false (or when the
    /// terminal is too small) details render inline beside the list.
    #[serde(default = "default_true")]
    pub modal: bool,

    /// Log file path. Defaults to the platform data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,

    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,

    #[serde(default = "default_render_rate")]
    pub render_rate_ms: u64,
}

impl Default for TuiSettings {
    fn default() -> Self {
        Self {
            modal: true,
            log_file: None,
            tick_rate_ms: default_tick_rate(),
            render_rate_ms: default_render_rate(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_tick_rate() -> u64 {
    250
}
fn default_render_rate() -> u64 {
    33
}

impl Config {
    /// Reject values the frontends cannot act on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !OUTPUT_FORMATS.contains(&self.defaults.output.as_str()) {
            return Err(ConfigError::Validation {
                field: "defaults.output".into(),
                reason: format!(
                    "expected one of {}, got '{}'",
                    OUTPUT_FORMATS.join(", "),
                    self.defaults.output
                ),
            });
        }
        if !COLOR_MODES.contains(&self.defaults.color.as_str()) {
            return Err(ConfigError::Validation {
                field: "defaults.color".into(),
                reason: format!(
                    "expected one of {}, got '{}'",
                    COLOR_MODES.join(", "),
                    self.defaults.color
                ),
            });
        }
        if self.tui.tick_rate_ms == 0 || self.tui.render_rate_ms == 0 {
            return Err(ConfigError::Validation {
                field: "tui".into(),
                reason: "tick_rate_ms and render_rate_ms must be positive".into(),
            });
        }
        Ok(())
    }
}

// ── Paths ───────────────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("com", "resetdex", "resetdex").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

/// Default TUI log file location.
pub fn default_log_path() -> PathBuf {
    ProjectDirs::from("com", "resetdex", "resetdex").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("resetdex-tui.log");
            p
        },
        |dirs| dirs.data_local_dir().join("resetdex-tui.log"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("resetdex");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load config from an explicit file + environment. A missing file is
/// not an error; defaults apply.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed(ENV_PREFIX).split("__"));

    let config: Config = figment.extract()?;
    config.validate()?;
    debug!(path = %path.display(), "configuration loaded");
    Ok(config)
}

/// Load config, returning a default if the file doesn't exist or is
/// unusable. The discarded error is logged.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_else(|err| {
        warn!(error = %err, path = %config_path().display(), "ignoring unusable configuration");
        Config::default()
    })
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Catalog resolution ──────────────────────────────────────────────

/// Pick the catalog: an explicit path wins, then the configured one,
/// then the built-in table.
pub fn resolve_catalog(explicit: Option<&Path>, cfg: &Config) -> Result<Catalog, ConfigError> {
    match explicit.or(cfg.catalog.as_deref()) {
        Some(path) => Ok(Catalog::load(path)?),
        None => Ok(Catalog::builtin()?),
    }
}
