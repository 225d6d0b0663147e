//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use resetdex_config::ConfigError;
use resetdex_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Catalog ──────────────────────────────────────────────────────
    #[error("Device '{id}' not found")]
    #[diagnostic(
        code(resetdex::not_found),
        help("Run: resetdex list -o plain to see available device ids")
    )]
    NotFound { id: String },

    #[error("Catalog {source_name} is invalid: {message}")]
    #[diagnostic(
        code(resetdex::catalog_invalid),
        help("Catalog files hold a [[devices]] array; each entry needs a unique `id`.")
    )]
    CatalogInvalid {
        source_name: String,
        message: String,
    },

    #[error("Cannot read catalog at {path}")]
    #[diagnostic(
        code(resetdex::catalog_unreadable),
        help("Check the --catalog flag or the `catalog` key in your config file.")
    )]
    CatalogUnreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(resetdex::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration file already exists")]
    #[diagnostic(
        code(resetdex::config_exists),
        help("Use --force to overwrite it.\nPath: {path}")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(resetdex::config))]
    Config(Box<figment::Error>),

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    #[diagnostic(code(resetdex::serialize))]
    Serialize(String),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::CatalogInvalid { .. } | Self::ConfigExists { .. } => {
                exit_code::USAGE
            }
            _ => exit_code::GENERAL,
        }
    }
}

// ── Library errors → CliError ────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::DeviceNotFound { id } => CliError::NotFound { id },
            CoreError::Parse {
                source_name,
                message,
            } => CliError::CatalogInvalid {
                source_name,
                message,
            },
            CoreError::DuplicateId { source_name, id } => CliError::CatalogInvalid {
                source_name,
                message: format!("duplicate device id '{id}'"),
            },
            CoreError::Io { path, source } => CliError::CatalogUnreadable {
                path: path.display().to_string(),
                source,
            },
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Catalog(e) => e.into(),
            ConfigError::Io(e) => CliError::Io(e),
            ConfigError::Serialization(e) => CliError::Serialize(e.to_string()),
        }
    }
}
