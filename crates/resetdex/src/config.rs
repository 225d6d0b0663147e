//! CLI configuration: a thin wrapper around `resetdex_config`.
//!
//! Re-exports the shared types and fills `GlobalOpts` gaps from the config
//! file, so flags always win over `[defaults]`.

use clap::ValueEnum;

use resetdex_core::Catalog;

use crate::cli::{ColorMode, GlobalOpts, OutputFormat};
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use resetdex_config::{Config, config_path, load_config, load_config_or_default, save_config};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Fill unset output/color flags from `[defaults]`.
pub fn apply_defaults(global: &mut GlobalOpts, cfg: &Config) {
    if global.output.is_none() {
        global.output = OutputFormat::from_str(&cfg.defaults.output, true).ok();
    }
    if global.color.is_none() {
        global.color = ColorMode::from_str(&cfg.defaults.color, true).ok();
    }
}

/// Load the catalog selected by `--catalog`, the config file, or the
/// built-in table, in that order.
pub fn load_catalog(global: &GlobalOpts, cfg: &Config) -> Result<Catalog, CliError> {
    let catalog = resetdex_config::resolve_catalog(global.catalog.as_deref(), cfg)?;
    tracing::debug!(devices = catalog.len(), "catalog ready");
    Ok(catalog)
}
