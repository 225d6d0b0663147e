//! Config subcommand handlers.

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

use super::util;

fn render_config(cfg: &Config) -> Result<String, CliError> {
    toml::to_string_pretty(cfg).map_err(|e| CliError::Serialize(e.to_string()))
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Show => {
            let cfg = config::load_config()?;
            let out = output::render_single(
                &global.output(),
                &cfg,
                |c| render_config(c).unwrap_or_default(),
                |c| {
                    c.catalog
                        .as_ref()
                        .map_or_else(|| "built-in".into(), |p| p.display().to_string())
                },
            )?;
            output::print_output(out.trim_end(), global.quiet);
            Ok(())
        }

        ConfigCommand::Init { force } => {
            let path = config::config_path();
            if path.exists()
                && !force
                && !util::confirm(
                    &format!("Overwrite existing config at {}?", path.display()),
                    false,
                )?
            {
                return Err(CliError::ConfigExists {
                    path: path.display().to_string(),
                });
            }

            let written = config::save_config(&Config::default())?;
            tracing::info!(path = %written.display(), "wrote default configuration");
            output::print_notice(
                &format!("✓ Wrote default configuration to {}", written.display()),
                global.quiet,
            );
            Ok(())
        }
    }
}
