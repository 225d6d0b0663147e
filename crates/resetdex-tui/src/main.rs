//! `resetdex-tui`: terminal browser for device factory-reset procedures.
//!
//! Search by model, category or summary, narrow the list with the category
//! selector and the reset-method / connectivity chip groups, and open a
//! device to read its numbered reset steps, notes and reference links.
//!
//! Logs go to a file (default in the platform data directory) so they
//! never corrupt the terminal.

mod action;
mod app;
mod component;
mod event;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::path::{Path, PathBuf};

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::app::App;

/// Terminal browser for device factory-reset procedures.
#[derive(Parser, Debug)]
#[command(name = "resetdex-tui", version, about)]
struct Cli {
    /// Catalog file (TOML or JSON) to browse instead of the built-in one
    #[arg(long, env = "RESETDEX_CATALOG")]
    catalog: Option<PathBuf>,

    /// Log file path (defaults to the platform data directory)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// File-based tracing. Nothing may be written to stdout/stderr while the
/// terminal is in raw mode. Hold the returned guard until exit so the
/// writer flushes.
fn setup_tracing(log_file: &Path, verbose: u8) -> WorkerGuard {
    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "resetdex_tui={log_level},resetdex_core={log_level},resetdex_config={log_level}"
        ))
    });

    let log_dir = log_file.parent().unwrap_or(Path::new("."));
    let log_filename = log_file
        .file_name()
        .unwrap_or(std::ffi::OsStr::new("resetdex-tui.log"));

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    guard
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Hooks go in before the terminal is touched.
    tui::install_hooks()?;

    // A broken config file is reported, not replaced by defaults.
    let cfg = resetdex_config::load_config().wrap_err("invalid configuration")?;

    // Priority: --log-file > config > platform default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| cfg.tui.log_file.clone())
        .unwrap_or_else(resetdex_config::default_log_path);
    if let Some(dir) = log_file.parent() {
        std::fs::create_dir_all(dir)
            .wrap_err_with(|| format!("creating log directory {}", dir.display()))?;
    }
    let _log_guard = setup_tracing(&log_file, cli.verbose);

    // Load before entering raw mode so a bad catalog prints a normal error.
    let catalog = resetdex_config::resolve_catalog(cli.catalog.as_deref(), &cfg)
        .wrap_err("failed to load device catalog")?;

    info!(
        devices = catalog.len(),
        modal = cfg.tui.modal,
        log_file = %log_file.display(),
        "starting resetdex-tui"
    );

    let mut app = App::new(catalog, cfg.tui);
    app.run().await?;

    Ok(())
}
