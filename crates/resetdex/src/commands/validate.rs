//! `validate` command handler.
//!
//! Parse errors and duplicate ids fail the command; softer problems
//! (missing model, no instructions, blank steps) are reported as
//! warnings and leave the exit code at zero.

use std::fmt::Write;

use serde::Serialize;

use resetdex_core::{Catalog, Device};

use crate::cli::{GlobalOpts, ValidateArgs};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

#[derive(Debug, Serialize)]
struct ValidationReport {
    source: String,
    devices: usize,
    categories: usize,
    warnings: Vec<String>,
}

fn device_warnings(device: &Device) -> Vec<String> {
    let mut warnings = Vec::new();
    if device.model.trim().is_empty() {
        warnings.push(format!("{}: missing model", device.id));
    }
    if device.category.trim().is_empty() {
        warnings.push(format!("{}: missing category", device.id));
    }
    if device.instructions.is_empty() {
        warnings.push(format!("{}: no instruction groups", device.id));
    }
    for group in &device.instructions {
        if group.steps.iter().any(|s| s.trim().is_empty()) {
            warnings.push(format!("{}: blank step in '{}'", device.id, group.title));
        }
    }
    warnings
}

fn report(catalog: &Catalog, source: String) -> ValidationReport {
    ValidationReport {
        source,
        devices: catalog.len(),
        categories: catalog.categories().len(),
        warnings: catalog.iter().flat_map(|d| device_warnings(d)).collect(),
    }
}

fn summary(r: &ValidationReport) -> String {
    let mut out = format!(
        "{}: {} devices in {} categories",
        r.source, r.devices, r.categories
    );
    for warning in &r.warnings {
        let _ = write!(out, "\nwarning: {warning}");
    }
    out
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: &ValidateArgs, global: &GlobalOpts, cfg: &Config) -> Result<(), CliError> {
    let explicit = args.path.as_deref().or(global.catalog.as_deref());
    let (catalog, source) = match explicit.or(cfg.catalog.as_deref()) {
        Some(path) => (Catalog::load(path)?, path.display().to_string()),
        None => (Catalog::builtin()?, "built-in".to_owned()),
    };

    let r = report(&catalog, source);
    tracing::info!(devices = r.devices, warnings = r.warnings.len(), "catalog validated");

    let out = output::render_single(&global.output(), &r, summary, |r| r.devices.to_string())?;
    output::print_output(&out, global.quiet);
    Ok(())
}
