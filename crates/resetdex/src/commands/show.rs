//! `show` command handler.

use std::fmt::Write;

use resetdex_core::view::{NOTES_HEADING, REFERENCES_HEADING};
use resetdex_core::{Catalog, DetailPanel};

use crate::cli::{ColorMode, GlobalOpts, ShowArgs};
use crate::error::CliError;
use crate::output::{self, Painter};

fn detail(panel: &DetailPanel, paint: Painter) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", paint.title(&panel.title));
    if let Some(ref subtitle) = panel.subtitle {
        let _ = writeln!(out, "{}", paint.muted(subtitle));
    }
    if !panel.chips.is_empty() {
        let _ = writeln!(out);
        for chip in &panel.chips {
            let _ = writeln!(out, "  • {chip}");
        }
    }

    for section in &panel.sections {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", paint.heading(&section.title));
        for step in &section.steps {
            let _ = writeln!(out, "  {:>2}. {}", step.number, step.text);
        }
    }

    if let Some(ref warning) = panel.warning {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", paint.warning(&format!("⚠ {NOTES_HEADING}")));
        let _ = writeln!(out, "  {}", paint.warning(warning));
    }

    if !panel.references.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", paint.heading(REFERENCES_HEADING));
        for (i, reference) in panel.references.iter().enumerate() {
            let url = if reference.is_openable() {
                reference.url.as_str()
            } else {
                "(no link)"
            };
            let _ = writeln!(out, "  [{}] {} {}", i + 1, reference.label, paint.muted(url));
        }
    }

    out.trim_end().to_owned()
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(catalog: &Catalog, args: &ShowArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let device = catalog.require(args.id.trim())?;
    let panel = DetailPanel::for_device(&device);
    let paint = Painter::new(&global.color());

    // Plain keeps the full text, just never styled.
    let out = output::render_single(
        &global.output(),
        &panel,
        |p| detail(p, paint),
        |p| detail(p, Painter::new(&ColorMode::Never)),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
