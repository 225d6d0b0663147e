//! `tags` command handler.

use serde::Serialize;
use strum::IntoEnumIterator;
use tabled::Tabled;

use resetdex_core::{Catalog, TagKind, tag_label};

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct TagCount {
    kind: TagKind,
    tag: String,
    label: String,
    devices: usize,
}

#[derive(Tabled)]
struct TagRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Tag")]
    tag: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Devices")]
    devices: usize,
}

impl From<&TagCount> for TagRow {
    fn from(t: &TagCount) -> Self {
        Self {
            kind: t.kind.to_string(),
            tag: t.tag.clone(),
            label: t.label.clone(),
            devices: t.devices,
        }
    }
}

pub fn handle(catalog: &Catalog, global: &GlobalOpts) -> Result<(), CliError> {
    let counts: Vec<TagCount> = TagKind::iter()
        .flat_map(|kind| {
            catalog
                .tag_counts(kind)
                .into_iter()
                .map(move |(tag, devices)| TagCount {
                    kind,
                    tag: tag.to_owned(),
                    label: tag_label(tag).to_owned(),
                    devices,
                })
        })
        .collect();

    let out = output::render_list(
        &global.output(),
        &counts,
        |t| TagRow::from(t),
        |t| format!("{}\t{}", t.kind, t.tag),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
