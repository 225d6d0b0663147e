//! `categories` command handler.

use serde::Serialize;
use tabled::Tabled;

use resetdex_core::Catalog;

use crate::cli::GlobalOpts;
use crate::error::CliError;
use crate::output;

#[derive(Serialize)]
struct CategoryCount {
    category: String,
    devices: usize,
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Devices")]
    devices: usize,
}

pub fn handle(catalog: &Catalog, global: &GlobalOpts) -> Result<(), CliError> {
    let counts: Vec<CategoryCount> = catalog
        .category_counts()
        .into_iter()
        .map(|(category, devices)| CategoryCount {
            category: category.to_owned(),
            devices,
        })
        .collect();

    let out = output::render_list(
        &global.output(),
        &counts,
        |c| CategoryRow {
            category: c.category.clone(),
            devices: c.devices,
        },
        |c| c.category.clone(),
    )?;
    output::print_output(&out, global.quiet);
    Ok(())
}
