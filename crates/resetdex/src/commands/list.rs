//! `list` command handler.

use tabled::Tabled;

use resetdex_core::view::Card;
use resetdex_core::{CardList, Catalog, filter};

use crate::cli::{GlobalOpts, ListArgs, OutputFormat};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Category")]
    badge: String,
    #[tabled(rename = "Model")]
    title: String,
    #[tabled(rename = "Summary")]
    summary: String,
    #[tabled(rename = "Connectivity")]
    connectivity: String,
}

impl From<&Card> for CardRow {
    fn from(c: &Card) -> Self {
        Self {
            id: c.id.to_string(),
            badge: c.badge.clone(),
            title: c.title.clone(),
            summary: c.summary.clone(),
            connectivity: c.connectivity.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(catalog: &Catalog, args: &ListArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let state = util::filter_state(args);
    let matched = filter(catalog, &state);
    let format = global.output();

    // Tables show the empty-state notice; structured formats emit an
    // empty document instead.
    let out = match (CardList::build(&matched), &format) {
        (CardList::Empty { notice }, OutputFormat::Table) => notice.to_owned(),
        _ => output::render_list(
            &format,
            &matched,
            |d| CardRow::from(&Card::new(d)),
            |d| d.id.to_string(),
        )?,
    };
    output::print_output(&out, global.quiet);
    Ok(())
}
